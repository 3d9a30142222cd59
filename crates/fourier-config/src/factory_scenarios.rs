//! Factory scenarios bundled with the library.
//!
//! Each one isolates a single idea: a clean tone, superposition, harmonic
//! content of the non-sinusoidal shapes, zero-padding, and truncation.

use crate::Scenario;

/// TOML content for factory scenarios, keyed by lookup name.
static FACTORY_SCENARIOS_TOML: &[(&str, &str)] = &[
    ("pure_tone", PURE_TONE),
    ("two_tone", TWO_TONE),
    ("triangle", TRIANGLE),
    ("square", SQUARE),
    ("zero_padded", ZERO_PADDED),
    ("truncated", TRUNCATED),
];

const PURE_TONE: &str = r#"
name = "Pure tone"
description = "One second of a 10 Hz sine; all energy lands in bin 10"
sample_rate = 256
duration = 1.0
shape = "sine"
secondary_amplitude = 0.0
nfft = 256
selected_bin = 10
"#;

const TWO_TONE: &str = r#"
name = "Two tone"
description = "10 Hz sine plus a half-amplitude 20 Hz sine"
sample_rate = 256
duration = 1.0
shape = "sine"
secondary_amplitude = 0.5
nfft = 256
selected_bin = 20
"#;

const TRIANGLE: &str = r#"
name = "Triangle"
description = "Odd harmonics falling off as 1/n^2"
sample_rate = 256
duration = 1.0
shape = "triangle"
secondary_amplitude = 0.0
nfft = 256
selected_bin = 30
"#;

const SQUARE: &str = r#"
name = "Square"
description = "Odd harmonics falling off as 1/n"
sample_rate = 256
duration = 1.0
shape = "square"
secondary_amplitude = 0.0
nfft = 256
selected_bin = 30
"#;

const ZERO_PADDED: &str = r#"
name = "Zero padded"
description = "256 samples padded to 512 points; bins are 0.5 Hz apart"
sample_rate = 256
duration = 1.0
shape = "sine"
secondary_amplitude = 0.5
nfft = 512
selected_bin = 10
"#;

const TRUNCATED: &str = r#"
name = "Truncated"
description = "Only the first 128 of 256 samples are transformed"
sample_rate = 256
duration = 1.0
shape = "sine"
secondary_amplitude = 0.0
nfft = 128
selected_bin = 10
"#;

/// All factory scenarios, in presentation order.
///
/// # Example
///
/// ```rust
/// use fourier_config::factory_scenarios;
///
/// let scenarios = factory_scenarios();
/// assert_eq!(scenarios.len(), 6);
/// ```
pub fn factory_scenarios() -> Vec<Scenario> {
    FACTORY_SCENARIOS_TOML
        .iter()
        .filter_map(|(_, toml)| Scenario::from_toml(toml).ok())
        .collect()
}

/// Get a factory scenario by lookup name or display name, case-insensitively.
///
/// # Example
///
/// ```rust
/// use fourier_config::get_factory_scenario;
///
/// let square = get_factory_scenario("square").unwrap();
/// assert_eq!(square.name, "Square");
/// assert!(get_factory_scenario("Zero padded").is_some());
/// assert!(get_factory_scenario("nope").is_none());
/// ```
pub fn get_factory_scenario(name: &str) -> Option<Scenario> {
    let wanted = name.to_lowercase();

    if let Some((_, toml)) = FACTORY_SCENARIOS_TOML
        .iter()
        .find(|(key, _)| key.to_lowercase() == wanted)
    {
        return Scenario::from_toml(toml).ok();
    }

    factory_scenarios()
        .into_iter()
        .find(|s| s.name.to_lowercase() == wanted)
}

/// Lookup names of all factory scenarios.
pub fn factory_scenario_names() -> Vec<&'static str> {
    FACTORY_SCENARIOS_TOML.iter().map(|(name, _)| *name).collect()
}

/// True if `name` resolves to a factory scenario.
pub fn is_factory_scenario(name: &str) -> bool {
    get_factory_scenario(name).is_some()
}
