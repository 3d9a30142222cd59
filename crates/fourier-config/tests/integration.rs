//! Integration tests for fourier-config.
//!
//! Scenarios are loaded, validated, and driven through the transform engine.

use fourier_config::{
    ConfigError, Scenario, factory_scenarios, get_factory_scenario, paths, validate_scenario,
};
use fourier_core::{Shape, compute_contributions, compute_spectrum, reconstruct_spectrum};
use tempfile::TempDir;

fn spectrum_of(scenario: &Scenario) -> fourier_core::Spectrum {
    let wave = scenario.waveform().unwrap();
    compute_spectrum(&wave.y, scenario.sample_rate, scenario.nfft).unwrap()
}

/// Every factory scenario validates and runs through the whole pipeline.
#[test]
fn factory_scenarios_run_end_to_end() {
    for scenario in factory_scenarios() {
        validate_scenario(&scenario).unwrap();

        let wave = scenario.waveform().unwrap();
        let spectrum = spectrum_of(&scenario);
        assert_eq!(spectrum.bins(), scenario.spectrum_bins(), "{}", scenario.name);

        let contributions = compute_contributions(&wave.y, scenario.selected_bin).unwrap();
        assert_eq!(contributions.len(), wave.len());

        // Contributions are taken over the signal itself; they sum to the
        // bin of a transform whose length matches the signal.
        let native = compute_spectrum(&wave.y, scenario.sample_rate, wave.len()).unwrap();
        let (re, im) = contributions.sum();
        assert_eq!(re, native.real[scenario.selected_bin], "{}", scenario.name);
        assert_eq!(im, native.imag[scenario.selected_bin], "{}", scenario.name);

        let synth = reconstruct_spectrum(&spectrum).unwrap();
        assert_eq!(synth.len(), scenario.nfft, "{}", scenario.name);
    }
}

/// The selected bin of the tonal scenarios is the spectral peak.
#[test]
fn selected_bin_is_peak_for_tonal_scenarios() {
    for name in ["pure_tone", "zero_padded", "truncated", "square", "triangle"] {
        let scenario = get_factory_scenario(name).unwrap();
        let spectrum = spectrum_of(&scenario);
        let expected = spectrum.bin_of(10.0).unwrap();
        assert_eq!(spectrum.peak_bin(), Some(expected), "{name}");
    }
}

/// The two-tone scenario selects the secondary tone at half the primary level.
#[test]
fn two_tone_selected_bin_is_secondary() {
    let scenario = get_factory_scenario("two_tone").unwrap();
    let spectrum = spectrum_of(&scenario);
    let primary = spectrum.magnitude[10];
    let secondary = spectrum.magnitude[scenario.selected_bin];
    assert!((secondary / primary - 0.5).abs() < 1e-9);
}

/// A scenario saved to disk reloads identically and resolves by path.
#[test]
fn save_load_resolve() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("beating.toml");

    let scenario = Scenario::new("Beating")
        .with_shape(Shape::Square)
        .with_secondary_amplitude(0.8)
        .with_nfft(512);
    scenario.save(&path).unwrap();

    assert_eq!(Scenario::load(&path).unwrap(), scenario);
    assert_eq!(paths::resolve_scenario(path.to_str().unwrap()).unwrap(), scenario);
    assert_eq!(paths::list_scenarios_in_dir(temp.path()), vec![path]);
}

/// A hand-edited file with out-of-range values parses but fails validation.
#[test]
fn invalid_file_parses_but_fails_validation() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("wild.toml");
    std::fs::write(
        &path,
        r#"
        name = "Wild"
        secondary_amplitude = 4.0
        nfft = 300
        "#,
    )
    .unwrap();

    let scenario = Scenario::load(&path).unwrap();
    let err: ConfigError = validate_scenario(&scenario).unwrap_err().into();
    let msg = err.to_string();
    assert!(msg.contains("secondary_amplitude"), "got: {msg}");
    assert!(msg.contains("nfft"), "got: {msg}");
}

/// Malformed TOML surfaces as a parse error.
#[test]
fn malformed_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("broken.toml");
    std::fs::write(&path, "name = ").unwrap();

    assert!(matches!(Scenario::load(&path), Err(ConfigError::TomlParse(_))));
}
