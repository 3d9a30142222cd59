//! Scenario configuration for the Fourier explorer.
//!
//! A [`Scenario`] captures every knob of an analysis (sample rate, duration,
//! waveform shape, secondary amplitude, transform length, inspected bin) so
//! that a run can be stored as TOML, shared, and replayed.
//!
//! # Features
//!
//! - **Scenarios**: load and save TOML scenario files
//! - **Validation**: check a scenario against the explorer's offered ranges
//! - **Paths**: platform-specific user scenario directory
//! - **Factory Scenarios**: built-in scenarios that demonstrate key effects
//!
//! # Example
//!
//! ```rust,no_run
//! use fourier_config::{Scenario, user_scenarios_dir, validate_scenario};
//! use fourier_core::Shape;
//!
//! let scenario = Scenario::new("Beating")
//!     .with_description("Square wave with a strong second tone")
//!     .with_shape(Shape::Square)
//!     .with_secondary_amplitude(0.8)
//!     .with_nfft(512);
//! validate_scenario(&scenario).unwrap();
//!
//! let path = user_scenarios_dir().join("beating.toml");
//! scenario.save(&path).unwrap();
//! ```

mod error;
mod scenario;

/// Platform-specific paths for user scenarios.
pub mod paths;

/// Scenario validation.
pub mod validation;

/// Factory scenarios bundled with the library.
pub mod factory_scenarios;

pub use error::ConfigError;
pub use factory_scenarios::{
    factory_scenario_names, factory_scenarios, get_factory_scenario, is_factory_scenario,
};
pub use paths::{
    ensure_user_scenarios_dir, find_scenario, list_user_scenarios, resolve_scenario,
    scenario_name_from_path, user_config_dir, user_scenarios_dir,
};
pub use scenario::Scenario;
pub use validation::{
    MAX_NFFT, MIN_NFFT, ValidationError, ValidationResult, validate_amplitude, validate_nfft,
    validate_scenario, validate_scenario_name, validate_signal,
};
