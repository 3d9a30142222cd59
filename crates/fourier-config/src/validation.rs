//! Scenario validation.
//!
//! The transform engine accepts any positive length and any finite
//! amplitude. The explorer offers a narrower range: transform lengths are
//! powers of two between [`MIN_NFFT`] and [`MAX_NFFT`], the secondary
//! amplitude lies in `[0, 1]`, and the inspected bin must exist in both the
//! spectrum and the signal. Every violation is reported; nothing is clamped.
//!
//! # Example
//!
//! ```rust
//! use fourier_config::{Scenario, ValidationError, validate_scenario};
//!
//! assert!(validate_scenario(&Scenario::new("ok")).is_ok());
//!
//! let bad = Scenario::new("bad").with_nfft(100).with_secondary_amplitude(2.0);
//! assert!(matches!(validate_scenario(&bad), Err(ValidationError::Multiple(_))));
//! ```

use thiserror::Error;

use crate::Scenario;

/// Smallest transform length offered.
pub const MIN_NFFT: usize = 32;

/// Largest transform length offered.
pub const MAX_NFFT: usize = 1024;

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        param: &'static str,
        /// The value that was out of range.
        value: f64,
        /// Minimum allowed value.
        min: f64,
        /// Maximum allowed value.
        max: f64,
    },

    /// Parameter value rejected for a reason other than its range.
    #[error("invalid value for parameter '{param}': {reason}")]
    InvalidValue {
        /// Name of the parameter.
        param: &'static str,
        /// Description of the problem.
        reason: String,
    },

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Check a transform length against the offered sizes.
pub fn validate_nfft(nfft: usize) -> ValidationResult<()> {
    if !(MIN_NFFT..=MAX_NFFT).contains(&nfft) {
        return Err(ValidationError::OutOfRange {
            param: "nfft",
            value: nfft as f64,
            min: MIN_NFFT as f64,
            max: MAX_NFFT as f64,
        });
    }
    if !nfft.is_power_of_two() {
        return Err(ValidationError::InvalidValue {
            param: "nfft",
            reason: format!("{nfft} is not a power of two"),
        });
    }
    Ok(())
}

/// Check the secondary amplitude lies in `[0, 1]`.
pub fn validate_amplitude(amplitude: f64) -> ValidationResult<()> {
    if !(0.0..=1.0).contains(&amplitude) {
        return Err(ValidationError::OutOfRange {
            param: "secondary_amplitude",
            value: amplitude,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(())
}

/// Check that a scenario name can be used as a file stem in the scenarios
/// directory.
pub fn validate_scenario_name(name: &str) -> ValidationResult<()> {
    let reason = if name.trim().is_empty() {
        "must not be empty"
    } else if name == "." || name == ".." {
        "must not be a relative directory"
    } else if name.contains(['/', '\\']) {
        "must not contain path separators"
    } else {
        return Ok(());
    };
    Err(ValidationError::InvalidValue {
        param: "name",
        reason: format!("'{name}' {reason}"),
    })
}

/// Validate every field of a scenario.
///
/// Returns the single error when there is exactly one violation, and
/// [`ValidationError::Multiple`] otherwise.
pub fn validate_scenario(scenario: &Scenario) -> ValidationResult<()> {
    let mut errors = signal_errors(scenario);
    errors.extend(bin_errors(scenario));
    collect(errors)
}

/// Validate the fields that shape the signal and its transform, ignoring
/// the inspected bin.
pub fn validate_signal(scenario: &Scenario) -> ValidationResult<()> {
    collect(signal_errors(scenario))
}

fn collect(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

fn signal_errors(scenario: &Scenario) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if scenario.sample_rate == 0 {
        errors.push(ValidationError::InvalidValue {
            param: "sample_rate",
            reason: "must be positive".to_string(),
        });
    }

    if !scenario.duration.is_finite() || scenario.duration <= 0.0 {
        errors.push(ValidationError::InvalidValue {
            param: "duration",
            reason: format!("must be a positive number of seconds, got {}", scenario.duration),
        });
    }

    if let Err(e) = validate_amplitude(scenario.secondary_amplitude) {
        errors.push(e);
    }

    if let Err(e) = validate_nfft(scenario.nfft) {
        errors.push(e);
    }

    errors
}

fn bin_errors(scenario: &Scenario) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let bins = scenario.spectrum_bins();
    if scenario.selected_bin >= bins {
        errors.push(ValidationError::InvalidValue {
            param: "selected_bin",
            reason: format!(
                "bin {} does not exist in a {}-point spectrum ({bins} bins)",
                scenario.selected_bin, scenario.nfft
            ),
        });
    }

    // Only meaningful once the signal length itself is valid.
    if let Ok(len) = scenario.sample_count()
        && scenario.selected_bin >= len / 2
    {
        errors.push(ValidationError::InvalidValue {
            param: "selected_bin",
            reason: format!(
                "bin {} must be below half the signal length ({len} samples)",
                scenario.selected_bin
            ),
        });
    }

    errors
}
