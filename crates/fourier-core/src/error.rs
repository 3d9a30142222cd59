//! Error types for transform operations.

use thiserror::Error;

/// Errors returned at the boundary of every transform operation.
///
/// All variants describe contract violations by the caller. None of them is
/// transient, and a failed call leaves nothing behind that could affect the
/// next one.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A scalar argument is outside its valid domain.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Name of the offending argument.
        name: &'static str,
        /// Description of why the value is rejected.
        reason: String,
    },

    /// A spectrum array disagrees with the transform length it is paired with.
    #[error("length mismatch for {what}: expected {expected} elements, got {actual}")]
    LengthMismatch {
        /// Which array has the wrong length.
        what: &'static str,
        /// Length implied by the transform size.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

impl Error {
    /// Create an invalid parameter error.
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Error::LengthMismatch {
            what,
            expected,
            actual,
        }
    }
}

/// Convenience result type for transform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reject a zero sample rate.
pub(crate) fn check_sample_rate(sample_rate: u32) -> Result<()> {
    if sample_rate == 0 {
        return Err(Error::invalid("sample_rate", "must be a positive number of samples per second"));
    }
    Ok(())
}

/// Reject a zero transform length.
pub(crate) fn check_nfft(nfft: usize) -> Result<()> {
    if nfft == 0 {
        return Err(Error::invalid("nfft", "transform length must be positive"));
    }
    Ok(())
}
