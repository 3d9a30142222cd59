//! Inverse transform from a one-sided spectrum.
//!
//! A real signal's spectrum is conjugate-symmetric, so the negative-frequency
//! half is recovered by counting each mirrored bin twice (see
//! [`scale`](crate::dft::scale)). Bins outside the one-sided range are
//! simply absent: for an even `nfft` that includes the Nyquist bin, which
//! `floor(nfft/2)` bins stop short of. Reconstruction is therefore exact only
//! for signals whose content lies entirely in bins `0..nfft/2`.

use crate::dft::{Dft, Transform};
use crate::error::{Result, check_nfft, check_sample_rate};
use crate::spectrum::Spectrum;
use crate::waveform::time_axis;

/// A reconstructed time-domain sequence of length `nfft`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Reconstruction {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Time of each sample, `t[n] = n / sample_rate`.
    pub t: Vec<f64>,
    /// Reconstructed samples.
    pub y: Vec<f64>,
}

impl Reconstruction {
    /// Number of samples (the transform length).
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// True when there are no samples.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Largest absolute difference against `reference` over their common prefix.
    pub fn max_error(&self, reference: &[f64]) -> f64 {
        self.y
            .iter()
            .zip(reference)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }

    /// Root-mean-square difference against `reference` over their common prefix.
    pub fn rms_error(&self, reference: &[f64]) -> f64 {
        let n = self.y.len().min(reference.len());
        if n == 0 {
            return 0.0;
        }
        let sum: f64 = self
            .y
            .iter()
            .zip(reference)
            .map(|(a, b)| (a - b) * (a - b))
            .sum();
        (sum / n as f64).sqrt()
    }
}

/// Rebuild a length-`nfft` real sequence from one-sided `real`/`imag` arrays.
///
/// ```text
/// y[n] = (1/nfft) · Σ_{k<nfft/2} scale(k) · (real[k]·cos(2πkn/nfft) − imag[k]·sin(2πkn/nfft))
/// ```
///
/// Both arrays must hold exactly `nfft / 2` bins.
///
/// # Example
///
/// ```rust
/// use fourier_core::{compute_spectrum, reconstruct};
///
/// let y: Vec<f64> = (0..16).map(|n| 1.5 + (n as f64 * std::f64::consts::PI / 4.0).sin()).collect();
/// let s = compute_spectrum(&y, 16, 16).unwrap();
/// let r = reconstruct(&s.real, &s.imag, 16, 16).unwrap();
/// assert!(r.max_error(&y) < 1e-12);
/// ```
pub fn reconstruct(
    real: &[f64],
    imag: &[f64],
    nfft: usize,
    sample_rate: u32,
) -> Result<Reconstruction> {
    check_sample_rate(sample_rate)?;
    check_nfft(nfft)?;
    reconstruct_with(&Dft::new(nfft)?, real, imag, sample_rate)
}

/// [`reconstruct`] using an already planned transform.
pub fn reconstruct_with(
    transform: &dyn Transform,
    real: &[f64],
    imag: &[f64],
    sample_rate: u32,
) -> Result<Reconstruction> {
    check_sample_rate(sample_rate)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(nfft = transform.size(), bins = real.len(), "reconstruct");

    let y = transform.inverse(real, imag)?;
    Ok(Reconstruction {
        sample_rate,
        t: time_axis(sample_rate, y.len()),
        y,
    })
}

/// Reconstruct directly from a [`Spectrum`].
pub fn reconstruct_spectrum(spectrum: &Spectrum) -> Result<Reconstruction> {
    reconstruct(
        &spectrum.real,
        &spectrum.imag,
        spectrum.nfft,
        spectrum.sample_rate,
    )
}
