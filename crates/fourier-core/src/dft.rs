//! Direct-summation discrete Fourier transform.
//!
//! [`Dft`] is the reference implementation: every bin is an explicit sum over
//! the samples in increasing index order, so rounding is reproducible from run
//! to run. The trigonometric factors come from a twiddle table indexed by
//! `(k·n) mod nfft`, which keeps the angles small and avoids recomputing
//! `cos`/`sin` inside the O(nfft·nfft/2) loop.
//!
//! # Conventions
//!
//! For a length-`nfft` transform only the one-sided half is kept:
//!
//! ```text
//! real[k] =  Σ y'[n]·cos(2πkn/nfft)      k in [0, nfft/2)
//! imag[k] = −Σ y'[n]·sin(2πkn/nfft)
//! ```
//!
//! where `y'` is the input zero-padded or truncated to `nfft` samples.

use std::f64::consts::TAU;

use crate::error::{Error, Result, check_nfft, check_sample_rate};
use crate::spectrum::{Spectrum, bin_count};

/// `(cos, sin)` of `2π·index/size`.
#[inline]
pub(crate) fn twiddle(index: usize, size: usize) -> (f64, f64) {
    let angle = TAU * index as f64 / size as f64;
    (angle.cos(), angle.sin())
}

/// Inverse-transform weight of bin `k` for a one-sided spectrum of a
/// length-`nfft` transform.
///
/// Bins with a negative-frequency mirror count twice. DC and, for even
/// `nfft`, the Nyquist bin have no mirror partner and count once.
#[inline]
pub fn scale(k: usize, nfft: usize) -> f64 {
    if k == 0 || (nfft % 2 == 0 && k == nfft / 2) {
        1.0
    } else {
        2.0
    }
}

/// A one-sided forward/inverse transform pair of fixed length.
///
/// Implemented by the reference [`Dft`] and by [`FastDft`](crate::fft::FastDft).
/// Both follow the bin, sign and scale conventions in the module docs and
/// agree to within floating-point tolerance.
pub trait Transform {
    /// Transform length `nfft`.
    fn size(&self) -> usize;

    /// One-sided `(real, imag)` of `samples` padded or truncated to [`size`](Self::size).
    fn forward(&self, samples: &[f64]) -> (Vec<f64>, Vec<f64>);

    /// Real sequence of length [`size`](Self::size) from one-sided `real`/`imag` arrays.
    ///
    /// Both arrays must hold exactly `size / 2` bins.
    fn inverse(&self, real: &[f64], imag: &[f64]) -> Result<Vec<f64>>;

    /// Forward transform packaged with its frequency axis and magnitudes.
    fn spectrum(&self, samples: &[f64], sample_rate: u32) -> Result<Spectrum> {
        check_sample_rate(sample_rate)?;
        let (real, imag) = self.forward(samples);
        Spectrum::from_parts(real, imag, self.size(), sample_rate)
    }
}

/// Check that one-sided arrays fit a transform of length `nfft`.
pub(crate) fn check_one_sided(real: &[f64], imag: &[f64], nfft: usize) -> Result<()> {
    let bins = bin_count(nfft);
    if real.len() != bins {
        return Err(Error::length_mismatch("real", bins, real.len()));
    }
    if imag.len() != bins {
        return Err(Error::length_mismatch("imag", bins, imag.len()));
    }
    Ok(())
}

/// Reference direct-summation transform with a cached twiddle table.
///
/// # Example
///
/// ```rust
/// use fourier_core::{Dft, Transform};
///
/// let dft = Dft::new(8).unwrap();
/// let (real, imag) = dft.forward(&[1.0; 8]);
/// assert_eq!(real.len(), 4);
/// assert!((real[0] - 8.0).abs() < 1e-12);
/// assert!(imag[0].abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Dft {
    size: usize,
    cos: Vec<f64>,
    sin: Vec<f64>,
}

impl Dft {
    /// Create a transform of length `size`.
    pub fn new(size: usize) -> Result<Self> {
        check_nfft(size)?;
        let (cos, sin) = (0..size).map(|r| twiddle(r, size)).unzip();
        Ok(Self { size, cos, sin })
    }

    /// Number of one-sided bins produced by [`Transform::forward`].
    pub fn bins(&self) -> usize {
        bin_count(self.size)
    }

    /// `(real, imag)` of bin `k` alone, in O(nfft).
    ///
    /// Bit-identical to entry `k` of [`Transform::forward`].
    ///
    /// ```rust
    /// use fourier_core::{Dft, Transform};
    ///
    /// let y = [0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0];
    /// let dft = Dft::new(8).unwrap();
    /// let (real, imag) = dft.forward(&y);
    /// assert_eq!(dft.bin(&y, 2).unwrap(), (real[2], imag[2]));
    /// ```
    pub fn bin(&self, samples: &[f64], k: usize) -> Result<(f64, f64)> {
        let bins = self.bins();
        if k >= bins {
            return Err(Error::invalid(
                "bin",
                format!("bin {k} is out of range for nfft {} (valid: 0..{bins})", self.size),
            ));
        }
        Ok(self.accumulate(&samples[..samples.len().min(self.size)], k))
    }

    fn accumulate(&self, input: &[f64], k: usize) -> (f64, f64) {
        let n = self.size;
        let mut re = 0.0;
        let mut im = 0.0;
        let mut r = 0;
        for &x in input {
            re += x * self.cos[r];
            im -= x * self.sin[r];
            r += k;
            if r >= n {
                r -= n;
            }
        }
        (re, im)
    }
}

impl Transform for Dft {
    fn size(&self) -> usize {
        self.size
    }

    fn forward(&self, samples: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let n = self.size;
        let bins = self.bins();
        // Padding zeros add nothing to the sums, so only the first
        // min(len, nfft) samples are visited.
        let input = &samples[..samples.len().min(n)];

        (0..bins).map(|k| self.accumulate(input, k)).unzip()
    }

    fn inverse(&self, real: &[f64], imag: &[f64]) -> Result<Vec<f64>> {
        let n = self.size;
        check_one_sided(real, imag, n)?;

        let inv = 1.0 / n as f64;
        let output = (0..n)
            .map(|i| {
                let mut acc = 0.0;
                let mut r = 0;
                for (k, (&re, &im)) in real.iter().zip(imag).enumerate() {
                    acc += scale(k, n) * (re * self.cos[r] - im * self.sin[r]);
                    r += i;
                    if r >= n {
                        r -= n;
                    }
                }
                acc * inv
            })
            .collect();
        Ok(output)
    }
}

/// One-sided spectrum of `samples` zero-padded or truncated to `nfft`.
///
/// Returns `nfft / 2` bins with frequencies `k·sample_rate/nfft`. An empty
/// input is treated as all zeros.
///
/// # Example
///
/// ```rust
/// use fourier_core::{Shape, compute_spectrum, generate_waveform};
///
/// let wave = generate_waveform(256, 1.0, Shape::Sine, 0.0).unwrap();
/// let spectrum = compute_spectrum(&wave.y, 256, 256).unwrap();
/// assert_eq!(spectrum.peak_bin(), Some(10));
/// assert!((spectrum.magnitude[10] - 128.0).abs() < 1e-9);
/// ```
pub fn compute_spectrum(samples: &[f64], sample_rate: u32, nfft: usize) -> Result<Spectrum> {
    check_sample_rate(sample_rate)?;
    check_nfft(nfft)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
        samples = samples.len(),
        nfft,
        bins = bin_count(nfft),
        "compute_spectrum"
    );

    Dft::new(nfft)?.spectrum(samples, sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[f64], b: &[f64], tol: f64) {
        assert_eq!(a.len(), b.len());
        for (i, (x, y)) in a.iter().zip(b).enumerate() {
            assert!((x - y).abs() <= tol, "index {i}: {x} vs {y}");
        }
    }

    /// Textbook evaluation with freshly computed angles.
    fn naive(samples: &[f64], nfft: usize) -> (Vec<f64>, Vec<f64>) {
        let mut padded = samples.to_vec();
        padded.resize(nfft, 0.0);
        (0..nfft / 2)
            .map(|k| {
                let mut re = 0.0;
                let mut im = 0.0;
                for (n, &x) in padded.iter().enumerate() {
                    let angle = TAU * k as f64 * n as f64 / nfft as f64;
                    re += x * angle.cos();
                    im -= x * angle.sin();
                }
                (re, im)
            })
            .unzip()
    }

    #[test]
    fn scale_weights() {
        assert_eq!(scale(0, 8), 1.0);
        assert_eq!(scale(1, 8), 2.0);
        assert_eq!(scale(3, 8), 2.0);
        assert_eq!(scale(4, 8), 1.0);
        assert_eq!(scale(0, 7), 1.0);
        assert_eq!(scale(3, 7), 2.0);
    }

    #[test]
    fn matches_textbook_sum() {
        let samples: Vec<f64> = (0..37).map(|i| ((i * 7 % 11) as f64 - 5.0) / 3.0).collect();
        for nfft in [16, 37, 50, 64] {
            let (re, im) = Dft::new(nfft).unwrap().forward(&samples);
            let (nre, nim) = naive(&samples, nfft);
            assert_close(&re, &nre, 1e-9);
            assert_close(&im, &nim, 1e-9);
        }
    }

    #[test]
    fn dc_signal_lands_in_bin_zero() {
        let (re, im) = Dft::new(16).unwrap().forward(&[2.0; 16]);
        assert!((re[0] - 32.0).abs() < 1e-12);
        for k in 1..8 {
            assert!(re[k].abs() < 1e-12 && im[k].abs() < 1e-12, "bin {k}");
        }
    }

    #[test]
    fn cosine_is_real_and_sine_is_negative_imaginary() {
        let n = 32;
        let cosine: Vec<f64> = (0..n).map(|i| (TAU * 3.0 * i as f64 / n as f64).cos()).collect();
        let sine: Vec<f64> = (0..n).map(|i| (TAU * 3.0 * i as f64 / n as f64).sin()).collect();
        let dft = Dft::new(n).unwrap();

        let (re, im) = dft.forward(&cosine);
        assert!((re[3] - 16.0).abs() < 1e-12);
        assert!(im[3].abs() < 1e-12);

        let (re, im) = dft.forward(&sine);
        assert!(re[3].abs() < 1e-12);
        assert!((im[3] + 16.0).abs() < 1e-12);
    }

    #[test]
    fn empty_input_gives_zero_spectrum() {
        let spectrum = compute_spectrum(&[], 100, 8).unwrap();
        assert_eq!(spectrum.bins(), 4);
        assert!(spectrum.real.iter().all(|&v| v == 0.0));
        assert!(spectrum.imag.iter().all(|&v| v == 0.0));
        assert!(spectrum.magnitude.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn length_one_has_no_bins() {
        let spectrum = compute_spectrum(&[3.0], 10, 1).unwrap();
        assert!(spectrum.is_empty());
    }

    #[test]
    fn rejects_zero_nfft_and_rate() {
        assert!(matches!(
            compute_spectrum(&[1.0], 10, 0),
            Err(Error::InvalidParameter { name: "nfft", .. })
        ));
        assert!(matches!(
            compute_spectrum(&[1.0], 0, 4),
            Err(Error::InvalidParameter { name: "sample_rate", .. })
        ));
        assert!(Dft::new(0).is_err());
    }

    #[test]
    fn truncation_ignores_tail() {
        let mut samples = vec![1.0; 8];
        samples.extend([100.0; 8]);
        let (re, _) = Dft::new(8).unwrap().forward(&samples);
        assert!((re[0] - 8.0).abs() < 1e-12);
    }

    #[test]
    fn single_bin_matches_forward_exactly() {
        let samples: Vec<f64> = (0..300).map(|i| ((i * 13 % 17) as f64 - 8.0) / 5.0).collect();
        for nfft in [64, 300, 512] {
            let dft = Dft::new(nfft).unwrap();
            let (re, im) = dft.forward(&samples);
            for k in 0..dft.bins() {
                assert_eq!(dft.bin(&samples, k).unwrap(), (re[k], im[k]), "nfft {nfft} bin {k}");
            }
        }
    }

    #[test]
    fn single_bin_rejects_out_of_range() {
        let dft = Dft::new(16).unwrap();
        assert!(matches!(
            dft.bin(&[1.0; 16], 8),
            Err(Error::InvalidParameter { name: "bin", .. })
        ));
        assert_eq!(dft.bin(&[], 3).unwrap(), (0.0, 0.0));
    }

    #[test]
    fn inverse_rejects_wrong_lengths() {
        let dft = Dft::new(8).unwrap();
        assert_eq!(
            dft.inverse(&[0.0; 3], &[0.0; 4]),
            Err(Error::length_mismatch("real", 4, 3))
        );
        assert_eq!(
            dft.inverse(&[0.0; 4], &[0.0; 5]),
            Err(Error::length_mismatch("imag", 4, 5))
        );
    }
}
