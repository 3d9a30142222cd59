//! Per-sample contributions to a single frequency bin.
//!
//! The forward transform of bin `k` is a sum over samples. Keeping the
//! individual addends shows which parts of the signal push the bin up and
//! which cancel out: a sample that lines up with the bin's cosine adds to the
//! real part, one that lines up with its sine subtracts from the imaginary
//! part.

use crate::dft::twiddle;
use crate::error::{Error, Result, check_sample_rate};
use crate::spectrum::bin_count;

/// Addends of the forward transform at a fixed bin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Contributions {
    /// The bin the contributions belong to.
    pub bin: usize,
    /// `y[n]·cos(2πkn/N)`
    pub real: Vec<f64>,
    /// `−y[n]·sin(2πkn/N)`
    pub imag: Vec<f64>,
}

impl Contributions {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.real.len()
    }

    /// True when there are no samples.
    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }

    /// Sequential sums `(Σ real, Σ imag)`.
    ///
    /// Summed in the same order as the forward transform, so the result equals
    /// that bin of [`compute_spectrum`](crate::compute_spectrum) over the same
    /// length.
    pub fn sum(&self) -> (f64, f64) {
        let re = self.real.iter().fold(0.0, |acc, &v| acc + v);
        let im = self.imag.iter().fold(0.0, |acc, &v| acc + v);
        (re, im)
    }
}

fn check_bin(k: usize, len: usize) -> Result<()> {
    let bins = bin_count(len);
    if k >= bins {
        return Err(Error::invalid(
            "bin",
            format!("bin {k} is out of range for {len} samples (valid: 0..{bins})"),
        ));
    }
    Ok(())
}

/// Split bin `k` of the length-`N` transform of `samples` into its addends.
///
/// `N` is `samples.len()` and `k` must be below `N / 2`.
///
/// # Example
///
/// ```rust
/// use fourier_core::{compute_contributions, compute_spectrum};
///
/// let y = [0.0, 1.0, 0.0, -1.0, 0.0, 1.0, 0.0, -1.0];
/// let c = compute_contributions(&y, 2).unwrap();
/// let s = compute_spectrum(&y, 8, 8).unwrap();
/// assert_eq!(c.sum(), (s.real[2], s.imag[2]));
/// ```
pub fn compute_contributions(samples: &[f64], k: usize) -> Result<Contributions> {
    let n = samples.len();
    check_bin(k, n)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(samples = n, bin = k, "compute_contributions");

    let mut real = Vec::with_capacity(n);
    let mut imag = Vec::with_capacity(n);
    let mut r = 0;
    for &x in samples {
        let (cos, sin) = twiddle(r, n);
        real.push(x * cos);
        imag.push(-(x * sin));
        r += k;
        if r >= n {
            r -= n;
        }
    }

    Ok(Contributions { bin: k, real, imag })
}

/// Unit sine and cosine at a bin's centre frequency, sampled on a time axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BasisComponents {
    /// The bin.
    pub bin: usize,
    /// Bin centre frequency in Hz, `k·sample_rate/len`.
    pub frequency: f64,
    /// `sin(2π·frequency·t)`
    pub sine: Vec<f64>,
    /// `cos(2π·frequency·t)`
    pub cosine: Vec<f64>,
}

/// The basis functions the transform correlates a `len`-sample signal with at bin `k`.
///
/// Same validity rule as [`compute_contributions`].
pub fn basis_components(len: usize, sample_rate: u32, k: usize) -> Result<BasisComponents> {
    check_sample_rate(sample_rate)?;
    check_bin(k, len)?;

    let mut sine = Vec::with_capacity(len);
    let mut cosine = Vec::with_capacity(len);
    let mut r = 0;
    for _ in 0..len {
        let (cos, sin) = twiddle(r, len);
        sine.push(sin);
        cosine.push(cos);
        r += k;
        if r >= len {
            r -= len;
        }
    }

    Ok(BasisComponents {
        bin: k,
        frequency: k as f64 * sample_rate as f64 / len as f64,
        sine,
        cosine,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft::compute_spectrum;
    use std::f64::consts::TAU;

    #[test]
    fn sums_match_spectrum_exactly() {
        let y: Vec<f64> = (0..50).map(|i| ((i * 13 % 17) as f64 - 8.0) * 0.1).collect();
        let s = compute_spectrum(&y, 50, 50).unwrap();
        for k in 0..25 {
            let c = compute_contributions(&y, k).unwrap();
            assert_eq!(c.len(), 50);
            assert_eq!(c.sum(), (s.real[k], s.imag[k]), "bin {k}");
        }
    }

    #[test]
    fn sums_match_single_bin_on_long_signal() {
        let y: Vec<f64> = (0..64_000).map(|i| (TAU * 440.0 * i as f64 / 16_000.0).sin()).collect();
        let dft = crate::dft::Dft::new(y.len()).unwrap();
        for k in [0, 1, 1760, 31_999] {
            let c = compute_contributions(&y, k).unwrap();
            assert_eq!(c.sum(), dft.bin(&y, k).unwrap(), "bin {k}");
        }
    }

    #[test]
    fn bin_zero_is_the_signal() {
        let y = [1.0, -2.0, 3.5];
        let c = compute_contributions(&y, 0).unwrap();
        assert_eq!(c.real, y.to_vec());
        assert!(c.imag.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn out_of_range_bins() {
        assert!(compute_contributions(&[1.0; 8], 4).is_err());
        assert!(compute_contributions(&[1.0; 9], 4).is_err());
        assert!(compute_contributions(&[1.0; 10], 4).is_ok());
        assert!(compute_contributions(&[1.0], 0).is_err());
        assert!(compute_contributions(&[], 0).is_err());
    }

    #[test]
    fn basis_matches_selected_frequency() {
        let b = basis_components(256, 256, 10).unwrap();
        assert_eq!(b.frequency, 10.0);
        for n in 0..256 {
            let t = n as f64 / 256.0;
            assert!((b.sine[n] - (TAU * 10.0 * t).sin()).abs() < 1e-12);
            assert!((b.cosine[n] - (TAU * 10.0 * t).cos()).abs() < 1e-12);
        }
        assert!(basis_components(256, 0, 10).is_err());
        assert!(basis_components(256, 256, 128).is_err());
    }
}
