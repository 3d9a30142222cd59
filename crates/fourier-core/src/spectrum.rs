//! One-sided spectra and the utilities that read them.

use crate::error::{Error, Result, check_nfft, check_sample_rate};

/// Number of one-sided bins of a length-`nfft` transform: `floor(nfft / 2)`.
#[inline]
pub fn bin_count(nfft: usize) -> usize {
    nfft / 2
}

/// The non-negative-frequency half of a length-`nfft` transform.
///
/// All per-bin vectors have [`bin_count(nfft)`](bin_count) entries, with
/// `magnitude[k] = sqrt(real[k]² + imag[k]²)` and `freq[k] = k·sample_rate/nfft`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Spectrum {
    /// Transform length that produced the bins.
    pub nfft: usize,
    /// Sample rate of the analysed signal in Hz.
    pub sample_rate: u32,
    /// Centre frequency of each bin in Hz.
    pub freq: Vec<f64>,
    /// Cosine (real) part of each bin.
    pub real: Vec<f64>,
    /// Negated sine (imaginary) part of each bin.
    pub imag: Vec<f64>,
    /// Magnitude of each bin.
    pub magnitude: Vec<f64>,
}

impl Spectrum {
    /// Assemble a spectrum from one-sided real/imaginary arrays.
    ///
    /// Derives magnitudes and the frequency axis. Fails when the arrays do not
    /// hold exactly `nfft / 2` bins.
    pub fn from_parts(
        real: Vec<f64>,
        imag: Vec<f64>,
        nfft: usize,
        sample_rate: u32,
    ) -> Result<Self> {
        check_nfft(nfft)?;
        check_sample_rate(sample_rate)?;
        crate::dft::check_one_sided(&real, &imag, nfft)?;

        let magnitude = real
            .iter()
            .zip(&imag)
            .map(|(&re, &im)| (re * re + im * im).sqrt())
            .collect();
        let bin_width = sample_rate as f64 / nfft as f64;
        let freq = (0..real.len()).map(|k| k as f64 * bin_width).collect();

        Ok(Self {
            nfft,
            sample_rate,
            freq,
            real,
            imag,
            magnitude,
        })
    }

    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.real.len()
    }

    /// True when the spectrum holds no bins (`nfft < 2`).
    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }

    /// Frequency spacing between adjacent bins in Hz.
    pub fn bin_width(&self) -> f64 {
        self.sample_rate as f64 / self.nfft as f64
    }

    /// Bin whose centre frequency is closest to `freq_hz`, if it exists.
    pub fn bin_of(&self, freq_hz: f64) -> Option<usize> {
        if self.is_empty() || !freq_hz.is_finite() || freq_hz < 0.0 {
            return None;
        }
        let k = (freq_hz / self.bin_width()).round() as usize;
        (k < self.bins()).then_some(k)
    }

    /// Phase of each bin in radians, `atan2(imag, real)`.
    pub fn phase(&self) -> Vec<f64> {
        self.real
            .iter()
            .zip(&self.imag)
            .map(|(&re, &im)| im.atan2(re))
            .collect()
    }

    /// Magnitude of each bin in dB, floored at -200 dB.
    pub fn magnitude_db(&self) -> Vec<f64> {
        self.magnitude
            .iter()
            .map(|&m| 20.0 * m.max(1e-10).log10())
            .collect()
    }

    /// Index of the largest-magnitude bin. Ties resolve to the lowest index.
    pub fn peak_bin(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (k, &m) in self.magnitude.iter().enumerate() {
            if best.is_none_or(|(_, b)| m > b) {
                best = Some((k, m));
            }
        }
        best.map(|(k, _)| k)
    }

    /// Copy keeping only the first `keep` bins; the rest are zeroed.
    ///
    /// Reconstructing from the result low-passes the signal at
    /// `keep · bin_width` Hz.
    pub fn truncated(&self, keep: usize) -> Spectrum {
        let mut out = self.clone();
        let keep = keep.min(out.bins());
        for k in keep..out.bins() {
            out.real[k] = 0.0;
            out.imag[k] = 0.0;
            out.magnitude[k] = 0.0;
        }
        out
    }

    /// Sum of squared magnitudes over all bins.
    pub fn energy(&self) -> f64 {
        self.magnitude.iter().map(|m| m * m).sum()
    }
}

/// A local maximum of a magnitude spectrum.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Peak {
    /// Bin index.
    pub bin: usize,
    /// Bin centre frequency in Hz.
    pub frequency: f64,
    /// Bin magnitude.
    pub magnitude: f64,
}

/// Find spectral peaks at least `min_ratio` times the largest magnitude.
///
/// A bin is a peak when it is strictly greater than its neighbours (edge bins
/// compare against their single neighbour). Results are sorted by magnitude,
/// largest first.
///
/// Fails when `min_ratio` is not in `[0, 1]`.
pub fn find_peaks(spectrum: &Spectrum, min_ratio: f64) -> Result<Vec<Peak>> {
    if !(0.0..=1.0).contains(&min_ratio) {
        return Err(Error::invalid(
            "min_ratio",
            format!("must be within [0, 1], got {min_ratio}"),
        ));
    }

    let mag = &spectrum.magnitude;
    let Some(top) = spectrum.peak_bin().map(|k| mag[k]) else {
        return Ok(Vec::new());
    };
    if top == 0.0 {
        return Ok(Vec::new());
    }
    let threshold = top * min_ratio;

    let mut peaks: Vec<Peak> = (0..mag.len())
        .filter(|&k| {
            let m = mag[k];
            let left = k == 0 || m > mag[k - 1];
            let right = k + 1 == mag.len() || m > mag[k + 1];
            m >= threshold && left && right
        })
        .map(|k| Peak {
            bin: k,
            frequency: spectrum.freq[k],
            magnitude: mag[k],
        })
        .collect();

    peaks.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    Ok(peaks)
}
