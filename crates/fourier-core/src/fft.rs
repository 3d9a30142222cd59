//! FFT-backed transform with the same conventions as [`Dft`](crate::Dft).
//!
//! Useful when `nfft` grows beyond what the O(nfft²) reference handles
//! comfortably. Results differ from the direct sums only by rounding.

use rustfft::{FftPlanner, num_complex::Complex};
use std::fmt;
use std::sync::Arc;

use crate::dft::{Transform, check_one_sided};
use crate::error::{Result, check_nfft};
use crate::spectrum::bin_count;

/// FFT processor with cached forward and inverse plans.
pub struct FastDft {
    fft: Arc<dyn rustfft::Fft<f64>>,
    ifft: Arc<dyn rustfft::Fft<f64>>,
    size: usize,
}

impl fmt::Debug for FastDft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FastDft").field("size", &self.size).finish()
    }
}

impl FastDft {
    /// Plan forward and inverse transforms of length `size`.
    pub fn new(size: usize) -> Result<Self> {
        check_nfft(size)?;
        let mut planner = FftPlanner::new();
        let fft = planner.plan_fft_forward(size);
        let ifft = planner.plan_fft_inverse(size);

        Ok(Self { fft, ifft, size })
    }
}

impl Transform for FastDft {
    fn size(&self) -> usize {
        self.size
    }

    fn forward(&self, samples: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let mut buffer: Vec<Complex<f64>> = samples
            .iter()
            .take(self.size)
            .map(|&x| Complex::new(x, 0.0))
            .collect();

        // Zero-pad up to the transform length
        buffer.resize(self.size, Complex::new(0.0, 0.0));

        self.fft.process(&mut buffer);

        buffer[..bin_count(self.size)]
            .iter()
            .map(|c| (c.re, c.im))
            .unzip()
    }

    fn inverse(&self, real: &[f64], imag: &[f64]) -> Result<Vec<f64>> {
        check_one_sided(real, imag, self.size)?;

        let mut buffer = vec![Complex::new(0.0, 0.0); self.size];
        for (k, (&re, &im)) in real.iter().zip(imag).enumerate() {
            buffer[k] = Complex::new(re, im);
            // Mirror for negative frequencies (conjugate symmetry); DC has no partner
            if k > 0 {
                buffer[self.size - k] = Complex::new(re, -im);
            }
        }

        self.ifft.process(&mut buffer);

        let scale = 1.0 / self.size as f64;
        Ok(buffer.iter().map(|c| c.re * scale).collect())
    }
}
