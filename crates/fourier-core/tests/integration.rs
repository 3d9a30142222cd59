//! Integration tests for fourier-core.
//!
//! Exercise the full waveform → spectrum → contributions/reconstruction
//! pipeline on the teaching scenarios with known answers.

use fourier_core::{
    Dft, FastDft, Shape, Spectrum, Transform, compute_contributions, compute_spectrum,
    find_peaks, generate_waveform, reconstruct, reconstruct_spectrum,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const SR: u32 = 256;

fn spectrum_for(shape: Shape, amplitude: f64, nfft: usize) -> Spectrum {
    let wave = generate_waveform(SR, 1.0, shape, amplitude).unwrap();
    compute_spectrum(&wave.y, SR, nfft).unwrap()
}

/// Assert every bin outside `peaks` is below `tol` times the largest magnitude.
fn assert_quiet_except(spectrum: &Spectrum, peaks: &[usize], tol: f64) {
    let top = spectrum.magnitude.iter().copied().fold(0.0, f64::max);
    for (k, &m) in spectrum.magnitude.iter().enumerate() {
        if peaks.contains(&k) {
            continue;
        }
        assert!(m <= top * tol, "bin {k} magnitude {m} exceeds {tol} of peak {top}");
    }
}

// ===========================================================================
// 1. Concrete scenarios
// ===========================================================================

#[test]
fn pure_sine_single_peak_at_ten_hz() {
    let spectrum = spectrum_for(Shape::Sine, 0.0, 256);

    assert_eq!(spectrum.bins(), 128);
    assert_eq!(spectrum.peak_bin(), Some(10));
    assert_eq!(spectrum.freq[10], 10.0);
    assert!(
        (spectrum.magnitude[10] - 128.0).abs() < 1e-9,
        "peak magnitude {}",
        spectrum.magnitude[10]
    );
    assert_quiet_except(&spectrum, &[10], 1e-6);
}

#[test]
fn two_tone_peaks_at_ten_and_twenty_hz() {
    let spectrum = spectrum_for(Shape::Sine, 1.0, 256);

    for k in [10, 20] {
        assert!(
            (spectrum.magnitude[k] - 128.0).abs() < 1e-9,
            "bin {k} magnitude {}",
            spectrum.magnitude[k]
        );
    }
    assert_quiet_except(&spectrum, &[10, 20], 1e-6);

    let peaks = find_peaks(&spectrum, 0.5).unwrap();
    let mut bins: Vec<usize> = peaks.iter().map(|p| p.bin).collect();
    bins.sort_unstable();
    assert_eq!(bins, vec![10, 20]);
}

#[test]
fn square_wave_has_odd_harmonics_only() {
    let spectrum = spectrum_for(Shape::Square, 0.0, 256);
    let m = &spectrum.magnitude;

    assert_eq!(spectrum.peak_bin(), Some(10));
    assert!(m[10] > m[30] && m[30] > m[50] && m[50] > m[70]);

    // Fourier series of a square wave: harmonic h has amplitude 1/h
    for (k, h) in [(30, 3.0), (50, 5.0), (70, 7.0)] {
        let ratio = m[k] / m[10];
        assert!(
            (ratio - 1.0 / h).abs() < 0.05,
            "harmonic {h}: ratio {ratio:.4} should be near {:.4}",
            1.0 / h
        );
    }

    for k in [20, 40, 60, 80, 100, 120] {
        assert!(m[k] < m[10] * 1e-9, "even harmonic bin {k} = {}", m[k]);
    }
}

#[test]
fn triangle_wave_is_dominated_by_fundamental() {
    let spectrum = spectrum_for(Shape::Triangle, 0.0, 256);
    let m = &spectrum.magnitude;

    assert_eq!(spectrum.peak_bin(), Some(10));
    // Triangle harmonics fall off as 1/h²
    let ratio = m[30] / m[10];
    assert!((ratio - 1.0 / 9.0).abs() < 0.02, "ratio {ratio}");
    assert!(m[20] < m[10] * 1e-9);
}

// ===========================================================================
// 2. Zero-padding and truncation
// ===========================================================================

#[test]
fn zero_padding_doubles_resolution() {
    let wave = generate_waveform(SR, 1.0, Shape::Sine, 1.0).unwrap();
    let base = compute_spectrum(&wave.y, SR, 256).unwrap();
    let padded = compute_spectrum(&wave.y, SR, 512).unwrap();

    assert_eq!(padded.bins(), 256);
    assert_eq!(padded.bin_width(), base.bin_width() / 2.0);

    // Padding adds bins, not energy: the on-grid bins keep their values
    for k in 0..base.bins() {
        assert!((padded.real[2 * k] - base.real[k]).abs() < 1e-9);
        assert!((padded.imag[2 * k] - base.imag[k]).abs() < 1e-9);
    }

    let peaks = find_peaks(&padded, 0.5).unwrap();
    assert_eq!(peaks.len(), 2);
    for peak in &peaks {
        let nearest = if (peak.frequency - 10.0).abs() < (peak.frequency - 20.0).abs() {
            10.0
        } else {
            20.0
        };
        assert!(
            (peak.frequency - nearest).abs() <= padded.bin_width() / 2.0,
            "peak at {} Hz",
            peak.frequency
        );
    }
}

#[test]
fn padding_an_off_grid_tone_sharpens_peak_estimate() {
    // 10.5 Hz sits between bins at nfft = sr but exactly on a bin at 2·sr.
    let y: Vec<f64> = (0..256)
        .map(|n| (std::f64::consts::TAU * 10.5 * n as f64 / 256.0).sin())
        .collect();
    let coarse = compute_spectrum(&y, SR, 256).unwrap();
    let fine = compute_spectrum(&y, SR, 512).unwrap();

    let coarse_peak = coarse.freq[coarse.peak_bin().unwrap()];
    let fine_peak = fine.freq[fine.peak_bin().unwrap()];
    assert!((coarse_peak - 10.5).abs() <= coarse.bin_width() / 2.0);
    assert!((fine_peak - 10.5).abs() <= fine.bin_width() / 2.0);
    assert_eq!(fine_peak, 10.5);
}

#[test]
fn truncation_uses_leading_samples() {
    let wave = generate_waveform(SR, 1.0, Shape::Sine, 0.0).unwrap();
    let head = compute_spectrum(&wave.y[..128], SR, 128).unwrap();
    let truncated = compute_spectrum(&wave.y, SR, 128).unwrap();
    assert_eq!(head, truncated);
    // 128 samples at 256 Hz span 0.5 s, so 10 Hz lands on bin 5
    assert_eq!(truncated.peak_bin(), Some(5));
}

// ===========================================================================
// 3. Contributions
// ===========================================================================

#[test]
fn contributions_explain_the_peak() {
    let wave = generate_waveform(SR, 1.0, Shape::Sine, 0.0).unwrap();
    let spectrum = compute_spectrum(&wave.y, SR, 256).unwrap();

    let on_peak = compute_contributions(&wave.y, 10).unwrap();
    let (re, im) = on_peak.sum();
    assert_eq!((re, im), (spectrum.real[10], spectrum.imag[10]));
    // sin·(−sin) is never positive: every sample pulls the same way
    assert!(on_peak.imag.iter().all(|&v| v <= 1e-12));
    assert!((im + 128.0).abs() < 1e-9);

    let off_peak = compute_contributions(&wave.y, 13).unwrap();
    let (re, im) = off_peak.sum();
    assert!(re.abs() < 1e-9 && im.abs() < 1e-9);
    assert!(off_peak.imag.iter().any(|&v| v > 0.1));
    assert!(off_peak.imag.iter().any(|&v| v < -0.1));
}

// ===========================================================================
// 4. Reconstruction
// ===========================================================================

#[test]
fn reconstruction_roundtrip_for_every_shape() {
    // At nfft = sr every shape repeats a whole number of times and leaves the
    // Nyquist bin empty, so the one-sided pair is exact.
    for shape in Shape::ALL {
        for amplitude in [0.0, 0.5, 1.0] {
            let wave = generate_waveform(SR, 1.0, shape, amplitude).unwrap();
            let spectrum = compute_spectrum(&wave.y, SR, 256).unwrap();
            let synth = reconstruct_spectrum(&spectrum).unwrap();

            assert_eq!(synth.len(), 256);
            assert_eq!(synth.t, wave.t);
            assert!(
                synth.max_error(&wave.y) < 1e-10,
                "{shape} amplitude {amplitude}: max error {}",
                synth.max_error(&wave.y)
            );
        }
    }
}

#[test]
fn truncated_spectrum_low_passes_square_wave() {
    let wave = generate_waveform(SR, 1.0, Shape::Square, 0.0).unwrap();
    let spectrum = compute_spectrum(&wave.y, SR, 256).unwrap();

    let fundamental_only = reconstruct_spectrum(&spectrum.truncated(11)).unwrap();
    let fundamental: Vec<f64> = wave
        .t
        .iter()
        .map(|&t| 4.0 / std::f64::consts::PI * (std::f64::consts::TAU * 10.0 * t).sin())
        .collect();
    // Aliased high harmonics shift the fundamental a little
    assert!(fundamental_only.max_error(&fundamental) < 0.1);

    // Keeping more harmonics gets closer to the square wave
    let coarse = reconstruct_spectrum(&spectrum.truncated(31)).unwrap();
    let fine = reconstruct_spectrum(&spectrum.truncated(91)).unwrap();
    assert!(fine.rms_error(&wave.y) < coarse.rms_error(&wave.y));
}

#[test]
fn mismatched_length_reconstruction_is_an_approximation() {
    let wave = generate_waveform(SR, 1.0, Shape::Sine, 0.0).unwrap();
    let spectrum = compute_spectrum(&wave.y, SR, 512).unwrap();
    let synth = reconstruct(&spectrum.real, &spectrum.imag, 512, SR).unwrap();

    assert_eq!(synth.len(), 512);
    assert_eq!(synth.t.last().copied(), Some(511.0 / 256.0));
    // First half carries the signal, padding region reconstructs near zero
    assert!(synth.max_error(&wave.y) < 1e-9);
    assert!(synth.y[256..].iter().all(|v| v.abs() < 1e-9));
}

// ===========================================================================
// 5. Backends
// ===========================================================================

#[test]
fn fast_backend_reproduces_reference() {
    let wave = generate_waveform(SR, 1.0, Shape::Square, 0.6).unwrap();
    for nfft in [128, 256, 300, 1024] {
        let direct = Dft::new(nfft).unwrap().spectrum(&wave.y, SR).unwrap();
        let fast = FastDft::new(nfft).unwrap().spectrum(&wave.y, SR).unwrap();
        let top = direct.magnitude.iter().copied().fold(0.0, f64::max);
        for k in 0..direct.bins() {
            assert!((direct.real[k] - fast.real[k]).abs() <= 1e-9 * top);
            assert!((direct.imag[k] - fast.imag[k]).abs() <= 1e-9 * top);
        }
        assert_eq!(direct.freq, fast.freq);
    }
}
