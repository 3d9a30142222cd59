//! Pipeline demo: waveform, spectrum, contributions and reconstruction.
//!
//! Run with: cargo run -p fourier-core --example pipeline_demo

use fourier_core::{
    Shape, compute_contributions, compute_spectrum, find_peaks, generate_waveform,
    reconstruct_spectrum,
};

fn main() -> fourier_core::Result<()> {
    let sample_rate = 256;

    // --- Square wave: odd harmonics ---
    println!("=== Spectrum of a 10 Hz Square Wave ===\n");

    let wave = generate_waveform(sample_rate, 1.0, Shape::Square, 0.0)?;
    let spectrum = compute_spectrum(&wave.y, sample_rate, 256)?;

    println!("{:>8} {:>10} {:>10} {:>8}", "Bin", "Freq (Hz)", "Magnitude", "Ratio");
    println!("{:->8} {:->10} {:->10} {:->8}", "", "", "", "");
    let fundamental = spectrum.magnitude[10];
    for peak in find_peaks(&spectrum, 0.05)?.iter().take(6) {
        println!(
            "{:>8} {:>10.1} {:>10.2} {:>8.3}",
            peak.bin,
            peak.frequency,
            peak.magnitude,
            peak.magnitude / fundamental
        );
    }

    // --- Contributions to the fundamental ---
    println!("\n=== Contributions to bin 10 ===\n");

    let contributions = compute_contributions(&wave.y, 10)?;
    let (re, im) = contributions.sum();
    println!("Sum of cosine terms: {:>10.4}  (spectrum: {:.4})", re, spectrum.real[10]);
    println!("Sum of sine terms:   {:>10.4}  (spectrum: {:.4})", im, spectrum.imag[10]);

    // --- Progressive reconstruction ---
    println!("\n=== Reconstruction from the first K bins ===\n");
    println!("{:>6} {:>12}", "K", "RMS error");
    for keep in [11, 31, 51, 91, 128] {
        let synth = reconstruct_spectrum(&spectrum.truncated(keep))?;
        println!("{:>6} {:>12.6}", keep, synth.rms_error(&wave.y));
    }

    Ok(())
}
