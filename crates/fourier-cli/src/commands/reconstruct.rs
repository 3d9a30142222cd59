//! Inverse transform: rebuild the signal from its one-sided spectrum.

use clap::Args;
use fourier_core::export::export_reconstruction_csv;
use fourier_core::{FastDft, reconstruct_spectrum, reconstruct_with};
use std::path::PathBuf;

use super::common::{SignalArgs, row_count};
use crate::wav::write_wav;

#[derive(Args)]
pub struct ReconstructArgs {
    #[command(flatten)]
    signal: SignalArgs,

    /// Keep only the first K bins (low-pass truncation)
    #[arg(short, long, value_name = "K")]
    keep: Option<usize>,

    /// Use the rustfft backend for both directions
    #[arg(long)]
    fast: bool,

    /// Write `t,y` rows to a CSV file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Write a mono 32-bit float WAV file
    #[arg(long, value_name = "FILE")]
    wav: Option<PathBuf>,

    /// Print at most this many rows
    #[arg(long)]
    rows: Option<usize>,
}

pub fn run(args: ReconstructArgs) -> anyhow::Result<()> {
    let signal = args.signal.load(None, false)?;
    let mut spectrum = signal.spectrum(args.fast)?;
    if let Some(keep) = args.keep {
        spectrum = spectrum.truncated(keep);
    }

    let synth = if args.fast {
        let fft = FastDft::new(spectrum.nfft)?;
        reconstruct_with(&fft, &spectrum.real, &spectrum.imag, spectrum.sample_rate)?
    } else {
        reconstruct_spectrum(&spectrum)?
    };

    tracing::info!(
        nfft = spectrum.nfft,
        keep = args.keep.unwrap_or(spectrum.bins()),
        samples = synth.len(),
        "reconstruct"
    );

    if let Some(path) = &args.csv {
        export_reconstruction_csv(&synth, path)?;
        println!("Wrote {} samples to {}", synth.len(), path.display());
    }
    if let Some(path) = &args.wav {
        write_wav(path, &synth.y, synth.sample_rate)?;
        println!("Wrote {} samples to {}", synth.len(), path.display());
    }
    if args.csv.is_some() || args.wav.is_some() {
        return Ok(());
    }

    println!("{}", signal.summary());
    match args.keep {
        Some(keep) => println!(
            "Reconstructed from bins 0..{} of {} (up to {:.3} Hz)",
            keep.min(spectrum.bins()),
            spectrum.bins(),
            keep.min(spectrum.bins()) as f64 * spectrum.bin_width()
        ),
        None => println!("Reconstructed from all {} bins", spectrum.bins()),
    }
    println!();

    println!("{:>6} {:>10} {:>12} {:>12} {:>12}", "n", "t (s)", "Original", "Rebuilt", "Error");
    println!("{:->6} {:->10} {:->12} {:->12} {:->12}", "", "", "", "", "");
    for n in 0..row_count(synth.len(), args.rows) {
        match signal.samples.get(n) {
            Some(&y) => println!(
                "{:>6} {:>10.5} {:>12.6} {:>12.6} {:>12.2e}",
                n,
                synth.t[n],
                y,
                synth.y[n],
                synth.y[n] - y
            ),
            None => println!(
                "{:>6} {:>10.5} {:>12} {:>12.6} {:>12}",
                n, synth.t[n], "-", synth.y[n], "-"
            ),
        }
    }

    println!();
    if synth.len() == signal.len() {
        println!("Max error: {:.3e}", synth.max_error(&signal.samples));
        println!("RMS error: {:.3e}", synth.rms_error(&signal.samples));
    } else {
        println!(
            "Signal has {} samples and the reconstruction {}; errors are only reported when they match",
            signal.len(),
            synth.len()
        );
    }

    Ok(())
}
