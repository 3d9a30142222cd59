//! Spectrum command: the one-sided DFT of a signal.

use clap::Args;
use fourier_core::export::export_spectrum_csv;
use fourier_core::{Peak, Spectrum, find_peaks};
use serde::Serialize;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use super::common::SignalArgs;

#[derive(Args)]
pub struct SpectrumArgs {
    #[command(flatten)]
    signal: SignalArgs,

    /// Show only the N strongest peaks instead of every bin
    #[arg(long, value_name = "N")]
    peaks: Option<NonZeroUsize>,

    /// Ignore peaks weaker than this fraction of the strongest bin
    #[arg(long, default_value = "0.01")]
    min_ratio: f64,

    /// Add a magnitude column in dB
    #[arg(long)]
    db: bool,

    /// Use the rustfft backend instead of direct summation
    #[arg(long)]
    fast: bool,

    /// Write the spectrum to a CSV file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Print the spectrum and its peaks as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct SpectrumReport<'a> {
    source: &'a str,
    backend: &'static str,
    peaks: Vec<Peak>,
    spectrum: &'a Spectrum,
}

fn backend_name(fast: bool) -> &'static str {
    if fast { "rustfft" } else { "direct" }
}

pub fn run(args: SpectrumArgs) -> anyhow::Result<()> {
    let signal = args.signal.load(None, false)?;
    let spectrum = signal.spectrum(args.fast)?;
    let mut peaks = find_peaks(&spectrum, args.min_ratio)?;
    if let Some(n) = args.peaks {
        peaks.truncate(n.get());
    }

    tracing::info!(
        nfft = spectrum.nfft,
        bins = spectrum.bins(),
        backend = backend_name(args.fast),
        peaks = peaks.len(),
        "spectrum"
    );

    if let Some(path) = &args.csv {
        export_spectrum_csv(&spectrum, path)?;
        if !args.json {
            println!("Wrote {} bins to {}", spectrum.bins(), path.display());
        }
    }

    if args.json {
        let report = SpectrumReport {
            source: &signal.source,
            backend: backend_name(args.fast),
            peaks,
            spectrum: &spectrum,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    if args.csv.is_some() {
        return Ok(());
    }

    println!("{}", signal.summary());
    println!(
        "{} bins, {:.4} Hz apart ({} backend)",
        spectrum.bins(),
        spectrum.bin_width(),
        backend_name(args.fast)
    );
    println!();

    if args.peaks.is_some() {
        print_peaks(&spectrum, &peaks);
    } else {
        print_bins(&spectrum, args.db);
    }

    Ok(())
}

fn print_peaks(spectrum: &Spectrum, peaks: &[Peak]) {
    if peaks.is_empty() {
        println!("No peaks (the spectrum is flat)");
        return;
    }

    let strongest = peaks[0].magnitude;
    let db = spectrum.magnitude_db();
    println!(
        "{:>6} {:>10} {:>12} {:>9} {:>8}",
        "Bin", "Freq (Hz)", "Magnitude", "dB", "Ratio"
    );
    println!("{:->6} {:->10} {:->12} {:->9} {:->8}", "", "", "", "", "");
    for peak in peaks {
        println!(
            "{:>6} {:>10.3} {:>12.4} {:>9.2} {:>8.4}",
            peak.bin,
            peak.frequency,
            peak.magnitude,
            db[peak.bin],
            peak.magnitude / strongest
        );
    }
}

fn print_bins(spectrum: &Spectrum, with_db: bool) {
    let phase = spectrum.phase();
    let db = spectrum.magnitude_db();

    print!(
        "{:>6} {:>10} {:>12} {:>12} {:>12} {:>8}",
        "Bin", "Freq (Hz)", "Real", "Imag", "Magnitude", "Phase"
    );
    if with_db {
        print!(" {:>9}", "dB");
    }
    println!();

    for k in 0..spectrum.bins() {
        print!(
            "{:>6} {:>10.3} {:>12.4} {:>12.4} {:>12.4} {:>8.3}",
            k, spectrum.freq[k], spectrum.real[k], spectrum.imag[k], spectrum.magnitude[k], phase[k]
        );
        if with_db {
            print!(" {:>9.2}", db[k]);
        }
        println!();
    }
}
