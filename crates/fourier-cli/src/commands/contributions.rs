//! Per-sample contributions to one frequency bin.
//!
//! Each sample `y[n]` adds `y[n]·cos(2πkn/N)` to the real part of bin `k`
//! and `−y[n]·sin(2πkn/N)` to the imaginary part. Printing those terms next
//! to the basis functions shows the correlation the transform computes.

use clap::Args;
use fourier_core::export::export_contributions_csv;
use fourier_core::{Dft, basis_components, compute_contributions};
use std::path::PathBuf;

use super::common::{SignalArgs, row_count};

#[derive(Args)]
pub struct ContributionsArgs {
    #[command(flatten)]
    signal: SignalArgs,

    /// Bin to inspect, counted on the signal length (defaults to the scenario's)
    #[arg(short, long)]
    bin: Option<usize>,

    /// Write `n,t,real,imag` rows to a CSV file
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Print at most this many rows
    #[arg(long)]
    rows: Option<usize>,
}

pub fn run(args: ContributionsArgs) -> anyhow::Result<()> {
    let signal = args.signal.load(args.bin, true)?;
    let k = signal.scenario.selected_bin;
    let sr = signal.sample_rate();

    let contributions = compute_contributions(&signal.samples, k)?;
    let basis = basis_components(signal.len(), sr, k)?;

    tracing::info!(bin = k, frequency = basis.frequency, samples = signal.len(), "contributions");

    if let Some(path) = &args.csv {
        export_contributions_csv(&contributions, sr, path)?;
        println!("Wrote {} contributions to {}", contributions.len(), path.display());
        return Ok(());
    }

    println!("{}", signal.summary());
    println!(
        "Contributions to bin {} ({:.3} Hz) over {} samples",
        k,
        basis.frequency,
        contributions.len()
    );
    println!();
    println!(
        "{:>6} {:>10} {:>10} {:>10} {:>10} {:>11} {:>11}",
        "n", "t (s)", "y", "cos", "sin", "Real", "Imag"
    );
    println!(
        "{:->6} {:->10} {:->10} {:->10} {:->10} {:->11} {:->11}",
        "", "", "", "", "", "", ""
    );
    for n in 0..row_count(contributions.len(), args.rows) {
        println!(
            "{:>6} {:>10.5} {:>10.5} {:>10.5} {:>10.5} {:>11.5} {:>11.5}",
            n,
            n as f64 / f64::from(sr),
            signal.samples[n],
            basis.cosine[n],
            basis.sine[n],
            contributions.real[n],
            contributions.imag[n]
        );
    }

    // The sums equal bin k of a transform whose length matches the signal.
    let (bin_re, bin_im) = Dft::new(signal.len())?.bin(&signal.samples, k)?;
    let (re, im) = contributions.sum();
    println!();
    println!("{:<16} {:>14} {:>14}", "", "Sum", "Spectrum bin");
    println!("{:<16} {:>14.6} {:>14.6}", "Real", re, bin_re);
    println!("{:<16} {:>14.6} {:>14.6}", "Imag", im, bin_im);
    println!(
        "{:<16} {:>14.6} {:>14.6}",
        "Magnitude",
        re.hypot(im),
        bin_re.hypot(bin_im)
    );

    Ok(())
}
