//! Test signal generation command.

use clap::Args;
use fourier_core::export::export_waveform_csv;
use std::path::PathBuf;

use super::common::{ScenarioArgs, row_count};
use crate::wav::write_wav;

#[derive(Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    scenario: ScenarioArgs,

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

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let scenario = args.scenario.load()?;
    fourier_config::validate_signal(&scenario)?;
    let wave = scenario.waveform()?;

    tracing::info!(
        scenario = %scenario.name,
        shape = %scenario.shape,
        samples = wave.len(),
        "generate"
    );

    if let Some(path) = &args.csv {
        export_waveform_csv(&wave, path)?;
        println!("Wrote {} samples to {}", wave.len(), path.display());
    }
    if let Some(path) = &args.wav {
        write_wav(path, &wave.y, wave.sample_rate)?;
        println!("Wrote {} samples to {}", wave.len(), path.display());
    }
    if args.csv.is_some() || args.wav.is_some() {
        return Ok(());
    }

    println!(
        "{}: {} 10 Hz + {} x 20 Hz, {} samples at {} Hz ({:.3} s)",
        scenario.name,
        scenario.shape,
        scenario.secondary_amplitude,
        wave.len(),
        wave.sample_rate,
        wave.duration()
    );
    println!();
    println!("{:>6} {:>10} {:>12}", "n", "t (s)", "y");
    println!("{:->6} {:->10} {:->12}", "", "", "");
    for n in 0..row_count(wave.len(), args.rows) {
        println!("{:>6} {:>10.5} {:>12.6}", n, wave.t[n], wave.y[n]);
    }

    Ok(())
}
