//! Fourier CLI - explore how a signal decomposes into sinusoids and back.

mod commands;
mod wav;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fourier")]
#[command(author, version, about = "Fourier transform explorer", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the test signal of a scenario
    Generate(commands::generate::GenerateArgs),

    /// Compute the one-sided spectrum
    Spectrum(commands::spectrum::SpectrumArgs),

    /// Show how each sample contributes to one frequency bin
    Contributions(commands::contributions::ContributionsArgs),

    /// Rebuild the signal from its spectrum
    Reconstruct(commands::reconstruct::ReconstructArgs),

    /// List, show and save scenarios
    Scenarios(commands::scenarios::ScenariosArgs),
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
    tracing_log::LogTracer::init().ok();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate(args) => commands::generate::run(args),
        Commands::Spectrum(args) => commands::spectrum::run(args),
        Commands::Contributions(args) => commands::contributions::run(args),
        Commands::Reconstruct(args) => commands::reconstruct::run(args),
        Commands::Scenarios(args) => commands::scenarios::run(args),
    }
}
