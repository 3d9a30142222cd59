//! Scenario management commands.
//!
//! Lists factory and user scenarios, prints one as TOML, and saves a
//! scenario (with any overrides applied) to the user scenarios directory.

use clap::{Args, Subcommand};
use fourier_config::{
    Scenario, ensure_user_scenarios_dir, factory_scenario_names, get_factory_scenario,
    list_user_scenarios, scenario_name_from_path, user_scenarios_dir, validate_scenario,
    validate_scenario_name,
};
use std::path::PathBuf;

use super::common::ScenarioArgs;

#[derive(Args)]
pub struct ScenariosArgs {
    #[command(subcommand)]
    command: ScenariosCommand,
}

#[derive(Subcommand)]
enum ScenariosCommand {
    /// List available scenarios (factory and user)
    List {
        /// Show only factory scenarios
        #[arg(long)]
        factory: bool,

        /// Show only user scenarios
        #[arg(long)]
        user: bool,
    },

    /// Show a scenario as TOML with its derived quantities
    Show {
        /// Scenario name or path
        name: String,
    },

    /// Save a scenario, with overrides applied, under a new name
    Save {
        /// Name for the new scenario
        name: String,

        #[command(flatten)]
        base: ScenarioArgs,

        /// Bin to inspect in the saved scenario
        #[arg(short, long)]
        bin: Option<usize>,

        /// Description of the scenario
        #[arg(short, long)]
        description: Option<String>,

        /// Write to this file instead of the user scenarios directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite if the file already exists
        #[arg(long)]
        force: bool,
    },

    /// Show scenario directories
    Paths,
}

pub fn run(args: ScenariosArgs) -> anyhow::Result<()> {
    match args.command {
        ScenariosCommand::List { factory, user } => list_scenarios(factory, user),
        ScenariosCommand::Show { name } => show_scenario(&name),
        ScenariosCommand::Save {
            name,
            base,
            bin,
            description,
            output,
            force,
        } => save_scenario(&name, &base, bin, description, output, force),
        ScenariosCommand::Paths => show_paths(),
    }
}

fn list_scenarios(factory_only: bool, user_only: bool) -> anyhow::Result<()> {
    if !user_only {
        println!("Factory Scenarios:");
        println!("==================");
        for key in factory_scenario_names() {
            if let Some(scenario) = get_factory_scenario(key) {
                let desc = scenario.description.as_deref().unwrap_or("");
                println!("  {:14} - {}", key, desc);
            }
        }
        println!();
    }

    if !factory_only {
        println!("User Scenarios:");
        println!("===============");
        let user = list_user_scenarios();
        if user.is_empty() {
            println!("  (none)");
            println!();
            println!("  Create one with: fourier scenarios save <name> --shape square --nfft 512\n");
        } else {
            for path in user {
                let name = scenario_name_from_path(&path).unwrap_or_else(|| "unknown".into());
                match Scenario::load(&path) {
                    Ok(scenario) => {
                        let desc = scenario.description.as_deref().unwrap_or("");
                        println!("  {:14} - {}", name, desc);
                    }
                    Err(_) => println!("  {:14} - (error loading)", name),
                }
            }
            println!();
        }
    }

    Ok(())
}

fn show_scenario(name: &str) -> anyhow::Result<()> {
    let scenario = ScenarioArgs::named(name).load()?;

    println!("Scenario: {}", scenario.name);
    println!("{}", "=".repeat(10 + scenario.name.len()));
    println!();
    print!("{}", scenario.to_toml()?);
    println!();

    match scenario.sample_count() {
        Ok(n) => println!("Samples:            {n}"),
        Err(e) => println!("Samples:            (invalid: {e})"),
    }
    println!("Spectrum bins:      {}", scenario.spectrum_bins());
    println!("Selected frequency: {:.3} Hz", scenario.selected_frequency_hz());
    if let Err(e) = validate_scenario(&scenario) {
        println!();
        println!("Warning: {e}");
    }

    Ok(())
}

fn save_scenario(
    name: &str,
    base: &ScenarioArgs,
    bin: Option<usize>,
    description: Option<String>,
    output: Option<PathBuf>,
    force: bool,
) -> anyhow::Result<()> {
    validate_scenario_name(name)?;
    let mut scenario = base.load()?;
    scenario.name = name.to_string();
    if let Some(bin) = bin {
        scenario.selected_bin = bin;
    }
    if let Some(desc) = description {
        scenario.description = Some(desc);
    }
    validate_scenario(&scenario)?;

    let path = match output {
        Some(path) => path,
        None => ensure_user_scenarios_dir()?.join(format!("{name}.toml")),
    };

    if path.exists() && !force {
        anyhow::bail!(
            "Scenario file '{}' already exists. Use --force to overwrite.",
            path.display()
        );
    }

    scenario.save(&path)?;
    tracing::info!(path = %path.display(), "scenario saved");
    println!("Saved scenario '{}' to {}", name, path.display());

    Ok(())
}

fn show_paths() -> anyhow::Result<()> {
    let dir = user_scenarios_dir();
    println!("Scenario Directories:");
    println!("=====================");
    println!();
    println!("User scenarios: {}", dir.display());
    println!("  exists: {}", dir.exists());
    println!();
    println!("Factory scenarios are built in: {}", factory_scenario_names().join(", "));
    Ok(())
}
