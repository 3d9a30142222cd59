//! Scenario demo: factory scenarios, validation, and TOML output.
//!
//! Run with: cargo run -p fourier-config --example scenario_demo

use fourier_config::{Scenario, factory_scenarios, validate_scenario};
use fourier_core::{Shape, compute_spectrum};

fn main() -> Result<(), fourier_config::ConfigError> {
    println!("=== Factory Scenarios ===\n");
    println!(
        "{:<14} {:>6} {:>6} {:>9} {:>6} {:>10}",
        "Name", "Shape", "NFFT", "Bin", "Hz", "Peak bin"
    );

    for scenario in factory_scenarios() {
        let wave = scenario.waveform()?;
        let spectrum = compute_spectrum(&wave.y, scenario.sample_rate, scenario.nfft)?;
        println!(
            "{:<14} {:>6} {:>6} {:>9} {:>6.1} {:>10}",
            scenario.name,
            scenario.shape,
            scenario.nfft,
            scenario.selected_bin,
            scenario.selected_frequency_hz(),
            spectrum.peak_bin().map_or_else(|| "-".to_string(), |b| b.to_string()),
        );
    }

    println!("\n=== Validation ===\n");
    let wild = Scenario::new("Wild")
        .with_shape(Shape::Triangle)
        .with_secondary_amplitude(1.5)
        .with_nfft(200);
    match validate_scenario(&wild) {
        Ok(()) => println!("{} is valid", wild.name),
        Err(e) => println!("{} rejected: {e}", wild.name),
    }

    println!("\n=== TOML ===\n");
    let custom = Scenario::new("Padded square")
        .with_description("Square wave zero-padded to 1024 points")
        .with_shape(Shape::Square)
        .with_nfft(1024)
        .with_selected_bin(40);
    print!("{}", custom.to_toml()?);

    Ok(())
}
