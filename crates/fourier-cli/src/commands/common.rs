//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use clap::{Args, ValueEnum};
use fourier_config::{ConfigError, Scenario, resolve_scenario, validate_scenario, validate_signal};
use fourier_core::{FastDft, Shape, Spectrum, Transform, compute_spectrum};
use std::path::PathBuf;

use crate::wav::read_wav_mono;

/// Waveform shape as offered on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliShape {
    /// Sine wave
    Sine,
    /// Triangle wave
    Triangle,
    /// Square wave
    Square,
}

impl From<CliShape> for Shape {
    fn from(shape: CliShape) -> Self {
        match shape {
            CliShape::Sine => Shape::Sine,
            CliShape::Triangle => Shape::Triangle,
            CliShape::Square => Shape::Square,
        }
    }
}

/// Scenario selection plus per-field overrides.
#[derive(Args, Debug, Clone)]
pub struct ScenarioArgs {
    /// Scenario name (factory or user) or path to a TOML file
    #[arg(short, long, default_value = "pure_tone")]
    pub scenario: String,

    /// Override the sample rate in Hz
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Override the duration in seconds
    #[arg(long)]
    pub duration: Option<f64>,

    /// Override the primary waveform shape
    #[arg(long, value_enum)]
    pub shape: Option<CliShape>,

    /// Override the amplitude of the 20 Hz secondary tone
    #[arg(short, long)]
    pub amplitude: Option<f64>,

    /// Override the transform length
    #[arg(short, long)]
    pub nfft: Option<usize>,
}

impl ScenarioArgs {
    /// Select a scenario by name with no overrides.
    pub fn named(name: &str) -> Self {
        Self {
            scenario: name.to_string(),
            sample_rate: None,
            duration: None,
            shape: None,
            amplitude: None,
            nfft: None,
        }
    }

    /// Resolve the named scenario and apply the overrides.
    pub fn load(&self) -> anyhow::Result<Scenario> {
        let mut scenario = match resolve_scenario(&self.scenario) {
            Ok(s) => s,
            Err(ConfigError::ScenarioNotFound(name)) => anyhow::bail!(
                "Scenario '{}' not found. Use 'fourier scenarios list' to see available scenarios.",
                name
            ),
            Err(e) => return Err(e.into()),
        };

        if let Some(sr) = self.sample_rate {
            scenario.sample_rate = sr;
        }
        if let Some(duration) = self.duration {
            scenario.duration = duration;
        }
        if let Some(shape) = self.shape {
            scenario.shape = shape.into();
        }
        if let Some(amplitude) = self.amplitude {
            scenario.secondary_amplitude = amplitude;
        }
        if let Some(nfft) = self.nfft {
            scenario.nfft = nfft;
        }

        Ok(scenario)
    }
}

/// The signal an analysis command works on: a generated scenario or a WAV file.
#[derive(Args, Debug, Clone)]
pub struct SignalArgs {
    #[command(flatten)]
    pub scenario: ScenarioArgs,

    /// Analyse the first channel of a WAV file instead of a generated signal
    #[arg(short, long, conflicts_with_all = ["sample_rate", "duration", "shape", "amplitude"])]
    pub input: Option<PathBuf>,
}

/// A loaded signal with the scenario that describes it.
///
/// For WAV input the scenario's sample rate and duration are replaced by the
/// file's, so derived quantities (`sample_count`, `selected_frequency_hz`)
/// describe the file.
pub struct Signal {
    pub scenario: Scenario,
    pub samples: Vec<f64>,
    pub source: String,
}

impl Signal {
    pub fn sample_rate(&self) -> u32 {
        self.scenario.sample_rate
    }

    pub fn nfft(&self) -> usize {
        self.scenario.nfft
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// One-line description printed above tables.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} samples at {} Hz, nfft {}",
            self.source,
            self.len(),
            self.sample_rate(),
            self.nfft()
        )
    }

    /// Forward transform with the reference or the rustfft backend.
    pub fn spectrum(&self, fast: bool) -> anyhow::Result<Spectrum> {
        let spectrum = if fast {
            FastDft::new(self.nfft())?.spectrum(&self.samples, self.sample_rate())?
        } else {
            compute_spectrum(&self.samples, self.sample_rate(), self.nfft())?
        };
        Ok(spectrum)
    }
}

impl SignalArgs {
    /// Load the signal, optionally selecting a bin, and validate the result.
    ///
    /// The inspected bin is only validated when `check_bin` is set, so
    /// commands that ignore it are not rejected because of it.
    pub fn load(&self, bin: Option<usize>, check_bin: bool) -> anyhow::Result<Signal> {
        let mut scenario = self.scenario.load()?;
        if let Some(bin) = bin {
            scenario.selected_bin = bin;
        }

        let (recorded, source) = match &self.input {
            Some(path) => {
                let (samples, sample_rate) = read_wav_mono(path)
                    .with_context(|| format!("failed to read '{}'", path.display()))?;
                scenario.sample_rate = sample_rate;
                scenario.duration = samples.len() as f64 / f64::from(sample_rate);
                (Some(samples), path.display().to_string())
            }
            None => (None, scenario.name.clone()),
        };

        let validation = if check_bin {
            validate_scenario(&scenario)
        } else {
            validate_signal(&scenario)
        };
        validation.with_context(|| format!("invalid parameters for '{source}'"))?;

        let samples = match recorded {
            Some(samples) => samples,
            None => scenario.waveform()?.y,
        };

        tracing::info!(
            source = %source,
            samples = samples.len(),
            sample_rate = scenario.sample_rate,
            nfft = scenario.nfft,
            "signal loaded"
        );

        Ok(Signal {
            scenario,
            samples,
            source,
        })
    }
}

/// Number of table rows to print: all of `len`, or `limit` if smaller.
pub fn row_count(len: usize, limit: Option<usize>) -> usize {
    limit.map_or(len, |l| l.min(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(scenario: &str) -> ScenarioArgs {
        ScenarioArgs::named(scenario)
    }

    #[test]
    fn overrides_replace_scenario_fields() {
        let mut a = args("pure_tone");
        a.shape = Some(CliShape::Square);
        a.amplitude = Some(0.25);
        a.nfft = Some(512);

        let s = a.load().unwrap();
        assert_eq!(s.shape, Shape::Square);
        assert_eq!(s.secondary_amplitude, 0.25);
        assert_eq!(s.nfft, 512);
        assert_eq!(s.sample_rate, 256);
    }

    #[test]
    fn unknown_scenario_mentions_list_command() {
        let err = args("no_such_scenario_4411").load().unwrap_err();
        assert!(err.to_string().contains("fourier scenarios list"), "got: {err}");
    }

    #[test]
    fn signal_validation_skips_bin_unless_asked() {
        let mut a = args("pure_tone");
        a.duration = Some(0.0625);
        let signal_args = SignalArgs {
            scenario: a,
            input: None,
        };

        // 16 samples: the default bin 10 is past half the signal.
        let signal = signal_args.load(None, false).unwrap();
        assert_eq!(signal.len(), 16);
        assert!(signal_args.load(None, true).is_err());
        assert!(signal_args.load(Some(3), true).is_ok());
    }

    #[test]
    fn backends_agree_on_loaded_signal() {
        let signal = SignalArgs {
            scenario: args("square"),
            input: None,
        }
        .load(None, false)
        .unwrap();

        let direct = signal.spectrum(false).unwrap();
        let fast = signal.spectrum(true).unwrap();
        for k in 0..direct.bins() {
            assert!((direct.magnitude[k] - fast.magnitude[k]).abs() < 1e-9);
        }
    }

    #[test]
    fn row_limit() {
        assert_eq!(row_count(10, None), 10);
        assert_eq!(row_count(10, Some(3)), 3);
        assert_eq!(row_count(2, Some(3)), 2);
    }
}
