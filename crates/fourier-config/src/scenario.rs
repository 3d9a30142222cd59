//! Scenario file format and operations.

use fourier_core::{Shape, Waveform, generate_waveform};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Everything needed to reproduce one analysis: the test signal, the
/// transform length, and the bin under inspection.
///
/// Scenarios are stored as TOML files. Every field except `name` has a
/// default, so a file only needs to spell out what differs.
///
/// # TOML Format
///
/// ```toml
/// name = "Zero padded"
/// description = "One second of sine padded to 512 points"
/// sample_rate = 256
/// duration = 1.0
/// shape = "sine"
/// secondary_amplitude = 0.0
/// nfft = 512
/// selected_bin = 10
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    /// Name of the scenario.
    pub name: String,

    /// Optional description of the scenario.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Samples per second.
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Signal length in seconds.
    #[serde(default = "default_duration")]
    pub duration: f64,

    /// Shape of the 10 Hz primary component.
    #[serde(default)]
    pub shape: Shape,

    /// Amplitude of the 20 Hz component, drawn in the same shape as the primary.
    #[serde(default)]
    pub secondary_amplitude: f64,

    /// Transform length.
    #[serde(default = "default_nfft")]
    pub nfft: usize,

    /// Bin whose per-sample contributions are inspected, counted on the
    /// signal length rather than on `nfft`.
    #[serde(default = "default_selected_bin")]
    pub selected_bin: usize,
}

fn default_sample_rate() -> u32 {
    256
}

fn default_duration() -> f64 {
    1.0
}

fn default_nfft() -> usize {
    256
}

fn default_selected_bin() -> usize {
    10
}

impl Scenario {
    /// Create a scenario with default parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            duration: default_duration(),
            shape: Shape::default(),
            secondary_amplitude: 0.0,
            nfft: default_nfft(),
            selected_bin: default_selected_bin(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the duration in seconds.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Set the primary shape.
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Set the secondary (20 Hz) amplitude.
    pub fn with_secondary_amplitude(mut self, amplitude: f64) -> Self {
        self.secondary_amplitude = amplitude;
        self
    }

    /// Set the transform length.
    pub fn with_nfft(mut self, nfft: usize) -> Self {
        self.nfft = nfft;
        self
    }

    /// Set the inspected bin.
    pub fn with_selected_bin(mut self, bin: usize) -> Self {
        self.selected_bin = bin;
        self
    }

    /// Load a scenario from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a scenario from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the scenario to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))
    }

    /// Convert the scenario to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Number of one-sided bins the transform produces.
    pub fn spectrum_bins(&self) -> usize {
        fourier_core::bin_count(self.nfft)
    }

    /// Frequency of the selected bin in Hz.
    ///
    /// Contributions are measured against the signal itself, so the bin is
    /// resolved on the signal length N rather than on `nfft`:
    /// `selected_bin · sample_rate / N`. Returns 0 when N cannot be derived.
    pub fn selected_frequency_hz(&self) -> f64 {
        match self.sample_count() {
            Ok(len) if len > 0 => {
                self.selected_bin as f64 * f64::from(self.sample_rate) / len as f64
            }
            _ => 0.0,
        }
    }

    /// Number of samples in the generated signal.
    pub fn sample_count(&self) -> Result<usize, ConfigError> {
        Ok(fourier_core::sample_count(self.sample_rate, self.duration)?)
    }

    /// Generate the test signal this scenario describes.
    pub fn waveform(&self) -> Result<Waveform, ConfigError> {
        Ok(generate_waveform(
            self.sample_rate,
            self.duration,
            self.shape,
            self.secondary_amplitude,
        )?)
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new("Untitled")
    }
}
