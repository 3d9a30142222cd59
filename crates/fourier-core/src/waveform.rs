//! Composite test waveforms.
//!
//! Every generated signal is the sum of a fixed 10 Hz primary component and a
//! 20 Hz secondary component of adjustable amplitude, both drawn with the same
//! [`Shape`]. The two frequencies land on exact bins whenever the transform
//! length equals the sample rate, which is what makes the spectra easy to read.

use core::fmt;
use core::str::FromStr;
use std::f64::consts::TAU;

use crate::error::{Error, Result, check_sample_rate};

/// Frequency of the primary component in Hz.
pub const PRIMARY_HZ: f64 = 10.0;

/// Frequency of the secondary component in Hz.
pub const SECONDARY_HZ: f64 = 20.0;

/// Periodic shape used for both components of a generated waveform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shape {
    /// `sin(2πft)`
    #[default]
    Sine,
    /// Linear ramps between -1 and 1, period `1/f`.
    Triangle,
    /// `sign(sin(2πft))`, zero only at exact zero crossings.
    Square,
}

impl Shape {
    /// All shapes, in display order.
    pub const ALL: [Shape; 3] = [Shape::Sine, Shape::Triangle, Shape::Square];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Shape::Sine => "sine",
            Shape::Triangle => "triangle",
            Shape::Square => "square",
        }
    }

    /// Evaluate the shape at frequency `freq_hz` and time `t` seconds.
    ///
    /// # Shapes
    ///
    /// - **Sine**: `sin(2πft)`
    /// - **Triangle**: `2·|2·((t·f) mod 1) − 1| − 1`
    /// - **Square**: `sign(sin(2πft))`
    ///
    /// The square wave is decided on the fractional cycle position rather than
    /// on the sign of a computed sine, so samples that fall exactly on a zero
    /// crossing (for instance `t = 0.25`, `f = 10`) yield 0 even though
    /// `sin(5π)` evaluates to a tiny non-zero number in floating point.
    #[inline]
    pub fn evaluate(self, freq_hz: f64, t: f64) -> f64 {
        match self {
            Shape::Sine => (TAU * freq_hz * t).sin(),
            Shape::Triangle => {
                let cycle = (t * freq_hz).rem_euclid(1.0);
                2.0 * (2.0 * cycle - 1.0).abs() - 1.0
            }
            Shape::Square => {
                let cycle = (t * freq_hz).rem_euclid(1.0);
                if cycle == 0.0 || cycle == 0.5 {
                    0.0
                } else if cycle < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sine" | "sin" => Ok(Shape::Sine),
            "triangle" | "tri" => Ok(Shape::Triangle),
            "square" | "sq" => Ok(Shape::Square),
            other => Err(Error::invalid(
                "shape",
                format!("unknown shape '{other}' (expected sine, triangle or square)"),
            )),
        }
    }
}

/// A generated sample sequence with its time axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Waveform {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Time of each sample in seconds, `t[i] = i / sample_rate`.
    pub t: Vec<f64>,
    /// Sample values.
    pub y: Vec<f64>,
}

impl Waveform {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// True when the waveform holds no samples.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Duration covered by the samples in seconds.
    pub fn duration(&self) -> f64 {
        self.y.len() as f64 / self.sample_rate as f64
    }
}

/// Time axis of `len` samples at `sample_rate`.
pub fn time_axis(sample_rate: u32, len: usize) -> Vec<f64> {
    let sr = sample_rate as f64;
    (0..len).map(|i| i as f64 / sr).collect()
}

/// Number of samples covering `duration` seconds: `round(sample_rate · duration)`.
pub fn sample_count(sample_rate: u32, duration: f64) -> Result<usize> {
    check_sample_rate(sample_rate)?;
    if !duration.is_finite() || duration <= 0.0 {
        return Err(Error::invalid(
            "duration",
            format!("must be a positive number of seconds, got {duration}"),
        ));
    }
    let count = (sample_rate as f64 * duration).round();
    if count > usize::MAX as f64 {
        return Err(Error::invalid("duration", "sample count overflows usize"));
    }
    Ok(count as usize)
}

/// Generate `shape(10, t) + secondary_amplitude · shape(20, t)`.
///
/// Produces `round(sample_rate · duration)` samples and the matching time
/// axis. The amplitude is not range-limited here; the presentation layer
/// decides what it offers to users.
///
/// # Example
///
/// ```rust
/// use fourier_core::{Shape, generate_waveform};
///
/// let wave = generate_waveform(256, 1.0, Shape::Sine, 0.5).unwrap();
/// assert_eq!(wave.len(), 256);
/// assert_eq!(wave.t[128], 0.5);
/// ```
pub fn generate_waveform(
    sample_rate: u32,
    duration: f64,
    shape: Shape,
    secondary_amplitude: f64,
) -> Result<Waveform> {
    let len = sample_count(sample_rate, duration)?;
    if !secondary_amplitude.is_finite() {
        return Err(Error::invalid(
            "secondary_amplitude",
            format!("must be finite, got {secondary_amplitude}"),
        ));
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(sample_rate, samples = len, %shape, secondary_amplitude, "generate_waveform");

    let t = time_axis(sample_rate, len);
    let y = t
        .iter()
        .map(|&ti| {
            shape.evaluate(PRIMARY_HZ, ti) + secondary_amplitude * shape.evaluate(SECONDARY_HZ, ti)
        })
        .collect();

    Ok(Waveform { sample_rate, t, y })
}
