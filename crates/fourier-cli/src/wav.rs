//! WAV file reading and writing.

use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// Errors from the WAV layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Decoding or encoding failed.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The file holds no samples.
    #[error("WAV file contains no samples")]
    Empty,
}

/// Result type for WAV operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Read the first channel of a WAV file as `f64` in `[-1, 1]`.
///
/// Returns the samples and the sample rate.
pub fn read_wav_mono<P: AsRef<Path>>(path: P) -> Result<(Vec<f64>, u32)> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let channels = usize::from(spec.channels.max(1));

    let interleaved: Vec<f64> = match spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .map(|s| s.map(f64::from))
            .collect::<std::result::Result<_, _>>()?,
        SampleFormat::Int => {
            let full_scale = f64::from(1u32 << (spec.bits_per_sample.clamp(1, 32) - 1));
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| f64::from(v) / full_scale))
                .collect::<std::result::Result<_, _>>()?
        }
    };

    let samples: Vec<f64> = interleaved.into_iter().step_by(channels).collect();
    if samples.is_empty() {
        return Err(Error::Empty);
    }

    tracing::debug!(
        samples = samples.len(),
        channels,
        sample_rate = spec.sample_rate,
        "read wav"
    );
    Ok((samples, spec.sample_rate))
}

/// Write mono 32-bit float samples.
pub fn write_wav<P: AsRef<Path>>(path: P, samples: &[f64], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec)?;
    for &sample in samples {
        writer.write_sample(sample as f32)?;
    }
    writer.finalize()?;
    Ok(())
}
