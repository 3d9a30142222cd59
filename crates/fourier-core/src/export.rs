//! CSV export of transform results.
//!
//! Each writer emits a header row followed by one row per sample or bin, with
//! values printed at full `f64` round-trip precision. The `export_*` variants
//! create the file at `path`; the `write_*` variants accept any [`Write`].

use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::{Contributions, Reconstruction, Spectrum, Waveform};

/// Write a waveform as `t,y` rows.
pub fn write_waveform_csv<W: Write>(mut writer: W, waveform: &Waveform) -> io::Result<()> {
    writeln!(writer, "t,y")?;
    for (t, y) in waveform.t.iter().zip(&waveform.y) {
        writeln!(writer, "{t},{y}")?;
    }
    writer.flush()
}

/// Write a spectrum as `bin,freq_hz,real,imag,magnitude,phase_rad` rows.
pub fn write_spectrum_csv<W: Write>(mut writer: W, spectrum: &Spectrum) -> io::Result<()> {
    writeln!(writer, "bin,freq_hz,real,imag,magnitude,phase_rad")?;
    let phase = spectrum.phase();
    for k in 0..spectrum.bins() {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            k,
            spectrum.freq[k],
            spectrum.real[k],
            spectrum.imag[k],
            spectrum.magnitude[k],
            phase[k]
        )?;
    }
    writer.flush()
}

/// Write contributions as `n,t,real,imag` rows, with `t = n / sample_rate`.
pub fn write_contributions_csv<W: Write>(
    mut writer: W,
    contributions: &Contributions,
    sample_rate: u32,
) -> io::Result<()> {
    writeln!(writer, "n,t,real,imag")?;
    let sr = sample_rate.max(1) as f64;
    for (n, (re, im)) in contributions
        .real
        .iter()
        .zip(&contributions.imag)
        .enumerate()
    {
        writeln!(writer, "{},{},{},{}", n, n as f64 / sr, re, im)?;
    }
    writer.flush()
}

/// Write a reconstruction as `t,y` rows.
pub fn write_reconstruction_csv<W: Write>(
    mut writer: W,
    reconstruction: &Reconstruction,
) -> io::Result<()> {
    writeln!(writer, "t,y")?;
    for (t, y) in reconstruction.t.iter().zip(&reconstruction.y) {
        writeln!(writer, "{t},{y}")?;
    }
    writer.flush()
}

fn create(path: &Path) -> io::Result<BufWriter<std::fs::File>> {
    Ok(BufWriter::new(std::fs::File::create(path)?))
}

/// Export a waveform to a CSV file.
pub fn export_waveform_csv(waveform: &Waveform, path: impl AsRef<Path>) -> io::Result<()> {
    write_waveform_csv(create(path.as_ref())?, waveform)
}

/// Export a spectrum to a CSV file.
///
/// # Example
///
/// ```rust,no_run
/// use fourier_core::{compute_spectrum, export::export_spectrum_csv};
///
/// let spectrum = compute_spectrum(&[0.0, 1.0, 0.0, -1.0], 4, 4).unwrap();
/// export_spectrum_csv(&spectrum, "spectrum.csv").unwrap();
/// ```
pub fn export_spectrum_csv(spectrum: &Spectrum, path: impl AsRef<Path>) -> io::Result<()> {
    write_spectrum_csv(create(path.as_ref())?, spectrum)
}

/// Export contributions to a CSV file.
pub fn export_contributions_csv(
    contributions: &Contributions,
    sample_rate: u32,
    path: impl AsRef<Path>,
) -> io::Result<()> {
    write_contributions_csv(create(path.as_ref())?, contributions, sample_rate)
}

/// Export a reconstruction to a CSV file.
pub fn export_reconstruction_csv(
    reconstruction: &Reconstruction,
    path: impl AsRef<Path>,
) -> io::Result<()> {
    write_reconstruction_csv(create(path.as_ref())?, reconstruction)
}

/// Read back the numeric columns of a CSV written by this module.
///
/// Skips the header and any line that fails to parse.
pub fn read_csv_columns(path: impl AsRef<Path>) -> io::Result<Vec<Vec<f64>>> {
    let content = std::fs::read_to_string(path)?;
    let mut columns: Vec<Vec<f64>> = Vec::new();

    for line in content.lines().skip(1) {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Ok(values) = line
            .split(',')
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()
        else {
            continue;
        };
        if columns.is_empty() {
            columns = vec![Vec::new(); values.len()];
        }
        if values.len() == columns.len() {
            for (col, v) in columns.iter_mut().zip(values) {
                col.push(v);
            }
        }
    }

    Ok(columns)
}
