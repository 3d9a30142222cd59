//! Fourier Core - the numeric engine behind the Fourier explorer
//!
//! This crate turns a composite waveform into its frequency components and
//! back again, exposing every intermediate step so it can be visualised:
//!
//! - [`waveform`] - 10 Hz + 20 Hz test signals in sine, triangle or square shape
//! - [`dft`] - Direct-summation one-sided DFT with zero-padding and truncation
//! - [`fft`] - rustfft-backed transform with identical conventions
//! - [`spectrum`] - Spectrum type, phase, dB and peak picking
//! - [`contribution`] - Per-sample contributions to a single bin
//! - [`reconstruct`] - Inverse transform from a one-sided spectrum
//! - [`export`] - CSV writers for every result type
//!
//! All operations are pure functions of their arguments. Out-of-contract
//! arguments are rejected with an [`Error`] instead of being clamped.
//!
//! ## Example Workflow
//!
//! ```rust
//! use fourier_core::{Shape, compute_contributions, compute_spectrum, generate_waveform, reconstruct};
//!
//! // 1. Generate a 10 Hz sine plus half-amplitude 20 Hz sine
//! let wave = generate_waveform(256, 1.0, Shape::Sine, 0.5).unwrap();
//!
//! // 2. Transform
//! let spectrum = compute_spectrum(&wave.y, wave.sample_rate, 256).unwrap();
//! assert_eq!(spectrum.peak_bin(), Some(10));
//!
//! // 3. Inspect how each sample feeds the 20 Hz bin
//! let contributions = compute_contributions(&wave.y, 20).unwrap();
//! let (re, im) = contributions.sum();
//! assert_eq!((re, im), (spectrum.real[20], spectrum.imag[20]));
//!
//! // 4. Reconstruct
//! let synth = reconstruct(&spectrum.real, &spectrum.imag, 256, 256).unwrap();
//! assert!(synth.max_error(&wave.y) < 1e-9);
//! ```
//!
//! ## Features
//!
//! - `serde` - `Serialize` for result types, `Serialize`/`Deserialize` for [`Shape`]
//! - `tracing` - `debug`-level events for each operation

pub mod contribution;
pub mod dft;
pub mod error;
pub mod export;
pub mod fft;
pub mod reconstruct;
pub mod spectrum;
pub mod waveform;

// Re-export main types
pub use contribution::{BasisComponents, Contributions, basis_components, compute_contributions};
pub use dft::{Dft, Transform, compute_spectrum, scale};
pub use error::{Error, Result};
pub use fft::FastDft;
pub use reconstruct::{Reconstruction, reconstruct, reconstruct_spectrum, reconstruct_with};
pub use spectrum::{Peak, Spectrum, bin_count, find_peaks};
pub use waveform::{
    PRIMARY_HZ, SECONDARY_HZ, Shape, Waveform, generate_waveform, sample_count, time_axis,
};
