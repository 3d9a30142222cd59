//! CLI command implementations.

pub mod common;
pub mod contributions;
pub mod generate;
pub mod reconstruct;
pub mod scenarios;
pub mod spectrum;
