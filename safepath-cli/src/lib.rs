//! Library exports for safepath-cli.
//!
//! The binary is a thin wrapper over these modules; exporting them lets
//! unit tests and the benchmarks reach the command structure directly.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
