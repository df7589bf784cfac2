//! Command-line front end for sdkprobe.
//!
//! The binary in `main.rs` is the composition root; everything it wires
//! together is exposed here so it can be tested without spawning processes.

pub mod commands;
pub mod config;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

pub use commands::{Commands, OutputFormat};
pub use error::CliError;
pub use parser::Cli;
