//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Take their inputs (settings, environment, locator, output sink) explicitly
//! - Call into `sdkprobe-core` / `sdkprobe-runtime`
//! - Format output for the terminal

pub mod exists;
pub mod probe;
