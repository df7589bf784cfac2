//! Port definitions (trait abstractions) for active host probing.
//!
//! Core owns the traits; `sdkprobe-runtime` owns the implementations.

mod tool_locator;

pub use tool_locator::{ToolLocatorPort, java_tool_exists};
