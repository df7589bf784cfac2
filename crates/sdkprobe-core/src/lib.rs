//! Core domain for sdkprobe.
//!
//! Detects an SDK installation from an explicitly passed environment snapshot
//! and turns it into build-configuration deltas. Everything in this crate is
//! pure: active probing (process environment, `PATH` lookup) lives in
//! `sdkprobe-runtime`.
#![deny(unused_crate_dependencies)]

pub mod build_env;
pub mod domain;
pub mod error;
pub mod ports;
pub mod probe;
pub mod settings;

pub use build_env::BuildEnvironment;
pub use domain::{
    ConfigDelta, DEFAULT_PLATFORM_INCLUDE_SUBDIR, DEFAULT_PLATFORM_LIB_SUBDIR, EnvironmentSnapshot,
    ProbeResult, SdkLayout,
};
pub use error::{ProbeError, SettingsError};
pub use ports::{ToolLocatorPort, java_tool_exists};
pub use probe::{JAVA_HOME_VAR, JAVA_SDK_NAME, JAVA_TOOL, ToolchainProbe, probe};
pub use settings::{ProbeSettings, SettingsUpdate, validate_settings};

// serde_json is only exercised by serialization tests
#[cfg(test)]
use serde_json as _;
