//! Settings resolution for the CLI.
//!
//! Precedence, lowest first: built-in defaults, the JSON settings file,
//! command-line overrides.

use std::fs;
use std::path::Path;

use sdkprobe_core::{ProbeSettings, SdkLayout, SettingsUpdate, validate_settings};
use tracing::debug;

use crate::commands::ProbeArgs;
use crate::error::CliError;

/// Load settings from `path`, or the defaults when no file is given.
pub fn load_settings(path: Option<&Path>) -> Result<ProbeSettings, CliError> {
    let Some(path) = path else {
        return Ok(ProbeSettings::with_defaults());
    };

    let content = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("Failed to read {}: {e}", path.display())))?;
    let settings: ProbeSettings = serde_json::from_str(&content)
        .map_err(|e| CliError::Config(format!("Invalid settings in {}: {e}", path.display())))?;

    debug!(path = %path.display(), "Loaded probe settings");
    Ok(settings)
}

/// Command-line overrides as a partial settings update.
pub fn overrides_from_args(args: &ProbeArgs) -> SettingsUpdate {
    let layout = match (&args.platform_include, &args.platform_lib) {
        (Some(include), Some(lib)) => Some(SdkLayout::jdk(include, lib)),
        _ => None,
    };

    SettingsUpdate {
        sdk_name: args.sdk.clone(),
        home_var: args.var.clone(),
        layout,
    }
}

/// Resolve and validate the effective settings for a `probe` invocation.
pub fn resolve_settings(
    config: Option<&Path>,
    args: &ProbeArgs,
) -> Result<ProbeSettings, CliError> {
    let mut settings = load_settings(config)?;
    settings.merge(&overrides_from_args(args));
    validate_settings(&settings)?;
    Ok(settings)
}
