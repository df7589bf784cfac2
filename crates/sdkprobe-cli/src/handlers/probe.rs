//! Probe command handler.

use std::io::Write;

use anyhow::Result;
use sdkprobe_core::{EnvironmentSnapshot, ProbeResult, ProbeSettings, ToolchainProbe};

use crate::commands::OutputFormat;
use crate::error::CliError;
use crate::presentation::render;

/// Execute the probe command.
///
/// Prints the rendered result to `out`. The diagnostic of a missing SDK is
/// reported once, by the probe's warning event (stderr through the
/// subscriber installed in main). It only becomes an error when `require`
/// is set.
pub fn execute(
    settings: &ProbeSettings,
    env: &EnvironmentSnapshot,
    format: OutputFormat,
    require: bool,
    out: &mut impl Write,
) -> Result<ProbeResult> {
    let probe = ToolchainProbe::from_settings(settings);
    let result = probe.probe(env);

    if let Some(text) = render(&result, probe.sdk_name(), probe.home_var(), format)? {
        out.write_all(text.as_bytes())
            .map_err(|e| CliError::Io(format!("Failed to write output: {e}")))?;
    }

    if require {
        result.clone().into_result().map_err(CliError::from)?;
    }

    Ok(result)
}
