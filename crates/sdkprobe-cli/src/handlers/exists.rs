//! Exists command handler.

use std::io::Write;

use anyhow::Result;
use sdkprobe_core::ToolLocatorPort;

use crate::error::CliError;

/// Execute the exists command.
///
/// Prints the resolved path when found. Returns whether the tool exists;
/// absence is a normal answer, not an error.
pub fn execute(locator: &dyn ToolLocatorPort, tool: &str, out: &mut impl Write) -> Result<bool> {
    if tool.trim().is_empty() {
        return Err(CliError::Arguments("tool name must not be empty".into()).into());
    }

    match locator.locate(tool) {
        Some(path) => {
            writeln!(out, "{}", path.display())
                .map_err(|e| CliError::Io(format!("Failed to write tool path: {e}")))?;
            Ok(true)
        }
        None => {
            tracing::info!(tool, "Tool not found on PATH");
            Ok(false)
        }
    }
}
