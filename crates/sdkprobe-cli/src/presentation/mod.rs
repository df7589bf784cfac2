//! Output rendering for probe results.
//!
//! Rendering produces strings so handlers stay testable; handlers decide
//! where the text goes.

use sdkprobe_core::ProbeResult;
use sdkprobe_runtime::CargoDirectives;

use crate::commands::OutputFormat;
use crate::error::CliError;

/// Render `result` for stdout.
///
/// Returns `None` when the format has nothing to print for a missing SDK;
/// the diagnostic then only goes to stderr.
pub fn render(
    result: &ProbeResult,
    sdk_name: &str,
    home_var: &str,
    format: OutputFormat,
) -> Result<Option<String>, CliError> {
    let rendered = match (format, result) {
        (OutputFormat::Text, ProbeResult::Found(delta)) => {
            let mut out = format!("{sdk_name} detected via {home_var}\n");
            for (label, items) in [
                ("include", delta.include_paths()),
                ("libpath", delta.library_paths()),
                ("libs", delta.library_names()),
            ] {
                for item in items {
                    out.push_str(&format!("  {label:<8} {item}\n"));
                }
            }
            Some(out)
        }
        (OutputFormat::Text | OutputFormat::Flags, ProbeResult::NotFound(_)) => None,
        (OutputFormat::Json, _) => {
            let json = serde_json::to_string_pretty(result).map_err(CliError::from)?;
            Some(format!("{json}\n"))
        }
        (OutputFormat::Flags, ProbeResult::Found(delta)) => Some(format!(
            "{}\n{}\n",
            delta.cxxflags(),
            delta.link_flags().join(" ")
        )),
        (OutputFormat::Cargo, _) => {
            let mut out = String::new();
            for line in CargoDirectives::from_result(result, home_var).lines() {
                out.push_str(line);
                out.push('\n');
            }
            Some(out)
        }
    };

    Ok(rendered)
}
