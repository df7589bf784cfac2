//! Snapshot of the live process environment.

use sdkprobe_core::EnvironmentSnapshot;
use tracing::debug;

/// Capture the current process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
pub fn snapshot_process_env() -> EnvironmentSnapshot {
    std::env::vars_os()
        .filter_map(|(name, value)| match (name.into_string(), value.into_string()) {
            (Ok(name), Ok(value)) => Some((name, value)),
            (name, _) => {
                let name = name.unwrap_or_else(|raw| raw.to_string_lossy().into_owned());
                debug!(var = %name, "Skipping non-UTF-8 environment variable");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_matches_process_env() {
        let snapshot = snapshot_process_env();

        // Every UTF-8 variable visible through std::env::var must be captured.
        for (name, value) in std::env::vars() {
            assert_eq!(snapshot.get(&name), Some(value.as_str()));
        }
    }
}
