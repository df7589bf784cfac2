//! `PATH`-based executable discovery.

use std::ffi::OsString;
use std::path::PathBuf;

use sdkprobe_core::{EnvironmentSnapshot, ToolLocatorPort};
use tracing::debug;

/// Finds executables by searching a `PATH`-style list of directories.
///
/// By default the live process `PATH` is searched. A locator built with
/// [`PathToolLocator::with_search_path`] or [`PathToolLocator::from_snapshot`]
/// searches only the given directories.
#[derive(Debug, Clone, Default)]
pub struct PathToolLocator {
    search_path: Option<OsString>,
}

impl PathToolLocator {
    /// Search the live process `PATH`.
    pub const fn new() -> Self {
        Self { search_path: None }
    }

    /// Search an explicit `PATH`-style directory list.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(search_path.into()),
        }
    }

    /// Search the `PATH` recorded in a snapshot; an absent `PATH` finds nothing.
    pub fn from_snapshot(env: &EnvironmentSnapshot) -> Self {
        Self::with_search_path(env.get("PATH").unwrap_or_default())
    }
}

impl ToolLocatorPort for PathToolLocator {
    fn locate(&self, tool: &str) -> Option<PathBuf> {
        if tool.is_empty() {
            return None;
        }

        let found = match &self.search_path {
            None => which::which(tool),
            Some(paths) if paths.is_empty() => return None,
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                which::which_in(tool, Some(paths), cwd)
            }
        };

        match found {
            Ok(path) => {
                debug!(tool, path = %path.display(), "Tool located");
                Some(path)
            }
            Err(e) => {
                debug!(tool, error = %e, "Tool not found");
                None
            }
        }
    }
}

/// Whether an executable named `tool` is on the process `PATH`.
pub fn exists(tool: &str) -> bool {
    PathToolLocator::new().exists(tool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tool_name_is_never_found() {
        assert!(!PathToolLocator::new().exists(""));
    }

    #[test]
    fn test_missing_tool_is_not_found() {
        assert!(!exists("sdkprobe-definitely-not-a-real-tool"));
    }

    #[test]
    fn test_snapshot_without_path_finds_nothing() {
        let locator = PathToolLocator::from_snapshot(&EnvironmentSnapshot::new());
        assert!(locator.locate("sh").is_none());
    }
}
