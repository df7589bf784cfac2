//! Tool locator port for executable discovery.
//!
//! # Design Notes
//!
//! - Core owns the trait (pure)
//! - Runtime owns the implementation (`PATH` search)
//! - CLI injects the locator via main.rs

use std::path::PathBuf;

use crate::probe::JAVA_TOOL;

/// Port for finding executables on a search path.
///
/// # Example
///
/// ```ignore
/// use sdkprobe_core::ports::ToolLocatorPort;
///
/// fn can_run_javac(locator: &dyn ToolLocatorPort) -> bool {
///     locator.exists("javac")
/// }
/// ```
pub trait ToolLocatorPort: Send + Sync {
    /// Full path of the first executable named `tool`, if any.
    fn locate(&self, tool: &str) -> Option<PathBuf>;

    /// Whether an executable named `tool` is discoverable.
    fn exists(&self, tool: &str) -> bool {
        self.locate(tool).is_some()
    }
}

/// Whether the `java` launcher is discoverable.
pub fn java_tool_exists(locator: &dyn ToolLocatorPort) -> bool {
    locator.exists(JAVA_TOOL)
}
