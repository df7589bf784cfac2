//! Build-configuration additions produced by a successful probe.

use serde::{Deserialize, Serialize};

/// Include paths, library search paths and library names to merge into a
/// build environment.
///
/// A delta is immutable once produced; merging (and any de-duplication) is
/// the caller's concern. See [`crate::BuildEnvironment`] for one such caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDelta {
    include_paths: Vec<String>,
    library_paths: Vec<String>,
    library_names: Vec<String>,
}

impl ConfigDelta {
    pub const fn new(
        include_paths: Vec<String>,
        library_paths: Vec<String>,
        library_names: Vec<String>,
    ) -> Self {
        Self {
            include_paths,
            library_paths,
            library_names,
        }
    }

    pub fn include_paths(&self) -> &[String] {
        &self.include_paths
    }

    pub fn library_paths(&self) -> &[String] {
        &self.library_paths
    }

    pub fn library_names(&self) -> &[String] {
        &self.library_names
    }

    pub fn is_empty(&self) -> bool {
        self.include_paths.is_empty()
            && self.library_paths.is_empty()
            && self.library_names.is_empty()
    }

    /// Compiler flags, one `-I<path>` per include path.
    pub fn compile_flags(&self) -> Vec<String> {
        self.include_paths
            .iter()
            .map(|path| format!("-I{path}"))
            .collect()
    }

    /// Compile flags as a single space-separated `CXXFLAGS` string.
    pub fn cxxflags(&self) -> String {
        self.compile_flags().join(" ")
    }

    /// Linker flags: `-L<path>` for each search path, then `-l<name>` for each library.
    pub fn link_flags(&self) -> Vec<String> {
        self.library_paths
            .iter()
            .map(|path| format!("-L{path}"))
            .chain(self.library_names.iter().map(|name| format!("-l{name}")))
            .collect()
    }
}
