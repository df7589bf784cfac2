//! Directory layout of an SDK installation.

use serde::{Deserialize, Serialize};

use super::ConfigDelta;

/// Platform directory under `include/` in the default JDK layout.
pub const DEFAULT_PLATFORM_INCLUDE_SUBDIR: &str = "solaris";

/// Platform directory under `jre/lib/` in the default JDK layout.
pub const DEFAULT_PLATFORM_LIB_SUBDIR: &str = "sparcv9";

/// Where headers and libraries live relative to an SDK root.
///
/// The default is the Solaris/SPARCv9 JDK shape. Other platforms must be
/// named explicitly through [`SdkLayout::jdk`]; nothing is inferred from the
/// host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkLayout {
    /// Sub-directories added as include paths, in order.
    pub include_subdirs: Vec<String>,
    /// Sub-directories added as library search paths, in order.
    pub library_subdirs: Vec<String>,
    /// Libraries to link against.
    pub library_names: Vec<String>,
}

impl SdkLayout {
    /// JDK layout for the given platform directories.
    ///
    /// `platform_include_subdir` is the directory under `include/` holding
    /// platform headers (`jni_md.h`); `platform_lib_subdir` is the directory
    /// under `jre/lib/` holding the native libraries.
    pub fn jdk(platform_include_subdir: &str, platform_lib_subdir: &str) -> Self {
        Self {
            include_subdirs: vec![
                "include".to_string(),
                format!("include/{platform_include_subdir}"),
            ],
            library_subdirs: vec![
                format!("jre/lib/{platform_lib_subdir}"),
                format!("jre/lib/{platform_lib_subdir}/server"),
            ],
            library_names: vec!["java".to_string(), "jvm".to_string()],
        }
    }

    pub fn jdk_solaris_sparcv9() -> Self {
        Self::jdk(DEFAULT_PLATFORM_INCLUDE_SUBDIR, DEFAULT_PLATFORM_LIB_SUBDIR)
    }

    /// Resolve this layout against an installation root.
    ///
    /// Paths are composed textually as `root/subdir`; the filesystem is not
    /// consulted.
    pub fn resolve(&self, root: &str) -> ConfigDelta {
        let join = |subdirs: &[String]| -> Vec<String> {
            subdirs.iter().map(|sub| format!("{root}/{sub}")).collect()
        };

        ConfigDelta::new(
            join(&self.include_subdirs),
            join(&self.library_subdirs),
            self.library_names.clone(),
        )
    }
}

impl Default for SdkLayout {
    fn default() -> Self {
        Self::jdk_solaris_sparcv9()
    }
}
