//! Probe settings and validation.
//!
//! Pure settings types; loading from disk happens in the CLI.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::SdkLayout;
use crate::error::SettingsError;
use crate::probe::{JAVA_HOME_VAR, JAVA_SDK_NAME};

/// Which SDK to probe for, and how its installation is laid out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProbeSettings {
    /// Name used in diagnostics ("Could not detect <name>").
    pub sdk_name: String,

    /// Environment variable holding the installation root.
    pub home_var: String,

    /// Directory layout below the installation root.
    pub layout: SdkLayout,
}

impl ProbeSettings {
    /// Java via `JAVA_HOME` with the Solaris/SPARCv9 layout.
    pub fn with_defaults() -> Self {
        Self {
            sdk_name: JAVA_SDK_NAME.to_string(),
            home_var: JAVA_HOME_VAR.to_string(),
            layout: SdkLayout::default(),
        }
    }

    /// Merge a partial update, only touching fields that are `Some`.
    pub fn merge(&mut self, update: &SettingsUpdate) {
        if let Some(ref name) = update.sdk_name {
            self.sdk_name.clone_from(name);
        }
        if let Some(ref var) = update.home_var {
            self.home_var.clone_from(var);
        }
        if let Some(ref layout) = update.layout {
            self.layout.clone_from(layout);
        }
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Partial settings update, e.g. from command-line overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub sdk_name: Option<String>,
    pub home_var: Option<String>,
    pub layout: Option<SdkLayout>,
}

/// Validate settings before probing.
pub fn validate_settings(settings: &ProbeSettings) -> Result<(), SettingsError> {
    if settings.sdk_name.trim().is_empty() {
        return Err(SettingsError::EmptySdkName);
    }

    if settings.home_var.is_empty() {
        return Err(SettingsError::EmptyHomeVar);
    }
    if settings.home_var.contains(['=', '\0']) {
        return Err(SettingsError::InvalidHomeVar(settings.home_var.clone()));
    }

    if let Some(pos) = settings
        .layout
        .library_names
        .iter()
        .position(|name| name.trim().is_empty())
    {
        return Err(SettingsError::EmptyLibraryName(pos));
    }

    let layout = &settings.layout;
    if let Some(sub) = layout
        .include_subdirs
        .iter()
        .chain(&layout.library_subdirs)
        .find(|sub| sub.split('/').any(str::is_empty) && !sub.starts_with('/'))
    {
        return Err(SettingsError::EmptySubdir(sub.clone()));
    }
    if let Some(sub) = layout
        .include_subdirs
        .iter()
        .chain(&layout.library_subdirs)
        .find(|sub| sub.starts_with('/') || Path::new(sub.as_str()).is_absolute())
    {
        return Err(SettingsError::AbsoluteSubdir(sub.clone()));
    }

    Ok(())
}
