//! SDK detection from an environment snapshot.

use tracing::{debug, warn};

use crate::domain::{EnvironmentSnapshot, ProbeResult, SdkLayout};
use crate::settings::ProbeSettings;

/// Display name used in the "not found" diagnostic for Java.
pub const JAVA_SDK_NAME: &str = "Java";

/// Conventional SDK-home variable for a Java installation.
pub const JAVA_HOME_VAR: &str = "JAVA_HOME";

/// Executable whose presence on `PATH` indicates a Java runtime.
pub const JAVA_TOOL: &str = "java";

/// Detects one SDK through its home variable and resolves its layout.
///
/// Stateless: `probe` can be called any number of times, from any thread,
/// and always yields structurally equal results for equal snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainProbe {
    sdk_name: String,
    home_var: String,
    layout: SdkLayout,
}

impl ToolchainProbe {
    pub fn new(
        sdk_name: impl Into<String>,
        home_var: impl Into<String>,
        layout: SdkLayout,
    ) -> Self {
        Self {
            sdk_name: sdk_name.into(),
            home_var: home_var.into(),
            layout,
        }
    }

    /// Java via `JAVA_HOME` with the default JDK layout.
    pub fn java() -> Self {
        Self::new(JAVA_SDK_NAME, JAVA_HOME_VAR, SdkLayout::default())
    }

    pub fn from_settings(settings: &ProbeSettings) -> Self {
        Self::new(
            settings.sdk_name.clone(),
            settings.home_var.clone(),
            settings.layout.clone(),
        )
    }

    pub fn sdk_name(&self) -> &str {
        &self.sdk_name
    }

    pub fn home_var(&self) -> &str {
        &self.home_var
    }

    pub const fn layout(&self) -> &SdkLayout {
        &self.layout
    }

    pub fn not_found_message(&self) -> String {
        format!("Could not detect {}", self.sdk_name)
    }

    /// Look up the home variable and resolve the layout against it.
    ///
    /// An absent or empty variable yields `NotFound` and a single warning
    /// event. The path is trusted as given; it is not checked on disk.
    pub fn probe(&self, env: &EnvironmentSnapshot) -> ProbeResult {
        let Some(root) = env.get_non_empty(&self.home_var) else {
            let message = self.not_found_message();
            warn!(
                target: "sdkprobe::probe",
                sdk = %self.sdk_name,
                var = %self.home_var,
                "{message}"
            );
            return ProbeResult::NotFound(message);
        };

        let delta = self.layout.resolve(root);
        debug!(
            target: "sdkprobe::probe",
            sdk = %self.sdk_name,
            var = %self.home_var,
            root,
            "SDK detected"
        );
        ProbeResult::Found(delta)
    }
}

impl Default for ToolchainProbe {
    fn default() -> Self {
        Self::java()
    }
}

/// Probe for a Java installation through `sdk_home_var`.
pub fn probe(env: &EnvironmentSnapshot, sdk_home_var: &str) -> ProbeResult {
    ToolchainProbe::new(JAVA_SDK_NAME, sdk_home_var, SdkLayout::default()).probe(env)
}
