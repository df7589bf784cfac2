//! Cargo build-script output for a probe result.
//!
//! Lets a `build.rs` link against the detected SDK:
//!
//! ```ignore
//! let env = sdkprobe_runtime::snapshot_process_env();
//! let result = sdkprobe_core::probe(&env, "JAVA_HOME");
//! sdkprobe_runtime::write_directives(&result, "JAVA_HOME", &mut std::io::stdout())?;
//! ```

use std::io::{self, Write};

use sdkprobe_core::ProbeResult;

/// The `cargo:` lines describing one probe result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CargoDirectives {
    lines: Vec<String>,
}

impl CargoDirectives {
    /// Directives for `result`, probed through `home_var`.
    ///
    /// Always asks Cargo to rerun when `home_var` changes. A missing SDK
    /// becomes a `cargo:warning`, never a build failure.
    pub fn from_result(result: &ProbeResult, home_var: &str) -> Self {
        let mut lines = vec![format!("cargo:rerun-if-env-changed={home_var}")];

        match result {
            ProbeResult::Found(delta) => {
                lines.extend(
                    delta
                        .include_paths()
                        .iter()
                        .map(|path| format!("cargo:include={path}")),
                );
                lines.extend(
                    delta
                        .library_paths()
                        .iter()
                        .map(|path| format!("cargo:rustc-link-search=native={path}")),
                );
                lines.extend(
                    delta
                        .library_names()
                        .iter()
                        .map(|name| format!("cargo:rustc-link-lib=dylib={name}")),
                );
            }
            ProbeResult::NotFound(message) => {
                lines.push(format!("cargo:warning={message}"));
            }
        }

        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        for line in &self.lines {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

/// Write the directives for `result` to `out`.
pub fn write_directives(
    result: &ProbeResult,
    home_var: &str,
    out: &mut impl Write,
) -> io::Result<()> {
    CargoDirectives::from_result(result, home_var).write_to(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdkprobe_core::{EnvironmentSnapshot, probe};

    #[test]
    fn test_found_directives() {
        let env = EnvironmentSnapshot::new().with("JAVA_HOME", "/opt/jdk");
        let directives = CargoDirectives::from_result(&probe(&env, "JAVA_HOME"), "JAVA_HOME");

        assert_eq!(
            directives.lines(),
            [
                "cargo:rerun-if-env-changed=JAVA_HOME",
                "cargo:include=/opt/jdk/include",
                "cargo:include=/opt/jdk/include/solaris",
                "cargo:rustc-link-search=native=/opt/jdk/jre/lib/sparcv9",
                "cargo:rustc-link-search=native=/opt/jdk/jre/lib/sparcv9/server",
                "cargo:rustc-link-lib=dylib=java",
                "cargo:rustc-link-lib=dylib=jvm",
            ]
        );
    }

    #[test]
    fn test_not_found_is_a_warning() {
        let result = probe(&EnvironmentSnapshot::new(), "JAVA_HOME");
        let mut out = Vec::new();
        write_directives(&result, "JAVA_HOME", &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "cargo:rerun-if-env-changed=JAVA_HOME\ncargo:warning=Could not detect Java\n"
        );
    }
}
