//! Caller-side build environment with append-unique merging.

use serde::{Deserialize, Serialize};

use crate::domain::{ConfigDelta, ProbeResult};

/// A mutable build configuration owned by the caller.
///
/// Entries keep first-seen order; merging the same delta twice is a no-op
/// the second time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildEnvironment {
    /// Compiler flags (`CXXFLAGS`), one token per entry.
    pub cxxflags: Vec<String>,
    pub include_paths: Vec<String>,
    /// Library search paths (`LIBPATH`).
    pub library_paths: Vec<String>,
    /// Libraries to link (`LIBS`).
    pub libs: Vec<String>,
}

impl BuildEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a delta, skipping entries that are already present.
    ///
    /// Returns the number of entries actually added.
    pub fn append_unique(&mut self, delta: &ConfigDelta) -> usize {
        append_unique(&mut self.cxxflags, delta.compile_flags())
            + append_unique(&mut self.include_paths, delta.include_paths().iter().cloned())
            + append_unique(&mut self.library_paths, delta.library_paths().iter().cloned())
            + append_unique(&mut self.libs, delta.library_names().iter().cloned())
    }

    /// Merge a `Found` result; hand back the diagnostic of a `NotFound` one.
    pub fn apply<'a>(&mut self, result: &'a ProbeResult) -> Option<&'a str> {
        match result {
            ProbeResult::Found(delta) => {
                self.append_unique(delta);
                None
            }
            ProbeResult::NotFound(message) => Some(message.as_str()),
        }
    }
}

fn append_unique(dst: &mut Vec<String>, items: impl IntoIterator<Item = String>) -> usize {
    let mut added = 0;
    for item in items {
        if !dst.contains(&item) {
            dst.push(item);
            added += 1;
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EnvironmentSnapshot, probe};

    fn java_delta() -> ConfigDelta {
        let env = EnvironmentSnapshot::new().with("JAVA_HOME", "/opt/jdk");
        probe(&env, "JAVA_HOME").into_result().unwrap()
    }

    #[test]
    fn test_append_unique_merges_all_fields() {
        let mut build = BuildEnvironment::new();
        let added = build.append_unique(&java_delta());

        assert_eq!(added, 8);
        assert_eq!(
            build.cxxflags,
            vec!["-I/opt/jdk/include", "-I/opt/jdk/include/solaris"]
        );
        assert_eq!(build.libs, vec!["java", "jvm"]);
        assert_eq!(build.library_paths.len(), 2);
    }

    #[test]
    fn test_append_unique_twice_is_noop() {
        let mut build = BuildEnvironment::new();
        build.append_unique(&java_delta());
        let snapshot = build.clone();

        assert_eq!(build.append_unique(&java_delta()), 0);
        assert_eq!(build, snapshot);
    }

    #[test]
    fn test_append_unique_keeps_existing_order() {
        let mut build = BuildEnvironment {
            libs: vec!["m".into(), "jvm".into()],
            ..BuildEnvironment::default()
        };
        build.append_unique(&java_delta());
        assert_eq!(build.libs, vec!["m", "jvm", "java"]);
    }

    #[test]
    fn test_apply_not_found_leaves_environment_untouched() {
        let mut build = BuildEnvironment::new();
        let result = probe(&EnvironmentSnapshot::new(), "JAVA_HOME");

        assert_eq!(build.apply(&result), Some("Could not detect Java"));
        assert_eq!(build, BuildEnvironment::default());
    }

    #[test]
    fn test_apply_found_merges() {
        let mut build = BuildEnvironment::new();
        let result = ProbeResult::Found(java_delta());
        assert_eq!(build.apply(&result), None);
        assert_eq!(build.include_paths[0], "/opt/jdk/include");
    }
}
