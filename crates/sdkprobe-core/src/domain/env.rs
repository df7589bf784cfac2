//! Read-only environment variable snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A captured set of environment variables.
///
/// The probe reads from a snapshot instead of the live process environment,
/// which keeps detection a pure function and lets tests build arbitrary
/// environments without touching global state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvironmentSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvironmentSnapshot {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from `(name, value)` pairs.
    ///
    /// Later pairs win when a name repeats.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Add or replace a variable.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Value of `name`, if present (possibly empty).
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Value of `name`, treating an empty value as absent.
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for EnvironmentSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_distinguishes_empty_from_absent() {
        let env = EnvironmentSnapshot::new().with("EMPTY", "");

        assert_eq!(env.get("EMPTY"), Some(""));
        assert_eq!(env.get_non_empty("EMPTY"), None);
        assert_eq!(env.get("MISSING"), None);
        assert!(env.contains("EMPTY"));
        assert!(!env.contains("MISSING"));
    }

    #[test]
    fn test_from_pairs_last_value_wins() {
        let env = EnvironmentSnapshot::from_pairs([("A", "1"), ("B", "2"), ("A", "3")]);

        assert_eq!(env.len(), 2);
        assert_eq!(env.get("A"), Some("3"));
    }

    #[test]
    fn test_iter_is_sorted_by_name() {
        let env = EnvironmentSnapshot::from_pairs([("ZED", "z"), ("ALPHA", "a")]);
        let names: Vec<&str> = env.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["ALPHA", "ZED"]);
    }

    #[test]
    fn test_deserializes_from_plain_json_object() {
        let env: EnvironmentSnapshot =
            serde_json::from_str(r#"{"JAVA_HOME": "/opt/jdk"}"#).unwrap();
        assert_eq!(env.get("JAVA_HOME"), Some("/opt/jdk"));
    }
}
