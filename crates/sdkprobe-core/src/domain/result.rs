//! Outcome of a single probe.

use serde::{Deserialize, Serialize};

use super::ConfigDelta;
use crate::error::ProbeError;

/// Either the configuration delta for a detected SDK or the diagnostic
/// explaining why nothing was detected.
///
/// `NotFound` is a soft outcome: callers decide whether a missing SDK is
/// fatal for their own workflow (see [`ProbeResult::into_result`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ProbeResult {
    /// SDK detected; merge this delta into the build environment.
    Found(ConfigDelta),
    /// SDK not detected; human-readable diagnostic.
    NotFound(String),
}

impl ProbeResult {
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub const fn delta(&self) -> Option<&ConfigDelta> {
        match self {
            Self::Found(delta) => Some(delta),
            Self::NotFound(_) => None,
        }
    }

    /// Diagnostic message, present only for `NotFound`.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Found(_) => None,
            Self::NotFound(message) => Some(message.as_str()),
        }
    }

    /// Escalate a missing SDK to an error.
    pub fn into_result(self) -> Result<ConfigDelta, ProbeError> {
        match self {
            Self::Found(delta) => Ok(delta),
            Self::NotFound(message) => Err(ProbeError::SdkNotFound(message)),
        }
    }
}
