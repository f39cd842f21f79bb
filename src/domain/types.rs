//! Core identifier types for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a reimbursement set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReimbursementSetId(pub String);

impl ReimbursementSetId {
    /// Generate a fresh random identifier.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl Default for ReimbursementSetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReimbursementSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ReimbursementSetId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ReimbursementSetId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
