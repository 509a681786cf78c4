//! Authorization vocabulary.

use serde::{Deserialize, Serialize};

/// The kind of operation being attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Observing a record. Maps from safe HTTP methods.
    Read,
    /// Creating, updating, or deleting a record.
    Write,
}

impl Action {
    /// Classify an HTTP method. Safe methods are reads, everything else
    /// is a write.
    pub fn from_method(method: &str) -> Self {
        match method {
            "GET" | "HEAD" | "OPTIONS" => Self::Read,
            _ => Self::Write,
        }
    }
}

/// The outcome of an authorization check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    /// The operation may proceed.
    Allow,
    /// The operation is rejected. Not an error condition.
    Deny,
}

impl Decision {
    /// Whether this decision permits the operation.
    pub fn is_allow(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Allow iff `allowed`.
    pub fn from_bool(allowed: bool) -> Self {
        if allowed {
            Self::Allow
        } else {
            Self::Deny
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_from_method() {
        assert_eq!(Action::from_method("GET"), Action::Read);
        assert_eq!(Action::from_method("HEAD"), Action::Read);
        assert_eq!(Action::from_method("OPTIONS"), Action::Read);
        assert_eq!(Action::from_method("POST"), Action::Write);
        assert_eq!(Action::from_method("PUT"), Action::Write);
        assert_eq!(Action::from_method("PATCH"), Action::Write);
        assert_eq!(Action::from_method("DELETE"), Action::Write);
    }

    #[test]
    fn test_decision_from_bool() {
        assert!(Decision::from_bool(true).is_allow());
        assert!(!Decision::from_bool(false).is_allow());
    }
}
