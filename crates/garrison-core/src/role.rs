//! User roles.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a principal holds. Each principal has at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full access to every base and every operation.
    Admin,
    /// Scoped to a single assigned base.
    BaseCommander,
    /// Cross-base visibility with operation-level restrictions.
    LogisticsOfficer,
}

impl Role {
    /// Parse from the wire representation (`admin`, `base_commander`,
    /// `logistics_officer`). Unknown strings yield `None` rather than an
    /// error; a malformed role record must read as "no role".
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "base_commander" => Some(Self::BaseCommander),
            "logistics_officer" => Some(Self::LogisticsOfficer),
            _ => None,
        }
    }

    /// Wire representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::BaseCommander => "base_commander",
            Self::LogisticsOfficer => "logistics_officer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_roundtrip() {
        for role in [Role::Admin, Role::BaseCommander, Role::LogisticsOfficer] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_role_parse_unknown() {
        assert_eq!(Role::parse("quartermaster"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_serde_snake_case() {
        let json = serde_json::to_string(&Role::BaseCommander).unwrap();
        assert_eq!(json, "\"base_commander\"");
    }
}
