//! Authenticated principals.

use crate::{BaseId, Role, UserId};
use serde::{Deserialize, Serialize};

/// An authenticated caller.
///
/// The role is resolved once when the principal is loaded; a missing or
/// malformed role record becomes `None` and every downstream access check
/// treats that as a denial. `assigned_base` is only meaningful for base
/// commanders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// Account identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Resolved role, if the account has a role record.
    pub role: Option<Role>,
    /// The single base a base commander is scoped to.
    pub assigned_base: Option<BaseId>,
}

impl Principal {
    /// Create a principal with a role but no base scope.
    pub fn new(id: UserId, username: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            username: username.into(),
            role: Some(role),
            assigned_base: None,
        }
    }

    /// Create a base commander scoped to `base`.
    pub fn base_commander(id: UserId, username: impl Into<String>, base: BaseId) -> Self {
        Self {
            id,
            username: username.into(),
            role: Some(Role::BaseCommander),
            assigned_base: Some(base),
        }
    }

    /// Create a principal with no role record.
    pub fn without_role(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            role: None,
            assigned_base: None,
        }
    }

    /// Whether the principal holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    /// Whether the principal holds the base commander role.
    pub fn is_base_commander(&self) -> bool {
        self.role == Some(Role::BaseCommander)
    }

    /// Whether the principal holds the logistics officer role.
    pub fn is_logistics_officer(&self) -> bool {
        self.role == Some(Role::LogisticsOfficer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates_without_role() {
        let p = Principal::without_role(UserId::new(), "ghost");
        assert!(!p.is_admin());
        assert!(!p.is_base_commander());
        assert!(!p.is_logistics_officer());
    }

    #[test]
    fn test_base_commander_carries_base() {
        let base = BaseId::new();
        let p = Principal::base_commander(UserId::new(), "cmdr", base);
        assert!(p.is_base_commander());
        assert_eq!(p.assigned_base, Some(base));
    }
}
