//! Request handlers for the v1 API.

pub mod assignments;
pub mod bases;
pub mod equipment_types;
pub mod expenditures;
pub mod inventory;
pub mod purchases;
pub mod transfers;

use crate::error::{ApiError, ApiResult};
use garrison_authz::Decision;
use garrison_core::{Principal, ResourceScope, Role};

/// Collection-level visibility.
///
/// This is deliberately separate from the object-level decision function:
/// admins and logistics officers see every record in listings, base
/// commanders only the records their assigned base participates in.
pub(crate) fn visible_in_listing(principal: &Principal, scope: ResourceScope) -> bool {
    match principal.role {
        None => false,
        Some(Role::Admin) | Some(Role::LogisticsOfficer) => true,
        Some(Role::BaseCommander) => principal
            .assigned_base
            .map(|b| scope.involves(b))
            .unwrap_or(false),
    }
}

/// Map an object-level decision to a handler result.
pub(crate) fn require(decision: Decision) -> ApiResult<()> {
    if decision.is_allow() {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garrison_core::{BaseId, UserId};

    #[test]
    fn test_listing_visibility_per_role() {
        let base = BaseId::new();
        let scope = ResourceScope::SingleBase { base };

        let admin = Principal::new(UserId::new(), "a", Role::Admin);
        let logistics = Principal::new(UserId::new(), "l", Role::LogisticsOfficer);
        let cmdr_here = Principal::base_commander(UserId::new(), "c1", base);
        let cmdr_there = Principal::base_commander(UserId::new(), "c2", BaseId::new());
        let ghost = Principal::without_role(UserId::new(), "g");

        assert!(visible_in_listing(&admin, scope));
        assert!(visible_in_listing(&logistics, scope));
        assert!(visible_in_listing(&cmdr_here, scope));
        assert!(!visible_in_listing(&cmdr_there, scope));
        assert!(!visible_in_listing(&ghost, scope));
    }

    #[test]
    fn test_logistics_sees_transfers_in_listings() {
        // Object-level access to transfers is denied for logistics
        // officers, yet listings still include them.
        let scope = ResourceScope::DualBase {
            from_base: BaseId::new(),
            to_base: BaseId::new(),
        };
        let logistics = Principal::new(UserId::new(), "l", Role::LogisticsOfficer);
        assert!(visible_in_listing(&logistics, scope));
    }
}
