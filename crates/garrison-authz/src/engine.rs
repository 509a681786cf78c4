//! The decision function.

use crate::{Action, Decision};
use garrison_core::{Principal, ResourceScope, Role};

/// Decide whether `principal` may perform `action` on a record with the
/// given scope.
///
/// Rules, first match wins:
///
/// 1. Admins are allowed everything.
/// 2. Dual-base records (transfers) admit base commanders whose assigned
///    base is either endpoint; every other non-admin role is denied at
///    object level.
/// 3. Single-base records admit base commanders iff the record's base is
///    their assigned base. Logistics officers are allowed; the
///    write-side restriction for that role is owned by calling handlers,
///    not the engine.
/// 4. The base entity itself follows the single-base rules applied to its
///    own identity.
/// 5. No role record means deny.
pub fn decide(principal: &Principal, scope: ResourceScope, action: Action) -> Decision {
    let decision = match principal.role {
        None => Decision::Deny,
        Some(Role::Admin) => Decision::Allow,
        Some(role) => match scope {
            ResourceScope::DualBase { .. } => match role {
                Role::BaseCommander => Decision::from_bool(
                    principal
                        .assigned_base
                        .map(|b| scope.involves(b))
                        .unwrap_or(false),
                ),
                _ => Decision::Deny,
            },
            ResourceScope::SingleBase { base } | ResourceScope::BaseItself { base } => match role {
                Role::BaseCommander => {
                    Decision::from_bool(principal.assigned_base == Some(base))
                }
                // Operation-type restrictions for this role are an
                // extension point owned by the handlers.
                Role::LogisticsOfficer => Decision::Allow,
                Role::Admin => Decision::Allow,
            },
        },
    };

    crate::log_decision(principal, scope, action, decision);
    decision
}

/// Coarse pre-check for the assignments routes: reads are open to every
/// caller, writes require admin or base commander. The fine-grained base
/// match still happens in [`decide`] when an object is involved.
pub fn can_modify_assignments(principal: &Principal, action: Action) -> Decision {
    match action {
        Action::Read => Decision::Allow,
        Action::Write => Decision::from_bool(matches!(
            principal.role,
            Some(Role::Admin) | Some(Role::BaseCommander)
        )),
    }
}
