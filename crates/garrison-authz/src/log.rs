//! Decision trace logging.

use crate::{Action, Decision};
use garrison_core::{Principal, ResourceScope};
use tracing::debug;

/// Emit a trace event for an authorization decision.
///
/// Denials are expected outcomes, so both branches log at debug; the
/// operational record of the call itself is the audit log's job.
pub fn log_decision(
    principal: &Principal,
    scope: ResourceScope,
    action: Action,
    decision: Decision,
) {
    match decision {
        Decision::Allow => debug!(
            event = "authz_allowed",
            user = %principal.id,
            role = ?principal.role,
            scope = ?scope,
            action = ?action,
        ),
        Decision::Deny => debug!(
            event = "authz_denied",
            user = %principal.id,
            role = ?principal.role,
            scope = ?scope,
            action = ?action,
        ),
    }
}
