//! Assignment endpoints.
//!
//! Every assignment route passes the coarse role pre-check first,
//! classified from the HTTP method; writes then face the object-level
//! base match on top.

use super::{require, visible_in_listing};
use crate::{
    error::{ApiError, ApiResult},
    middleware::Auth,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::{Method, StatusCode},
    Json,
};
use chrono::NaiveDate;
use garrison_authz::{can_modify_assignments, decide, Action};
use garrison_core::{Assignment, AssignmentId, BaseId, EquipmentTypeId, ResourceScope, Scoped};
use serde::Deserialize;
use serde_json::{json, Value};

/// Payload for creating an assignment.
#[derive(Debug, Deserialize)]
pub struct CreateAssignment {
    pub base: BaseId,
    pub equipment_type: EquipmentTypeId,
    pub quantity: u32,
    pub assigned_to: String,
    pub assignment_date: NaiveDate,
}

fn require_assignment_access(
    principal: &garrison_core::Principal,
    method: &Method,
) -> ApiResult<()> {
    if can_modify_assignments(principal, Action::from_method(method.as_str())).is_allow() {
        Ok(())
    } else {
        Err(ApiError::InsufficientPermissions)
    }
}

/// List assignments visible to the caller.
pub async fn list(
    State(state): State<AppState>,
    Auth(principal): Auth,
    method: Method,
) -> ApiResult<Json<Value>> {
    require_assignment_access(&principal, &method)?;

    let assignments: Vec<Assignment> = state
        .store
        .assignments()
        .into_iter()
        .filter(|a| visible_in_listing(&principal, a.scope()))
        .collect();

    Ok(Json(json!({ "assignments": assignments })))
}

/// Fetch one assignment.
pub async fn get(
    State(state): State<AppState>,
    Auth(principal): Auth,
    method: Method,
    Path(id): Path<String>,
) -> ApiResult<Json<Assignment>> {
    require_assignment_access(&principal, &method)?;

    let id = AssignmentId::parse(&id)?;
    let assignment = state
        .store
        .assignment(id)
        .ok_or(ApiError::ResourceNotFound {
            resource: "assignment".into(),
            id: id.to_string(),
        })?;

    require(decide(&principal, assignment.scope(), Action::Read))?;

    Ok(Json(assignment))
}

/// Assign equipment to personnel at a base.
pub async fn create(
    State(state): State<AppState>,
    Auth(principal): Auth,
    method: Method,
    Json(payload): Json<CreateAssignment>,
) -> ApiResult<(StatusCode, Json<Assignment>)> {
    require_assignment_access(&principal, &method)?;

    if payload.quantity == 0 {
        return Err(ApiError::BadRequest("quantity must be positive".into()));
    }
    if state.store.base(payload.base).is_none() {
        return Err(ApiError::BadRequest("unknown base".into()));
    }
    if state.store.equipment_type(payload.equipment_type).is_none() {
        return Err(ApiError::BadRequest("unknown equipment type".into()));
    }

    let scope = ResourceScope::SingleBase { base: payload.base };
    require(decide(&principal, scope, Action::Write))?;

    let assignment = Assignment {
        id: AssignmentId::new(),
        base: payload.base,
        equipment_type: payload.equipment_type,
        quantity: payload.quantity,
        assigned_to: payload.assigned_to,
        assignment_date: payload.assignment_date,
        returned: false,
    };
    state.store.insert_assignment(assignment.clone());

    Ok((StatusCode::CREATED, Json(assignment)))
}

/// Mark an assignment as returned.
pub async fn mark_returned(
    State(state): State<AppState>,
    Auth(principal): Auth,
    method: Method,
    Path(id): Path<String>,
) -> ApiResult<Json<Assignment>> {
    require_assignment_access(&principal, &method)?;

    let id = AssignmentId::parse(&id)?;
    let assignment = state
        .store
        .assignment(id)
        .ok_or(ApiError::ResourceNotFound {
            resource: "assignment".into(),
            id: id.to_string(),
        })?;

    require(decide(&principal, assignment.scope(), Action::Write))?;

    if assignment.returned {
        return Err(ApiError::StateConflict("assignment already returned".into()));
    }

    let updated = state
        .store
        .mark_assignment_returned(id)
        .ok_or(ApiError::NotFound("Assignment".into()))?;

    Ok(Json(updated))
}
