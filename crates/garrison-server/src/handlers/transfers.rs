//! Transfer endpoints.
//!
//! Transfers span two bases; object-level access follows the dual-base
//! rule, so a base commander must hold either endpoint.

use super::{require, visible_in_listing};
use crate::{
    error::{ApiError, ApiResult},
    middleware::Auth,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use garrison_authz::{decide, Action};
use garrison_core::{BaseId, EquipmentTypeId, ResourceScope, Scoped, Transfer, TransferId};
use serde::Deserialize;
use serde_json::{json, Value};

/// Payload for recording a transfer.
#[derive(Debug, Deserialize)]
pub struct CreateTransfer {
    pub from_base: BaseId,
    pub to_base: BaseId,
    pub equipment_type: EquipmentTypeId,
    pub quantity: u32,
    pub transfer_date: NaiveDate,
}

/// List transfers visible to the caller.
pub async fn list(State(state): State<AppState>, Auth(principal): Auth) -> ApiResult<Json<Value>> {
    let transfers: Vec<Transfer> = state
        .store
        .transfers()
        .into_iter()
        .filter(|t| visible_in_listing(&principal, t.scope()))
        .collect();

    Ok(Json(json!({ "transfers": transfers })))
}

/// Fetch one transfer.
pub async fn get(
    State(state): State<AppState>,
    Auth(principal): Auth,
    Path(id): Path<String>,
) -> ApiResult<Json<Transfer>> {
    let id = TransferId::parse(&id)?;
    let transfer = state.store.transfer(id).ok_or(ApiError::ResourceNotFound {
        resource: "transfer".into(),
        id: id.to_string(),
    })?;

    require(decide(&principal, transfer.scope(), Action::Read))?;

    Ok(Json(transfer))
}

/// Record a transfer between two bases.
pub async fn create(
    State(state): State<AppState>,
    Auth(principal): Auth,
    Json(payload): Json<CreateTransfer>,
) -> ApiResult<(StatusCode, Json<Transfer>)> {
    if payload.from_base == payload.to_base {
        return Err(ApiError::BadRequest(
            "transfer endpoints must be distinct bases".into(),
        ));
    }
    if payload.quantity == 0 {
        return Err(ApiError::BadRequest("quantity must be positive".into()));
    }
    for base in [payload.from_base, payload.to_base] {
        if state.store.base(base).is_none() {
            return Err(ApiError::BadRequest("unknown base".into()));
        }
    }
    if state.store.equipment_type(payload.equipment_type).is_none() {
        return Err(ApiError::BadRequest("unknown equipment type".into()));
    }

    let scope = ResourceScope::DualBase {
        from_base: payload.from_base,
        to_base: payload.to_base,
    };
    require(decide(&principal, scope, Action::Write))?;

    let transfer = Transfer {
        id: TransferId::new(),
        from_base: payload.from_base,
        to_base: payload.to_base,
        equipment_type: payload.equipment_type,
        quantity: payload.quantity,
        transfer_date: payload.transfer_date,
        created_by: principal.id,
    };
    state.store.insert_transfer(transfer.clone());

    Ok((StatusCode::CREATED, Json(transfer)))
}
