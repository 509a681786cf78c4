//! Inventory endpoints.

use super::{require, visible_in_listing};
use crate::{
    error::{ApiError, ApiResult},
    middleware::Auth,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use garrison_authz::{decide, Action};
use garrison_core::{Inventory, InventoryId, Scoped};
use serde_json::{json, Value};

/// List stock records visible to the caller.
pub async fn list(State(state): State<AppState>, Auth(principal): Auth) -> ApiResult<Json<Value>> {
    let inventory: Vec<Inventory> = state
        .store
        .inventory()
        .into_iter()
        .filter(|i| visible_in_listing(&principal, i.scope()))
        .collect();

    Ok(Json(json!({ "inventory": inventory })))
}

/// Fetch one stock record.
pub async fn get(
    State(state): State<AppState>,
    Auth(principal): Auth,
    Path(id): Path<String>,
) -> ApiResult<Json<Inventory>> {
    let id = InventoryId::parse(&id)?;
    let record = state
        .store
        .inventory_record(id)
        .ok_or(ApiError::ResourceNotFound {
            resource: "inventory".into(),
            id: id.to_string(),
        })?;

    require(decide(&principal, record.scope(), Action::Read))?;

    Ok(Json(record))
}
