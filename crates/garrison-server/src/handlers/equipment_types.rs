//! Equipment catalog endpoints.
//!
//! The catalog is not base-scoped; any authenticated caller may read it.

use crate::{
    error::{ApiError, ApiResult},
    middleware::Auth,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    Json,
};
use garrison_core::{EquipmentType, EquipmentTypeId};
use serde_json::{json, Value};

/// List the equipment catalog.
pub async fn list(State(state): State<AppState>, Auth(_principal): Auth) -> ApiResult<Json<Value>> {
    Ok(Json(json!({ "equipment_types": state.store.equipment_types() })))
}

/// Fetch one catalog entry.
pub async fn get(
    State(state): State<AppState>,
    Auth(_principal): Auth,
    Path(id): Path<String>,
) -> ApiResult<Json<EquipmentType>> {
    let id = EquipmentTypeId::parse(&id)?;
    state
        .store
        .equipment_type(id)
        .map(Json)
        .ok_or(ApiError::ResourceNotFound {
            resource: "equipment_type".into(),
            id: id.to_string(),
        })
}
