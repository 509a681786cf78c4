//! Base endpoints.

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
use garrison_core::{Base, BaseId, Scoped};
use serde_json::{json, Value};

/// List bases visible to the caller.
pub async fn list(State(state): State<AppState>, Auth(principal): Auth) -> ApiResult<Json<Value>> {
    let bases: Vec<Base> = state
        .store
        .bases()
        .into_iter()
        .filter(|b| visible_in_listing(&principal, b.scope()))
        .collect();

    Ok(Json(json!({ "bases": bases })))
}

/// Fetch one base.
pub async fn get(
    State(state): State<AppState>,
    Auth(principal): Auth,
    Path(id): Path<String>,
) -> ApiResult<Json<Base>> {
    let id = BaseId::parse(&id)?;
    let base = state.store.base(id).ok_or(ApiError::ResourceNotFound {
        resource: "base".into(),
        id: id.to_string(),
    })?;

    require(decide(&principal, base.scope(), Action::Read))?;

    Ok(Json(base))
}
