//! Purchase endpoints.

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
use garrison_core::{BaseId, EquipmentTypeId, Purchase, PurchaseId, ResourceScope, Scoped};
use serde::Deserialize;
use serde_json::{json, Value};

/// Payload for recording a purchase.
#[derive(Debug, Deserialize)]
pub struct CreatePurchase {
    pub base: BaseId,
    pub equipment_type: EquipmentTypeId,
    pub quantity: u32,
    pub supplier: String,
    pub purchase_date: NaiveDate,
}

/// List purchases visible to the caller.
pub async fn list(State(state): State<AppState>, Auth(principal): Auth) -> ApiResult<Json<Value>> {
    let purchases: Vec<Purchase> = state
        .store
        .purchases()
        .into_iter()
        .filter(|p| visible_in_listing(&principal, p.scope()))
        .collect();

    Ok(Json(json!({ "purchases": purchases })))
}

/// Fetch one purchase.
pub async fn get(
    State(state): State<AppState>,
    Auth(principal): Auth,
    Path(id): Path<String>,
) -> ApiResult<Json<Purchase>> {
    let id = PurchaseId::parse(&id)?;
    let purchase = state.store.purchase(id).ok_or(ApiError::ResourceNotFound {
        resource: "purchase".into(),
        id: id.to_string(),
    })?;

    require(decide(&principal, purchase.scope(), Action::Read))?;

    Ok(Json(purchase))
}

/// Record a purchase for a base and fold it into stock.
pub async fn create(
    State(state): State<AppState>,
    Auth(principal): Auth,
    Json(payload): Json<CreatePurchase>,
) -> ApiResult<(StatusCode, Json<Purchase>)> {
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

    let purchase = Purchase {
        id: PurchaseId::new(),
        base: payload.base,
        equipment_type: payload.equipment_type,
        quantity: payload.quantity,
        supplier: payload.supplier,
        purchase_date: payload.purchase_date,
        created_by: principal.id,
    };
    state.store.insert_purchase(purchase.clone());

    Ok((StatusCode::CREATED, Json(purchase)))
}
