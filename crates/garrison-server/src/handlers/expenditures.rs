//! Expenditure endpoints.

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
use garrison_core::{BaseId, EquipmentTypeId, Expenditure, ExpenditureId, ResourceScope, Scoped};
use serde::Deserialize;
use serde_json::{json, Value};

/// Payload for recording an expenditure.
#[derive(Debug, Deserialize)]
pub struct CreateExpenditure {
    pub base: BaseId,
    pub equipment_type: EquipmentTypeId,
    pub quantity: u32,
    pub reason: String,
    pub expenditure_date: NaiveDate,
}

/// List expenditures visible to the caller.
pub async fn list(State(state): State<AppState>, Auth(principal): Auth) -> ApiResult<Json<Value>> {
    let expenditures: Vec<Expenditure> = state
        .store
        .expenditures()
        .into_iter()
        .filter(|e| visible_in_listing(&principal, e.scope()))
        .collect();

    Ok(Json(json!({ "expenditures": expenditures })))
}

/// Fetch one expenditure.
pub async fn get(
    State(state): State<AppState>,
    Auth(principal): Auth,
    Path(id): Path<String>,
) -> ApiResult<Json<Expenditure>> {
    let id = ExpenditureId::parse(&id)?;
    let expenditure = state
        .store
        .expenditure(id)
        .ok_or(ApiError::ResourceNotFound {
            resource: "expenditure".into(),
            id: id.to_string(),
        })?;

    require(decide(&principal, expenditure.scope(), Action::Read))?;

    Ok(Json(expenditure))
}

/// Record an expenditure and deduct it from stock.
pub async fn create(
    State(state): State<AppState>,
    Auth(principal): Auth,
    Json(payload): Json<CreateExpenditure>,
) -> ApiResult<(StatusCode, Json<Expenditure>)> {
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

    let expenditure = Expenditure {
        id: ExpenditureId::new(),
        base: payload.base,
        equipment_type: payload.equipment_type,
        quantity: payload.quantity,
        reason: payload.reason,
        expenditure_date: payload.expenditure_date,
        created_by: principal.id,
    };
    state.store.insert_expenditure(expenditure.clone());

    Ok((StatusCode::CREATED, Json(expenditure)))
}
