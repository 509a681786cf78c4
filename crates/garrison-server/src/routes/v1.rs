//! API v1 routes.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Create the v1 API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/bases", base_routes())
        .nest("/equipment-types", equipment_type_routes())
        .nest("/inventory", inventory_routes())
        .nest("/purchases", purchase_routes())
        .nest("/transfers", transfer_routes())
        .nest("/assignments", assignment_routes())
        .nest("/expenditures", expenditure_routes())
}

fn base_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::bases::list))
        .route("/:id", get(handlers::bases::get))
}

fn equipment_type_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::equipment_types::list))
        .route("/:id", get(handlers::equipment_types::get))
}

fn inventory_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::inventory::list))
        .route("/:id", get(handlers::inventory::get))
}

fn purchase_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::purchases::list).post(handlers::purchases::create))
        .route("/:id", get(handlers::purchases::get))
}

fn transfer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::transfers::list).post(handlers::transfers::create))
        .route("/:id", get(handlers::transfers::get))
}

fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::assignments::list).post(handlers::assignments::create),
        )
        .route("/:id", get(handlers::assignments::get))
        .route("/:id/return", post(handlers::assignments::mark_returned))
}

fn expenditure_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::expenditures::list).post(handlers::expenditures::create),
        )
        .route("/:id", get(handlers::expenditures::get))
}
