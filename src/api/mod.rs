//! API routes

pub mod employee;
pub mod health;

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the service router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route(
            "/api/employee",
            get(employee::get_top_level_managers).put(employee::upsert_employee),
        )
        .route(
            "/api/employee/{id}",
            get(employee::get_employee_by_id).delete(employee::delete_employee),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
