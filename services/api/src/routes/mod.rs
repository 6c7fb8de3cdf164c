//! HTTP surface of the finance service
//!
//! Auth endpoints and the health check are public; everything else sits
//! behind the bearer-token middleware.

mod auth;
mod expense;
mod income;
mod investment;
mod loan;
mod users;

use axum::{Json, Router, middleware, response::IntoResponse, routing::get};
use serde_json::json;

use crate::{middleware::auth_middleware, state::AppState};

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .nest("/api/users", users::router())
        .nest("/api/expense", expense::router())
        .nest("/api/income", income::router())
        .nest("/api/investment", investment::router())
        .nest("/api/loan", loan::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api/auth", auth::router())
        .merge(protected_routes)
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "finance-api"
    }))
}
