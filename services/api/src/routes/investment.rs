//! Investment CRUD endpoints

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::error;

use crate::{
    error::{ApiError, ApiResult},
    middleware::AuthUser,
    models::{NewInvestment, UpdateInvestment},
    state::AppState,
    validation,
};

/// Create the router for the investment endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_investment))
        .route("/user/:id/all", get(get_all_by_user))
        .route(
            "/:id",
            get(get_by_id)
                .put(update_investment)
                .delete(delete_investment),
        )
}

/// Create an investment owned by the authenticated user
pub async fn add_investment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<NewInvestment>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_new_investment(&payload).map_err(ApiError::BadRequest)?;

    let investment = state
        .investment_repository
        .create(auth.id, &payload)
        .await
        .map_err(|e| {
            error!("Failed to create investment: {}", e);
            ApiError::InternalServerError
        })?;

    Ok((StatusCode::CREATED, Json(investment)))
}

/// All investments owned by the user in the path
pub async fn get_all_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let investments = state
        .investment_repository
        .find_all_by_user_id(user_id)
        .await
        .map_err(|e| {
            error!("Failed to list investments: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(investments))
}

/// Fetch one investment owned by the caller
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let investment = state
        .investment_repository
        .find_by_id(id, auth.id)
        .await
        .map_err(|e| {
            error!("Failed to fetch investment: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Investment not found".to_string()))?;

    Ok(Json(investment))
}

/// Partially update an investment owned by the caller
pub async fn update_investment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateInvestment>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_update_investment(&payload).map_err(ApiError::BadRequest)?;

    let investment = state
        .investment_repository
        .update(id, auth.id, &payload)
        .await
        .map_err(|e| {
            error!("Failed to update investment: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Investment not found".to_string()))?;

    Ok(Json(investment))
}

/// Delete an investment owned by the caller
pub async fn delete_investment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let deleted = state
        .investment_repository
        .delete(id, auth.id)
        .await
        .map_err(|e| {
            error!("Failed to delete investment: {}", e);
            ApiError::InternalServerError
        })?;

    if !deleted {
        return Err(ApiError::NotFound("Investment not found".to_string()));
    }

    Ok(Json(json!({ "message": "Investment deleted successfully" })))
}
