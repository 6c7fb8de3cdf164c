//! Income CRUD endpoints

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
    models::{NewIncome, UpdateIncome},
    state::AppState,
    validation,
};

/// Create the router for the income endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_income))
        .route("/user/:id/all", get(get_all_by_user))
        .route(
            "/:id",
            get(get_by_id).put(update_income).delete(delete_income),
        )
}

/// Create an income record owned by the authenticated user
pub async fn add_income(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<NewIncome>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_new_income(&payload).map_err(ApiError::BadRequest)?;

    let income = state
        .income_repository
        .create(auth.id, &payload)
        .await
        .map_err(|e| {
            error!("Failed to create income record: {}", e);
            ApiError::InternalServerError
        })?;

    Ok((StatusCode::CREATED, Json(income)))
}

/// All income records owned by the user in the path
pub async fn get_all_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let incomes = state
        .income_repository
        .find_all_by_user_id(user_id)
        .await
        .map_err(|e| {
            error!("Failed to list income records: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(incomes))
}

/// Fetch one income record owned by the caller
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let income = state
        .income_repository
        .find_by_id(id, auth.id)
        .await
        .map_err(|e| {
            error!("Failed to fetch income record: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Income not found".to_string()))?;

    Ok(Json(income))
}

/// Partially update an income record owned by the caller
pub async fn update_income(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateIncome>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_update_income(&payload).map_err(ApiError::BadRequest)?;

    let income = state
        .income_repository
        .update(id, auth.id, &payload)
        .await
        .map_err(|e| {
            error!("Failed to update income record: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Income not found".to_string()))?;

    Ok(Json(income))
}

/// Delete an income record owned by the caller
pub async fn delete_income(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let deleted = state
        .income_repository
        .delete(id, auth.id)
        .await
        .map_err(|e| {
            error!("Failed to delete income record: {}", e);
            ApiError::InternalServerError
        })?;

    if !deleted {
        return Err(ApiError::NotFound("Income not found".to_string()));
    }

    Ok(Json(json!({ "message": "Income deleted successfully" })))
}
