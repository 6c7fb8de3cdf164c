//! Loan CRUD endpoints

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
    models::{NewLoan, UpdateLoan},
    state::AppState,
    validation,
};

/// Create the router for the loan endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_loan))
        .route("/user/:id/all", get(get_all_by_user))
        .route("/:id", get(get_by_id).put(update_loan).delete(delete_loan))
}

/// Create a loan owned by the authenticated user
pub async fn add_loan(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<NewLoan>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_new_loan(&payload).map_err(ApiError::BadRequest)?;

    let loan = state
        .loan_repository
        .create(auth.id, &payload)
        .await
        .map_err(|e| {
            error!("Failed to create loan: {}", e);
            ApiError::InternalServerError
        })?;

    Ok((StatusCode::CREATED, Json(loan)))
}

/// All loans owned by the user in the path
pub async fn get_all_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let loans = state
        .loan_repository
        .find_all_by_user_id(user_id)
        .await
        .map_err(|e| {
            error!("Failed to list loans: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(loans))
}

/// Fetch one loan owned by the caller
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let loan = state
        .loan_repository
        .find_by_id(id, auth.id)
        .await
        .map_err(|e| {
            error!("Failed to fetch loan: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Loan not found".to_string()))?;

    Ok(Json(loan))
}

/// Partially update a loan owned by the caller
pub async fn update_loan(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateLoan>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_update_loan(&payload).map_err(ApiError::BadRequest)?;

    let loan = state
        .loan_repository
        .update(id, auth.id, &payload)
        .await
        .map_err(|e| {
            error!("Failed to update loan: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Loan not found".to_string()))?;

    Ok(Json(loan))
}

/// Delete a loan owned by the caller
pub async fn delete_loan(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let deleted = state
        .loan_repository
        .delete(id, auth.id)
        .await
        .map_err(|e| {
            error!("Failed to delete loan: {}", e);
            ApiError::InternalServerError
        })?;

    if !deleted {
        return Err(ApiError::NotFound("Loan not found".to_string()));
    }

    Ok(Json(json!({ "message": "Loan deleted successfully" })))
}
