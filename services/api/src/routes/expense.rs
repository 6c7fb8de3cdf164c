//! Expense CRUD endpoints

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
    models::{NewExpense, UpdateExpense},
    state::AppState,
    validation,
};

/// Create the router for the expense endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_expense))
        .route("/user/:id/all", get(get_all_by_user))
        .route(
            "/:id",
            get(get_by_id).put(update_expense).delete(delete_expense),
        )
}

/// Create an expense owned by the authenticated user
pub async fn add_expense(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<NewExpense>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_new_expense(&payload).map_err(ApiError::BadRequest)?;

    let expense = state
        .expense_repository
        .create(auth.id, &payload)
        .await
        .map_err(|e| {
            error!("Failed to create expense: {}", e);
            ApiError::InternalServerError
        })?;

    Ok((StatusCode::CREATED, Json(expense)))
}

/// All expenses owned by the user in the path
pub async fn get_all_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let expenses = state
        .expense_repository
        .find_all_by_user_id(user_id)
        .await
        .map_err(|e| {
            error!("Failed to list expenses: {}", e);
            ApiError::InternalServerError
        })?;

    Ok(Json(expenses))
}

/// Fetch one expense owned by the caller
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let expense = state
        .expense_repository
        .find_by_id(id, auth.id)
        .await
        .map_err(|e| {
            error!("Failed to fetch expense: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Expense not found".to_string()))?;

    Ok(Json(expense))
}

/// Partially update an expense owned by the caller
pub async fn update_expense(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateExpense>,
) -> ApiResult<impl IntoResponse> {
    validation::validate_update_expense(&payload).map_err(ApiError::BadRequest)?;

    let expense = state
        .expense_repository
        .update(id, auth.id, &payload)
        .await
        .map_err(|e| {
            error!("Failed to update expense: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound("Expense not found".to_string()))?;

    Ok(Json(expense))
}

/// Delete an expense owned by the caller
pub async fn delete_expense(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    let deleted = state
        .expense_repository
        .delete(id, auth.id)
        .await
        .map_err(|e| {
            error!("Failed to delete expense: {}", e);
            ApiError::InternalServerError
        })?;

    if !deleted {
        return Err(ApiError::NotFound("Expense not found".to_string()));
    }

    Ok(Json(json!({ "message": "Expense deleted successfully" })))
}
