//! Profile endpoints

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, put},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::{
    error::{ApiError, ApiResult},
    middleware::AuthUser,
    models::{UpdateUser, User},
    state::AppState,
    validation,
};

/// Public profile view of a user
#[derive(Serialize)]
pub struct UserResponse {
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            email: user.email,
            full_name: user.full_name,
            phone: user.phone,
        }
    }
}

/// Profile details of the authenticated caller
#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
}

/// Payload for the full-name change endpoint
#[derive(Deserialize)]
pub struct UpdateFullName {
    pub new_full_name: String,
}

/// Create the router for the profile endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/me", get(me))
        .route("/:id", get(get_profile))
        .route("/update-profile/:id", put(update_profile))
        .route("/change-username/:id", put(change_full_name))
}

/// Profile of the authenticated caller, re-fetched from the directory
///
/// A valid token for a since-deleted user is a 404 here, not a 401.
pub async fn me(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
) -> ApiResult<impl IntoResponse> {
    let user = state
        .user_repository
        .find_by_id(auth.id)
        .await
        .map_err(|e| {
            error!("Failed to fetch user: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound(format!("User not found with id: {}", auth.id)))?;

    Ok(Json(ProfileResponse {
        id: user.id,
        email: user.email,
        full_name: user.full_name,
        phone: user.phone,
    }))
}

/// Fetch a user's public profile by id
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<impl IntoResponse> {
    if id <= 0 {
        return Err(ApiError::BadRequest(
            "User ID must be a positive number".to_string(),
        ));
    }

    let user = state
        .user_repository
        .find_by_id(id)
        .await
        .map_err(|e| {
            error!("Failed to fetch user: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound(format!("User not found with id: {id}")))?;

    Ok(Json(UserResponse::from(user)))
}

/// Update the caller's full name and/or phone
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUser>,
) -> ApiResult<impl IntoResponse> {
    // Profiles other than the caller's own are invisible here.
    if id != auth.id {
        return Err(ApiError::NotFound(format!("User not found with id: {id}")));
    }

    validation::validate_update_user(&payload).map_err(ApiError::BadRequest)?;

    let user = state
        .user_repository
        .update_profile(id, &payload)
        .await
        .map_err(|e| {
            error!("Failed to update profile: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound(format!("User not found with id: {id}")))?;

    Ok(Json(UserResponse::from(user)))
}

/// Change the caller's full name
pub async fn change_full_name(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateFullName>,
) -> ApiResult<impl IntoResponse> {
    if id != auth.id {
        return Err(ApiError::NotFound(format!("User not found with id: {id}")));
    }

    validation::validate_required_text("Full name", &payload.new_full_name, 255)
        .map_err(ApiError::BadRequest)?;

    let update = UpdateUser {
        full_name: Some(payload.new_full_name),
        phone: None,
    };

    let user = state
        .user_repository
        .update_profile(id, &update)
        .await
        .map_err(|e| {
            error!("Failed to change full name: {}", e);
            ApiError::InternalServerError
        })?
        .ok_or_else(|| ApiError::NotFound(format!("User not found with id: {id}")))?;

    Ok(Json(UserResponse::from(user)))
}
