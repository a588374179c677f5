/// Users API routes
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::{User, UserDto, UserId};

/// GET /api/users
/// List all users
///
/// Answers 204 with a plain-text note when there are none, and a fixed
/// plain-text 500 when storage fails.
pub async fn list_users(State(app_state): State<AppState>) -> Response {
    match app_state.users.get_all().await {
        Ok(users) if users.is_empty() => (StatusCode::NO_CONTENT, "No users found").into_response(),
        Ok(users) => Json(users).into_response(),
        Err(e) => {
            tracing::error!("Failed to list users: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error fetch all users").into_response()
        }
    }
}

/// GET /api/users/:id
/// Get a single user
pub async fn get_user(
    Path(id): Path<UserId>,
    State(app_state): State<AppState>,
) -> Result<Json<UserDto>> {
    let user = app_state.users.get(id).await?;
    Ok(Json(user))
}

/// POST /api/users
/// Create a user from a full record, password included
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<User>, JsonRejection>,
) -> Result<(StatusCode, Json<UserDto>)> {
    let Json(user) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    let created = app_state.users.create_with_password(user).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/users/:id
/// Update name and email of a user
pub async fn update_user(
    Path(id): Path<UserId>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UserDto>, JsonRejection>,
) -> Result<Json<UserDto>> {
    let Json(dto) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    let updated = app_state.users.update(dto, id).await?;
    Ok(Json(updated))
}

/// DELETE /api/users/:id
/// Delete a user
pub async fn delete_user(
    Path(id): Path<UserId>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let removed = app_state.users.delete(id).await?;
    if !removed {
        return Err(ServerError::Internal(format!(
            "User {} still present after delete",
            id
        )));
    }

    Ok(StatusCode::NO_CONTENT)
}
