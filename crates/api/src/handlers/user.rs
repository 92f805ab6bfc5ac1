//! Handlers for the `/usuarios` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use usuarios_core::error::CoreError;
use usuarios_core::types::DbId;
use usuarios_db::models::user::{CreateUser, UpdateUser, User};
use usuarios_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, UserId};
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "User",
        id: id.into(),
    })
}

/// POST /usuarios
///
/// Create a user. Responds 201 with the stored record, including its new id.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateUser>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::create(&state.pool, &input).await?;

    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /usuarios
///
/// List every user. An empty table yields `[]`.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /usuarios/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(user))
}

/// PUT /usuarios/{id}
///
/// Overwrite name and email. Responds 404 when the id does not exist.
pub async fn update(
    State(state): State<AppState>,
    UserId(id): UserId,
    JsonBody(input): JsonBody<UpdateUser>,
) -> AppResult<Json<User>> {
    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(user_id = id, "User updated");

    Ok(Json(user))
}

/// DELETE /usuarios/{id}
///
/// Responds 200 with a plain-text confirmation whether or not a row existed,
/// so repeating a delete is harmless.
pub async fn delete(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<impl IntoResponse> {
    let removed = UserRepo::delete(&state.pool, id).await?;

    tracing::info!(user_id = id, removed, "User deleted");

    Ok("User deleted successfully")
}
