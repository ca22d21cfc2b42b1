use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    models::{LoginInput, MutationResponse, RegisterInput, User},
    AppError, AppResult, AppState,
};

/// POST /api/auth/login
///
/// The password is ignored; any non-empty email succeeds and yields a freshly
/// fabricated identity persisted to durable storage.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginInput,
    responses(
        (status = 200, description = "Logged in", body = User),
        (status = 400, description = "Empty email")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(input): Json<LoginInput>,
) -> AppResult<Json<User>> {
    let user = state.session.login(&input.email, &input.password).await?;
    tracing::info!(user_id = %user.id, "user logged in");
    Ok(Json(user))
}

/// POST /api/auth/register
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterInput,
    responses(
        (status = 200, description = "Registered", body = User),
        (status = 400, description = "Empty email")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(input): Json<RegisterInput>,
) -> AppResult<Json<User>> {
    let user = state
        .session
        .register(&input.email, &input.password, &input.name)
        .await?;
    tracing::info!(user_id = %user.id, "user registered");
    Ok(Json(user))
}

/// POST /api/auth/logout - Clear the persisted session
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Logged out", body = MutationResponse)
    ),
    tag = "auth"
)]
pub async fn logout(State(state): State<Arc<AppState>>) -> AppResult<Json<MutationResponse>> {
    state.session.logout().await?;
    Ok(Json(MutationResponse {
        success: true,
        message: Some("Logged out".to_string()),
    }))
}

/// GET /api/auth/me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current session identity", body = User),
        (status = 401, description = "No active session")
    ),
    tag = "auth"
)]
pub async fn get_me(State(state): State<Arc<AppState>>) -> AppResult<Json<User>> {
    let user = state
        .session
        .current()
        .await
        .ok_or_else(|| AppError::Unauthorized("No active session".to_string()))?;

    Ok(Json(user))
}
