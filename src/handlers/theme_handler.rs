use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    models::{ThemeInput, ThemeResponse},
    AppResult, AppState,
};

/// GET /api/theme
#[utoipa::path(
    get,
    path = "/api/theme",
    responses(
        (status = 200, description = "Current theme preference", body = ThemeResponse)
    ),
    tag = "theme"
)]
pub async fn get_theme(State(state): State<Arc<AppState>>) -> AppResult<Json<ThemeResponse>> {
    let theme = state.theme.get().await;
    Ok(Json(ThemeResponse { theme }))
}

/// PUT /api/theme - Set and persist the theme preference
#[utoipa::path(
    put,
    path = "/api/theme",
    request_body = ThemeInput,
    responses(
        (status = 200, description = "Theme updated", body = ThemeResponse)
    ),
    tag = "theme"
)]
pub async fn set_theme(
    State(state): State<Arc<AppState>>,
    Json(input): Json<ThemeInput>,
) -> AppResult<Json<ThemeResponse>> {
    let theme = state.theme.set(input.theme).await?;
    Ok(Json(ThemeResponse { theme }))
}

/// POST /api/theme/toggle - Flip between light and dark
#[utoipa::path(
    post,
    path = "/api/theme/toggle",
    responses(
        (status = 200, description = "Theme after toggling", body = ThemeResponse)
    ),
    tag = "theme"
)]
pub async fn toggle_theme(State(state): State<Arc<AppState>>) -> AppResult<Json<ThemeResponse>> {
    let theme = state.theme.toggle().await?;
    Ok(Json(ThemeResponse { theme }))
}
