use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    models::{UpdateSettingsInput, UserSettings},
    AppResult, AppState,
};

/// GET /api/settings/{userId}
///
/// Never 404s: users without a stored record get the synthesized default.
#[utoipa::path(
    get,
    path = "/api/settings/{userId}",
    params(
        ("userId" = String, Path, description = "Owner user ID")
    ),
    responses(
        (status = 200, description = "The user's settings, defaults when never written", body = UserSettings)
    ),
    tag = "settings"
)]
pub async fn get_settings(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> AppResult<Json<UserSettings>> {
    let settings = state.settings.get(&user_id).await;
    Ok(Json(settings))
}

/// PUT /api/settings/{userId} - Merge and persist settings fields
#[utoipa::path(
    put,
    path = "/api/settings/{userId}",
    params(
        ("userId" = String, Path, description = "Owner user ID")
    ),
    request_body = UpdateSettingsInput,
    responses(
        (status = 200, description = "The merged, now-persisted settings", body = UserSettings)
    ),
    tag = "settings"
)]
pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(input): Json<UpdateSettingsInput>,
) -> AppResult<Json<UserSettings>> {
    let settings = state.settings.update(&user_id, input).await;
    Ok(Json(settings))
}
