use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::{AppResult, AppState};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AffirmationResponse {
    pub affirmation: String,
}

/// GET /api/content/affirmation - A random pick from the affirmation pool
#[utoipa::path(
    get,
    path = "/api/content/affirmation",
    responses(
        (status = 200, description = "Daily affirmation", body = AffirmationResponse)
    ),
    tag = "content"
)]
pub async fn get_affirmation(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<AffirmationResponse>> {
    let affirmation = state.content.daily_affirmation().await;
    Ok(Json(AffirmationResponse {
        affirmation: affirmation.to_string(),
    }))
}

/// GET /api/content/prompts - The reflection prompt pool, fixed order
#[utoipa::path(
    get,
    path = "/api/content/prompts",
    responses(
        (status = 200, description = "Reflection prompts", body = Vec<String>)
    ),
    tag = "content"
)]
pub async fn get_prompts(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<String>>> {
    let prompts = state
        .content
        .reflection_prompts()
        .await
        .iter()
        .map(|prompt| prompt.to_string())
        .collect();

    Ok(Json(prompts))
}
