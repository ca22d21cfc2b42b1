use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::{
    models::{CreateGoalInput, Goal, MutationResponse, UpdateGoalInput},
    AppError, AppResult, AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListGoalsQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// GET /api/goals?userId=
#[utoipa::path(
    get,
    path = "/api/goals",
    params(ListGoalsQuery),
    responses(
        (status = 200, description = "Goals owned by the user, newest first", body = Vec<Goal>),
        (status = 400, description = "Missing userId")
    ),
    tag = "goals"
)]
pub async fn list_goals(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListGoalsQuery>,
) -> AppResult<Json<Vec<Goal>>> {
    let goals = state.goals.list_by_user(&query.user_id).await;
    Ok(Json(goals))
}

/// GET /api/goals/{id}
#[utoipa::path(
    get,
    path = "/api/goals/{id}",
    params(
        ("id" = String, Path, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "The goal", body = Goal),
        (status = 404, description = "Goal not found")
    ),
    tag = "goals"
)]
pub async fn get_goal(
    State(state): State<Arc<AppState>>,
    Path(goal_id): Path<String>,
) -> AppResult<Json<Goal>> {
    let goal = state
        .goals
        .get(&goal_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Goal {} not found", goal_id)))?;

    Ok(Json(goal))
}

/// POST /api/goals - Create a new goal
#[utoipa::path(
    post,
    path = "/api/goals",
    request_body = CreateGoalInput,
    responses(
        (status = 200, description = "Goal created successfully", body = Goal)
    ),
    tag = "goals"
)]
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateGoalInput>,
) -> AppResult<Json<Goal>> {
    let goal = state.goals.add(input).await;
    Ok(Json(goal))
}

/// PUT /api/goals/{id} - Merge the supplied fields into a goal
#[utoipa::path(
    put,
    path = "/api/goals/{id}",
    params(
        ("id" = String, Path, description = "Goal ID")
    ),
    request_body = UpdateGoalInput,
    responses(
        (status = 200, description = "Goal updated successfully", body = Goal),
        (status = 404, description = "Goal not found")
    ),
    tag = "goals"
)]
pub async fn update_goal(
    State(state): State<Arc<AppState>>,
    Path(goal_id): Path<String>,
    Json(input): Json<UpdateGoalInput>,
) -> AppResult<Json<Goal>> {
    let goal = state
        .goals
        .update(&goal_id, input)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Goal {} not found", goal_id)))?;

    Ok(Json(goal))
}

/// POST /api/goals/{id}/toggle - Flip the completion flag
#[utoipa::path(
    post,
    path = "/api/goals/{id}/toggle",
    params(
        ("id" = String, Path, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "Goal with the completion flag flipped", body = Goal),
        (status = 404, description = "Goal not found")
    ),
    tag = "goals"
)]
pub async fn toggle_goal(
    State(state): State<Arc<AppState>>,
    Path(goal_id): Path<String>,
) -> AppResult<Json<Goal>> {
    let goal = state
        .goals
        .toggle_completion(&goal_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Goal {} not found", goal_id)))?;

    Ok(Json(goal))
}

/// DELETE /api/goals/{id}
#[utoipa::path(
    delete,
    path = "/api/goals/{id}",
    params(
        ("id" = String, Path, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "Goal deleted successfully", body = MutationResponse),
        (status = 404, description = "Goal not found")
    ),
    tag = "goals"
)]
pub async fn delete_goal(
    State(state): State<Arc<AppState>>,
    Path(goal_id): Path<String>,
) -> AppResult<Json<MutationResponse>> {
    if !state.goals.delete(&goal_id).await {
        return Err(AppError::NotFound(format!("Goal {} not found", goal_id)));
    }

    Ok(Json(MutationResponse {
        success: true,
        message: Some("Goal deleted successfully".to_string()),
    }))
}
