use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use crate::{
    models::{CreateEntryInput, JournalEntry, MutationResponse, UpdateEntryInput},
    AppError, AppResult, AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListEntriesQuery {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// GET /api/entries?userId=
#[utoipa::path(
    get,
    path = "/api/entries",
    params(ListEntriesQuery),
    responses(
        (status = 200, description = "Journal entries owned by the user, newest first", body = Vec<JournalEntry>),
        (status = 400, description = "Missing userId")
    ),
    tag = "entries"
)]
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListEntriesQuery>,
) -> AppResult<Json<Vec<JournalEntry>>> {
    let entries = state.entries.list_by_user(&query.user_id).await;
    Ok(Json(entries))
}

/// GET /api/entries/{id}
#[utoipa::path(
    get,
    path = "/api/entries/{id}",
    params(
        ("id" = String, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "The journal entry", body = JournalEntry),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<String>,
) -> AppResult<Json<JournalEntry>> {
    let entry = state
        .entries
        .get(&entry_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Entry {} not found", entry_id)))?;

    Ok(Json(entry))
}

/// POST /api/entries - Create a new journal entry
#[utoipa::path(
    post,
    path = "/api/entries",
    request_body = CreateEntryInput,
    responses(
        (status = 200, description = "Entry created successfully", body = JournalEntry)
    ),
    tag = "entries"
)]
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateEntryInput>,
) -> AppResult<Json<JournalEntry>> {
    let entry = state.entries.add(input).await;
    Ok(Json(entry))
}

/// PUT /api/entries/{id} - Merge the supplied fields into an entry
#[utoipa::path(
    put,
    path = "/api/entries/{id}",
    params(
        ("id" = String, Path, description = "Entry ID")
    ),
    request_body = UpdateEntryInput,
    responses(
        (status = 200, description = "Entry updated successfully", body = JournalEntry),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn update_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<String>,
    Json(input): Json<UpdateEntryInput>,
) -> AppResult<Json<JournalEntry>> {
    let entry = state
        .entries
        .update(&entry_id, input)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Entry {} not found", entry_id)))?;

    Ok(Json(entry))
}

/// DELETE /api/entries/{id}
#[utoipa::path(
    delete,
    path = "/api/entries/{id}",
    params(
        ("id" = String, Path, description = "Entry ID")
    ),
    responses(
        (status = 200, description = "Entry deleted successfully", body = MutationResponse),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<String>,
) -> AppResult<Json<MutationResponse>> {
    if !state.entries.delete(&entry_id).await {
        return Err(AppError::NotFound(format!("Entry {} not found", entry_id)));
    }

    Ok(Json(MutationResponse {
        success: true,
        message: Some("Entry deleted successfully".to_string()),
    }))
}
