use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entry::Mood;

/// Input for creating a journal entry. The store assigns the id; a missing
/// `date` is stamped with the current instant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryInput {
    pub user_id: String,
    pub date: Option<DateTime<Utc>>,
    pub content: String,
    pub mood: Mood,
}

/// Partial update for a journal entry. Absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntryInput {
    pub date: Option<DateTime<Utc>>,
    pub content: Option<String>,
    pub mood: Option<Mood>,
}

/// Response for delete-style mutations.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MutationResponse {
    pub success: bool,
    pub message: Option<String>,
}
