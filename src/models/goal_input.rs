use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::goal::GoalCategory;

/// Input for creating a goal. `completed` defaults to false when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalInput {
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    pub due_date: Option<DateTime<Utc>>,
    pub category: GoalCategory,
}

/// Partial update for a goal. Absent fields are left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGoalInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub due_date: Option<DateTime<Utc>>,
    pub category: Option<GoalCategory>,
}
