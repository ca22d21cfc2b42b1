use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::settings::{Language, VoiceType};

/// Partial update for user settings, merged over the existing-or-default
/// record field by field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsInput {
    pub voice_type: Option<VoiceType>,
    pub child_mode: Option<bool>,
    pub notifications_enabled: Option<bool>,
    pub language: Option<Language>,
    pub auto_theme_change: Option<bool>,
}
