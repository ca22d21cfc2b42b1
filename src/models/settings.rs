use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VoiceType {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
    Fr,
}

/// Per-user preference record. At most one per user; the owner id doubles as
/// the lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub user_id: String,
    pub voice_type: VoiceType,
    pub child_mode: bool,
    pub notifications_enabled: bool,
    pub language: Language,
    pub auto_theme_change: bool,
}

impl UserSettings {
    /// The record synthesized for a user who has never written settings.
    pub fn default_for(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            voice_type: VoiceType::Female,
            child_mode: false,
            notifications_enabled: true,
            language: Language::En,
            auto_theme_change: true,
        }
    }
}
