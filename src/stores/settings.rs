use std::collections::HashMap;

use tokio::sync::RwLock;

use super::Latency;
use crate::models::{UpdateSettingsInput, UserSettings};

/// In-memory settings store, at most one record per user.
///
/// Reads never create a record: a user who has never written settings gets a
/// freshly synthesized default on every call. Only `update` persists.
pub struct SettingsStore {
    settings: RwLock<HashMap<String, UserSettings>>,
    latency: Latency,
}

impl SettingsStore {
    pub fn new(latency: Latency) -> Self {
        Self {
            settings: RwLock::new(HashMap::new()),
            latency,
        }
    }

    /// Inserts fixture records as-is, bypassing latency.
    pub async fn seed(&self, records: Vec<UserSettings>) {
        let mut settings = self.settings.write().await;
        for record in records {
            settings.insert(record.user_id.clone(), record);
        }
    }

    /// Never absent: misses synthesize the default record without storing it.
    pub async fn get(&self, user_id: &str) -> UserSettings {
        self.latency.simulate().await;
        self.settings
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| UserSettings::default_for(user_id))
    }

    /// Shallow-merges `updates` over the existing-or-default record and stores
    /// the result.
    pub async fn update(&self, user_id: &str, updates: UpdateSettingsInput) -> UserSettings {
        self.latency.simulate().await;
        let mut settings = self.settings.write().await;
        let mut record = settings
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| UserSettings::default_for(user_id));

        if let Some(voice_type) = updates.voice_type {
            record.voice_type = voice_type;
        }
        if let Some(child_mode) = updates.child_mode {
            record.child_mode = child_mode;
        }
        if let Some(notifications_enabled) = updates.notifications_enabled {
            record.notifications_enabled = notifications_enabled;
        }
        if let Some(language) = updates.language {
            record.language = language;
        }
        if let Some(auto_theme_change) = updates.auto_theme_change {
            record.auto_theme_change = auto_theme_change;
        }

        settings.insert(user_id.to_string(), record.clone());
        record
    }

    /// Number of persisted records (absent users don't count).
    pub async fn persisted_count(&self) -> usize {
        self.settings.read().await.len()
    }
}
