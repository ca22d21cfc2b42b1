use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::AppError;
use crate::models::ThemeMode;
use crate::storage::KvStorage;

/// Process-wide theme preference.
///
/// Initialized from durable storage when a preference was saved before,
/// otherwise from the configured ambient default. Every change is persisted
/// before it is acknowledged.
pub struct ThemeStore {
    current: RwLock<ThemeMode>,
    storage: Arc<KvStorage>,
}

impl ThemeStore {
    pub fn new(storage: Arc<KvStorage>, ambient_default: ThemeMode) -> Self {
        let current = storage.theme().unwrap_or(ambient_default);
        Self {
            current: RwLock::new(current),
            storage,
        }
    }

    pub async fn get(&self) -> ThemeMode {
        *self.current.read().await
    }

    pub async fn set(&self, theme: ThemeMode) -> Result<ThemeMode, AppError> {
        self.storage.set_theme(theme)?;
        *self.current.write().await = theme;
        Ok(theme)
    }

    /// Flips light/dark and persists the result.
    pub async fn toggle(&self) -> Result<ThemeMode, AppError> {
        let next = self.current.read().await.toggled();
        self.set(next).await
    }
}
