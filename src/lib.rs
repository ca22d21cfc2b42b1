pub mod config;
pub mod demo;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod startup;
pub mod storage;
pub mod stores;

use std::sync::Arc;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use handlers::MetricsState;

use storage::KvStorage;
use stores::{ContentGenerator, EntryStore, GoalStore, Latency, SessionStore, SettingsStore, ThemeStore};

pub struct AppState {
    pub entries: EntryStore,
    pub goals: GoalStore,
    pub settings: SettingsStore,
    pub content: ContentGenerator,
    pub session: SessionStore,
    pub theme: ThemeStore,
    pub storage: Arc<KvStorage>,
    pub config: AppConfig,
    pub metrics: Arc<MetricsState>,
}

impl AppState {
    /// Builds the stores and loads durable storage. The stores share nothing
    /// except the storage handle the session and theme are wired to.
    pub fn from_config(config: AppConfig, metrics: Arc<MetricsState>) -> AppResult<Arc<Self>> {
        let storage = Arc::new(KvStorage::load(config.storage_path.clone())?);
        let latency = Latency::from_millis(config.latency_ms);

        Ok(Arc::new(Self {
            entries: EntryStore::new(latency),
            goals: GoalStore::new(latency),
            settings: SettingsStore::new(latency),
            content: ContentGenerator::new(latency),
            session: SessionStore::new(storage.clone(), latency),
            theme: ThemeStore::new(storage.clone(), config.default_theme),
            storage,
            config,
            metrics,
        }))
    }
}
