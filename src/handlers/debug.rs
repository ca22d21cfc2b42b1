use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use std::time::SystemTime;

use crate::AppState;

#[derive(Serialize)]
pub struct DebugInfo {
    pub version: String,
    pub environment: String,
    pub uptime_seconds: u64,
    pub storage_path: String,
    pub entry_count: usize,
    pub goal_count: usize,
    pub settings_count: usize,
    pub session_active: bool,
    pub timestamp: u64,
}

/// Global start time for uptime calculation
static START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

/// Handler for the /debug endpoint
pub async fn debug_handler(State(state): State<Arc<AppState>>) -> Json<DebugInfo> {
    let uptime = START_TIME.elapsed().unwrap_or_default().as_secs();

    let info = DebugInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        uptime_seconds: uptime,
        storage_path: state.storage.path().display().to_string(),
        entry_count: state.entries.count().await,
        goal_count: state.goals.count().await,
        settings_count: state.settings.persisted_count().await,
        session_active: state.session.current().await.is_some(),
        timestamp: SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs(),
    };

    Json(info)
}
