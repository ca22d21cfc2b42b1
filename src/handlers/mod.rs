pub mod auth_handler;
pub mod content_handler;
pub mod debug;
pub mod entries_handler;
pub mod goals_handler;
pub mod health;
pub mod metrics;
pub mod settings_handler;
pub mod theme_handler;

pub use health::health_check;
pub use metrics::{metrics_handler, setup_metrics_recorder, MetricsState};
