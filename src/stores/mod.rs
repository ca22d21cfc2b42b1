//! In-memory data stores fronting the API.
//!
//! Each store owns its backing collection behind an async lock and is
//! constructed once at process start; no module-level state. Every public
//! operation returns deep copies, never references into the collection.

pub mod content;
pub mod entries;
pub mod goals;
pub mod session;
pub mod settings;
pub mod theme;

pub use content::ContentGenerator;
pub use entries::EntryStore;
pub use goals::GoalStore;
pub use session::SessionStore;
pub use settings::SettingsStore;
pub use theme::ThemeStore;

use std::time::Duration;

/// Artificial-delay decorator standing in for network latency.
///
/// The stand-in backend resolves every call after a fixed pause so callers
/// exercise their loading states. Zero-duration latency skips the timer
/// entirely, which is what tests use.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latency(Duration);

impl Latency {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    pub fn none() -> Self {
        Self(Duration::ZERO)
    }

    pub async fn simulate(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}
