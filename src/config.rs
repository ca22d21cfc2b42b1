use std::env;
use std::path::PathBuf;

use crate::models::ThemeMode;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub storage_path: PathBuf,
    pub latency_ms: u64,
    pub cors_origin: String,
    pub default_theme: ThemeMode,
    pub seed_demo: bool,
    pub debug_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let bind_addr = env::var("COMPANIO_BIND").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let storage_path = env::var("COMPANIO_STORAGE_PATH")
            .unwrap_or_else(|_| "companio-storage.json".to_string())
            .into();

        // Simulated network delay applied to every store call. Interactive use
        // keeps the nonzero default; tests construct stores with zero latency.
        let latency_ms = match env::var("COMPANIO_LATENCY_MS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| format!("COMPANIO_LATENCY_MS must be an integer, got {raw:?}"))?,
            Err(_) => 300,
        };

        let cors_origin = env::var("COMPANIO_CORS_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173".to_string());

        // Stand-in for the client's ambient color-scheme signal.
        let default_theme = match env::var("COMPANIO_DEFAULT_THEME") {
            Ok(raw) => match raw.as_str() {
                "light" => ThemeMode::Light,
                "dark" => ThemeMode::Dark,
                other => {
                    return Err(format!(
                        "COMPANIO_DEFAULT_THEME must be \"light\" or \"dark\", got {other:?}"
                    ))
                }
            },
            Err(_) => ThemeMode::Light,
        };

        let seed_demo = match env::var("COMPANIO_SEED_DEMO") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| format!("COMPANIO_SEED_DEMO must be true or false, got {raw:?}"))?,
            Err(_) => true,
        };

        let debug_key = env::var("COMPANIO_DEBUG_KEY").ok();

        Ok(Self {
            bind_addr,
            storage_path,
            latency_ms,
            cors_origin,
            default_theme,
            seed_demo,
            debug_key,
        })
    }
}
