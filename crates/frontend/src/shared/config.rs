//! Startup configuration.
//!
//! An optional `config.toml` next to `index.html` overrides the defaults
//! embedded in `contracts::shared::config::DEFAULT_CONFIG`.

use contracts::shared::config::{load_config, Config};
use contracts::shared::error::{DashboardError, Result};
use gloo_net::http::Request;

const CONFIG_URL: &str = "/config.toml";

async fn fetch_config_text() -> Result<String> {
    let response = Request::get(CONFIG_URL)
        .send()
        .await
        .map_err(|e| DashboardError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(DashboardError::Http {
            status: response.status(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| DashboardError::Decode(e.to_string()))
}

/// Load the configuration. Never fails: a missing or invalid file falls back
/// to the embedded defaults.
pub async fn fetch_config() -> Config {
    let text = match fetch_config_text().await {
        Ok(text) => Some(text),
        Err(e) => {
            log::info!("no {} ({}), using defaults", CONFIG_URL, e);
            None
        }
    };

    match load_config(text.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("invalid {}: {}", CONFIG_URL, e);
            load_config(None).unwrap_or_default()
        }
    }
}

/// Seed for the synthetic generators: the configured one or the clock.
pub fn generator_seed(config: &Config) -> u64 {
    config
        .generator
        .seed
        .unwrap_or_else(|| js_sys::Date::now() as u64)
}
