//! Frontend Configuration
//!
//! Read from an optional `<script type="application/json" id="app-config">`
//! block the server renders into the page. Every field has a default.

use form_gateway::{Gateway, HttpTransport, DEFAULT_NETWORK_ERROR};
use leptos::prelude::*;
use log::LevelFilter;
use serde::Deserialize;

use crate::browser;

const CONFIG_ELEMENT: &str = "app-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server origin; empty means the page origin
    pub base_url: String,
    /// How long a success notice stays before the follow-up action
    pub notice_ms: u32,
    /// Localized text for transport and parse failures
    pub network_error: String,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            notice_ms: 1500,
            network_error: DEFAULT_NETWORK_ERROR.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let mut config = browser::embedded_json::<AppConfig>(CONFIG_ELEMENT).unwrap_or_default();
        if config.base_url.is_empty() {
            config.base_url = browser::origin();
        }
        config
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }

    /// A gateway bound to this origin; cheap, build one per action
    pub fn gateway(&self) -> Gateway<HttpTransport> {
        Gateway::new(HttpTransport::new(&self.base_url)).with_network_error(&self.network_error)
    }
}

/// Get the config from context
pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}
