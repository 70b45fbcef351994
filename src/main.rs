#![allow(warnings)]
//! Workforce Dashboards Frontend Entry Point

mod models;
mod commands;
mod config;
mod context;
mod store;
mod browser;
mod logging;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = config::AppConfig::load();
    logging::init(config.log_level());
    log::info!("[APP] Starting against {}", config.base_url);
    mount_to_body(move || view! { <App config=config /> });
}
