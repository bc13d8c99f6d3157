//! List Board Frontend Entry Point

mod models;
mod board;
mod config;
mod logging;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    // Logging needs the level from config, so report config problems after init
    let (config, config_error) = match AppConfig::from_document() {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    logging::init(config.max_level());
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "falling back to default config");
    }
    tracing::info!(renamable = ?config.renamable_containers, "mounting list board");

    mount_to_body(move || view! { <App config=config /> });
}
