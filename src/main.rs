//! Clinic Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod datetime;
mod dialog;
mod envelope;
mod error;
mod models;
mod router;
mod screen;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if console_logger::init(config::log_level()).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }
    log::info!("API base: {}", config::ApiConfig::from_build_env().base_url);
    mount_to_body(App);
}
