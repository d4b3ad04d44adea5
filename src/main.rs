//! Food Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dashboard;
mod logging;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env().unwrap_or_else(|err| {
        web_sys::console::error_1(&format!("[APP] Invalid build configuration, using defaults: {}", err).into());
        AppConfig::default()
    });
    logging::init(&config);

    mount_to_body(move || view! { <App config=config /> });
}
