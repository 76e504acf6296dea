#![allow(warnings)]
//! Library Reservation Frontend Entry Point

mod api;
mod app;
mod availability;
mod components;
mod config;
mod confirm;
mod context;
mod error;
mod lifecycle;
mod logging;
mod models;
mod notification;
mod page;
mod session;
mod sql_console;
mod store;

use app::App;
use leptos::prelude::*;

use config::Config;

fn main() {
    console_error_panic_hook::set_once();

    let config = Config::load().unwrap_or_else(|e| {
        web_sys::console::error_1(&format!("invalid embedded config, using defaults: {:#}", e).into());
        Config::default()
    });

    if let Err(e) = logging::init(&config.logging.level) {
        web_sys::console::error_1(&format!("logger already set: {}", e).into());
    }
    log::info!("backend at {}", config.api_base());

    mount_to_body(move || view! { <App config=config.clone() /> });
}
