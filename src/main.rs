//! To-Do List Frontend Entry Point

mod app;
mod components;
mod config;
mod controller;
mod error;
mod list;
mod logging;
mod models;
mod store;
mod style;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = logging::init() {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
