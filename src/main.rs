//! RecipeShare Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod hooks;
mod models;
mod planner;
mod resources;
mod session;
#[cfg(test)]
mod test_support;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(log::LevelFilter::Debug) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
