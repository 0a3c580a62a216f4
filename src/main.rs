//! Shopping List Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod list_store;
mod models;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    mount_to_body(App);
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(level);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {}
