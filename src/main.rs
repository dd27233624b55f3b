//! Task List Frontend Entry Point

mod app;
mod components;
mod config;
mod groups;
mod keys;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting task list frontend");
    mount_to_body(App);
}
