//! SchreckNet Lite Entry Point

mod app;
mod catalog;
mod clan;
mod components;
mod config;
mod context;
mod fetch;
mod guard;
mod models;
mod store;

use app::App;
use config::SheetConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    let config = SheetConfig::from_page();
    tracing::info!("Starting SchreckNet Lite");
    mount_to_body(move || view! { <App config=config /> });
}
