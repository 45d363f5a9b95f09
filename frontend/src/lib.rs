use leptos::*;
use leptos_meta::provide_meta_context;

pub mod api;
mod components;
pub mod config;
pub mod pages;
pub mod utils;

#[cfg(test)]
mod test_support;

use pages::home::HomePage;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    view! { <HomePage /> }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log_level()).is_err() {
        web_sys::console::warn_1(&"console logger already initialised".into());
    }
    log::info!("Starting TimeTracker Pro landing page (wasm)");

    // Contact channels come from runtime config, so mount once it resolves.
    wasm_bindgen_futures::spawn_local(async move {
        let cfg = config::init().await;
        log::info!(
            "Runtime config initialized (contact {}, stand-in delay {:?})",
            cfg.contact_email,
            cfg.submit_delay
        );
        mount_to_body(App);
    });
}
