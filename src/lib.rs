use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod command_executors;
mod components;
mod constants;
mod dom_utils;
mod forms;
mod macros;
mod messages;
mod models;
mod network;
mod pages;
mod reducers;
mod router;
mod state;
mod toast;
mod ui;
mod ui_components;
mod update;
mod utils;
mod views;

use crate::constants::API_CONFIG_WAIT_MS;
use crate::messages::Message;
use crate::router::Route;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    if let Err(e) = network::init_api_config() {
        web_sys::console::warn_1(&format!("API config: {}", e).into());
    }

    let document = dom_utils::document()?;
    ui::setup::create_base_ui(&document)?;

    spawn_local(async {
        if !wait_for_api_config(API_CONFIG_WAIT_MS).await {
            web_sys::console::warn_1(
                &"No API base URL configured; using same-origin /api".into(),
            );
        }
        if let Err(e) = install_router() {
            web_sys::console::error_1(&format!("Router setup failed: {:?}", e).into());
        }
    });

    Ok(())
}

fn is_localhost() -> bool {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .map(|h| {
            let h = h.to_lowercase();
            h == "localhost" || h == "127.0.0.1"
        })
        .unwrap_or(false)
}

// On localhost the bootstrap script may call init_runtime_config_js() after
// the start hook already ran. Give it a short head start before fetching.
async fn wait_for_api_config(timeout_ms: u32) -> bool {
    use gloo_timers::future::TimeoutFuture;

    if !is_localhost() {
        return true;
    }
    let start = js_sys::Date::now();
    loop {
        if network::has_explicit_base_url() {
            return true;
        }
        if js_sys::Date::now() - start >= f64::from(timeout_ms) {
            return false;
        }
        TimeoutFuture::new(25).await;
    }
}

fn install_router() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    ui_components::on_event(&window, "hashchange", |_| route_current_hash())?;
    route_current_hash();
    Ok(())
}

/// Show the page for `location.hash`, rewriting unknown or sloppy hashes to
/// their canonical form first (which fires another hashchange).
fn route_current_hash() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let hash = window.location().hash().unwrap_or_default();
    let route = Route::from_hash(&hash);
    if !Route::is_canonical(&hash) {
        crate::debug_log!("Redirecting {:?} to {}", hash, route.to_hash());
        if let Err(e) = window.location().replace(&route.to_hash()) {
            web_sys::console::warn_1(&format!("Failed to rewrite hash: {:?}", e).into());
        }
        return;
    }
    state::dispatch_global_message(Message::Navigate(route));
}
