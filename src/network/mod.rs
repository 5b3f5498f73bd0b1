// Re-export network modules
pub mod api_client;
pub mod config;
pub mod error;

// Re-export commonly used items
pub use api_client::ApiClient;
pub use error::ApiError;

use config::ApiConfig;
use lazy_static::lazy_static;
use serde::Deserialize;
use std::sync::RwLock;
use wasm_bindgen::prelude::*;

lazy_static! {
    static ref API_CONFIG: RwLock<Option<ApiConfig>> = RwLock::new(None);
}

fn store_config(config: ApiConfig) {
    crate::debug_log!("API base URL: {:?}", config.base_url());
    match API_CONFIG.write() {
        Ok(mut guard) => *guard = Some(config),
        Err(poisoned) => *poisoned.into_inner() = Some(config),
    }
}

/// Initialize the API configuration from the compile-time `API_BASE_URL`.
pub fn init_api_config() -> Result<(), &'static str> {
    let config = ApiConfig::new()?;
    store_config(config);
    Ok(())
}

/// Initialize the API configuration from a JS-provided URL.
/// This allows runtime configuration of the API endpoints.
#[wasm_bindgen]
pub fn init_api_config_js(api_base_url: &str) -> Result<(), JsValue> {
    crate::debug_log!("Initializing API config from JS: {}", api_base_url);
    store_config(ApiConfig::from_url(api_base_url));
    Ok(())
}

/// Runtime configuration object handed over by the bootstrap script, e.g.
/// `init_runtime_config_js({ apiBaseUrl: "http://localhost:5555" })`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeConfig {
    #[serde(default)]
    pub api_base_url: Option<String>,
}

#[wasm_bindgen]
pub fn init_runtime_config_js(config: JsValue) -> Result<(), JsValue> {
    let runtime: RuntimeConfig = serde_wasm_bindgen::from_value(config)?;
    if let Some(url) = runtime.api_base_url {
        init_api_config_js(&url)?;
    }
    Ok(())
}

/// Whether a base URL was configured explicitly (compile time or runtime).
pub(crate) fn has_explicit_base_url() -> bool {
    API_CONFIG
        .read()
        .map(|guard| guard.as_ref().map_or(false, |cfg| !cfg.is_same_origin()))
        .unwrap_or(false)
}

/// Snapshot of the active configuration; same-origin when nothing was set.
pub(crate) fn current_config() -> ApiConfig {
    API_CONFIG
        .read()
        .ok()
        .and_then(|guard| guard.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_config_defaults_to_none() {
        let cfg = RuntimeConfig::default();
        assert!(cfg.api_base_url.is_none());
    }

    #[test]
    fn runtime_config_reads_camel_case() {
        let cfg: RuntimeConfig =
            serde_json::from_str(r#"{"apiBaseUrl": "http://localhost:5555"}"#).unwrap();
        assert_eq!(cfg.api_base_url.as_deref(), Some("http://localhost:5555"));
    }
}
