use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(not(target_arch = "wasm32"))]
const HOST_DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::RuntimeConfig;
    use anyhow::{anyhow, bail, Context};

    fn read_global(global: &str, keys: [&str; 2]) -> Option<String> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        keys.iter()
            .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
            .find(|v| !v.is_undefined() && !v.is_null())
            .and_then(|v| v.as_string())
    }

    /// `window.__GOPLAN_ENV` (env.js) wins over `window.__GOPLAN_CONFIG`.
    pub fn snapshot_from_globals() -> Option<String> {
        read_global("__GOPLAN_ENV", ["API_BASE_URL", "api_base_url"])
            .or_else(|| read_global("__GOPLAN_CONFIG", ["api_base_url", "API_BASE_URL"]))
    }

    pub fn origin() -> Option<String> {
        web_sys::window()?.location().origin().ok()
    }

    pub fn write_window_config(cfg: &RuntimeConfig) {
        let (Some(url), Some(w)) = (&cfg.api_base_url, web_sys::window()) else {
            return;
        };
        let obj = js_sys::Object::new();
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
        let _ = js_sys::Reflect::set(&w, &"__GOPLAN_CONFIG".into(), &obj);
    }

    pub async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
        let origin = origin().ok_or_else(|| anyhow!("no window origin"))?;
        let resp = reqwest::get(format!("{}/config.json", origin))
            .await
            .context("fetching config.json")?;
        if !resp.status().is_success() {
            bail!("config.json returned {}", resp.status());
        }
        resp.json::<RuntimeConfig>()
            .await
            .context("parsing config.json")
    }
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim_end_matches('/').to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

#[cfg(target_arch = "wasm32")]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = browser::snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    match browser::fetch_runtime_config().await {
        Ok(cfg) => {
            browser::write_window_config(&cfg);
            if let Some(url) = cfg.api_base_url {
                return cache_base_url(&url);
            }
        }
        Err(err) => log::debug!("No runtime config: {:#}", err),
    }
    let fallback = browser::origin()
        .map(|origin| format!("{}/api", origin))
        .unwrap_or_else(|| "/api".to_string());
    cache_base_url(&fallback)
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    cache_base_url(HOST_DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::info!("API base URL: {}", base);
}
