use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use std::time::Duration;

pub const DEFAULT_CONTACT_EMAIL: &str = "contact@timetracker.pl";
pub const DEFAULT_CONTACT_PHONE: &str = "+48 123 456 789";
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

/// Deployment overrides, read from `window.__TIMETRACKER_CONFIG` or `./config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub submit_delay_ms: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub contact_email: String,
    pub contact_phone: String,
    pub submit_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            contact_phone: DEFAULT_CONTACT_PHONE.to_string(),
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
        }
    }
}

impl AppConfig {
    pub fn from_runtime(runtime: RuntimeConfig) -> Self {
        let defaults = Self::default();
        Self {
            contact_email: non_blank(runtime.contact_email).unwrap_or(defaults.contact_email),
            contact_phone: non_blank(runtime.contact_phone).unwrap_or(defaults.contact_phone),
            submit_delay: runtime
                .submit_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.submit_delay),
        }
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }

    /// `tel:` link keeping only digits and a leading `+`.
    pub fn tel_href(&self) -> String {
        let trimmed = self.contact_phone.trim();
        let mut number = String::with_capacity(trimmed.len());
        if trimmed.starts_with('+') {
            number.push('+');
        }
        number.extend(trimmed.chars().filter(|c| c.is_ascii_digit()));
        format!("tel:{}", number)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

pub fn parse_runtime_config(raw: &str) -> anyhow::Result<RuntimeConfig> {
    serde_json::from_str(raw).context("config.json is not a valid runtime config")
}

/// Resolved configuration, or the built-in defaults before [`init`] has finished.
pub fn current() -> AppConfig {
    APP_CONFIG.get().cloned().unwrap_or_default()
}

pub async fn init() -> AppConfig {
    if let Some(cached) = APP_CONFIG.get() {
        return cached.clone();
    }
    let resolved = AppConfig::from_runtime(resolve_runtime_config().await);
    APP_CONFIG.get_or_init(|| resolved).clone()
}

#[cfg(target_arch = "wasm32")]
async fn resolve_runtime_config() -> RuntimeConfig {
    if let Some(cfg) = browser::snapshot_from_globals() {
        log::debug!("runtime config taken from window.__TIMETRACKER_CONFIG");
        return cfg;
    }
    match browser::fetch_runtime_config().await {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("falling back to built-in config: {:#}", err);
            RuntimeConfig::default()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn resolve_runtime_config() -> RuntimeConfig {
    RuntimeConfig::default()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{parse_runtime_config, RuntimeConfig};
    use anyhow::{anyhow, bail, Context};
    use wasm_bindgen::JsValue;

    fn read_key(obj: &js_sys::Object, key: &str) -> Option<JsValue> {
        // Accept both `contact_email` and `CONTACT_EMAIL` spellings.
        [key.to_string(), key.to_ascii_uppercase()]
            .iter()
            .filter_map(|k| js_sys::Reflect::get(obj, &JsValue::from_str(k)).ok())
            .find(|v| !v.is_undefined() && !v.is_null())
    }

    pub(super) fn snapshot_from_globals() -> Option<RuntimeConfig> {
        let w = web_sys::window()?;
        let any = js_sys::Reflect::get(&w, &"__TIMETRACKER_CONFIG".into()).ok()?;
        if any.is_undefined() || any.is_null() {
            return None;
        }
        let obj = js_sys::Object::from(any);
        Some(RuntimeConfig {
            contact_email: read_key(&obj, "contact_email").and_then(|v| v.as_string()),
            contact_phone: read_key(&obj, "contact_phone").and_then(|v| v.as_string()),
            submit_delay_ms: read_key(&obj, "submit_delay_ms")
                .and_then(|v| v.as_f64())
                .filter(|ms| ms.is_finite() && *ms >= 0.0)
                .map(|ms| ms as u64),
        })
    }

    fn config_json_url() -> anyhow::Result<String> {
        let origin = web_sys::window()
            .ok_or_else(|| anyhow!("no global `window` exists"))?
            .location()
            .origin()
            .map_err(|_| anyhow!("window.location.origin is unavailable"))?;
        Ok(format!("{}/config.json", origin))
    }

    pub(super) async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
        let url = config_json_url()?;
        let resp = reqwest::get(&url)
            .await
            .with_context(|| format!("request for {} failed", url))?;
        if !resp.status().is_success() {
            bail!("{} returned {}", url, resp.status());
        }
        let body = resp.text().await.context("config.json body unreadable")?;
        parse_runtime_config(&body)
    }
}
