//! Process-wide backend configuration.
//!
//! The base URL is resolved exactly once at startup and every panel
//! reads the same handle; no component owns its own URL.

use once_cell::sync::OnceCell;

/// Port the SmartPlanning backend listens on when no override is given.
const DEFAULT_BACKEND_PORT: &str = "8000";

static API_CONFIG: OnceCell<ApiConfig> = OnceCell::new();

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Resolve the backend base URL and store it for the process.
    ///
    /// Resolution order:
    /// 1. `window.PCP360_API_BASE` (deployment override, set in index.html)
    /// 2. `{protocol}//{hostname}:8000` derived from the window location
    /// 3. local loopback default (non-browser contexts)
    pub fn init() -> &'static ApiConfig {
        API_CONFIG.get_or_init(|| ApiConfig::with_base(resolve_base_url()))
    }

    /// Read-only handle used by panel `api` modules.
    pub fn get() -> &'static ApiConfig {
        Self::init()
    }

    pub fn with_base(base_url: impl Into<String>) -> ApiConfig {
        let base_url = base_url.into();
        ApiConfig {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join a resource path ("/dashboard/summary") onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn resolve_base_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(overridden) = override_from_window() {
            return overridden;
        }
        if let Some(derived) = derived_from_location() {
            return derived;
        }
    }
    format!("http://127.0.0.1:{}", DEFAULT_BACKEND_PORT)
}

#[cfg(target_arch = "wasm32")]
fn override_from_window() -> Option<String> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(
        window.as_ref(),
        &wasm_bindgen::JsValue::from_str("PCP360_API_BASE"),
    )
    .ok()?;
    let value = value.as_string()?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(target_arch = "wasm32")]
fn derived_from_location() -> Option<String> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().ok()?;
    let hostname = location.hostname().ok()?;
    if hostname.is_empty() {
        return None;
    }
    Some(format!("{}//{}:{}", protocol, hostname, DEFAULT_BACKEND_PORT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths() {
        let config = ApiConfig::with_base("http://10.0.0.5:8000");
        assert_eq!(
            config.url("/dashboard/summary"),
            "http://10.0.0.5:8000/dashboard/summary"
        );
    }

    #[test]
    fn strips_trailing_slash() {
        let config = ApiConfig::with_base("https://api.example.com/ ");
        assert_eq!(config.base_url(), "https://api.example.com");
    }
}
