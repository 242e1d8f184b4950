use std::env;

/// Application-level constants
pub const APP_NAME: &str = "Mediconsult";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for external provider calls. A stalled provider must
/// degrade to the next tier instead of hanging the caller.
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Log filter used when RUST_LOG is not set
pub fn default_log_filter() -> &'static str {
    "mediconsult=info,tower_http=warn"
}

/// Address the HTTP API binds to (MEDICONSULT_ADDR, default port 8000)
pub fn bind_addr() -> String {
    env::var("MEDICONSULT_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string())
}

/// External provider credentials, read from the environment.
///
/// A missing or blank variable means that tier is not configured — never
/// an error. The chain skips unconfigured tiers and the template fallback
/// keeps the system fully functional with no credentials at all.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub huggingface_token: Option<String>,
    pub watson_api_key: Option<String>,
    pub watson_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            huggingface_token: None,
            watson_api_key: None,
            watson_url: None,
            timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl ProviderSettings {
    pub fn from_env() -> Self {
        Self {
            huggingface_token: non_empty_var("HUGGINGFACE_API_TOKEN"),
            watson_api_key: non_empty_var("IBM_API_KEY"),
            watson_url: non_empty_var("IBM_URL"),
            timeout_secs: env::var("PROVIDER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PROVIDER_TIMEOUT_SECS),
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
