use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Research calls can run for minutes.
pub const DEFAULT_TIMEOUT_MS: u64 = 120_000;

/// Environment variable selecting the service base URL.
pub const API_URL_ENV: &str = "RESEARCH_API_URL";

/// Connection settings for the research service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    /// Log every request/response pair. On by default in debug builds only.
    pub log_requests: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            log_requests: cfg!(debug_assertions),
        }
    }
}

impl ClientConfig {
    /// Defaults, with the base URL taken from the runtime environment or,
    /// failing that, from the environment at compile time (WASM builds
    /// have no runtime environment).
    pub fn from_env() -> Self {
        let base_url = resolve_base_url(
            std::env::var(API_URL_ENV).ok(),
            option_env!("RESEARCH_API_URL"),
        );
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(&base_url.into());
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_request_logging(mut self, enabled: bool) -> Self {
        self.log_requests = enabled;
        self
    }

    /// Absolute URL for an API path such as `/api/research`.
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }
}

/// Pick the first non-blank candidate, falling back to [`DEFAULT_BASE_URL`].
pub fn resolve_base_url(runtime: Option<String>, compiled: Option<&str>) -> String {
    runtime
        .filter(|url| !url.trim().is_empty())
        .or_else(|| {
            compiled
                .filter(|url| !url.trim().is_empty())
                .map(String::from)
        })
        .map(|url| normalize_base_url(&url))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
