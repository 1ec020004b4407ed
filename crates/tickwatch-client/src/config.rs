//! REST endpoint configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Exchange REST API settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the v1 API (serves `/symbols`).
    #[serde(default = "default_v1_base_url")]
    pub v1_base_url: String,
    /// Base URL of the v2 API (serves `/ticker/{pair}`).
    #[serde(default = "default_v2_base_url")]
    pub v2_base_url: String,
    /// Request timeout in seconds. None leaves the HTTP client's default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_v1_base_url() -> String {
    "https://api.gemini.com/v1".to_string()
}

fn default_v2_base_url() -> String {
    "https://api.gemini.com/v2".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            v1_base_url: default_v1_base_url(),
            v2_base_url: default_v2_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// Config pointing both API versions at one server (used by tests and
    /// local proxies).
    pub fn with_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            v1_base_url: format!("{base}/v1"),
            v2_base_url: format!("{base}/v2"),
            request_timeout_secs: None,
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
