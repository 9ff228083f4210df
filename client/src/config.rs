// SPDX-FileCopyrightText: 2026 Eventman Developers
//
// SPDX-License-Identifier: Apache-2.0

/// Base URL the original deployment ships with; used when no
/// configuration file overrides it.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Event Manager backend configuration.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, e.g. `http://127.0.0.1:8000/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("eventman-client/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}
