// SPDX-FileCopyrightText: 2026 Eventman Developers
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use eventman_client::ApiConfig;
use tokio::fs;

const APP_NAME: &str = "eventman";
const EVENTMAN_CONFIG_ENV: &str = "EVENTMAN_CONFIG";

/// Resolves and parses the configuration file. Resolution order:
/// explicit `--config` flag, the `EVENTMAN_CONFIG` environment
/// variable, then the platform config directory. A missing file falls
/// back to defaults so the tool works against a local backend out of
/// the box.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        Some(path)
    } else if let Ok(env_path) = std::env::var(EVENTMAN_CONFIG_ENV) {
        Some(PathBuf::from(env_path))
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        config.exists().then_some(config)
    };

    let Some(path) = path else {
        tracing::debug!("no config file found, using defaults");
        return Ok(Config::default());
    };

    fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {e}", path.display()))?
        .parse::<Config>()
        .map_err(|e| format!("Failed to parse config at {}: {e}", path.display()).into())
}

/// Configuration for the eventman CLI.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend connection settings.
    pub api: ApiConfig,
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use eventman_client::DEFAULT_BASE_URL;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_parse_api_section() {
        let config: Config = r#"
[api]
base_url = "http://backend.internal:8000/api"
timeout_secs = 5
"#
        .parse()
        .unwrap();
        assert_eq!(config.api.base_url, "http://backend.internal:8000/api");
        assert_eq!(config.api.timeout_secs, 5);
    }

    #[tokio::test]
    async fn test_explicit_path_is_read() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            r#"
[api]
base_url = "http://127.0.0.1:9000/api"
"#,
        )
        .unwrap();

        let config = parse_config(Some(config_path)).await.unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:9000/api");
    }

    #[tokio::test]
    async fn test_missing_explicit_path_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("missing.toml");

        let result = parse_config(Some(config_path)).await;
        assert!(result.is_err());
    }
}
