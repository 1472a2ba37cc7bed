//! Configuration loading and management

use crate::core::error::AdminError;
use crate::core::query::DEFAULT_PAGE_SIZE;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable overriding [`ApiConfig::base_url`]
pub const API_URL_ENV: &str = "STUDENT_ADMIN_API_URL";

/// Remote record store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root URL of the store; `/students` is appended
    pub base_url: String,

    /// Request timeout handed to the HTTP transport (none when omitted)
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout_secs: None,
        }
    }
}

/// Record table settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Rows per page of the derived view
    pub page_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Bundled record store server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Complete client configuration
///
/// Login credentials are not configurable; the gate checks a fixed pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub api: ApiConfig,
    pub view: ViewConfig,
    pub server: ServerConfig,
}

impl AdminConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides
    pub fn with_env_overrides(self) -> Self {
        self.with_api_url(std::env::var(API_URL_ENV).ok())
    }

    fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }

    /// Reject values the client cannot work with
    pub fn validate(&self) -> std::result::Result<(), AdminError> {
        if self.view.page_size == 0 {
            return Err(AdminError::Config {
                message: "view.page_size must be at least 1".to_string(),
            });
        }
        if self.api.base_url.trim().is_empty() {
            return Err(AdminError::Config {
                message: "api.base_url must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AdminConfig::default();

        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout(), None);
        assert_eq!(config.view.page_size, 10);
        assert_eq!(config.server.bind, "127.0.0.1:3000");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = AdminConfig::from_yaml_str(
            r#"
api:
  timeout_secs: 5
view:
  page_size: 25
"#,
        )
        .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.api.timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.view.page_size, 25);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let result = AdminConfig::from_yaml_str("view:\n  page_size: 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = AdminConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = AdminConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_api_url_override() {
        let config = AdminConfig::default().with_api_url(Some("http://store:8080".into()));
        assert_eq!(config.api.base_url, "http://store:8080");

        let config = AdminConfig::default().with_api_url(Some("  ".into()));
        assert_eq!(config.api.base_url, "http://localhost:3000");
    }
}
