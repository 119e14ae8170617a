//! Centralized configuration management.
//!
//! All environment variables are read once at startup through this module.
//! A `.env` file in the working directory is loaded first when present.

/// Application configuration loaded from environment variables.
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Contentful space holding the site images
    pub contentful_space_id: Option<String>,
    /// Delivery API token. Without it the content service is disabled.
    pub contentful_access_token: Option<String>,
    /// Contentful environment (default: "master")
    pub contentful_environment: String,
    /// Delivery API base URL (default: "https://cdn.contentful.com")
    pub contentful_url: String,
    /// HTTP server port (default: 8080)
    pub port: u16,
    /// HTTP server bind address (default: "0.0.0.0")
    pub ip: String,
}

#[cfg(feature = "server")]
impl AppConfig {
    pub fn from_env() -> Self {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::info!("Loaded environment from {}", path.display());
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            contentful_space_id: var("CONTENTFUL_SPACE_ID").filter(|v| !v.is_empty()),
            contentful_access_token: var("CONTENTFUL_ACCESS_TOKEN").filter(|v| !v.is_empty()),
            contentful_environment: var("CONTENTFUL_ENVIRONMENT")
                .unwrap_or_else(|| "master".to_string()),
            contentful_url: var("CONTENTFUL_URL")
                .unwrap_or_else(|| "https://cdn.contentful.com".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            ip: var("IP").unwrap_or_else(|| "0.0.0.0".to_string()),
        }
    }

    /// Whether both Contentful credentials are present.
    pub fn has_content_service(&self) -> bool {
        self.contentful_space_id.is_some() && self.contentful_access_token.is_some()
    }
}

#[cfg(feature = "server")]
use std::sync::LazyLock;

/// Global application configuration singleton.
#[cfg(feature = "server")]
pub static CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::from_env);

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config(&[]);
        assert!(!config.has_content_service());
        assert_eq!(config.contentful_environment, "master");
        assert_eq!(config.contentful_url, "https://cdn.contentful.com");
        assert_eq!(config.port, 8080);
        assert_eq!(config.ip, "0.0.0.0");
    }

    #[test]
    fn credentials_enable_content_service() {
        let config = config(&[
            ("CONTENTFUL_SPACE_ID", "space"),
            ("CONTENTFUL_ACCESS_TOKEN", "token"),
            ("PORT", "not-a-port"),
        ]);
        assert!(config.has_content_service());
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn empty_token_counts_as_missing() {
        let config = config(&[
            ("CONTENTFUL_SPACE_ID", "space"),
            ("CONTENTFUL_ACCESS_TOKEN", ""),
        ]);
        assert!(!config.has_content_service());
    }
}
