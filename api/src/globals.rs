#[cfg(feature = "server")]
use std::sync::{Arc, LazyLock};

#[cfg(feature = "server")]
use contentful::{ContentSource, ContentfulClientBuilder};
#[cfg(feature = "server")]
use tracing::{info, warn};

#[cfg(feature = "server")]
use crate::config::{AppConfig, CONFIG};

/// Builds the content source described by `config`, or `None` when it is
/// not configured or the client cannot be created.
#[cfg(feature = "server")]
pub fn content_source(config: &AppConfig) -> Option<Arc<dyn ContentSource>> {
    let (Some(space_id), Some(token)) = (
        config.contentful_space_id.as_deref(),
        config.contentful_access_token.as_deref(),
    ) else {
        warn!("CONTENTFUL_SPACE_ID or CONTENTFUL_ACCESS_TOKEN missing, content service disabled");
        return None;
    };

    match ContentfulClientBuilder::new()
        .base_url(&config.contentful_url)
        .space_id(space_id)
        .environment(&config.contentful_environment)
        .access_token(token)
        .build()
    {
        Ok(client) => {
            info!(
                "Content service: Contentful space {} ({})",
                space_id, config.contentful_environment
            );
            Some(Arc::new(client))
        }
        Err(e) => {
            warn!("Failed to create Contentful client: {}", e);
            None
        }
    }
}

#[cfg(feature = "server")]
pub static CONTENT: LazyLock<Option<Arc<dyn ContentSource>>> =
    LazyLock::new(|| content_source(&CONFIG));

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_disable_content_source() {
        let config = AppConfig::from_lookup(|_| None);
        assert!(content_source(&config).is_none());
    }

    #[test]
    fn bad_url_disables_content_source() {
        let config = AppConfig::from_lookup(|key| match key {
            "CONTENTFUL_SPACE_ID" => Some("space".to_string()),
            "CONTENTFUL_ACCESS_TOKEN" => Some("token".to_string()),
            "CONTENTFUL_URL" => Some("::".to_string()),
            _ => None,
        });
        assert!(content_source(&config).is_none());
    }

    #[test]
    fn configured_source_is_contentful() {
        let config = AppConfig::from_lookup(|key| match key {
            "CONTENTFUL_SPACE_ID" => Some("space".to_string()),
            "CONTENTFUL_ACCESS_TOKEN" => Some("token".to_string()),
            _ => None,
        });
        let source = content_source(&config).unwrap();
        assert_eq!(source.id(), "contentful");
    }
}
