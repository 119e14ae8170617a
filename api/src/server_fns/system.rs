use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use crate::globals::CONTENT;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ContentHealth {
    pub configured: bool,
    pub reachable: bool,
}

#[get("/api/health")]
pub async fn get_health() -> Result<ContentHealth, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let health = match CONTENT.as_ref() {
            Some(source) => ContentHealth {
                configured: true,
                reachable: source.health_check().await,
            },
            None => ContentHealth::default(),
        };
        Ok(health)
    }
    #[cfg(not(feature = "server"))]
    Ok(ContentHealth::default())
}
