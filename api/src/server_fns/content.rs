use dioxus::prelude::*;
use shared::content::ContentEntry;

#[cfg(feature = "server")]
use super::server_error;
#[cfg(feature = "server")]
use crate::globals::CONTENT;

/// All image entries from the content service. Uncached: every call goes upstream.
#[get("/api/content/images")]
pub async fn get_images() -> Result<Vec<ContentEntry>, ServerFnError> {
    #[cfg(feature = "server")]
    {
        let Some(source) = CONTENT.as_ref() else {
            return Err(server_error(503, "content service is not configured"));
        };

        source.images().await.map_err(|e| {
            tracing::warn!("{} image fetch failed: {}", source.name(), e);
            server_error(502, e)
        })
    }
    #[cfg(not(feature = "server"))]
    Ok(Vec::new())
}
