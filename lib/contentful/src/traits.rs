use async_trait::async_trait;
use shared::content::ContentEntry;

use crate::error::Result;

/// A read-only store of site images.
#[async_trait]
pub trait ContentSource: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;

    /// Every image entry the store holds, in store order.
    async fn images(&self) -> Result<Vec<ContentEntry>>;
    async fn health_check(&self) -> bool;
}
