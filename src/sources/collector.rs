use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Product, SourceReport};
use crate::sources::SourceKind;

/// Fetches reviews for a product from one source.
///
/// Implementations fail with [`crate::Error::SourceUnavailable`] when the
/// source cannot be reached; the aggregator records the failure and moves on.
#[async_trait]
pub trait ReviewCollector: Send + Sync {
    async fn collect(&self, product: &Product, source: SourceKind) -> Result<SourceReport>;
    fn name(&self) -> &str;
}
