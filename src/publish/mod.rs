pub mod file;

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::Result;

pub use file::FilePublisher;

/// Durable destination for compiled review documents.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Stores `document` under `filename` and returns where it ended up.
    async fn publish(&self, filename: &str, document: &str) -> Result<PathBuf>;
}
