use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::publish::Publisher;

/// Writes documents into a local directory, creating it on first use.
pub struct FilePublisher {
    output_dir: PathBuf,
}

impl FilePublisher {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[async_trait]
impl Publisher for FilePublisher {
    async fn publish(&self, filename: &str, document: &str) -> Result<PathBuf> {
        let failure = |e: std::io::Error| Error::PublishFailure {
            filename: filename.to_string(),
            reason: e.to_string(),
        };

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(failure)?;

        let path = self.output_dir.join(filename);
        tokio::fs::write(&path, document).await.map_err(failure)?;

        tracing::info!("Created review page: {}", path.display());
        Ok(path)
    }
}
