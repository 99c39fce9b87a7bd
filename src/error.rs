use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Source {source_name} unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("Unknown source: {0}")]
    UnknownSource(String),

    #[error("Insufficient reviews for {product}: found {found}, need {required}")]
    InsufficientReviews {
        product: String,
        found: usize,
        required: usize,
    },

    #[error("Failed to publish {filename}: {reason}")]
    PublishFailure { filename: String, reason: String },

    #[error("Product discovery failed: {0}")]
    Discovery(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not yet wired: {0}")]
    NotWired(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Errors confined to a single source or product; the batch carries on.
    pub fn is_isolated(&self) -> bool {
        matches!(
            self,
            Error::SourceUnavailable { .. }
                | Error::UnknownSource(_)
                | Error::InsufficientReviews { .. }
                | Error::PublishFailure { .. }
        )
    }

    pub fn source_unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }
}
