use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PublishedReview {
    pub product_name: String,
    pub niche: String,
    pub filename: String,
    pub path: PathBuf,
    pub review_count: usize,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkippedProduct {
    pub product_name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FailedPublish {
    pub product_name: String,
    pub error: String,
}

/// Outcome of one batch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunReport {
    pub niche: String,
    pub candidates: usize,
    pub published: Vec<PublishedReview>,
    pub skipped: Vec<SkippedProduct>,
    pub failed: Vec<FailedPublish>,
}

impl RunReport {
    pub fn new(niche: impl Into<String>, candidates: usize) -> Self {
        Self {
            niche: niche.into(),
            candidates,
            ..Default::default()
        }
    }

    pub fn has_published(&self) -> bool {
        !self.published.is_empty()
    }

    /// True when the run touched no product at all.
    pub fn is_empty(&self) -> bool {
        self.published.is_empty() && self.skipped.is_empty() && self.failed.is_empty()
    }
}
