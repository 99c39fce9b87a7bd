use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::product::Product;

/// Source-specific engagement signal attached to a review.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "count", rename_all = "snake_case")]
pub enum Engagement {
    HelpfulVotes(u32),
    Upvotes(u32),
    Likes(u32),
}

/// One observed opinion from one source. `text` may be empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReviewRecord {
    pub text: String,
    pub rating: Option<f32>,
    pub engagement: Option<Engagement>,
    pub date: NaiveDate,
    #[serde(default)]
    pub verified: bool,
    /// Subreddit, video title, storefront and so on.
    pub context: Option<String>,
}

impl ReviewRecord {
    pub fn new(text: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            text: text.into(),
            rating: None,
            engagement: None,
            date,
            verified: false,
            context: None,
        }
    }

    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_engagement(mut self, engagement: Engagement) -> Self {
        self.engagement = Some(engagement);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn verified(mut self) -> Self {
        self.verified = true;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceSummary {
    Marketplace { average_rating: f32, total_count: u32 },
    Discussion { total_mentions: u32 },
    Video { total_videos: u32 },
    Shopping { average_rating: f32 },
}

/// What a single source returned for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SourceReport {
    pub reviews: Vec<ReviewRecord>,
    pub summary: SourceSummary,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceOutcome {
    Collected(SourceReport),
    Failed { error: String },
}

impl SourceOutcome {
    pub fn reviews(&self) -> &[ReviewRecord] {
        match self {
            SourceOutcome::Collected(report) => &report.reviews,
            SourceOutcome::Failed { .. } => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SourceOutcome::Collected(_) => None,
            SourceOutcome::Failed { error } => Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceEntry {
    pub name: String,
    pub outcome: SourceOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub text: String,
    pub source: String,
    pub rating: Option<f32>,
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProsCons {
    pub pros: Vec<String>,
    pub cons: Vec<String>,
}

impl ProsCons {
    /// Fixed lists; they are not derived from review content yet.
    pub fn placeholder() -> Self {
        Self {
            pros: vec![
                "Excellent performance and reliability".to_string(),
                "Premium build quality".to_string(),
                "Great value for money".to_string(),
                "Outstanding customer service".to_string(),
            ],
            cons: vec![
                "Setup can be complex for beginners".to_string(),
                "Premium price point".to_string(),
                "Limited availability in some regions".to_string(),
            ],
        }
    }
}

/// Per-product accumulator over all configured sources.
///
/// `total_reviews` always equals the number of reviews held by sources that
/// were collected successfully; failed sources contribute nothing.
#[derive(Debug, Clone)]
pub struct AggregatedReviews {
    pub product: Arc<Product>,
    pub pros_cons: ProsCons,
    total_reviews: usize,
    sources: Vec<SourceEntry>,
    quotes: Vec<Quote>,
}

impl AggregatedReviews {
    pub fn new(product: Arc<Product>) -> Self {
        Self {
            product,
            pros_cons: ProsCons::placeholder(),
            total_reviews: 0,
            sources: Vec::new(),
            quotes: Vec::new(),
        }
    }

    pub fn record_collected(
        &mut self,
        name: impl Into<String>,
        report: SourceReport,
        quotes: Vec<Quote>,
    ) {
        self.total_reviews += report.reviews.len();
        self.quotes.extend(quotes);
        self.sources.push(SourceEntry {
            name: name.into(),
            outcome: SourceOutcome::Collected(report),
        });
    }

    pub fn record_failed(&mut self, name: impl Into<String>, error: impl Into<String>) {
        self.sources.push(SourceEntry {
            name: name.into(),
            outcome: SourceOutcome::Failed {
                error: error.into(),
            },
        });
    }

    pub fn total_reviews(&self) -> usize {
        self.total_reviews
    }

    pub fn sources(&self) -> &[SourceEntry] {
        &self.sources
    }

    pub fn source(&self, name: &str) -> Option<&SourceOutcome> {
        self.sources
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.outcome)
    }

    pub fn failed_sources(&self) -> impl Iterator<Item = &SourceEntry> {
        self.sources
            .iter()
            .filter(|entry| entry.outcome.error().is_some())
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }
}
