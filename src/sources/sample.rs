use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{Engagement, Product, ReviewRecord, SourceReport, SourceSummary};
use crate::sources::collector::ReviewCollector;
use crate::sources::SourceKind;

/// Offline collector returning fixed sample reviews for every product.
///
/// Stands in for real marketplace, forum, video and shopping integrations
/// until those are wired up.
#[derive(Debug, Clone, Default)]
pub struct SampleCollector;

impl SampleCollector {
    pub fn new() -> Self {
        Self
    }

    fn amazon(&self, _product: &Product) -> SourceReport {
        SourceReport {
            reviews: vec![
                ReviewRecord::new(
                    "Absolutely love this product! Works perfectly and exceeded expectations.",
                    day(2024, 12, 15),
                )
                .with_rating(5.0)
                .with_engagement(Engagement::HelpfulVotes(12))
                .verified(),
                ReviewRecord::new(
                    "Good product overall, minor issues with setup but great performance.",
                    day(2024, 12, 10),
                )
                .with_rating(4.0)
                .with_engagement(Engagement::HelpfulVotes(8))
                .verified(),
            ],
            summary: SourceSummary::Marketplace {
                average_rating: 4.6,
                total_count: 1247,
            },
        }
    }

    fn reddit(&self, _product: &Product) -> SourceReport {
        SourceReport {
            reviews: vec![ReviewRecord::new(
                "Been using this for 6 months, definitely worth the investment.",
                day(2024, 12, 1),
            )
            .with_engagement(Engagement::Upvotes(156))
            .with_context("ProductReviews")],
            summary: SourceSummary::Discussion { total_mentions: 89 },
        }
    }

    fn youtube(&self, product: &Product) -> SourceReport {
        SourceReport {
            reviews: vec![ReviewRecord::new(
                "Great review! This convinced me to purchase.",
                day(2024, 11, 28),
            )
            .with_engagement(Engagement::Likes(45))
            .with_context(format!("{} Review", product.name))],
            summary: SourceSummary::Video { total_videos: 23 },
        }
    }

    fn google(&self, _product: &Product) -> SourceReport {
        SourceReport {
            reviews: vec![ReviewRecord::new(
                "Solid product, meets all advertised features.",
                day(2024, 12, 5),
            )
            .with_rating(4.5)
            .with_context("Google Shopping")],
            summary: SourceSummary::Shopping {
                average_rating: 4.4,
            },
        }
    }
}

#[async_trait]
impl ReviewCollector for SampleCollector {
    async fn collect(&self, product: &Product, source: SourceKind) -> Result<SourceReport> {
        tracing::debug!("Collecting sample {} reviews for {}", source, product.name);
        let report = match source {
            SourceKind::Amazon => self.amazon(product),
            SourceKind::Reddit => self.reddit(product),
            SourceKind::YouTube => self.youtube(product),
            SourceKind::Google => self.google(product),
        };
        Ok(report)
    }

    fn name(&self) -> &str {
        "sample"
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sample_review_counts() {
        let collector = SampleCollector::new();
        let product = Product::new("Ninja Max XL Air Fryer", "Kitchen Appliance");

        let mut counts = Vec::new();
        for source in SourceKind::ALL {
            let report = collector.collect(&product, source).await.unwrap();
            counts.push(report.reviews.len());
        }

        assert_eq!(counts, vec![2, 1, 1, 1]);
    }

    #[tokio::test]
    async fn test_youtube_context_mentions_product() {
        let collector = SampleCollector::new();
        let product = Product::new("Steam Deck OLED", "Gaming Handheld");

        let report = collector.collect(&product, SourceKind::YouTube).await.unwrap();
        assert_eq!(
            report.reviews[0].context.as_deref(),
            Some("Steam Deck OLED Review")
        );
        assert_eq!(report.summary, SourceSummary::Video { total_videos: 23 });
    }

    #[tokio::test]
    async fn test_amazon_reviews_are_verified() {
        let collector = SampleCollector::new();
        let product = Product::new("iPhone 15 Pro", "Smartphone");

        let report = collector.collect(&product, SourceKind::Amazon).await.unwrap();
        assert!(report.reviews.iter().all(|r| r.verified));
        assert_eq!(report.reviews[0].rating, Some(5.0));
    }
}
