use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;

use crate::analysis::insights::InsightExtractor;
use crate::error::{Error, Result};
use crate::models::{AggregatedReviews, Product, SourceReport};
use crate::observer::Observer;
use crate::sources::{ReviewCollector, SourceKind};

/// Merges per-source review collections into one [`AggregatedReviews`].
///
/// Sources are collected concurrently, each under its own timeout, and
/// recorded in declaration order. A failed or unknown source is recorded
/// with its error and contributes nothing to the total; it never aborts
/// the product.
pub struct ReviewAggregator {
    collector: Arc<dyn ReviewCollector>,
    extractor: InsightExtractor,
    observer: Arc<dyn Observer>,
    timeout: Duration,
}

impl ReviewAggregator {
    pub fn new(
        collector: Arc<dyn ReviewCollector>,
        observer: Arc<dyn Observer>,
        timeout: Duration,
    ) -> Self {
        Self {
            collector,
            extractor: InsightExtractor::new(),
            observer,
            timeout,
        }
    }

    pub async fn aggregate(&self, product: Arc<Product>, sources: &[String]) -> AggregatedReviews {
        self.observer
            .info(&format!("Collecting reviews for {}", product.name));

        let collections = sources.iter().map(|name| {
            let product = product.as_ref();
            async move { (name, self.collect_named(product, name).await) }
        });

        // join_all yields in input order, not completion order.
        let results = join_all(collections).await;

        let mut aggregated = AggregatedReviews::new(product.clone());
        for (name, result) in results {
            match result {
                Ok(report) => {
                    let quotes = self.extractor.extract(name, &report.reviews);
                    self.observer.info(&format!(
                        "Collected {} reviews from {}",
                        report.reviews.len(),
                        name
                    ));
                    aggregated.record_collected(name.as_str(), report, quotes);
                }
                Err(e) => {
                    self.observer
                        .error(&format!("Failed to collect from {}: {}", name, e));
                    aggregated.record_failed(name.as_str(), e.to_string());
                }
            }
        }

        self.observer.info(&format!(
            "Total reviews collected for {}: {}",
            product.name,
            aggregated.total_reviews()
        ));
        aggregated
    }

    async fn collect_named(&self, product: &Product, name: &str) -> Result<SourceReport> {
        let kind: SourceKind = name.parse()?;

        match tokio::time::timeout(self.timeout, self.collector.collect(product, kind)).await {
            Ok(result) => result,
            Err(_) => Err(Error::source_unavailable(
                name,
                format!("timed out after {}s", self.timeout.as_secs_f32()),
            )),
        }
    }
}
