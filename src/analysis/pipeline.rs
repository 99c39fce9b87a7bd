use std::sync::Arc;

use chrono::{Local, NaiveDate, Utc};
use indicatif::{ProgressBar, ProgressStyle};

use crate::analysis::aggregator::ReviewAggregator;
use crate::config::PipelineConfig;
use crate::discovery::ProductDiscovery;
use crate::error::{Error, Result};
use crate::models::{
    AggregatedReviews, ContentDocument, FailedPublish, Product, PublishedReview, RunReport,
    SkippedProduct,
};
use crate::observer::Observer;
use crate::publish::Publisher;
use crate::render::{DocumentCompiler, SectionRenderer};
use crate::sources::ReviewCollector;
use crate::storage::Storage;

/// Discovery, aggregation, rendering and publishing for a batch of products.
///
/// Products are processed one at a time. A product that falls below the
/// review threshold is skipped and a publish failure is recorded; neither
/// stops the rest of the batch.
pub struct ReviewPipeline {
    discovery: Arc<dyn ProductDiscovery>,
    aggregator: ReviewAggregator,
    renderer: SectionRenderer,
    compiler: DocumentCompiler,
    publisher: Arc<dyn Publisher>,
    storage: Storage,
    observer: Arc<dyn Observer>,
    config: PipelineConfig,
    show_progress: bool,
}

impl ReviewPipeline {
    pub fn new(
        discovery: impl ProductDiscovery + 'static,
        collector: impl ReviewCollector + 'static,
        publisher: impl Publisher + 'static,
        storage: Storage,
        observer: Arc<dyn Observer>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            discovery: Arc::new(discovery),
            aggregator: ReviewAggregator::new(
                Arc::new(collector),
                observer.clone(),
                config.source_timeout,
            ),
            renderer: SectionRenderer::new(config.affiliate_tag.clone()),
            compiler: DocumentCompiler::new(),
            publisher: Arc::new(publisher),
            storage,
            observer,
            config,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub async fn run(&self, niche: &str, count: usize) -> Result<RunReport> {
        self.observer
            .info(&format!("Starting review workflow for {} niche", niche));

        let products = self.discovery.find_candidates(niche, count).await?;
        self.observer
            .info(&format!("Found {} trending products", products.len()));

        let mut report = RunReport::new(niche, products.len());
        let pb = self.progress_bar(products.len());

        for product in products {
            self.observer.info(&format!("Processing: {}", product.name));
            self.process_product(niche, product, &mut report).await;
            pb.inc(1);
        }

        pb.finish_and_clear();

        if !report.has_published() {
            self.observer
                .warn("No reviews were created - insufficient data or errors occurred");
        } else {
            for published in &report.published {
                self.observer
                    .info(&format!("Added {} to review index", published.product_name));
            }
            self.observer.info(&format!(
                "Workflow completed: {} published, {} skipped, {} failed",
                report.published.len(),
                report.skipped.len(),
                report.failed.len()
            ));
        }

        Ok(report)
    }

    /// Reviewing a named product without discovery has no lookup source yet.
    pub async fn review_single_product(&self, product_name: &str) -> Result<RunReport> {
        Err(Error::NotWired(format!(
            "single-product review for '{}' needs a product lookup",
            product_name
        )))
    }

    async fn process_product(&self, niche: &str, product: Product, report: &mut RunReport) {
        let product = Arc::new(product);
        let aggregated = self
            .aggregator
            .aggregate(product.clone(), &self.config.review_sources)
            .await;

        if let Err(e) = self.check_threshold(&aggregated) {
            self.observer.warn(&e.to_string());
            report.skipped.push(SkippedProduct {
                product_name: product.name.clone(),
                reason: e.to_string(),
            });
            return;
        }

        let document = self.build_document(&aggregated, Local::now().date_naive());
        self.observer.info(&format!(
            "Generated {} characters of content for {}",
            document.html().len(),
            product.name
        ));

        let filename = document.filename();
        match self.publisher.publish(&filename, document.html()).await {
            Ok(path) => {
                let published = PublishedReview {
                    product_name: product.name.clone(),
                    niche: niche.to_string(),
                    filename,
                    path,
                    review_count: aggregated.total_reviews(),
                    published_at: Utc::now(),
                };
                if let Err(e) = self.storage.record_published(&published) {
                    self.observer.warn(&format!(
                        "Published {} but could not update the review index: {}",
                        product.name, e
                    ));
                }
                report.published.push(published);
            }
            Err(e) => {
                self.observer.error(&e.to_string());
                report.failed.push(FailedPublish {
                    product_name: product.name.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    pub fn check_threshold(&self, aggregated: &AggregatedReviews) -> Result<()> {
        let found = aggregated.total_reviews();
        let required = self.config.min_reviews_per_product;
        if found < required {
            return Err(Error::InsufficientReviews {
                product: aggregated.product.name.clone(),
                found,
                required,
            });
        }
        Ok(())
    }

    pub fn build_document(
        &self,
        aggregated: &AggregatedReviews,
        updated_on: NaiveDate,
    ) -> ContentDocument {
        let sections = self.renderer.render(aggregated, self.config.layout);
        self.compiler.compile(aggregated, sections, updated_on)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} products")
            .map(|style| style.progress_chars("#>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb
    }
}
