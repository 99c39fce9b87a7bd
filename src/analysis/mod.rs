pub mod aggregator;
pub mod insights;
pub mod pipeline;

pub use aggregator::ReviewAggregator;
pub use insights::InsightExtractor;
pub use pipeline::ReviewPipeline;
