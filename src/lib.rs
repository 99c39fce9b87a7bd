pub mod config;
pub mod error;
pub mod models;
pub mod observer;
pub mod sources;
pub mod discovery;
pub mod analysis;
pub mod render;
pub mod publish;
pub mod storage;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use observer::{Observer, RecordingObserver, Severity, TracingObserver};
pub use sources::{ReviewCollector, SampleCollector, SourceKind};
pub use discovery::{CatalogDiscovery, ProductDiscovery};
pub use analysis::{InsightExtractor, ReviewAggregator, ReviewPipeline};
pub use render::{DocumentCompiler, Layout, SectionRenderer};
pub use publish::{FilePublisher, Publisher};
pub use storage::Storage;
