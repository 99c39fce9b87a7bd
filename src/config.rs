use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render::Layout;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub affiliate_tag: String,
    pub min_reviews_per_product: usize,
    pub review_sources: Vec<String>,
    /// Advisory only; section rendering does not consult it.
    pub target_word_count: u32,
    pub output_dir: PathBuf,
    pub database_path: PathBuf,
    pub layout: Layout,
    pub source_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            affiliate_tag: "reviews-20".to_string(),
            min_reviews_per_product: 50,
            review_sources: ["amazon", "reddit", "youtube", "google"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            target_word_count: 2000,
            output_dir: PathBuf::from("reviews"),
            database_path: PathBuf::from("reviewforge.db"),
            layout: Layout::Extended,
            source_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Loads `path` over the built-in defaults, then applies environment
    /// overrides. A missing file is not an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            Self::from_json(&raw).map_err(|e| {
                Error::Config(format!("Failed to parse {}: {}", path.display(), e))
            })?
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Self::default()
        };

        config.apply_overrides(|key| env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(tag) = lookup("AFFILIATE_TAG").filter(|v| !v.is_empty()) {
            self.affiliate_tag = tag;
        }

        if let Some(min) = lookup("MIN_REVIEWS_PER_PRODUCT").and_then(|v| v.parse().ok()) {
            self.min_reviews_per_product = min;
        }

        if let Some(dir) = lookup("REVIEW_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }

        if let Some(db) = lookup("REVIEW_DATABASE_PATH") {
            self.database_path = PathBuf::from(db);
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.review_sources.is_empty() {
            return Err(Error::Config("review_sources must not be empty".to_string()));
        }
        if self.source_timeout_secs == 0 {
            return Err(Error::Config(
                "source_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub affiliate_tag: String,
    pub min_reviews_per_product: usize,
    pub review_sources: Vec<String>,
    pub layout: Layout,
    pub source_timeout: Duration,
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self {
            affiliate_tag: config.affiliate_tag.clone(),
            min_reviews_per_product: config.min_reviews_per_product,
            review_sources: config.review_sources.clone(),
            layout: config.layout,
            source_timeout: Duration::from_secs(config.source_timeout_secs),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.affiliate_tag, "reviews-20");
        assert_eq!(config.min_reviews_per_product, 50);
        assert_eq!(
            config.review_sources,
            vec!["amazon", "reddit", "youtube", "google"]
        );
        assert_eq!(config.target_word_count, 2000);
        assert_eq!(config.layout, Layout::Extended);
    }

    #[test]
    fn test_partial_json_merges_over_defaults() {
        let config = Config::from_json(
            r#"{"affiliate_tag": "gadgets-21", "github_repo": "someone/site", "layout": "standard"}"#,
        )
        .unwrap();

        assert_eq!(config.affiliate_tag, "gadgets-21");
        assert_eq!(config.min_reviews_per_product, 50);
        assert_eq!(config.layout, Layout::Standard);
        assert_eq!(config.review_sources.len(), 4);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("AFFILIATE_TAG", "env-tag-20"),
            ("MIN_REVIEWS_PER_PRODUCT", "3"),
            ("REVIEW_OUTPUT_DIR", "site/reviews"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.affiliate_tag, "env-tag-20");
        assert_eq!(config.min_reviews_per_product, 3);
        assert_eq!(config.output_dir, PathBuf::from("site/reviews"));
        assert_eq!(config.database_path, PathBuf::from("reviewforge.db"));
    }

    #[test]
    fn test_unparseable_override_is_ignored() {
        let mut config = Config::default();
        config.apply_overrides(|key| {
            (key == "MIN_REVIEWS_PER_PRODUCT").then(|| "lots".to_string())
        });
        assert_eq!(config.min_reviews_per_product, 50);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/reviewforge/config.json").unwrap();
        assert_eq!(config.review_sources.len(), 4);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"affiliate_tag": "gadgets-21","#).unwrap();

        match Config::load(&path) {
            Err(Error::Config(msg)) => {
                assert!(msg.contains(&path.display().to_string()), "{}", msg)
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_sources() {
        let config = Config {
            review_sources: Vec::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn test_pipeline_config_from_config() {
        let config = Config {
            source_timeout_secs: 5,
            ..Config::default()
        };
        let pipeline = PipelineConfig::from(&config);
        assert_eq!(pipeline.source_timeout, Duration::from_secs(5));
        assert_eq!(pipeline.affiliate_tag, "reviews-20");
    }
}
