use std::collections::HashMap;

use async_trait::async_trait;

use crate::discovery::{rank_candidates, search_queries, ProductDiscovery};
use crate::error::{Error, Result};
use crate::models::Product;

/// Discovery backed by a fixed per-niche catalog.
///
/// Every search phrasing resolves to the same niche listing, so the ranking
/// step is what collapses the repeated hits.
pub struct CatalogDiscovery {
    catalog: HashMap<String, Vec<Product>>,
}

impl CatalogDiscovery {
    pub fn new() -> Self {
        let mut catalog = HashMap::new();
        catalog.insert(
            "electronics".to_string(),
            vec![
                catalog_entry(
                    "Steam Deck OLED",
                    "Gaming Handheld",
                    89_000,
                    "medium",
                    "$549-699",
                    "B0CQ3RWQQZ",
                    &["steam deck review", "handheld gaming", "OLED display"],
                ),
                catalog_entry(
                    "iPhone 15 Pro",
                    "Smartphone",
                    156_000,
                    "high",
                    "$799-1299",
                    "B0CMZ5LT14",
                    &["iPhone 15 Pro review", "worth it 2025", "long term"],
                ),
            ],
        );
        catalog.insert(
            "kitchen".to_string(),
            vec![catalog_entry(
                "Ninja Max XL Air Fryer",
                "Kitchen Appliance",
                45_000,
                "medium",
                "$150-180",
                "B07VBR2PSN",
                &["air fryer review", "ninja max xl", "best air fryer 2025"],
            )],
        );

        Self { catalog }
    }

    pub fn with_catalog(catalog: HashMap<String, Vec<Product>>) -> Self {
        Self { catalog }
    }

    pub fn niches(&self) -> Vec<&str> {
        let mut niches: Vec<_> = self.catalog.keys().map(String::as_str).collect();
        niches.sort_unstable();
        niches
    }

    fn search(&self, query: &str, niche: &str) -> Vec<Product> {
        tracing::debug!("Catalog search: {}", query);
        self.catalog
            .get(&niche.to_lowercase())
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for CatalogDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductDiscovery for CatalogDiscovery {
    async fn find_candidates(&self, niche: &str, count: usize) -> Result<Vec<Product>> {
        let niche = niche.trim();
        if niche.is_empty() {
            return Err(Error::Discovery("niche must not be blank".to_string()));
        }
        tracing::info!("Searching for {} trending products in {} niche", count, niche);

        let hits: Vec<Product> = search_queries(niche)
            .iter()
            .flat_map(|query| self.search(query, niche))
            .collect();

        let mut ranked = rank_candidates(hits);
        ranked.truncate(count);
        Ok(ranked)
    }
}

fn catalog_entry(
    name: &str,
    category: &str,
    search_volume: u64,
    competition: &str,
    price_range: &str,
    asin: &str,
    keywords: &[&str],
) -> Product {
    Product {
        name: name.to_string(),
        category: category.to_string(),
        price_range: Some(price_range.to_string()),
        purchase_url: Some(format!("https://www.amazon.com/dp/{}", asin)),
        asin: Some(asin.to_string()),
        search_volume,
        competition: Some(competition.to_string()),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_electronics_ranked_by_volume() {
        let discovery = CatalogDiscovery::new();
        let products = discovery.find_candidates("electronics", 3).await.unwrap();

        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["iPhone 15 Pro", "Steam Deck OLED"]);
    }

    #[tokio::test]
    async fn test_count_truncates() {
        let discovery = CatalogDiscovery::new();
        let products = discovery.find_candidates("electronics", 1).await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "iPhone 15 Pro");
    }

    #[tokio::test]
    async fn test_unknown_niche_is_empty() {
        let discovery = CatalogDiscovery::new();
        let products = discovery.find_candidates("gardening", 3).await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn test_blank_niche_rejected() {
        let discovery = CatalogDiscovery::new();
        let err = discovery.find_candidates("   ", 3).await.unwrap_err();
        assert!(matches!(err, Error::Discovery(_)));
        assert!(!err.is_isolated());
    }

    #[test]
    fn test_niches() {
        assert_eq!(CatalogDiscovery::new().niches(), vec!["electronics", "kitchen"]);
    }
}
