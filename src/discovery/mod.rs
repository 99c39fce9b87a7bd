pub mod catalog;

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Product;

pub use catalog::CatalogDiscovery;

/// Finds candidate products for a niche, most popular first.
#[async_trait]
pub trait ProductDiscovery: Send + Sync {
    async fn find_candidates(&self, niche: &str, count: usize) -> Result<Vec<Product>>;
}

/// Search phrasings issued for a niche.
pub fn search_queries(niche: &str) -> Vec<String> {
    vec![
        format!("best {} products 2025 trending", niche),
        format!("top {} gadgets high search volume", niche),
        format!("popular {} items buying guide review", niche),
        format!("{} products worth buying 2025", niche),
    ]
}

/// Deduplicates by name (first occurrence wins) and orders by search volume,
/// descending. Ties keep their discovery order.
pub fn rank_candidates(products: Vec<Product>) -> Vec<Product> {
    let mut seen = HashSet::new();
    let mut unique: Vec<Product> = products
        .into_iter()
        .filter(|p| seen.insert(p.name.clone()))
        .collect();

    unique.sort_by(|a, b| b.search_volume.cmp(&a.search_volume));
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, volume: u64, category: &str) -> Product {
        Product {
            search_volume: volume,
            ..Product::new(name, category)
        }
    }

    #[test]
    fn test_rank_dedups_first_wins() {
        let ranked = rank_candidates(vec![
            product("Steam Deck OLED", 89_000, "Gaming Handheld"),
            product("iPhone 15 Pro", 156_000, "Smartphone"),
            product("Steam Deck OLED", 1, "Duplicate"),
        ]);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "iPhone 15 Pro");
        assert_eq!(ranked[1].name, "Steam Deck OLED");
        assert_eq!(ranked[1].category, "Gaming Handheld");
    }

    #[test]
    fn test_rank_is_stable_for_ties() {
        let ranked = rank_candidates(vec![
            product("A", 10, "x"),
            product("B", 10, "x"),
            product("C", 20, "x"),
        ]);
        let names: Vec<_> = ranked.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_search_queries() {
        let queries = search_queries("kitchen");
        assert_eq!(queries.len(), 4);
        assert_eq!(queries[0], "best kitchen products 2025 trending");
        assert_eq!(queries[3], "kitchen products worth buying 2025");
    }
}
