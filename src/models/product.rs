use serde::{Deserialize, Serialize};

/// One item under review. Created by discovery, read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub name: String,
    pub category: String,
    pub price_range: Option<String>,
    pub purchase_url: Option<String>,
    /// Marketplace product identifier used for affiliate links.
    pub asin: Option<String>,
    pub search_volume: u64,
    pub competition: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Product {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            price_range: None,
            purchase_url: None,
            asin: None,
            search_volume: 0,
            competition: None,
            keywords: Vec::new(),
        }
    }

    pub fn review_filename(&self) -> String {
        review_filename(&self.name)
    }
}

/// `"Steam Deck OLED"` becomes `"steam-deck-oled-review.html"`.
pub fn review_filename(product_name: &str) -> String {
    let stem: String = product_name
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '/' { '-' } else { c })
        .collect();
    format!("{}-review.html", stem)
}
