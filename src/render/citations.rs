use maud::{html, Markup};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::{AggregatedReviews, Product};

const MARKETPLACE_HOME: &str = "https://amazon.com";

/// Everything outside the RFC 3986 unreserved set is encoded.
pub(crate) const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const FAIR_USE_NOTICE: &str = "Images sourced from manufacturer websites and user-generated content under fair use for educational review purposes. All product names and trademarks belong to their respective owners.";

#[derive(Debug, Clone, PartialEq)]
pub struct Citation {
    pub kind: &'static str,
    pub icon: &'static str,
    pub heading: &'static str,
    pub description: &'static str,
    pub href: String,
    pub link_text: &'static str,
}

/// Lower-cased name with spaces as `%20`, for search-engine query strings.
pub fn search_query(product_name: &str) -> String {
    utf8_percent_encode(&product_name.to_lowercase(), QUERY).to_string()
}

/// Lower-cased name with spaces as `+`, for community search.
pub fn community_query(product_name: &str) -> String {
    product_name
        .to_lowercase()
        .split(' ')
        .map(|word| utf8_percent_encode(word, QUERY).to_string())
        .collect::<Vec<_>>()
        .join("+")
}

/// The product's own listing when it is a web URL, otherwise the
/// marketplace home page.
pub fn product_page(product: &Product) -> String {
    product
        .purchase_url
        .as_deref()
        .map(str::trim)
        .filter(|url| {
            let lower = url.to_ascii_lowercase();
            lower.starts_with("https://") || lower.starts_with("http://")
        })
        .unwrap_or(MARKETPLACE_HOME)
        .to_string()
}

pub fn citations(product: &Product) -> Vec<Citation> {
    let search = search_query(&product.name);
    let community = community_query(&product.name);

    vec![
        Citation {
            kind: "reddit",
            icon: "fab fa-reddit",
            heading: "Reddit Community Reviews",
            description: "Real user discussions and long-term experiences from relevant subreddit communities",
            href: format!("https://www.reddit.com/search/?q={}+review", community),
            link_text: "Browse Community Discussions",
        },
        Citation {
            kind: "amazon",
            icon: "fab fa-amazon",
            heading: "Amazon Verified Reviews",
            description: "Real purchase experiences and detailed feedback from verified buyers",
            href: product_page(product),
            link_text: "Read Customer Reviews",
        },
        Citation {
            kind: "youtube",
            icon: "fab fa-youtube",
            heading: "YouTube Tech Reviews",
            description: "Professional video reviews and performance demonstrations from tech channels",
            href: format!(
                "https://www.youtube.com/results?search_query={}+review+2024",
                search
            ),
            link_text: "Watch Video Reviews",
        },
        Citation {
            kind: "review",
            icon: "fas fa-star",
            heading: "Professional Reviews",
            description: "Expert analysis from tech publications and industry review sites",
            href: format!(
                "https://www.google.com/search?q={}+professional+review+2024",
                search
            ),
            link_text: "Read Expert Reviews",
        },
        Citation {
            kind: "forum",
            icon: "fas fa-comments",
            heading: "Tech Forums",
            description: "User discussions and technical feedback from specialized forums and communities",
            href: format!("https://www.google.com/search?q={}+forum+discussion", search),
            link_text: "Join Discussions",
        },
    ]
}

pub fn source_citations(product: &Product, aggregated: &AggregatedReviews) -> Markup {
    let entries = citations(product);

    html! {
        section class="source-citations" data-aos="fade-up" {
            h2 {
                i class="fas fa-link section-icon" {}
                "Sources & References"
            }
            div class="citations-container glass-card" {
                div class="citations-intro" {
                    h3 {
                        i class="fas fa-chart-line" {}
                        "Our Analysis Based On"
                    }
                    p {
                        "This comprehensive " (product.name) " review is based on analysis of "
                        (aggregated.total_reviews())
                        "+ verified user reviews, professional testing data, and real-world usage experiences from trusted sources."
                    }
                }
                div class="citations-grid" {
                    @for citation in &entries {
                        div class="citation-item" {
                            div class="citation-header" {
                                div class=(format!("citation-icon {}", citation.kind)) {
                                    i class=(citation.icon) {}
                                }
                                div class="citation-details" {
                                    h4 { (citation.heading) }
                                    p { (citation.description) }
                                }
                            }
                            a href=(citation.href) target="_blank" rel="nofollow" class="citation-link" {
                                i class="fas fa-external-link-alt" {}
                                (citation.link_text)
                            }
                        }
                    }
                }
                div class="citations-disclaimer" {
                    i class="fas fa-info-circle" {}
                    p { (FAIR_USE_NOTICE) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_query_transforms() {
        assert_eq!(search_query("Steam Deck OLED"), "steam%20deck%20oled");
        assert_eq!(community_query("Steam Deck OLED"), "steam+deck+oled");
    }

    #[test]
    fn test_citation_links() {
        let product = Product::new("iPhone 15 Pro", "Smartphone");
        let links: Vec<_> = citations(&product).into_iter().map(|c| c.href).collect();

        assert_eq!(links[0], "https://www.reddit.com/search/?q=iphone+15+pro+review");
        assert_eq!(links[1], "https://amazon.com");
        assert_eq!(
            links[2],
            "https://www.youtube.com/results?search_query=iphone%2015%20pro+review+2024"
        );
        assert_eq!(
            links[4],
            "https://www.google.com/search?q=iphone%2015%20pro+forum+discussion"
        );
    }

    #[test]
    fn test_amazon_citation_uses_purchase_url() {
        let product = Product {
            purchase_url: Some("https://www.amazon.com/dp/B0CQ3RWQQZ".to_string()),
            ..Product::new("Steam Deck OLED", "Gaming Handheld")
        };
        assert_eq!(citations(&product)[1].href, "https://www.amazon.com/dp/B0CQ3RWQQZ");
    }

    #[test]
    fn test_queries_encode_reserved_characters() {
        assert_eq!(search_query("AT&T Hotspot #5"), "at%26t%20hotspot%20%235");
        assert_eq!(community_query("AT&T Hotspot #5"), "at%26t+hotspot+%235");

        let product = Product::new("AT&T Hotspot", "Networking");
        assert_eq!(
            citations(&product)[0].href,
            "https://www.reddit.com/search/?q=at%26t+hotspot+review"
        );
    }

    #[test]
    fn test_non_web_purchase_url_falls_back() {
        for url in ["javascript:alert(1)", " JavaScript:alert(1)", "data:text/html,hi", ""] {
            let product = Product {
                purchase_url: Some(url.to_string()),
                ..Product::new("Steam Deck OLED", "Gaming Handheld")
            };
            assert_eq!(citations(&product)[1].href, "https://amazon.com", "{}", url);
        }

        let product = Product {
            purchase_url: Some("http://example.com/deck".to_string()),
            ..Product::new("Steam Deck OLED", "Gaming Handheld")
        };
        assert_eq!(product_page(&product), "http://example.com/deck");
    }

    #[test]
    fn test_citations_markup() {
        let product = Arc::new(Product::new("Steam Deck OLED", "Gaming Handheld"));
        let aggregated = AggregatedReviews::new(product.clone());
        let html = source_citations(&product, &aggregated).into_string();

        assert_eq!(html.matches(r#"class="citation-item""#).count(), 5);
        assert!(html.contains(r#"class="citation-icon youtube""#));
        assert!(html.contains("analysis of 0+ verified user reviews"));
        assert!(html.contains(FAIR_USE_NOTICE));
    }
}
