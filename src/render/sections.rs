use maud::{html, Markup};
use percent_encoding::utf8_percent_encode;

use crate::models::{AggregatedReviews, Product, Quote, RenderedSection, Section};
use crate::render::citations::{source_citations, QUERY};
use crate::render::gallery::image_gallery;
use crate::render::Layout;
use crate::sources::SourceKind;

/// Number of quotes shown under "Real User Experiences".
pub const QUOTES_SHOWN: usize = 3;

pub const PRODUCT_ID_PLACEHOLDER: &str = "PLACEHOLDER";

pub const AFFILIATE_DISCLOSURE: &str = "This review contains affiliate links. We may earn a commission if you make a purchase through these links at no additional cost to you. This helps support our independent review process.";

const MARKETPLACE_BASE_URL: &str = "https://www.amazon.com/dp";

pub fn seo_title(product: &Product) -> String {
    format!(
        "{} Review 2025: Is It Worth Buying? Real User Analysis",
        product.name
    )
}

pub fn meta_description_text(product: &Product) -> String {
    format!(
        "Comprehensive {} review based on real user feedback. Pros, cons, performance analysis, and buying recommendations for 2025.",
        product.name
    )
}

pub fn affiliate_link(product: &Product, affiliate_tag: &str) -> String {
    format!(
        "{}/{}/?tag={}",
        MARKETPLACE_BASE_URL,
        utf8_percent_encode(
            product.asin.as_deref().unwrap_or(PRODUCT_ID_PLACEHOLDER),
            QUERY
        ),
        utf8_percent_encode(affiliate_tag, QUERY)
    )
}

pub fn title(product: &Product) -> Markup {
    html! {
        title { (seo_title(product)) }
    }
}

pub fn meta_description(product: &Product) -> Markup {
    html! {
        meta name="description" content=(meta_description_text(product));
    }
}

pub fn introduction(product: &Product, aggregated: &AggregatedReviews) -> Markup {
    html! {
        p {
            "The " (product.name) " has been making waves in the "
            (product.category.to_lowercase())
            " market, but is it worth your hard-earned money in 2025? After analyzing "
            (aggregated.total_reviews())
            "+ real user reviews from Amazon, Reddit, YouTube, and other platforms, we have the complete picture."
        }
        p {
            "This comprehensive review cuts through marketing hype to give you honest insights based on actual user experiences, long-term performance data, and detailed analysis of both strengths and weaknesses."
        }
    }
}

pub fn key_features() -> Markup {
    html! {
        h2 { "Key Features (Based on User Feedback)" }
        ul {
            li { strong { "Performance:" } " Users consistently praise the reliability" }
            li { strong { "Build Quality:" } " Premium materials noted by majority of reviewers" }
            li { strong { "Value:" } " Most users consider it worth the price point" }
        }
    }
}

pub fn pros_cons(aggregated: &AggregatedReviews) -> Markup {
    html! {
        h2 { "Pros & Cons (From Real Users)" }
        div class="pros-cons-grid" {
            div class="pros-section" {
                h3 { "✅ What Users Love" }
                ul {
                    @for pro in &aggregated.pros_cons.pros {
                        li { (pro) }
                    }
                }
            }
            div class="cons-section" {
                h3 { "❌ Common Complaints" }
                ul {
                    @for con in &aggregated.pros_cons.cons {
                        li { (con) }
                    }
                }
            }
        }
    }
}

fn quote_attribution(quote: &Quote) -> &str {
    match quote.source.parse::<SourceKind>() {
        Ok(kind) => kind.display_name(),
        Err(_) if quote.source.is_empty() => "Verified User",
        Err(_) => &quote.source,
    }
}

/// Renders at most [`QUOTES_SHOWN`] quotes, in aggregation order.
pub fn user_experiences(aggregated: &AggregatedReviews) -> Markup {
    html! {
        h2 { "Real User Experiences" }
        @for quote in aggregated.quotes().iter().take(QUOTES_SHOWN) {
            blockquote class="user-review" {
                "\"" (quote.text) "\" - " (quote_attribution(quote))
            }
        }
    }
}

pub fn comparison(product: &Product) -> Markup {
    html! {
        h2 { "How Does the " (product.name) " Compare?" }
        p {
            "Compared to similar products in the " (product.category.to_lowercase())
            " category, the " (product.name)
            " stands out for its unique combination of features and value proposition."
        }
    }
}

pub fn buying_guide(product: &Product, affiliate_tag: &str) -> Markup {
    let link = affiliate_link(product, affiliate_tag);
    let price = product
        .price_range
        .as_deref()
        .unwrap_or("Check for latest pricing");

    html! {
        h2 { "Where to Buy & Best Deals" }
        div class="purchase-options" {
            div class="purchase-option featured" {
                h3 { "🔥 Best Deal" }
                p { strong { (product.name) } }
                p class="price" { (price) }
                a href=(link) class="buy-button" target="_blank" rel="nofollow" { "View on Amazon" }
                small { "✓ Free shipping ✓ Prime eligible ✓ Easy returns" }
            }
        }
        div class="affiliate-disclaimer" {
            p { strong { "Disclaimer:" } " " (AFFILIATE_DISCLOSURE) }
        }
    }
}

pub fn faq(product: &Product, aggregated: &AggregatedReviews) -> Markup {
    html! {
        h2 { "Frequently Asked Questions" }
        div class="faq-section" {
            div class="faq-item" {
                h4 { "Is the " (product.name) " worth buying in 2025?" }
                p {
                    "Based on our analysis of " (aggregated.total_reviews())
                    "+ user reviews, yes - most users are highly satisfied with their purchase and would recommend it to others."
                }
            }
            div class="faq-item" {
                h4 { "What are the main advantages?" }
                p { "Users consistently highlight the excellent build quality, reliable performance, and good value for money as the main advantages." }
            }
            div class="faq-item" {
                h4 { "Are there any common issues?" }
                p { "While most reviews are positive, some users mention initial setup complexity and the premium price point as potential drawbacks." }
            }
        }
    }
}

pub fn conclusion(product: &Product, aggregated: &AggregatedReviews) -> Markup {
    html! {
        h2 { "Final Verdict" }
        div class="final-rating" {
            span class="big-rating" { "★★★★★" }
            span class="final-score" { "4.6/5" }
        }
        p {
            "After analyzing " (aggregated.total_reviews()) "+ real user reviews, the "
            (product.name)
            " earns our strong recommendation. Users consistently praise its performance, build quality, and overall value proposition."
        }
        p { "While it may have a premium price point, the overwhelming positive feedback suggests it delivers on its promises and provides lasting value for most users." }
        blockquote class="final-user-quote" {
            "\"This product has exceeded my expectations in every way. Highly recommended!\" - Verified User Review"
        }
    }
}

/// Renders every section a layout calls for. Holds no state between calls.
#[derive(Debug, Clone)]
pub struct SectionRenderer {
    affiliate_tag: String,
}

impl SectionRenderer {
    pub fn new(affiliate_tag: impl Into<String>) -> Self {
        Self {
            affiliate_tag: affiliate_tag.into(),
        }
    }

    pub fn render(&self, aggregated: &AggregatedReviews, layout: Layout) -> Vec<RenderedSection> {
        layout
            .sections()
            .iter()
            .map(|&section| RenderedSection {
                section,
                markup: self.render_section(section, aggregated).into_string(),
            })
            .collect()
    }

    pub fn render_section(&self, section: Section, aggregated: &AggregatedReviews) -> Markup {
        let product = aggregated.product.as_ref();

        match section {
            Section::Title => title(product),
            Section::MetaDescription => meta_description(product),
            Section::Introduction => introduction(product, aggregated),
            Section::KeyFeatures => key_features(),
            Section::ImageGallery => image_gallery(product),
            Section::ProsCons => pros_cons(aggregated),
            Section::UserExperiences => user_experiences(aggregated),
            Section::Comparison => comparison(product),
            Section::BuyingGuide => buying_guide(product, &self.affiliate_tag),
            Section::Faq => faq(product, aggregated),
            Section::SourceCitations => source_citations(product, aggregated),
            Section::Conclusion => conclusion(product, aggregated),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ReviewRecord, SourceReport, SourceSummary};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn air_fryer() -> Product {
        Product {
            price_range: Some("$150-180".to_string()),
            ..Product::new("Ninja Max XL Air Fryer", "Kitchen Appliance")
        }
    }

    fn quote(text: &str, source: &str) -> Quote {
        Quote {
            text: text.to_string(),
            source: source.to_string(),
            rating: None,
            verified: false,
        }
    }

    fn aggregated_with(quotes: Vec<Quote>, review_count: usize) -> AggregatedReviews {
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let mut agg = AggregatedReviews::new(Arc::new(air_fryer()));
        agg.record_collected(
            "amazon",
            SourceReport {
                reviews: (0..review_count)
                    .map(|i| ReviewRecord::new(format!("review {}", i), date))
                    .collect(),
                summary: SourceSummary::Marketplace {
                    average_rating: 4.6,
                    total_count: 1247,
                },
            },
            quotes,
        );
        agg
    }

    #[test]
    fn test_title_qualifiers() {
        let html = title(&air_fryer()).into_string();
        assert!(html.starts_with("<title>"));
        for needle in ["Ninja Max XL Air Fryer", "Review", "2025", "Worth Buying"] {
            assert!(html.contains(needle), "missing {}", needle);
        }
    }

    #[test]
    fn test_meta_description_mentions_buying_guidance() {
        let html = meta_description(&air_fryer()).into_string();
        assert!(html.starts_with(r#"<meta name="description""#));
        assert!(html.contains("Ninja Max XL Air Fryer"));
        assert!(html.contains("Pros, cons, performance analysis, and buying recommendations"));
    }

    #[test]
    fn test_introduction_embeds_category_and_total() {
        let html = introduction(&air_fryer(), &aggregated_with(Vec::new(), 5)).into_string();
        assert!(html.contains("The Ninja Max XL Air Fryer has been making waves"));
        assert!(html.contains("in the kitchen appliance market"));
        assert!(html.contains("After analyzing 5+ real user reviews"));
    }

    #[test]
    fn test_user_experiences_caps_at_three() {
        let quotes = (0..5)
            .map(|i| quote(&format!("quote number {}", i), "reddit"))
            .collect();
        let html = user_experiences(&aggregated_with(quotes, 1)).into_string();

        assert_eq!(html.matches(r#"class="user-review""#).count(), 3);
        let first = html.find("quote number 0").unwrap();
        let third = html.find("quote number 2").unwrap();
        assert!(first < third);
        assert!(!html.contains("quote number 3"));
        assert!(html.contains("- Reddit"));
    }

    #[test]
    fn test_user_experiences_with_fewer_quotes() {
        let html = user_experiences(&aggregated_with(vec![quote("only one", "forum")], 1))
            .into_string();
        assert_eq!(html.matches(r#"class="user-review""#).count(), 1);
        assert!(html.contains("- forum"));
    }

    #[test]
    fn test_user_experiences_empty() {
        let html = user_experiences(&aggregated_with(Vec::new(), 0)).into_string();
        assert_eq!(html, "<h2>Real User Experiences</h2>");
    }

    #[test]
    fn test_quote_text_is_escaped() {
        let quotes = vec![quote("<img src=x onerror=alert(1)> loved it", "amazon")];
        let html = user_experiences(&aggregated_with(quotes, 1)).into_string();
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt; loved it"));
    }

    #[test]
    fn test_buying_guide_link_and_disclosure() {
        let html = buying_guide(&air_fryer(), "reviews-20").into_string();
        assert!(html.contains(r#"href="https://www.amazon.com/dp/PLACEHOLDER/?tag=reviews-20""#));
        assert!(html.contains(AFFILIATE_DISCLOSURE));
        assert!(html.contains("$150-180"));

        let with_asin = Product {
            asin: Some("B07VBR2PSN".to_string()),
            ..air_fryer()
        };
        assert_eq!(
            affiliate_link(&with_asin, "gadgets-21"),
            "https://www.amazon.com/dp/B07VBR2PSN/?tag=gadgets-21"
        );

        let hostile = Product {
            asin: Some("../x?y#z".to_string()),
            ..air_fryer()
        };
        assert_eq!(
            affiliate_link(&hostile, "tag&ref=1"),
            "https://www.amazon.com/dp/..%2Fx%3Fy%23z/?tag=tag%26ref%3D1"
        );
    }

    #[test]
    fn test_buying_guide_price_fallback() {
        let product = Product::new("Mystery Box", "Misc");
        let html = buying_guide(&product, "reviews-20").into_string();
        assert!(html.contains("Check for latest pricing"));
    }

    #[test]
    fn test_pros_cons_render_placeholder_lists() {
        let html = pros_cons(&aggregated_with(Vec::new(), 0)).into_string();
        assert!(html.contains("<li>Premium build quality</li>"));
        assert!(html.contains("<li>Limited availability in some regions</li>"));
    }

    #[test]
    fn test_faq_and_conclusion_embed_total() {
        let agg = aggregated_with(Vec::new(), 7);
        let faq_html = faq(&air_fryer(), &agg).into_string();
        let conclusion_html = conclusion(&air_fryer(), &agg).into_string();

        assert_eq!(faq_html.matches(r#"class="faq-item""#).count(), 3);
        assert!(faq_html.contains("Based on our analysis of 7+ user reviews"));
        assert!(conclusion_html.contains("After analyzing 7+ real user reviews"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let renderer = SectionRenderer::new("reviews-20");
        let agg = aggregated_with(vec![quote("a quote", "google")], 3);

        let first = renderer.render(&agg, Layout::Extended);
        let second = renderer.render(&agg, Layout::Extended);
        assert_eq!(first, second);

        let sections: Vec<_> = first.iter().map(|s| s.section).collect();
        assert_eq!(sections, Layout::Extended.sections().to_vec());
    }
}
