use chrono::NaiveDate;
use maud::{html, PreEscaped, DOCTYPE};

use crate::models::{AggregatedReviews, ContentDocument, RenderedSection, Section};
use crate::render::sections::seo_title;

pub const SITE_NAME: &str = "ReviewForge";

const FAQ_TOGGLE_SCRIPT: &str = r#"
        document.querySelectorAll('.faq-item h4').forEach(item => {
            item.addEventListener('click', function() {
                this.parentElement.classList.toggle('active');
            });
        });
    "#;

fn is_head_section(section: Section) -> bool {
    matches!(section, Section::Title | Section::MetaDescription)
}

/// Wraps rendered sections in page chrome.
///
/// Section markup is embedded as-is: escaping is the renderer's job. Head
/// sections (title, meta description) land in `<head>`, the rest in the
/// article body, each in the order given.
#[derive(Debug, Clone, Default)]
pub struct DocumentCompiler;

impl DocumentCompiler {
    pub fn new() -> Self {
        Self
    }

    pub fn compile(
        &self,
        aggregated: &AggregatedReviews,
        sections: Vec<RenderedSection>,
        updated_on: NaiveDate,
    ) -> ContentDocument {
        let product = aggregated.product.as_ref();
        let (head, body): (Vec<&RenderedSection>, Vec<&RenderedSection>) =
            sections.iter().partition(|s| is_head_section(s.section));

        let page = html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    @for section in &head {
                        (PreEscaped(section.markup.as_str()))
                    }
                    meta name="keywords" content=(product.keywords.join(", "));
                    link rel="stylesheet" href="review-styles.css";
                    link rel="stylesheet" href="../styles.css";
                }
                body {
                    header {
                        nav class="navbar" {
                            div class="nav-container" {
                                a href="../index.html" class="logo" { (SITE_NAME) }
                                ul class="nav-menu" {
                                    li { a href="../index.html" { "Home" } }
                                    li { a href="../index.html#reviews" { "Reviews" } }
                                    li { a href="../index.html#categories" { "Categories" } }
                                }
                            }
                        }
                    }
                    main class="review-main" {
                        article class="review-article" {
                            div class="review-header" {
                                div class="breadcrumb" {
                                    a href="../index.html" { "Home" }
                                    " > "
                                    a href="../index.html#reviews" { "Reviews" }
                                    " > "
                                    (product.name)
                                }
                                h1 { (seo_title(product)) }
                                div class="review-meta" {
                                    div class="rating-overall" {
                                        span class="stars" { "★★★★★" }
                                        span class="score" { "4.6/5" }
                                        span class="based-on" {
                                            "Based on " (aggregated.total_reviews()) "+ real user reviews"
                                        }
                                    }
                                    div class="publish-date" {
                                        "Updated: " (updated_on.format("%B %Y").to_string())
                                    }
                                }
                            }
                            div class="review-content" {
                                @for section in &body {
                                    (PreEscaped(section.markup.as_str()))
                                }
                            }
                        }
                    }
                    footer {
                        div class="container" {
                            div class="footer-content" {
                                div class="footer-section" {
                                    h4 { (SITE_NAME) }
                                    p { "Smart product reviews powered by artificial intelligence and real user feedback" }
                                }
                            }
                            div class="footer-bottom" {
                                p {
                                    "© 2025 " (SITE_NAME) ". All rights reserved. | This website contains affiliate links."
                                }
                            }
                        }
                    }
                    script { (PreEscaped(FAQ_TOGGLE_SCRIPT)) }
                }
            }
        };

        let html = page.into_string();
        tracing::debug!("Compiled {} characters for {}", html.len(), product.name);

        ContentDocument::new(product.name.clone(), sections, html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Layout, SectionRenderer};
    use crate::models::{Product, Quote, ReviewRecord, SourceReport, SourceSummary};
    use std::sync::Arc;

    fn steam_deck() -> AggregatedReviews {
        let product = Product {
            keywords: vec!["steam deck review".to_string(), "handheld gaming".to_string()],
            ..Product::new("Steam Deck OLED", "Gaming Handheld")
        };
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        let mut agg = AggregatedReviews::new(Arc::new(product));
        agg.record_collected(
            "reddit",
            SourceReport {
                reviews: vec![ReviewRecord::new("short", date)],
                summary: SourceSummary::Discussion { total_mentions: 89 },
            },
            vec![Quote {
                text: "Battery life is better than the original model by a wide margin, no regrets."
                    .to_string(),
                source: "reddit".to_string(),
                rating: None,
                verified: false,
            }],
        );
        agg
    }

    fn compile(layout: Layout) -> ContentDocument {
        let agg = steam_deck();
        let sections = SectionRenderer::new("reviews-20").render(&agg, layout);
        DocumentCompiler::new().compile(&agg, sections, NaiveDate::from_ymd_opt(2025, 3, 14).unwrap())
    }

    #[test]
    fn test_each_fragment_once_in_order() {
        for layout in [Layout::Standard, Layout::Extended] {
            let doc = compile(layout);
            let html = doc.html();

            let mut last = 0;
            for section in doc.sections() {
                assert_eq!(
                    html.matches(section.markup.as_str()).count(),
                    1,
                    "{} should appear exactly once",
                    section.section
                );
                let at = html.find(section.markup.as_str()).unwrap();
                assert!(at >= last, "{} out of order", section.section);
                last = at;
            }
        }
    }

    #[test]
    fn test_document_chrome() {
        let doc = compile(Layout::Standard);
        let html = doc.html();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("Updated: March 2025"));
        assert!(html.contains("Based on 1+ real user reviews"));
        assert!(html.contains(r#"<meta name="keywords" content="steam deck review, handheld gaming">"#));
        assert!(html.contains("<h1>Steam Deck OLED Review 2025: Is It Worth Buying? Real User Analysis</h1>"));
        assert!(html.contains("classList.toggle('active')"));
    }

    #[test]
    fn test_standard_layout_omits_extended_sections() {
        let standard = compile(Layout::Standard);
        let extended = compile(Layout::Extended);

        assert!(standard.section(Section::ImageGallery).is_none());
        assert!(!standard.html().contains("image-gallery"));
        assert!(extended.html().contains(r#"class="image-gallery""#));
        assert!(extended.html().contains(r#"class="source-citations""#));
    }

    #[test]
    fn test_document_metadata() {
        let doc = compile(Layout::Extended);
        assert_eq!(doc.product_name(), "Steam Deck OLED");
        assert_eq!(doc.filename(), "steam-deck-oled-review.html");
        assert_eq!(doc.sections().len(), 12);
    }
}
