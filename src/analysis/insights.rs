use crate::models::{Quote, ReviewRecord};

/// Reviews at or below this many characters are not quotable.
pub const MIN_QUOTE_CHARS: usize = 50;
/// Longer quotes are cut to this many characters plus [`ELLIPSIS`].
pub const MAX_QUOTE_CHARS: usize = 200;
pub const ELLIPSIS: &str = "...";

pub struct InsightExtractor {
    min_chars: usize,
    max_chars: usize,
}

impl InsightExtractor {
    pub fn new() -> Self {
        Self {
            min_chars: MIN_QUOTE_CHARS,
            max_chars: MAX_QUOTE_CHARS,
        }
    }

    /// Pulls quotable snippets out of one source's reviews, in review order.
    pub fn extract(&self, source: &str, reviews: &[ReviewRecord]) -> Vec<Quote> {
        reviews
            .iter()
            .filter(|review| review.text.chars().count() > self.min_chars)
            .map(|review| Quote {
                text: truncate_quote(&review.text, self.max_chars),
                source: source.to_string(),
                rating: review.rating,
                verified: review.verified,
            })
            .collect()
    }
}

impl Default for InsightExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn truncate_quote(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}
