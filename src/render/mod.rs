//! Markup generation for review pages.
//!
//! Section renderers are pure functions over a product and its aggregated
//! reviews. All interpolated text goes through maud, which escapes it, so a
//! product name or review body cannot inject markup. The compiler trusts
//! rendered fragments and embeds them verbatim.

pub mod citations;
pub mod compiler;
pub mod gallery;
pub mod sections;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::models::Section;

pub use compiler::DocumentCompiler;
pub use sections::SectionRenderer;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Core sections only.
    Standard,
    /// Core sections plus image gallery and source citations.
    Extended,
}

const STANDARD_SECTIONS: [Section; 10] = [
    Section::Title,
    Section::MetaDescription,
    Section::Introduction,
    Section::KeyFeatures,
    Section::ProsCons,
    Section::UserExperiences,
    Section::Comparison,
    Section::BuyingGuide,
    Section::Faq,
    Section::Conclusion,
];

const EXTENDED_SECTIONS: [Section; 12] = [
    Section::Title,
    Section::MetaDescription,
    Section::Introduction,
    Section::KeyFeatures,
    Section::ImageGallery,
    Section::ProsCons,
    Section::UserExperiences,
    Section::Comparison,
    Section::BuyingGuide,
    Section::Faq,
    Section::SourceCitations,
    Section::Conclusion,
];

impl Layout {
    /// Sections in document order.
    pub fn sections(&self) -> &'static [Section] {
        match self {
            Layout::Standard => &STANDARD_SECTIONS,
            Layout::Extended => &EXTENDED_SECTIONS,
        }
    }
}
