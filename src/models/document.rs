use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Title,
    MetaDescription,
    Introduction,
    KeyFeatures,
    ImageGallery,
    ProsCons,
    UserExperiences,
    Comparison,
    BuyingGuide,
    Faq,
    SourceCitations,
    Conclusion,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Title => "title",
            Section::MetaDescription => "meta_description",
            Section::Introduction => "introduction",
            Section::KeyFeatures => "key_features",
            Section::ImageGallery => "image_gallery",
            Section::ProsCons => "pros_cons",
            Section::UserExperiences => "user_experiences",
            Section::Comparison => "comparison",
            Section::BuyingGuide => "buying_guide",
            Section::Faq => "faq",
            Section::SourceCitations => "source_citations",
            Section::Conclusion => "conclusion",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSection {
    pub section: Section,
    pub markup: String,
}

/// Final artifact for one product. Immutable once compiled.
#[derive(Debug, Clone)]
pub struct ContentDocument {
    product_name: String,
    sections: Vec<RenderedSection>,
    html: String,
}

impl ContentDocument {
    pub(crate) fn new(product_name: String, sections: Vec<RenderedSection>, html: String) -> Self {
        Self {
            product_name,
            sections,
            html,
        }
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn sections(&self) -> &[RenderedSection] {
        &self.sections
    }

    pub fn section(&self, section: Section) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.section == section)
            .map(|s| s.markup.as_str())
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn filename(&self) -> String {
        super::product::review_filename(&self.product_name)
    }
}
