pub mod collector;
pub mod sample;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub use collector::ReviewCollector;
pub use sample::SampleCollector;

/// Review sources the pipeline knows how to collect from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Amazon,
    Reddit,
    YouTube,
    Google,
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Amazon,
        SourceKind::Reddit,
        SourceKind::YouTube,
        SourceKind::Google,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Amazon => "amazon",
            SourceKind::Reddit => "reddit",
            SourceKind::YouTube => "youtube",
            SourceKind::Google => "google",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SourceKind::Amazon => "Amazon",
            SourceKind::Reddit => "Reddit",
            SourceKind::YouTube => "YouTube",
            SourceKind::Google => "Google",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "amazon" => Ok(SourceKind::Amazon),
            "reddit" => Ok(SourceKind::Reddit),
            "youtube" => Ok(SourceKind::YouTube),
            "google" => Ok(SourceKind::Google),
            _ => Err(Error::UnknownSource(s.to_string())),
        }
    }
}
