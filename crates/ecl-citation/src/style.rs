//! Citation styles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CitationError;

/// Closed set of citation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CitationStyle {
    /// One line for running text.
    Inline,
    /// Sentence-per-field reference-list entry.
    FullReference,
}

impl CitationStyle {
    /// Every style.
    pub fn all() -> &'static [CitationStyle] {
        &[Self::Inline, Self::FullReference]
    }

    /// Wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::FullReference => "full-reference",
        }
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CitationStyle {
    type Err = CitationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| CitationError::UnsupportedStyle(s.to_string()))
    }
}
