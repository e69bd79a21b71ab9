//! # Content Type Taxonomy
//!
//! The closed set of content types a record may have. Every `match` on
//! [`ContentType`] is exhaustive, so adding a type forces every consumer
//! (citation prefixes, renderers) to handle it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Kind of catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    /// Step-by-step procedural guide for a jurisdiction.
    JurisdictionalGuide,
    /// Reference article on a legal concept.
    EncyclopediaEntry,
    /// Ordered procedural checklist.
    Checklist,
}

impl ContentType {
    /// All content types in canonical order.
    pub fn all() -> &'static [ContentType] {
        &[
            Self::JurisdictionalGuide,
            Self::EncyclopediaEntry,
            Self::Checklist,
        ]
    }

    /// The kebab-case identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JurisdictionalGuide => "jurisdictional-guide",
            Self::EncyclopediaEntry => "encyclopedia-entry",
            Self::Checklist => "checklist",
        }
    }

    /// Three-letter prefix used in house-format citation keys.
    pub fn citation_prefix(&self) -> &'static str {
        match self {
            Self::JurisdictionalGuide => "gde",
            Self::EncyclopediaEntry => "enc",
            Self::Checklist => "chk",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownContentType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_matches_as_str() {
        for t in ContentType::all() {
            let json = serde_json::to_string(t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
            assert_eq!(t.as_str().parse::<ContentType>().unwrap(), *t);
        }
    }

    #[test]
    fn prefixes_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for t in ContentType::all() {
            assert!(seen.insert(t.citation_prefix()));
        }
    }

    #[test]
    fn unknown_type_rejected() {
        assert!("contract-template".parse::<ContentType>().is_err());
        assert!("Checklist".parse::<ContentType>().is_err());
    }
}
