//! # Revision History
//!
//! Every accepted registration or update appends one [`RevisionEntry`] to
//! the slug's log. The log is append-only and ordered oldest first; a
//! rejected write leaves it untouched.

use serde::{Deserialize, Serialize};

use ecl_core::{CalendarDate, Version};

/// Whether a revision changed substance or only presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevisionType {
    /// Wording, formatting or link fixes.
    #[default]
    Editorial,
    /// A change in what the entry says about the law.
    Substantive,
}

impl std::fmt::Display for RevisionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Editorial => "editorial",
            Self::Substantive => "substantive",
        })
    }
}

/// One line of a record's revision log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionEntry {
    /// Record version after the revision.
    pub version: Version,
    /// datePublished for the first entry, dateModified afterwards.
    pub date: CalendarDate,
    /// Who made the change, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    /// One-line description of the change.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Editorial or substantive.
    #[serde(rename = "type")]
    pub revision_type: RevisionType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_type_field() {
        let entry = RevisionEntry {
            version: Version::new("1.1").unwrap(),
            date: CalendarDate::parse("2026-03-01").unwrap(),
            author_id: Some("editor-7".into()),
            summary: None,
            revision_type: RevisionType::Substantive,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "substantive");
        assert_eq!(json["authorId"], "editor-7");
        assert_eq!(json["date"], "2026-03-01");
        assert!(json.get("summary").is_none());
    }

    #[test]
    fn editorial_is_default() {
        assert_eq!(RevisionType::default(), RevisionType::Editorial);
        assert_eq!(RevisionType::Substantive.to_string(), "substantive");
    }
}
