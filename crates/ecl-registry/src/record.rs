//! # Content Records
//!
//! A [`ContentRecord`] is the per-entry metadata the catalog keys by slug.
//!
//! ## Lifecycle
//!
//! ```text
//! Draft ──register──▶ Published ──update──▶ Published
//!                         │
//!                         └──retire──▶ Retired (terminal)
//! ```
//!
//! Retired records stay addressable so existing external citations keep
//! resolving, but they drop out of listings and accept no further updates.

use serde::{Deserialize, Serialize};

use ecl_core::{CalendarDate, CitationKey, ContentType, Slug, Version};

use crate::error::RegistryError;
use crate::revision::RevisionType;

// ─── Record State ────────────────────────────────────────────────────

/// Lifecycle state of a content record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordState {
    /// Authored but not yet registered.
    Draft,
    /// Registered and listed.
    Published,
    /// Addressable but unlisted (terminal).
    Retired,
}

impl RecordState {
    /// Identifier matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Retired => "retired",
        }
    }

    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Retired)
    }

    /// Whether the lifecycle permits moving from `self` to `to`.
    pub fn can_transition_to(&self, to: RecordState) -> bool {
        matches!(
            (self, to),
            (Self::Draft, Self::Published)
                | (Self::Published, Self::Published)
                | (Self::Published, Self::Retired)
        )
    }
}

impl std::fmt::Display for RecordState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Content Record ──────────────────────────────────────────────────

/// Metadata of one catalog entry.
///
/// Slug and citation key are fixed at construction; there is no setter
/// for either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    slug: Slug,
    version: Version,
    date_published: CalendarDate,
    date_modified: CalendarDate,
    citation_key: CitationKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    word_count: Option<u32>,
    content_type: ContentType,
    state: RecordState,
}

impl ContentRecord {
    /// Create a record in [`RecordState::Draft`].
    ///
    /// # Errors
    ///
    /// [`RegistryError::InvalidDates`] when `date_modified < date_published`.
    pub fn draft(
        slug: Slug,
        version: Version,
        date_published: CalendarDate,
        date_modified: CalendarDate,
        citation_key: CitationKey,
        content_type: ContentType,
    ) -> Result<Self, RegistryError> {
        let record = Self {
            slug,
            version,
            date_published,
            date_modified,
            citation_key,
            word_count: None,
            content_type,
            state: RecordState::Draft,
        };
        record.check_dates()?;
        Ok(record)
    }

    /// Set the word count. Zero means unknown.
    pub fn with_word_count(mut self, count: u32) -> Self {
        self.word_count = (count > 0).then_some(count);
        self
    }

    /// Unique, immutable identifier.
    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    /// Current version.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// First publication date.
    pub fn date_published(&self) -> CalendarDate {
        self.date_published
    }

    /// Last modification date.
    pub fn date_modified(&self) -> CalendarDate {
        self.date_modified
    }

    /// Stable citation identifier.
    pub fn citation_key(&self) -> &CitationKey {
        &self.citation_key
    }

    /// Word count, when known and positive.
    pub fn word_count(&self) -> Option<u32> {
        self.word_count
    }

    /// Kind of entry.
    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    /// Lifecycle state.
    pub fn state(&self) -> RecordState {
        self.state
    }

    pub(crate) fn check_dates(&self) -> Result<(), RegistryError> {
        if self.date_modified < self.date_published {
            return Err(RegistryError::InvalidDates {
                slug: self.slug.to_string(),
                published: self.date_published.to_iso(),
                modified: self.date_modified.to_iso(),
            });
        }
        Ok(())
    }

    pub(crate) fn transition(&mut self, to: RecordState) -> Result<(), RegistryError> {
        if !self.state.can_transition_to(to) {
            return Err(RegistryError::InvalidTransition {
                slug: self.slug.to_string(),
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }

    /// Validate `patch` against this record and apply it.
    ///
    /// Nothing is changed when validation fails.
    pub(crate) fn apply(&mut self, patch: &RecordPatch) -> Result<(), RegistryError> {
        if !self.state.can_transition_to(RecordState::Published) {
            return Err(RegistryError::InvalidTransition {
                slug: self.slug.to_string(),
                from: self.state,
                to: RecordState::Published,
            });
        }
        if let Some(version) = &patch.version {
            if *version < self.version {
                return Err(RegistryError::VersionRegression {
                    slug: self.slug.to_string(),
                    field: "version",
                    current: self.version.to_string(),
                    proposed: version.to_string(),
                });
            }
        }
        if let Some(modified) = patch.date_modified {
            if modified < self.date_modified {
                return Err(RegistryError::VersionRegression {
                    slug: self.slug.to_string(),
                    field: "dateModified",
                    current: self.date_modified.to_iso(),
                    proposed: modified.to_iso(),
                });
            }
        }
        if let Some(version) = &patch.version {
            self.version = version.clone();
        }
        if let Some(modified) = patch.date_modified {
            self.date_modified = modified;
        }
        if let Some(count) = patch.word_count {
            self.word_count = (count > 0).then_some(count);
        }
        Ok(())
    }
}

// ─── Record Patch ────────────────────────────────────────────────────

/// Fields an update may change. Slug and citation key are not patchable.
///
/// `author_id`, `summary` and `revision_type` only annotate the revision
/// log entry the update appends; they are not stored on the record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    /// New version; must not be lower than the stored one.
    pub version: Option<Version>,
    /// New modification date; must not precede the stored one.
    pub date_modified: Option<CalendarDate>,
    /// New word count. Zero clears it.
    pub word_count: Option<u32>,
    /// Author of the change.
    pub author_id: Option<String>,
    /// One-line description of the change.
    pub summary: Option<String>,
    /// Defaults to [`RevisionType::Editorial`].
    pub revision_type: Option<RevisionType>,
}

impl RecordPatch {
    /// An empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the version.
    pub fn version(mut self, version: Version) -> Self {
        self.version = Some(version);
        self
    }

    /// Set the modification date.
    pub fn date_modified(mut self, date: CalendarDate) -> Self {
        self.date_modified = Some(date);
        self
    }

    /// Set the word count.
    pub fn word_count(mut self, count: u32) -> Self {
        self.word_count = Some(count);
        self
    }

    /// Attribute the change to an author.
    pub fn author(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    /// Describe the change.
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Mark the change as substantive.
    pub fn substantive(mut self) -> Self {
        self.revision_type = Some(RevisionType::Substantive);
        self
    }

    /// Whether the patch changes no record field. Annotations do not count.
    pub fn is_empty(&self) -> bool {
        self.version.is_none() && self.date_modified.is_none() && self.word_count.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ContentRecord {
        ContentRecord::draft(
            Slug::new("llc-guide").unwrap(),
            Version::new("1.0").unwrap(),
            CalendarDate::parse("2025-06-01").unwrap(),
            CalendarDate::parse("2026-02-17").unwrap(),
            CitationKey::new("ecl-gde-00014").unwrap(),
            ContentType::JurisdictionalGuide,
        )
        .unwrap()
    }

    #[test]
    fn draft_rejects_modified_before_published() {
        let err = ContentRecord::draft(
            Slug::new("llc-guide").unwrap(),
            Version::new("1.0").unwrap(),
            CalendarDate::parse("2026-02-17").unwrap(),
            CalendarDate::parse("2025-06-01").unwrap(),
            CitationKey::new("ecl-gde-00014").unwrap(),
            ContentType::JurisdictionalGuide,
        )
        .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidDates { .. }));
    }

    #[test]
    fn lifecycle_transitions() {
        use RecordState::*;
        assert!(Draft.can_transition_to(Published));
        assert!(Published.can_transition_to(Published));
        assert!(Published.can_transition_to(Retired));
        assert!(!Draft.can_transition_to(Retired));
        assert!(!Retired.can_transition_to(Published));
        assert!(!Published.can_transition_to(Draft));
        assert!(Retired.is_terminal());
    }

    #[test]
    fn patch_on_draft_is_rejected() {
        let mut r = record();
        let err = r
            .apply(&RecordPatch::new().version(Version::new("1.1").unwrap()))
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidTransition { from: RecordState::Draft, .. }));
    }

    #[test]
    fn failed_patch_changes_nothing() {
        let mut r = record();
        r.transition(RecordState::Published).unwrap();
        let before = r.clone();
        let patch = RecordPatch::new()
            .version(Version::new("2.0").unwrap())
            .date_modified(CalendarDate::parse("2025-01-01").unwrap());
        assert!(r.apply(&patch).is_err());
        assert_eq!(r, before);
    }

    #[test]
    fn word_count_zero_means_unknown() {
        let r = record().with_word_count(0);
        assert_eq!(r.word_count(), None);
        let r = r.with_word_count(4200);
        assert_eq!(r.word_count(), Some(4200));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["citationKey"], "ecl-gde-00014");
        assert_eq!(json["datePublished"], "2025-06-01");
        assert_eq!(json["contentType"], "jurisdictional-guide");
        assert_eq!(json["state"], "draft");
        assert!(json.get("wordCount").is_none());
    }
}
