//! # Identity Newtypes
//!
//! [`Slug`] and [`CitationKey`] are distinct types so a citation key can
//! never be passed where a slug is expected. Both validate at construction
//! and on deserialization.
//!
//! A slug addresses a record inside the catalog and forms the tail of its
//! canonical URL. A citation key is the identifier external referencers use;
//! once published it is never changed or reused.

use serde::Serialize;

use crate::error::ValidationError;
use crate::taxonomy::ContentType;

/// Stable, URL-safe identifier of a content record.
///
/// Format: one or more `/`-separated segments, each made of `[a-z0-9-]`
/// (for example `llc-guide` or `checklists/llc-checklist`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Slug(String);

impl_validating_deserialize!(Slug);

impl Slug {
    /// Create a slug, validating its format.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSlug`] for empty segments, uppercase
    /// letters, whitespace or any character outside `[a-z0-9-/]`.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        let valid = !s.is_empty()
            && s.split('/').all(|seg| {
                !seg.is_empty()
                    && seg
                        .bytes()
                        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
            });
        if !valid {
            return Err(ValidationError::InvalidSlug(s));
        }
        Ok(Self(s))
    }

    /// The slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Slug {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Opaque citation identifier (e.g. `ecl-gde-00014`).
///
/// The key is opaque to the catalog: any non-empty printable ASCII string
/// without whitespace is accepted. [`CitationKey::canonical`] produces the
/// house format for new entries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CitationKey(String);

impl_validating_deserialize!(CitationKey);

impl CitationKey {
    /// Create a citation key, validating that it is printable ASCII.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCitationKey`] for empty input,
    /// whitespace or non-ASCII characters.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_graphic()) {
            return Err(ValidationError::InvalidCitationKey(s));
        }
        Ok(Self(s))
    }

    /// Generate a key in the house format `ecl-{prefix}-{sequence:05}`.
    pub fn canonical(content_type: ContentType, sequence: u32) -> Self {
        Self(format!(
            "ecl-{}-{sequence:05}",
            content_type.citation_prefix()
        ))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CitationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
