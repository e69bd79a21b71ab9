//! Registry errors.
//!
//! Every variant is an authoring or build-time failure: callers propagate
//! them and fail the build rather than emit wrong citation identity.

use thiserror::Error;

use ecl_authority::AuthorityError;
use ecl_core::ValidationError;

use crate::record::RecordState;

/// Errors raised by the content and primary-source registries.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No record or source list exists for the key.
    #[error("not found: {0}")]
    NotFound(String),

    /// A record or source list is already registered under this slug.
    #[error("slug \"{0}\" is already registered")]
    DuplicateSlug(String),

    /// The citation key already belongs to another record.
    #[error("citation key \"{key}\" is already assigned to \"{owner}\"")]
    DuplicateCitationKey {
        /// The contested key.
        key: String,
        /// Slug of the record that owns it.
        owner: String,
    },

    /// An update would move version or dateModified backward.
    #[error("{slug}: {field} would regress from {current} to {proposed}")]
    VersionRegression {
        /// Record slug.
        slug: String,
        /// `version` or `dateModified`.
        field: &'static str,
        /// Stored value.
        current: String,
        /// Rejected value.
        proposed: String,
    },

    /// A compare-and-swap update observed a version that is no longer current.
    #[error("{slug}: stale write, expected version {expected} but found {actual}")]
    StaleWrite {
        /// Record slug.
        slug: String,
        /// Version the caller last observed.
        expected: String,
        /// Version currently stored.
        actual: String,
    },

    /// dateModified precedes datePublished.
    #[error("{slug}: dateModified {modified} precedes datePublished {published}")]
    InvalidDates {
        /// Record slug.
        slug: String,
        /// Publication date.
        published: String,
        /// Modification date.
        modified: String,
    },

    /// The lifecycle does not allow this transition.
    #[error("{slug}: invalid transition {from} -> {to}")]
    InvalidTransition {
        /// Record slug.
        slug: String,
        /// Current state.
        from: RecordState,
        /// Requested state.
        to: RecordState,
    },

    /// A source list was registered with no entries.
    #[error("{0}: primary source list is empty")]
    EmptySourceList(String),

    /// A source entry lacks a required identity field.
    #[error("{slug}: source {index} is missing {field}")]
    MissingSourceField {
        /// Record slug.
        slug: String,
        /// Position of the entry in the submitted list.
        index: usize,
        /// `canonical_id` or `jurisdiction`.
        field: &'static str,
    },

    /// Two sources of one list share a canonical id.
    #[error("{slug}: canonical id \"{canonical_id}\" appears more than once")]
    DuplicateCanonicalId {
        /// Record slug.
        slug: String,
        /// The repeated id.
        canonical_id: String,
    },

    /// The locale is not in the configured locale set.
    #[error("locale \"{0}\" is not supported")]
    UnsupportedLocale(String),

    /// A source entry failed authority-model validation.
    #[error(transparent)]
    Authority(#[from] AuthorityError),

    /// A value type failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
