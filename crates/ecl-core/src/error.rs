//! # Error Hierarchy
//!
//! Structured error types for the foundation layer, built with `thiserror`.
//! Each variant carries the offending input so that an authoring mistake can
//! be fixed from the build log alone.
//!
//! Downstream crates define their own error enums (registry, generation,
//! authority, citation) and wrap [`ValidationError`] where a value type is
//! constructed on their behalf.

use thiserror::Error;

/// Top-level error type for the foundation layer.
#[derive(Error, Debug)]
pub enum EclError {
    /// Value-type validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration could not be loaded or is inconsistent.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Canonicalization failure during digest computation.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

/// Validation errors for domain value types.
///
/// These are raised at construction time; once a value exists it is valid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Slug does not match `segment(/segment)*` with `[a-z0-9-]` segments.
    #[error("invalid slug: \"{0}\" (expected lowercase a-z, 0-9 and '-' segments separated by '/')")]
    InvalidSlug(String),

    /// Citation key is empty or contains whitespace / non-ASCII characters.
    #[error("invalid citation key: \"{0}\" (expected non-empty printable ASCII without whitespace)")]
    InvalidCitationKey(String),

    /// Version is not a dotted numeric string.
    #[error("invalid version: \"{0}\" (expected dotted numeric form such as 1.0)")]
    InvalidVersion(String),

    /// Date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date: \"{value}\" ({reason})")]
    InvalidDate {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Locale tag is malformed.
    #[error("invalid locale tag: \"{0}\" (expected lowercase tag such as en or pt-br)")]
    InvalidLocale(String),

    /// A locale set must name at least one locale.
    #[error("locale set must not be empty")]
    EmptyLocaleSet,

    /// A locale appears twice in a locale set.
    #[error("locale \"{0}\" listed more than once")]
    DuplicateLocale(String),

    /// Localized text lacks a supported locale.
    #[error("localized text is missing locale \"{0}\"")]
    MissingLocale(String),

    /// Localized text carries a locale outside the supported set.
    #[error("localized text carries unsupported locale \"{0}\"")]
    UnexpectedLocale(String),

    /// Localized text is blank for a locale.
    #[error("localized text for locale \"{0}\" is empty")]
    EmptyText(String),

    /// Content type identifier is not part of the taxonomy.
    #[error("unknown content type: \"{0}\"")]
    UnknownContentType(String),
}

/// Errors loading or validating site configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Site root is not an absolute http(s) URL.
    #[error("site root must be an absolute http(s) URL, got \"{0}\"")]
    InvalidSiteRoot(String),

    /// Publisher name is blank.
    #[error("publisher name must not be empty")]
    EmptyPublisher,

    /// A configured value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Configuration file could not be read.
    #[error("cannot read config file {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid YAML for the expected shape.
    #[error("cannot parse config file {path}: {source}")]
    Parse {
        /// Path of the configuration file.
        path: String,
        /// Underlying parse failure.
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values have no stable canonical form.
    #[error("float values are not permitted in canonical documents: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed during canonicalization.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_wraps_into_umbrella() {
        let err: EclError = ValidationError::InvalidSlug("Bad Slug".into()).into();
        let msg = err.to_string();
        assert!(msg.starts_with("validation error"));
        assert!(msg.contains("Bad Slug"));
    }

    #[test]
    fn invalid_date_display_includes_reason() {
        let err = ValidationError::InvalidDate {
            value: "2026-13-01".into(),
            reason: "month out of range".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date: \"2026-13-01\" (month out of range)"
        );
    }

    #[test]
    fn config_error_is_transparent_for_validation() {
        let err: ConfigError = ValidationError::EmptyLocaleSet.into();
        assert_eq!(err.to_string(), "locale set must not be empty");
    }

    #[test]
    fn float_rejection_mentions_value() {
        let err = CanonicalizationError::FloatRejected(2.5);
        assert!(err.to_string().contains("2.5"));
    }
}
