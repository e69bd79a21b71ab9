//! Citation rendering errors.

use thiserror::Error;

/// Errors raised by the citation renderer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CitationError {
    /// The requested style is not one of the supported styles.
    #[error("unsupported citation style \"{0}\" (expected \"inline\" or \"full-reference\")")]
    UnsupportedStyle(String),

    /// The locale is not in the configured locale set.
    #[error("locale \"{0}\" is not supported")]
    UnsupportedLocale(String),
}
