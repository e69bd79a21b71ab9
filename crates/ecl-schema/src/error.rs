//! Generation errors.
//!
//! A failed generation never yields a partial document: malformed
//! structured data is worse than none, so every error aborts the document.

use std::fmt;

use thiserror::Error;

use ecl_core::CanonicalizationError;
use ecl_registry::RegistryError;

/// Errors raised while generating structured documents.
#[derive(Error, Debug)]
pub enum GenerationError {
    /// A required field is missing or blank.
    #[error("incomplete metadata: {field} is required")]
    IncompleteMetadata {
        /// Name of the missing field.
        field: String,
    },

    /// A breadcrumb trail has fewer than two crumbs.
    #[error("breadcrumb trail needs at least 2 crumbs, got {0}")]
    InsufficientBreadcrumbs(usize),

    /// Two FAQ entries share the same question text.
    #[error("duplicate FAQ question: \"{0}\"")]
    DuplicateQuestion(String),

    /// The locale is not in the configured locale set.
    #[error("locale \"{0}\" is not supported")]
    UnsupportedLocale(String),

    /// The generated document does not conform to its JSON Schema.
    #[error("{schema} document failed schema validation:\n{violations}")]
    SchemaViolation {
        /// Schema the document was checked against.
        schema: &'static str,
        /// Individual violations.
        violations: ValidationViolations,
    },

    /// An embedded schema failed to compile.
    #[error("schema {schema} cannot be compiled: {reason}")]
    InvalidSchema {
        /// Schema name.
        schema: &'static str,
        /// Compiler message.
        reason: String,
    },

    /// Canonical serialization failed.
    #[error("canonicalization failed: {0}")]
    Canonicalization(#[from] CanonicalizationError),

    /// A registry lookup failed.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

impl GenerationError {
    pub(crate) fn incomplete(field: impl Into<String>) -> Self {
        Self::IncompleteMetadata {
            field: field.into(),
        }
    }
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating value in the document.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that failed.
    pub schema_path: String,
    /// Human-readable description.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// All violations found in one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationViolations(pub(crate) Vec<Violation>);

impl ValidationViolations {
    /// Number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are none.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The violations in report order.
    pub fn violations(&self) -> &[Violation] {
        &self.0
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
