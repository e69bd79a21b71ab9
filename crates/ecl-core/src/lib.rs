//! # ecl-core — Foundational Types for the Legal Reference Catalog
//!
//! Every other crate in the workspace depends on `ecl-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`Slug`], [`CitationKey`],
//!    [`Version`], [`CalendarDate`] and [`Locale`] validate at construction and
//!    on deserialization. No bare strings for identifiers.
//!
//! 2. **Exact locale coverage.** [`LocalizedText`] is checked against the
//!    configured [`LocaleSet`]; a missing translation never falls back.
//!
//! 3. **`CanonicalBytes` newtype.** Digests of generated documents flow
//!    through [`CanonicalBytes::new()`] (RFC 8785 via `serde_jcs`), so equal
//!    documents always hash equal.
//!
//! 4. **One citation canon.** Citation strings are normalized once, on the
//!    way into the catalog, by [`canon::normalize_citation_text`].
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ecl-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

/// Implements `Deserialize` for a string newtype by routing through its
/// validating `new()` constructor, so deserialized values uphold the same
/// invariants as constructed ones.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod canon;
pub mod canonical;
pub mod config;
pub mod digest;
pub mod error;
pub mod identity;
pub mod locale;
pub mod taxonomy;
pub mod temporal;
pub mod version;

// Re-export primary types for ergonomic imports.
pub use canon::{normalize_citation_text, normalize_label_text};
pub use canonical::CanonicalBytes;
pub use config::SiteConfig;
pub use digest::{sha256_digest, sha256_hex, ContentDigest};
pub use error::{CanonicalizationError, ConfigError, EclError, ValidationError};
pub use identity::{CitationKey, Slug};
pub use locale::{Locale, LocaleSet, LocalizedText};
pub use taxonomy::ContentType;
pub use temporal::CalendarDate;
pub use version::Version;
