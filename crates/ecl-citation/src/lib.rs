//! # ecl-citation — Citation Rendering
//!
//! Formats catalog records as human-readable citations in a closed set of
//! [`CitationStyle`]s. Rendering is pure: output depends only on the
//! record, the locale, the style and the site configuration.

pub mod error;
pub mod render;
pub mod style;

pub use error::CitationError;
pub use render::{render, CitationRenderer};
pub use style::CitationStyle;
