//! # ecl-schema — Structured Metadata Generation
//!
//! Turns catalog records into schema.org JSON-LD documents for search and
//! scholarly indexers.
//!
//! ## Generation (`generator`)
//!
//! [`MetadataGenerator`] is bound to one [`Catalog`] and produces:
//!
//! - [`ArticleDoc`] with an embedded citation block,
//! - [`ScholarlyDoc`], an article plus abstract, word count and topics,
//! - [`BreadcrumbDoc`] with positions `1..=N`,
//! - [`FaqDoc`] with duplicate-free questions,
//! - citation `<meta>` tags derived from the article's citation block.
//!
//! ## Validation (`validate`)
//!
//! Every document is checked against an embedded JSON Schema (Draft
//! 2020-12) before it is returned. Nothing partial or malformed is ever
//! emitted.
//!
//! ## Crate Policy
//!
//! - Page prose enters only through [`page`] types; the crate embeds no
//!   titles, names or descriptions of its own.
//! - Document output is deterministic; [`StructuredDocument::content_digest`]
//!   is stable across runs.
//!
//! [`Catalog`]: ecl_registry::Catalog

pub mod document;
pub mod error;
pub mod generator;
pub mod meta_tags;
pub mod page;
pub mod validate;

pub use document::{
    ArticleDoc, BreadcrumbDoc, CitationBlock, FaqDoc, SchemaType, ScholarlyDoc,
    StructuredDocument,
};
pub use error::{GenerationError, ValidationViolations, Violation};
pub use generator::MetadataGenerator;
pub use meta_tags::MetaTag;
pub use page::{Crumb, FaqEntry, PageContent, PageFields, ScholarlyFields};
pub use validate::DocumentValidator;
