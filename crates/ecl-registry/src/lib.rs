//! # ecl-registry — Content and Primary Source Registries
//!
//! - [`ContentRegistry`]: slug-keyed [`ContentRecord`]s with the
//!   Draft → Published → Retired lifecycle, monotonic updates and
//!   compare-and-swap writes, plus an append-only [`RevisionEntry`] log
//!   per slug.
//! - [`PrimarySourceRegistry`]: per-slug ordered [`SourceEntry`] lists
//!   (citations normalized on the way in) and authority sections.
//! - [`Catalog`]: the context object bundling both with the site config.
//!
//! Registries are `Clone` handles over `Arc<parking_lot::RwLock<_>>`.
//!
//! [`SourceEntry`]: ecl_authority::SourceEntry

pub mod catalog;
pub mod content;
pub mod error;
pub mod record;
pub mod revision;
pub mod sources;

pub use catalog::Catalog;
pub use content::ContentRegistry;
pub use error::RegistryError;
pub use record::{ContentRecord, RecordPatch, RecordState};
pub use revision::{RevisionEntry, RevisionType};
pub use sources::{LocalizedSource, PrimarySourceRegistry};
