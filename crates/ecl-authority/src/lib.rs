//! # ecl-authority — Authority Model and Precedence Resolver
//!
//! Classifies the primary sources behind a catalog entry by binding force
//! and resolves conflicts between them.
//!
//! - [`tier`]: [`Weight`] (binding / persuasive), named [`AuthorityTier`]s
//!   and the [`TierLadder`] that orders them.
//! - [`source`]: [`SourceEntry`], a citation with weight, optional tier and
//!   localized summary.
//! - [`precedence`]: [`PrecedenceResolver`]. Ambiguity is an error or a
//!   [`ReviewFlag`], never a guess.
//! - [`scope`]: resolves / does-not-resolve classification and the
//!   per-entry [`AuthoritySection`].
//!
//! ## Crate Policy
//!
//! - Depends only on `ecl-core` internally.
//! - Pure functions; the only side effect is a `tracing` event when an
//!   ambiguous pair is flagged for review.

pub mod error;
pub mod precedence;
pub mod scope;
pub mod source;
pub mod tier;

pub use error::AuthorityError;
pub use precedence::{resolve_conflict, PrecedenceResolver, Resolution, ReviewFlag};
pub use scope::{
    classify_scope, AuthoritySection, CaseIllustration, InterpretiveNote, ResolutionBullet,
    ScopeClassification, UnresolvedItem,
};
pub use source::SourceEntry;
pub use tier::{AuthorityTier, TierLadder, Weight};
