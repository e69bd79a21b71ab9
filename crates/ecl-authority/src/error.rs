//! Authority-model errors.

use thiserror::Error;

use ecl_core::ValidationError;

use crate::tier::Weight;

/// Errors raised by the authority model and precedence resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorityError {
    /// Two sources share a weight and no ladder rule separates them.
    ///
    /// This is an authoring gap rather than a defect; callers that can route
    /// to human review should use `PrecedenceResolver::resolve_or_flag`.
    #[error("ambiguous precedence between \"{first}\" and \"{second}\" (both {weight})")]
    AmbiguousPrecedence {
        /// Citation of the first source.
        first: String,
        /// Citation of the second source.
        second: String,
        /// The shared weight.
        weight: Weight,
    },

    /// A bullet appears in both the resolved and unresolved lists of a topic.
    #[error("topic \"{topic}\": \"{bullet}\" is listed as both resolved and not resolved")]
    OverlappingScope {
        /// The topic being classified.
        topic: String,
        /// The overlapping bullet text.
        bullet: String,
    },

    /// A scope topic is blank.
    #[error("scope topic must not be empty")]
    EmptyTopic,

    /// A source citation is blank.
    #[error("source citation must not be empty")]
    EmptyCitation,

    /// A custom tier ladder is malformed.
    #[error("invalid tier ladder: {0}")]
    InvalidLadder(String),

    /// A value type failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
