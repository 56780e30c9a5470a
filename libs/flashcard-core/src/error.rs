//! Error types for flashcard-core.

use thiserror::Error;

/// Result type alias using DeckNameError.
pub type Result<T> = std::result::Result<T, DeckNameError>;

/// Errors that can occur when validating a deck name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckNameError {
    #[error("deck name is empty")]
    Empty,

    #[error("deck name {name:?} contains a path separator")]
    PathSeparator { name: String },

    #[error("deck name {name:?} is reserved")]
    Reserved { name: String },
}
