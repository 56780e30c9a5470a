//! Error types for the card authoring run.

use flashcard_core::DeckNameError;
use thiserror::Error;

/// Invalid command-line or environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("--editor {editor:?} requires --editor-args (use \"\" for no arguments)")]
    MissingEditorArgs { editor: String },

    #[error("invalid deck name: {0}")]
    InvalidDeckName(#[from] DeckNameError),
}

/// Failure to run the editor process.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("failed to launch editor {program:?}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Failure while running editor sessions.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
