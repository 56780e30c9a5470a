//! Core flashcard library for editor-driven card authoring.
//!
//! Provides:
//! - The session template shown in the editor and its parser
//! - Anki plain-text import line formatting
//! - Shared types (Card, DeckName, FieldMarkup)

pub mod error;
pub mod format;
pub mod parser;
pub mod types;

pub use error::{DeckNameError, Result};
pub use format::{to_import_line, FIELD_SEPARATOR};
pub use parser::{parse, BACK_MARKER, FRONT_MARKER, TEMPLATE};
pub use types::{Card, DeckName, FieldMarkup};
