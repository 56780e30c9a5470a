//! Core types for card authoring.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DeckNameError, Result};

/// A card parsed from one editor session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }

    /// True when neither side carries any text.
    pub fn is_empty(&self) -> bool {
        self.front.trim().is_empty() && self.back.trim().is_empty()
    }
}

/// Name of a deck, usable as a single file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeckName(String);

impl DeckName {
    /// Validate a deck name.
    ///
    /// Surrounding whitespace is dropped. The remaining name must be
    /// non-empty, must not be `.` or `..`, and must not contain `/` or `\`.
    pub fn new(name: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DeckNameError::Empty);
        }
        if name == "." || name == ".." {
            return Err(DeckNameError::Reserved {
                name: name.to_string(),
            });
        }
        if name.contains(['/', '\\']) {
            return Err(DeckNameError::PathSeparator {
                name: name.to_string(),
            });
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DeckName {
    type Error = DeckNameError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<DeckName> for String {
    fn from(value: DeckName) -> Self {
        value.0
    }
}

impl fmt::Display for DeckName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Markup applied to each field when a card is written to a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldMarkup {
    Plain,
    Latex,
}

impl Default for FieldMarkup {
    fn default() -> Self {
        Self::Plain
    }
}
