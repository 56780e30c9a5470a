//! Append-only deck files.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use flashcard_core::{to_import_line, Card, DeckName, FieldMarkup};
use tracing::{debug, info};

use crate::config::deck_path;

/// Appends cards to one deck file.
///
/// The file (and its directory) is created when the first card is written and
/// stays open for the rest of the run.
#[derive(Debug)]
pub struct DeckWriter {
    path: PathBuf,
    markup: FieldMarkup,
    file: Option<File>,
}

impl DeckWriter {
    pub fn new(decks_dir: &Path, deck: &DeckName, markup: FieldMarkup) -> Self {
        Self {
            path: deck_path(decks_dir, deck),
            markup,
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one card as an import line.
    pub fn append(&mut self, card: &Card) -> io::Result<()> {
        let line = to_import_line(card, self.markup);
        let file = self.open()?;
        file.write_all(line.as_bytes())?;
        file.flush()?;
        info!(deck = %self.path.display(), "card appended");
        Ok(())
    }

    fn open(&mut self) -> io::Result<&mut File> {
        match self.file {
            Some(ref mut file) => Ok(file),
            None => {
                if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                debug!(deck = %self.path.display(), "opening deck file");
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.path)?;
                Ok(self.file.insert(file))
            }
        }
    }
}
