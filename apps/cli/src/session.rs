//! Editor sessions and the card authoring loop.
//!
//! Each session writes the template to a temporary file, hands it to the
//! editor and parses whatever is left once the editor exits. The loop keeps
//! going until a session produces no card.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use flashcard_core::{parser, Card};
use tempfile::TempPath;
use tracing::{debug, info};

use crate::deck::DeckWriter;
use crate::editor::{EditOutcome, Editor};
use crate::error::Result;

/// A temporary file handed to the editor.
///
/// The file is removed when the session is finished, discarded, or dropped.
#[derive(Debug)]
pub struct EditorSession {
    path: TempPath,
}

impl EditorSession {
    /// Create a temporary file containing `template`.
    pub fn create(template: &str) -> io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("cardpen-")
            .suffix(".tex")
            .tempfile()?;
        file.write_all(template.as_bytes())?;
        file.flush()?;

        // Release our handle so the editor is free to replace the file.
        Ok(Self {
            path: file.into_temp_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the edited content and delete the file.
    pub fn finish(self) -> io::Result<String> {
        let content = fs::read_to_string(&self.path);
        self.path.close()?;
        content
    }

    /// Delete the file without reading it.
    pub fn discard(self) -> io::Result<()> {
        self.path.close()
    }
}

/// Run one editor session and parse its result.
///
/// Returns `None` when the template was left untouched, nothing but markers
/// remain, or the editor exited unsuccessfully.
pub fn run_session<E: Editor + ?Sized>(editor: &E, template: &str) -> Result<Option<Card>> {
    let session = EditorSession::create(template)?;
    debug!(path = %session.path().display(), "editor session started");

    match editor.edit(session.path())? {
        EditOutcome::Saved => {
            let content = session.finish()?;
            let card = parser::parse(&content);
            if card.is_none() {
                info!("session produced no card");
            }
            Ok(card)
        }
        EditOutcome::Aborted { code } => {
            info!(?code, "editor aborted, discarding session");
            session.discard()?;
            Ok(None)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Terminated,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub deck: String,
    pub deck_path: PathBuf,
    pub cards_added: usize,
}

impl fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.cards_added == 1 { "card" } else { "cards" };
        write!(
            f,
            "Added {} {} to deck \"{}\" ({})",
            self.cards_added,
            noun,
            self.deck,
            self.deck_path.display()
        )
    }
}

/// Repeats editor sessions until one produces no card.
pub struct SessionLoop<E> {
    editor: E,
    deck: DeckWriter,
    deck_name: String,
    state: SessionState,
    cards_added: usize,
}

impl<E: Editor> SessionLoop<E> {
    pub fn new(editor: E, deck: DeckWriter, deck_name: impl Into<String>) -> Self {
        Self {
            editor,
            deck,
            deck_name: deck_name.into(),
            state: SessionState::AwaitingInput,
            cards_added: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Run a single session, appending its card if there is one.
    pub fn step(&mut self) -> Result<SessionState> {
        if self.state == SessionState::Terminated {
            return Ok(self.state);
        }

        match run_session(&self.editor, parser::TEMPLATE)? {
            Some(card) => {
                self.deck.append(&card)?;
                self.cards_added += 1;
            }
            None => self.state = SessionState::Terminated,
        }
        Ok(self.state)
    }

    /// Run sessions until the loop terminates.
    pub fn run(mut self) -> Result<SessionSummary> {
        while self.step()? == SessionState::AwaitingInput {}

        info!(cards = self.cards_added, deck = %self.deck_name, "session loop finished");
        Ok(SessionSummary {
            deck: self.deck_name,
            deck_path: self.deck.path().to_path_buf(),
            cards_added: self.cards_added,
        })
    }
}
