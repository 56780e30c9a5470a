//! Shared helpers for cardpen integration tests.
//!
//! `ScriptedEditor` stands in for a real editor: every call to `edit` takes the
//! next scripted step and applies it to the session file.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use cardpen::config::{EditorCommand, RunConfig};
use cardpen::editor::{EditOutcome, Editor};
use cardpen::error::EditorError;
use flashcard_core::{DeckName, FieldMarkup, BACK_MARKER, FRONT_MARKER};

/// What the scripted user does in one session.
#[derive(Debug, Clone)]
pub enum Step {
    /// Fill in the card and save.
    Write { front: String, back: String },
    /// Replace the whole file with raw text and save.
    Raw(String),
    /// Replace the whole file with raw bytes and save.
    Bytes(Vec<u8>),
    /// Quit without touching the file.
    Untouched,
    /// Write the card but exit with a failing status.
    Fail { front: String, code: i32 },
}

impl Step {
    pub fn write(front: &str, back: &str) -> Self {
        Self::Write {
            front: front.to_string(),
            back: back.to_string(),
        }
    }
}

pub struct ScriptedEditor {
    steps: RefCell<VecDeque<Step>>,
    seen: RefCell<Vec<PathBuf>>,
}

impl ScriptedEditor {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: RefCell::new(steps.into_iter().collect()),
            seen: RefCell::new(Vec::new()),
        }
    }

    /// Paths of every session file the editor was given.
    pub fn seen(&self) -> Vec<PathBuf> {
        self.seen.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.steps.borrow().len()
    }
}

impl Editor for ScriptedEditor {
    fn edit(&self, path: &Path) -> Result<EditOutcome, EditorError> {
        self.seen.borrow_mut().push(path.to_path_buf());
        let step = self.steps.borrow_mut().pop_front().unwrap_or(Step::Untouched);
        match step {
            Step::Write { front, back } => {
                fs::write(path, card_file(&front, &back)).unwrap();
                Ok(EditOutcome::Saved)
            }
            Step::Raw(content) => {
                fs::write(path, content).unwrap();
                Ok(EditOutcome::Saved)
            }
            Step::Bytes(bytes) => {
                fs::write(path, bytes).unwrap();
                Ok(EditOutcome::Saved)
            }
            Step::Untouched => Ok(EditOutcome::Saved),
            Step::Fail { front, code } => {
                fs::write(path, card_file(&front, "")).unwrap();
                Ok(EditOutcome::Aborted { code: Some(code) })
            }
        }
    }
}

/// Session file content with both fields filled in.
pub fn card_file(front: &str, back: &str) -> String {
    format!("{FRONT_MARKER}\n{front}\n{BACK_MARKER}\n{back}\n")
}

/// Run configuration writing into `decks_dir`, with the default editor.
pub fn run_config(decks_dir: &Path, deck: &str) -> RunConfig {
    RunConfig {
        deck: DeckName::new(deck).unwrap(),
        decks_dir: decks_dir.to_path_buf(),
        markup: FieldMarkup::Plain,
        editor: EditorCommand {
            program: "vim".to_string(),
            args: cardpen::config::default_editor_args(),
        },
    }
}
