//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use flashcard_core::{DeckName, FieldMarkup};

use crate::config::{self, EditorOptions, RunConfig, DEFAULT_DECKS_DIR};
use crate::error::ConfigError;

#[derive(Parser, Debug)]
#[command(
    name = "cardpen",
    version,
    about = "Use vim (or the editor of your choice) to write flashcards that Anki can import directly"
)]
pub struct Cli {
    /// Name of the deck to write cards for
    pub deck: String,

    /// Force using this editor instead of $EDITOR. Requires --editor-args
    #[arg(short, long)]
    pub editor: Option<String>,

    /// Comma-separated arguments passed to the editor ("" for none)
    #[arg(long, allow_hyphen_values = true)]
    pub editor_args: Option<String>,

    /// Directory holding deck files
    #[arg(long, default_value = DEFAULT_DECKS_DIR)]
    pub decks_dir: PathBuf,

    /// Wrap card fields in [latex] tags
    #[arg(long)]
    pub latex: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            editor: self.editor.clone(),
            editor_args: self.editor_args.clone(),
        }
    }

    pub fn markup(&self) -> FieldMarkup {
        if self.latex {
            FieldMarkup::Latex
        } else {
            FieldMarkup::Plain
        }
    }

    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_directive(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, _) => "debug",
        }
    }

    /// Validate the deck name and resolve the editor.
    pub fn to_config<F>(&self, env: F) -> Result<RunConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let deck = DeckName::new(&self.deck)?;
        let editor = config::resolve(&self.editor_options(), env)?;
        Ok(RunConfig {
            deck,
            decks_dir: self.decks_dir.clone(),
            markup: self.markup(),
            editor,
        })
    }
}
