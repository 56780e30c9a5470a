//! Editor and deck configuration.
//!
//! Resolution order for the editor binary:
//! 1. `--editor`, which must come with `--editor-args`
//! 2. the `EDITOR` environment variable
//! 3. [`DEFAULT_EDITOR`]
//!
//! The environment is passed in as a lookup function so resolution can be
//! tested without touching process state.

use std::path::{Path, PathBuf};

use flashcard_core::{DeckName, FieldMarkup};
use tracing::{debug, warn};

use crate::error::ConfigError;

/// Editor used when neither `--editor` nor `EDITOR` is set.
pub const DEFAULT_EDITOR: &str = "vim";

/// Environment variable naming the user's editor.
pub const EDITOR_ENV: &str = "EDITOR";

/// Default directory holding deck files.
pub const DEFAULT_DECKS_DIR: &str = "decks";

/// Editors that understand the preset arguments.
const PRESET_EDITORS: [&str; 3] = ["vim", "nvim", "gvim"];

/// Editor selection as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorOptions {
    pub editor: Option<String>,
    pub editor_args: Option<String>,
}

/// A fully resolved editor invocation, minus the file to edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    pub program: String,
    pub args: Vec<String>,
}

/// Everything a run needs, resolved up front.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub deck: DeckName,
    pub decks_dir: PathBuf,
    pub markup: FieldMarkup,
    pub editor: EditorCommand,
}

impl RunConfig {
    /// Path of the deck file: `<decks_dir>/<deck>`.
    pub fn deck_path(&self) -> PathBuf {
        deck_path(&self.decks_dir, &self.deck)
    }
}

pub fn deck_path(decks_dir: &Path, deck: &DeckName) -> PathBuf {
    decks_dir.join(deck.as_str())
}

/// Arguments for vim (7.4+): put the cursor on the first line below a `%`
/// marker, enable the `anki_vim` filetype and use TeX highlighting.
pub fn default_editor_args() -> Vec<String> {
    vec![
        r"-c /\v\%\n\zs(^$|^[^\%]{1}.*$)".to_string(),
        "-c set filetype=anki_vim".to_string(),
        "-c set syntax=tex".to_string(),
    ]
}

/// Split a comma-separated argument string. An empty string means no
/// arguments; otherwise pieces are kept verbatim.
pub fn parse_editor_args(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(str::to_string).collect()
}

/// Resolve the editor command from options and the environment.
pub fn resolve<F>(options: &EditorOptions, env: F) -> Result<EditorCommand, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let (Some(editor), None) = (&options.editor, &options.editor_args) {
        return Err(ConfigError::MissingEditorArgs {
            editor: editor.clone(),
        });
    }

    let (program, from_env) = match &options.editor {
        Some(editor) => (editor.clone(), false),
        None => match env(EDITOR_ENV).filter(|value| !value.trim().is_empty()) {
            Some(value) => (value.trim().to_string(), true),
            None => (DEFAULT_EDITOR.to_string(), false),
        },
    };

    let args = match &options.editor_args {
        Some(raw) => parse_editor_args(raw),
        None if from_env && !accepts_preset(&program) => {
            warn!(editor = %program, "preset arguments only apply to vim; launching without arguments");
            Vec::new()
        }
        None => default_editor_args(),
    };

    debug!(program = %program, ?args, "resolved editor");
    Ok(EditorCommand { program, args })
}

fn accepts_preset(program: &str) -> bool {
    Path::new(program)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| PRESET_EDITORS.contains(&stem))
        .unwrap_or(false)
}
