//! Write Anki-importable flashcards in a text editor.
//!
//! Each run opens the editor on a fresh card template, appends every card the
//! user writes to `<decks-dir>/<deck>`, and stops at the first session that
//! leaves the template empty.

pub mod cli;
pub mod config;
pub mod deck;
pub mod editor;
pub mod error;
pub mod session;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::RunConfig;
use crate::deck::DeckWriter;
use crate::editor::{Editor, ProcessEditor};
use crate::session::{SessionLoop, SessionSummary};

/// Install the global tracing subscriber, logging to stderr.
///
/// `RUST_LOG` takes precedence over `default_directive`.
pub fn init_tracing(default_directive: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_directive.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Resolve configuration and run the session loop with the real editor.
pub fn run<F>(cli: &Cli, env: F) -> anyhow::Result<SessionSummary>
where
    F: Fn(&str) -> Option<String>,
{
    let config = cli.to_config(env)?;
    let editor = ProcessEditor::new(config.editor.clone());
    run_with_editor(&config, editor)
}

/// Run the session loop for an already resolved configuration.
pub fn run_with_editor<E: Editor>(config: &RunConfig, editor: E) -> anyhow::Result<SessionSummary> {
    info!(
        deck = %config.deck,
        path = %config.deck_path().display(),
        editor = %config.editor.program,
        "starting card sessions"
    );

    let writer = DeckWriter::new(&config.decks_dir, &config.deck, config.markup);
    let summary = SessionLoop::new(editor, writer, config.deck.as_str())
        .run()
        .with_context(|| format!("writing cards for deck \"{}\"", config.deck))?;
    Ok(summary)
}
