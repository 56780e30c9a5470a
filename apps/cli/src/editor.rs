//! Launching the external editor.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::config::EditorCommand;
use crate::error::EditorError;

/// How an editor process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The editor exited successfully.
    Saved,
    /// The editor exited with a non-zero status, or was killed by a signal
    /// (`code` is `None`).
    Aborted { code: Option<i32> },
}

/// Something that lets the user edit a file and blocks until they are done.
pub trait Editor {
    fn edit(&self, path: &Path) -> Result<EditOutcome, EditorError>;
}

impl<E: Editor + ?Sized> Editor for &E {
    fn edit(&self, path: &Path) -> Result<EditOutcome, EditorError> {
        (**self).edit(path)
    }
}

/// Runs a real editor process with the file path as its last argument.
#[derive(Debug, Clone)]
pub struct ProcessEditor {
    command: EditorCommand,
}

impl ProcessEditor {
    pub fn new(command: EditorCommand) -> Self {
        Self { command }
    }
}

impl Editor for ProcessEditor {
    fn edit(&self, path: &Path) -> Result<EditOutcome, EditorError> {
        debug!(program = %self.command.program, path = %path.display(), "launching editor");

        let status = Command::new(&self.command.program)
            .args(&self.command.args)
            .arg(path)
            .status()
            .map_err(|source| EditorError::Launch {
                program: self.command.program.clone(),
                source,
            })?;

        if status.success() {
            Ok(EditOutcome::Saved)
        } else {
            info!(program = %self.command.program, %status, "editor exited unsuccessfully");
            Ok(EditOutcome::Aborted {
                code: status.code(),
            })
        }
    }
}
