use std::io::ErrorKind;

use dialoguer::{Error as DialoguerError, Input};
use tracing::warn;

use super::BoundedHistory;
use crate::domain::AppError;
use crate::ports::{HistoryStore, LineSource};

/// Interactive line source with editing and history recall.
pub struct TerminalLineSource<S: HistoryStore> {
    prompt: String,
    history: BoundedHistory,
    store: S,
}

impl<S: HistoryStore> TerminalLineSource<S> {
    /// Create a source seeded with the entries `store` already holds.
    ///
    /// An unreadable history file is logged and replaced by an empty history.
    pub fn new(prompt: impl Into<String>, history_size: usize, store: S) -> Self {
        let saved = store.load().unwrap_or_else(|err| {
            warn!(error = %err, "could not load history");
            Vec::new()
        });
        let history = BoundedHistory::with_entries(saved, history_size);
        Self { prompt: prompt.into(), history, store }
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.history.entries()) {
            warn!(error = %err, "could not save history");
        }
    }
}

impl<S: HistoryStore> LineSource for TerminalLineSource<S> {
    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let result = Input::<String>::new()
            .with_prompt(self.prompt.as_str())
            .allow_empty(true)
            .history_with(&mut self.history)
            .interact_text();

        let line = interpret_prompt(result)?;
        if line.is_some() {
            self.persist();
        }
        Ok(line)
    }
}

/// Map a prompt result to a line. Ctrl-C and Ctrl-D end the session.
fn interpret_prompt(result: Result<String, DialoguerError>) -> Result<Option<String>, AppError> {
    match result {
        Ok(line) => Ok(Some(line)),
        Err(DialoguerError::IO(err))
            if matches!(err.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof) =>
        {
            Ok(None)
        }
        Err(err) => Err(AppError::Prompt(err.to_string())),
    }
}
