use std::io::IsTerminal;
use std::path::Path;

use tracing::debug;

use crate::app::api;
use crate::app::config::resolve_history_path;
use crate::domain::{AppError, Calculator, ReplSettings};
use crate::services::{FileHistoryStore, NullHistoryStore, StdinLineSource, TerminalLineSource};

/// Run the interactive loop, or a plain line loop when stdin is not a terminal.
pub(super) fn run_repl(
    settings: &ReplSettings,
    home: Option<&Path>,
    no_history: bool,
    calculator: &mut Calculator,
) -> Result<(), AppError> {
    if !(std::io::stdin().is_terminal() && std::io::stdout().is_terminal()) {
        debug!("stdin is not a terminal, reading lines without editing");
        api::run_session(StdinLineSource::stdin(), calculator)?;
        return Ok(());
    }

    let history_path = if no_history { None } else { resolve_history_path(settings, home) };
    match history_path {
        Some(path) => {
            debug!(path = %path.display(), "persisting history");
            let store = FileHistoryStore::new(path);
            let source = TerminalLineSource::new(&settings.prompt, settings.history_size, store);
            api::run_session(source, calculator)?;
        }
        None => {
            let source =
                TerminalLineSource::new(&settings.prompt, settings.history_size, NullHistoryStore);
            api::run_session(source, calculator)?;
        }
    }
    Ok(())
}
