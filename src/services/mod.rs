mod bounded_history;
mod history_file;
mod scripted_line_source;
mod stdin_line_source;
mod terminal_line_source;

pub use bounded_history::BoundedHistory;
pub use history_file::{FileHistoryStore, NullHistoryStore};
pub use scripted_line_source::ScriptedLineSource;
pub use stdin_line_source::StdinLineSource;
pub use terminal_line_source::TerminalLineSource;
