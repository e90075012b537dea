mod history_store;
mod line_source;

pub use history_store::HistoryStore;
pub use line_source::LineSource;
