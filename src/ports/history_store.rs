use crate::domain::AppError;

/// Port for persisting submitted lines between sessions.
pub trait HistoryStore {
    /// Load saved entries, oldest first.
    fn load(&self) -> Result<Vec<String>, AppError>;

    /// Replace saved entries with `entries`, oldest first.
    fn save(&self, entries: &[String]) -> Result<(), AppError>;
}
