use crate::domain::AppError;

/// Port for reading input lines, one per evaluation.
pub trait LineSource {
    /// Read the next line without its terminator.
    ///
    /// Returns `Ok(None)` once the session is over.
    fn read_line(&mut self) -> Result<Option<String>, AppError>;
}
