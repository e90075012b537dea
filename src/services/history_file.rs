use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::HistoryStore;

/// History persisted as a plain text file, one entry per line.
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Result<Vec<String>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        Ok(content.lines().filter(|line| !line.trim().is_empty()).map(str::to_string).collect())
    }

    fn save(&self, entries: &[String]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut content = entries.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// History store that keeps nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHistoryStore;

impl HistoryStore for NullHistoryStore {
    fn load(&self) -> Result<Vec<String>, AppError> {
        Ok(Vec::new())
    }

    fn save(&self, _entries: &[String]) -> Result<(), AppError> {
        Ok(())
    }
}
