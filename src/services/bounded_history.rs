use std::collections::VecDeque;

use dialoguer::History;

/// In-memory line history capped at a fixed number of entries.
///
/// Blank lines and immediate repeats of the newest entry are not recorded.
#[derive(Debug, Clone, Default)]
pub struct BoundedHistory {
    entries: VecDeque<String>,
    max_entries: usize,
}

impl BoundedHistory {
    pub fn new(max_entries: usize) -> Self {
        Self { entries: VecDeque::new(), max_entries }
    }

    /// Seed from previously saved entries, oldest first.
    pub fn with_entries(entries: Vec<String>, max_entries: usize) -> Self {
        let mut history = Self::new(max_entries);
        for entry in &entries {
            history.push(entry);
        }
        history
    }

    pub fn push(&mut self, line: &str) {
        if self.max_entries == 0 || line.trim().is_empty() {
            return;
        }
        if self.entries.back().is_some_and(|last| last == line) {
            return;
        }
        if self.entries.len() == self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(line.to_string());
    }

    /// Entries oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl History<String> for BoundedHistory {
    fn read(&self, pos: usize) -> Option<String> {
        self.entries.iter().rev().nth(pos).cloned()
    }

    fn write(&mut self, val: &String) {
        self.push(val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_walks_from_newest() {
        let mut history = BoundedHistory::new(10);
        history.write(&"1".to_string());
        history.write(&"2".to_string());
        assert_eq!(history.read(0).as_deref(), Some("2"));
        assert_eq!(history.read(1).as_deref(), Some("1"));
        assert_eq!(history.read(2), None);
    }

    #[test]
    fn drops_oldest_beyond_capacity() {
        let history =
            BoundedHistory::with_entries(vec!["a".into(), "b".into(), "c".into()], 2);
        assert_eq!(history.entries(), vec!["b", "c"]);
    }

    #[test]
    fn skips_blank_and_repeated_lines() {
        let mut history = BoundedHistory::new(10);
        history.push("x = 1");
        history.push("x = 1");
        history.push("   ");
        history.push("x");
        history.push("x = 1");
        assert_eq!(history.entries(), vec!["x = 1", "x", "x = 1"]);
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut history = BoundedHistory::new(0);
        history.push("1");
        assert!(history.is_empty());
    }
}
