use std::io::{self, BufRead, StdinLock};

use crate::domain::AppError;
use crate::ports::LineSource;

/// Line source over buffered, non-interactive input.
pub struct StdinLineSource<R: BufRead> {
    reader: R,
}

impl StdinLineSource<StdinLock<'static>> {
    /// Read from the process's standard input.
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock())
    }
}

impl<R: BufRead> StdinLineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for StdinLineSource<R> {
    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}
