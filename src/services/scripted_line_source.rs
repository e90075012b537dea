use std::collections::VecDeque;

use crate::domain::AppError;
use crate::ports::LineSource;

/// Line source over a fixed list of lines, such as `--eval` arguments.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLineSource {
    lines: VecDeque<String>,
}

impl ScriptedLineSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { lines: lines.into_iter().map(Into::into).collect() }
    }
}

impl LineSource for ScriptedLineSource {
    fn read_line(&mut self) -> Result<Option<String>, AppError> {
        Ok(self.lines.pop_front())
    }
}
