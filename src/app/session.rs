//! Read-eval-print loop driver.

use std::io::Write;

use tracing::{debug, info};

use crate::domain::{AppError, Calculator};
use crate::ports::LineSource;

/// Counts reported when a session reaches end of input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines that produced a value.
    pub evaluated: usize,
    /// Lines rejected with an error.
    pub failed: usize,
}

/// Drives a calculator from a line source, writing results to `out` and
/// diagnostics to `err`. A failing line never ends the session.
pub struct ReplSession<L: LineSource, O: Write, E: Write> {
    source: L,
    out: O,
    err: E,
}

impl<L: LineSource, O: Write, E: Write> ReplSession<L, O, E> {
    pub fn new(source: L, out: O, err: E) -> Self {
        Self { source, out, err }
    }

    /// Evaluate lines until the source is exhausted.
    pub fn run(&mut self, calculator: &mut Calculator) -> Result<SessionSummary, AppError> {
        let mut summary = SessionSummary::default();

        while let Some(line) = self.source.read_line()? {
            match calculator.execute(&line) {
                Ok(Some(value)) => {
                    writeln!(self.out, "{}", value)?;
                    self.out.flush()?;
                    summary.evaluated += 1;
                }
                Ok(None) => {}
                Err(err) => {
                    debug!(line = %line, error = %err, "line rejected");
                    writeln!(self.err, "Error: {}", err)?;
                    self.err.flush()?;
                    summary.failed += 1;
                }
            }
        }

        info!(evaluated = summary.evaluated, failed = summary.failed, "session finished");
        Ok(summary)
    }

    /// Release the source and writers, e.g. to inspect captured output.
    pub fn into_parts(self) -> (L, O, E) {
        (self.source, self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ScriptedLineSource;

    fn run_lines(lines: &[&str]) -> (SessionSummary, String, String, Calculator) {
        let mut calculator = Calculator::new();
        let source = ScriptedLineSource::new(lines.iter().copied());
        let mut session = ReplSession::new(source, Vec::new(), Vec::new());
        let summary = session.run(&mut calculator).unwrap();
        let (_, out, err) = session.into_parts();
        (summary, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap(), calculator)
    }

    #[test]
    fn prints_one_result_per_line() {
        let (summary, out, err, _) = run_lines(&["1 + 1", "x = 3", "x * x"]);
        assert_eq!(out, "2\n3\n9\n");
        assert!(err.is_empty());
        assert_eq!(summary, SessionSummary { evaluated: 3, failed: 0 });
    }

    #[test]
    fn recovers_after_a_bad_line() {
        let (summary, out, err, calculator) = run_lines(&["y", "y = 2", "1 / 0", "y + 1"]);
        assert_eq!(out, "2\n3\n");
        assert_eq!(err, "Error: y is not defined\nError: division by zero\n");
        assert_eq!(summary, SessionSummary { evaluated: 2, failed: 2 });
        assert_eq!(calculator.value_of("y"), Some(2));
    }

    #[test]
    fn blank_lines_print_nothing() {
        let (summary, out, err, _) = run_lines(&["", "  ", "7"]);
        assert_eq!(out, "7\n");
        assert!(err.is_empty());
        assert_eq!(summary.evaluated, 1);
    }

    struct FailingSource;

    impl LineSource for FailingSource {
        fn read_line(&mut self) -> Result<Option<String>, AppError> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into())
        }
    }

    #[test]
    fn source_failures_end_the_session() {
        let mut session = ReplSession::new(FailingSource, Vec::new(), Vec::new());
        let err = session.run(&mut Calculator::new()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::BrokenPipe);
    }
}
