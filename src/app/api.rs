//! API Facade for the application.
//!
//! High-level functions that glue configuration, line sources, and the
//! calculator together.

use std::io;

use crate::app::session::{ReplSession, SessionSummary};
use crate::domain::{AppError, CalcConfig, Calculator, Value};
use crate::ports::LineSource;
use crate::services::ScriptedLineSource;

/// Build a calculator with the symbols predefined in `config`.
pub fn calculator_from_config(config: &CalcConfig) -> Result<Calculator, AppError> {
    let mut calculator = Calculator::new();
    for (name, value) in &config.symbols {
        calculator.define(name, *value)?;
    }
    Ok(calculator)
}

/// Evaluate a single line with a fresh calculator.
pub fn evaluate(line: &str) -> Result<Option<Value>, AppError> {
    Ok(Calculator::new().execute(line)?)
}

/// Run `source` to exhaustion, printing results to stdout and errors to stderr.
pub fn run_session<L: LineSource>(
    source: L,
    calculator: &mut Calculator,
) -> Result<SessionSummary, AppError> {
    let mut session = ReplSession::new(source, io::stdout().lock(), io::stderr().lock());
    session.run(calculator)
}

/// Evaluate each expression in order against `calculator`.
pub fn evaluate_all(
    expressions: Vec<String>,
    calculator: &mut Calculator,
) -> Result<SessionSummary, AppError> {
    run_session(ScriptedLineSource::new(expressions), calculator)
}
