//! Calculator state: the symbol table and per-line evaluation.

use std::collections::BTreeMap;

use tracing::debug;

use super::expression::{self, Expression};
use super::operator::Value;
use super::token::{self, is_symbol_name};
use super::{AppError, EvalError};

/// Evaluates input lines against a persistent table of named integers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    symbols: BTreeMap<String, Value>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate one line.
    ///
    /// Returns `Ok(None)` for a blank line. Assignments made by a line that
    /// fails are discarded, so the symbol table only changes on success.
    pub fn execute(&mut self, line: &str) -> Result<Option<Value>, EvalError> {
        let tokens = token::tokenize(line)?;
        debug!(tokens = ?tokens.iter().map(|t| t.token.to_string()).collect::<Vec<_>>(), "tokenized line");

        let Some(expression) = expression::parse(tokens)? else {
            return Ok(None);
        };
        debug!(%expression, "parsed expression");

        let mut scope = Scope { committed: &self.symbols, pending: BTreeMap::new() };
        let value = scope.evaluate(&expression)?;
        let pending = scope.pending;
        self.symbols.extend(pending);

        debug!(value, "evaluated expression");
        Ok(Some(value))
    }

    /// Bind `name` to `value`, validating the name.
    pub fn define(&mut self, name: &str, value: Value) -> Result<(), AppError> {
        if !is_symbol_name(name) {
            return Err(AppError::InvalidSymbolName(name.to_string()));
        }
        self.symbols.insert(name.to_string(), value);
        Ok(())
    }

    pub fn value_of(&self, name: &str) -> Option<Value> {
        self.symbols.get(name).copied()
    }

    /// All defined symbols in name order.
    pub fn symbols(&self) -> impl Iterator<Item = (&str, Value)> {
        self.symbols.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

/// Evaluation scope for one line: committed symbols plus assignments not yet applied.
struct Scope<'a> {
    committed: &'a BTreeMap<String, Value>,
    pending: BTreeMap<String, Value>,
}

impl Scope<'_> {
    fn evaluate(&mut self, expression: &Expression) -> Result<Value, EvalError> {
        match expression {
            Expression::Literal(value) => Ok(*value),
            Expression::Symbol(name) => self
                .pending
                .get(name)
                .or_else(|| self.committed.get(name))
                .copied()
                .ok_or_else(|| EvalError::UndefinedSymbol(name.clone())),
            Expression::Unary { op, operand } => {
                let operand = self.evaluate(operand)?;
                op.apply(operand)
            }
            Expression::Binary { op, lhs, rhs } => {
                let lhs = self.evaluate(lhs)?;
                let rhs = self.evaluate(rhs)?;
                op.apply(lhs, rhs)
            }
            Expression::Assign { target, value } => {
                let value = self.evaluate(value)?;
                self.pending.insert(target.clone(), value);
                Ok(value)
            }
        }
    }
}
