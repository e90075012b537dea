pub mod calculator;
pub mod config;
mod error;
pub mod expression;
pub mod operator;
pub mod token;

pub use calculator::Calculator;
pub use config::{CalcConfig, LogSettings, ReplSettings};
pub use error::{AppError, EvalError};
pub use operator::Value;
