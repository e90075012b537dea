//! desktop-calculator: integer expression evaluation with named symbols and an
//! interactive read-eval-print loop.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

pub use app::api::{calculator_from_config, evaluate, evaluate_all, run_session};
pub use app::{ReplSession, SessionSummary};
pub use domain::{AppError, CalcConfig, Calculator, EvalError, Value};
