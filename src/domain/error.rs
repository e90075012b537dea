use std::io;

use thiserror::Error;

/// Failure while tokenizing, parsing, or evaluating a single input line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Character that does not start any token.
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    /// Digit run that does not fit the integer type.
    #[error("{0} is not a valid literal")]
    InvalidLiteral(String),

    /// Token that cannot appear where it was found.
    #[error("unexpected '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },

    /// Line ended while an operand was still expected.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// Missing or surplus parenthesis.
    #[error("unbalanced parenthesis at position {position}")]
    UnbalancedParenthesis { position: usize },

    /// Left-hand side of `=` is not a bare symbol.
    #[error(
        "{0} is not a valid symbol name. symbols can only contain alphanumeric characters and must start with a letter."
    )]
    InvalidAssignmentTarget(String),

    /// Symbol read before any assignment.
    #[error("{0} is not defined")]
    UndefinedSymbol(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow")]
    Overflow,

    /// Line nests parentheses or operators beyond the supported depth.
    #[error("expression nested too deeply at position {position}")]
    NestingTooDeep { position: usize },
}

/// Library-wide error type for calculator operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Expression evaluation failed.
    #[error(transparent)]
    Eval(#[from] EvalError),

    /// Symbol name rejected when predefining a value.
    #[error("Invalid symbol name '{0}': must start with a letter followed by letters, digits, or underscores")]
    InvalidSymbolName(String),

    /// Interactive prompt failure.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind` view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::Eval(_)
            | AppError::InvalidSymbolName(_) => io::ErrorKind::InvalidInput,
            AppError::Prompt(_) => io::ErrorKind::Other,
        }
    }
}
