//! Line tokenizer.

use std::fmt;

use super::operator::{Operator, Value};
use super::EvalError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Number(Value),
    Symbol(String),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Symbol(name) => f.write_str(name),
            Token::Operator(op) => write!(f, "{}", op),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

/// Token with the byte offset where it starts in the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

/// Whether `name` is usable as a symbol: a letter followed by letters, digits, or `_`.
pub fn is_symbol_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Split a line into tokens.
pub fn tokenize(line: &str) -> Result<Vec<Spanned>, EvalError> {
    let mut tokens = Vec::new();
    let bytes = line.as_bytes();
    let mut i = 0;

    while i < line.len() {
        let rest = &line[i..];
        let Some(ch) = rest.chars().next() else {
            break;
        };

        if ch.is_whitespace() {
            i += ch.len_utf8();
        } else if ch.is_ascii_alphabetic() {
            let end = scan(bytes, i, |b| b.is_ascii_alphanumeric() || b == b'_');
            tokens.push(Spanned { token: Token::Symbol(line[i..end].to_string()), position: i });
            i = end;
        } else if ch.is_ascii_digit() {
            let end = scan(bytes, i, |b| b.is_ascii_digit());
            let digits = &line[i..end];
            let value = digits
                .parse::<Value>()
                .map_err(|_| EvalError::InvalidLiteral(digits.to_string()))?;
            tokens.push(Spanned { token: Token::Number(value), position: i });
            i = end;
        } else if ch == '(' {
            tokens.push(Spanned { token: Token::LeftParen, position: i });
            i += 1;
        } else if ch == ')' {
            tokens.push(Spanned { token: Token::RightParen, position: i });
            i += 1;
        } else if let Some(op) = Operator::ALL.into_iter().find(|op| rest.starts_with(op.symbol())) {
            tokens.push(Spanned { token: Token::Operator(op), position: i });
            i += op.symbol().len();
        } else {
            return Err(EvalError::UnexpectedCharacter { character: ch, position: i });
        }
    }

    Ok(tokens)
}

fn scan(bytes: &[u8], start: usize, accept: impl Fn(u8) -> bool) -> usize {
    bytes[start..].iter().position(|&b| !accept(b)).map_or(bytes.len(), |offset| start + offset)
}
