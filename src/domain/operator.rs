//! Operator table: symbols, precedence levels, and checked integer semantics.

use std::fmt;

use super::EvalError;

/// Integer type every expression evaluates to.
pub type Value = i64;

/// Operator as it appears in the token stream, before the parser decides
/// whether `+`/`-` are used in prefix or infix position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,
    Tilde,
    Equals,
}

impl Operator {
    /// Multi-character operators come first so the tokenizer can match greedily.
    pub const ALL: [Operator; 8] = [
        Operator::StarStar,
        Operator::Plus,
        Operator::Minus,
        Operator::Star,
        Operator::Slash,
        Operator::Percent,
        Operator::Tilde,
        Operator::Equals,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::StarStar => "**",
            Operator::Slash => "/",
            Operator::Percent => "%",
            Operator::Tilde => "~",
            Operator::Equals => "=",
        }
    }

    /// Prefix reading of this operator, if it has one.
    pub fn as_unary(self) -> Option<UnaryOperator> {
        match self {
            Operator::Minus => Some(UnaryOperator::Negate),
            Operator::Plus => Some(UnaryOperator::Plus),
            Operator::Tilde => Some(UnaryOperator::Not),
            _ => None,
        }
    }

    /// Infix reading of this operator, if it has one.
    pub fn as_binary(self) -> Option<BinaryOperator> {
        match self {
            Operator::StarStar => Some(BinaryOperator::Power),
            Operator::Star => Some(BinaryOperator::Multiply),
            Operator::Slash => Some(BinaryOperator::Divide),
            Operator::Percent => Some(BinaryOperator::Remainder),
            Operator::Plus => Some(BinaryOperator::Add),
            Operator::Minus => Some(BinaryOperator::Subtract),
            Operator::Equals => Some(BinaryOperator::Assign),
            Operator::Tilde => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Prefix operators. All of them bind tighter than any binary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Negate,
    Not,
    Plus,
}

impl UnaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::Not => "~",
            UnaryOperator::Plus => "+",
        }
    }

    pub fn apply(self, operand: Value) -> Result<Value, EvalError> {
        match self {
            UnaryOperator::Negate => operand.checked_neg().ok_or(EvalError::Overflow),
            UnaryOperator::Not => Ok(!operand),
            UnaryOperator::Plus => Ok(operand),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Power,
    Multiply,
    Divide,
    Remainder,
    Add,
    Subtract,
    Assign,
}

impl BinaryOperator {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOperator::Power => "**",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Remainder => "%",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Assign => "=",
        }
    }

    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOperator::Power => 4,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Remainder => 3,
            BinaryOperator::Add | BinaryOperator::Subtract => 2,
            BinaryOperator::Assign => 1,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            BinaryOperator::Power | BinaryOperator::Assign => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Evaluate an arithmetic operator. Assignment is handled by the evaluator.
    pub fn apply(self, lhs: Value, rhs: Value) -> Result<Value, EvalError> {
        match self {
            BinaryOperator::Power => power(lhs, rhs),
            BinaryOperator::Multiply => lhs.checked_mul(rhs).ok_or(EvalError::Overflow),
            BinaryOperator::Divide => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs.checked_div(rhs).ok_or(EvalError::Overflow)
            }
            BinaryOperator::Remainder => {
                if rhs == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                lhs.checked_rem(rhs).ok_or(EvalError::Overflow)
            }
            BinaryOperator::Add => lhs.checked_add(rhs).ok_or(EvalError::Overflow),
            BinaryOperator::Subtract => lhs.checked_sub(rhs).ok_or(EvalError::Overflow),
            BinaryOperator::Assign => Ok(rhs),
        }
    }
}

/// Integer power. Negative exponents truncate the real result toward zero.
fn power(base: Value, exponent: Value) -> Result<Value, EvalError> {
    match base {
        1 => return Ok(1),
        -1 => return Ok(if exponent % 2 == 0 { 1 } else { -1 }),
        0 if exponent < 0 => return Err(EvalError::DivisionByZero),
        0 => return Ok(if exponent == 0 { 1 } else { 0 }),
        _ if exponent < 0 => return Ok(0),
        _ => {}
    }

    let exponent = u32::try_from(exponent).map_err(|_| EvalError::Overflow)?;
    base.checked_pow(exponent).ok_or(EvalError::Overflow)
}
