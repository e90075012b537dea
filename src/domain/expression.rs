//! Expression tree and precedence-climbing parser.

use std::fmt;
use std::iter::Peekable;
use std::vec::IntoIter;

use super::operator::{Associativity, BinaryOperator, UnaryOperator, Value};
use super::token::{Spanned, Token};
use super::EvalError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Literal(Value),
    Symbol(String),
    Unary { op: UnaryOperator, operand: Box<Expression> },
    Binary { op: BinaryOperator, lhs: Box<Expression>, rhs: Box<Expression> },
    Assign { target: String, value: Box<Expression> },
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(value) => write!(f, "{}", value),
            Expression::Symbol(name) => f.write_str(name),
            Expression::Unary { op, operand } => write!(f, "{}{}", op.symbol(), operand),
            Expression::Binary { op, lhs, rhs } => {
                write!(f, "({} {} {})", lhs, op.symbol(), rhs)
            }
            Expression::Assign { target, value } => write!(f, "({} = {})", target, value),
        }
    }
}

/// Deepest parser recursion: parentheses and right-associative chains.
pub const MAX_NESTING: usize = 256;

/// Tallest expression tree a line may build.
pub const MAX_HEIGHT: usize = 1024;

/// Parse a token list. An empty list is a blank line and yields `None`.
pub fn parse(tokens: Vec<Spanned>) -> Result<Option<Expression>, EvalError> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut parser = Parser { tokens: tokens.into_iter().peekable(), nesting: 0, last: 0 };
    let node = parser.expression(0)?;

    match parser.advance() {
        None => Ok(Some(node.expression)),
        Some(Spanned { token: Token::RightParen, position }) => {
            Err(EvalError::UnbalancedParenthesis { position })
        }
        Some(Spanned { token, position }) => {
            Err(EvalError::UnexpectedToken { token: token.to_string(), position })
        }
    }
}

/// Parsed subtree with its height and whether it was written in parentheses.
struct Node {
    expression: Expression,
    height: usize,
    grouped: bool,
}

impl Node {
    fn leaf(expression: Expression) -> Self {
        Self { expression, height: 1, grouped: false }
    }

    fn branch(expression: Expression, height: usize, position: usize) -> Result<Self, EvalError> {
        if height > MAX_HEIGHT {
            return Err(EvalError::NestingTooDeep { position });
        }
        Ok(Self { expression, height, grouped: false })
    }
}

struct Parser {
    tokens: Peekable<IntoIter<Spanned>>,
    nesting: usize,
    last: usize,
}

impl Parser {
    fn advance(&mut self) -> Option<Spanned> {
        let next = self.tokens.next();
        if let Some(spanned) = &next {
            self.last = spanned.position;
        }
        next
    }

    fn position(&mut self) -> usize {
        self.tokens.peek().map_or(self.last, |spanned| spanned.position)
    }

    fn expression(&mut self, min_precedence: u8) -> Result<Node, EvalError> {
        if self.nesting == MAX_NESTING {
            return Err(EvalError::NestingTooDeep { position: self.position() });
        }
        self.nesting += 1;
        let node = self.binary(min_precedence);
        self.nesting -= 1;
        node
    }

    fn binary(&mut self, min_precedence: u8) -> Result<Node, EvalError> {
        let mut lhs = self.unary()?;

        while let Some(op) = self.peek_binary() {
            let precedence = op.precedence();
            if precedence < min_precedence {
                break;
            }
            self.advance();
            let position = self.last;

            let next_min = match op.associativity() {
                Associativity::Left => precedence + 1,
                Associativity::Right => precedence,
            };
            let rhs = self.expression(next_min)?;
            lhs = combine(op, lhs, rhs, position)?;
        }

        Ok(lhs)
    }

    /// Prefix operators are collected in a loop so long runs do not recurse.
    fn unary(&mut self) -> Result<Node, EvalError> {
        let mut prefixes = Vec::new();
        while let Some(op) = self.peek_unary() {
            self.advance();
            prefixes.push((op, self.last));
        }

        let mut node = self.primary()?;
        for (op, position) in prefixes.into_iter().rev() {
            let height = node.height + 1;
            let expression = Expression::Unary { op, operand: Box::new(node.expression) };
            node = Node::branch(expression, height, position)?;
        }
        Ok(node)
    }

    fn primary(&mut self) -> Result<Node, EvalError> {
        let Some(Spanned { token, position }) = self.advance() else {
            return Err(EvalError::UnexpectedEnd);
        };

        match token {
            Token::Number(value) => Ok(Node::leaf(Expression::Literal(value))),
            Token::Symbol(name) => Ok(Node::leaf(Expression::Symbol(name))),
            Token::LeftParen => {
                let inner = self.expression(0)?;
                match self.advance() {
                    Some(Spanned { token: Token::RightParen, .. }) => {
                        Ok(Node { grouped: true, ..inner })
                    }
                    Some(Spanned { token, position }) => {
                        Err(EvalError::UnexpectedToken { token: token.to_string(), position })
                    }
                    None => Err(EvalError::UnbalancedParenthesis { position }),
                }
            }
            Token::RightParen => Err(EvalError::UnbalancedParenthesis { position }),
            Token::Operator(_) => {
                Err(EvalError::UnexpectedToken { token: token.to_string(), position })
            }
        }
    }

    fn peek_unary(&mut self) -> Option<UnaryOperator> {
        match self.tokens.peek() {
            Some(Spanned { token: Token::Operator(op), .. }) => op.as_unary(),
            _ => None,
        }
    }

    fn peek_binary(&mut self) -> Option<BinaryOperator> {
        match self.tokens.peek() {
            Some(Spanned { token: Token::Operator(op), .. }) => op.as_binary(),
            _ => None,
        }
    }
}

fn combine(
    op: BinaryOperator,
    lhs: Node,
    rhs: Node,
    position: usize,
) -> Result<Node, EvalError> {
    let height = lhs.height.max(rhs.height) + 1;
    let expression = match op {
        BinaryOperator::Assign => match lhs.expression {
            Expression::Symbol(target) if !lhs.grouped => {
                Expression::Assign { target, value: Box::new(rhs.expression) }
            }
            other if lhs.grouped => {
                return Err(EvalError::InvalidAssignmentTarget(format!("({})", other)));
            }
            other => return Err(EvalError::InvalidAssignmentTarget(other.to_string())),
        },
        _ => Expression::Binary {
            op,
            lhs: Box::new(lhs.expression),
            rhs: Box::new(rhs.expression),
        },
    };
    Node::branch(expression, height, position)
}
