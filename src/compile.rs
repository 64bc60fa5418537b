mod expression;
mod lex;
mod parse;

pub use crate::compile::{
    expression::Expression,
    lex::token,
    parse::{tree, Parser},
};

use crate::{log::Error, region::Region};
use std::fmt::Display;

/// Result of asking a Lexer for the next token.
pub(crate) type TokenResult = Result<Option<(token::Token, Region)>, Error>;

/// Compile an [`Expression`] from the text of a `${ ... }` block.
///
/// Rendering never needs this, malformed expressions degrade to their literal
/// text. It is useful to validate expressions ahead of time, since the
/// returned [`Error`] points at the offending token.
///
/// # Examples
///
/// ```
/// use weft::compile;
///
/// assert!(compile("{{a}} ? 'x' : 'y'").is_ok());
///
/// let error = compile("true ? 'x'").unwrap_err();
/// assert_eq!(error.reason(), "unbalanced ternary");
/// ```
pub fn compile(text: &str) -> Result<Expression, Error> {
    Parser::new(text).compile()
}

/// Operators that compare two operands.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Operator {
    /// ===
    StrictEqual,
    /// ==
    Equal,
    /// !==
    StrictNotEqual,
    /// !=
    NotEqual,
}

impl Operator {
    /// Return true if the operator checks for inequality.
    pub fn is_negated(self) -> bool {
        matches!(self, Operator::StrictNotEqual | Operator::NotEqual)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operator::StrictEqual => write!(f, "==="),
            Operator::Equal => write!(f, "=="),
            Operator::StrictNotEqual => write!(f, "!=="),
            Operator::NotEqual => write!(f, "!="),
        }
    }
}
