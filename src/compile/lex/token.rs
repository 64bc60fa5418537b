use crate::compile::Operator;
use std::fmt::Display;

/// Types emitted by the Lexer.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Quoted text, with either `'` or `"`.
    String,
    /// Any other run of characters, such as `true`, `null` or `12`.
    Word,
    /// (
    BeginGroup,
    /// )
    EndGroup,
    /// ?
    Question,
    /// :
    Colon,
    /// .trim()
    Trim,
    /// &&
    And,
    /// ||
    Or,
    /// Compares the operands on either side.
    Operator(Operator),
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::String => write!(f, "string"),
            Token::Word => write!(f, "word"),
            Token::BeginGroup => write!(f, "begin group (()"),
            Token::EndGroup => write!(f, "end group ())"),
            Token::Question => write!(f, "question (?)"),
            Token::Colon => write!(f, "colon (:)"),
            Token::Trim => write!(f, "trim (.trim())"),
            Token::And => write!(f, "and (&&)"),
            Token::Or => write!(f, "or (||)"),
            Token::Operator(operator) => write!(f, "operator {operator}"),
        }
    }
}
