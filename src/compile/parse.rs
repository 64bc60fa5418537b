//! Expression parser.
//!
//! Reads every token from a Lexer up front, then descends over ranges of the
//! token list. Searches for `?`, `:`, `&&`, `||` and the comparison operators
//! only consider tokens outside of any group, and string literals are single
//! tokens, so operators inside quotes or parentheses are never split on.
pub mod tree;

use crate::{
    compile::{
        lex::{token::Token, Lexer},
        parse::tree::{Condition, Ternary, Tree},
        Expression, Operator,
    },
    log::{Error, UNBALANCED_GROUP, UNBALANCED_TERNARY},
    region::Region,
};

pub struct Parser<'source> {
    /// The expression text.
    source: &'source str,
    /// Every token of the expression, filled by `compile`.
    tokens: Vec<(Token, Region)>,
}

impl<'source> Parser<'source> {
    /// Create a new Parser from the given string.
    #[inline]
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            tokens: vec![],
        }
    }

    /// Compile the expression.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when a string is never closed, parentheses do not
    /// balance, or a `?` has no matching `:`.
    pub fn compile(mut self) -> Result<Expression<'source>, Error> {
        let mut lexer = Lexer::new(self.source);
        while let Some(next) = lexer.next()? {
            self.tokens.push(next);
        }
        self.check_groups()?;

        let tree = self.parse_top(0, self.tokens.len())?;

        Ok(Expression {
            tree,
            source: self.source,
        })
    }

    /// Ensure every `(` is closed by a `)`.
    fn check_groups(&self) -> Result<(), Error> {
        let mut open = vec![];

        for (token, region) in &self.tokens {
            match token {
                Token::BeginGroup => open.push(*region),
                Token::EndGroup if open.pop().is_none() => {
                    return Err(Error::build(UNBALANCED_GROUP)
                        .with_pointer(self.source, *region)
                        .with_help("this `)` closes a group that was never opened"));
                }
                _ => {}
            }
        }

        match open.pop() {
            Some(region) => Err(Error::build(UNBALANCED_GROUP)
                .with_pointer(self.source, region)
                .with_help("this `(` is never closed, add a matching `)`")),
            None => Ok(()),
        }
    }

    /// Parse the whole expression.
    ///
    /// A wrapped ternary such as `(a ? 'x' : 'y')` is unwrapped, but without
    /// a ternary the expression reads verbatim, so `('a')` keeps its group.
    fn parse_top(&self, begin: usize, end: usize) -> Result<Tree, Error> {
        let (inner_begin, inner_end) = self.unwrap_group(begin, end);

        match self.find(inner_begin, inner_end, |t| t == Token::Question) {
            Some(question) => self.parse_ternary(inner_begin, question, inner_end),
            None => Ok(self.parse_literal(begin, end)),
        }
    }

    /// Parse the tokens within `begin..end` as a branch.
    ///
    /// A branch is a ternary if a `?` exists outside of any group, otherwise
    /// it is a literal. One layer of enclosing parentheses is removed first.
    fn parse_branch(&self, begin: usize, end: usize) -> Result<Tree, Error> {
        let (begin, end) = self.unwrap_group(begin, end);

        match self.find(begin, end, |t| t == Token::Question) {
            Some(question) => self.parse_ternary(begin, question, end),
            None => Ok(self.parse_literal(begin, end)),
        }
    }

    /// Parse the tokens within `begin..end` as a ternary whose `?` is at
    /// `question`.
    fn parse_ternary(&self, begin: usize, question: usize, end: usize) -> Result<Tree, Error> {
        let colon = self.find_colon(question + 1, end).ok_or_else(|| {
            Error::build(UNBALANCED_TERNARY)
                .with_pointer(self.source, self.tokens[question].1)
                .with_help("add a `:` followed by the value used when the condition is false")
        })?;

        Ok(Tree::Ternary(Ternary {
            condition: self.parse_condition(begin, question),
            then_branch: Box::new(self.parse_branch(question + 1, colon)?),
            else_branch: Box::new(self.parse_branch(colon + 1, end)?),
            region: self.span(begin, end),
        }))
    }

    /// Parse the tokens within `begin..end` as a literal.
    fn parse_literal(&self, begin: usize, end: usize) -> Tree {
        match &self.tokens[begin..end] {
            [(Token::String, region)] => Tree::String(*region),
            _ => Tree::Verbatim(self.span(begin, end)),
        }
    }

    /// Parse the tokens within `begin..end` as a condition.
    ///
    /// `&&` is searched before `||` and each splits only once, at its first
    /// occurrence. Both halves are parsed again, so `a || b && c` reads as
    /// `(a || b) && c`.
    fn parse_condition(&self, begin: usize, end: usize) -> Condition {
        let (begin, end) = self.unwrap_group(begin, end);

        if let Some(index) = self.find(begin, end, |t| t == Token::And) {
            return Condition::And(
                Box::new(self.parse_condition(begin, index)),
                Box::new(self.parse_condition(index + 1, end)),
            );
        }
        if let Some(index) = self.find(begin, end, |t| t == Token::Or) {
            return Condition::Or(
                Box::new(self.parse_condition(begin, index)),
                Box::new(self.parse_condition(index + 1, end)),
            );
        }
        if end > begin && self.tokens[end - 1].0 == Token::Trim {
            return Condition::Trim(self.span(begin, end - 1));
        }

        let equal = |t: Token| {
            matches!(
                t,
                Token::Operator(Operator::StrictEqual | Operator::Equal)
            )
        };
        let not_equal = |t: Token| {
            matches!(
                t,
                Token::Operator(Operator::StrictNotEqual | Operator::NotEqual)
            )
        };
        if let Some(index) = self
            .find(begin, end, equal)
            .or_else(|| self.find(begin, end, not_equal))
        {
            if let Token::Operator(operator) = self.tokens[index].0 {
                return Condition::Compare {
                    left: self.span(begin, index),
                    operator,
                    right: self.span(index + 1, end),
                };
            }
        }

        match &self.tokens[begin..end] {
            [(Token::Word, region)] if region.literal(self.source) == "true" => {
                Condition::Boolean(true)
            }
            [(Token::Word, region)] if region.literal(self.source) == "false" => {
                Condition::Boolean(false)
            }
            _ => Condition::Truthy(self.span(begin, end)),
        }
    }

    /// Return the index of the first token within `begin..end` that is outside
    /// of any group and satisfies the predicate.
    fn find<F>(&self, begin: usize, end: usize, predicate: F) -> Option<usize>
    where
        F: Fn(Token) -> bool,
    {
        let mut depth = 0_usize;

        for index in begin..end {
            let token = self.tokens[index].0;
            match token {
                Token::BeginGroup => depth += 1,
                Token::EndGroup => depth = depth.saturating_sub(1),
                _ if depth == 0 && predicate(token) => return Some(index),
                _ => {}
            }
        }

        None
    }

    /// Return the index of the `:` that completes a ternary whose `?` sits
    /// just before `begin`.
    ///
    /// Every nested `?` found on the way claims the next `:` for itself.
    fn find_colon(&self, begin: usize, end: usize) -> Option<usize> {
        let mut depth = 0_usize;
        let mut nested = 0_usize;

        for index in begin..end {
            match self.tokens[index].0 {
                Token::BeginGroup => depth += 1,
                Token::EndGroup => depth = depth.saturating_sub(1),
                Token::Question if depth == 0 => nested += 1,
                Token::Colon if depth == 0 && nested == 0 => return Some(index),
                Token::Colon if depth == 0 => nested -= 1,
                _ => {}
            }
        }

        None
    }

    /// Remove one layer of parentheses if they enclose all of `begin..end`.
    ///
    /// `(a) || (b)` starts and ends with parentheses but is not enclosed.
    fn unwrap_group(&self, begin: usize, end: usize) -> (usize, usize) {
        if end >= begin + 2
            && self.tokens[begin].0 == Token::BeginGroup
            && self.closes_at(begin, end - 1)
        {
            (begin + 1, end - 1)
        } else {
            (begin, end)
        }
    }

    /// Return true if the group opened at `open` is closed at `close`.
    fn closes_at(&self, open: usize, close: usize) -> bool {
        let mut depth = 0_usize;

        for index in open..=close {
            match self.tokens[index].0 {
                Token::BeginGroup => depth += 1,
                Token::EndGroup => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return index == close;
                    }
                }
                _ => {}
            }
        }

        false
    }

    /// Return the [`Region`] covered by the tokens within `begin..end`.
    ///
    /// An empty range produces an empty `Region` where the range would begin.
    fn span(&self, begin: usize, end: usize) -> Region {
        if begin >= end {
            let at = self
                .tokens
                .get(begin)
                .map(|(_, region)| region.begin)
                .unwrap_or(self.source.len());

            return Region::empty(at);
        }

        self.tokens[begin].1.combine(self.tokens[end - 1].1)
    }
}
