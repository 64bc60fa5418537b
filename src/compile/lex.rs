pub mod token;

use crate::{
    log::{expected_quote, Error, UNTERMINATED_STRING},
    region::Region,
};

use super::{token::Token, Operator, TokenResult};

/// Multi-character symbols, longest first so `===` is never read as `==`.
const SYMBOLS: [(&str, Token); 7] = [
    ("===", Token::Operator(Operator::StrictEqual)),
    ("!==", Token::Operator(Operator::StrictNotEqual)),
    ("==", Token::Operator(Operator::Equal)),
    ("!=", Token::Operator(Operator::NotEqual)),
    ("&&", Token::And),
    ("||", Token::Or),
    (".trim()", Token::Trim),
];

/// Provides methods to read an expression as [`Token`] instances.
pub struct Lexer<'source> {
    /// Reference to the source text.
    pub source: &'source str,
    /// Position within source.
    pub cursor: usize,
}

impl<'source> Lexer<'source> {
    /// Create a new [`Lexer`] over the given expression.
    #[inline]
    pub fn new(source: &'source str) -> Self {
        Self { source, cursor: 0 }
    }

    /// Return the next [`Token`] and [`Region`].
    ///
    /// Whitespace between tokens is skipped.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] when a string literal is never closed.
    pub fn next(&mut self) -> TokenResult {
        loop {
            let from = self.cursor;
            let Some(char) = self.source[from..].chars().next() else {
                return Ok(None);
            };

            return match char {
                c if c.is_whitespace() => {
                    self.cursor += c.len_utf8();
                    continue;
                }
                '(' => Ok(Some(self.advance(1, Token::BeginGroup))),
                ')' => Ok(Some(self.advance(1, Token::EndGroup))),
                '?' => Ok(Some(self.advance(1, Token::Question))),
                ':' => Ok(Some(self.advance(1, Token::Colon))),
                '\'' | '"' => self.lex_string(from, char),
                _ => match symbol_at(&self.source[from..]) {
                    Some((length, token)) => Ok(Some(self.advance(length, token))),
                    None => Ok(Some(self.lex_word(from))),
                },
            };
        }
    }

    /// Move the cursor forward by `length` bytes and return the [`Token`]
    /// with the [`Region`] that was passed over.
    fn advance(&mut self, length: usize, token: Token) -> (Token, Region) {
        let from = self.cursor;
        self.cursor += length;

        (token, (from..self.cursor).into())
    }

    /// Return a [`Token::String`] beginning at the quote found at `from`.
    ///
    /// A backslash escapes the character after it, so `'it\'s'` is one string.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] if the closing quote is never found.
    fn lex_string(&mut self, from: usize, quote: char) -> TokenResult {
        let body = from + quote.len_utf8();
        let mut escaped = false;

        for (index, char) in self.source[body..].char_indices() {
            match char {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                c if c == quote => {
                    let to = body + index + c.len_utf8();
                    self.cursor = to;

                    return Ok(Some((Token::String, (from..to).into())));
                }
                _ => {}
            }
        }

        Err(Error::build(UNTERMINATED_STRING)
            .with_pointer(self.source, from..body)
            .with_help(expected_quote(quote)))
    }

    /// Return a [`Token::Word`] beginning at `from`.
    ///
    /// The word runs until whitespace, a single character token, a quote or
    /// one of the multi-character symbols.
    fn lex_word(&mut self, from: usize) -> (Token, Region) {
        let rest = &self.source[from..];
        let to = rest
            .char_indices()
            .skip(1)
            .find(|(index, _)| is_boundary(&rest[*index..]))
            .map(|(index, _)| from + index)
            .unwrap_or(self.source.len());
        self.cursor = to;

        (Token::Word, (from..to).into())
    }
}

/// Return the length and [`Token`] of the symbol at the start of the text.
fn symbol_at(text: &str) -> Option<(usize, Token)> {
    SYMBOLS
        .iter()
        .find(|(symbol, _)| text.starts_with(*symbol))
        .map(|(symbol, token)| (symbol.len(), *token))
}

/// Return true if a word must end where the text begins.
fn is_boundary(text: &str) -> bool {
    match text.chars().next() {
        Some(c) if c.is_whitespace() => true,
        Some('(' | ')' | '?' | ':' | '\'' | '"') => true,
        Some(_) => symbol_at(text).is_some(),
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::Lexer;
    use crate::{
        compile::{lex::Token, Operator},
        region::Region,
    };

    #[test]
    fn test_lex_ternary() {
        let expect = vec![
            (Token::Word, 0..4),
            (Token::Question, 5..6),
            (Token::String, 7..10),
            (Token::Colon, 11..12),
            (Token::String, 13..16),
        ];

        helper_lex_next_auto("true ? 'x' : 'y'", expect);
    }

    #[test]
    fn test_lex_operators() {
        let expect = vec![
            (Token::String, 0..3),
            (Token::Operator(Operator::StrictEqual), 4..7),
            (Token::String, 8..11),
            (Token::And, 12..14),
            (Token::Word, 15..16),
            (Token::Operator(Operator::NotEqual), 16..18),
            (Token::Word, 18..19),
            (Token::Or, 20..22),
            (Token::Word, 23..24),
            (Token::Operator(Operator::StrictNotEqual), 24..27),
            (Token::Word, 27..28),
            (Token::Operator(Operator::Equal), 28..30),
            (Token::Word, 30..31),
        ];

        helper_lex_next_auto("'a' === 'b' && a!=b || c!==d==e", expect);
    }

    #[test]
    fn test_lex_trim_and_group() {
        let expect = vec![
            (Token::BeginGroup, 0..1),
            (Token::String, 1..5),
            (Token::Trim, 5..12),
            (Token::EndGroup, 12..13),
        ];

        helper_lex_next_auto("('  '.trim())", expect);
    }

    #[test]
    fn test_lex_string_escape() {
        let expect = vec![(Token::String, 0..7), (Token::String, 8..13)];

        helper_lex_next_auto(r#"'it\'s' "a'b""#, expect);
    }

    #[test]
    fn test_lex_word_with_period() {
        let expect = vec![(Token::Word, 0..9), (Token::Trim, 9..16)];

        helper_lex_next_auto("item.name.trim()", expect);
    }

    #[test]
    fn test_lex_unterminated_string() {
        let mut lexer = Lexer::new("a ? 'open : 'b'");
        assert_eq!(lexer.next(), Ok(Some((Token::Word, (0..1).into()))));
        assert_eq!(lexer.next(), Ok(Some((Token::Question, (2..3).into()))));
        assert_eq!(lexer.next(), Ok(Some((Token::String, (4..13).into()))));
        assert_eq!(lexer.next(), Ok(Some((Token::Word, (13..14).into()))));

        assert!(lexer.next().is_err_and(|e| e.reason() == "unterminated string"));
    }

    /// Helper function which takes in a source string, creates a lexer on that
    /// string and iterates [expect.len()] amount of times and compares the result
    /// against [lexer.next()].
    fn helper_lex_next_auto<T>(source: &str, expect: Vec<(Token, T)>)
    where
        T: Into<Region>,
    {
        let mut lexer = Lexer::new(source);
        for (token, region) in expect {
            assert_eq!(lexer.next(), Ok(Some((token, region.into()))))
        }

        assert_eq!(lexer.next(), Ok(None));
        assert_eq!(lexer.next(), Ok(None));
    }
}
