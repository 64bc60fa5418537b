use std::borrow::Cow;

/// Return true if the text is one quoted literal, such as `'a'` or `"a"`.
///
/// The closing quote must be the last character, and no unescaped quote of
/// the same kind may appear before it, so `'a' === 'b'` is not quoted.
pub fn is_quoted(text: &str) -> bool {
    let Some(quote) = text.chars().next().filter(|c| matches!(c, '\'' | '"')) else {
        return false;
    };
    if text.len() < 2 || !text.ends_with(quote) {
        return false;
    }

    let mut escaped = false;
    for char in text[1..text.len() - 1].chars() {
        match char {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            c if c == quote => return false,
            _ => {}
        }
    }

    !escaped
}

/// Return the content of a quoted literal with its escapes resolved.
///
/// Text that is not quoted is returned unchanged.
pub fn unquote(text: &str) -> Cow<'_, str> {
    if !is_quoted(text) {
        return Cow::Borrowed(text);
    }

    let mut buffer = String::with_capacity(text.len() - 2);
    let mut chars = text[1..text.len() - 1].chars();
    while let Some(char) = chars.next() {
        match (char, char == '\\') {
            (_, true) => match chars.next() {
                Some('n') => buffer.push('\n'),
                Some('t') => buffer.push('\t'),
                Some('r') => buffer.push('\r'),
                Some(other) => buffer.push(other),
                None => buffer.push('\\'),
            },
            (char, false) => buffer.push(char),
        }
    }

    Cow::Owned(buffer)
}

/// Return the most literal reading of the text: the trimmed text, unquoted
/// if it is one quoted literal.
pub fn literal_text(text: &str) -> Cow<'_, str> {
    unquote(text.trim())
}

/// Return true if the operand is truthy.
///
/// After trimming and unquoting, everything is truthy except empty text,
/// `false` and `null`.
pub fn is_truthy(operand: &str) -> bool {
    !matches!(literal_text(operand).as_ref(), "" | "false" | "null")
}

/// Return true if both operands read the same once trimmed and unquoted.
pub fn is_equal(left: &str, right: &str) -> bool {
    literal_text(left) == literal_text(right)
}

/// Return true if the operand of `.trim()` is not blank.
///
/// A quoted operand is checked by its content, anything else falls back to
/// [`is_truthy`].
pub fn is_filled(operand: &str) -> bool {
    let operand = operand.trim();
    if is_quoted(operand) {
        return !unquote(operand).trim().is_empty();
    }

    is_truthy(operand)
}

#[cfg(test)]
mod tests {
    use super::{is_equal, is_filled, is_quoted, is_truthy, literal_text, unquote};

    #[test]
    fn test_is_quoted() {
        assert!(is_quoted("'a'"));
        assert!(is_quoted("\"a b\""));
        assert!(is_quoted("''"));
        assert!(is_quoted(r"'it\'s'"));
        assert!(!is_quoted("'a' === 'b'"));
        assert!(!is_quoted("'a\""));
        assert!(!is_quoted("'"));
        assert!(!is_quoted("a"));
        assert!(!is_quoted(r"'a\'"));
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("'primary'"), "primary");
        assert_eq!(unquote(r#""say \"hi\"""#), "say \"hi\"");
        assert_eq!(unquote(r"'a\\b'"), r"a\b");
        assert_eq!(unquote("plain"), "plain");
    }

    #[test]
    fn test_literal_text() {
        assert_eq!(literal_text("  'x'  "), "x");
        assert_eq!(literal_text(" btn "), "btn");
    }

    #[test]
    fn test_truthy() {
        for truthy in ["true", "'x'", "0", "'false '", "[]", "{}"] {
            assert!(is_truthy(truthy), "{truthy} should be truthy");
        }
        for falsy in ["", "  ", "false", "null", "''", "'null'", "\"false\""] {
            assert!(!is_truthy(falsy), "{falsy} should be falsy");
        }
    }

    #[test]
    fn test_equal() {
        assert!(is_equal("\"success\"", "'success'"));
        assert!(is_equal(" 1", "1 "));
        assert!(!is_equal("\"error\"", "'success'"));
        assert!(!is_equal("1", "1.0"));
    }

    #[test]
    fn test_filled() {
        assert!(!is_filled("'  '"));
        assert!(is_filled("'hi'"));
        assert!(is_filled("\" x \""));
        assert!(!is_filled("null"));
        assert!(is_filled("value"));
    }
}
