//! Placeholder and expression substitution over plain text.
//!
//! Text is split at each `${ ... }` block. Placeholders inside a block are
//! filled with literal forms before the block is evaluated, placeholders in
//! the text between blocks are filled with the requested form.
use super::evaluate::evaluate;
use crate::{
    format::{format, Form},
    store::Store,
    syntax::Marker,
};
use morel::Finder;

/// Substitutes placeholders and expressions using the values in a [`Store`].
pub struct Substitutor<'engine, 'store> {
    /// Finds the markers of the template syntax.
    finder: &'engine Finder,
    /// Values referenced by placeholders.
    store: &'store Store,
}

impl<'engine, 'store> Substitutor<'engine, 'store> {
    /// Create a new Substitutor.
    #[inline]
    pub fn new(finder: &'engine Finder, store: &'store Store) -> Self {
        Self { finder, store }
    }

    /// Return the text with every expression evaluated and every placeholder
    /// replaced by the given form of its value.
    ///
    /// A placeholder without a value becomes `null` in [`Form::Literal`] and
    /// is removed in [`Form::Unwrapped`]. The result of an expression is never
    /// scanned for placeholders again, and an expression that is never closed
    /// leaves the rest of the text untouched.
    pub fn substitute(&self, text: &str, form: Form) -> String {
        let mut buffer = String::with_capacity(text.len());
        let mut cursor = 0;

        while let Some(begin) = self.find_expression(text, cursor) {
            buffer.push_str(&self.resolve_placeholders(&text[cursor..begin], form));

            let body = begin + Marker::BeginExpression.text().len();
            let Some(close) = closing_brace(text, body) else {
                buffer.push_str(&text[begin..]);
                return buffer;
            };
            let inner = self.resolve_placeholders(&text[body..close], Form::Literal);
            buffer.push_str(&evaluate(&inner));
            cursor = close + 1;
        }
        buffer.push_str(&self.resolve_placeholders(&text[cursor..], form));

        buffer
    }

    /// Return the index of the next `${` at or after `from`.
    fn find_expression(&self, text: &str, from: usize) -> Option<usize> {
        let mut from = from;

        while let Some((id, begin, end)) = self.finder.next(text, from) {
            if Marker::from(id) == Marker::BeginExpression {
                return Some(begin);
            }
            from = end;
        }

        None
    }

    /// Replace each `{{name}}` with the given form of its value.
    fn resolve_placeholders(&self, text: &str, form: Form) -> String {
        let mut buffer = String::with_capacity(text.len());
        let mut cursor = 0;

        while let Some((id, begin, end)) = self.finder.next(text, cursor) {
            let found = match Marker::from(id) {
                Marker::BeginPlaceholder => placeholder_at(text, end),
                _ => None,
            };

            match found {
                Some((name, close)) => {
                    buffer.push_str(&text[cursor..begin]);
                    buffer.push_str(&self.lookup(name, form));
                    cursor = close;
                }
                // A run such as `{{{a}}` or `${{a}}` holds a placeholder one
                // character later.
                None => {
                    buffer.push_str(&text[cursor..begin + 1]);
                    cursor = begin + 1;
                }
            }
        }
        buffer.push_str(&text[cursor..]);

        buffer
    }

    /// Return the given form of the value stored under the name.
    fn lookup(&self, name: &str, form: Form) -> String {
        let value = self.store.get(name);
        if value.is_none() {
            tracing::trace!(name, "no value for placeholder");
        }

        format(value, form)
    }
}

/// Return the name of the placeholder if the text is exactly one placeholder,
/// such as `{{variant}}`.
pub fn exact_placeholder(text: &str) -> Option<&str> {
    text.strip_prefix("{{")?
        .strip_suffix("}}")
        .filter(|name| is_identifier(name))
}

/// Return the name and end of the placeholder whose `{{` ends at `from`.
fn placeholder_at(text: &str, from: usize) -> Option<(&str, usize)> {
    let rest = &text[from..];
    let length = rest.find("}}")?;
    let name = &rest[..length];

    is_identifier(name).then_some((name, from + length + 2))
}

/// Return the index of the `}` closing an expression whose body begins at
/// `from`, counting nested braces.
fn closing_brace(text: &str, from: usize) -> Option<usize> {
    let mut depth = 1_usize;

    for (index, char) in text[from..].char_indices() {
        match char {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(from + index);
                }
            }
            _ => {}
        }
    }

    None
}

/// Return true if the text is a valid placeholder name.
fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();

    chars
        .next()
        .is_some_and(|c| c == '_' || unicode_ident::is_xid_start(c))
        && chars.all(unicode_ident::is_xid_continue)
}
