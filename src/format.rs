//! Text forms of a [`Value`].
//!
//! Every value has two forms. The literal form is JSON, suitable for code:
//! text stays quoted, lists and maps use bracket and brace syntax. The
//! unwrapped form is meant for attribute strings and text content: it equals
//! the literal form, except a quoted text literal loses its outer quotes and
//! has its escapes resolved.
use crate::Value;
use serde_json::Value as Json;

/// Selects the text form produced by [`format`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Form {
    /// JSON text, quotes retained.
    Literal,
    /// Literal text with one layer of quoting removed from text values.
    Unwrapped,
}

/// Return the text form of the given value.
///
/// An absent value is `null` in [`Form::Literal`] and empty in [`Form::Unwrapped`].
///
/// # Examples
///
/// ```
/// use weft::{format, Form, Value};
///
/// let value = Value::from("say \"hi\"");
///
/// assert_eq!(format(Some(&value), Form::Literal), r#""say \"hi\"""#);
/// assert_eq!(format(Some(&value), Form::Unwrapped), r#"say "hi""#);
/// assert_eq!(format(None, Form::Unwrapped), "");
/// ```
pub fn format(value: Option<&Value>, form: Form) -> String {
    match (value, form) {
        (None, Form::Literal) => "null".to_string(),
        (None, Form::Unwrapped) => String::new(),
        (Some(value), Form::Literal) => literal(value),
        (Some(value), Form::Unwrapped) => unwrapped(value),
    }
}

/// Return the literal form of the value.
///
/// Serialization does not fail outward, a value `serde_json` refuses is
/// stringified instead.
fn literal(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|error| {
        tracing::debug!(%error, "falling back to plain stringification");
        match value {
            Value::Json(json) => json.to_string(),
            Value::Script(script) => format!("{:?}", script.code()),
        }
    })
}

/// Return the unwrapped form of the value.
fn unwrapped(value: &Value) -> String {
    match value {
        Value::Json(Json::Null) => String::new(),
        Value::Json(Json::String(string)) => string.clone(),
        Value::Script(script) => script.code().to_string(),
        // Lists and maps keep the quoting of their elements.
        other => literal(other),
    }
}
