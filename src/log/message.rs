use super::Error;
use std::fmt::Display;

pub const UNTERMINATED_STRING: &str = "unterminated string";
pub const UNBALANCED_GROUP: &str = "unbalanced group";
pub const UNBALANCED_TERNARY: &str = "unbalanced ternary";
pub const UNSERIALIZABLE_VALUE: &str = "unserializable value";

/// Return an [`Error`] explaining that a value could not be turned into a
/// [`Value`][`crate::Value`].
pub fn error_unserializable<T>(key: &str, cause: T) -> Error
where
    T: Display,
{
    Error::build(UNSERIALIZABLE_VALUE).with_help(format!(
        "value for `{key}` could not be serialized: {cause}"
    ))
}

/// Return a string describing the closing quote that was never found.
pub fn expected_quote(quote: char) -> String {
    format!("this might be an undelimited string, try closing it with `{quote}`")
}
