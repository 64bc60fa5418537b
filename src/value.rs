use serde::{Serialize, Serializer};
use serde_json::Value as Json;
use std::fmt::Display;

/// A value that a placeholder can resolve to.
///
/// Plain data (text, booleans, numbers, lists and maps) is carried as a
/// [`serde_json::Value`], a [`Script`] is kept apart so it can be attached to
/// a node instead of being stringified into an attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text, boolean, number, list, map or null.
    Json(Json),
    /// Code that runs once on the client after the node is presented.
    Script(Script),
}

impl Value {
    /// Serialize any value into a [`Value::Json`].
    ///
    /// # Errors
    ///
    /// Propagates the `serde_json` error if the value cannot be represented
    /// as JSON, for example a map with non-string keys.
    pub fn from_serialize<T>(value: T) -> Result<Self, serde_json::Error>
    where
        T: Serialize,
    {
        serde_json::to_value(value).map(Value::Json)
    }

    /// Return the inner [`serde_json::Value`], if this is not a [`Script`].
    pub fn as_json(&self) -> Option<&Json> {
        match self {
            Value::Json(json) => Some(json),
            Value::Script(_) => None,
        }
    }

    /// Return the inner [`Script`], if any.
    pub fn as_script(&self) -> Option<&Script> {
        match self {
            Value::Script(script) => Some(script),
            Value::Json(_) => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Json(json) => json.serialize(serializer),
            Value::Script(script) => serializer.serialize_str(script.code()),
        }
    }
}

impl From<Json> for Value {
    fn from(value: Json) -> Self {
        Value::Json(value)
    }
}

impl From<Script> for Value {
    fn from(value: Script) -> Self {
        Value::Script(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Json(Json::String(value.to_string()))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Json(Json::String(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Json(Json::Bool(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Json(Json::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Json(Json::from(value))
    }
}

/// A deferred script payload.
///
/// The code may contain placeholders and expression blocks. It is interpolated
/// with literal serialization, so text values stay quoted and the result is
/// valid code.
///
/// # Examples
///
/// ```
/// use weft::Script;
///
/// let script = Script::new("el.dataset.open = {{open}};");
/// assert_eq!(script.code(), "el.dataset.open = {{open}};");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Script {
    code: String,
}

impl Script {
    /// Create a new [`Script`] from the given code.
    #[inline]
    pub fn new<T>(code: T) -> Self
    where
        T: Into<String>,
    {
        Self { code: code.into() }
    }

    /// Return the code of the [`Script`].
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Return true if the code is empty or only whitespace.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.code.trim().is_empty()
    }
}

impl Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl From<&str> for Script {
    fn from(value: &str) -> Self {
        Script::new(value)
    }
}

impl From<String> for Script {
    fn from(value: String) -> Self {
        Script::new(value)
    }
}
