use std::collections::HashMap;

use crate::{
    log::{error_unserializable, Error},
    Script, Value,
};

use serde::Serialize;

/// Provides storage for the named values a template is rendered with.
///
/// Lookups are total: a missing name is simply `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    data: HashMap<String, Value>,
}

impl Store {
    /// Create a new [`Store`].
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::Store;
    ///
    /// let store = Store::new();
    /// assert!(store.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Inserts a key-value pair into the [`Store`].
    ///
    /// # Errors
    ///
    /// Returns an error if the serialization fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::Store;
    ///
    /// let mut store = Store::new();
    /// let result = store.insert("label", "Save");
    ///
    /// assert!(result.is_ok());
    /// ```
    pub fn insert<S, T>(&mut self, key: S, value: T) -> Result<(), Error>
    where
        S: Into<String>,
        T: Serialize,
    {
        let key = key.into();
        let value = Value::from_serialize(value).map_err(|e| error_unserializable(&key, e))?;
        self.data.insert(key, value);

        Ok(())
    }

    /// Inserts a key-value pair into the [`Store`].
    ///
    /// # Panics
    ///
    /// Panics if the serialization fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::Store;
    ///
    /// let mut store = Store::new();
    /// store.insert_must("disabled", true);
    /// ```
    #[inline]
    pub fn insert_must<S, T>(&mut self, key: S, value: T)
    where
        S: Into<String>,
        T: Serialize,
    {
        if let Err(error) = self.insert(key, value) {
            panic!("{error:#}");
        }
    }

    /// Inserts a [`Value`] as is, which allows storing a [`Script`].
    #[inline]
    pub fn insert_value<S, T>(&mut self, key: S, value: T)
    where
        S: Into<String>,
        T: Into<Value>,
    {
        self.data.insert(key.into(), value.into());
    }

    /// Inserts a key-value pair into the [`Store`].
    ///
    /// Returns the `Store`, so additional methods may be chained.
    ///
    /// # Errors
    ///
    /// Returns an error if the serialization fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::Store;
    ///
    /// let store = Store::new().with("label", "Save");
    ///
    /// assert!(store.is_ok());
    /// ```
    #[inline]
    pub fn with<S, T>(mut self, key: S, value: T) -> Result<Self, Error>
    where
        S: Into<String>,
        T: Serialize,
    {
        self.insert(key, value)?;

        Ok(self)
    }

    /// Inserts a key-value pair into the [`Store`].
    ///
    /// Returns the `Store`, so additional methods may be chained.
    ///
    /// # Panics
    ///
    /// Panics if the serialization fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::Store;
    ///
    /// let store = Store::new()
    ///     .with_must("label", "Save")
    ///     .with_must("size", 3);
    /// ```
    #[inline]
    pub fn with_must<S, T>(mut self, key: S, value: T) -> Self
    where
        S: Into<String>,
        T: Serialize,
    {
        self.insert_must(key, value);

        self
    }

    /// Inserts a [`Script`] under the given key.
    ///
    /// Returns the `Store`, so additional methods may be chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::Store;
    ///
    /// let store = Store::new().with_script("script", "el.focus();");
    /// assert!(store.get("script").is_some_and(|v| v.as_script().is_some()));
    /// ```
    #[inline]
    pub fn with_script<S, T>(mut self, key: S, code: T) -> Self
    where
        S: Into<String>,
        T: Into<Script>,
    {
        self.insert_value(key, code.into());

        self
    }

    /// Returns a reference to the [`Value`] corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::{Store, Value};
    ///
    /// let store = Store::new().with_must("label", "Save");
    ///
    /// assert_eq!(store.get("label"), Some(&Value::from("Save")));
    /// assert_eq!(store.get("missing"), None);
    /// ```
    #[inline]
    pub fn get(&self, index: &str) -> Option<&Value> {
        self.data.get(index)
    }

    /// Return true if the key is present.
    #[inline]
    pub fn contains_key(&self, index: &str) -> bool {
        self.data.contains_key(index)
    }

    /// Return the number of stored values.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return true if no values are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over the stored key-value pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.data.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Return a new [`Store`] holding every value of this `Store`, with the
    /// values of `other` replacing those under the same key.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::{Store, Value};
    ///
    /// let defaults = Store::new().with_must("variant", "primary").with_must("size", "md");
    /// let merged = defaults.overlay(&Store::new().with_must("size", "lg"));
    ///
    /// assert_eq!(merged.get("variant"), Some(&Value::from("primary")));
    /// assert_eq!(merged.get("size"), Some(&Value::from("lg")));
    /// ```
    pub fn overlay(&self, other: &Store) -> Store {
        let mut data = self.data.clone();
        data.extend(other.data.iter().map(|(k, v)| (k.clone(), v.clone())));

        Store { data }
    }
}

impl<K, V> FromIterator<(K, V)> for Store
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Store {
            data: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
