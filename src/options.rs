/// Names the engine reserves, which may be changed per [`Engine`][`crate::Engine`].
///
/// The defaults are:
///
/// ```text
/// Child marker: {{children}}
/// Script key: script
/// Identifier prefix: component (component-1, component-2, ...)
/// ```
///
/// # Examples
///
/// ```
/// use weft::Options;
///
/// let options = Options::new()
///     .with_children("slot")
///     .with_id_prefix("ui");
///
/// assert_eq!(options.child_marker(), "{{slot}}");
/// assert_eq!(options.id_prefix(), "ui");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    children: String,
    script: String,
    id_prefix: String,
}

impl Options {
    /// Create a new [`Options`] holding the defaults.
    #[inline]
    pub fn new() -> Self {
        Self {
            children: "children".to_string(),
            script: "script".to_string(),
            id_prefix: "component".to_string(),
        }
    }

    /// Set the name used by the child marker.
    #[inline]
    pub fn set_children<T>(&mut self, name: T)
    where
        T: Into<String>,
    {
        self.children = name.into();
    }

    /// Set the name used by the child marker.
    ///
    /// Returns the [`Options`], so additional methods may be chained.
    #[inline]
    pub fn with_children<T>(mut self, name: T) -> Self
    where
        T: Into<String>,
    {
        self.set_children(name);

        self
    }

    /// Set the key under which a caller supplies its own script.
    #[inline]
    pub fn set_script<T>(&mut self, key: T)
    where
        T: Into<String>,
    {
        self.script = key.into();
    }

    /// Set the key under which a caller supplies its own script.
    ///
    /// Returns the [`Options`], so additional methods may be chained.
    #[inline]
    pub fn with_script<T>(mut self, key: T) -> Self
    where
        T: Into<String>,
    {
        self.set_script(key);

        self
    }

    /// Set the prefix of minted component identifiers.
    #[inline]
    pub fn set_id_prefix<T>(&mut self, prefix: T)
    where
        T: Into<String>,
    {
        self.id_prefix = prefix.into();
    }

    /// Set the prefix of minted component identifiers.
    ///
    /// Returns the [`Options`], so additional methods may be chained.
    #[inline]
    pub fn with_id_prefix<T>(mut self, prefix: T) -> Self
    where
        T: Into<String>,
    {
        self.set_id_prefix(prefix);

        self
    }

    /// Return the text that marks where caller children are spliced in.
    pub fn child_marker(&self) -> String {
        format!("{{{{{}}}}}", self.children)
    }

    /// Return the script key.
    #[inline]
    pub fn script_key(&self) -> &str {
        &self.script
    }

    /// Return the identifier prefix.
    #[inline]
    pub fn id_prefix(&self) -> &str {
        &self.id_prefix
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}
