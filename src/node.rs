use crate::Script;
use serde_json::Number;
use std::collections::BTreeMap;

/// A node of a template or output tree.
///
/// A node with an empty tag is a text leaf, its text is held in `content`.
/// Templates are built once and never mutated, every render produces a new
/// tree of nodes.
///
/// # Examples
///
/// ```
/// use weft::Node;
///
/// let button = Node::element("button")
///     .with_attribute("class", "btn btn-{{variant}}")
///     .with_attribute("disabled", "{{disabled}}")
///     .with_child(Node::text("{{children}}"));
///
/// assert_eq!(button.tag(), "button");
/// assert_eq!(button.children().len(), 1);
/// assert!(button.children()[0].is_text());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    tag: String,
    attributes: BTreeMap<String, Attr>,
    children: Vec<Node>,
    content: Option<String>,
    script: Option<Script>,
}

impl Node {
    /// Create an element [`Node`] with the given tag.
    pub fn element<T>(tag: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Create a text leaf.
    pub fn text<T>(content: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Set an attribute.
    ///
    /// Returns the [`Node`], so additional methods may be chained.
    pub fn with_attribute<K, V>(mut self, name: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Attr>,
    {
        self.attributes.insert(name.into(), value.into());

        self
    }

    /// Append a child.
    ///
    /// Returns the [`Node`], so additional methods may be chained.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);

        self
    }

    /// Append every child of the iterator.
    ///
    /// Returns the [`Node`], so additional methods may be chained.
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        self.children.extend(children);

        self
    }

    /// Set the literal content.
    ///
    /// Returns the [`Node`], so additional methods may be chained.
    pub fn with_content<T>(mut self, content: T) -> Self
    where
        T: Into<String>,
    {
        self.content = Some(content.into());

        self
    }

    /// Set the script slot.
    ///
    /// Returns the [`Node`], so additional methods may be chained.
    pub fn with_script<T>(mut self, script: T) -> Self
    where
        T: Into<Script>,
    {
        self.script = Some(script.into());

        self
    }

    /// Return the tag, empty for a text leaf.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Return true if this is a text leaf.
    pub fn is_text(&self) -> bool {
        self.tag.is_empty()
    }

    /// Return the attribute with the given name, if any.
    pub fn attribute(&self, name: &str) -> Option<&Attr> {
        self.attributes.get(name)
    }

    /// Return every attribute, ordered by name.
    pub fn attributes(&self) -> &BTreeMap<String, Attr> {
        &self.attributes
    }

    /// Return the children.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Return the literal content, if any.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }

    /// Return the script attached to this node, if any.
    pub fn script(&self) -> Option<&Script> {
        self.script.as_ref()
    }

    pub(crate) fn insert_attribute(&mut self, name: String, value: Attr) {
        self.attributes.insert(name, value);
    }

    pub(crate) fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub(crate) fn set_content(&mut self, content: Option<String>) {
        self.content = content;
    }

    /// Attach the script unless one is already attached.
    ///
    /// Returns false when the slot was taken.
    pub(crate) fn attach_script(&mut self, script: Script) -> bool {
        if self.script.is_some() {
            return false;
        }
        self.script = Some(script);

        true
    }
}

/// The value of an attribute.
///
/// In a template, text may contain placeholders and expression blocks. In an
/// output tree, text is final and scripts have moved to the node's script slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Attr {
    /// Text.
    Text(String),
    /// A boolean, passed through as is.
    Bool(bool),
    /// A number, passed through as is.
    Number(Number),
    /// A deferred script.
    Script(Script),
}

impl Attr {
    /// Return the text, if this is [`Attr::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Attr::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for Attr {
    fn from(value: &str) -> Self {
        Attr::Text(value.to_string())
    }
}

impl From<String> for Attr {
    fn from(value: String) -> Self {
        Attr::Text(value)
    }
}

impl From<bool> for Attr {
    fn from(value: bool) -> Self {
        Attr::Bool(value)
    }
}

impl From<i64> for Attr {
    fn from(value: i64) -> Self {
        Attr::Number(value.into())
    }
}

impl From<Number> for Attr {
    fn from(value: Number) -> Self {
        Attr::Number(value)
    }
}

impl From<Script> for Attr {
    fn from(value: Script) -> Self {
        Attr::Script(value)
    }
}
