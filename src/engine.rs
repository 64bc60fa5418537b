use crate::{
    compile::compile,
    component::Component,
    format::Form,
    log::Error,
    node::Node,
    options::Options,
    render::{evaluate, Renderer, Substitutor},
    syntax, Script, Store,
};
use morel::Finder;

/// Facilitates interpolating templates, and holds the [`Options`] that name
/// the child marker, the script key and the identifier prefix.
///
/// An [`Engine`] is never modified by rendering.
pub struct Engine {
    /// Finds the markers of the template syntax.
    finder: Finder,
    /// Reserved names.
    options: Options,
}

impl Engine {
    /// Create a new [`Engine`] with the given [`Options`].
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::{Engine, Options};
    ///
    /// let engine = Engine::new(Options::new().with_children("slot"));
    /// assert_eq!(engine.options().child_marker(), "{{slot}}");
    /// ```
    pub fn new(options: Options) -> Self {
        Self {
            finder: syntax::finder(),
            options,
        }
    }

    /// Return the [`Options`] of this [`Engine`].
    #[inline]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[inline]
    pub(crate) fn finder(&self) -> &Finder {
        &self.finder
    }

    /// Substitute placeholders and expressions in text, using the unwrapped
    /// form of each value.
    ///
    /// A placeholder without a value is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::{Engine, Store};
    ///
    /// let engine = Engine::default();
    /// let store = Store::new().with_must("variant", "primary");
    ///
    /// assert_eq!(engine.substitute("btn btn-{{variant}}", &store), "btn btn-primary");
    /// assert_eq!(engine.substitute("btn {{size}}", &store), "btn ");
    /// ```
    pub fn substitute(&self, text: &str, store: &Store) -> String {
        Substitutor::new(&self.finder, store).substitute(text, Form::Unwrapped)
    }

    /// Substitute placeholders and expressions in a [`Script`], using the
    /// literal form of each value.
    ///
    /// A placeholder without a value becomes `null`.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::{Engine, Script, Store};
    ///
    /// let engine = Engine::default();
    /// let store = Store::new().with_must("items", ["a", "b"]);
    /// let script = engine.substitute_script(&Script::new("list({{items}}, {{x}})"), &store);
    ///
    /// assert_eq!(script.code(), r#"list(["a","b"], null)"#);
    /// ```
    pub fn substitute_script(&self, script: &Script, store: &Store) -> Script {
        Script::new(Substitutor::new(&self.finder, store).substitute(script.code(), Form::Literal))
    }

    /// Evaluate the text of a `${ ... }` block, whose placeholders have
    /// already been substituted.
    ///
    /// Malformed expressions evaluate to their literal text.
    #[inline]
    pub fn evaluate(&self, expression: &str) -> String {
        evaluate(expression)
    }

    /// Check that an expression compiles.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] pointing at the offending token when a string is
    /// unterminated, a group is unbalanced or a ternary lacks its `:`.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::Engine;
    ///
    /// let engine = Engine::default();
    ///
    /// assert!(engine.check("'a' === 'b' ? 'x' : 'y'").is_ok());
    /// assert!(engine.check("('a' ? 'x' : 'y'").is_err());
    /// ```
    pub fn check(&self, expression: &str) -> Result<(), Error> {
        compile(expression).map(|_| ())
    }

    /// Interpolate a template tree against a [`Store`], splicing the given
    /// children wherever the child marker appears.
    ///
    /// Returns a new tree, the template is left as it was.
    ///
    /// # Examples
    ///
    /// ```
    /// use weft::{Engine, Node, Store};
    ///
    /// let engine = Engine::default();
    /// let template = Node::element("button")
    ///     .with_attribute("class", "btn btn-{{variant}}")
    ///     .with_child(Node::text("{{children}}"));
    /// let store = Store::new().with_must("variant", "primary");
    ///
    /// let output = engine.interpolate(&template, &store, &[Node::text("Save")]);
    ///
    /// assert_eq!(output.attribute("class").and_then(|a| a.as_text()), Some("btn btn-primary"));
    /// assert_eq!(output.children(), &[Node::text("Save")]);
    /// ```
    pub fn interpolate(&self, template: &Node, store: &Store, children: &[Node]) -> Node {
        Renderer::new(self, store, children).render(template)
    }

    /// Create a [`Component`] from a template tree.
    #[inline]
    pub fn component(&self, template: Node) -> Component<'_> {
        Component::new(self, template)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Options::default())
    }
}
