//! Reusable templates with default values.
use crate::{
    format::{format, Form},
    node::{Attr, Node},
    value::{Script, Value},
    Engine, Store,
};
use serde_json::Value as Json;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Name of the value that identifies a rendered component.
const ID: &str = "id";

/// Source of minted identifiers, shared by every [`Engine`].
static COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Return a new identifier made of the prefix and the next counter value,
/// such as `component-1`.
///
/// Identifiers are unique within the process, the counter never repeats a
/// value.
///
/// # Examples
///
/// ```
/// use weft::next_id;
///
/// let first = next_id("component");
/// let second = next_id("component");
///
/// assert!(first.starts_with("component-"));
/// assert_ne!(first, second);
/// ```
pub fn next_id(prefix: &str) -> String {
    let count = COUNTER.fetch_add(1, Ordering::Relaxed) + 1;
    let id = format!("{prefix}-{count}");
    tracing::trace!(%id, "minted component identifier");

    id
}

/// A template paired with default values and an optional default script.
///
/// # Examples
///
/// ```
/// use weft::{Attr, Engine, Node, Store};
///
/// let engine = Engine::default();
/// let button = engine
///     .component(
///         Node::element("button")
///             .with_attribute("class", "btn btn-{{variant}}")
///             .with_child(Node::text("{{children}}")),
///     )
///     .with_defaults(Store::new().with_must("variant", "primary"))
///     .with_script("bind({{id}});");
///
/// let output = button.render(&Store::new().with_must("id", "save"), &[Node::text("Save")]);
///
/// assert_eq!(output.attribute("class"), Some(&Attr::from("btn btn-primary")));
/// assert_eq!(output.attribute("id"), Some(&Attr::from("save")));
/// assert_eq!(output.children(), &[Node::text("Save")]);
/// assert_eq!(output.script().map(|s| s.code()), Some(r#"bind("save");"#));
/// ```
pub struct Component<'engine> {
    engine: &'engine Engine,
    template: Node,
    script: Option<Script>,
    defaults: Store,
}

impl<'engine> Component<'engine> {
    /// Create a new [`Component`] without defaults or a script.
    pub fn new(engine: &'engine Engine, template: Node) -> Self {
        Self {
            engine,
            template,
            script: None,
            defaults: Store::new(),
        }
    }

    /// Set the default script, attached to every render that does not
    /// provide a script of its own.
    ///
    /// Returns the [`Component`], so additional methods may be chained.
    pub fn with_script<T>(mut self, script: T) -> Self
    where
        T: Into<Script>,
    {
        self.script = Some(script.into());

        self
    }

    /// Set the default values, which caller values override.
    ///
    /// Returns the [`Component`], so additional methods may be chained.
    pub fn with_defaults(mut self, defaults: Store) -> Self {
        self.defaults = defaults;

        self
    }

    pub fn template(&self) -> &Node {
        &self.template
    }

    pub fn defaults(&self) -> &Store {
        &self.defaults
    }

    pub fn script(&self) -> Option<&Script> {
        self.script.as_ref()
    }

    /// Render the component with the given values, splicing the children
    /// wherever the child marker appears.
    ///
    /// When neither the caller nor the defaults name a non-blank `id`, one is
    /// minted with [`next_id`]. The identifier is set on the root of the
    /// output unless the template gives the root an `id` attribute itself, or
    /// the root is a text leaf.
    ///
    /// The output carries at most one script. A script already attached by
    /// the template wins, then a script supplied under the script key, then
    /// the default script. Supplying any value under the script key opts out
    /// of the default script.
    pub fn render(&self, values: &Store, children: &[Node]) -> Node {
        let mut merged = self.defaults.overlay(values);
        if is_blank(merged.get(ID)) {
            merged.insert_value(ID, next_id(self.engine.options().id_prefix()));
        }

        let mut output = self.engine.interpolate(&self.template, &merged, children);
        if !output.is_text() && output.attribute(ID).is_none() {
            let id = format(merged.get(ID), Form::Unwrapped);
            output.insert_attribute(ID.to_string(), Attr::Text(id));
        }
        if output.script().is_none() {
            if let Some(script) = self.select_script(values) {
                output.attach_script(self.engine.substitute_script(&script, &merged));
            }
        }

        output
    }

    /// Return the script to attach when the template attached none.
    fn select_script(&self, values: &Store) -> Option<Script> {
        match values.get(self.engine.options().script_key()) {
            Some(Value::Script(script)) => Some(script.clone()),
            Some(Value::Json(Json::String(code))) if !code.trim().is_empty() => {
                Some(Script::new(code.as_str()))
            }
            Some(_) => {
                tracing::debug!("caller value under the script key replaces the default script");
                None
            }
            None => self.script.clone().filter(|script| !script.is_blank()),
        }
    }
}

/// Return true if the value has no usable identifier text.
fn is_blank(value: Option<&Value>) -> bool {
    format(value, Form::Unwrapped).trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::{next_id, Component};
    use crate::{
        node::{Attr, Node},
        options::Options,
        value::Script,
        Engine, Store,
    };
    use std::{collections::HashSet, thread};

    #[test]
    fn test_defaults_merge_idempotent() {
        let engine = Engine::default();
        let defaults = Store::new()
            .with_must("id", "card")
            .with_must("variant", "primary")
            .with_must("elevated", true);
        let component = helper_card(&engine).with_defaults(defaults.clone());

        let empty = component.render(&Store::new(), &[]);
        let same = component.render(&defaults, &[]);

        assert_eq!(empty, same);
    }

    #[test]
    fn test_caller_overrides_defaults() {
        let engine = Engine::default();
        let component = helper_card(&engine).with_defaults(
            Store::new()
                .with_must("variant", "primary")
                .with_must("elevated", true),
        );

        let output = component.render(&Store::new().with_must("variant", "danger"), &[]);

        assert_eq!(output.attribute("class"), Some(&Attr::from("card card-danger")));
        assert_eq!(output.attribute("data-elevated"), Some(&Attr::Bool(true)));
    }

    #[test]
    fn test_id_stable_when_supplied() {
        let engine = Engine::default();
        let component = helper_card(&engine);
        let values = Store::new().with_must("id", "profile");

        let first = component.render(&values, &[]);
        let second = component.render(&values, &[]);

        assert_eq!(first.attribute("id"), Some(&Attr::from("profile")));
        assert_eq!(first.attribute("id"), second.attribute("id"));
    }

    #[test]
    fn test_id_minted_when_absent_or_blank() {
        let engine = Engine::new(Options::new().with_id_prefix("card"));
        let component = helper_card(&engine);

        let first = component.render(&Store::new(), &[]);
        let second = component.render(&Store::new().with_must("id", "  "), &[]);
        let first_id = first.attribute("id").and_then(Attr::as_text).unwrap();
        let second_id = second.attribute("id").and_then(Attr::as_text).unwrap();

        assert!(first_id.starts_with("card-"));
        assert!(second_id.starts_with("card-"));
        assert_ne!(first_id, second_id);
    }

    #[test]
    fn test_template_id_attribute_kept() {
        let engine = Engine::default();
        let component = Component::new(
            &engine,
            Node::element("section").with_attribute("id", "section-{{id}}"),
        );

        let output = component.render(&Store::new().with_must("id", "a"), &[]);

        assert_eq!(output.attribute("id"), Some(&Attr::from("section-a")));
    }

    #[test]
    fn test_default_script_attached_once() {
        let engine = Engine::default();
        let component = helper_card(&engine).with_script("init({{id}}, {{variant}});");

        let output = component.render(&Store::new().with_must("id", "c"), &[]);

        assert_eq!(output.script(), Some(&Script::new(r#"init("c", null);"#)));
        assert!(output.children().iter().all(|child| child.script().is_none()));
    }

    #[test]
    fn test_caller_script_wins() {
        let engine = Engine::default();
        let component = helper_card(&engine).with_script("fallback();");
        let values = Store::new()
            .with_must("id", "c")
            .with_script("script", "custom({{id}});");

        let output = component.render(&values, &[]);

        assert_eq!(output.script(), Some(&Script::new(r#"custom("c");"#)));
    }

    #[test]
    fn test_caller_script_text() {
        let engine = Engine::default();
        let component = helper_card(&engine).with_script("fallback();");

        let output = component.render(&Store::new().with_must("script", "go({{id}});"), &[]);
        let blank = component.render(&Store::new().with_must("script", " "), &[]);

        assert!(output.script().is_some_and(|script| script.code().starts_with("go(\"component-")));
        assert_eq!(blank.script(), None);
    }

    #[test]
    fn test_caller_script_key_opts_out() {
        let engine = Engine::default();
        let component = helper_card(&engine).with_script("fallback();");

        let output = component.render(&Store::new().with_must("script", false), &[]);

        assert_eq!(output.script(), None);
    }

    #[test]
    fn test_template_script_not_doubled() {
        let engine = Engine::default();
        let template = Node::element("div").with_attribute("onload", "{{script}}");
        let component = Component::new(&engine, template).with_script("fallback();");
        let values = Store::new().with_script("script", "mine();");

        let output = component.render(&values, &[]);

        assert_eq!(output.script(), Some(&Script::new("mine();")));
        assert!(output.attribute("onload").is_none());
    }

    #[test]
    fn test_blank_default_script_skipped() {
        let engine = Engine::default();
        let component = helper_card(&engine).with_script("   ");

        assert_eq!(component.render(&Store::new(), &[]).script(), None);
    }

    #[test]
    fn test_children_injected() {
        let engine = Engine::default();
        let component = helper_card(&engine);
        let children = [Node::element("h2").with_content("Title")];

        let output = component.render(&Store::new(), &children);

        assert_eq!(output.children()[0].children(), &children);
    }

    #[test]
    fn test_list_in_mixed_content() {
        let engine = Engine::default();
        let component = Component::new(
            &engine,
            Node::element("p")
                .with_attribute("data-items", "items: {{items}}")
                .with_child(Node::text("{{items}}")),
        );

        let output = component.render(&Store::new().with_must("items", ["a", "b", "c"]), &[]);

        assert_eq!(
            output.attribute("data-items"),
            Some(&Attr::from(r#"items: ["a","b","c"]"#))
        );
        assert_eq!(output.children(), &[Node::text(r#"["a","b","c"]"#)]);
    }

    #[test]
    fn test_expression_examples() {
        let engine = Engine::default();
        let component = Component::new(
            &engine,
            Node::element("div")
                .with_attribute("data-a", "${{{a}} ? 'x' : 'y'}")
                .with_attribute("data-nested", "${{{a}} ? ({{b}} ? 'x' : 'y') : 'z'}")
                .with_attribute("data-type", "${{{type}} === 'success' ? 'A' : 'B'}")
                .with_attribute("data-trim", "${'hi'.trim() ? 'shown' : 'hidden'}"),
        );
        let attribute = |values: &Store, name: &str| {
            let output = component.render(values, &[]);
            output.attribute(name).and_then(Attr::as_text).map(str::to_string)
        };

        let on = Store::new()
            .with_must("a", true)
            .with_must("b", false)
            .with_must("type", "success");
        let off = Store::new()
            .with_must("a", false)
            .with_must("b", true)
            .with_must("type", "error");

        assert_eq!(attribute(&on, "data-a").as_deref(), Some("x"));
        assert_eq!(attribute(&off, "data-a").as_deref(), Some("y"));
        assert_eq!(attribute(&on, "data-nested").as_deref(), Some("y"));
        assert_eq!(attribute(&off, "data-nested").as_deref(), Some("z"));
        assert_eq!(attribute(&on, "data-type").as_deref(), Some("A"));
        assert_eq!(attribute(&off, "data-type").as_deref(), Some("B"));
        assert_eq!(attribute(&on, "data-trim").as_deref(), Some("shown"));
    }

    #[test]
    fn test_marker_only_template() {
        let engine = Engine::default();
        let component = engine.component(Node::text("{{children}}"));
        let children = [Node::element("b")];

        let output = component.render(&Store::new(), &children);

        assert!(output.attributes().is_empty());
        assert_eq!(output.children(), &children);
    }

    #[test]
    fn test_trim_fed_by_placeholder() {
        let engine = Engine::default();
        let component = Component::new(
            &engine,
            Node::element("span").with_attribute("class", "${{{label}}.trim() ? 'a' : 'b'}"),
        );

        let blank = component.render(&Store::new().with_must("label", "  "), &[]);
        let filled = component.render(&Store::new().with_must("label", " hi "), &[]);
        let missing = component.render(&Store::new(), &[]);

        assert_eq!(blank.attribute("class"), Some(&Attr::from("b")));
        assert_eq!(filled.attribute("class"), Some(&Attr::from("a")));
        assert_eq!(missing.attribute("class"), Some(&Attr::from("b")));
    }

    #[test]
    fn test_next_id_unique_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| (0..100).map(|_| next_id("t")).collect::<Vec<_>>()))
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().unwrap() {
                assert!(seen.insert(id), "identifier minted twice");
            }
        }
        assert_eq!(seen.len(), 800);
    }

    /// Helper function which returns a card component with a class derived
    /// from `variant` and a child marker inside its body.
    fn helper_card(engine: &Engine) -> Component<'_> {
        Component::new(
            engine,
            Node::element("div")
                .with_attribute("class", "card card-{{variant}}")
                .with_attribute("data-elevated", "{{elevated}}")
                .with_child(Node::element("div").with_child(Node::text("{{children}}"))),
        )
    }
}
