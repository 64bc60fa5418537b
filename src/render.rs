mod compare;
mod evaluate;
mod substitute;

pub use evaluate::{evaluate, evaluate_expression};
pub use substitute::Substitutor;

use crate::{
    format::{format, Form},
    node::{Attr, Node},
    value::{Script, Value},
    Engine, Store,
};
use serde_json::Value as Json;
use substitute::exact_placeholder;

/// Interpolates a template tree against a [`Store`].
pub struct Renderer<'engine, 'store> {
    /// Substitutes placeholders and expressions in text.
    substitutor: Substitutor<'engine, 'store>,
    /// Values referenced by the template.
    store: &'store Store,
    /// Nodes spliced in place of the child marker.
    children: &'store [Node],
    /// The child marker, such as `{{children}}`.
    marker: String,
}

impl<'engine, 'store> Renderer<'engine, 'store> {
    /// Create a new Renderer.
    pub fn new(engine: &'engine Engine, store: &'store Store, children: &'store [Node]) -> Self {
        Self {
            substitutor: Substitutor::new(engine.finder(), store),
            store,
            children,
            marker: engine.options().child_marker(),
        }
    }

    /// Render the template into a new tree.
    ///
    /// The template is never modified. A text leaf holding only the child
    /// marker renders as a tagless node wrapping the caller's children.
    pub fn render(&self, template: &Node) -> Node {
        let mut output = Node::element(template.tag());

        if template.is_text() && template.content().is_some_and(|c| self.is_marker(c)) {
            self.splice(&mut output);
            return output;
        }

        for (name, attribute) in template.attributes() {
            self.render_attribute(name, attribute, &mut output);
        }
        if let Some(script) = template.script() {
            self.attach(script, &mut output);
        }

        match template.content() {
            Some(content) if self.is_marker(content) => self.splice(&mut output),
            Some(content) => {
                output.set_content(Some(self.substitutor.substitute(content, Form::Unwrapped)))
            }
            None => {}
        }

        for child in template.children() {
            match child.content() {
                Some(content) if child.is_text() && self.is_marker(content) => {
                    self.splice(&mut output)
                }
                _ => output.push_child(self.render(child)),
            }
        }

        output
    }

    /// Render one attribute into the output node.
    fn render_attribute(&self, name: &str, attribute: &Attr, output: &mut Node) {
        match attribute {
            Attr::Script(script) => self.attach(script, output),
            Attr::Text(text) => match exact_placeholder(text) {
                Some(key) => self.render_exact(name, key, output),
                None => output.insert_attribute(
                    name.to_string(),
                    Attr::Text(self.substitutor.substitute(text, Form::Unwrapped)),
                ),
            },
            Attr::Bool(_) | Attr::Number(_) => {
                output.insert_attribute(name.to_string(), attribute.clone())
            }
        }
    }

    /// Render an attribute that is exactly one placeholder.
    ///
    /// Booleans and numbers keep their kind and a script moves to the script
    /// slot, anything else becomes unwrapped text.
    fn render_exact(&self, name: &str, key: &str, output: &mut Node) {
        let attribute = match self.store.get(key) {
            Some(Value::Script(script)) => return self.attach(script, output),
            Some(Value::Json(Json::Bool(boolean))) => Attr::Bool(*boolean),
            Some(Value::Json(Json::Number(number))) => Attr::Number(number.clone()),
            value => {
                if value.is_none() {
                    tracing::trace!(name = key, "no value for placeholder");
                }
                Attr::Text(format(value, Form::Unwrapped))
            }
        };

        output.insert_attribute(name.to_string(), attribute);
    }

    /// Interpolate the script with literal forms and attach it to the output.
    fn attach(&self, script: &Script, output: &mut Node) {
        let code = self.substitutor.substitute(script.code(), Form::Literal);

        if !output.attach_script(Script::new(code)) {
            tracing::debug!(tag = output.tag(), "node already has a script, ignoring another");
        }
    }

    /// Push a copy of every caller child onto the output.
    fn splice(&self, output: &mut Node) {
        for child in self.children {
            output.push_child(child.clone());
        }
    }

    fn is_marker(&self, content: &str) -> bool {
        content.trim() == self.marker
    }
}
