//! Weft - Node Template Engine
//!
//! Turns a template tree of [`Node`] values into an output tree, replacing
//! `{{name}}` placeholders with values from a [`Store`] and evaluating
//! `${ ... }` expression blocks.
//!
//! ```
//! use weft::{Attr, Engine, Node, Store};
//!
//! let engine = Engine::default();
//! let template = Node::element("div")
//!     .with_attribute("class", "alert ${{{type}} === 'success' ? 'green' : 'red'}")
//!     .with_child(Node::text("{{message}}"));
//! let store = Store::new()
//!     .with_must("type", "success")
//!     .with_must("message", "Saved");
//!
//! let output = engine.interpolate(&template, &store, &[]);
//!
//! assert_eq!(output.attribute("class"), Some(&Attr::from("alert green")));
//! assert_eq!(output.children(), &[Node::text("Saved")]);
//! ```
mod compile;
mod component;
mod engine;
mod format;
mod log;
mod node;
mod options;
mod region;
mod render;
mod store;
mod syntax;
mod value;

pub use compile::{compile, tree, Expression, Operator};
pub use component::{next_id, Component};
pub use engine::Engine;
pub use format::{format, Form};
pub use log::{Error, Pointer, Visual};
pub use node::{Attr, Node};
pub use options::Options;
pub use region::Region;
pub use render::{evaluate, evaluate_expression};
pub use store::Store;
pub use value::{Script, Value};

/// Substitute placeholders and expressions in text with a default [`Engine`].
///
/// Provides a shortcut when no [`Options`] are needed. Prefer keeping an
/// `Engine` when substituting many texts.
///
/// # Examples
///
/// ```
/// use weft::{substitute, Store};
///
/// let store = Store::new().with_must("type", "error");
/// let text = substitute("alert ${{{type}} === 'success' ? 'green' : 'red'}", &store);
///
/// assert_eq!(text, "alert red");
/// ```
pub fn substitute(text: &str, store: &Store) -> String {
    Engine::default().substitute(text, store)
}
