mod pointer;

pub use pointer::Pointer;

use std::fmt::{Debug, Formatter, Result};

const BLANK: &str = "";
const PIPE: &str = "|";
const EQUAL: &str = "=";
const HIGHLIGHT: &str = "^";

/// Something an [`Error`][`crate::Error`] can draw beneath its reason.
pub trait Visual: Debug + Send + Sync {
    /// Write the drawing, ending with the help text when there is one.
    fn display(&self, formatter: &mut Formatter<'_>, help: Option<&str>) -> Result;
}

/// Display width of the text, wide characters count twice.
fn get_width(text: &str) -> usize {
    unicode_width::UnicodeWidthStr::width(text)
}
