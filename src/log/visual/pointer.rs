use std::{
    cmp::max,
    fmt::{Formatter, Result},
};

use super::{
    super::{RESET, YELLOW},
    get_width, Visual, BLANK, EQUAL, HIGHLIGHT, PIPE,
};
use crate::region::Region;

/// A type of [`Visual`] that underlines a [`Region`] of an expression.
///
/// Expressions live on a single line, so only the display column and the
/// display width of the highlighted text are tracked.
#[derive(Debug, PartialEq)]
pub struct Pointer {
    /// Zero indexed display column where the highlight begins.
    column: usize,
    /// Display width of the highlighted text, at least one.
    length: usize,
    /// The expression text being pointed into.
    text: String,
}

impl Pointer {
    /// Create a new [`Pointer`] over the given source text and [`Region`].
    pub fn new(source: &str, region: Region) -> Self {
        let prefix = Region::new(0..region.begin).literal(source);

        Self {
            column: get_width(prefix),
            length: max(1, get_width(region.literal(source))),
            text: source.to_string(),
        }
    }
}

impl Visual for Pointer {
    fn display(&self, formatter: &mut Formatter<'_>, help: Option<&str>) -> Result {
        let col = self.column + 1;
        let align = self.column + self.length;
        let text = &self.text;
        let underline = HIGHLIGHT.repeat(self.length);

        write!(
            formatter,
            "\n --> expression:{col}\
             \n  {PIPE}\
             \n  {PIPE} {text}\
             \n  {PIPE} {YELLOW}{underline:>align$}{RESET}\
             \n  {PIPE}\n",
        )?;

        if let Some(help) = help {
            writeln!(formatter, "{BLANK:1} {EQUAL} help: {help}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Pointer;
    use crate::region::Region;

    #[test]
    fn test_pointer_column() {
        let pointer = Pointer::new("'a' ? 'b'", Region::new(4..5));

        assert_eq!(pointer.column, 4);
        assert_eq!(pointer.length, 1);
    }

    #[test]
    fn test_pointer_wide_characters() {
        let pointer = Pointer::new("'日本' ? x", Region::new(9..10));

        // Each CJK character occupies two display columns.
        assert_eq!(pointer.column, 7);
    }

    #[test]
    fn test_pointer_empty_region() {
        let pointer = Pointer::new("'open", Region::empty(5));

        assert_eq!(pointer.column, 5);
        assert_eq!(pointer.length, 1);
    }
}
