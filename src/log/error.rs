use super::{Pointer, RED, RESET};
use crate::{log::Visual, region::Region};
use std::fmt::{Debug, Display, Formatter, Result};

/// A diagnostic with a reason, an optional help text and an optional caret
/// [`Pointer`] into the offending expression.
///
/// Rendering never returns an [`Error`]. They come from the diagnostic entry
/// points, [`compile`][`crate::compile`] and [`Engine::check`][`crate::Engine::check`],
/// and from inserting values that cannot be serialized into a
/// [`Store`][`crate::Store`].
///
/// # Examples
///
/// ```
/// use weft::{Error, Region};
///
/// let error = Error::build("unbalanced ternary")
///     .with_pointer("{{a}} ? 'x'", Region::new(6..7))
///     .with_help("add a `:` followed by the false branch");
///
/// assert_eq!(error.reason(), "unbalanced ternary");
/// ```
///
/// When printed with `println!("{:#}", error)` the [`Error`] produces this output:
///
/// ```text
/// error: unbalanced ternary
///  --> expression:7
///   |
///   | {{a}} ? 'x'
///   |       ^
///   |
///   = help: add a `:` followed by the false branch
/// ```
pub struct Error {
    /// Short cause, one of the constants in `log::message`.
    reason: String,
    /// Printed below the reason in the alternate form.
    visual: Option<Box<dyn Visual>>,
    /// Suggested fix.
    help: Option<String>,
}

impl Error {
    /// Start an [`Error`] from its reason.
    ///
    /// Chain [`with_pointer`][`Error::with_pointer`] and
    /// [`with_help`][`Error::with_help`] to add context.
    pub fn build<T>(reason: T) -> Self
    where
        T: Into<String>,
    {
        Error {
            reason: reason.into(),
            visual: None,
            help: None,
        }
    }

    /// Point at the [`Region`] of the expression text that caused the error.
    pub fn with_pointer<T>(mut self, source: &str, region: T) -> Self
    where
        T: Into<Region>,
    {
        self.visual = Some(Box::new(Pointer::new(source, region.into())));

        self
    }

    /// Attach a suggested fix.
    pub fn with_help<T>(mut self, text: T) -> Self
    where
        T: Into<String>,
    {
        self.help = Some(text.into());

        self
    }

    /// Return the reason text.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Return the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if !f.alternate() {
            writeln!(f, "{self:#}")?;
        }
        f.debug_struct("Error")
            .field("reason", &self.reason)
            .field("visual", &self.visual)
            .field("help", &self.help)
            .finish()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{RED}error{RESET}: {}", self.reason)?;

        match &self.visual {
            Some(visual) if f.alternate() => visual.display(f, self.help.as_deref()),
            _ => Ok(()),
        }
    }
}

impl std::error::Error for Error {}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.reason == other.reason && self.help == other.help
    }
}

#[cfg(test)]
mod tests {
    use super::Error;
    use crate::region::Region;

    #[test]
    fn test_display_plain() {
        let error = Error::build("unbalanced group").with_help("close the group");

        assert!(format!("{error}").ends_with("unbalanced group"));
        assert!(!format!("{error}").contains("help"));
    }

    #[test]
    fn test_display_alternate() {
        let error = Error::build("unbalanced group")
            .with_pointer("(a ? 'b' : 'c'", Region::new(0..1))
            .with_help("close the group with `)`");
        let shown = format!("{error:#}");

        assert!(shown.contains("(a ? 'b' : 'c'"));
        assert!(shown.contains("= help: close the group with `)`"));
    }

    #[test]
    fn test_equality_ignores_visual() {
        let left = Error::build("x").with_pointer("abc", Region::new(0..1));
        let right = Error::build("x");

        assert_eq!(left, right);
    }
}
