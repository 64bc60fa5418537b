//! Markers recognized in template text.
//!
//! The markers are fixed, `{{name}}` for placeholders and `${ ... }` for
//! expression blocks. They are compiled once into a [`Finder`] owned by each
//! [`Engine`][`crate::Engine`].
use morel::{Finder, Syntax};

/// Markers that identify placeholders and expression blocks within text.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Marker {
    /// Beginning of a placeholder, `{{`.
    BeginPlaceholder = 0,
    /// End of a placeholder, `}}`.
    EndPlaceholder = 1,
    /// Beginning of an expression block, `${`. The block ends at the `}`
    /// that balances it.
    BeginExpression = 2,
}

impl Marker {
    /// Return the literal text of the [`Marker`].
    pub fn text(self) -> &'static str {
        match self {
            Marker::BeginPlaceholder => "{{",
            Marker::EndPlaceholder => "}}",
            Marker::BeginExpression => "${",
        }
    }
}

impl From<usize> for Marker {
    fn from(value: usize) -> Self {
        match value {
            0 => Self::BeginPlaceholder,
            1 => Self::EndPlaceholder,
            2 => Self::BeginExpression,
            _ => unreachable!(),
        }
    }
}

impl From<Marker> for usize {
    fn from(k: Marker) -> Self {
        k as usize
    }
}

/// Return a [`Finder`] that searches for every [`Marker`].
pub fn finder() -> Finder {
    let markers: Vec<(usize, String)> = [
        Marker::BeginPlaceholder,
        Marker::EndPlaceholder,
        Marker::BeginExpression,
    ]
    .into_iter()
    .map(|marker| (marker.into(), marker.text().to_string()))
    .collect();

    Finder::new(Syntax::new(markers))
}

#[cfg(test)]
mod tests {
    use super::{finder, Marker};

    #[test]
    fn test_marker_roundtrip() {
        for marker in [
            Marker::BeginPlaceholder,
            Marker::EndPlaceholder,
            Marker::BeginExpression,
        ] {
            assert_eq!(Marker::from(usize::from(marker)), marker);
        }
    }

    #[test]
    fn test_finder_next() {
        let finder = finder();
        let source = "btn ${{{a}} ? 'x' : 'y'}";

        let (id, begin, end) = finder.next(source, 0).unwrap();
        assert_eq!(Marker::from(id), Marker::BeginExpression);
        assert_eq!((begin, end), (4, 6));
    }

    #[test]
    fn test_finder_none() {
        assert!(finder().next("plain text", 0).is_none());
    }
}
