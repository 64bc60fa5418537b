use std::{
    cmp::{max, min},
    ops::{Index, Range},
};

/// Represents an area within expression text.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Region {
    /// The beginning of the range, inclusive.
    pub begin: usize,
    /// The ending of the range, exclusive.
    pub end: usize,
}

impl Region {
    /// Create a new [`Region`] from the given range.
    pub fn new(position: Range<usize>) -> Self {
        Self {
            begin: position.start,
            end: position.end,
        }
    }

    /// Create an empty [`Region`] located at the given offset.
    pub fn empty(at: usize) -> Self {
        Self { begin: at, end: at }
    }

    /// Combine will merge the indices of two [`Region`] instances.
    pub fn combine(self, other: Self) -> Self {
        Self {
            begin: min(self.begin, other.begin),
            end: max(self.end, other.end),
        }
    }

    /// Access the literal value of a [`Region`].
    ///
    /// Out of bounds regions are clamped to the source, so the result is
    /// empty rather than a panic.
    pub fn literal<'source>(&self, source: &'source str) -> &'source str {
        let end = min(self.end, source.len());
        let begin = min(self.begin, end);

        source.get(begin..end).unwrap_or_default()
    }
}

impl Index<Region> for str {
    type Output = str;

    fn index(&self, region: Region) -> &Self::Output {
        let Region { begin, end } = region;

        &self[begin..end]
    }
}

impl From<Range<usize>> for Region {
    fn from(value: Range<usize>) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine() {
        let combined = Region::new(5..10).combine(Region::new(8..15));

        assert_eq!(combined.begin, 5);
        assert_eq!(combined.end, 15);
    }

    #[test]
    fn test_literal() {
        let source = "{{kind}} === 'info'";
        let region = Region::new(13..19);

        assert_eq!(region.literal(source), "'info'");
    }

    #[test]
    fn test_literal_clamped() {
        let source = "'hi'";

        assert_eq!(Region::new(2..40).literal(source), "i'");
        assert_eq!(Region::new(30..40).literal(source), "");
    }

    #[test]
    fn test_empty() {
        assert_eq!(Region::empty(3), Region::new(3..3));
        assert_eq!(Region::empty(3).literal("abcdef"), "");
    }
}
