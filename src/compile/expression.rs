use super::tree::Tree;

/// A compiled expression, the text of a `${ ... }` block.
///
/// The [`Tree`] refers back into the source through regions, so the original
/// spelling of every operand is available during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression<'source> {
    /// The tree generated during compilation.
    pub tree: Tree,
    /// Reference to the source text from which this [`Expression`] was generated.
    pub source: &'source str,
}
