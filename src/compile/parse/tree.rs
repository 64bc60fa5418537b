use crate::{compile::Operator, region::Region};

/// The tree of a compiled expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Tree {
    /// A single quoted literal, evaluates to its unquoted text.
    String(Region),
    /// Anything else without a ternary, evaluates to its source text.
    Verbatim(Region),
    /// `condition ? then : else`.
    Ternary(Ternary),
}

/// A conditional choosing between two branches.
#[derive(Debug, Clone, PartialEq)]
pub struct Ternary {
    pub condition: Condition,
    pub then_branch: Box<Tree>,
    pub else_branch: Box<Tree>,
    /// Location of the whole Ternary.
    pub region: Region,
}

/// The condition of a [`Ternary`].
///
/// Operands are regions of the source, compared by their unquoted text.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Both sides are truthy.
    And(Box<Condition>, Box<Condition>),
    /// Either side is truthy.
    Or(Box<Condition>, Box<Condition>),
    /// The operand of a trailing `.trim()` is not blank.
    Trim(Region),
    /// Two operands compared with an [`Operator`].
    Compare {
        left: Region,
        operator: Operator,
        right: Region,
    },
    /// A bare `true` or `false`.
    Boolean(bool),
    /// Any other operand, checked for truthiness.
    Truthy(Region),
}
