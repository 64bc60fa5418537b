use super::compare::{is_equal, is_filled, is_truthy, literal_text, unquote};
use crate::compile::{
    compile,
    tree::{Condition, Tree},
    Expression,
};

/// Evaluate the text of a `${ ... }` block.
///
/// Text that fails to compile is not an error, the result is its literal
/// reading: trimmed, and unquoted if it is one quoted literal.
///
/// # Examples
///
/// ```
/// use weft::evaluate;
///
/// assert_eq!(evaluate("\"success\" === 'success' ? 'green' : 'red'"), "green");
/// assert_eq!(evaluate("'  '.trim() ? 'shown' : 'hidden'"), "hidden");
/// assert_eq!(evaluate("true ? 'x'"), "true ? 'x'");
/// ```
pub fn evaluate(source: &str) -> String {
    match compile(source) {
        Ok(expression) => evaluate_expression(&expression),
        Err(error) => {
            tracing::debug!(reason = error.reason(), "using literal text of malformed expression");
            literal_text(source).into_owned()
        }
    }
}

/// Evaluate a compiled [`Expression`].
///
/// # Examples
///
/// ```
/// use weft::{compile, evaluate_expression};
///
/// let expression = compile("'a' !== 'b' ? 'yes' : 'no'").unwrap();
/// assert_eq!(evaluate_expression(&expression), "yes");
/// ```
pub fn evaluate_expression(expression: &Expression) -> String {
    evaluate_tree(&expression.tree, expression.source)
}

fn evaluate_tree(tree: &Tree, source: &str) -> String {
    match tree {
        Tree::String(region) => unquote(region.literal(source)).into_owned(),
        Tree::Verbatim(region) => region.literal(source).trim().to_string(),
        Tree::Ternary(ternary) => {
            let branch = if evaluate_condition(&ternary.condition, source) {
                &ternary.then_branch
            } else {
                &ternary.else_branch
            };

            evaluate_tree(branch, source)
        }
    }
}

fn evaluate_condition(condition: &Condition, source: &str) -> bool {
    match condition {
        Condition::And(left, right) => {
            evaluate_condition(left, source) && evaluate_condition(right, source)
        }
        Condition::Or(left, right) => {
            evaluate_condition(left, source) || evaluate_condition(right, source)
        }
        Condition::Trim(region) => is_filled(region.literal(source)),
        Condition::Compare {
            left,
            operator,
            right,
        } => is_equal(left.literal(source), right.literal(source)) != operator.is_negated(),
        Condition::Boolean(boolean) => *boolean,
        Condition::Truthy(region) => is_truthy(region.literal(source)),
    }
}

#[cfg(test)]
mod tests {
    use super::evaluate;

    #[test]
    fn test_evaluate_literal() {
        assert_eq!(evaluate("'x'"), "x");
        assert_eq!(evaluate(" btn-primary "), "btn-primary");
        assert_eq!(evaluate(""), "");
    }

    #[test]
    fn test_evaluate_compare() {
        assert_eq!(evaluate("\"success\" === 'success' ? 'green' : 'red'"), "green");
        assert_eq!(evaluate("\"error\" === 'success' ? 'green' : 'red'"), "red");
        assert_eq!(evaluate("1 != 2 ? 'x' : 'y'"), "x");
        assert_eq!(evaluate("'a' !== \"a\" ? 'x' : 'y'"), "y");
    }

    #[test]
    fn test_evaluate_logic() {
        assert_eq!(evaluate("true && null ? 'x' : 'y'"), "y");
        assert_eq!(evaluate("false || 'a' ? 'x' : 'y'"), "x");
        assert_eq!(evaluate("('a' === 'a') && (1 == 1) ? 'x' : 'y'"), "x");
    }

    #[test]
    fn test_evaluate_truthy() {
        assert_eq!(evaluate("true ? 'x' : 'y'"), "x");
        assert_eq!(evaluate("false ? 'x' : 'y'"), "y");
        assert_eq!(evaluate("null ? 'x' : 'y'"), "y");
        assert_eq!(evaluate("\"\" ? 'x' : 'y'"), "y");
        assert_eq!(evaluate("\"label\" ? 'x' : 'y'"), "x");
        assert_eq!(evaluate("0 ? 'x' : 'y'"), "x");
    }

    #[test]
    fn test_evaluate_trim() {
        assert_eq!(evaluate("'  '.trim() ? 'shown' : 'hidden'"), "hidden");
        assert_eq!(evaluate("' a '.trim() ? 'shown' : 'hidden'"), "shown");
    }

    #[test]
    fn test_evaluate_nested() {
        let source = "'b' === 'a' ? 'first' : 'b' === 'b' ? 'second' : 'third'";

        assert_eq!(evaluate(source), "second");
        assert_eq!(evaluate("true ? (false ? 'x' : 'y') : 'z'"), "y");
    }

    #[test]
    fn test_evaluate_group_without_ternary() {
        assert_eq!(evaluate("('a')"), "('a')");
        assert_eq!(evaluate("(true ? 'x' : 'y')"), "x");
        assert_eq!(evaluate("true ? ('x') : 'y'"), "x");
    }

    #[test]
    fn test_evaluate_unquoted_branch() {
        assert_eq!(evaluate("true ? btn-lg : btn-sm"), "btn-lg");
        assert_eq!(evaluate("false ? 1 : null"), "null");
    }

    #[test]
    fn test_evaluate_malformed() {
        assert_eq!(evaluate(" 'open "), "'open");
        assert_eq!(evaluate("true ? 'x'"), "true ? 'x'");
        assert_eq!(evaluate("(a"), "(a");
    }
}
