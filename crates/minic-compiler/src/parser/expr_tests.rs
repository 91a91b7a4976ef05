use crate::parser::parse;
use crate::syntax::dump;

/// Wrap an expression in the smallest valid program and dump the tree.
fn expr(src: &str) -> String {
    let source = format!("class C {{ public int main() {{ x = {src}; }} }}");
    match parse(&source) {
        Ok(tree) => dump(&tree),
        Err(e) => format!("error: {}", e.message),
    }
}

fn expr_err(src: &str) -> String {
    let source = format!("class C {{ public int main() {{ x = {src}; }} }}");
    parse(&source).unwrap_err().message
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    insta::assert_snapshot!(expr("1 + 2 * 3"), @r"
    Class C
      Function public int main
        Block
          Assignment
            Variable x
            Binary +
              Number 1
              Binary *
                Number 2
                Number 3
    ");
}

#[test]
fn parentheses_override_precedence() {
    insta::assert_snapshot!(expr("(1 + 2) * 3"), @r"
    Class C
      Function public int main
        Block
          Assignment
            Variable x
            Binary *
              Binary +
                Number 1
                Number 2
              Number 3
    ");
}

#[test]
fn redundant_parentheses_collapse() {
    insta::assert_snapshot!(expr("((y))"), @r"
    Class C
      Function public int main
        Block
          Assignment
            Variable x
            Variable y
    ");
}

#[test]
fn equal_precedence_stays_on_the_stack() {
    // The yard pops only strictly tighter operators, so same-level
    // chains associate to the right.
    insta::assert_snapshot!(expr("a - b + c"), @r"
    Class C
      Function public int main
        Block
          Assignment
            Variable x
            Binary -
              Variable a
              Binary +
                Variable b
                Variable c
    ");
}

#[test]
fn logical_or_binds_loosest() {
    insta::assert_snapshot!(expr("a || b && c"), @r"
    Class C
      Function public int main
        Block
          Assignment
            Variable x
            Binary ||
              Variable a
              Binary &&
                Variable b
                Variable c
    ");
}

#[test]
fn unary_minus_at_expression_start() {
    insta::assert_snapshot!(expr("-y"), @r"
    Class C
      Function public int main
        Block
          Assignment
            Variable x
            Unary -
              Variable y
    ");
}

#[test]
fn unary_minus_after_an_operator() {
    insta::assert_snapshot!(expr("1 - -2"), @r"
    Class C
      Function public int main
        Block
          Assignment
            Variable x
            Binary -
              Number 1
              Unary -
                Number 2
    ");
}

#[test]
fn logical_not_binds_tighter_than_and() {
    insta::assert_snapshot!(expr("!a && b"), @r"
    Class C
      Function public int main
        Block
          Assignment
            Variable x
            Binary &&
              Unary !
                Variable a
              Variable b
    ");
}

#[test]
fn greater_equal_rewrites_to_less_with_swapped_operands() {
    insta::assert_snapshot!(expr("b >= c"), @r"
    Class C
      Function public int main
        Block
          Assignment
            Variable x
            Binary <
              Variable c
              Variable b
    ");
}

#[test]
fn less_equal_rewrites_to_greater_with_swapped_operands() {
    insta::assert_snapshot!(expr("b <= c"), @r"
    Class C
      Function public int main
        Block
          Assignment
            Variable x
            Binary >
              Variable c
              Variable b
    ");
}

#[test]
fn plain_comparisons_are_left_alone() {
    insta::assert_snapshot!(expr("b < c"), @r"
    Class C
      Function public int main
        Block
          Assignment
            Variable x
            Binary <
              Variable b
              Variable c
    ");
}

#[test]
fn canonicalized_trees_never_contain_ge_or_le() {
    let tree = expr("a <= b >= c");
    assert!(!tree.contains("Binary >="));
    assert!(!tree.contains("Binary <="));
    insta::assert_snapshot!(tree, @r"
    Class C
      Function public int main
        Block
          Assignment
            Variable x
            Binary >
              Binary <
                Variable c
                Variable b
              Variable a
    ");
}

#[test]
fn nested_array_indexing() {
    insta::assert_snapshot!(expr("a[i[j]]"), @r"
    Class C
      Function public int main
        Block
          Assignment
            Variable x
            Index a
              Index i
                Variable j
    ");
}

// Errors

#[test]
fn unbalanced_open_paren_is_fatal() {
    assert_eq!(expr_err("(1 + 2"), "in expression, expected `)` after `(`");
}

#[test]
fn stray_close_paren_is_fatal() {
    assert_eq!(expr_err("1 + 2)"), "in expression, expected `(` before `)`");
}

#[test]
fn empty_expression_is_fatal() {
    assert_eq!(expr_err(""), "in expression, expected an operand");
}

#[test]
fn operator_without_operand_is_fatal() {
    assert_eq!(
        expr_err("1 +"),
        "in expression, operator `+` is missing an operand"
    );
}

#[test]
fn operands_without_operator_are_fatal() {
    assert_eq!(
        expr_err("1 2"),
        "in expression, operands are missing an operator"
    );
}
