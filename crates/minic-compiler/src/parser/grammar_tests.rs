use indoc::indoc;

use crate::parser::parse;
use crate::syntax::dump;

fn snapshot(input: &str) -> String {
    match parse(input) {
        Ok(tree) => dump(&tree),
        Err(e) => format!("error: {}", e.message),
    }
}

fn err(input: &str) -> String {
    parse(input).unwrap_err().message
}

#[test]
fn minimal_main() {
    let input = indoc! {r"
        class C {
            public int main() {
                int a;
                a = 3;
                print(a);
            }
        }
    "};

    insta::assert_snapshot!(snapshot(input), @r"
    Class C
      Function public int main
        Block
          Declaration
            Declarator a: int
          Assignment
            Variable a
            Number 3
          Print
            Variable a
    ");
}

#[test]
fn empty_class() {
    insta::assert_snapshot!(snapshot("class C { }"), @"Class C");
}

#[test]
fn empty_block() {
    let input = "class C { public int main() {} }";

    insta::assert_snapshot!(snapshot(input), @r"
    Class C
      Function public int main
        Block
    ");
}

#[test]
fn declarations_with_arrays() {
    let input = indoc! {r"
        class C {
            public int main() {
                int a[10], b[3] = {1, 2, 3}, c;
                double d;
            }
        }
    "};

    insta::assert_snapshot!(snapshot(input), @r"
    Class C
      Function public int main
        Block
          Declaration
            Declarator a: int[10]
            Declarator b: int[3] = {1, 2, 3}
            Declarator c: int
          Declaration
            Declarator d: double
    ");
}

#[test]
fn class_level_include_and_declaration() {
    let input = indoc! {r#"
        class C {
            #include "stdio.h"
            int g;
            public int main() {}
        }
    "#};

    insta::assert_snapshot!(snapshot(input), @r#"
    Class C
      Include "stdio.h"
      Declaration
        Declarator g: int
      Function public int main
        Block
    "#);
}

#[test]
fn functions_with_parameters() {
    let input = indoc! {r"
        class C {
            public int add(int a, double b);
            private double half(double x) {
                return x;
            }
        }
    "};

    insta::assert_snapshot!(snapshot(input), @r"
    Class C
      Function public int add
        Param a: int
        Param b: double
      Function private double half
        Param x: double
        Block
          Return
            Variable x
    ");
}

#[test]
fn if_else_if_else_flattens_into_arms() {
    let input = indoc! {r"
        class C {
            public int main() {
                int a;
                a = 0;
                if (a < 1) {
                    a = 1;
                } else if (a < 2) {
                    a = 2;
                } else {
                    a = 3;
                }
            }
        }
    "};

    insta::assert_snapshot!(snapshot(input), @r"
    Class C
      Function public int main
        Block
          Declaration
            Declarator a: int
          Assignment
            Variable a
            Number 0
          If
            Condition
              Binary <
                Variable a
                Number 1
            Block
              Assignment
                Variable a
                Number 1
            Condition
              Binary <
                Variable a
                Number 2
            Block
              Assignment
                Variable a
                Number 2
            Block
              Assignment
                Variable a
                Number 3
    ");
}

#[test]
fn while_loop() {
    let input = indoc! {r"
        class C {
            public int main() {
                int i;
                i = 0;
                while (i < 10) {
                    i = i + 1;
                }
            }
        }
    "};

    insta::assert_snapshot!(snapshot(input), @r"
    Class C
      Function public int main
        Block
          Declaration
            Declarator i: int
          Assignment
            Variable i
            Number 0
          While
            Condition
              Binary <
                Variable i
                Number 10
            Block
              Assignment
                Variable i
                Binary +
                  Variable i
                  Number 1
    ");
}

#[test]
fn while_condition_with_nested_parens() {
    let input = "class C { public int main() { while ((1) || 0) {} } }";

    insta::assert_snapshot!(snapshot(input), @r"
    Class C
      Function public int main
        Block
          While
            Condition
              Binary ||
                Number 1
                Number 0
            Block
    ");
}

#[test]
fn for_desugars_to_while_with_trailing_step() {
    let input = indoc! {r"
        class C {
            public int main() {
                int i;
                for (i = 0; i < 10; i = i + 1) {
                    print(i);
                }
            }
        }
    "};

    insta::assert_snapshot!(snapshot(input), @r"
    Class C
      Function public int main
        Block
          Declaration
            Declarator i: int
          Assignment
            Variable i
            Number 0
          While
            Condition
              Binary <
                Variable i
                Number 10
            Block
              Print
                Variable i
              Assignment
                Variable i
                Binary +
                  Variable i
                  Number 1
    ");
}

#[test]
fn print_takes_strings_and_expressions() {
    let input = indoc! {r#"
        class C {
            public int main() {
                int a;
                a = 1;
                print("value", a, a + 1);
            }
        }
    "#};

    insta::assert_snapshot!(snapshot(input), @r#"
    Class C
      Function public int main
        Block
          Declaration
            Declarator a: int
          Assignment
            Variable a
            Number 1
          Print
            StringLit "value"
            Variable a
            Binary +
              Variable a
              Number 1
    "#);
}

#[test]
fn statement_level_calls() {
    let input = indoc! {r"
        class C {
            public int main() {
                int a;
                a = 2;
                update(a, a * 2);
                reset();
            }
        }
    "};

    insta::assert_snapshot!(snapshot(input), @r"
    Class C
      Function public int main
        Block
          Declaration
            Declarator a: int
          Assignment
            Variable a
            Number 2
          Call update
            Arg
              Variable a
            Arg
              Binary *
                Variable a
                Number 2
          Call reset
    ");
}

#[test]
fn return_with_and_without_value() {
    let input = indoc! {r"
        class C {
            public int main() {
                return 0;
            }
            private int nothing() {
                return;
            }
        }
    "};

    insta::assert_snapshot!(snapshot(input), @r"
    Class C
      Function public int main
        Block
          Return
            Number 0
      Function private int nothing
        Block
          VoidReturn
    ");
}

#[test]
fn indexed_assignment_and_indexed_reads() {
    let input = indoc! {r"
        class C {
            public int main() {
                a[i + 1] = 2;
                x = a[0] + 1;
            }
        }
    "};

    insta::assert_snapshot!(snapshot(input), @r"
    Class C
      Function public int main
        Block
          Assignment
            Index a
              Binary +
                Variable i
                Number 1
            Number 2
          Assignment
            Variable x
            Binary +
              Index a
                Number 0
              Number 1
    ");
}

#[test]
fn stray_semicolons_are_skipped() {
    let input = "class C { public int main() { ;; int a; ; } }";

    insta::assert_snapshot!(snapshot(input), @r"
    Class C
      Function public int main
        Block
          Declaration
            Declarator a: int
    ");
}

// Errors

#[test]
fn source_must_start_with_a_class() {
    assert_eq!(err("int a;"), "everything should be wrapped in a class");
}

#[test]
fn class_name_is_required() {
    assert_eq!(err("class { }"), "expected a class name after `class`");
}

#[test]
fn statements_do_not_parse_at_class_level() {
    assert_eq!(
        err("class C { print(1); }"),
        "at class level, unidentified symbol `print`"
    );
}

#[test]
fn tokens_after_the_class_body_are_rejected() {
    assert_eq!(
        err("class C { } int x;"),
        "unexpected `int` after the class body"
    );
}

#[test]
fn missing_array_close_bracket_is_fatal() {
    assert_eq!(
        err("class C { public int main() { int a[10; } }"),
        "Expected `]` after a statement of an array"
    );
}

#[test]
fn do_is_an_unsupported_control_statement() {
    assert_eq!(
        err("class C { public int main() { do } }"),
        "unsupported control statement"
    );
}

#[test]
fn while_requires_a_braced_body() {
    assert_eq!(
        err("class C { public int main() { while (1) print(1); } }"),
        "Expected `{` after `while (condition)`"
    );
}

#[test]
fn parameter_list_needs_comma_or_close() {
    assert_eq!(
        err("class C { public int f(int a int b) {} }"),
        "in function statement's parameter list, should be `,` or `)` after"
    );
}

#[test]
fn print_with_a_missing_close_paren() {
    assert_eq!(
        err("class C { public int main() { int a; a = 1; print(a } }"),
        "expected `)` to close the argument list"
    );
}

#[test]
fn declarations_cannot_carry_scalar_initializers() {
    assert_eq!(
        err("class C { public int main() { int a = 3; } }"),
        "in block, unidentified symbol `int` found"
    );
}

#[test]
fn bare_identifier_is_not_a_statement() {
    assert_eq!(
        err("class C { public int main() { a; } }"),
        "in block, unidentified symbol `a` found"
    );
}
