//! Unit tests for the AST printer.

use super::printer::print_ast;
use crate::{
    ast::{ast::Program, statements::Stmt},
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn parse_source(source: &str) -> Program {
    parse(tokenize(source, Some("test.js".to_string()))).unwrap()
}

fn lines(expected: &[&str]) -> String {
    expected.join("\n")
}

#[test]
fn test_print_variable_declaration() {
    let program = parse_source("var x = 10;");

    assert_eq!(
        print_ast(&program),
        lines(&[
            "Program",
            "  body:",
            "    VariableDeclaration",
            "      kind: \"var\"",
            "      declarations:",
            "        VariableDeclarator",
            "          id:",
            "            Identifier",
            "              name: \"x\"",
            "          init:",
            "            Literal",
            "              value: 10",
            "              raw: \"10\"",
        ])
    );
}

#[test]
fn test_print_missing_initializer_is_null() {
    let program = parse_source("let a;");

    let printed = print_ast(&program);
    assert!(printed.contains("      kind: \"let\""));
    assert!(printed.ends_with("          init: null"));
}

#[test]
fn test_print_empty_lists_and_null_argument() {
    let program = parse_source("function f() { return; }");

    assert_eq!(
        print_ast(&program),
        lines(&[
            "Program",
            "  body:",
            "    FunctionDeclaration",
            "      id:",
            "        Identifier",
            "          name: \"f\"",
            "      params: []",
            "      body:",
            "        BlockStatement",
            "          body:",
            "            ReturnStatement",
            "              argument: null",
        ])
    );
}

#[test]
fn test_print_single_statement() {
    let program = parse_source("-a[0];");
    let Stmt::Expression(stmt) = &program.body[0] else {
        panic!("expected an expression statement");
    };

    assert_eq!(
        print_ast(&stmt.expression),
        lines(&[
            "UnaryExpression",
            "  operator: \"-\"",
            "  prefix: true",
            "  argument:",
            "    MemberExpression",
            "      object:",
            "        Identifier",
            "          name: \"a\"",
            "      property:",
            "        Literal",
            "          value: 0",
            "          raw: \"0\"",
            "      computed: true",
        ])
    );
}

#[test]
fn test_print_call_with_string_argument() {
    let program = parse_source("console.log(\"Hello\");");

    assert_eq!(
        print_ast(&program.body[0]),
        lines(&[
            "ExpressionStatement",
            "  expression:",
            "    CallExpression",
            "      callee:",
            "        MemberExpression",
            "          object:",
            "            Identifier",
            "              name: \"console\"",
            "          property:",
            "            Identifier",
            "              name: \"log\"",
            "          computed: false",
            "      arguments:",
            "        Literal",
            "          value: \"Hello\"",
            "          raw: \"Hello\"",
        ])
    );
}

#[test]
fn test_print_if_without_else() {
    let program = parse_source("if (ok) x = 1;");

    assert_eq!(
        print_ast(&program.body[0]),
        lines(&[
            "IfStatement",
            "  test:",
            "    Identifier",
            "      name: \"ok\"",
            "  consequent:",
            "    ExpressionStatement",
            "      expression:",
            "        AssignmentExpression",
            "          operator: \"=\"",
            "          left:",
            "            Identifier",
            "              name: \"x\"",
            "          right:",
            "            Literal",
            "              value: 1",
            "              raw: \"1\"",
            "  alternate: null",
        ])
    );
}

#[test]
fn test_print_literals() {
    let program = parse_source("[1.5, true, null, 'hi'];");
    let printed = print_ast(&program);

    assert!(printed.contains("ArrayExpression"));
    assert!(printed.contains("value: 1.5\n"));
    assert!(printed.contains("value: true\n"));
    assert!(printed.contains("value: null\n"));
    assert!(printed.contains("raw: \"null\""));
    assert!(printed.ends_with("value: \"hi\"\n              raw: \"hi\""));
}

#[test]
fn test_print_empty_program() {
    let program = parse_source("");

    assert_eq!(print_ast(&program), "Program\n  body: []");
}

#[test]
fn test_print_has_no_trailing_newline() {
    let program = parse_source("a + b;");
    let printed = print_ast(&program);

    assert!(!printed.ends_with('\n'));
    assert_eq!(printed, print_ast(&parse_source("a + b;")));
}
