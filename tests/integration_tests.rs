//! Integration tests for the full pipeline.
//!
//! These tests drive source text through tokenizing, parsing, printing and
//! error rendering using only the public API.

use std::thread;

use minijs::{
    ast::{
        ast::{ExprType, StmtType},
        statements::Stmt,
    },
    format_error,
    lexer::{
        lexer::{scan, tokenize, tokenize_strict},
        tokens::TokenKind,
    },
    parser::parser::parse,
    printer::printer::print_ast,
};

const PROGRAM: &str = r#"
var greeting = "Hello";
let count = 0, limit = 10;

function step(n, by) {
    if (n >= limit) {
        return null;
    } else if (n % 2 === 0) {
        return n + by * 2;
    }
    return -n;
}

count = step(count, 1);
console.log(greeting, [count, limit][0]);
"#;

fn print_source(source: &str) -> String {
    let program = parse(tokenize(source, Some("input.js".to_string()))).unwrap();
    print_ast(&program)
}

#[test]
fn test_parse_full_program() {
    let program = parse(tokenize(PROGRAM, Some("input.js".to_string()))).unwrap();

    let types: Vec<StmtType> = program.iter().map(Stmt::get_stmt_type).collect();
    assert_eq!(
        types,
        [
            StmtType::VariableDeclaration,
            StmtType::VariableDeclaration,
            StmtType::FunctionDeclaration,
            StmtType::ExpressionStatement,
            StmtType::ExpressionStatement,
        ]
    );

    let Stmt::Expression(assignment) = &program.body[3] else {
        panic!("expected an expression statement");
    };
    assert_eq!(
        assignment.expression.get_expr_type(),
        ExprType::AssignmentExpression
    );
}

#[test]
fn test_print_full_program_is_deterministic() {
    let first = print_source(PROGRAM);
    let second = print_source(PROGRAM);

    assert_eq!(first, second);
    assert!(first.starts_with("Program\n  body:\n    VariableDeclaration"));
    assert!(first.contains("FunctionDeclaration"));
    assert!(first.contains("operator: \"===\""));
    assert!(first.contains("argument: null") || first.contains("value: null"));
    assert!(!first.ends_with('\n'));
}

#[test]
fn test_print_expression_statement() {
    assert_eq!(
        print_source("a * (b + c)"),
        [
            "Program",
            "  body:",
            "    ExpressionStatement",
            "      expression:",
            "        BinaryExpression",
            "          operator: \"*\"",
            "          left:",
            "            Identifier",
            "              name: \"a\"",
            "          right:",
            "            BinaryExpression",
            "              operator: \"+\"",
            "              left:",
            "                Identifier",
            "                  name: \"b\"",
            "              right:",
            "                Identifier",
            "                  name: \"c\"",
        ]
        .join("\n")
    );
}

#[test]
fn test_unrecognised_characters_are_skipped() {
    let source = "var x = 1 # 2;";

    let scanned = scan(source, None);
    assert_eq!(scanned.skipped.len(), 1);
    assert_eq!(scanned.skipped[0].character, '#');
    assert_eq!(scanned.skipped[0].position.0, 10);

    // `1 2` is two expression statements once `#` is dropped
    let program = parse(scanned.tokens).unwrap();
    assert_eq!(program.body.len(), 2);
}

#[test]
fn test_strict_mode_rejects_unrecognised_characters() {
    let source = "let total = price @ 2;";
    let error = tokenize_strict(source, Some("input.js".to_string())).unwrap_err();

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(
        format_error(&error, source),
        [
            "Error: UnrecognisedToken",
            "-> input.js",
            "  |",
            "1 | let total = price @ 2;",
            "  | ------------------^",
        ]
        .join("\n")
    );
}

#[test]
fn test_syntax_error_report() {
    let source = "var ok = 1;\nvar = 10;";
    let error = parse(tokenize(source, Some("input.js".to_string()))).unwrap_err();

    assert!(error.is_syntax_error());
    assert_eq!(
        error.to_string(),
        "expected Identifier, found Operator `=`"
    );

    let rendered = format_error(&error, source);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines[0],
        "Error: ExpectedToken (Expected Identifier, found Operator `=`)"
    );
    assert_eq!(lines[3], "2 | var = 10;");
    assert_eq!(lines[4], "  | ----^");
}

#[test]
fn test_error_at_end_of_input() {
    let source = "foo(1,";
    let error = parse(tokenize(source, None)).unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().0, 6);

    let rendered = format_error(&error, source);
    assert!(rendered.starts_with("Error: UnexpectedToken (Input ended where an expression was expected)"));
    assert!(rendered.contains("-> shell"));
}

#[test]
fn test_token_stream_ends_once() {
    let tokens = tokenize(PROGRAM, None);

    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::EOF).count(),
        1
    );
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EOF));
}

#[test]
fn test_independent_parses_on_threads() {
    let expected = print_source(PROGRAM);

    let handles: Vec<_> = (0..4)
        .map(|_| thread::spawn(|| print_source(PROGRAM)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_program_is_returned_from_worker_thread() {
    let handle = thread::spawn(|| parse(tokenize(PROGRAM, Some("input.js".to_string()))));
    let program = handle.join().unwrap().unwrap();

    assert_eq!(program.body.len(), 5);
    assert_eq!(program.span.start.1.as_str(), "input.js");
    assert_eq!(print_ast(&program), print_source(PROGRAM));
}

#[test]
fn test_deep_nesting_reports_an_error() {
    let source = format!("x = {}1{};", "[".repeat(5_000), "]".repeat(5_000));

    let error = thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(move || parse(tokenize(&source, None)).map(|_| ()))
        .unwrap()
        .join()
        .unwrap()
        .unwrap_err();

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert!(error.is_syntax_error());
    assert_eq!(error.to_string(), "nesting deeper than 256 levels");
}
