//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Bindings and assignments
//! - Function declarations and hoisting
//! - Expressions and precedence
//! - Control flow statements
//! - Syntax errors

use std::rc::Rc;

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        types::Type,
    },
    errors::errors::{Error, ErrorKind},
    lexer::lexer::tokenize,
};

use super::parser::parse;

fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source.to_string(), Some("test.mg".to_string())).unwrap();
    parse(tokens, Rc::new("test.mg".to_string()))
}

#[test]
fn test_parse_init_binding() {
    let program = parse_source("let x = 42;").unwrap();

    assert!(program.functions.is_empty());
    match &program.statements[0] {
        Stmt::Init(init) => {
            assert_eq!(init.identifier, "x");
            assert!(matches!(&init.value, Expr::Integer(int) if int.value == 42));
        }
        other => panic!("expected init statement, got {:?}", other),
    }
}

#[test]
fn test_integer_leading_zeros_are_decimal() {
    let program = parse_source("let x = 010;").unwrap();

    match &program.statements[0] {
        Stmt::Init(init) => assert!(matches!(&init.value, Expr::Integer(int) if int.value == 10)),
        other => panic!("expected init statement, got {:?}", other),
    }
}

#[test]
fn test_parse_assignment() {
    let program = parse_source("x = \"hi\";").unwrap();

    match &program.statements[0] {
        Stmt::Assign(assign) => {
            assert_eq!(assign.identifier, "x");
            assert!(matches!(&assign.value, Expr::String(string) if string.value == "hi"));
        }
        other => panic!("expected assign statement, got {:?}", other),
    }
}

#[test]
fn test_parse_function_declaration() {
    let program =
        parse_source("fn add(a: Int, b: Int) -> Int { return a + b; }").unwrap();

    let function = &program.functions[0];
    assert_eq!(function.identifier, "add");
    assert_eq!(
        function.parameters,
        vec![("a".to_string(), Type::Int), ("b".to_string(), Type::Int)]
    );
    assert_eq!(function.return_type, Type::Int);
    assert!(matches!(function.body.body[0], Stmt::Return(_)));
}

#[test]
fn test_parse_function_without_return_type() {
    let program = parse_source("fn greet() { print(\"hello\"); }").unwrap();

    assert_eq!(program.functions[0].return_type, Type::Nothing);
    assert!(program.functions[0].parameters.is_empty());
}

#[test]
fn test_functions_are_hoisted() {
    let program = parse_source(
        "let a = 1;\nfn one() -> Int { return 1; }\nprint(a);\nfn two() -> Int { return 2; }",
    )
    .unwrap();

    let names: Vec<&str> = program
        .functions
        .iter()
        .map(|function| function.identifier.as_str())
        .collect();
    assert_eq!(names, vec!["one", "two"]);
    assert_eq!(program.statements.len(), 2);
    assert!(matches!(program.statements[0], Stmt::Init(_)));
    assert!(matches!(program.statements[1], Stmt::Expression(_)));
}

#[test]
fn test_parse_if_else_statement() {
    let program = parse_source("if x > 0 { print(\"positive\"); } else { print(\"negative\"); }")
        .unwrap();

    match &program.statements[0] {
        Stmt::If(if_stmt) => {
            assert!(matches!(&if_stmt.condition, Expr::Infix(infix) if infix.operator == ">"));
            assert_eq!(if_stmt.then_body.body.len(), 1);
            assert_eq!(if_stmt.else_body.body.len(), 1);
        }
        other => panic!("expected if statement, got {:?}", other),
    }
}

#[test]
fn test_if_without_else_gets_empty_alternative() {
    let program = parse_source("if true { print(1); }").unwrap();

    match &program.statements[0] {
        Stmt::If(if_stmt) => assert!(if_stmt.else_body.body.is_empty()),
        other => panic!("expected if statement, got {:?}", other),
    }
}

#[test]
fn test_else_if_nests_in_alternative() {
    let program = parse_source("if a { } else if b { } else { }").unwrap();

    let Stmt::If(outer) = &program.statements[0] else {
        panic!("expected if statement");
    };
    assert_eq!(outer.else_body.body.len(), 1);
    assert!(matches!(outer.else_body.body[0], Stmt::If(_)));
}

#[test]
fn test_operator_precedence() {
    let program = parse_source("1 + 2 * 3 < 10 and true;").unwrap();

    let Stmt::Expression(stmt) = &program.statements[0] else {
        panic!("expected expression statement");
    };
    let Expr::Infix(and) = &stmt.expression else {
        panic!("expected infix");
    };
    assert_eq!(and.operator, "and");

    let Expr::Infix(less) = and.left.as_ref() else {
        panic!("expected comparison on the left");
    };
    assert_eq!(less.operator, "<");

    let Expr::Infix(plus) = less.left.as_ref() else {
        panic!("expected addition");
    };
    assert_eq!(plus.operator, "+");
    assert!(matches!(plus.right.as_ref(), Expr::Infix(times) if times.operator == "*"));
}

#[test]
fn test_left_associativity() {
    let program = parse_source("10 - 4 - 3;").unwrap();

    let Stmt::Expression(stmt) = &program.statements[0] else {
        panic!("expected expression statement");
    };
    let Expr::Infix(outer) = &stmt.expression else {
        panic!("expected infix");
    };
    assert!(matches!(outer.left.as_ref(), Expr::Infix(_)));
    assert!(matches!(outer.right.as_ref(), Expr::Integer(int) if int.value == 3));
}

#[test]
fn test_grouping_overrides_precedence() {
    let program = parse_source("(1 + 2) * 3;").unwrap();

    let Stmt::Expression(stmt) = &program.statements[0] else {
        panic!("expected expression statement");
    };
    let Expr::Infix(times) = &stmt.expression else {
        panic!("expected infix");
    };
    assert_eq!(times.operator, "*");
    assert!(matches!(times.left.as_ref(), Expr::Infix(plus) if plus.operator == "+"));
}

#[test]
fn test_symbolic_logical_operators_normalize() {
    let program = parse_source("a && b || c;").unwrap();

    let Stmt::Expression(stmt) = &program.statements[0] else {
        panic!("expected expression statement");
    };
    let Expr::Infix(or) = &stmt.expression else {
        panic!("expected infix");
    };
    assert_eq!(or.operator, "or");
    assert!(matches!(or.left.as_ref(), Expr::Infix(and) if and.operator == "and"));
}

#[test]
fn test_parse_call_arguments() {
    let program = parse_source("add(1, x, f(2));").unwrap();

    let Stmt::Expression(stmt) = &program.statements[0] else {
        panic!("expected expression statement");
    };
    let Expr::Call(call) = &stmt.expression else {
        panic!("expected call");
    };
    assert_eq!(call.callee, "add");
    assert_eq!(call.arguments.len(), 3);
    assert!(matches!(&call.arguments[2], Expr::Call(inner) if inner.callee == "f"));
}

#[test]
fn test_parse_nested_block() {
    let program = parse_source("{ let y = 1; { y = 2; } }").unwrap();

    let Stmt::Block(block) = &program.statements[0] else {
        panic!("expected block");
    };
    assert_eq!(block.body.len(), 2);
    assert!(matches!(block.body[1], Stmt::Block(_)));
}

#[test]
fn test_missing_semicolon() {
    let error = parse_source("let x = 1").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn test_unknown_type_annotation() {
    let error = parse_source("fn f(a: Float) -> Int { return 1; }").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnknownType);
}

#[test]
fn test_nested_function_rejected() {
    let error = parse_source("fn outer() { fn inner() { } }").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_return_requires_value() {
    let error = parse_source("fn f() { return; }").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn test_integer_literal_out_of_range() {
    let error = parse_source("let big = 99999999999999999999;").unwrap_err();
    assert_eq!(error.get_error_name(), "NumberParseError");
}

#[test]
fn test_unclosed_block() {
    let error = parse_source("if true { print(1);").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn test_call_on_non_identifier_rejected() {
    let error = parse_source("(1)(2);").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_statement_spans() {
    let program = parse_source("let x = 1;\nx = 2;").unwrap();

    let span = program.statements[1].get_span();
    assert_eq!(span.start.0, 11);
    assert_eq!(span.end.0, 17);
}
