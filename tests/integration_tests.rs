//! Integration tests for end-to-end compilation.
//!
//! These tests verify that the complete compilation pipeline works correctly
//! from source code through tokenization, parsing, type checking, and C++
//! generation.

use std::rc::Rc;

use meego::{
    compile_source,
    compiler::compiler::compile,
    errors::errors::ErrorKind,
    format_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::{type_check, TypeChecker},
};

#[test]
fn test_compile_simple_program() {
    let output = compile_source("let x = 42;\nprint(x);", "test.mg").unwrap();

    assert!(output.contains("Int tmp_1 = Int(42);\nInt x = tmp_1;\n"));
    assert!(output.contains("Nothing tmp_2 = x.PRINT();\n"));
}

#[test]
fn test_compile_function() {
    let output = compile_source(
        "fn add(a: Int, b: Int) -> Int { return a + b; }\nprint(add(1, 2));",
        "test.mg",
    )
    .unwrap();

    assert!(output.contains("Int add(Int a, Int b) {\n"));
    assert!(output.contains("Int tmp_4 = add(tmp_2, tmp_3);\n"));
    assert!(output.contains("Nothing tmp_5 = tmp_4.PRINT();\n"));
}

#[test]
fn test_compile_multiple_functions() {
    let source = r#"
        fn square(n: Int) -> Int {
            return n * n;
        }

        fn describe(n: Int) -> String {
            if n > 10 {
                print("large");
            } else {
                print("small");
            }
            return "done";
        }

        let value = square(4);
        print(describe(value));
    "#;

    let output = compile_source(source, "test.mg").unwrap();

    let square_at = output.find("Int square(Int n) {").unwrap();
    let describe_at = output.find("String describe(Int n) {").unwrap();
    let main_at = output.find("int main() {").unwrap();
    assert!(square_at < describe_at && describe_at < main_at);
}

#[test]
fn test_compile_control_flow() {
    let source = r#"
        let count = 0;
        let flag = count < 5 and true;
        if flag {
            count = count + 1;
        } else if count > 100 {
            print("overflow");
        }
        print(count);
    "#;

    let output = compile_source(source, "test.mg").unwrap();

    assert_eq!(output.matches("if (\"true\" == ").count(), 2);
    assert_eq!(output.matches("} else {\n").count(), 2);
    assert!(output.contains("count = tmp_"));
}

#[test]
fn test_compile_string_concatenation() {
    let output = compile_source(
        "let greeting = \"Hello, \" + \"world\";\nprint(greeting);",
        "test.mg",
    )
    .unwrap();

    assert!(output.contains("String tmp_3 = tmp_1.PLUS(tmp_2);\n"));
    assert!(output.contains("String greeting = tmp_3;\n"));
}

#[test]
fn test_comments_are_ignored() {
    let output = compile_source("// a comment\nlet x = 1; // trailing\n", "test.mg").unwrap();
    assert!(output.contains("Int x = tmp_1;\n"));
}

#[test]
fn test_pipeline_stages() {
    let source = "fn inc(n: Int) -> Int { return n + 1; }\nlet two = inc(1);";

    let tokens = tokenize(source.to_string(), Some("test.mg".to_string())).unwrap();
    let program = parse(tokens, Rc::new("test.mg".to_string())).unwrap();
    assert_eq!(program.functions.len(), 1);
    assert_eq!(program.statements.len(), 1);

    let (type_checker, typed) = type_check(&program).unwrap();
    assert!(type_checker.lookup_function_signature("inc").is_some());

    let first = compile(&typed, &type_checker);
    let second = compile(&typed, &type_checker);
    assert_eq!(first, second);
    assert_eq!(first, compile_source(source, "test.mg").unwrap());
}

#[test]
fn test_recheck_gives_same_output() {
    let source = "let a = 1 + 2;\nprint(a);";
    let tokens = tokenize(source.to_string(), Some("test.mg".to_string())).unwrap();
    let program = parse(tokens, Rc::new("test.mg".to_string())).unwrap();

    let mut type_checker = TypeChecker::new();
    let first = type_checker.check(&program).unwrap();
    let first_output = compile(&first, &type_checker);

    let second = type_checker.check(&program).unwrap();
    assert_eq!(first_output, compile(&second, &type_checker));
}

#[test]
fn test_error_kinds_through_pipeline() {
    let cases = [
        ("let x = #;", ErrorKind::Lexical),
        ("let x = ;", ErrorKind::Syntax),
        ("fn f(a: Float) { }", ErrorKind::UnknownType),
        ("let x = 1;\nlet x = 2;", ErrorKind::DuplicateBinding),
        ("print(y);", ErrorKind::UnboundIdentifier),
        ("if 1 { } else { }", ErrorKind::TypeMismatch),
        (
            "fn add(a: Int, b: Int) -> Int { return a + b; }\nadd(1);",
            ErrorKind::ArityMismatch,
        ),
        ("\"a\" * \"b\";", ErrorKind::UnsupportedOperator),
        ("nowhere();", ErrorKind::UnknownFunction),
        ("fn print() { }", ErrorKind::BuiltinRedefinition),
        ("let tmp_1 = 5;", ErrorKind::ReservedName),
    ];

    for (source, kind) in cases {
        let error = compile_source(source, "test.mg").unwrap_err();
        assert_eq!(error.kind(), kind, "source: {}", source);
    }
}

#[test]
fn test_argument_mismatch_message() {
    let error = compile_source(
        "fn f(a: Int) -> Int { return a; }\nf(\"x\");",
        "test.mg",
    )
    .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::TypeMismatch);
    assert_eq!(
        error.to_string(),
        "argument types do not match in call to \"f\": expected Int, received String"
    );
}

#[test]
fn test_error_report_points_at_source() {
    let source = "let total = 1;\nlet total = 2;\n";
    let error = compile_source(source, "report.mg").unwrap_err();

    let report = format_error(&error, source);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(
        lines[0],
        "Error: VariableAlreadyDeclared (Variable `total` already declared)"
    );
    assert_eq!(lines[1], "-> report.mg");
    assert_eq!(lines[3], "2 | let total = 2;");
    assert_eq!(lines[4], "  | ^");
}
