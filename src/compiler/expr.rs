use crate::{
    ast::types::Type,
    type_checker::{
        registry::{self, OperatorTag},
        typed_ast::{TypedCallExpr, TypedExpr, TypedInfixExpr},
    },
};

use super::compiler::Compiler;

/// Emits the declarations computing `expression` and returns the C++
/// expression naming its value: a temporary, an identifier, or an inline
/// `Bool` constructor.
pub fn gen_expression(compiler: &mut Compiler, expression: &TypedExpr) -> String {
    match expression {
        TypedExpr::Integer(integer) => {
            compiler.declare_temp(Type::Int, &format!("Int({})", integer.value))
        }
        TypedExpr::String(string) => {
            let literal = escape_string(&string.value);

            // A char pointer stops at the first NUL, so pass the byte length
            let value = if string.value.contains('\0') {
                format!("String(std::string(\"{}\", {}))", literal, string.value.len())
            } else {
                format!("String(\"{}\")", literal)
            };
            compiler.declare_temp(Type::String, &value)
        }
        TypedExpr::Boolean(boolean) => {
            if boolean.value {
                String::from("Bool(\"true\")")
            } else {
                String::from("Bool(\"false\")")
            }
        }
        TypedExpr::Identifier(identifier) => identifier.value.clone(),
        TypedExpr::Infix(infix) => gen_infix(compiler, infix),
        TypedExpr::Call(call) => gen_call(compiler, call),
    }
}

fn gen_infix(compiler: &mut Compiler, infix: &TypedInfixExpr) -> String {
    let left = gen_expression(compiler, &infix.left);
    let right = gen_expression(compiler, &infix.right);

    let Some(signature) = registry::resolve_method(infix.operand_type, infix.tag) else {
        panic!(
            "type {} has no method {} for operator `{}`",
            infix.operand_type, infix.tag, infix.operator
        );
    };

    compiler.declare_temp(
        signature.return_type,
        &format!("{}.{}({})", left, infix.tag.method_name(), right),
    )
}

fn gen_call(compiler: &mut Compiler, call: &TypedCallExpr) -> String {
    let arguments: Vec<String> = call
        .arguments
        .iter()
        .map(|argument| gen_expression(compiler, argument))
        .collect();

    if call.is_builtin {
        let Some(signature) = registry::resolve_method(call.resolved_type, OperatorTag::Print)
        else {
            panic!("type {} cannot be printed", call.resolved_type);
        };

        compiler.declare_temp(
            signature.return_type,
            &format!("{}.{}()", arguments[0], OperatorTag::Print.method_name()),
        )
    } else {
        let signature = compiler.function_signature(&call.callee);

        compiler.declare_temp(
            signature.return_type,
            &format!("{}({})", call.callee, arguments.join(", ")),
        )
    }
}

/// Escapes a decoded string literal for a C++ string literal.
pub fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            '\0' => escaped.push_str("\\000"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
