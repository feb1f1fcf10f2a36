use crate::type_checker::typed_ast::{TypedBlockStmt, TypedFnDeclStmt, TypedStmt};

use super::{compiler::Compiler, expr::gen_expression};

pub fn gen_statement(compiler: &mut Compiler, statement: &TypedStmt) {
    match statement {
        TypedStmt::Expression(expression_stmt) => {
            let result = gen_expression(compiler, &expression_stmt.expression);
            compiler.write(&format!("{};\n", result));
        }
        TypedStmt::Assign(assign) => {
            let result = gen_expression(compiler, &assign.value);
            compiler.write(&format!("{} = {};\n", assign.identifier, result));
        }
        TypedStmt::Init(init) => {
            let result = gen_expression(compiler, &init.value);
            compiler.write(&format!(
                "{} {} = {};\n",
                init.var_type, init.identifier, result
            ));
        }
        TypedStmt::Return(return_stmt) => {
            let result = gen_expression(compiler, &return_stmt.value);

            // main returns a plain int, so a top-level return only exits
            if compiler.in_function() {
                compiler.write(&format!("return {};\n", result));
            } else {
                compiler.write("return 0;\n");
            }
        }
        TypedStmt::Block(block) => {
            compiler.write("{\n");
            gen_block(compiler, block);
            compiler.write("}\n");
        }
        TypedStmt::If(if_stmt) => {
            let condition = gen_expression(compiler, &if_stmt.condition);

            // Bool wraps the strings "true" and "false"
            compiler.write(&format!("if (\"true\" == {}.val) {{\n", condition));
            gen_block(compiler, &if_stmt.then_body);
            compiler.write("} else {\n");
            gen_block(compiler, &if_stmt.else_body);
            compiler.write("}\n");
        }
    }
}

pub fn gen_block(compiler: &mut Compiler, block: &TypedBlockStmt) {
    for statement in block.iter() {
        gen_statement(compiler, statement);
    }
}

/// Emits `Ret name(Type a, Type b) { ... }`.
pub fn gen_function(compiler: &mut Compiler, function: &TypedFnDeclStmt) {
    let parameters = function
        .parameters
        .iter()
        .map(|(name, ty)| format!("{} {}", ty, name))
        .collect::<Vec<String>>()
        .join(", ");

    compiler.write(&format!(
        "{} {}({}) {{\n",
        function.return_type, function.identifier, parameters
    ));
    compiler.set_in_function(true);
    gen_block(compiler, &function.body);
    compiler.set_in_function(false);
    compiler.write("}\n\n");
}
