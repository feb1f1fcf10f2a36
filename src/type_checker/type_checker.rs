use log::{debug, warn};

use crate::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::{CallExpr, InfixExpr},
        statements::{BlockStmt, FnDeclStmt},
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    environment::Environment,
    registry::{self, OperatorTag, Signature},
    typed_ast::{
        TypedAssignStmt, TypedBlockStmt, TypedCallExpr, TypedExpr, TypedExpressionStmt,
        TypedFnDeclStmt, TypedIdentifierExpr, TypedIfStmt, TypedInfixExpr, TypedInitStmt,
        TypedProgram, TypedReturnStmt, TypedStmt,
    },
};

/// Holds the state of one type checking run.
///
/// After a successful check the environment keeps every registered
/// function signature, which the code generator reads back.
#[derive(Debug, Default)]
pub struct TypeChecker {
    pub environment: Environment,
    /// Functions declared inside statement lists, lifted to the top level
    hoisted: Vec<TypedFnDeclStmt>,
}

impl TypeChecker {
    pub fn new() -> Self {
        TypeChecker {
            environment: Environment::new(),
            hoisted: vec![],
        }
    }

    /// Checks a whole program against a fresh environment.
    ///
    /// Functions are checked and registered in declaration order before any
    /// top-level statement. Checking the same program twice gives the same
    /// result.
    pub fn check(&mut self, program: &Program) -> Result<TypedProgram, Error> {
        self.environment = Environment::new();
        self.hoisted.clear();

        let mut functions = vec![];
        for function in program.functions.iter() {
            functions.push(type_check_fn(self, function)?);
        }

        let (statements, _) = type_check_statements(self, &program.statements)?;

        functions.append(&mut self.hoisted);

        Ok(TypedProgram {
            functions,
            statements,
        })
    }

    pub fn lookup_function_signature(&self, name: &str) -> Option<&Signature> {
        self.environment.lookup_function_signature(name)
    }
}

pub fn type_check_expr(type_checker: &mut TypeChecker, ast: &Expr) -> Result<TypedExpr, Error> {
    match ast {
        Expr::Integer(integer) => Ok(TypedExpr::Integer(integer.clone())),
        Expr::String(string) => Ok(TypedExpr::String(string.clone())),
        Expr::Boolean(boolean) => Ok(TypedExpr::Boolean(boolean.clone())),
        Expr::Identifier(identifier) => {
            let Some(var_type) = type_checker.environment.lookup(&identifier.value) else {
                return Err(Error::new(
                    ErrorImpl::VariableNotDeclared {
                        variable: identifier.value.clone(),
                    },
                    identifier.span.start.clone(),
                ));
            };

            Ok(TypedExpr::Identifier(TypedIdentifierExpr {
                value: identifier.value.clone(),
                var_type,
                span: identifier.span.clone(),
            }))
        }
        Expr::Infix(infix) => type_check_infix(type_checker, infix),
        Expr::Call(call) => type_check_call(type_checker, call),
    }
}

fn type_check_infix(type_checker: &mut TypeChecker, infix: &InfixExpr) -> Result<TypedExpr, Error> {
    let left = type_check_expr(type_checker, &infix.left)?;
    let right = type_check_expr(type_checker, &infix.right)?;

    let operand_type = left.get_type();
    if operand_type != right.get_type() {
        return Err(Error::new(
            ErrorImpl::OperandTypeMismatch {
                operator: infix.operator.clone(),
                left: operand_type,
                right: right.get_type(),
            },
            right.get_span().start.clone(),
        ));
    }

    let Some(tag) = registry::operator_tag(&infix.operator)
        .filter(|tag| registry::has_method(operand_type, *tag))
    else {
        return Err(Error::new(
            ErrorImpl::UnsupportedOperator {
                operator: infix.operator.clone(),
                type_: operand_type,
            },
            infix.span.start.clone(),
        ));
    };

    let result_type = if registry::is_boolean_operator(&infix.operator) {
        Type::Bool
    } else {
        operand_type
    };

    Ok(TypedExpr::Infix(TypedInfixExpr {
        left: Box::new(left),
        operator: infix.operator.clone(),
        tag,
        right: Box::new(right),
        operand_type,
        result_type,
        span: infix.span.clone(),
    }))
}

fn type_check_call(type_checker: &mut TypeChecker, call: &CallExpr) -> Result<TypedExpr, Error> {
    if registry::is_builtin(&call.callee) {
        return type_check_builtin_call(type_checker, call);
    }

    let Some(signature) = type_checker
        .environment
        .lookup_function_signature(&call.callee)
        .cloned()
    else {
        return Err(Error::new(
            ErrorImpl::UnknownFunction {
                function: call.callee.clone(),
            },
            call.span.start.clone(),
        ));
    };

    check_arity(call, signature.parameters.len())?;

    let mut arguments = vec![];
    for (index, (argument, expected)) in call
        .arguments
        .iter()
        .zip(signature.parameters.iter())
        .enumerate()
    {
        let argument = type_check_expr(type_checker, argument)?;

        if argument.get_type() != *expected {
            return Err(Error::new(
                ErrorImpl::ArgumentTypeMismatch {
                    function: call.callee.clone(),
                    index,
                    expected: *expected,
                    received: argument.get_type(),
                },
                argument.get_span().start.clone(),
            ));
        }

        arguments.push(argument);
    }

    Ok(TypedExpr::Call(TypedCallExpr {
        callee: call.callee.clone(),
        arguments,
        is_builtin: false,
        resolved_type: signature.return_type,
        return_type: signature.return_type,
        span: call.span.clone(),
    }))
}

fn type_check_builtin_call(
    type_checker: &mut TypeChecker,
    call: &CallExpr,
) -> Result<TypedExpr, Error> {
    check_arity(call, 1)?;

    let argument = type_check_expr(type_checker, &call.arguments[0])?;
    let argument_type = argument.get_type();

    let Some(signature) = registry::resolve_method(argument_type, OperatorTag::Print) else {
        return Err(Error::new(
            ErrorImpl::UnsupportedOperator {
                operator: call.callee.clone(),
                type_: argument_type,
            },
            argument.get_span().start.clone(),
        ));
    };

    Ok(TypedExpr::Call(TypedCallExpr {
        callee: call.callee.clone(),
        arguments: vec![argument],
        is_builtin: true,
        resolved_type: argument_type,
        return_type: signature.return_type,
        span: call.span.clone(),
    }))
}

fn check_arity(call: &CallExpr, expected: usize) -> Result<(), Error> {
    let received = call.arguments.len();

    if received > expected {
        Err(Error::new(
            ErrorImpl::UnexpectedArguments { expected, received },
            call.arguments[expected].get_span().start.clone(),
        ))
    } else if received < expected {
        Err(Error::new(
            ErrorImpl::MissingArguments { expected, received },
            call.span.end.clone(),
        ))
    } else {
        Ok(())
    }
}

/// Checks a single statement.
///
/// Returns `None` for function declarations, which are lifted out of the
/// statement list.
pub fn type_check_stmt(
    type_checker: &mut TypeChecker,
    ast: &Stmt,
) -> Result<Option<TypedStmt>, Error> {
    let typed = match ast {
        Stmt::Expression(expression_stmt) => TypedStmt::Expression(TypedExpressionStmt {
            expression: type_check_expr(type_checker, &expression_stmt.expression)?,
            span: expression_stmt.span.clone(),
        }),
        Stmt::Return(return_stmt) => TypedStmt::Return(TypedReturnStmt {
            value: type_check_expr(type_checker, &return_stmt.value)?,
            span: return_stmt.span.clone(),
        }),
        Stmt::Block(block) => TypedStmt::Block(type_check_block(type_checker, block)?),
        Stmt::Init(init) => {
            check_name(&init.identifier, &init.span.start)?;

            if type_checker.environment.exists(&init.identifier) {
                return Err(Error::new(
                    ErrorImpl::VariableAlreadyDeclared {
                        variable: init.identifier.clone(),
                    },
                    init.span.start.clone(),
                ));
            }

            let value = type_check_expr(type_checker, &init.value)?;
            let var_type = value.get_type();
            type_checker.environment.bind(&init.identifier, var_type);

            TypedStmt::Init(TypedInitStmt {
                identifier: init.identifier.clone(),
                var_type,
                value,
                span: init.span.clone(),
            })
        }
        Stmt::Assign(assign) => {
            let value = type_check_expr(type_checker, &assign.value)?;

            let Some(expected) = type_checker.environment.lookup(&assign.identifier) else {
                return Err(Error::new(
                    ErrorImpl::VariableNotDeclared {
                        variable: assign.identifier.clone(),
                    },
                    assign.span.start.clone(),
                ));
            };

            if value.get_type() != expected {
                return Err(Error::new(
                    ErrorImpl::AssignmentTypeMismatch {
                        variable: assign.identifier.clone(),
                        expected,
                        received: value.get_type(),
                    },
                    value.get_span().start.clone(),
                ));
            }

            TypedStmt::Assign(TypedAssignStmt {
                identifier: assign.identifier.clone(),
                value,
                span: assign.span.clone(),
            })
        }
        Stmt::If(if_stmt) => {
            let condition = type_check_expr(type_checker, &if_stmt.condition)?;

            if condition.get_type() != Type::Bool {
                return Err(Error::new(
                    ErrorImpl::ConditionTypeMismatch {
                        received: condition.get_type(),
                    },
                    condition.get_span().start.clone(),
                ));
            }

            TypedStmt::If(TypedIfStmt {
                condition,
                then_body: type_check_block(type_checker, &if_stmt.then_body)?,
                else_body: type_check_block(type_checker, &if_stmt.else_body)?,
                span: if_stmt.span.clone(),
            })
        }
        Stmt::Function(function) => {
            let typed = type_check_fn(type_checker, function)?;
            type_checker.hoisted.push(typed);
            return Ok(None);
        }
    };

    Ok(Some(typed))
}

/// Checks statements in order until the first `return`.
///
/// Returns the checked statements and the type of that `return`, or
/// `Nothing` if there is none.
fn type_check_statements(
    type_checker: &mut TypeChecker,
    statements: &[Stmt],
) -> Result<(Vec<TypedStmt>, Type), Error> {
    let mut body = vec![];

    for (index, stmt) in statements.iter().enumerate() {
        let Some(typed) = type_check_stmt(type_checker, stmt)? else {
            continue;
        };

        if let TypedStmt::Return(return_stmt) = &typed {
            let result_type = return_stmt.value.get_type();

            if let Some(unreachable) = statements.get(index + 1) {
                warn!(
                    "{} statement(s) after return at offset {} in {} are never checked",
                    statements.len() - index - 1,
                    unreachable.get_span().start.0,
                    unreachable.get_span().start.1
                );
            }

            body.push(typed);
            return Ok((body, result_type));
        }

        body.push(typed);
    }

    Ok((body, Type::Nothing))
}

pub fn type_check_block(
    type_checker: &mut TypeChecker,
    ast: &BlockStmt,
) -> Result<TypedBlockStmt, Error> {
    type_checker.environment.push_scope();
    let checked = type_check_statements(type_checker, &ast.body);
    type_checker.environment.pop_scope();

    let (body, result_type) = checked?;

    Ok(TypedBlockStmt {
        body,
        result_type,
        span: ast.span.clone(),
    })
}

pub fn type_check_fn(
    type_checker: &mut TypeChecker,
    ast: &FnDeclStmt,
) -> Result<TypedFnDeclStmt, Error> {
    if registry::is_builtin(&ast.identifier) {
        return Err(Error::new(
            ErrorImpl::BuiltinRedefinition {
                function: ast.identifier.clone(),
            },
            ast.span.start.clone(),
        ));
    }

    check_name(&ast.identifier, &ast.span.start)?;

    let outer = type_checker.environment.isolate();
    let body = type_check_fn_body(type_checker, ast);
    type_checker.environment.restore(outer);
    let body = body?;

    if body.result_type != ast.return_type {
        return Err(Error::new(
            ErrorImpl::ReturnTypeMismatch {
                function: ast.identifier.clone(),
                expected: ast.return_type,
                received: body.result_type,
            },
            body.span.start.clone(),
        ));
    }

    let signature = Signature::new(
        ast.return_type,
        ast.parameters.iter().map(|(_, ty)| *ty).collect(),
    );
    debug!(
        "registered function {}({}) -> {}",
        ast.identifier,
        signature
            .parameters
            .iter()
            .map(|ty| ty.name())
            .collect::<Vec<_>>()
            .join(", "),
        signature.return_type
    );
    type_checker
        .environment
        .register_function_signature(&ast.identifier, signature);

    Ok(TypedFnDeclStmt {
        identifier: ast.identifier.clone(),
        parameters: ast.parameters.clone(),
        return_type: ast.return_type,
        body,
        span: ast.span.clone(),
    })
}

fn type_check_fn_body(
    type_checker: &mut TypeChecker,
    ast: &FnDeclStmt,
) -> Result<TypedBlockStmt, Error> {
    for (name, ty) in ast.parameters.iter() {
        check_name(name, &ast.span.start)?;

        if type_checker.environment.exists(name) {
            return Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: name.clone(),
                },
                ast.span.start.clone(),
            ));
        }
        type_checker.environment.bind(name, *ty);
    }

    type_check_block(type_checker, &ast.body)
}

/// Rejects user names that would collide with names in the generated C++.
fn check_name(name: &str, position: &Position) -> Result<(), Error> {
    if registry::is_reserved_name(name) {
        return Err(Error::new(
            ErrorImpl::ReservedName {
                name: name.to_string(),
            },
            position.clone(),
        ));
    }

    Ok(())
}

/// Type checks a program.
///
/// Returns the checker, whose environment holds the registered function
/// signatures, together with the typed program. Stops at the first error.
pub fn type_check(ast: &Program) -> Result<(TypeChecker, TypedProgram), Error> {
    let mut type_checker = TypeChecker::new();
    let typed_program = type_checker.check(ast)?;

    Ok((type_checker, typed_program))
}
