//! Typed Abstract Syntax Tree definitions.
//!
//! This module contains the typed variants of AST nodes produced by
//! the type checker. Each typed node has been validated for type
//! correctness and carries whatever the code generator needs:
//! - Resolved types for identifiers and bindings
//! - The operand type and operator tag of every infix operation
//! - The resolved and return types of every call
//!
//! Literal nodes carry no extra information and reuse the untyped
//! structs. This typed AST is consumed by the code generator to produce C++.

use std::slice::Iter;

use crate::{
    ast::{
        expressions::{BooleanExpr, IntegerExpr, StringExpr},
        types::Type,
    },
    Span,
};

use super::registry::OperatorTag;

/// A checked program, functions first.
#[derive(Debug, Clone)]
pub struct TypedProgram {
    pub functions: Vec<TypedFnDeclStmt>,
    pub statements: Vec<TypedStmt>,
}

#[derive(Debug, Clone)]
pub enum TypedStmt {
    Assign(TypedAssignStmt),
    Return(TypedReturnStmt),
    Expression(TypedExpressionStmt),
    If(TypedIfStmt),
    Block(TypedBlockStmt),
    Init(TypedInitStmt),
}

impl TypedStmt {
    pub fn get_span(&self) -> &Span {
        match self {
            TypedStmt::Assign(stmt) => &stmt.span,
            TypedStmt::Return(stmt) => &stmt.span,
            TypedStmt::Expression(stmt) => &stmt.span,
            TypedStmt::If(stmt) => &stmt.span,
            TypedStmt::Block(stmt) => &stmt.span,
            TypedStmt::Init(stmt) => &stmt.span,
        }
    }
}

/// A checked block.
///
/// `result_type` is the type of the `return` ending the block, or
/// `Nothing` when the block has none. Statements following a `return`
/// are dropped.
#[derive(Debug, Clone)]
pub struct TypedBlockStmt {
    pub body: Vec<TypedStmt>,
    pub result_type: Type,
    pub span: Span,
}

impl TypedBlockStmt {
    pub fn iter(&self) -> Iter<'_, TypedStmt> {
        self.body.iter()
    }
}

#[derive(Debug, Clone)]
pub struct TypedExpressionStmt {
    pub expression: TypedExpr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedAssignStmt {
    pub identifier: String,
    pub value: TypedExpr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedInitStmt {
    pub identifier: String,
    pub var_type: Type,
    pub value: TypedExpr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedIfStmt {
    pub condition: TypedExpr,
    pub then_body: TypedBlockStmt,
    pub else_body: TypedBlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedReturnStmt {
    pub value: TypedExpr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypedFnDeclStmt {
    pub identifier: String,
    pub parameters: Vec<(String, Type)>,
    pub return_type: Type,
    pub body: TypedBlockStmt,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum TypedExpr {
    Identifier(TypedIdentifierExpr),
    Boolean(BooleanExpr),
    Integer(IntegerExpr),
    String(StringExpr),
    Infix(TypedInfixExpr),
    Call(TypedCallExpr),
}

impl TypedExpr {
    pub fn get_type(&self) -> Type {
        match self {
            TypedExpr::Identifier(expr) => expr.var_type,
            TypedExpr::Boolean(_) => Type::Bool,
            TypedExpr::Integer(_) => Type::Int,
            TypedExpr::String(_) => Type::String,
            TypedExpr::Infix(expr) => expr.result_type,
            TypedExpr::Call(expr) => expr.return_type,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            TypedExpr::Identifier(expr) => &expr.span,
            TypedExpr::Boolean(expr) => &expr.span,
            TypedExpr::Integer(expr) => &expr.span,
            TypedExpr::String(expr) => &expr.span,
            TypedExpr::Infix(expr) => &expr.span,
            TypedExpr::Call(expr) => &expr.span,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TypedIdentifierExpr {
    pub value: String,
    pub var_type: Type,
    pub span: Span,
}

/// A checked infix operation.
///
/// `operand_type` is the common type of both operands and selects the
/// method table; `result_type` is what the whole expression evaluates to.
#[derive(Debug, Clone)]
pub struct TypedInfixExpr {
    pub left: Box<TypedExpr>,
    pub operator: String,
    pub tag: OperatorTag,
    pub right: Box<TypedExpr>,
    pub operand_type: Type,
    pub result_type: Type,
    pub span: Span,
}

/// A checked call.
///
/// For the builtin `print`, `resolved_type` is the type of its argument
/// (the receiver of `PRINT`). For declared functions it is the declared
/// return type.
#[derive(Debug, Clone)]
pub struct TypedCallExpr {
    pub callee: String,
    pub arguments: Vec<TypedExpr>,
    pub is_builtin: bool,
    pub resolved_type: Type,
    pub return_type: Type,
    pub span: Span,
}
