use crate::Span;

use super::{
    expressions::{BooleanExpr, CallExpr, IdentifierExpr, InfixExpr, IntegerExpr, StringExpr},
    statements::{
        AssignStmt, BlockStmt, ExpressionStmt, FnDeclStmt, IfStmt, InitStmt, ReturnStmt,
    },
};

/// Root of a parsed source file.
///
/// Function declarations are hoisted out of the statement list by the parser
/// so that every function is checked and registered before any top-level
/// statement refers to it.
#[derive(Debug, Clone)]
pub struct Program {
    pub functions: Vec<FnDeclStmt>,
    pub statements: Vec<Stmt>,
}

/// Statement
///
/// The closed set of statement kinds. Each variant wraps its own node struct
/// so passes can hand a single kind to a helper without re-matching.
#[derive(Debug, Clone)]
pub enum Stmt {
    Assign(AssignStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    If(IfStmt),
    Block(BlockStmt),
    Init(InitStmt),
    Function(FnDeclStmt),
}

impl Stmt {
    pub fn get_span(&self) -> &Span {
        match self {
            Stmt::Assign(stmt) => &stmt.span,
            Stmt::Return(stmt) => &stmt.span,
            Stmt::Expression(stmt) => &stmt.span,
            Stmt::If(stmt) => &stmt.span,
            Stmt::Block(stmt) => &stmt.span,
            Stmt::Init(stmt) => &stmt.span,
            Stmt::Function(stmt) => &stmt.span,
        }
    }
}

/// Expression
///
/// The closed set of expression kinds.
#[derive(Debug, Clone)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Boolean(BooleanExpr),
    Integer(IntegerExpr),
    String(StringExpr),
    Infix(InfixExpr),
    Call(CallExpr),
}

impl Expr {
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Identifier(expr) => &expr.span,
            Expr::Boolean(expr) => &expr.span,
            Expr::Integer(expr) => &expr.span,
            Expr::String(expr) => &expr.span,
            Expr::Infix(expr) => &expr.span,
            Expr::Call(expr) => &expr.span,
        }
    }
}
