use crate::Span;

use super::ast::Expr;

// LITERALS

/// Integer Expression
/// Holds the parsed decimal value, so leading zeros in the source are dropped.
#[derive(Debug, Clone)]
pub struct IntegerExpr {
    pub value: i64,
    pub span: Span,
}

/// String Expression
/// Holds the decoded string contents (escapes already processed by the lexer).
#[derive(Debug, Clone)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

/// Identifier Expression
/// A reference to a binding in scope.
#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub value: String,
    pub span: Span,
}

// COMPLEX

/// Infix Expression
/// A binary operation such as `a + b` or `a and b`.
///
/// `operator` is the normalized operator symbol (`&&` and `||` are stored as
/// `and` and `or`).
#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
    pub span: Span,
}

/// Call Expression
/// A call to a declared function or a builtin, by name.
#[derive(Debug, Clone)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
    pub span: Span,
}
