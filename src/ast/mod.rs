/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Program root and the Stmt / Expr sum types
/// - expressions: Definitions for the expression node kinds
/// - statements: Definitions for the statement node kinds
/// - types: The primitive types used in annotations
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
