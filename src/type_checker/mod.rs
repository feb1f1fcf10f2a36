//! Type checking and semantic analysis module.
//!
//! This module performs type checking and semantic analysis on the AST.
//! It transforms the untyped AST into a typed AST while:
//!
//! - Verifying type correctness of expressions and statements
//! - Resolving variable and function references
//! - Checking function signatures and argument types
//! - Resolving every operator against the builtin method tables
//!
//! The environment keeps a stack of scopes so that bindings made inside a
//! block or function are dropped when it ends.

pub mod environment;
pub mod registry;
pub mod type_checker;
pub mod typed_ast;
