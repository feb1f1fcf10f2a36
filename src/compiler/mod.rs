//! Code generation module for the compiler.
//!
//! This module contains the C++ code generator that transforms the typed
//! AST into a C++ translation unit. It handles:
//!
//! - Lowering of expressions into single-operation temporaries
//! - Emission of statements, functions and the `main` wrapper
//! - The builtins support unit the generated code includes

pub mod compiler;
pub mod expr;
pub mod stdlib;
pub mod stmt;
