//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the compilation
//! process. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for lexing, parsing and type checking
//! - The error taxonomy (`ErrorKind`) callers match on
//! - Helpful error messages and suggestions

pub mod errors;
