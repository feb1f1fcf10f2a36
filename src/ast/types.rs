//! Type system definitions for the AST.
//!
//! The language has a closed set of primitive types. Type annotations in
//! source (parameter and return types) are resolved to a [`Type`] while
//! parsing; there are no user defined, generic or composite types.

use std::fmt::Display;

/// The primitive types of the language.
///
/// The `Display` form is both the source spelling and the name of the
/// wrapper class emitted into the generated C++.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    String,
    Bool,
    Nothing,
}

impl Type {
    /// Resolves a source-level type name.
    pub fn from_name(name: &str) -> Option<Type> {
        match name {
            "Int" => Some(Type::Int),
            "String" => Some(Type::String),
            "Bool" => Some(Type::Bool),
            "Nothing" => Some(Type::Nothing),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Type::Int => "Int",
            Type::String => "String",
            Type::Bool => "Bool",
            Type::Nothing => "Nothing",
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
