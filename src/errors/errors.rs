use std::fmt::Display;

use thiserror::Error;

use crate::{ast::types::Type, Position};

#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Classifies the error into the compiler's error taxonomy.
    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorKind::Lexical,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::NumberParseError { .. } => ErrorKind::Syntax,
            ErrorImpl::UnknownType { .. } => ErrorKind::UnknownType,
            ErrorImpl::VariableAlreadyDeclared { .. } => ErrorKind::DuplicateBinding,
            ErrorImpl::VariableNotDeclared { .. } => ErrorKind::UnboundIdentifier,
            ErrorImpl::ConditionTypeMismatch { .. }
            | ErrorImpl::OperandTypeMismatch { .. }
            | ErrorImpl::AssignmentTypeMismatch { .. }
            | ErrorImpl::ArgumentTypeMismatch { .. }
            | ErrorImpl::ReturnTypeMismatch { .. } => ErrorKind::TypeMismatch,
            ErrorImpl::UnexpectedArguments { .. } | ErrorImpl::MissingArguments { .. } => {
                ErrorKind::ArityMismatch
            }
            ErrorImpl::UnsupportedOperator { .. } => ErrorKind::UnsupportedOperator,
            ErrorImpl::UnknownFunction { .. } => ErrorKind::UnknownFunction,
            ErrorImpl::BuiltinRedefinition { .. } => ErrorKind::BuiltinRedefinition,
            ErrorImpl::ReservedName { .. } => ErrorKind::ReservedName,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::ConditionTypeMismatch { .. } => "ConditionTypeMismatch",
            ErrorImpl::OperandTypeMismatch { .. } => "OperandTypeMismatch",
            ErrorImpl::AssignmentTypeMismatch { .. } => "AssignmentTypeMismatch",
            ErrorImpl::ArgumentTypeMismatch { .. } => "ArgumentTypeMismatch",
            ErrorImpl::ReturnTypeMismatch { .. } => "ReturnTypeMismatch",
            ErrorImpl::UnexpectedArguments { .. } => "UnexpectedArguments",
            ErrorImpl::MissingArguments { .. } => "MissingArguments",
            ErrorImpl::UnsupportedOperator { .. } => "UnsupportedOperator",
            ErrorImpl::UnknownFunction { .. } => "UnknownFunction",
            ErrorImpl::BuiltinRedefinition { .. } => "BuiltinRedefinition",
            ErrorImpl::ReservedName { .. } => "ReservedName",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnknownType { type_ } => ErrorTip::Suggestion(format!(
                "Unknown type `{}`, expected one of Int, String, Bool or Nothing",
                type_
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::ConditionTypeMismatch { received } => ErrorTip::Suggestion(format!(
                "Condition must be `Bool`, received `{}`",
                received
            )),
            ErrorImpl::OperandTypeMismatch {
                operator,
                left,
                right,
            } => ErrorTip::Suggestion(format!(
                "Cannot apply `{}` to `{}` and `{}`",
                operator, left, right
            )),
            ErrorImpl::AssignmentTypeMismatch {
                variable,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Variable `{}` has type `{}`, cannot assign `{}`",
                variable, expected, received
            )),
            ErrorImpl::ArgumentTypeMismatch {
                index,
                expected,
                received,
                ..
            } => ErrorTip::Suggestion(format!(
                "Expected argument {} to be `{}`, received `{}`",
                index + 1,
                expected,
                received
            )),
            ErrorImpl::ReturnTypeMismatch {
                function,
                expected,
                received,
            } => ErrorTip::Suggestion(format!(
                "Function `{}` should return `{}`, body returns `{}`",
                function, expected, received
            )),
            ErrorImpl::UnexpectedArguments { expected, received }
            | ErrorImpl::MissingArguments { expected, received } => ErrorTip::Suggestion(
                format!("Expected {} arguments, received {}", expected, received),
            ),
            ErrorImpl::UnsupportedOperator { operator, type_ } => ErrorTip::Suggestion(format!(
                "Type `{}` has no operator `{}`",
                type_, operator
            )),
            ErrorImpl::UnknownFunction { function } => ErrorTip::Suggestion(format!(
                "Function `{}` is not declared before this call",
                function
            )),
            ErrorImpl::BuiltinRedefinition { function } => ErrorTip::Suggestion(format!(
                "`{}` is a builtin and cannot be redeclared",
                function
            )),
            ErrorImpl::ReservedName { name } => ErrorTip::Suggestion(format!(
                "`{}` is reserved in the generated code, pick another name",
                name
            )),
        }
    }
}

/// Error taxonomy shared by every phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    UnknownType,
    DuplicateBinding,
    UnboundIdentifier,
    TypeMismatch,
    ArityMismatch,
    UnsupportedOperator,
    UnknownFunction,
    BuiltinRedefinition,
    ReservedName,
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unknown type {type_} found")]
    UnknownType { type_: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("identifier {variable:?} does not exist")]
    VariableNotDeclared { variable: String },
    #[error("condition must be Bool, received {received}")]
    ConditionTypeMismatch { received: Type },
    #[error("incorrect types for operation {operator:?}: {left} and {right}")]
    OperandTypeMismatch {
        operator: String,
        left: Type,
        right: Type,
    },
    #[error("invalid type assignment to {variable:?}: expected {expected}, received {received}")]
    AssignmentTypeMismatch {
        variable: String,
        expected: Type,
        received: Type,
    },
    #[error("argument types do not match in call to {function:?}: expected {expected}, received {received}")]
    ArgumentTypeMismatch {
        function: String,
        index: usize,
        expected: Type,
        received: Type,
    },
    #[error("incorrect return type for {function:?}: expected {expected}, received {received}")]
    ReturnTypeMismatch {
        function: String,
        expected: Type,
        received: Type,
    },
    #[error("unexpected arguments: expected {expected:?}, received {received:?}")]
    UnexpectedArguments { expected: usize, received: usize },
    #[error("missing arguments: expected {expected:?}, received {received:?}")]
    MissingArguments { expected: usize, received: usize },
    #[error("method {operator:?} does not exist on {type_}")]
    UnsupportedOperator { operator: String, type_: Type },
    #[error("signature for {function:?} does not exist")]
    UnknownFunction { function: String },
    #[error("{function:?} is already a builtin function")]
    BuiltinRedefinition { function: String },
    #[error("{name:?} is a reserved name")]
    ReservedName { name: String },
}
