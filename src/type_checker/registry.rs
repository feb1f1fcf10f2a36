//! Static description of the primitive types.
//!
//! Every operator the language supports is a method on the left operand's
//! type. The table here is the single source of truth for which methods
//! exist, what they accept and what they return. Both the type checker and
//! the code generator consult it.

use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use lazy_static::lazy_static;

use crate::ast::types::Type;

/// Result type and ordered parameter types of a method or function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub return_type: Type,
    pub parameters: Vec<Type>,
}

impl Signature {
    pub fn new(return_type: Type, parameters: Vec<Type>) -> Self {
        Signature {
            return_type,
            parameters,
        }
    }
}

/// Normalized operator names, independent of source spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorTag {
    Plus,
    Minus,
    Times,
    Divide,
    Equal,
    LessThan,
    GreaterThan,
    And,
    Or,
    Print,
}

impl OperatorTag {
    /// Name of the method implementing this operator in the builtins unit.
    pub fn method_name(&self) -> &'static str {
        match self {
            OperatorTag::Plus => "PLUS",
            OperatorTag::Minus => "MINUS",
            OperatorTag::Times => "TIMES",
            OperatorTag::Divide => "DIVIDE",
            OperatorTag::Equal => "EQ",
            OperatorTag::LessThan => "LT",
            OperatorTag::GreaterThan => "GT",
            OperatorTag::And => "AND",
            OperatorTag::Or => "OR",
            OperatorTag::Print => "PRINT",
        }
    }
}

impl Display for OperatorTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}

pub type MethodTable = HashMap<OperatorTag, Signature>;

lazy_static! {
    static ref METHODS: HashMap<Type, MethodTable> = {
        let mut methods = HashMap::new();

        methods.insert(Type::Int, HashMap::from([
            (OperatorTag::Plus, Signature::new(Type::Int, vec![Type::Int])),
            (OperatorTag::Minus, Signature::new(Type::Int, vec![Type::Int])),
            (OperatorTag::Times, Signature::new(Type::Int, vec![Type::Int])),
            (OperatorTag::Divide, Signature::new(Type::Int, vec![Type::Int])),
            (OperatorTag::LessThan, Signature::new(Type::Bool, vec![Type::Int])),
            (OperatorTag::GreaterThan, Signature::new(Type::Bool, vec![Type::Int])),
            (OperatorTag::Equal, Signature::new(Type::Bool, vec![Type::Int])),
            (OperatorTag::Print, Signature::new(Type::Nothing, vec![])),
        ]));

        methods.insert(Type::String, HashMap::from([
            (OperatorTag::Plus, Signature::new(Type::String, vec![Type::String])),
            (OperatorTag::Print, Signature::new(Type::Nothing, vec![])),
        ]));

        methods.insert(Type::Bool, HashMap::from([
            (OperatorTag::And, Signature::new(Type::Bool, vec![Type::Bool])),
            (OperatorTag::Or, Signature::new(Type::Bool, vec![Type::Bool])),
            (OperatorTag::Print, Signature::new(Type::Nothing, vec![])),
        ]));

        // Nothing has no methods, not even PRINT
        methods.insert(Type::Nothing, HashMap::new());

        methods
    };

    static ref OPERATOR_TAGS: HashMap<&'static str, OperatorTag> = HashMap::from([
        ("+", OperatorTag::Plus),
        ("-", OperatorTag::Minus),
        ("*", OperatorTag::Times),
        ("/", OperatorTag::Divide),
        ("==", OperatorTag::Equal),
        ("<", OperatorTag::LessThan),
        (">", OperatorTag::GreaterThan),
        ("and", OperatorTag::And),
        ("or", OperatorTag::Or),
    ]);

    /// Names the generated C++ already uses: keywords, the entry point and
    /// the builtin classes.
    static ref RESERVED_NAMES: HashSet<&'static str> = HashSet::from([
        "alignas", "alignof", "and", "and_eq", "asm", "auto", "bitand", "bitor",
        "bool", "break", "case", "catch", "char", "char8_t", "char16_t", "char32_t",
        "class", "co_await", "co_return", "co_yield", "compl", "concept", "const",
        "consteval", "constexpr", "constinit", "const_cast", "continue", "decltype",
        "default", "delete", "do", "double", "dynamic_cast", "else", "enum",
        "explicit", "export", "extern", "false", "float", "for", "friend", "goto",
        "if", "inline", "int", "long", "mutable", "namespace", "new", "noexcept",
        "not", "not_eq", "nullptr", "operator", "or", "or_eq", "private",
        "protected", "public", "register", "reinterpret_cast", "requires", "return",
        "short", "signed", "sizeof", "static", "static_assert", "static_cast",
        "struct", "switch", "template", "this", "thread_local", "throw", "true",
        "try", "typedef", "typeid", "typename", "union", "unsigned", "using",
        "virtual", "void", "volatile", "wchar_t", "while", "xor", "xor_eq",
        "main", "std", "Int", "String", "Bool", "Nothing",
    ]);
}

/// Prefix of the temporaries minted by the code generator.
pub const TEMP_PREFIX: &str = "tmp_";

const BOOLEAN_OPERATORS: [&str; 6] = ["<=", "<", ">=", ">", "or", "and"];

const BUILTIN_FUNCTIONS: [&str; 1] = ["print"];

/// Maps an operator symbol (as stored on `InfixExpr`) to its tag.
///
/// `<=` and `>=` parse but have no tag, so they never type check.
pub fn operator_tag(symbol: &str) -> Option<OperatorTag> {
    OPERATOR_TAGS.get(symbol).copied()
}

/// Whether an infix expression using `symbol` evaluates to `Bool`.
pub fn is_boolean_operator(symbol: &str) -> bool {
    BOOLEAN_OPERATORS.contains(&symbol)
}

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name)
}

/// Whether a user binding or function called `name` would clash with a
/// name in the generated C++.
pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_NAMES.contains(name) || name.starts_with(TEMP_PREFIX)
}

pub fn has_method(ty: Type, tag: OperatorTag) -> bool {
    resolve_method(ty, tag).is_some()
}

pub fn resolve_method(ty: Type, tag: OperatorTag) -> Option<&'static Signature> {
    METHODS.get(&ty).and_then(|methods| methods.get(&tag))
}

/// All methods of a type, used to keep the builtins unit in sync.
pub fn methods_of(ty: Type) -> Option<&'static MethodTable> {
    METHODS.get(&ty)
}
