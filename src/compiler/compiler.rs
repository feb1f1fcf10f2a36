//! Main compiler module.
//!
//! This module contains the core Compiler structure and drives code
//! generation from the typed AST to C++ source text. Every expression is
//! lowered into its own declaration of a fresh `tmp_<n>` temporary, so the
//! output holds one operation per line no matter how deeply the source
//! expressions nest.

use log::debug;

use crate::{
    ast::types::Type,
    type_checker::{
        registry::{Signature, TEMP_PREFIX},
        type_checker::TypeChecker,
        typed_ast::TypedProgram,
    },
};

use super::stmt::{gen_function, gen_statement};

pub const PROLOGUE: &str = "#include <iostream>\n#include <string>\n#include \"Builtins.cpp\"\n\n";

/// The state of one code generation pass.
///
/// # Type Parameters
///
/// * `'a` - Lifetime of the type checker the program was checked with
pub struct Compiler<'a> {
    /// The type checker instance holding function signatures
    pub type_checker: &'a TypeChecker,
    /// Generated C++ so far
    output: String,
    /// Number of temporaries minted so far
    temp_count: usize,
    /// Whether a function body is being emitted, as opposed to `main`
    in_function: bool,
}

impl<'a> Compiler<'a> {
    /// Creates a new Compiler instance.
    ///
    /// # Arguments
    ///
    /// * `type_checker` - The type checker that accepted the program
    pub fn new(type_checker: &'a TypeChecker) -> Self {
        Compiler {
            type_checker,
            output: String::new(),
            temp_count: 0,
            in_function: false,
        }
    }

    /// Generates C++ for a checked program.
    ///
    /// The temporary counter and output buffer are reset first, so the same
    /// program always produces the same text.
    ///
    /// # Panics
    ///
    /// Panics if the program was not accepted by the type checker this
    /// compiler was created with.
    pub fn generate(&mut self, program: &TypedProgram) -> String {
        self.output.clear();
        self.temp_count = 0;
        self.in_function = false;

        self.write(PROLOGUE);

        // Functions go before main so every call follows its declaration
        for function in program.functions.iter() {
            gen_function(self, function);
        }

        self.write("int main() {\n");
        for statement in program.statements.iter() {
            gen_statement(self, statement);
        }
        self.write("return 0;\n}\n");

        debug!(
            "generated {} bytes using {} temporaries",
            self.output.len(),
            self.temp_count
        );

        std::mem::take(&mut self.output)
    }

    /// Mints the next temporary name, starting at `tmp_1`.
    pub fn fresh_temp(&mut self) -> String {
        self.temp_count += 1;
        format!("{}{}", TEMP_PREFIX, self.temp_count)
    }

    pub fn in_function(&self) -> bool {
        self.in_function
    }

    pub fn set_in_function(&mut self, in_function: bool) {
        self.in_function = in_function;
    }

    pub fn temp_count(&self) -> usize {
        self.temp_count
    }

    pub fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Writes `<ty> <temp> = <value>;` for a fresh temporary and returns its name.
    pub fn declare_temp(&mut self, ty: Type, value: &str) -> String {
        let temp = self.fresh_temp();
        self.write(&format!("{} {} = {};\n", ty, temp, value));
        temp
    }

    /// # Panics
    ///
    /// Panics if no function named `name` was registered while checking.
    pub fn function_signature(&self, name: &str) -> &'a Signature {
        match self.type_checker.lookup_function_signature(name) {
            Some(signature) => signature,
            None => panic!("no signature registered for function `{}`", name),
        }
    }
}

/// Compiles a typed program into a C++ translation unit.
///
/// The result expects `Builtins.cpp` (see [`super::stdlib`]) next to it.
pub fn compile(program: &TypedProgram, type_checker: &TypeChecker) -> String {
    let mut compiler = Compiler::new(type_checker);
    compiler.generate(program)
}
