use std::collections::HashMap;

use crate::ast::types::Type;

use super::registry::Signature;

pub type Scopes = Vec<HashMap<String, Type>>;

/// Bindings visible while checking one program.
///
/// Variables live in a stack of scopes. The outermost scope holds the
/// top-level bindings and is never popped; functions and blocks push a
/// scope on entry and pop it on exit. Function signatures are global.
#[derive(Debug)]
pub struct Environment {
    scopes: Scopes,
    functions: HashMap<String, Signature>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            scopes: vec![HashMap::new()],
            functions: HashMap::new(),
        }
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    pub fn pop_scope(&mut self) {
        if self.scopes.len() > 1 {
            self.scopes.pop();
        }
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Swaps in a single empty scope and returns the previous scopes.
    ///
    /// Function bodies only see their own parameters and locals.
    pub fn isolate(&mut self) -> Scopes {
        std::mem::replace(&mut self.scopes, vec![HashMap::new()])
    }

    pub fn restore(&mut self, scopes: Scopes) {
        self.scopes = scopes;
    }

    /// Binds `name` in the innermost scope, replacing any binding there.
    pub fn bind(&mut self, name: &str, ty: Type) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.to_string(), ty);
        }
    }

    /// Looks `name` up from the innermost scope outwards.
    pub fn lookup(&self, name: &str) -> Option<Type> {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name).copied())
    }

    pub fn exists(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn register_function_signature(&mut self, name: &str, signature: Signature) {
        self.functions.insert(name.to_string(), signature);
    }

    pub fn lookup_function_signature(&self, name: &str) -> Option<&Signature> {
        self.functions.get(name)
    }
}
