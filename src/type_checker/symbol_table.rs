//! The symbol table the type checker resolves names through.
//!
//! Lookups go from the innermost scope outwards and fall back to the
//! declaration table built by `symbol_table_builder`. Anything not found
//! resolves to `TypeTag::Error`.

use std::collections::HashMap;

use log::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::types::TypeTag;

/// Types of every field and method, keyed by qualified name, and the
/// parameter lists of every method in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclarationTable {
    pub types: HashMap<String, TypeTag>,
    pub parameters: HashMap<String, Vec<(String, TypeTag)>>,
}

impl DeclarationTable {
    pub fn get_type(&self, name: &str) -> Option<&TypeTag> {
        self.types.get(name)
    }

    pub fn get_parameter_type_list(&self, name: &str) -> Option<&[(String, TypeTag)]> {
        self.parameters.get(name).map(Vec::as_slice)
    }
}

#[derive(Debug)]
pub struct SymbolTable<'a> {
    globals: &'a DeclarationTable,
    /// Innermost scope last
    scopes: Vec<HashMap<String, TypeTag>>,
}

impl<'a> SymbolTable<'a> {
    pub fn new(globals: &'a DeclarationTable) -> Self {
        SymbolTable {
            globals,
            scopes: Vec::new(),
        }
    }

    pub fn get_type(&self, name: &str) -> TypeTag {
        self.scopes
            .iter()
            .rev()
            .find_map(|scope| scope.get(name))
            .or_else(|| self.globals.get_type(name))
            .cloned()
            .unwrap_or(TypeTag::Error)
    }

    pub fn get_parameter_type_list(&self, name: &str) -> Option<&'a [(String, TypeTag)]> {
        self.globals.get_parameter_type_list(name)
    }

    pub fn push_scope(&mut self) {
        self.scopes.push(HashMap::new());
        trace!("entered scope {}", self.scopes.len());
    }

    pub fn pop_scope(&mut self) {
        trace!("left scope {}", self.scopes.len());
        self.scopes.pop();
    }

    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Binds `name` in the innermost scope.
    ///
    /// Fails when the name is already visible, whether from an enclosing
    /// scope or the declaration table, or when no scope is open.
    pub fn add_local(&mut self, name: &str, type_: TypeTag, position: Position) -> Result<(), Error> {
        let existing = self.get_type(name);
        if !existing.is_error() {
            return Err(Error::new(
                ErrorImpl::VariableAlreadyDeclared {
                    variable: name.to_string(),
                    type_: existing.to_string(),
                },
                position,
            ));
        }

        let Some(scope) = self.scopes.last_mut() else {
            return Err(Error::new(
                ErrorImpl::NoActiveScope {
                    variable: name.to_string(),
                },
                position,
            ));
        };

        debug!("local {} : {}", name, type_);
        scope.insert(name.to_string(), type_);

        Ok(())
    }
}
