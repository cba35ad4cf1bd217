//! Type checking and semantic analysis module.
//!
//! Checking a compilation unit is two passes over the AST:
//!
//! - `symbol_table_builder` collects the type of every field and method
//!   under its qualified name, rejecting anything outside the supported
//!   language
//! - `type_checker` walks the method bodies with a scoped `SymbolTable`,
//!   synthesizing a type per node and building a tree of proof obligations
//!
//! Type errors never abort the second pass. They surface as `TypeTag::Error`
//! and as obligations that do not hold.

pub mod obligation;
pub mod symbol_table;
pub mod symbol_table_builder;
pub mod type_checker;
pub mod type_utils;
pub mod types;

#[cfg(test)]
mod tests;
