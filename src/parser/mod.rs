//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a compilation unit. It handles:
//!
//! - Declaration parsing (package, imports, classes, fields, methods)
//! - Statement parsing (blocks and local variable declarations)
//! - Expression parsing (names and literals)
//! - Type parsing for type annotations
//!
//! Expressions use NUD (null denotation) and LED (left denotation)
//! functions with binding powers. Every operator has an LED registered so
//! that Java constructs outside the supported language are reported by name
//! instead of as a stray token.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
