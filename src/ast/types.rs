//! Type annotations in the AST.
//!
//! Types here are syntax: what the programmer wrote after a modifier list or
//! in a parameter list. The type checker resolves them into `TypeTag`s and
//! rejects every shape the supported language does not allow.

use std::{any::Any, fmt::Display};

use crate::Position;

use super::ast::{Type, TypeType, TypeWrapper};

/// The primitive type keywords of the source language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitives {
    Int,
    Boolean,
    Void,
    Double,
    Float,
    Long,
    Short,
    Byte,
    Char,
}

impl Display for Primitives {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            Primitives::Int => "int",
            Primitives::Boolean => "boolean",
            Primitives::Void => "void",
            Primitives::Double => "double",
            Primitives::Float => "float",
            Primitives::Long => "long",
            Primitives::Short => "short",
            Primitives::Byte => "byte",
            Primitives::Char => "char",
        };
        write!(f, "{}", keyword)
    }
}

/// A primitive type keyword such as `int` or `double`.
#[derive(Debug, Clone)]
pub struct PrimitiveType {
    pub primitive: Primitives,
    pub position: Position,
}

impl Type for PrimitiveType {
    fn clone_wrapper(&self) -> TypeWrapper {
        TypeWrapper::new(self.clone())
    }
    fn get_type_type(&self) -> TypeType {
        TypeType::Primitive(self.primitive)
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_position(&self) -> Position {
        self.position.clone()
    }
}

/// A single unqualified type name, e.g. `Integer`.
#[derive(Debug, Clone)]
pub struct SymbolType {
    pub name: String,
    pub position: Position,
}

impl Type for SymbolType {
    fn clone_wrapper(&self) -> TypeWrapper {
        TypeWrapper::new(self.clone())
    }
    fn get_type_type(&self) -> TypeType {
        TypeType::Symbol(self.name.clone())
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_position(&self) -> Position {
        self.position.clone()
    }
}

/// A dotted type name, e.g. `java.lang.Integer`.
#[derive(Debug, Clone)]
pub struct QualifiedType {
    pub parts: Vec<String>,
    pub position: Position,
}

impl Type for QualifiedType {
    fn clone_wrapper(&self) -> TypeWrapper {
        TypeWrapper::new(self.clone())
    }
    fn get_type_type(&self) -> TypeType {
        TypeType::Qualified(self.parts.clone())
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_position(&self) -> Position {
        self.position.clone()
    }
}

#[derive(Debug, Clone)]
pub struct ArrayType {
    pub underlying: TypeWrapper,
}

impl Type for ArrayType {
    fn clone_wrapper(&self) -> TypeWrapper {
        TypeWrapper::new(self.clone())
    }
    fn get_type_type(&self) -> TypeType {
        TypeType::Array(Box::new(self.underlying.get_type_type()))
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_position(&self) -> Position {
        self.underlying.get_position()
    }
}
