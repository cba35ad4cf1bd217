use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal failure: the input is outside the supported language, not merely
/// ill-typed. Soft type errors never use this type.
#[derive(Debug, Clone)]
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

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnsupportedConstruct { .. } => "UnsupportedConstruct",
            ErrorImpl::ImportNotAllowed { .. } => "ImportNotAllowed",
            ErrorImpl::MultipleTypeDeclarations { .. } => "MultipleTypeDeclarations",
            ErrorImpl::NestedTypeDeclaration { .. } => "NestedTypeDeclaration",
            ErrorImpl::UnsupportedModifier { .. } => "UnsupportedModifier",
            ErrorImpl::UnsupportedPrimitiveType { .. } => "UnsupportedPrimitiveType",
            ErrorImpl::TypeNameNotSimple { .. } => "TypeNameNotSimple",
            ErrorImpl::UnsupportedType { .. } => "UnsupportedType",
            ErrorImpl::MultipleFragments { .. } => "MultipleFragments",
            ErrorImpl::MemberAlreadyDeclared { .. } => "MemberAlreadyDeclared",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::MethodNotDeclared { .. } => "MethodNotDeclared",
            ErrorImpl::NoActiveScope { .. } => "NoActiveScope",
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
            ErrorImpl::UnsupportedConstruct { construct } => ErrorTip::Suggestion(format!(
                "{} is not part of the supported language",
                construct
            )),
            ErrorImpl::ImportNotAllowed { .. } => {
                ErrorTip::Suggestion(String::from("Remove the import, no external references are allowed"))
            }
            ErrorImpl::MultipleTypeDeclarations { count } => ErrorTip::Suggestion(format!(
                "Only one type declaration is allowed per unit, found {}",
                count
            )),
            ErrorImpl::NestedTypeDeclaration { class } => {
                ErrorTip::Suggestion(format!("Move the nested type out of `{}`", class))
            }
            ErrorImpl::UnsupportedModifier { modifier } => ErrorTip::Suggestion(format!(
                "Modifier `{}` is not supported, use public, private or protected",
                modifier
            )),
            ErrorImpl::UnsupportedPrimitiveType { type_ } => ErrorTip::Suggestion(format!(
                "Primitive type `{}` is not supported, use int or boolean",
                type_
            )),
            ErrorImpl::TypeNameNotSimple { type_ } => {
                ErrorTip::Suggestion(format!("Type `{}` must be a simple name", type_))
            }
            ErrorImpl::UnsupportedType { type_ } => {
                ErrorTip::Suggestion(format!("Type `{}` is not a simple or primitive type", type_))
            }
            ErrorImpl::MultipleFragments { names } => ErrorTip::Suggestion(format!(
                "Declare `{}` in separate declarations",
                names.join("`, `")
            )),
            ErrorImpl::MemberAlreadyDeclared { name, type_ } => ErrorTip::Suggestion(format!(
                "`{}` already declared with type `{}`",
                name, type_
            )),
            ErrorImpl::VariableAlreadyDeclared { variable, type_ } => {
                ErrorTip::Suggestion(format!(
                    "Variable `{}` already visible with type `{}`",
                    variable, type_
                ))
            }
            ErrorImpl::MethodNotDeclared { method } => ErrorTip::Suggestion(format!(
                "Method `{}` is missing from the symbol table, was it built from this unit?",
                method
            )),
            ErrorImpl::NoActiveScope { variable } => ErrorTip::Suggestion(format!(
                "Push a scope before binding `{}`",
                variable
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

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
    #[error("unsupported construct: {construct}")]
    UnsupportedConstruct { construct: String },
    #[error("no imports are allowed in the compilation unit, found {import:?}")]
    ImportNotAllowed { import: String },
    #[error("only one type declaration allowed in the compilation unit, found {count}")]
    MultipleTypeDeclarations { count: usize },
    #[error("no type declarations allowed in {class:?}")]
    NestedTypeDeclaration { class: String },
    #[error("only private, public, and protected are supported as modifiers, found {modifier:?}")]
    UnsupportedModifier { modifier: String },
    #[error("primitive type {type_:?} is not an int, boolean, or void")]
    UnsupportedPrimitiveType { type_: String },
    #[error("{type_:?} is not a simple name")]
    TypeNameNotSimple { type_: String },
    #[error("{type_:?} is not a simple or primitive type")]
    UnsupportedType { type_: String },
    #[error("only one variable per declaration is supported, found {names:?}")]
    MultipleFragments { names: Vec<String> },
    #[error("{name:?} already exists in symbol table with type {type_}")]
    MemberAlreadyDeclared { name: String, type_: String },
    #[error("{variable:?} already exists in symbol table with type {type_}")]
    VariableAlreadyDeclared { variable: String, type_: String },
    #[error("method {method:?} not found in symbol table")]
    MethodNotDeclared { method: String },
    #[error("no scope is open to bind {variable:?}")]
    NoActiveScope { variable: String },
}
