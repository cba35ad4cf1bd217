//! Declarations: the compilation unit, its types, and their members.
//!
//! The parser accepts a little more than the supported language (imports,
//! several or nested classes, any modifier) so that the declaration checks
//! can reject those shapes with a precise error instead of a parse failure.

use std::fmt::Display;

use crate::{errors::errors::Error, Span};

use super::{
    ast::TypeWrapper,
    statements::{single_fragment, BlockStmt, VarFragment},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Public,
    Private,
    Protected,
    Static,
    Final,
    Abstract,
    Synchronized,
    Native,
    Transient,
    Volatile,
    Strictfp,
}

impl Modifier {
    /// Only the three visibility markers are part of the supported language.
    pub fn is_visibility(&self) -> bool {
        matches!(self, Modifier::Public | Modifier::Private | Modifier::Protected)
    }
}

impl Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword = match self {
            Modifier::Public => "public",
            Modifier::Private => "private",
            Modifier::Protected => "protected",
            Modifier::Static => "static",
            Modifier::Final => "final",
            Modifier::Abstract => "abstract",
            Modifier::Synchronized => "synchronized",
            Modifier::Native => "native",
            Modifier::Transient => "transient",
            Modifier::Volatile => "volatile",
            Modifier::Strictfp => "strictfp",
        };
        write!(f, "{}", keyword)
    }
}

#[derive(Debug, Clone)]
pub struct CompilationUnit {
    pub package: Option<String>,
    pub imports: Vec<ImportDecl>,
    pub types: Vec<ClassDecl>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ImportDecl {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub name: String,
    pub modifiers: Vec<Modifier>,
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<MethodDecl>,
    /// Nested type declarations, kept only so they can be rejected.
    pub types: Vec<ClassDecl>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub modifiers: Vec<Modifier>,
    pub field_type: TypeWrapper,
    pub fragments: Vec<VarFragment>,
    pub span: Span,
}

impl FieldDecl {
    pub fn get_name(&self) -> Result<&str, Error> {
        Ok(&single_fragment(&self.fragments, &self.span)?.identifier)
    }
}

#[derive(Debug, Clone)]
pub struct ParamDecl {
    pub identifier: String,
    pub param_type: TypeWrapper,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub modifiers: Vec<Modifier>,
    pub return_type: TypeWrapper,
    pub identifier: String,
    pub parameters: Vec<ParamDecl>,
    /// `None` for a declaration ending in `;`.
    pub body: Option<BlockStmt>,
    pub span: Span,
}
