use std::{any::Any, slice::Iter};

use crate::{errors::errors::{Error, ErrorImpl}, Span};

use super::ast::{ExprWrapper, Stmt, StmtType, StmtWrapper, TypeWrapper};

#[derive(Debug, Clone)]
pub struct BlockStmt {
    pub body: Vec<StmtWrapper>,
    pub span: Span
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, StmtWrapper> {
        self.body.iter()
    }
}

impl Stmt for BlockStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::BlockStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// One declared variable: `name` or `name = initializer`.
#[derive(Debug, Clone)]
pub struct VarFragment {
    pub identifier: String,
    pub initializer: Option<ExprWrapper>,
    pub span: Span
}

/// Returns the only fragment of a declaration.
///
/// The supported language declares exactly one variable per declaration,
/// `int i, j;` is rejected here rather than guessed at.
pub fn single_fragment<'a>(fragments: &'a [VarFragment], span: &Span) -> Result<&'a VarFragment, Error> {
    match fragments {
        [fragment] => Ok(fragment),
        _ => Err(Error::new(ErrorImpl::MultipleFragments {
            names: fragments.iter().map(|fragment| fragment.identifier.clone()).collect()
        }, span.start.clone())),
    }
}

#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub var_type: TypeWrapper,
    pub fragments: Vec<VarFragment>,
    pub span: Span
}

impl VarDeclStmt {
    pub fn get_name(&self) -> Result<&str, Error> {
        Ok(&single_fragment(&self.fragments, &self.span)?.identifier)
    }

    pub fn get_initializer(&self) -> Result<Option<&ExprWrapper>, Error> {
        Ok(single_fragment(&self.fragments, &self.span)?.initializer.as_ref())
    }
}

impl Stmt for VarDeclStmt {
    fn get_stmt_type(&self) -> StmtType {
        StmtType::VarDeclStmt
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> StmtWrapper {
        StmtWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}
