use log::{debug, info, trace};

use crate::{
    ast::{
        ast::{Expr, ExprType, ExprWrapper, Stmt, StmtWrapper},
        declarations::{ClassDecl, CompilationUnit, MethodDecl},
        statements::{BlockStmt, VarDeclStmt},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{
    obligation::{ProofObligation, TypeCheckResult},
    symbol_table::{DeclarationTable, SymbolTable},
    type_utils::{build_name, resolve_type},
    types::{is_assignment_compatible, TypeTag},
};

/// A synthesized type and the obligation that justifies it.
pub type Derivation = (TypeTag, ProofObligation);

/// State threaded through one type checking pass.
#[derive(Debug)]
pub struct TypeChecker<'a> {
    pub symbol_table: SymbolTable<'a>,
    pub class_name: String,
    /// Blocks and statements are numbered per method, in the order their
    /// checks finish.
    block_counter: usize,
    statement_counter: usize,
}

impl<'a> TypeChecker<'a> {
    pub fn new(globals: &'a DeclarationTable) -> Self {
        TypeChecker {
            symbol_table: SymbolTable::new(globals),
            class_name: String::new(),
            block_counter: 0,
            statement_counter: 0,
        }
    }

    pub fn reset_counters(&mut self) {
        self.block_counter = 0;
        self.statement_counter = 0;
    }

    pub fn next_block_name(&mut self) -> String {
        let name = format!("B{}", self.block_counter);
        self.block_counter += 1;
        name
    }

    pub fn next_statement_name(&mut self) -> String {
        let name = format!("S{}", self.statement_counter);
        self.statement_counter += 1;
        name
    }
}

/// `Void` when every type is `Void`, otherwise `Error`.
fn all_void(types: &[TypeTag]) -> TypeTag {
    if types.iter().all(TypeTag::is_void) {
        TypeTag::Void
    } else {
        TypeTag::Error
    }
}

fn proves(name: &str, type_: &TypeTag) -> String {
    format!("{} : {}", name, type_)
}

/// The group for a name or literal: one leaf asserting it has a type.
fn lookup(name: &str, type_: TypeTag) -> Derivation {
    let leaf = ProofObligation::leaf(format!("E({}) = {}", name, type_), !type_.is_error());
    let group = ProofObligation::group(proves(name, &type_), vec![leaf]);
    (type_, group)
}

pub fn type_check_expr(type_checker: &mut TypeChecker, ast: &ExprWrapper) -> Result<Derivation, Error> {
    let name = ast.get_display_name();
    let type_ = match ast.get_expr_type() {
        ExprType::Symbol => type_checker.symbol_table.get_type(&name),
        ExprType::Number => TypeTag::Int,
        ExprType::Boolean => TypeTag::Bool,
        ExprType::Null => TypeTag::NullType,
    };

    trace!("{} : {}", name, type_);
    Ok(lookup(&name, type_))
}

pub fn type_check_var_decl(type_checker: &mut TypeChecker, ast: &VarDeclStmt) -> Result<Derivation, Error> {
    let name = ast.get_name()?;
    let initializer = ast.get_initializer()?;
    let declared = resolve_type(&ast.var_type, false)?;

    type_checker
        .symbol_table
        .add_local(name, declared, ast.span.start.clone())?;

    let mut children = Vec::new();

    let (left, name_obligation) = lookup(name, type_checker.symbol_table.get_type(name));
    children.push(name_obligation);

    let mut type_ = left.clone();
    if let Some(initializer) = initializer {
        let (right, initializer_obligation) = type_check_expr(type_checker, initializer)?;
        children.push(initializer_obligation);

        let compatible = is_assignment_compatible(&left, &right);
        children.push(ProofObligation::leaf(format!("{} := {}", left, right), compatible));
        type_ = if compatible { TypeTag::Void } else { TypeTag::Error };
    }

    if !type_.is_error() {
        type_ = TypeTag::Void;
    }

    let label = proves(&type_checker.next_statement_name(), &type_);
    Ok((type_, ProofObligation::group(label, children)))
}

pub fn type_check_stmt(type_checker: &mut TypeChecker, ast: &StmtWrapper) -> Result<Derivation, Error> {
    if let Some(block) = ast.downcast::<BlockStmt>() {
        return type_check_block(type_checker, block);
    }
    if let Some(var_decl) = ast.downcast::<VarDeclStmt>() {
        return type_check_var_decl(type_checker, var_decl);
    }

    Err(Error::new(
        ErrorImpl::UnsupportedConstruct {
            construct: format!("{:?}", ast.get_stmt_type()),
        },
        ast.get_span().start.clone(),
    ))
}

pub fn type_check_block(type_checker: &mut TypeChecker, ast: &BlockStmt) -> Result<Derivation, Error> {
    type_checker.symbol_table.push_scope();

    let mut types = Vec::new();
    let mut children = Vec::new();
    for stmt in ast.iter() {
        let (type_, obligation) = type_check_stmt(type_checker, stmt)?;
        types.push(type_);
        children.push(obligation);
    }

    type_checker.symbol_table.pop_scope();

    let type_ = all_void(&types);
    let label = proves(&type_checker.next_block_name(), &type_);
    Ok((type_, ProofObligation::group(label, children)))
}

/// Checks a method body with its parameters, `this`, and `return` in scope.
pub fn type_check_method(
    type_checker: &mut TypeChecker,
    ast: &MethodDecl,
    body: &BlockStmt,
) -> Result<Derivation, Error> {
    type_checker.reset_counters();

    let name = build_name(&type_checker.class_name, &ast.identifier);
    let parameters = match type_checker.symbol_table.get_parameter_type_list(&name) {
        Some(parameters) => parameters,
        None => {
            return Err(Error::new(
                ErrorImpl::MethodNotDeclared { method: name },
                ast.span.start.clone(),
            ))
        }
    };

    type_checker.symbol_table.push_scope();

    for (index, (parameter, type_)) in parameters.iter().enumerate() {
        let position = ast
            .parameters
            .get(index)
            .map(|declaration| declaration.span.start.clone())
            .unwrap_or_else(|| ast.span.start.clone());
        type_checker.symbol_table.add_local(parameter, type_.clone(), position)?;
    }

    let this = TypeTag::Reference(type_checker.class_name.clone());
    type_checker.symbol_table.add_local("this", this, ast.span.start.clone())?;
    let return_type = type_checker.symbol_table.get_type(&name);
    type_checker.symbol_table.add_local("return", return_type, ast.span.start.clone())?;

    let (type_, body_obligation) = type_check_block(type_checker, body)?;

    type_checker.symbol_table.pop_scope();

    debug!("method {} : {}", name, type_);
    let label = proves(&format!("method {}", name), &type_);
    Ok((type_, ProofObligation::group(label, vec![body_obligation])))
}

pub fn type_check_class(type_checker: &mut TypeChecker, ast: &ClassDecl) -> Result<Derivation, Error> {
    type_checker.class_name = ast.name.clone();

    let mut types = Vec::new();
    let mut children = Vec::new();
    for method in &ast.methods {
        if let Some(body) = &method.body {
            let (type_, obligation) = type_check_method(type_checker, method, body)?;
            types.push(type_);
            children.push(obligation);
        }
    }

    let type_ = all_void(&types);
    let label = proves(&format!("class {}", ast.name), &type_);
    Ok((type_, ProofObligation::group(label, children)))
}

pub fn type_check_unit(type_checker: &mut TypeChecker, ast: &CompilationUnit) -> Result<Derivation, Error> {
    let mut types = Vec::new();
    let mut children = Vec::new();
    for class in &ast.types {
        let (type_, obligation) = type_check_class(type_checker, class)?;
        types.push(type_);
        children.push(obligation);
    }

    let type_ = all_void(&types);
    let label = proves("CompilationUnit", &type_);
    Ok((type_, ProofObligation::group(label, children)))
}

/// Type checks a compilation unit against its collected declarations.
///
/// Structural problems abort with an error. Type errors do not: they are
/// recorded as failing obligations and the whole unit is still checked.
pub fn type_check(globals: &DeclarationTable, ast: &CompilationUnit) -> Result<TypeCheckResult, Error> {
    let mut type_checker = TypeChecker::new(globals);
    let (type_, root) = type_check_unit(&mut type_checker, ast)?;

    let well_typed = type_.is_void();
    info!("compilation unit is {}", if well_typed { "well typed" } else { "ill typed" });

    Ok(TypeCheckResult { well_typed, root })
}
