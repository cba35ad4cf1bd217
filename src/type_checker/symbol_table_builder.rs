//! Collects the declarations of a compilation unit into a `DeclarationTable`.
//!
//! This pass also enforces the shape of the supported language: one class,
//! no imports, no nested types, visibility modifiers only, simple types,
//! one variable per field, and unique member names.

use log::{debug, info};

use crate::{
    ast::declarations::{ClassDecl, CompilationUnit, FieldDecl, MethodDecl, Modifier},
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    symbol_table::DeclarationTable,
    type_utils::{build_name, resolve_type},
    types::TypeTag,
};

pub fn build_symbol_table(unit: &CompilationUnit) -> Result<DeclarationTable, Error> {
    if let Some(import) = unit.imports.first() {
        return Err(Error::new(
            ErrorImpl::ImportNotAllowed {
                import: import.name.clone(),
            },
            import.span.start.clone(),
        ));
    }

    if unit.types.len() > 1 {
        return Err(Error::new(
            ErrorImpl::MultipleTypeDeclarations {
                count: unit.types.len(),
            },
            unit.types[1].span.start.clone(),
        ));
    }

    let mut table = DeclarationTable::default();
    for class in &unit.types {
        collect_class(&mut table, class)?;
    }

    info!(
        "collected {} declaration(s) across {} type(s)",
        table.types.len(),
        unit.types.len()
    );
    Ok(table)
}

fn collect_class(table: &mut DeclarationTable, class: &ClassDecl) -> Result<(), Error> {
    check_modifiers(&class.modifiers, &class.span.start)?;

    if !class.types.is_empty() {
        return Err(Error::new(
            ErrorImpl::NestedTypeDeclaration {
                class: class.name.clone(),
            },
            class.types[0].span.start.clone(),
        ));
    }

    for field in &class.fields {
        collect_field(table, &class.name, field)?;
    }

    for method in &class.methods {
        collect_method(table, &class.name, method)?;
    }

    Ok(())
}

fn collect_field(table: &mut DeclarationTable, class_name: &str, field: &FieldDecl) -> Result<(), Error> {
    check_modifiers(&field.modifiers, &field.span.start)?;

    let type_ = resolve_type(&field.field_type, false)?;
    let name = build_name(class_name, field.get_name()?);

    declare(table, name, type_, &field.span.start)
}

fn collect_method(table: &mut DeclarationTable, class_name: &str, method: &MethodDecl) -> Result<(), Error> {
    check_modifiers(&method.modifiers, &method.span.start)?;

    let type_ = resolve_type(&method.return_type, true)?;
    let name = build_name(class_name, &method.identifier);

    let mut parameters = Vec::new();
    for parameter in &method.parameters {
        let parameter_type = resolve_type(&parameter.param_type, false)?;
        parameters.push((parameter.identifier.clone(), parameter_type));
    }

    declare(table, name.clone(), type_, &method.span.start)?;
    table.parameters.insert(name, parameters);

    Ok(())
}

/// Records a member, rejecting a second member with the same qualified name.
fn declare(table: &mut DeclarationTable, name: String, type_: TypeTag, position: &Position) -> Result<(), Error> {
    if let Some(existing) = table.types.get(&name) {
        return Err(Error::new(
            ErrorImpl::MemberAlreadyDeclared {
                name,
                type_: existing.to_string(),
            },
            position.clone(),
        ));
    }

    debug!("declared {} : {}", name, type_);
    table.types.insert(name, type_);
    Ok(())
}

fn check_modifiers(modifiers: &[Modifier], position: &Position) -> Result<(), Error> {
    match modifiers.iter().find(|modifier| !modifier.is_visibility()) {
        Some(modifier) => Err(Error::new(
            ErrorImpl::UnsupportedModifier {
                modifier: modifier.to_string(),
            },
            position.clone(),
        )),
        None => Ok(()),
    }
}
