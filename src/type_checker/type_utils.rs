use crate::{
    ast::{
        ast::{Type, TypeType, TypeWrapper},
        types::Primitives,
    },
    errors::errors::{Error, ErrorImpl},
};

use super::types::TypeTag;

/// Builds the qualified name `Class.member` a member is stored under.
pub fn build_name(class_name: &str, member: &str) -> String {
    format!("{}.{}", class_name, member)
}

/// Resolves a written type annotation to its tag.
///
/// Only `int`, `boolean`, and simple class names are accepted, plus `void`
/// when `allow_void` is set (method return types).
pub fn resolve_type(type_: &TypeWrapper, allow_void: bool) -> Result<TypeTag, Error> {
    let position = type_.get_position();

    match type_.get_type_type() {
        TypeType::Primitive(Primitives::Int) => Ok(TypeTag::Int),
        TypeType::Primitive(Primitives::Boolean) => Ok(TypeTag::Bool),
        TypeType::Primitive(Primitives::Void) if allow_void => Ok(TypeTag::Void),
        TypeType::Primitive(primitive) => Err(Error::new(
            ErrorImpl::UnsupportedPrimitiveType {
                type_: primitive.to_string(),
            },
            position,
        )),
        TypeType::Symbol(name) => Ok(TypeTag::Reference(name)),
        qualified @ TypeType::Qualified(_) => Err(Error::new(
            ErrorImpl::TypeNameNotSimple {
                type_: qualified.to_string(),
            },
            position,
        )),
        array @ TypeType::Array(_) => Err(Error::new(
            ErrorImpl::UnsupportedType {
                type_: array.to_string(),
            },
            position,
        )),
    }
}
