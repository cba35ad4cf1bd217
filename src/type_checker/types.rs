//! Type tags and the assignment compatibility law.

use std::fmt::Display;

use serde::Serialize;

/// The type synthesized for a declaration, statement, or expression.
///
/// `Error` marks a node that failed to type check. It is absorbing: a node
/// with an `Error` child is itself `Error`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum TypeTag {
    Int,
    Bool,
    Void,
    NullType,
    Error,
    /// A class type, known only by its simple name.
    Reference(String),
}

impl TypeTag {
    pub fn is_error(&self) -> bool {
        *self == TypeTag::Error
    }

    pub fn is_void(&self) -> bool {
        *self == TypeTag::Void
    }

    pub fn is_null_type(&self) -> bool {
        *self == TypeTag::NullType
    }
}

impl Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeTag::Int => write!(f, "int"),
            TypeTag::Bool => write!(f, "boolean"),
            TypeTag::Void => write!(f, "void"),
            TypeTag::NullType => write!(f, "nullType"),
            TypeTag::Error => write!(f, "ERROR"),
            TypeTag::Reference(name) => write!(f, "{}", name),
        }
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> Self {
        tag.to_string()
    }
}

/// `int` and `boolean`, the only primitives in the language.
pub fn is_primitive(type_: &TypeTag) -> bool {
    matches!(type_, TypeTag::Int | TypeTag::Bool)
}

/// Whether a value of type `right` may be stored where `left` is declared.
///
/// Equal types are compatible, and `null` may be stored in any class type.
/// Nothing else coerces.
pub fn is_assignment_compatible(left: &TypeTag, right: &TypeTag) -> bool {
    if left.is_error() || right.is_error() {
        return false;
    }

    if left.is_null_type() || left.is_void() {
        return false;
    }

    if right.is_null_type() && !is_primitive(left) {
        return true;
    }

    left == right
}
