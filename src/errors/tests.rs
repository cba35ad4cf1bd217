//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("Test.java".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("Test.java".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
    assert_eq!(error.get_position().1.as_str(), "Test.java");
}

#[test]
fn test_member_already_declared_error() {
    let error = Error::new(
        ErrorImpl::MemberAlreadyDeclared {
            name: "C.m".to_string(),
            type_: "int".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "MemberAlreadyDeclared");
    assert_eq!(
        error.to_string(),
        "\"C.m\" already exists in symbol table with type int"
    );
}

#[test]
fn test_variable_already_declared_error() {
    let error = Error::new(
        ErrorImpl::VariableAlreadyDeclared {
            variable: "i".to_string(),
            type_: "int".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "VariableAlreadyDeclared");
    assert_eq!(error.get_impl(), &ErrorImpl::VariableAlreadyDeclared {
        variable: "i".to_string(),
        type_: "int".to_string(),
    });
}

#[test]
fn test_unsupported_modifier_error() {
    let error = Error::new(
        ErrorImpl::UnsupportedModifier {
            modifier: "static".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "UnsupportedModifier");
    assert!(error.to_string().contains("static"));
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::MultipleFragments {
            names: vec!["i".to_string(), "j".to_string()],
        },
        Position::null(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Declare `i`, `j` in separate declarations"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
