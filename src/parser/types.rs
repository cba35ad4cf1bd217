//! Type parsing implementation.
//!
//! This module handles parsing of type annotations:
//!
//! - Primitive type keywords
//! - Simple and dotted type names
//! - Array suffixes
//!
//! Similar to expression parsing, it uses NUD/LED handlers with
//! binding powers.

use std::collections::HashMap;

use crate::{
    ast::{
        ast::TypeWrapper,
        types::{ArrayType, PrimitiveType, Primitives, QualifiedType, SymbolType},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<TypeWrapper, Error>;

/// Type alias for type left denotation handler functions.
pub type TypeLEDHandler = fn(&mut Parser, TypeWrapper, BindingPower) -> Result<TypeWrapper, Error>;

/// Type alias for type NUD lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Type alias for type LED lookup table.
pub type TypeLEDLookup = HashMap<TokenKind, TypeLEDHandler>;

/// Type alias for type binding power lookup table.
pub type TypeBPLookup = HashMap<TokenKind, BindingPower>;

/// Initializes the type parsing lookup tables.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Identifier, parse_symbol_type);
    for kind in [
        TokenKind::Int,
        TokenKind::Boolean,
        TokenKind::Void,
        TokenKind::Double,
        TokenKind::Float,
        TokenKind::Long,
        TokenKind::Short,
        TokenKind::Byte,
        TokenKind::Char,
    ] {
        parser.type_nud(kind, parse_primitive_type);
    }
    parser.type_led(TokenKind::OpenBracket, BindingPower::Call, parse_array_type);
}

pub fn parse_primitive_type(parser: &mut Parser) -> Result<TypeWrapper, Error> {
    let primitive = match parser.current_token_kind() {
        TokenKind::Int => Primitives::Int,
        TokenKind::Boolean => Primitives::Boolean,
        TokenKind::Void => Primitives::Void,
        TokenKind::Double => Primitives::Double,
        TokenKind::Float => Primitives::Float,
        TokenKind::Long => Primitives::Long,
        TokenKind::Short => Primitives::Short,
        TokenKind::Byte => Primitives::Byte,
        TokenKind::Char => Primitives::Char,
        _ => return Err(parser.unexpected("expected a primitive type")),
    };

    let position = parser.advance().span.start.clone();
    Ok(TypeWrapper::new(PrimitiveType { primitive, position }))
}

/// Parses `Name` or `a.b.Name`.
pub fn parse_symbol_type(parser: &mut Parser) -> Result<TypeWrapper, Error> {
    let token = parser.expect(TokenKind::Identifier)?;
    let mut parts = vec![token.value.clone()];

    while parser.current_token_kind() == TokenKind::Dot && parser.peek_kind() == TokenKind::Identifier {
        parser.advance();
        parts.push(parser.advance().value.clone());
    }

    if parts.len() == 1 {
        Ok(TypeWrapper::new(SymbolType {
            name: token.value,
            position: token.span.start,
        }))
    } else {
        Ok(TypeWrapper::new(QualifiedType {
            parts,
            position: token.span.start,
        }))
    }
}

pub fn parse_array_type(
    parser: &mut Parser,
    left: TypeWrapper,
    _bp: BindingPower,
) -> Result<TypeWrapper, Error> {
    parser.expect(TokenKind::OpenBracket)?;
    parser.expect(TokenKind::CloseBracket)?;

    Ok(TypeWrapper::new(ArrayType { underlying: left }))
}

pub fn parse_type(parser: &mut Parser, bp: BindingPower) -> Result<TypeWrapper, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_type_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected a type"),
                },
                parser.get_position(),
            ));
        }
    };

    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    loop {
        let token_kind = parser.current_token_kind();
        let token_bp = *parser
            .get_type_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);
        if token_bp <= bp {
            break;
        }

        let led = match parser.get_type_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => return Err(parser.unexpected("unexpected token in type")),
        };
        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}
