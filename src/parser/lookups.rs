use std::collections::HashMap;

use crate::{ast::ast::{ExprWrapper, StmtWrapper}, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser, stmt::*};

#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Assignment,
    Logical,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
    Member,
    Primary
}

pub type StmtHandler = fn(&mut Parser) -> Result<StmtWrapper, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<ExprWrapper, Error>;
pub type LEDHandler = fn(&mut Parser, ExprWrapper, BindingPower) -> Result<ExprWrapper, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Operators are registered so the Pratt loop stops on them and reports
    // them as unsupported rather than as a stray token
    parser.led(TokenKind::Assignment, BindingPower::Assignment, parse_unsupported_led);
    parser.led(TokenKind::PlusEquals, BindingPower::Assignment, parse_unsupported_led);
    parser.led(TokenKind::MinusEquals, BindingPower::Assignment, parse_unsupported_led);

    // Logical
    parser.led(TokenKind::And, BindingPower::Logical, parse_unsupported_led);
    parser.led(TokenKind::Or, BindingPower::Logical, parse_unsupported_led);
    parser.led(TokenKind::Question, BindingPower::Logical, parse_unsupported_led);

    // Relational
    parser.led(TokenKind::Less, BindingPower::Relational, parse_unsupported_led);
    parser.led(TokenKind::LessEquals, BindingPower::Relational, parse_unsupported_led);
    parser.led(TokenKind::Greater, BindingPower::Relational, parse_unsupported_led);
    parser.led(TokenKind::GreaterEquals, BindingPower::Relational, parse_unsupported_led);
    parser.led(TokenKind::Equals, BindingPower::Relational, parse_unsupported_led);
    parser.led(TokenKind::NotEquals, BindingPower::Relational, parse_unsupported_led);

    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::Additive, parse_unsupported_led);
    parser.led(TokenKind::Dash, BindingPower::Additive, parse_unsupported_led);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, parse_unsupported_led);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, parse_unsupported_led);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, parse_unsupported_led);

    parser.led(TokenKind::PlusPlus, BindingPower::Unary, parse_unsupported_led);
    parser.led(TokenKind::MinusMinus, BindingPower::Unary, parse_unsupported_led);
    parser.led(TokenKind::OpenParen, BindingPower::Call, parse_unsupported_led);
    parser.led(TokenKind::OpenBracket, BindingPower::Call, parse_unsupported_led);
    parser.led(TokenKind::Dot, BindingPower::Member, parse_unsupported_led);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::Null, parse_primary_expr);
    parser.nud(TokenKind::String, parse_unsupported_nud);
    parser.nud(TokenKind::Dash, parse_unsupported_nud);
    parser.nud(TokenKind::Not, parse_unsupported_nud);
    parser.nud(TokenKind::PlusPlus, parse_unsupported_nud);
    parser.nud(TokenKind::MinusMinus, parse_unsupported_nud);
    parser.nud(TokenKind::OpenParen, parse_unsupported_nud);
    parser.nud(TokenKind::New, parse_unsupported_nud);

    // Statements
    parser.stmt(TokenKind::OpenCurly, parse_block_stmt);
    parser.stmt(TokenKind::Int, parse_var_decl_stmt);
    parser.stmt(TokenKind::Boolean, parse_var_decl_stmt);
    parser.stmt(TokenKind::Void, parse_var_decl_stmt);
    parser.stmt(TokenKind::Double, parse_var_decl_stmt);
    parser.stmt(TokenKind::Float, parse_var_decl_stmt);
    parser.stmt(TokenKind::Long, parse_var_decl_stmt);
    parser.stmt(TokenKind::Short, parse_var_decl_stmt);
    parser.stmt(TokenKind::Byte, parse_var_decl_stmt);
    parser.stmt(TokenKind::Char, parse_var_decl_stmt);
    parser.stmt(TokenKind::Return, parse_unsupported_stmt);
    parser.stmt(TokenKind::If, parse_unsupported_stmt);
    parser.stmt(TokenKind::Else, parse_unsupported_stmt);
    parser.stmt(TokenKind::While, parse_unsupported_stmt);
    parser.stmt(TokenKind::For, parse_unsupported_stmt);
    parser.stmt(TokenKind::Do, parse_unsupported_stmt);
    parser.stmt(TokenKind::Class, parse_unsupported_stmt);
    parser.stmt(TokenKind::Semicolon, parse_unsupported_stmt);
}

/// Names the construct a token starts, for `UnsupportedConstruct` errors.
pub fn describe_construct(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Assignment | TokenKind::PlusEquals | TokenKind::MinusEquals => "assignment",
        TokenKind::And | TokenKind::Or | TokenKind::Not => "logical operator",
        TokenKind::Question => "conditional expression",
        TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals
        | TokenKind::Equals
        | TokenKind::NotEquals => "relational operator",
        TokenKind::Plus | TokenKind::Dash | TokenKind::Star | TokenKind::Slash | TokenKind::Percent => "arithmetic operator",
        TokenKind::PlusPlus | TokenKind::MinusMinus => "increment operator",
        TokenKind::OpenParen => "method invocation",
        TokenKind::OpenBracket => "array access",
        TokenKind::Dot => "field access",
        TokenKind::String => "string literal",
        TokenKind::New => "object creation",
        TokenKind::Return => "return statement",
        TokenKind::If | TokenKind::Else => "if statement",
        TokenKind::While | TokenKind::Do => "loop",
        TokenKind::For => "loop",
        TokenKind::Class => "local class declaration",
        TokenKind::Semicolon => "empty statement",
        TokenKind::Interface => "interface declaration",
        TokenKind::Enum => "enum declaration",
        TokenKind::Extends | TokenKind::Implements => "inheritance",
        _ => "construct",
    }
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
