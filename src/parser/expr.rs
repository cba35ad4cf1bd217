use crate::{
    ast::{
        ast::{ExprWrapper, Expr},
        expressions::{BooleanExpr, NullExpr, NumberExpr, SymbolExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{describe_construct, BindingPower},
    parser::Parser,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<ExprWrapper, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let nud = match parser.get_nud_lookup().get(&token_kind) {
        Some(nud) => *nud,
        None => {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: parser.current_token().value.clone(),
                },
                parser.get_position(),
            ))
        }
    };

    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    loop {
        let token_kind = parser.current_token_kind();
        let token_bp = *parser
            .get_bp_lookup()
            .get(&token_kind)
            .unwrap_or(&BindingPower::Default);
        if token_bp <= bp {
            break;
        }

        let led = match parser.get_led_lookup().get(&token_kind) {
            Some(led) => *led,
            None => {
                return Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        token: left.get_display_name(),
                    },
                    left.get_span().start.clone(),
                ))
            }
        };
        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}

/// Decodes a decimal, hex, octal or binary `int` literal.
///
/// Non-decimal literals cover the full 32 bits, so `0xFFFFFFFF` is `-1`.
pub fn parse_int_literal(token: &str) -> Option<i32> {
    let digits = token.replace('_', "");

    let (radix, body) = if let Some(hex) = digits.strip_prefix("0x").or_else(|| digits.strip_prefix("0X")) {
        (16, hex)
    } else if let Some(binary) = digits.strip_prefix("0b").or_else(|| digits.strip_prefix("0B")) {
        (2, binary)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        return digits.parse::<i32>().ok();
    };

    u32::from_str_radix(body, radix).ok().map(|value| value as i32)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.current_token().value.clone();
            match parse_int_literal(&token) {
                Some(value) => Ok(ExprWrapper::new(NumberExpr {
                    value,
                    token,
                    span: parser.advance().span.clone(),
                })),
                None => Err(Error::new(
                    ErrorImpl::NumberParseError { token },
                    parser.get_position(),
                )),
            }
        }
        TokenKind::Identifier => Ok(ExprWrapper::new(SymbolExpr {
            value: parser.current_token().value.clone(),
            span: parser.advance().span.clone(),
        })),
        TokenKind::True | TokenKind::False => Ok(ExprWrapper::new(BooleanExpr {
            value: parser.current_token_kind() == TokenKind::True,
            span: parser.advance().span.clone(),
        })),
        TokenKind::Null => Ok(ExprWrapper::new(NullExpr {
            span: parser.advance().span.clone(),
        })),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// Prefix forms the checker has no rule for: strings, unary operators,
/// parentheses, and `new`.
pub fn parse_unsupported_nud(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let construct = match parser.current_token_kind() {
        TokenKind::OpenParen => "parenthesized expression",
        TokenKind::Dash => "unary operator",
        kind => describe_construct(kind),
    };
    Err(parser.unsupported(construct))
}

/// Infix and postfix forms the checker has no rule for.
pub fn parse_unsupported_led(
    parser: &mut Parser,
    _left: ExprWrapper,
    _bp: BindingPower,
) -> Result<ExprWrapper, Error> {
    Err(parser.unsupported(describe_construct(parser.current_token_kind())))
}
