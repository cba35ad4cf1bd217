//! Declaration parsing: the compilation unit, classes, and their members.
//!
//! Declarations are not looked up by token like statements are. A member
//! only reveals what it is after its modifiers and type, so they are parsed
//! by recursive descent with a little lookahead.

use crate::{
    ast::{
        declarations::{ClassDecl, CompilationUnit, FieldDecl, ImportDecl, MethodDecl, Modifier, ParamDecl},
        ast::TypeWrapper,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::{describe_construct, BindingPower},
    parser::Parser,
    stmt::{parse_block, parse_fragments},
    types::parse_type,
};

pub fn parse_compilation_unit(parser: &mut Parser) -> Result<CompilationUnit, Error> {
    let start = parser.get_position();

    let package = if parser.current_token_kind() == TokenKind::Package {
        parser.advance();
        let name = parse_qualified_name(parser)?;
        parser.expect(TokenKind::Semicolon)?;
        Some(name)
    } else {
        None
    };

    let mut imports = Vec::new();
    while parser.current_token_kind() == TokenKind::Import {
        imports.push(parse_import_decl(parser)?);
    }

    let mut types = Vec::new();
    while parser.has_tokens() {
        if parser.current_token_kind() == TokenKind::Semicolon {
            parser.advance();
            continue;
        }
        types.push(parse_type_decl(parser)?);
    }

    Ok(CompilationUnit {
        package,
        imports,
        types,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    })
}

fn parse_qualified_name(parser: &mut Parser) -> Result<String, Error> {
    let mut parts = vec![parser.expect(TokenKind::Identifier)?.value];
    while parser.current_token_kind() == TokenKind::Dot && parser.peek_kind() == TokenKind::Identifier {
        parser.advance();
        parts.push(parser.advance().value.clone());
    }
    Ok(parts.join("."))
}

pub fn parse_import_decl(parser: &mut Parser) -> Result<ImportDecl, Error> {
    let start = parser.advance().span.start.clone();

    let mut name = parse_qualified_name(parser)?;
    if parser.current_token_kind() == TokenKind::Dot && parser.peek_kind() == TokenKind::Star {
        parser.advance();
        parser.advance();
        name.push_str(".*");
    }

    parser.expect(TokenKind::Semicolon)?;

    Ok(ImportDecl {
        name,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    })
}

pub fn parse_modifiers(parser: &mut Parser) -> Vec<Modifier> {
    let mut modifiers = Vec::new();
    while parser.current_token_kind().is_modifier() {
        let modifier = match parser.current_token_kind() {
            TokenKind::Public => Modifier::Public,
            TokenKind::Private => Modifier::Private,
            TokenKind::Protected => Modifier::Protected,
            TokenKind::Static => Modifier::Static,
            TokenKind::Final => Modifier::Final,
            TokenKind::Abstract => Modifier::Abstract,
            TokenKind::Synchronized => Modifier::Synchronized,
            TokenKind::Native => Modifier::Native,
            TokenKind::Transient => Modifier::Transient,
            TokenKind::Volatile => Modifier::Volatile,
            _ => Modifier::Strictfp,
        };
        modifiers.push(modifier);
        parser.advance();
    }
    modifiers
}

/// Parses a class declaration, including any modifiers in front of it.
pub fn parse_type_decl(parser: &mut Parser) -> Result<ClassDecl, Error> {
    let start = parser.get_position();
    let modifiers = parse_modifiers(parser);

    match parser.current_token_kind() {
        TokenKind::Class => parse_class_decl(parser, start, modifiers),
        TokenKind::Interface | TokenKind::Enum => {
            Err(parser.unsupported(describe_construct(parser.current_token_kind())))
        }
        _ => Err(parser.unexpected("expected a class declaration")),
    }
}

fn parse_class_decl(
    parser: &mut Parser,
    start: crate::Position,
    modifiers: Vec<Modifier>,
) -> Result<ClassDecl, Error> {
    parser.expect(TokenKind::Class)?;

    let error = parser.unexpected("expected identifier after 'class'");
    let name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    if matches!(parser.current_token_kind(), TokenKind::Extends | TokenKind::Implements) {
        return Err(parser.unsupported(describe_construct(parser.current_token_kind())));
    }
    if parser.current_token_kind() == TokenKind::Less {
        return Err(parser.unsupported("type parameters"));
    }

    parser.expect(TokenKind::OpenCurly)?;

    let mut class = ClassDecl {
        name,
        modifiers,
        fields: Vec::new(),
        methods: Vec::new(),
        types: Vec::new(),
        span: Span {
            start: start.clone(),
            end: start,
        },
    };

    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(parser.unexpected("expected '}' before end of file"));
        }
        parse_member(parser, &mut class)?;
    }

    parser.expect(TokenKind::CloseCurly)?;
    class.span.end = parser.get_previous_end();

    Ok(class)
}

/// Parses one class member and files it under `class`.
fn parse_member(parser: &mut Parser, class: &mut ClassDecl) -> Result<(), Error> {
    if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
        return Ok(());
    }

    let start = parser.get_position();
    let modifiers = parse_modifiers(parser);

    match parser.current_token_kind() {
        TokenKind::Class => {
            let nested = parse_class_decl(parser, start, modifiers)?;
            class.types.push(nested);
            return Ok(());
        }
        TokenKind::Interface | TokenKind::Enum => {
            return Err(parser.unsupported(describe_construct(parser.current_token_kind())));
        }
        TokenKind::OpenCurly => return Err(parser.unsupported("initializer block")),
        TokenKind::Identifier if parser.peek_kind() == TokenKind::OpenParen => {
            return Err(parser.unsupported("constructor"));
        }
        _ => {}
    }

    let member_type = parse_type(parser, BindingPower::Default)?;

    if parser.current_token_kind() == TokenKind::Identifier && parser.peek_kind() == TokenKind::OpenParen {
        let method = parse_method_decl(parser, start, modifiers, member_type)?;
        class.methods.push(method);
        return Ok(());
    }

    if parser.current_token_kind() == TokenKind::Identifier && parser.peek_kind() == TokenKind::OpenCurly {
        // `int m;` reads as a field, `int m {` as a method missing its parameters
        let method = parser.current_token().value.clone();
        return Err(Error::new(ErrorImpl::MethodNotDeclared { method }, parser.get_position()));
    }

    let fragments = parse_fragments(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    class.fields.push(FieldDecl {
        modifiers,
        field_type: member_type,
        fragments,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    });

    Ok(())
}

fn parse_method_decl(
    parser: &mut Parser,
    start: crate::Position,
    modifiers: Vec<Modifier>,
    return_type: TypeWrapper,
) -> Result<MethodDecl, Error> {
    let identifier = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseParen {
        parameters.push(parse_param_decl(parser)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else if parser.current_token_kind() != TokenKind::CloseParen {
            return Err(parser.unexpected("expected ',' or ')' in parameter list"));
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    if parser.current_token_kind() == TokenKind::OpenBracket {
        return Err(parser.unsupported("array declarator"));
    }
    if parser.current_token_kind() == TokenKind::Identifier && parser.current_token().value == "throws" {
        return Err(parser.unsupported("throws clause"));
    }

    let body = if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
        None
    } else {
        Some(parse_block(parser)?)
    };

    Ok(MethodDecl {
        modifiers,
        return_type,
        identifier,
        parameters,
        body,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    })
}

fn parse_param_decl(parser: &mut Parser) -> Result<ParamDecl, Error> {
    let start = parser.get_position();

    if parser.current_token_kind().is_modifier() {
        return Err(Error::new(
            ErrorImpl::UnsupportedModifier {
                modifier: parser.current_token().value.clone(),
            },
            start,
        ));
    }

    let param_type = parse_type(parser, BindingPower::Default)?;

    if parser.current_token_kind() == TokenKind::Dot {
        return Err(parser.unsupported("variable arity parameter"));
    }

    let error = parser.unexpected("expected parameter name");
    let identifier = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    if parser.current_token_kind() == TokenKind::OpenBracket {
        return Err(parser.unsupported("array declarator"));
    }

    Ok(ParamDecl {
        identifier,
        param_type,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    })
}

