use crate::{
    ast::{
        ast::{Expr, StmtWrapper},
        statements::{BlockStmt, VarDeclStmt, VarFragment},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::{lookups::describe_construct, parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied();
    if let Some(handler) = handler {
        return handler(parser);
    }

    if starts_local_declaration(parser) {
        return parse_var_decl_stmt(parser);
    }

    // Parsing first lets an unsupported operator name itself in the error
    let expr = parse_expr(parser, BindingPower::Default)?;
    Err(Error::new(
        ErrorImpl::UnsupportedConstruct {
            construct: String::from("expression statement"),
        },
        expr.get_span().start.clone(),
    ))
}

/// Looks ahead for `Name [. Name]* [[]]* identifier`, the shape of a local
/// declaration whose type is a class name.
fn starts_local_declaration(parser: &Parser) -> bool {
    if parser.current_token_kind() != TokenKind::Identifier {
        return false;
    }

    let mut offset = 1;
    while parser.peek_kind_at(offset) == TokenKind::Dot
        && parser.peek_kind_at(offset + 1) == TokenKind::Identifier
    {
        offset += 2;
    }
    while parser.peek_kind_at(offset) == TokenKind::OpenBracket
        && parser.peek_kind_at(offset + 1) == TokenKind::CloseBracket
    {
        offset += 2;
    }

    parser.peek_kind_at(offset) == TokenKind::Identifier
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    let start = parser.get_position();

    let var_type = parse_type(parser, BindingPower::Default)?;
    let fragments = parse_fragments(parser)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(StmtWrapper::new(VarDeclStmt {
        var_type,
        fragments,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    }))
}

/// Parses `name [= expr] (, name [= expr])*`, stopping before the `;`.
pub fn parse_fragments(parser: &mut Parser) -> Result<Vec<VarFragment>, Error> {
    let mut fragments = Vec::new();

    loop {
        let error = parser.unexpected("expected identifier during variable declaration");
        let name = parser.expect_error(TokenKind::Identifier, Some(error))?;

        if parser.current_token_kind() == TokenKind::OpenBracket {
            return Err(parser.unsupported("array declarator"));
        }

        let initializer = if parser.current_token_kind() == TokenKind::Assignment {
            parser.advance();
            Some(parse_expr(parser, BindingPower::Default)?)
        } else {
            None
        };

        fragments.push(VarFragment {
            identifier: name.value,
            initializer,
            span: Span {
                start: name.span.start,
                end: parser.get_previous_end(),
            },
        });

        if parser.current_token_kind() != TokenKind::Comma {
            break;
        }
        parser.advance();
    }

    Ok(fragments)
}

pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(parser.unexpected("expected '}' before end of file"));
        }
        statements.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        body: statements,
        span: Span {
            start,
            end: parser.get_previous_end(),
        },
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    Ok(StmtWrapper::new(parse_block(parser)?))
}

/// Statements that parse in Java but have no typing rule here.
pub fn parse_unsupported_stmt(parser: &mut Parser) -> Result<StmtWrapper, Error> {
    Err(parser.unsupported(describe_construct(parser.current_token_kind())))
}
