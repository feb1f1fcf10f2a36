use crate::{ast::{ast::Stmt, statements::{AssignStmt, BlockStmt, ExpressionStmt, FnDeclStmt, IfStmt, InitStmt, ReturnStmt}, types::Type}, errors::errors::Error, lexer::tokens::TokenKind, parser::{expr::parse_expr, lookups::BindingPower}, Span};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return handler(parser);
    }

    if parser.current_token_kind() == TokenKind::Identifier && parser.peek_kind(1) == TokenKind::Assignment {
        return parse_assign_stmt(parser);
    }

    let expr = parse_expr(parser, BindingPower::Default)?;

    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression(ExpressionStmt {
        span: Span {
            start: expr.get_span().start.clone(),
            end: parser.previous_end()
        },
        expression: expr,
    }))
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let target = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Assign(AssignStmt {
        identifier: target.value,
        value,
        span: Span {
            start: target.span.start,
            end: parser.previous_end()
        }
    }))
}

pub fn parse_init_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let error = parser.unexpected("expected identifier during variable declaration");
    let variable_name = parser.expect_error(TokenKind::Identifier, Some(error))?.value;

    if parser.current_token_kind() != TokenKind::Assignment {
        return Err(parser.unexpected("expected `=` and an initial value"));
    }
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Init(InitStmt {
        identifier: variable_name,
        value,
        span: Span {
            start,
            end: parser.previous_end()
        }
    }))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    let condition = parse_expr(parser, BindingPower::Default)?;
    let then_body = parse_block(parser)?;

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();

        if parser.current_token_kind() == TokenKind::If {
            // `else if` becomes an alternative block holding the nested if
            let nested = parse_if_stmt(parser)?;
            BlockStmt {
                span: nested.get_span().clone(),
                body: vec![nested],
            }
        } else {
            parse_block(parser)?
        }
    } else {
        let here = parser.previous_end();
        BlockStmt {
            body: vec![],
            span: Span {
                start: here.clone(),
                end: here
            }
        }
    };

    Ok(Stmt::If(IfStmt {
        condition,
        then_body,
        else_body,
        span: Span {
            start,
            end: parser.previous_end()
        }
    }))
}

/// Parses `{ stmt* }`.
pub fn parse_block(parser: &mut Parser) -> Result<BlockStmt, Error> {
    let start = parser.expect(TokenKind::OpenCurly)?.span.start;

    let mut statements = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseCurly {
        match parser.current_token_kind() {
            TokenKind::EOF => return Err(parser.unexpected("expected `}` to close the block")),
            TokenKind::Fn => return Err(parser.unexpected("functions may only be declared at the top level")),
            _ => statements.push(parse_stmt(parser)?),
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(BlockStmt {
        body: statements,
        span: Span {
            start,
            end: parser.previous_end()
        }
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

pub fn parse_fn_decl(parser: &mut Parser) -> Result<FnDeclStmt, Error> {
    let start = parser.expect(TokenKind::Fn)?.span.start;

    let identifier = parser.expect(TokenKind::Identifier)?.value;

    parser.expect(TokenKind::OpenParen)?;

    let mut parameters = Vec::new();
    while parser.current_token_kind() != TokenKind::CloseParen {
        let name = parser.expect(TokenKind::Identifier)?.value;
        parser.expect(TokenKind::Colon)?;
        let ty = parse_type(parser)?;
        parameters.push((name, ty));

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else if parser.current_token_kind() != TokenKind::CloseParen {
            return Err(parser.unexpected("expected `,` or `)` in parameter list"));
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    let return_type = if parser.current_token_kind() == TokenKind::Arrow {
        parser.advance();
        parse_type(parser)?
    } else {
        Type::Nothing
    };

    let body = parse_block(parser)?;

    Ok(FnDeclStmt {
        span: Span {
            start,
            end: parser.previous_end()
        },
        identifier,
        parameters,
        return_type,
        body
    })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start = parser.advance().span.start.clone();

    if parser.current_token_kind() == TokenKind::Semicolon {
        return Err(parser.unexpected("expected a value to return"));
    }

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Return(ReturnStmt {
        value,
        span: Span {
            start,
            end: parser.previous_end()
        }
    }))
}
