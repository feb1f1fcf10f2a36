use crate::{ast::{ast::Expr, expressions::{BooleanExpr, CallExpr, IdentifierExpr, InfixExpr, IntegerExpr, StringExpr}}, errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind, Span};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() }, parser.get_position()));
    };

    let mut left = nud(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    while *parser.get_bp_lookup().get(&parser.current_token_kind()).unwrap_or(&BindingPower::Default) > bp {
        let token_kind = parser.current_token_kind();
        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() }, parser.get_position()));
        };
        let token_bp = parser.get_bp_lookup()[&token_kind];

        left = led(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.current_token().clone();

            match token.value.parse::<i64>() {
                Ok(value) => {
                    parser.advance();
                    Ok(Expr::Integer(IntegerExpr { value, span: token.span }))
                },
                Err(_) => Err(Error::new(ErrorImpl::NumberParseError { token: token.value }, token.span.start)),
            }
        },
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            Ok(Expr::Identifier(IdentifierExpr { value: token.value, span: token.span }))
        },
        TokenKind::String => {
            let token = parser.advance().clone();
            Ok(Expr::String(StringExpr { value: token.value, span: token.span }))
        },
        TokenKind::True | TokenKind::False => {
            let token = parser.advance().clone();
            Ok(Expr::Boolean(BooleanExpr { value: token.kind == TokenKind::True, span: token.span }))
        },
        _ => {
            Err(Error::new(ErrorImpl::UnexpectedToken { token: parser.current_token().value.clone() }, parser.get_position()))
        }
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance().clone();

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone()
        },
        left: Box::new(left),
        operator: operator_token.operator_symbol(),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    // Only named functions can be called
    let Expr::Identifier(callee) = left else {
        return Err(Error::new(ErrorImpl::UnexpectedTokenDetailed {
            token: String::from("("),
            message: String::from("only a function name can be called")
        }, parser.get_position()));
    };

    parser.advance();

    let mut args = vec![];

    while parser.current_token_kind() != TokenKind::CloseParen {
        args.push(parse_expr(parser, BindingPower::Default)?);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
        } else if parser.current_token_kind() != TokenKind::CloseParen {
            return Err(parser.unexpected("expected `,` or `)` in argument list"));
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        span: Span {
            start: callee.span.start.clone(),
            end: parser.previous_end()
        },
        callee: callee.value,
        arguments: args
    }))
}
