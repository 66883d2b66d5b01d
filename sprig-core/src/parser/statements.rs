use crate::ast::{BlockStatement, Identifier, LetStatement, ReturnStatement, Statement};
use crate::parser::expressions::{parse_expression, Precedence};
use crate::parser::{ParseError, Parser};
use crate::token::TokenKind;

/// Parses the statement starting at the current token. On success the
/// current token is the last one of the statement.
pub fn parse_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    match parser.token.kind {
        TokenKind::Let => Ok(Statement::Let(parse_let_statement(parser)?)),
        TokenKind::Return => Ok(Statement::Return(parse_return_statement(parser)?)),
        _ => Ok(Statement::Expression(parse_expression_statement(parser)?)),
    }
}

fn parse_let_statement(parser: &mut Parser) -> Result<LetStatement, ParseError> {
    parser.expect_peek(TokenKind::Identifier)?;
    let identifier = Identifier::new(parser.token.text.clone());
    parser.expect_peek(TokenKind::Assign)?;
    parser.next_token();

    let value = parse_expression(parser, Precedence::Lowest)?;
    skip_to_semicolon(parser);

    Ok(LetStatement { identifier, value })
}

fn parse_return_statement(parser: &mut Parser) -> Result<ReturnStatement, ParseError> {
    parser.next_token();

    let value = parse_expression(parser, Precedence::Lowest)?;
    skip_to_semicolon(parser);

    Ok(ReturnStatement { value })
}

// Anything between the bound expression and the `;` is ignored.
fn skip_to_semicolon(parser: &mut Parser) {
    while !parser.token_is(TokenKind::SemiColon) && !parser.token_is(TokenKind::Eof) {
        parser.next_token();
    }
}

fn parse_expression_statement(parser: &mut Parser) -> Result<crate::ast::Expression, ParseError> {
    let expression = parse_expression(parser, Precedence::Lowest)?;

    while parser.peek_token_is(TokenKind::SemiColon) {
        parser.next_token();
    }

    Ok(expression)
}

/// Expects the current token to be `{`; leaves the parser on the closing `}`.
pub fn parse_block_statement(parser: &mut Parser) -> Result<BlockStatement, ParseError> {
    let mut statements = Vec::new();
    parser.next_token();

    while !parser.token_is(TokenKind::RBrace) && !parser.token_is(TokenKind::Eof) {
        match parse_statement(parser) {
            Ok(statement) => statements.push(statement),
            Err(err) => {
                parser.record(err);
                parser.synchronize();
                if parser.token_is(TokenKind::RBrace) {
                    break;
                }
            }
        }
        parser.next_token();
    }

    if parser.token_is(TokenKind::Eof) {
        return Err(ParseError::unexpected_token(
            TokenKind::RBrace,
            &parser.token,
        ));
    }

    Ok(BlockStatement { statements })
}
