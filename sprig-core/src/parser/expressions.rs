use std::rc::Rc;

use super::error::ParseError;
use super::statements::parse_block_statement;
use crate::ast::{BinaryOperator, Callee, Expression, FunctionLiteral, Identifier, UnaryOperator};
use crate::parser::Parser;
use crate::token::TokenKind;

#[derive(PartialOrd, PartialEq, Debug, Clone, Copy)]
pub enum Precedence {
    Lowest = 0,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
}

pub fn precedence_of(token: TokenKind) -> Precedence {
    match token {
        TokenKind::Equal => Precedence::Equality,
        TokenKind::NotEqual => Precedence::Equality,
        TokenKind::LessThan => Precedence::Relational,
        TokenKind::GreaterThan => Precedence::Relational,
        TokenKind::Plus => Precedence::Additive,
        TokenKind::Minus => Precedence::Additive,
        TokenKind::Asterisk => Precedence::Multiplicative,
        TokenKind::Slash => Precedence::Multiplicative,
        TokenKind::LParen => Precedence::Call,
        _ => Precedence::Lowest,
    }
}

type PrefixParseFn = fn(&mut Parser<'_>) -> Result<Expression, ParseError>;
type InfixParseFn = fn(&mut Parser<'_>, Expression) -> Result<Expression, ParseError>;

/// What can start an expression.
fn prefix_parse_function(token: TokenKind) -> Option<PrefixParseFn> {
    match token {
        TokenKind::Identifier => Some(parse_identifier),
        TokenKind::Integer => Some(parse_integer_literal),
        TokenKind::True | TokenKind::False => Some(parse_boolean_literal),
        TokenKind::Function => Some(parse_function_literal),
        TokenKind::Bang | TokenKind::Minus => Some(parse_unary_expression),
        TokenKind::LParen => Some(parse_grouped_expression),
        TokenKind::If => Some(parse_if_expression),
        _ => None,
    }
}

/// What can continue an expression once a left operand exists.
fn infix_parse_function(token: TokenKind) -> Option<InfixParseFn> {
    match token {
        TokenKind::Plus
        | TokenKind::Minus
        | TokenKind::Asterisk
        | TokenKind::Slash
        | TokenKind::LessThan
        | TokenKind::GreaterThan
        | TokenKind::Equal
        | TokenKind::NotEqual => Some(parse_binary_expression),
        TokenKind::LParen => Some(parse_call_expression),
        _ => None,
    }
}

/// Parses the expression starting at the current token, consuming operators
/// while they bind tighter than `precedence`.
pub fn parse_expression(
    parser: &mut Parser,
    precedence: Precedence,
) -> Result<Expression, ParseError> {
    let Some(prefix) = prefix_parse_function(parser.token.kind) else {
        return Err(ParseError::NoUnaryParseFunction(parser.token.clone()));
    };
    let mut left_expression = prefix(parser)?;

    while !parser.peek_token_is(TokenKind::SemiColon) && precedence < parser.peek_precedence() {
        let Some(infix) = infix_parse_function(parser.peek_token.kind) else {
            break;
        };
        parser.next_token();
        left_expression = infix(parser, left_expression)?;
    }

    Ok(left_expression)
}

fn parse_identifier(parser: &mut Parser) -> Result<Expression, ParseError> {
    Ok(Expression::Identifier(Identifier::new(
        parser.token.text.clone(),
    )))
}

fn parse_integer_literal(parser: &mut Parser) -> Result<Expression, ParseError> {
    parser
        .token
        .text
        .parse()
        .map(Expression::IntegerLiteral)
        .map_err(|_| ParseError::InvalidInteger(parser.token.clone()))
}

fn parse_boolean_literal(parser: &mut Parser) -> Result<Expression, ParseError> {
    Ok(Expression::BooleanLiteral(parser.token_is(TokenKind::True)))
}

fn parse_unary_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    let operator = match parser.token.kind {
        TokenKind::Bang => UnaryOperator::Bang,
        _ => UnaryOperator::Minus,
    };
    parser.next_token();

    Ok(Expression::Unary {
        operator,
        operand: Box::new(parse_expression(parser, Precedence::Unary)?),
    })
}

fn binary_operator(token: TokenKind) -> BinaryOperator {
    match token {
        TokenKind::Plus => BinaryOperator::Plus,
        TokenKind::Minus => BinaryOperator::Minus,
        TokenKind::Asterisk => BinaryOperator::Multiply,
        TokenKind::Slash => BinaryOperator::Divide,
        TokenKind::LessThan => BinaryOperator::LessThan,
        TokenKind::GreaterThan => BinaryOperator::GreaterThan,
        TokenKind::Equal => BinaryOperator::Equal,
        _ => BinaryOperator::NotEqual,
    }
}

fn parse_binary_expression(parser: &mut Parser, left: Expression) -> Result<Expression, ParseError> {
    let operator = binary_operator(parser.token.kind);
    let precedence = parser.current_precedence();
    parser.next_token();

    Ok(Expression::Binary {
        operator,
        left: Box::new(left),
        right: Box::new(parse_expression(parser, precedence)?),
    })
}

fn parse_grouped_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    parser.next_token();
    let expression = parse_expression(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::RParen)?;

    Ok(expression)
}

fn parse_if_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    parser.expect_peek(TokenKind::LParen)?;
    parser.next_token();
    let condition = Box::new(parse_expression(parser, Precedence::Lowest)?);
    parser.expect_peek(TokenKind::RParen)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let consequence = parse_block_statement(parser)?;

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.next_token();
        parser.expect_peek(TokenKind::LBrace)?;
        Some(parse_block_statement(parser)?)
    } else {
        None
    };

    Ok(Expression::If {
        condition,
        consequence,
        alternative,
    })
}

fn parse_function_literal(parser: &mut Parser) -> Result<Expression, ParseError> {
    parser.expect_peek(TokenKind::LParen)?;
    let parameters = parse_parameters(parser)?;

    parser.expect_peek(TokenKind::LBrace)?;
    let body = parse_block_statement(parser)?;

    Ok(Expression::FunctionLiteral(FunctionLiteral {
        parameters: parameters.into(),
        body: Rc::new(body),
    }))
}

fn parse_parameters(parser: &mut Parser) -> Result<Vec<Identifier>, ParseError> {
    let mut identifiers = Vec::new();

    if parser.peek_token_is(TokenKind::RParen) {
        parser.next_token();
        return Ok(identifiers);
    }

    parser.expect_peek(TokenKind::Identifier)?;
    identifiers.push(Identifier::new(parser.token.text.clone()));

    while parser.peek_token_is(TokenKind::Comma) {
        parser.next_token();
        parser.expect_peek(TokenKind::Identifier)?;
        identifiers.push(Identifier::new(parser.token.text.clone()));
    }

    parser.expect_peek(TokenKind::RParen)?;

    Ok(identifiers)
}

fn parse_call_expression(parser: &mut Parser, left: Expression) -> Result<Expression, ParseError> {
    let start = parser.token.start;
    let arguments = parse_call_arguments(parser)?;

    let function = Callee::try_from(left)
        .map_err(|expression| ParseError::InvalidCallee { expression, start })?;

    Ok(Expression::Call {
        function,
        arguments,
    })
}

// A broken argument after the first one is reported and left out; the call
// itself survives.
fn parse_call_arguments(parser: &mut Parser) -> Result<Vec<Expression>, ParseError> {
    let mut arguments = Vec::new();

    if parser.peek_token_is(TokenKind::RParen) {
        parser.next_token();
        return Ok(arguments);
    }

    parser.next_token();
    arguments.push(parse_expression(parser, Precedence::Lowest)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.next_token();
        parser.next_token();
        match parse_expression(parser, Precedence::Lowest) {
            Ok(argument) => arguments.push(argument),
            Err(err) => parser.record(err),
        }
    }

    parser.expect_peek(TokenKind::RParen)?;

    Ok(arguments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order() {
        assert!(Precedence::Lowest < Precedence::Equality);
        assert!(Precedence::Equality < Precedence::Relational);
        assert!(Precedence::Relational < Precedence::Additive);
        assert!(Precedence::Additive < Precedence::Multiplicative);
        assert!(Precedence::Multiplicative < Precedence::Unary);
        assert!(Precedence::Unary < Precedence::Call);
    }

    #[test]
    fn test_every_infix_token_has_a_precedence() {
        let tokens = [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::Slash,
            TokenKind::LessThan,
            TokenKind::GreaterThan,
            TokenKind::Equal,
            TokenKind::NotEqual,
            TokenKind::LParen,
        ];
        for token in tokens {
            assert!(infix_parse_function(token).is_some(), "{token}");
            assert!(precedence_of(token) > Precedence::Lowest, "{token}");
        }
        assert!(infix_parse_function(TokenKind::SemiColon).is_none());
        assert!(prefix_parse_function(TokenKind::RBrace).is_none());
    }
}
