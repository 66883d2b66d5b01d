use thiserror::Error;

use crate::ast::Expression;
use crate::token::{Token, TokenKind};

/// A recoverable grammar error. The parser collects these instead of
/// stopping at the first one.
#[derive(Debug, PartialEq, Clone, Error)]
pub enum ParseError {
    #[error("expected next token to be {expected}, got {} instead", .got.kind)]
    UnexpectedToken { expected: TokenKind, got: Token },
    #[error("No unary parse function for {}", .0.kind)]
    NoUnaryParseFunction(Token),
    #[error("could not parse {} as integer", .0.text)]
    InvalidInteger(Token),
    #[error("cannot call {expression}: only identifiers and function literals are callable")]
    InvalidCallee { expression: Expression, start: usize },
}

impl ParseError {
    pub fn unexpected_token(expected: TokenKind, got: &Token) -> Self {
        ParseError::UnexpectedToken {
            expected,
            got: got.clone(),
        }
    }

    /// Byte offset in the source the error points at.
    pub fn start(&self) -> usize {
        match self {
            ParseError::UnexpectedToken { got, .. } => got.start,
            ParseError::NoUnaryParseFunction(token) | ParseError::InvalidInteger(token) => {
                token.start
            }
            ParseError::InvalidCallee { start, .. } => *start,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let tests = vec![
            (
                ParseError::unexpected_token(TokenKind::RParen, &Token::new(TokenKind::Eof, "", 4)),
                "expected next token to be rightParen, got eof instead",
            ),
            (
                ParseError::NoUnaryParseFunction(Token::new(TokenKind::Asterisk, "*", 0)),
                "No unary parse function for asterisk",
            ),
            (
                ParseError::InvalidInteger(Token::new(
                    TokenKind::Integer,
                    "99999999999999999999",
                    0,
                )),
                "could not parse 99999999999999999999 as integer",
            ),
        ];

        for (error, expected) in tests {
            assert_eq!(error.to_string(), expected);
        }
    }
}
