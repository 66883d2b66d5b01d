use crate::token::{Token, TokenKind};

/// On-demand scanner over a source string.
///
/// `get_token` never fails: unknown characters become `illegal` tokens and
/// once the input is exhausted every call yields an `eof` token.
#[derive(Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    iter: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let iter = input.char_indices().peekable();
        Self { input, iter }
    }

    fn is_letter(ch: char) -> bool {
        ch.is_ascii_alphabetic()
    }

    pub fn get_token(&mut self) -> Token {
        while self.iter.next_if(|(_, ch)| ch.is_whitespace()).is_some() {}

        let Some((start, ch)) = self.iter.next() else {
            return Token::new(TokenKind::Eof, "", self.input.len());
        };

        let token = match ch {
            '=' => self.with_lookahead(start, TokenKind::Assign, TokenKind::Equal),
            '!' => self.with_lookahead(start, TokenKind::Bang, TokenKind::NotEqual),
            c if Self::is_letter(c) => self.read_identifier(start),
            c if c.is_ascii_digit() => self.read_number(start),
            c => match TokenKind::from_single_char(c) {
                Some(kind) => Token::new(kind, self.slice(start), start),
                None => Token::new(TokenKind::Illegal, self.slice(start), start),
            },
        };
        tracing::trace!(kind = %token.kind, start = token.start, text = %token.text, "token");
        token
    }

    /// `=` and `!` become two-character tokens when followed by `=`.
    fn with_lookahead(&mut self, start: usize, single: TokenKind, double: TokenKind) -> Token {
        let kind = if self.iter.next_if(|(_, ch)| *ch == '=').is_some() {
            double
        } else {
            single
        };
        Token::new(kind, self.slice(start), start)
    }

    fn read_identifier(&mut self, start: usize) -> Token {
        while self.iter.next_if(|(_, ch)| Self::is_letter(*ch)).is_some() {}

        let ident = self.slice(start);
        Token::new(
            TokenKind::keyword(ident).unwrap_or(TokenKind::Identifier),
            ident,
            start,
        )
    }

    fn read_number(&mut self, start: usize) -> Token {
        while self.iter.next_if(|(_, ch)| ch.is_ascii_digit()).is_some() {}

        Token::new(TokenKind::Integer, self.slice(start), start)
    }

    fn slice(&mut self, start: usize) -> &'a str {
        let input = self.input;
        let end = self.next_idx();
        &input[start..end]
    }

    fn next_idx(&mut self) -> usize {
        self.iter
            .peek()
            .map(|(idx, _)| *idx)
            .unwrap_or(self.input.len())
    }
}

/// Yields every token up to, but excluding, `eof`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.get_token();
        if token.is(TokenKind::Eof) {
            None
        } else {
            Some(token)
        }
    }
}
