use std::fmt::Display;
use std::rc::Rc;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    // Keywords
    Let,
    Function,
    If,
    Else,
    Return,
    True,
    False,

    // Operators
    Assign,
    Plus,
    Minus,
    Bang,
    Slash,
    Asterisk,
    LessThan,
    GreaterThan,
    Equal,
    NotEqual,

    // Delimiters
    Comma,
    SemiColon,
    LParen,
    RParen,
    LBrace,
    RBrace,

    Identifier,
    Integer,

    Illegal,
    Eof,
}

impl TokenKind {
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        match ident {
            "fn" => Some(TokenKind::Function),
            "let" => Some(TokenKind::Let),
            "true" => Some(TokenKind::True),
            "false" => Some(TokenKind::False),
            "if" => Some(TokenKind::If),
            "else" => Some(TokenKind::Else),
            "return" => Some(TokenKind::Return),
            _ => None,
        }
    }

    /// Kinds produced from a single character with no lookahead.
    pub fn from_single_char(ch: char) -> Option<TokenKind> {
        match ch {
            '+' => Some(TokenKind::Plus),
            '-' => Some(TokenKind::Minus),
            '/' => Some(TokenKind::Slash),
            '*' => Some(TokenKind::Asterisk),
            '<' => Some(TokenKind::LessThan),
            '>' => Some(TokenKind::GreaterThan),
            ';' => Some(TokenKind::SemiColon),
            ',' => Some(TokenKind::Comma),
            '(' => Some(TokenKind::LParen),
            ')' => Some(TokenKind::RParen),
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        use TokenKind::*;
        match self {
            Let => "let",
            Function => "function",
            If => "if",
            Else => "else",
            Return => "return",
            True => "true",
            False => "false",
            Assign => "assign",
            Plus => "plus",
            Minus => "minus",
            Bang => "bang",
            Slash => "slash",
            Asterisk => "asterisk",
            LessThan => "lessThan",
            GreaterThan => "greaterThan",
            Equal => "equal",
            NotEqual => "notEqual",
            Comma => "comma",
            SemiColon => "semicolon",
            LParen => "leftParen",
            RParen => "rightParen",
            LBrace => "leftBrace",
            RBrace => "rightBrace",
            Identifier => "identifier",
            Integer => "integer",
            Illegal => "illegal",
            Eof => "eof",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// A lexical unit. `start` is the byte offset of its first character.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Rc<str>,
    pub start: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<Rc<str>>, start: usize) -> Self {
        Token {
            kind,
            text: text.into(),
            start,
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>5}  {:<12} {:?}", self.start, self.kind, self.text)
    }
}
