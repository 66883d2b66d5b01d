pub mod error;
pub mod expressions;
pub mod statements;

use crate::ast::Program;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
pub use error::ParseError;
use expressions::{precedence_of, Precedence};
use statements::parse_statement;

/// Pratt parser with two tokens of lookahead.
///
/// Sub-parsers return `Result` and bail out with `?`; the error is recorded in
/// `errors` wherever parsing can resume (after a statement, after a call
/// argument) and the failed construct is dropped from the tree.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    pub(crate) token: Token,
    pub(crate) peek_token: Token,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let token = lexer.get_token();
        let peek_token = lexer.get_token();
        Self {
            lexer,
            token,
            peek_token,
            errors: Vec::new(),
        }
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Parses the whole input. Errors are available through `errors`
    /// afterwards; the returned program holds every statement that parsed.
    pub fn parse(&mut self) -> Program {
        let mut statements = Vec::new();

        while !self.token_is(TokenKind::Eof) {
            match parse_statement(self) {
                Ok(statement) => statements.push(statement),
                Err(err) => {
                    self.record(err);
                    self.synchronize();
                }
            }
            self.next_token();
        }

        Program { statements }
    }

    /// Parses the whole input, preferring the errors over a partial program.
    pub fn parse_program(mut self) -> Result<Program, Vec<ParseError>> {
        let program = self.parse();
        if self.errors.is_empty() {
            Ok(program)
        } else {
            Err(self.errors)
        }
    }

    pub(crate) fn record(&mut self, error: ParseError) {
        tracing::debug!(start = error.start(), %error, "parse error");
        self.errors.push(error);
    }

    /// Skips the rest of a broken statement, stopping on the `;` or `}` that
    /// ends it.
    pub(crate) fn synchronize(&mut self) {
        while !matches!(
            self.token.kind,
            TokenKind::SemiColon | TokenKind::RBrace | TokenKind::Eof
        ) {
            self.next_token();
        }
    }

    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.get_token();
        self.token = std::mem::replace(&mut self.peek_token, next);
    }

    pub(crate) fn token_is(&self, kind: TokenKind) -> bool {
        self.token.is(kind)
    }

    pub(crate) fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.is(kind)
    }

    /// Advances only when the lookahead has the expected kind.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> Result<(), ParseError> {
        if self.peek_token_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(kind, &self.peek_token))
        }
    }

    pub(crate) fn current_precedence(&self) -> Precedence {
        precedence_of(self.token.kind)
    }

    pub(crate) fn peek_precedence(&self) -> Precedence {
        precedence_of(self.peek_token.kind)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ast::{Expression, Identifier, LetStatement, Statement};

    fn parse(input: &str) -> (Program, Vec<String>) {
        let mut parser = Parser::new(Lexer::new(input));
        let program = parser.parse();
        let errors = parser.errors().iter().map(|e| e.to_string()).collect();
        (program, errors)
    }

    fn test_parsing(tests: Vec<(&str, &str)>) {
        for (input, expected) in tests {
            let program = Parser::new(Lexer::new(input))
                .parse_program()
                .unwrap_or_else(|errors| panic!("{input:?} failed to parse: {errors:?}"));

            assert_eq!(program.to_string(), expected, "{input:?}")
        }
    }

    fn test_errors(tests: Vec<(&str, Vec<&str>)>) {
        for (input, expected) in tests {
            let (_, errors) = parse(input);
            assert_eq!(errors, expected, "{input:?}");
        }
    }

    #[test]
    fn test_let_statements() {
        let (program, errors) = parse("let x = 5; let y = true; let foobar = y;");
        assert!(errors.is_empty(), "{errors:?}");

        let expected = vec![
            ("x", Expression::IntegerLiteral(5)),
            ("y", Expression::BooleanLiteral(true)),
            ("foobar", Expression::Identifier(Identifier::new("y"))),
        ];
        assert_eq!(program.statements.len(), expected.len());
        for (statement, (name, value)) in program.statements.into_iter().zip(expected) {
            assert_eq!(
                statement,
                Statement::Let(LetStatement {
                    identifier: Identifier::new(name),
                    value,
                })
            );
        }
    }

    #[test]
    fn test_let_and_return_skip_to_semicolon() {
        test_parsing(vec![
            ("let x = 5 6 7; x", "let x = 5;\nx;\n"),
            ("return 1 2; 3", "return 1;\n3;\n"),
            ("let x = 5", "let x = 5;\n"),
        ]);
    }

    #[test]
    fn test_return_statements() {
        test_parsing(vec![
            ("return 5;", "return 5;\n"),
            ("return a + b;", "return (a + b);\n"),
        ]);
    }

    #[test]
    fn test_expression_1() {
        let tests = vec![
            ("-a * b", "((-a) * b);\n"),
            ("!-a", "(!(-a));\n"),
            ("a + b + c", "((a + b) + c);\n"),
            ("a + b - c", "((a + b) - c);\n"),
            ("a - b - c", "((a - b) - c);\n"),
            ("a * b * c", "((a * b) * c);\n"),
            ("a * b / c", "((a * b) / c);\n"),
            ("a + b / c", "(a + (b / c));\n"),
            ("a + b * c", "(a + (b * c));\n"),
            (
                "a + b * c + d / e - f",
                "(((a + (b * c)) + (d / e)) - f);\n",
            ),
            ("3 + 4; -5 * 5", "(3 + 4);\n((-5) * 5);\n"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4));\n"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4));\n"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)));\n",
            ),
            ("true", "true;\n"),
            ("3 > 5 == false", "((3 > 5) == false);\n"),
        ];

        test_parsing(tests)
    }

    #[test]
    fn test_expression_precedence() {
        test_parsing(vec![
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4);\n"),
            ("(5 + 5) * 2", "((5 + 5) * 2);\n"),
            ("2 / (5 + 5)", "(2 / (5 + 5));\n"),
            ("-(5 + 5)", "(-(5 + 5));\n"),
            ("!(true == true)", "(!(true == true));\n"),
        ]);
    }

    #[test]
    fn test_call_expression() {
        let tests = vec![
            ("a + add(b * c) + d", "((a + add((b * c))) + d);\n"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)));\n",
            ),
            (
                "add(a + b + c * d / f + g)",
                "add((((a + b) + ((c * d) / f)) + g));\n",
            ),
            ("noop()", "noop();\n"),
            ("fn(x) { x }(5)", "fn(x) {x;}(5);\n"),
        ];

        test_parsing(tests)
    }

    #[test]
    fn test_conditional() {
        let tests = vec![
            ("if (x < y) { x }", "if (x < y) {x;};\n"),
            (
                "if (x < y) { x } else { y }",
                "if (x < y) {x;} else {y;};\n",
            ),
            ("if (x) { }", "if x {};\n"),
        ];

        test_parsing(tests)
    }

    #[test]
    fn test_function() {
        let tests = vec![
            ("fn(x, y) { x + y; }", "fn(x, y) {(x + y);};\n"),
            ("fn() {}", "fn() {};\n"),
            (
                "let add = fn(a, b) { a + b }; add(2, 3);",
                "let add = fn(a, b) {(a + b);};\nadd(2, 3);\n",
            ),
            (
                "fn(x) { if (x) { return 1; } return 2; }",
                "fn(x) {if x {return 1;};return 2;};\n",
            ),
        ];

        test_parsing(tests)
    }

    #[test]
    fn test_missing_tokens() {
        test_errors(vec![
            (
                "let = 5;",
                vec!["expected next token to be identifier, got assign instead"],
            ),
            (
                "let x 5;",
                vec!["expected next token to be assign, got integer instead"],
            ),
            (
                "(1 + 2",
                vec!["expected next token to be rightParen, got eof instead"],
            ),
            (
                "if x { 1 }",
                vec!["expected next token to be leftParen, got identifier instead"],
            ),
            (
                "fn(x { x }",
                vec!["expected next token to be rightParen, got leftBrace instead"],
            ),
            (
                "fn(x) { x",
                vec!["expected next token to be rightBrace, got eof instead"],
            ),
        ]);
    }

    #[test]
    fn test_no_unary_parse_function() {
        let (program, errors) = parse("*5; 7");
        assert_eq!(
            errors,
            vec!["No unary parse function for asterisk".to_owned()]
        );
        // The broken statement is dropped, parsing resumes after its `;`.
        assert_eq!(program.to_string(), "7;\n");
    }

    #[test]
    fn test_invalid_integer() {
        test_errors(vec![(
            "99999999999999999999",
            vec!["could not parse 99999999999999999999 as integer"],
        )]);
    }

    #[test]
    fn test_invalid_callee() {
        let (program, errors) = parse("add(1)(2)");
        assert_eq!(
            errors,
            vec!["cannot call add(1): only identifiers and function literals are callable"]
        );
        assert!(program.statements.is_empty());
    }

    #[test]
    fn test_bad_argument_keeps_call() {
        let (program, errors) = parse("f(1, *, 3)");
        assert_eq!(errors, vec!["No unary parse function for asterisk"]);
        assert_eq!(program.to_string(), "f(1, 3);\n");
    }

    #[test]
    fn test_errors_in_block_are_collected() {
        let (program, errors) = parse("if (true) { *; 1 } else { 2 }");
        assert_eq!(errors, vec!["No unary parse function for asterisk"]);
        assert_eq!(program.to_string(), "if true {1;} else {2;};\n");
    }
}
