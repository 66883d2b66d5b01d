use std::path::{Path, PathBuf};

use sprig_core::ast::Program;
use sprig_core::lexer::Lexer;
use sprig_core::parser::{ParseError, Parser};
use sprig_interpreter::environment::Environment;
use sprig_interpreter::error::EvaluationError;
use sprig_interpreter::evaluator;
use thiserror::Error;

use crate::Emit;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}", render_parse_errors(.0))]
    Parse(Vec<ParseError>),
    #[error("ERROR: {0}")]
    Evaluation(#[from] EvaluationError),
}

fn render_parse_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|error| format!("parse error at {}: {}", error.start(), error))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn execute_file(path: &Path, emit: Emit) -> Result<String, RunError> {
    tracing::info!(path = %path.display(), "running file");
    let source = std::fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.to_owned(),
        source,
    })?;
    execute(&source, emit, &mut Environment::new())
}

/// Parses a whole program, reporting every parse error rather than a
/// partial program.
pub fn parse(source: &str) -> Result<Program, RunError> {
    let program = Parser::new(Lexer::new(source))
        .parse_program()
        .map_err(RunError::Parse)?;
    tracing::debug!(statements = program.statements.len(), "parsed program");
    Ok(program)
}

/// One row per token, eof excluded.
pub fn render_tokens(source: &str) -> String {
    Lexer::new(source)
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_ast(source: &str) -> Result<String, RunError> {
    Ok(parse(source)?.to_string().trim_end().to_owned())
}

/// Runs one chunk of source and renders what `emit` asks for. Parse errors
/// are reported in preference to evaluating a partial program.
pub fn execute(source: &str, emit: Emit, env: &mut Environment) -> Result<String, RunError> {
    match emit {
        Emit::Tokens => Ok(render_tokens(source)),
        Emit::Ast => render_ast(source),
        Emit::Value => {
            let program = parse(source)?;
            Ok(evaluator::eval_program(&program, env)?.to_string())
        }
    }
}
