use sprig_interpreter::environment::Environment;
use sprig_interpreter::evaluator;
use sprig_interpreter::value::Value;

use crate::runner::{self, RunError};
use crate::Emit;

pub trait Evaluator {
    type Object;

    fn evaluate(&mut self, line: &str) -> Self::Object;
}

pub struct InterpreterEvaluator {
    environment: Environment,
}

impl InterpreterEvaluator {
    pub fn new() -> Self {
        Self {
            environment: Environment::new(),
        }
    }
}

impl Evaluator for InterpreterEvaluator {
    type Object = Result<Value, RunError>;

    fn evaluate(&mut self, line: &str) -> Self::Object {
        let program = runner::parse(line)?;
        Ok(evaluator::eval_program(&program, &mut self.environment)?)
    }
}

/// Shows how a line is read without running it.
pub struct InspectEvaluator {
    emit: Emit,
}

impl InspectEvaluator {
    pub fn new(emit: Emit) -> Self {
        Self { emit }
    }
}

impl Evaluator for InspectEvaluator {
    type Object = Result<String, RunError>;

    fn evaluate(&mut self, line: &str) -> Self::Object {
        match self.emit {
            Emit::Tokens => Ok(runner::render_tokens(line)),
            _ => runner::render_ast(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_bindings_persist_across_lines() {
        let mut evaluator = InterpreterEvaluator::new();
        let lines = vec![
            ("let x = 5;", "5"),
            ("let double = fn(n) { n * 2 };", "fn(n) {...}"),
            ("double(x)", "10"),
            ("y", "ERROR: identifier not found: y"),
            ("x", "5"),
        ];

        for (line, expected) in lines {
            let shown = match evaluator.evaluate(line) {
                Ok(value) => value.to_string(),
                Err(err) => err.to_string(),
            };
            assert_eq!(shown, expected, "{line:?}");
        }
    }

    #[test]
    fn test_inspect() {
        let mut evaluator = InspectEvaluator::new(Emit::Ast);
        assert_eq!(evaluator.evaluate("-a * b").unwrap(), "((-a) * b);");

        let mut evaluator = InspectEvaluator::new(Emit::Tokens);
        assert_eq!(
            evaluator.evaluate("!").unwrap(),
            "    0  bang         \"!\""
        );
    }
}
