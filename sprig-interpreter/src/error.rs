use std::rc::Rc;

use sprig_core::ast::{BinaryOperator, UnaryOperator};
use thiserror::Error;

use crate::value::{Value, ValueKind};

/// A runtime error. It travels up the evaluation exactly like a `return`
/// and, when it reaches the top of the program, becomes its result.
#[derive(Debug, PartialEq, Clone, Error)]
pub enum EvaluationError {
    #[error("identifier not found: {0}")]
    IdentifierNotFound(Rc<str>),
    #[error("unknown operator: {operator}{operand}")]
    UnknownUnaryOperator {
        operator: UnaryOperator,
        operand: ValueKind,
    },
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        left: ValueKind,
        operator: BinaryOperator,
        right: ValueKind,
    },
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownBinaryOperator {
        left: ValueKind,
        operator: BinaryOperator,
        right: ValueKind,
    },
    #[error("not a function: {0}")]
    NotAFunction(ValueKind),
    #[error("division by zero")]
    DivisionByZero,
}

/// Non-local exits out of a statement sequence.
///
/// `Return` is unwrapped at the nearest function call (or at the top of the
/// program); `Error` is never unwrapped.
#[derive(Debug, PartialEq)]
pub enum Unwind {
    Return(Value),
    Error(EvaluationError),
}

impl From<EvaluationError> for Unwind {
    fn from(error: EvaluationError) -> Self {
        Unwind::Error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let tests = vec![
            (
                EvaluationError::IdentifierNotFound("foobar".into()),
                "identifier not found: foobar",
            ),
            (
                EvaluationError::UnknownUnaryOperator {
                    operator: UnaryOperator::Minus,
                    operand: ValueKind::Boolean,
                },
                "unknown operator: -boolean",
            ),
            (
                EvaluationError::TypeMismatch {
                    left: ValueKind::Integer,
                    operator: BinaryOperator::Plus,
                    right: ValueKind::Boolean,
                },
                "type mismatch: integer + boolean",
            ),
            (
                EvaluationError::UnknownBinaryOperator {
                    left: ValueKind::Boolean,
                    operator: BinaryOperator::Plus,
                    right: ValueKind::Boolean,
                },
                "unknown operator: boolean + boolean",
            ),
            (
                EvaluationError::NotAFunction(ValueKind::Integer),
                "not a function: integer",
            ),
        ];

        for (error, expected) in tests {
            assert_eq!(error.to_string(), expected);
        }
    }
}
