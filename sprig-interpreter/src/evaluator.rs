use sprig_core::ast::{
    self, BinaryOperator, Callee, Expression, Identifier, Statement, UnaryOperator,
};

use crate::environment::Environment;
use crate::error::{EvaluationError, Unwind};
use crate::value::{Function, Value};

pub type EvalResult = Result<Value, Unwind>;

/// Reduction of an AST node to a value against an environment.
///
/// `Err` carries the `return` and error sentinels; composite nodes forward
/// them with `?` without evaluating anything further.
pub trait Evaluate {
    fn evaluate(&self, environment: &mut Environment) -> EvalResult;
}

impl Evaluate for ast::Program {
    fn evaluate(&self, environment: &mut Environment) -> EvalResult {
        eval_statements(&self.statements, environment)
    }
}

impl Evaluate for ast::BlockStatement {
    fn evaluate(&self, environment: &mut Environment) -> EvalResult {
        eval_statements(&self.statements, environment)
    }
}

impl Evaluate for Statement {
    fn evaluate(&self, environment: &mut Environment) -> EvalResult {
        eval_statement(self, environment)
    }
}

impl Evaluate for Expression {
    fn evaluate(&self, environment: &mut Environment) -> EvalResult {
        eval_expression(self, environment)
    }
}

/// Runs a whole program. A top-level `return` ends the program with its
/// value; an error ends it with `Err`.
pub fn eval_program(
    program: &ast::Program,
    environment: &mut Environment,
) -> Result<Value, EvaluationError> {
    match program.evaluate(environment) {
        Ok(value) | Err(Unwind::Return(value)) => Ok(value),
        Err(Unwind::Error(error)) => {
            tracing::debug!(%error, "evaluation failed");
            Err(error)
        }
    }
}

fn eval_statements(statements: &[Statement], environment: &mut Environment) -> EvalResult {
    let mut result = Value::NULL;
    for statement in statements {
        result = eval_statement(statement, environment)?;
    }
    Ok(result)
}

fn eval_statement(statement: &Statement, environment: &mut Environment) -> EvalResult {
    match statement {
        Statement::Expression(expression) => eval_expression(expression, environment),
        Statement::Return(statement) => eval_return_statement(statement, environment),
        Statement::Let(statement) => eval_let_statement(statement, environment),
    }
}

fn eval_let_statement(statement: &ast::LetStatement, environment: &mut Environment) -> EvalResult {
    let value = eval_expression(&statement.value, environment)?;
    environment.set(&statement.identifier.name, value.clone());
    Ok(value)
}

fn eval_return_statement(
    statement: &ast::ReturnStatement,
    environment: &mut Environment,
) -> EvalResult {
    let value = eval_expression(&statement.value, environment)?;
    Err(Unwind::Return(value))
}

fn eval_expression(expression: &Expression, environment: &mut Environment) -> EvalResult {
    match expression {
        Expression::IntegerLiteral(value) => Ok(Value::Integer(*value)),
        Expression::BooleanLiteral(value) => Ok(Value::boolean(*value)),
        Expression::Identifier(identifier) => eval_identifier(identifier, environment),
        Expression::FunctionLiteral(literal) => Ok(Value::function(literal, environment.clone())),
        Expression::Unary { operator, operand } => {
            let operand = eval_expression(operand, environment)?;
            eval_unary_operation(*operator, operand)
        }
        Expression::Binary {
            operator,
            left,
            right,
        } => {
            let left = eval_expression(left, environment)?;
            let right = eval_expression(right, environment)?;
            eval_binary_operation(*operator, left, right)
        }
        Expression::If {
            condition,
            consequence,
            alternative,
        } => {
            let condition = eval_expression(condition, environment)?;
            if condition.is_truthy() {
                consequence.evaluate(environment)
            } else if let Some(alternative) = alternative {
                alternative.evaluate(environment)
            } else {
                Ok(Value::NULL)
            }
        }
        Expression::Call {
            function,
            arguments,
        } => {
            let function = eval_callee(function, environment)?;
            let arguments = eval_expressions(arguments, environment)?;
            match &function {
                Value::Function(function) => apply_function(function, arguments),
                other => Err(EvaluationError::NotAFunction(other.kind()).into()),
            }
        }
    }
}

fn eval_identifier(identifier: &Identifier, environment: &Environment) -> EvalResult {
    environment
        .get(&identifier.name)
        .ok_or_else(|| EvaluationError::IdentifierNotFound(identifier.name.clone()).into())
}

fn eval_callee(callee: &Callee, environment: &mut Environment) -> EvalResult {
    match callee {
        Callee::Identifier(identifier) => eval_identifier(identifier, environment),
        Callee::FunctionLiteral(literal) => Ok(Value::function(literal, environment.clone())),
    }
}

/// Evaluates left to right, stopping at the first error.
fn eval_expressions(
    expressions: &[Expression],
    environment: &mut Environment,
) -> Result<Vec<Value>, Unwind> {
    let mut result = Vec::with_capacity(expressions.len());
    for expression in expressions {
        result.push(eval_expression(expression, environment)?);
    }
    Ok(result)
}

/// The only place a `return` is caught: it leaves exactly one call.
#[tracing::instrument(level = "trace", skip_all, fields(arity = arguments.len()))]
fn apply_function(function: &Function, arguments: Vec<Value>) -> EvalResult {
    let mut frame = Environment::for_call(function, arguments);
    match function.body.evaluate(&mut frame) {
        Ok(value) | Err(Unwind::Return(value)) => Ok(value),
        Err(error) => Err(error),
    }
}

fn eval_unary_operation(operator: UnaryOperator, operand: Value) -> EvalResult {
    match (operator, operand) {
        (UnaryOperator::Bang, operand) => Ok(Value::boolean(!operand.is_truthy())),
        (UnaryOperator::Minus, Value::Integer(value)) => Ok(Value::Integer(value.wrapping_neg())),
        (UnaryOperator::Minus, operand) => Err(EvaluationError::UnknownUnaryOperator {
            operator,
            operand: operand.kind(),
        }
        .into()),
    }
}

fn eval_binary_operation(operator: BinaryOperator, left: Value, right: Value) -> EvalResult {
    if left.kind() != right.kind() {
        return Err(EvaluationError::TypeMismatch {
            left: left.kind(),
            operator,
            right: right.kind(),
        }
        .into());
    }

    match (operator, &left, &right) {
        (BinaryOperator::Equal, _, _) => Ok(Value::boolean(left.equals(&right))),
        (BinaryOperator::NotEqual, _, _) => Ok(Value::boolean(!left.equals(&right))),
        (_, Value::Integer(left), Value::Integer(right)) => {
            eval_integer_operation(operator, *left, *right)
        }
        _ => Err(EvaluationError::UnknownBinaryOperator {
            left: left.kind(),
            operator,
            right: right.kind(),
        }
        .into()),
    }
}

// i64 arithmetic wraps on overflow; division truncates toward zero.
fn eval_integer_operation(operator: BinaryOperator, left: i64, right: i64) -> EvalResult {
    let value = match operator {
        BinaryOperator::Plus => Value::Integer(left.wrapping_add(right)),
        BinaryOperator::Minus => Value::Integer(left.wrapping_sub(right)),
        BinaryOperator::Multiply => Value::Integer(left.wrapping_mul(right)),
        BinaryOperator::Divide => {
            if right == 0 {
                return Err(EvaluationError::DivisionByZero.into());
            }
            Value::Integer(left.wrapping_div(right))
        }
        BinaryOperator::LessThan => Value::boolean(left < right),
        BinaryOperator::GreaterThan => Value::boolean(left > right),
        BinaryOperator::Equal => Value::boolean(left == right),
        BinaryOperator::NotEqual => Value::boolean(left != right),
    };
    Ok(value)
}
