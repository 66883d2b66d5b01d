use std::fmt::Display;
use std::rc::Rc;

use gc::{Finalize, Trace};
use sprig_core::ast;

use crate::environment::Environment;

#[derive(Debug, PartialEq, Clone, Trace, Finalize)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
    Function(Function),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueKind {
    Integer,
    Boolean,
    Null,
    Function,
}

impl Value {
    pub const TRUE: Value = Value::Boolean(true);
    pub const FALSE: Value = Value::Boolean(false);
    pub const NULL: Value = Value::Null;

    pub fn boolean(value: bool) -> Value {
        if value {
            Value::TRUE
        } else {
            Value::FALSE
        }
    }

    pub fn function(literal: &ast::FunctionLiteral, env: Environment) -> Value {
        Value::Function(Function {
            parameters: literal.parameters.clone(),
            body: literal.body.clone(),
            env,
        })
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Integer(_) => ValueKind::Integer,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Null => ValueKind::Null,
            Value::Function(_) => ValueKind::Function,
        }
    }

    /// `null` and `false` are falsy; everything else, `0` included, is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Null | Value::Boolean(false))
    }

    /// Equality as seen by `==`. Functions never compare equal, not even to
    /// themselves.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(left), Value::Integer(right)) => left == right,
            (Value::Boolean(left), Value::Boolean(right)) => left == right,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Integer => "integer",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
            ValueKind::Function => "function",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Null => write!(f, "null"),
            Value::Function(function) => write!(f, "{}", function),
        }
    }
}

/// A closure: the literal's parameters and body plus the environment that
/// was active where the literal was evaluated.
#[derive(Clone, Trace, Finalize)]
pub struct Function {
    // AST nodes hold no `Gc` pointers, so the collector can skip them.
    #[unsafe_ignore_trace]
    pub parameters: Rc<[ast::Identifier]>,
    #[unsafe_ignore_trace]
    pub body: Rc<ast::BlockStatement>,
    pub env: Environment,
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body) && self.env.ptr_eq(&other.env)
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
            .field("parameters", &self.parameters)
            .field("ptr", &Rc::as_ptr(&self.body))
            .finish()
    }
}

impl Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "fn({}) {{...}}",
            self.parameters
                .iter()
                .map(|id| id.name.as_ref())
                .collect::<Box<[&str]>>()
                .join(", ")
        )
    }
}
