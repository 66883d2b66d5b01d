use crate::value::{Function, Value};
use gc::{Finalize, Gc, GcCell, Trace};
use std::collections::HashMap;

#[derive(Trace, Finalize)]
struct Frame {
    store: HashMap<String, Value>,
    outer: Option<Environment>,
}

/// Handle to one frame of the scope chain.
///
/// Frames are shared between the call that created them and every closure
/// defined inside, and are collected once none of those is reachable any
/// more (cycles through recursive closures included).
#[derive(Clone, Trace, Finalize)]
pub struct Environment {
    frame: Gc<GcCell<Frame>>,
}

impl Environment {
    pub fn new() -> Self {
        Environment {
            frame: Gc::new(GcCell::new(Frame {
                store: HashMap::new(),
                outer: None,
            })),
        }
    }

    pub fn new_enclosed(outer: Environment) -> Environment {
        Environment {
            frame: Gc::new(GcCell::new(Frame {
                store: HashMap::new(),
                outer: Some(outer),
            })),
        }
    }

    /// Frame for one call of `function`: parented to the environment the
    /// function captured, with parameters bound positionally. Missing
    /// arguments leave their parameter unbound; extra arguments are dropped.
    pub fn for_call(function: &Function, arguments: Vec<Value>) -> Environment {
        let mut environment = Environment::new_enclosed(function.env.clone());
        for (parameter, argument) in function.parameters.iter().zip(arguments) {
            environment.set(&parameter.name, argument);
        }
        environment
    }

    /// Looks `key` up in this frame, then in each enclosing frame.
    pub fn get(&self, key: &str) -> Option<Value> {
        let frame = self.frame.borrow();
        match frame.store.get(key) {
            Some(value) => Some(value.clone()),
            None => frame.outer.as_ref().and_then(|outer| outer.get(key)),
        }
    }

    /// Binds `key` in this frame, never in an enclosing one.
    pub fn set(&mut self, key: &str, value: Value) {
        self.frame
            .borrow_mut()
            .store
            .insert(key.to_owned(), value);
    }

    pub fn ptr_eq(&self, other: &Environment) -> bool {
        std::ptr::eq::<GcCell<Frame>>(&*self.frame, &*other.frame)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

// Frames can reach themselves through closures, so only the names are shown.
impl std::fmt::Debug for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let frame = self.frame.borrow();
        let mut names = frame.store.keys().collect::<Vec<_>>();
        names.sort();
        f.debug_struct("Environment")
            .field("names", &names)
            .field("outer", &frame.outer)
            .finish()
    }
}
