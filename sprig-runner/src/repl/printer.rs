use std::fmt::Display;

use sprig_interpreter::value::Value;

use crate::runner::RunError;

pub trait Printer {
    type Object;

    fn print(&mut self, object: Self::Object);
}

pub struct ValuePrinter {}

impl Printer for ValuePrinter {
    type Object = Result<Value, RunError>;

    fn print(&mut self, object: Self::Object) {
        print_result(object)
    }
}

pub struct TextPrinter {}

impl Printer for TextPrinter {
    type Object = Result<String, RunError>;

    fn print(&mut self, object: Self::Object) {
        print_result(object)
    }
}

fn print_result(object: Result<impl Display, RunError>) {
    match object {
        Ok(shown) => println!("{shown}"),
        Err(err) => println!("{err}"),
    }
}
