mod evaluator;
mod printer;
mod reader;

use std::ops::ControlFlow;

use rustyline::error::ReadlineError;

use evaluator::{Evaluator, InspectEvaluator, InterpreterEvaluator};
use printer::{Printer, TextPrinter, ValuePrinter};
use reader::{ReadOutput, Reader};

use crate::Emit;

struct Repl<E: Evaluator, P: Printer> {
    reader: Reader,
    evaluator: E,
    printer: P,
}

impl<O, E: Evaluator<Object = O>, P: Printer<Object = O>> Repl<E, P> {
    fn run(mut self) {
        loop {
            match self.reader.read() {
                ReadOutput::ControlFlow(ControlFlow::Break(())) => break,
                ReadOutput::ControlFlow(ControlFlow::Continue(())) => continue,
                ReadOutput::Line(line) => {
                    let result = self.evaluator.evaluate(&line);
                    self.printer.print(result)
                }
            }
        }
    }
}

/// Bindings made on one line stay visible on the next.
pub fn start(emit: Emit) -> Result<(), ReadlineError> {
    tracing::debug!(?emit, "starting repl");
    let reader = Reader::new()?;

    match emit {
        Emit::Value => Repl {
            reader,
            evaluator: InterpreterEvaluator::new(),
            printer: ValuePrinter {},
        }
        .run(),
        Emit::Ast | Emit::Tokens => Repl {
            reader,
            evaluator: InspectEvaluator::new(emit),
            printer: TextPrinter {},
        }
        .run(),
    }
    Ok(())
}
