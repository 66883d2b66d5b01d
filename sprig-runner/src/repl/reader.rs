use std::ops::ControlFlow;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = ">> ";

pub enum ReadOutput {
    ControlFlow(ControlFlow<()>),
    Line(String),
}

pub struct Reader {
    rl: DefaultEditor,
}

impl Reader {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            rl: DefaultEditor::new()?,
        })
    }

    pub fn read(&mut self) -> ReadOutput {
        match self.rl.readline(PROMPT) {
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                ReadOutput::ControlFlow(ControlFlow::Continue(()))
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                ReadOutput::ControlFlow(ControlFlow::Break(()))
            }
            Err(err) => {
                tracing::error!(%err, "could not read line");
                ReadOutput::ControlFlow(ControlFlow::Break(()))
            }
            Ok(line) if line.trim().is_empty() => {
                ReadOutput::ControlFlow(ControlFlow::Continue(()))
            }
            Ok(line) => {
                if let Err(err) = self.rl.add_history_entry(line.as_str()) {
                    tracing::warn!(%err, "could not record history");
                }
                ReadOutput::Line(line)
            }
        }
    }
}
