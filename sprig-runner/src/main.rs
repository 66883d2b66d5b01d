mod logging;
mod repl;
mod runner;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

/// What to print for each program.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// Evaluate and print the final value.
    Value,
    /// Print the parsed program in canonical, fully parenthesised form.
    Ast,
    /// Print the token stream with offsets.
    Tokens,
}

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, value_enum, default_value_t = Emit::Value)]
    emit: Emit,
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Source file to run. Starts a REPL when omitted.
    path: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.path {
        None => repl::start(cli.emit).map_err(|err| err.to_string()),
        Some(path) => runner::execute_file(&path, cli.emit)
            .map(|output| println!("{output}"))
            .map_err(|err| err.to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
