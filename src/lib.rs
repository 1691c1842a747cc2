//! mmsh: a compound command-line parser.
//!
//! Turns text such as `cat < in.txt | sort -r; ls > out` into an ordered
//! list of [`Command`] descriptors: name, argument blob, and input/output
//! stream identifiers, with pipes already wired so the command after a `|`
//! reads from the command before it. Executing the result is left to the
//! caller.
//!
//! # Architecture
//!
//! - **[`parse`]** — Splitter, part tokenizer, field extractors, command builder, pipeline wiring.
//! - **[`line`]** — Collapsing continued physical lines into one logical line.
//! - **[`render`]** — Rebuilding source text and human-readable listings.
//! - **[`repl`]** — rustyline-backed interactive input with history.
//! - **[`config`]** — Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]** — File logging to `~/.local/share/mmsh/mmsh.log`.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Parse and shell error types.
pub mod error;
/// Line continuation handling and line sources.
pub mod line;
/// File-based logging.
pub mod logging;
/// Command parsing: splitting, tokenizing, building, wiring.
pub mod parse;
/// Turning command lists back into text.
pub mod render;
/// Interactive line editor.
pub mod repl;

pub use error::{ParseError, ShellError};
pub use parse::{Command, Operator, Parser};

/// Parse a continuation-free command line with UUID identifiers.
///
/// This is the main entry point for tests and simple usage.
/// To control identifier generation, build a [`Parser`] directly.
pub fn parse(command: &str) -> Result<Vec<Command>, ParseError> {
    Parser::new().parse(command)
}

/// Parse and keep only real commands, dropping operators and empty
/// fragments. Pipe links survive in each command's `input`.
pub fn parse_commands(command: &str) -> Result<Vec<Command>, ParseError> {
    Ok(parse(command)?.into_iter().filter(Command::is_real).collect())
}
