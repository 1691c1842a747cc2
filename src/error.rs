//! Error types for parsing and for the interactive shell around it.

use thiserror::Error;

/// A compound command that cannot be turned into a linked command list.
///
/// Empty fragments are not errors; they become empty-name commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `<` or `>` with no target after it.
    #[error("malformed redirection: '{marker}' has no target in '{fragment}'")]
    MalformedRedirection { marker: char, fragment: String },

    /// A pipe with no command on one side of it.
    #[error("dangling pipe at position {position}: a pipe needs a command on both sides")]
    DanglingPipe { position: usize },
}

/// Errors surfaced by the shell front end.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Input was cancelled by the user before a line was complete.
    #[error("interrupted")]
    Interrupted,

    #[error("line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
