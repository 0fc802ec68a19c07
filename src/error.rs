//! Error taxonomy and the shell's single diagnostic message.
//!
//! The shell distinguishes failure classes internally so tests can assert on
//! them, but every one of them is reported to the user the same way: one
//! fixed line on the current standard error. The text is part of the shell's
//! observable contract and must never gain detail.

use std::io::{self, Write};

use thiserror::Error;

/// The only diagnostic text the shell ever emits.
pub const DIAGNOSTIC: &str = "An error has occurred\n";

/// Everything that can go wrong while processing one input line.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Malformed redirection syntax: marker first, or not exactly one
    /// file-name token after the marker.
    #[error("malformed redirection")]
    Parse,

    /// Wrong number of arguments to a builtin, or a `cd` target that cannot
    /// be entered.
    #[error("invalid builtin invocation")]
    BuiltinArg,

    /// The operating system refused to create a child process.
    #[error("cannot create process")]
    Fork(#[source] io::Error),

    /// No search-path directory contains an executable with the given name.
    #[error("command not found in search path")]
    PathNotFound,

    /// The program resolved against the search path but failed to run.
    #[error("failed to execute resolved program")]
    Exec(#[source] io::Error),

    /// The redirection target could not be created, or descriptor
    /// bookkeeping for the swap failed.
    #[error("cannot open redirection target")]
    IoOpen(#[source] io::Error),
}

impl ShellError {
    /// Write the fixed diagnostic to the current standard error.
    ///
    /// Goes through `io::stderr` so that an active `2 >` redirection
    /// receives the message, exactly like any child's error output would.
    pub fn report(&self) {
        report_diagnostic();
    }
}

/// Emit the fixed diagnostic outside the context of a [`ShellError`]
/// (startup argument validation, unopenable batch files).
pub fn report_diagnostic() {
    let _ = io::stderr().write_all(DIAGNOSTIC.as_bytes());
}
