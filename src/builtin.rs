//! In-process builtin commands: `cd`, `path`, and `exit`.
//!
//! Builtins never spawn a child; they mutate process-wide state (the working
//! directory, the search path) or tell the caller to terminate. Dispatch is
//! keyed on the first token only, and anything unrecognized falls through to
//! the external launcher.

use std::env;

use crate::error::ShellError;
use crate::path::PathResolver;

/// What the dispatcher did with a token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinOutcome {
    /// The first token names no builtin; the caller should launch it as an
    /// external program.
    NotBuiltin,
    /// A builtin ran to completion.
    Done,
    /// The `exit` builtin was invoked; the caller must terminate the shell
    /// with a success status.
    Exit,
}

/// Execute `tokens` as a builtin if its first token names one.
///
/// `cd` requires exactly one argument and reports a failure to change
/// directory without affecting the shell. `path` resets the resolver and then
/// installs the given directories (zero directories is legal and empties the
/// search path). `exit` accepts no arguments; with any it is an error and the
/// shell keeps running.
pub fn dispatch(
    tokens: &[String],
    resolver: &mut PathResolver,
) -> Result<BuiltinOutcome, ShellError> {
    match tokens[0].as_str() {
        "cd" => {
            if tokens.len() != 2 {
                return Err(ShellError::BuiltinArg);
            }
            env::set_current_dir(&tokens[1]).map_err(|_| ShellError::BuiltinArg)?;
            Ok(BuiltinOutcome::Done)
        }
        "path" => {
            resolver.reset();
            resolver.replace(tokens[1..].to_vec());
            Ok(BuiltinOutcome::Done)
        }
        "exit" => {
            if tokens.len() != 1 {
                return Err(ShellError::BuiltinArg);
            }
            Ok(BuiltinOutcome::Exit)
        }
        _ => Ok(BuiltinOutcome::NotBuiltin),
    }
}
