//! Launching external programs resolved against the search path.

use std::io::ErrorKind;
use std::os::unix::process::CommandExt;
use std::process::Command;

use crate::error::ShellError;
use crate::path::PathResolver;

/// Resolve `tokens[0]` against the search path, run it with the remaining
/// tokens as arguments, and wait for it to finish.
///
/// argv[0] is passed through as the name the user typed, not the resolved
/// path. The child inherits the shell's current descriptors, so an active
/// redirection applies to it. The child's exit status is observed by the
/// wait but deliberately not acted upon.
pub fn launch(tokens: &[String], resolver: &PathResolver) -> Result<(), ShellError> {
    let program = resolver.resolve(&tokens[0]).ok_or(ShellError::PathNotFound)?;

    let mut child = Command::new(&program)
        .arg0(&tokens[0])
        .args(&tokens[1..])
        .spawn()
        .map_err(|e| match e.kind() {
            // The candidate passed the execute-permission check, so most
            // spawn failures mean the exec itself went wrong; resource
            // exhaustion is the process-creation case.
            ErrorKind::WouldBlock | ErrorKind::OutOfMemory => ShellError::Fork(e),
            _ => ShellError::Exec(e),
        })?;

    child.wait().map_err(ShellError::Fork)?;
    Ok(())
}
