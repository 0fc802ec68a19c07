//! Output/error redirection: marker parsing and descriptor swapping.
//!
//! A line may contain exactly one `>` marker followed by exactly one
//! file-name token. If the token immediately before the marker is the
//! literal `2`, standard error is redirected instead of standard output.
//! The swap rebinds the process's own descriptor 1 or 2, so it covers both
//! builtins and spawned children, and is undone through [`RedirectGuard`]
//! before the shell touches its streams again.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::os::fd::{AsRawFd, RawFd};
use std::os::unix::fs::OpenOptionsExt;

use nix::libc::{STDERR_FILENO, STDOUT_FILENO};
use nix::unistd::{close, dup, dup2};

use crate::error::ShellError;

/// Which standard stream a redirection rebinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// A validated redirection: the stream to rebind and the file to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectionTarget {
    pub stream: Stream,
    pub path: String,
}

/// Scan `tokens` for a `>` marker and, if present, validate and consume it.
///
/// On success the marker, the file name, and a consumed `2` selector are
/// truncated away so the remaining tokens are just the command and its real
/// arguments. Validation failures leave `tokens` untouched:
/// - the marker may not be the first token;
/// - exactly one token must follow the marker.
pub fn extract(tokens: &mut Vec<String>) -> Result<Option<RedirectionTarget>, ShellError> {
    let Some(marker) = tokens.iter().position(|t| t == ">") else {
        return Ok(None);
    };
    if marker == 0 {
        return Err(ShellError::Parse);
    }
    // Exactly one file name after the marker, nothing else.
    if tokens.len() != marker + 2 {
        return Err(ShellError::Parse);
    }
    let path = tokens[marker + 1].clone();

    let stream = if tokens[marker - 1] == "2" {
        tokens.truncate(marker - 1);
        Stream::Stderr
    } else {
        tokens.truncate(marker);
        Stream::Stdout
    };
    Ok(Some(RedirectionTarget { stream, path }))
}

/// Restoration handle for a descriptor swap.
///
/// Holds duplicates of the original descriptors 1 and 2 taken before the
/// swap. [`restore`](Self::restore) puts them back; dropping the guard does
/// the same, so the shell's streams survive every error path.
#[derive(Debug)]
pub struct RedirectGuard {
    saved_stdout: RawFd,
    saved_stderr: RawFd,
    restored: bool,
}

/// Open the target file and rebind the selected stream onto it.
///
/// The file is created or truncated with mode 0644. Both original
/// descriptors are saved regardless of which stream is swapped, matching the
/// restore contract of [`RedirectGuard`].
pub fn apply(target: &RedirectionTarget) -> Result<RedirectGuard, ShellError> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o644)
        .open(&target.path)
        .map_err(ShellError::IoOpen)?;

    // Anything buffered so far belongs to the original stream.
    let _ = io::stdout().flush();
    let _ = io::stderr().flush();

    let saved_stdout = dup(STDOUT_FILENO).map_err(|e| ShellError::IoOpen(e.into()))?;
    let saved_stderr = match dup(STDERR_FILENO) {
        Ok(fd) => fd,
        Err(e) => {
            let _ = close(saved_stdout);
            return Err(ShellError::IoOpen(e.into()));
        }
    };

    // From here the guard owns the saved descriptors; its Drop restores and
    // closes them even if the swap below fails.
    let guard = RedirectGuard {
        saved_stdout,
        saved_stderr,
        restored: false,
    };

    let dest = match target.stream {
        Stream::Stdout => STDOUT_FILENO,
        Stream::Stderr => STDERR_FILENO,
    };
    dup2(file.as_raw_fd(), dest).map_err(|e| ShellError::IoOpen(e.into()))?;
    // `file` closes on drop; the stream keeps its own duplicate.
    Ok(guard)
}

impl RedirectGuard {
    /// Duplicate the saved descriptors back onto 1 and 2 and close the
    /// saved copies. Safe to call more than once; later calls are no-ops.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
        let _ = dup2(self.saved_stdout, STDOUT_FILENO);
        let _ = dup2(self.saved_stderr, STDERR_FILENO);
        let _ = close(self.saved_stdout);
        let _ = close(self.saved_stderr);
    }
}

impl Drop for RedirectGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn no_marker_leaves_tokens_untouched() {
        let mut tokens = toks(&["echo", "hi", "2"]);
        assert_eq!(extract(&mut tokens).expect("extract"), None);
        assert_eq!(tokens, toks(&["echo", "hi", "2"]));
    }

    #[test]
    fn stdout_redirection_consumes_marker_and_file() {
        let mut tokens = toks(&["echo", "hi", ">", "out.txt"]);
        let target = extract(&mut tokens).expect("extract").expect("target");
        assert_eq!(target.stream, Stream::Stdout);
        assert_eq!(target.path, "out.txt");
        assert_eq!(tokens, toks(&["echo", "hi"]));
    }

    #[test]
    fn stderr_redirection_consumes_the_selector_too() {
        let mut tokens = toks(&["cc", "bad.c", "2", ">", "errs.txt"]);
        let target = extract(&mut tokens).expect("extract").expect("target");
        assert_eq!(target.stream, Stream::Stderr);
        assert_eq!(target.path, "errs.txt");
        assert_eq!(tokens, toks(&["cc", "bad.c"]));
    }

    #[test]
    fn marker_first_is_malformed() {
        let mut tokens = toks(&[">", "out.txt"]);
        assert!(matches!(extract(&mut tokens), Err(ShellError::Parse)));
        assert_eq!(tokens, toks(&[">", "out.txt"]));
    }

    #[test]
    fn missing_file_name_is_malformed() {
        let mut tokens = toks(&["echo", "hi", ">"]);
        assert!(matches!(extract(&mut tokens), Err(ShellError::Parse)));
        assert_eq!(tokens, toks(&["echo", "hi", ">"]));
    }

    #[test]
    fn extra_tokens_after_file_name_are_malformed() {
        let mut tokens = toks(&["echo", "hi", ">", "a.txt", "extra"]);
        assert!(matches!(extract(&mut tokens), Err(ShellError::Parse)));
    }

    #[test]
    fn selector_alone_before_marker_redirects_stderr_of_nothing() {
        // `2 > f` leaves an empty command; the engine skips execution but
        // the parse itself is well-formed.
        let mut tokens = toks(&["2", ">", "f.txt"]);
        let target = extract(&mut tokens).expect("extract").expect("target");
        assert_eq!(target.stream, Stream::Stderr);
        assert!(tokens.is_empty());
    }

    #[test]
    fn unopenable_target_reports_io_open() {
        let target = RedirectionTarget {
            stream: Stream::Stdout,
            path: "/definitely/not/a/dir/out.txt".to_owned(),
        };
        assert!(matches!(apply(&target), Err(ShellError::IoOpen(_))));
    }
}
