//! A small command-line shell with a configurable search path.
//!
//! The shell reads lines interactively or from a batch script, splits each
//! line into whitespace-delimited tokens, and executes the result as either
//! a built-in (`cd`, `path`, `exit`) or an external program resolved against
//! an ordered search path. A single `>` (or `2 >`) marker redirects the
//! command's standard output (or error) to a file, and `&` separates
//! sub-commands that all complete before the next line is read.
//!
//! The main entry point is [`Engine`], which executes one line at a time and
//! reports whether the caller should keep looping. The smaller pieces — the
//! [`path::PathResolver`], the redirection machinery in [`redirect`], and the
//! [`launcher`] — are exposed for use in tests and embedding.

pub mod builtin;
pub mod engine;
pub mod error;
pub mod launcher;
pub mod lexer;
pub mod parallel;
pub mod path;
pub mod redirect;

pub use engine::Engine;
pub use error::ShellError;
