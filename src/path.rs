//! Search-path ownership and external-program resolution.

use std::path::{Path, PathBuf};

use nix::unistd::{AccessFlags, access};

/// The single directory the search path holds at startup.
pub const DEFAULT_PATH: &str = "/bin";

/// Ordered list of directories consulted to locate external programs.
///
/// The list is replaced wholesale by the `path` builtin — entries are never
/// merged — and may legally be empty, in which case no external command can
/// ever be found. Resolution is strictly first-match-wins in list order.
#[derive(Debug, Clone)]
pub struct PathResolver {
    dirs: Vec<String>,
}

impl PathResolver {
    /// Create a resolver holding the default search path.
    pub fn new() -> Self {
        Self {
            dirs: vec![DEFAULT_PATH.to_owned()],
        }
    }

    /// Restore the one-element default search path.
    pub fn reset(&mut self) {
        self.dirs.clear();
        self.dirs.push(DEFAULT_PATH.to_owned());
    }

    /// Discard the current search path and install `dirs` verbatim.
    ///
    /// An empty `dirs` is legal and leaves the resolver unable to resolve
    /// anything.
    pub fn replace(&mut self, dirs: Vec<String>) {
        self.dirs = dirs;
    }

    /// The directories currently consulted, in resolution order.
    pub fn dirs(&self) -> &[String] {
        &self.dirs
    }

    /// Locate `program` by joining it onto each directory in order and
    /// testing for execute permission. Returns the first match.
    pub fn resolve(&self, program: &str) -> Option<PathBuf> {
        for dir in &self.dirs {
            let candidate = Path::new(dir).join(program);
            if access(&candidate, AccessFlags::X_OK).is_ok() {
                return Some(candidate);
            }
        }
        None
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}
