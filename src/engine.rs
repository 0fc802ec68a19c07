//! Per-line orchestration: classify, split, redirect, dispatch, launch.

use crate::builtin::{self, BuiltinOutcome};
use crate::launcher;
use crate::lexer;
use crate::parallel;
use crate::path::PathResolver;
use crate::redirect;

/// Whether the shell keeps reading input after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// The command-execution engine.
///
/// Owns the search path and drives one input line at a time through
/// tokenization, parallel splitting, redirection setup/teardown, builtin
/// dispatch, and external launch. All failures inside a line are reported
/// through the fixed diagnostic and the engine moves on; only the `exit`
/// builtin stops the loop.
#[derive(Debug, Default)]
pub struct Engine {
    resolver: PathResolver,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            resolver: PathResolver::new(),
        }
    }

    /// Execute one raw input line fully, including any parallel group and
    /// redirection. Returns `false` when the shell should stop looping.
    pub fn process_line(&mut self, line: &str) -> bool {
        let tokens = lexer::tokenize(line);
        if tokens.is_empty() {
            return true;
        }

        // A group of one is the common case; the splitter also handles the
        // lone-`&` no-op by producing an empty group.
        let group = if tokens.iter().any(|t| t == "&") {
            parallel::split(tokens)
        } else {
            vec![tokens]
        };

        for sub_command in group {
            if self.execute_command(sub_command) == Flow::Exit {
                return false;
            }
        }
        true
    }

    /// Run one sub-command: extract and apply redirection, execute, restore.
    fn execute_command(&mut self, mut tokens: Vec<String>) -> Flow {
        match redirect::extract(&mut tokens) {
            Err(e) => {
                // Malformed redirection abandons the command entirely.
                e.report();
                Flow::Continue
            }
            Ok(Some(target)) => match redirect::apply(&target) {
                Err(e) => {
                    e.report();
                    Flow::Continue
                }
                Ok(mut guard) => {
                    let flow = self.run_simple(&tokens);
                    guard.restore();
                    flow
                }
            },
            Ok(None) => self.run_simple(&tokens),
        }
    }

    /// Builtin dispatch with fall-through to the external launcher.
    fn run_simple(&mut self, tokens: &[String]) -> Flow {
        if tokens.is_empty() {
            // A consumed redirection can leave no command (`2 > f`); there
            // is nothing to run.
            return Flow::Continue;
        }
        match builtin::dispatch(tokens, &mut self.resolver) {
            Ok(BuiltinOutcome::Exit) => Flow::Exit,
            Ok(BuiltinOutcome::Done) => Flow::Continue,
            Ok(BuiltinOutcome::NotBuiltin) => {
                if let Err(e) = launcher::launch(tokens, &self.resolver) {
                    e.report();
                }
                Flow::Continue
            }
            Err(e) => {
                e.report();
                Flow::Continue
            }
        }
    }
}
