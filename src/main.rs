use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process;

use argh::FromArgs;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use wsh::Engine;
use wsh::error::report_diagnostic;

#[derive(FromArgs)]
/// A small command-line shell with a configurable search path.
struct Cli {
    /// batch script to execute instead of reading commands interactively
    #[argh(positional)]
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
    let cli = match Cli::from_args(&["wsh"], &arg_refs) {
        Ok(cli) => cli,
        Err(early_exit) => {
            if early_exit.status.is_ok() {
                // `--help` keeps argh's generated usage text.
                println!("{}", early_exit.output);
                return Ok(());
            }
            // Anything else (extra positionals, unknown flags) is the
            // invalid-startup-arguments case.
            report_diagnostic();
            process::exit(1);
        }
    };

    let mut engine = Engine::new();
    match cli.script {
        Some(script) => run_batch(&mut engine, &script),
        None => run_interactive(&mut engine),
    }
}

/// Feed every line of the batch script through the engine. An unopenable
/// script is fatal with status 1; end-of-input ends the process cleanly.
fn run_batch(engine: &mut Engine, script: &Path) -> anyhow::Result<()> {
    let file = match File::open(script) {
        Ok(file) => file,
        Err(_) => {
            report_diagnostic();
            process::exit(1);
        }
    };
    for line in BufReader::new(file).lines() {
        // A read failure is treated as end-of-input.
        let Ok(line) = line else { break };
        if !engine.process_line(&line) {
            break;
        }
    }
    Ok(())
}

/// Prompt-read-execute loop. EOF and Ctrl-C both end the shell cleanly.
fn run_interactive(engine: &mut Engine) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("wsh> ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                if !engine.process_line(&line) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}
