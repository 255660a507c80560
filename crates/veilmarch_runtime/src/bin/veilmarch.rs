//! Veilmarch CLI entry point.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use veilmarch_runtime::{Repl, Session};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    quiet: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-q" | "--quiet" => config.quiet = true,
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if config.show_version {
        println!("veilmarch {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    // Batch mode: check each file, report, and reflect errors in the
    // exit code.
    if config.batch_mode {
        let session = Session::new();
        let mut failed = false;
        for file in &config.files {
            let source = fs::read_to_string(file)
                .map_err(|e| format!("failed to read {}: {e}", file.display()))?;
            let report = session.check_source(&source);
            if config.quiet {
                println!("{}: {} error(s)", file.display(), report.errors);
            } else {
                println!("\x1b[1m=== {} ===\x1b[0m", file.display());
                print!("{}", report.text);
            }
            failed |= !report.is_clean();
        }
        return Ok(if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS });
    }

    // Interactive mode: preload any files into the buffer, then shell.
    let mut repl = Repl::new()?;
    for file in &config.files {
        let path = file.display().to_string();
        let added = repl.session_mut().load_file(&path)?;
        println!("Loaded {added} line(s) from {path}.");
    }

    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(ExitCode::SUCCESS)
}

fn print_help() {
    println!(
        "\x1b[1mVeilmarch\x1b[0m - order document checker

\x1b[1mUSAGE:\x1b[0m
    veilmarch [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Order files to load before starting the shell

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    -b, --batch      Check the files and exit (no shell)
    -q, --quiet      With --batch, print only per-file error counts

\x1b[1mEXAMPLES:\x1b[0m
    veilmarch                    Start the interactive shell
    veilmarch orders.txt         Load orders.txt, then start the shell
    veilmarch -b orders.txt      Check orders.txt and exit
    veilmarch -b -q *.orders     Summarize several files

\x1b[1mSHELL COMMANDS:\x1b[0m
    .check        Validate the buffered document
    .show         List the buffered lines
    .clear        Discard the buffer
    .load <path>  Append a file to the buffer
    .quit         Exit (Ctrl+D also works)"
    );
}
