//! pkgup - git-backed package update and documentation CLI tool
//!
//! This tool maintains local packages fetched from git repositories:
//! - `update` reconciles a package with upstream changes
//! - `man` renders a package's man page

use clap::Parser;
use pkgup::cli::{Cli, Command};
use pkgup::dispatch;
use pkgup::engine::{GitUpdateEngine, ManRenderer};
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Update(args) => {
            let engine = GitUpdateEngine::new();
            let mut stderr = io::stderr().lock();
            dispatch::run_update(&args, &engine, &mut stderr)?;
        }
        Command::Man(args) => {
            let engine = ManRenderer::new();
            let mut stdout = io::stdout().lock();
            dispatch::run_man(&args, &engine, &mut stdout)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
