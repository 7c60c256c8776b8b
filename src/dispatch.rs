//! Command dispatch
//!
//! This module turns parsed command-line input into a single synchronous
//! engine call:
//! - `update`: resolve the package reference, build the request, emit one
//!   status line, invoke the update engine
//! - `man`: bind the output sink and invoke the documentation engine
//!
//! Validation failures short-circuit before any engine runs; engine results
//! are returned to the caller unchanged.

use crate::cli::{ManArgs, UpdateArgs};
use crate::domain::{ManRequest, PackageReference, UpdateRequest};
use crate::engine::{DocEngine, UpdateEngine};
use crate::error::AppError;
use std::io::Write;

/// Runs the update path: validate, announce, invoke the engine
pub fn run_update(
    args: &UpdateArgs,
    engine: &dyn UpdateEngine,
    status: &mut dyn Write,
) -> Result<(), AppError> {
    let reference: PackageReference = args.package.parse()?;
    let request = UpdateRequest {
        path: reference.path,
        git_ref: reference.git_ref,
        repo: args.repo.clone(),
        strategy: args.strategy,
        dry_run: args.dry_run,
        verbose: args.verbose,
    };

    // Status write failures never mask the engine outcome.
    match request.target_ref() {
        Some(git_ref) => {
            let _ = writeln!(status, "updating package {} to {}", request.path, git_ref);
        }
        None => {
            let _ = writeln!(status, "updating package {}", request.path);
        }
    }

    engine.run(&request)?;
    Ok(())
}

/// Runs the man path: invoke the documentation engine against the sink
pub fn run_man(args: &ManArgs, engine: &dyn DocEngine, out: &mut dyn Write) -> Result<(), AppError> {
    let request = ManRequest {
        path: args.package.clone(),
    };
    engine.render(&request, out)?;
    Ok(())
}
