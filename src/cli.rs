//! CLI argument parsing module for pkgup

use crate::domain::Strategy;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Git-backed package update and documentation tool
#[derive(Parser, Debug)]
#[command(name = "pkgup", version, about = "Git-backed package update and documentation tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Update a local package with changes from the upstream repo
    Update(UpdateArgs),

    /// Render the man page for a local package
    Man(ManArgs),
}

/// Arguments for the `update` command
#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    /// Local package directory, optionally version qualified
    #[arg(value_name = "LOCAL_PKG_DIR[@VERSION]")]
    pub package: String,

    /// Git repo url for updating contents. Defaults to the repo the package
    /// was fetched from
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Update strategy for preserving changes to the local package
    #[arg(long, value_enum, default_value_t = Strategy::FastForward)]
    pub strategy: Strategy,

    /// Print the git patch rather than merging it
    #[arg(long)]
    pub dry_run: bool,

    /// Print verbose logging information
    #[arg(long)]
    pub verbose: bool,
}

/// Arguments for the `man` command
#[derive(Args, Debug, Clone)]
pub struct ManArgs {
    /// Local package directory (default: current directory)
    #[arg(value_name = "LOCAL_PKG_DIR", default_value = ".")]
    pub package: PathBuf,
}
