//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ArgumentError: command-line input rejected before any engine runs
//! - EngineError: failures surfaced by the update or documentation engine,
//!   propagated to the caller unchanged

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Command-line input validation errors
    #[error(transparent)]
    Argument(#[from] ArgumentError),

    /// Engine errors, passed through verbatim
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Errors produced while validating command-line input
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArgumentError {
    /// More than one `@` qualifier in a package reference
    #[error("at most 1 version permitted")]
    TooManyVersions,
}

/// Errors surfaced by the update and documentation engines
#[derive(Error, Debug)]
pub enum EngineError {
    /// Package metadata file missing
    #[error("package metadata not found: {path}")]
    PkgfileNotFound { path: PathBuf },

    /// Failed to read the package metadata file
    #[error("failed to read {path}: {source}")]
    PkgfileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the package metadata file
    #[error("failed to parse {path}: {message}")]
    PkgfileParse { path: PathBuf, message: String },

    /// Failed to write the package metadata file
    #[error("failed to write {path}: {source}")]
    PkgfileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No upstream repo recorded for the package and no override given
    #[error("package {path} has no upstream repo recorded; specify one with --repo")]
    NoUpstreamRepo { path: PathBuf },

    /// The git binary could not be spawned
    #[error("failed to run git {args}: {source}")]
    GitSpawn {
        args: String,
        #[source]
        source: std::io::Error,
    },

    /// A git command exited with a failure status
    #[error("git {args} failed: {stderr}")]
    GitFailed { args: String, stderr: String },

    /// Local edits block a fast-forward update
    #[error("package {path} has local changes; commit them or choose another strategy")]
    LocalChanges { path: PathBuf },

    /// No man page source found for the package
    #[error("no man page found for package {path}")]
    NoManPage { path: PathBuf },

    /// Failed to read the man page source
    #[error("failed to read man page {path}: {source}")]
    ManRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to the output sink
    #[error("failed to write output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl EngineError {
    /// Creates a new PkgfileNotFound error
    pub fn pkgfile_not_found(path: impl Into<PathBuf>) -> Self {
        EngineError::PkgfileNotFound { path: path.into() }
    }

    /// Creates a new PkgfileParse error
    pub fn pkgfile_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        EngineError::PkgfileParse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new GitSpawn error
    pub fn git_spawn(args: &[&str], source: std::io::Error) -> Self {
        EngineError::GitSpawn {
            args: args.join(" "),
            source,
        }
    }

    /// Creates a new GitFailed error
    pub fn git_failed(args: &[&str], stderr: impl Into<String>) -> Self {
        EngineError::GitFailed {
            args: args.join(" "),
            stderr: stderr.into(),
        }
    }
}
