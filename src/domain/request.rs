//! Engine request types
//!
//! Requests are assembled once per invocation from the resolved package
//! reference and flag values, handed to an engine, and discarded.

use crate::domain::Strategy;
use std::path::PathBuf;

/// Fully populated input to the update engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateRequest {
    /// Path to the local package directory
    pub path: String,
    /// Git ref to update to, when one was given on the command line
    pub git_ref: Option<String>,
    /// Git repo url override; absent or empty means the repo recorded in the
    /// package metadata
    pub repo: Option<String>,
    /// Reconciliation strategy
    pub strategy: Strategy,
    /// Print the git patch rather than merging it
    pub dry_run: bool,
    /// Print verbose logging information
    pub verbose: bool,
}

impl UpdateRequest {
    /// Returns the requested ref when one was given and it is non-empty
    pub fn target_ref(&self) -> Option<&str> {
        self.git_ref.as_deref().filter(|r| !r.is_empty())
    }

    /// Returns the repo override when one was given and it is non-empty
    pub fn repo_override(&self) -> Option<&str> {
        self.repo.as_deref().filter(|r| !r.is_empty())
    }
}

/// Input to the documentation engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManRequest {
    /// Path to the local package directory
    pub path: PathBuf,
}
