//! Update and documentation engines
//!
//! This module provides:
//! - The engine traits the dispatcher calls into
//! - A git-backed update engine implementation
//! - A man page rendering engine implementation
//!
//! Engines receive fully populated requests and own all repo, ref, and path
//! validation; the command layer above performs none of it.

mod git;
mod man;

pub use git::GitUpdateEngine;
pub use man::ManRenderer;

use crate::domain::{ManRequest, UpdateRequest};
use crate::error::EngineError;
use std::io::Write;

/// Engine performing a package update
pub trait UpdateEngine {
    /// Reconciles the local package with upstream per the request
    fn run(&self, request: &UpdateRequest) -> Result<(), EngineError>;
}

/// Engine rendering package documentation
pub trait DocEngine {
    /// Renders the package man page to the output sink
    fn render(&self, request: &ManRequest, out: &mut dyn Write) -> Result<(), EngineError>;
}
