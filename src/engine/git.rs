//! Git-backed update engine
//!
//! This module provides:
//! - Upstream repo and ref resolution from `Pkgfile.toml`
//! - Fetch and strategy application via the system `git` binary
//! - Dry-run patch output instead of merging

use crate::domain::{Strategy, UpdateRequest};
use crate::engine::UpdateEngine;
use crate::error::EngineError;
use crate::pkgfile::Pkgfile;
use std::io::{self, Write};
use std::path::Path;
use std::process::{Command, Output};

/// Update engine that executes real git commands against the package
#[derive(Debug, Default)]
pub struct GitUpdateEngine;

impl GitUpdateEngine {
    /// Creates a new git update engine
    pub fn new() -> Self {
        Self
    }

    /// Runs a git command in the package directory, capturing its output
    fn git(&self, pkg_dir: &Path, args: &[&str], verbose: bool) -> Result<Output, EngineError> {
        if verbose {
            eprintln!("running git {}", args.join(" "));
        }

        let output = Command::new("git")
            .arg("-C")
            .arg(pkg_dir)
            .args(args)
            .output()
            .map_err(|e| EngineError::git_spawn(args, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(EngineError::git_failed(args, stderr));
        }

        Ok(output)
    }

    /// Fails when the package worktree has uncommitted changes
    fn ensure_clean(&self, pkg_dir: &Path, verbose: bool) -> Result<(), EngineError> {
        let status = self.git(pkg_dir, &["status", "--porcelain"], verbose)?;
        if !status.stdout.is_empty() {
            return Err(EngineError::LocalChanges {
                path: pkg_dir.to_path_buf(),
            });
        }
        Ok(())
    }
}

impl UpdateEngine for GitUpdateEngine {
    fn run(&self, request: &UpdateRequest) -> Result<(), EngineError> {
        let pkg_dir = Path::new(&request.path);
        let mut pkgfile = Pkgfile::load(pkg_dir)?;

        let repo = match request.repo_override() {
            Some(repo) => repo.to_string(),
            None if !pkgfile.upstream.repo.is_empty() => pkgfile.upstream.repo.clone(),
            None => {
                return Err(EngineError::NoUpstreamRepo {
                    path: pkg_dir.to_path_buf(),
                })
            }
        };
        let target_ref = match request.target_ref() {
            Some(git_ref) => git_ref.to_string(),
            None => pkgfile.upstream.git_ref.clone(),
        };

        // Fast-forward refuses to touch a package with local edits.
        if request.strategy == Strategy::FastForward && !request.dry_run {
            self.ensure_clean(pkg_dir, request.verbose)?;
        }

        self.git(pkg_dir, &["fetch", &repo, &target_ref], request.verbose)?;

        if request.dry_run {
            let diff = self.git(pkg_dir, &["diff", "HEAD", "FETCH_HEAD"], request.verbose)?;
            io::stdout()
                .write_all(&diff.stdout)
                .map_err(|source| EngineError::Output { source })?;
            return Ok(());
        }

        match request.strategy {
            Strategy::FastForward => {
                self.git(pkg_dir, &["merge", "--ff-only", "FETCH_HEAD"], request.verbose)?
            }
            Strategy::ResourceMerge => {
                self.git(pkg_dir, &["merge", "--no-edit", "FETCH_HEAD"], request.verbose)?
            }
            Strategy::ForceDeleteReplace => {
                self.git(pkg_dir, &["reset", "--hard", "FETCH_HEAD"], request.verbose)?
            }
        };

        // Keep the recorded ref tracking what the package was updated to.
        if let Some(git_ref) = request.target_ref() {
            if pkgfile.upstream.git_ref != git_ref {
                pkgfile.upstream.git_ref = git_ref.to_string();
                pkgfile.store(pkg_dir)?;
            }
        }

        Ok(())
    }
}
