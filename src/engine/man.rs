//! Man page rendering engine
//!
//! Packages document themselves with a markdown man page, `MAN.md` by
//! default or whatever the `man` field of `Pkgfile.toml` names. Rendering is
//! line oriented: `#` and `##` headings get terminal emphasis, everything
//! else passes through unchanged.

use crate::domain::ManRequest;
use crate::engine::DocEngine;
use crate::error::EngineError;
use crate::pkgfile::Pkgfile;
use colored::Colorize;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Default man page filename within a package directory
pub const DEFAULT_MAN_PAGE: &str = "MAN.md";

/// Documentation engine rendering markdown man pages
#[derive(Debug, Default)]
pub struct ManRenderer;

impl ManRenderer {
    /// Creates a new man page renderer
    pub fn new() -> Self {
        Self
    }

    /// Resolves the man page source path for a package
    fn man_source(&self, request: &ManRequest) -> Result<PathBuf, EngineError> {
        // A package without metadata can still carry the default man page;
        // malformed metadata is an error.
        let man_rel = match Pkgfile::load(&request.path) {
            Ok(pkgfile) => pkgfile.man.unwrap_or_else(|| DEFAULT_MAN_PAGE.to_string()),
            Err(EngineError::PkgfileNotFound { .. }) => DEFAULT_MAN_PAGE.to_string(),
            Err(e) => return Err(e),
        };
        Ok(request.path.join(man_rel))
    }
}

impl DocEngine for ManRenderer {
    fn render(&self, request: &ManRequest, out: &mut dyn Write) -> Result<(), EngineError> {
        let source_path = self.man_source(request)?;
        let source = fs::read_to_string(&source_path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                EngineError::NoManPage {
                    path: request.path.clone(),
                }
            } else {
                EngineError::ManRead {
                    path: source_path.clone(),
                    source,
                }
            }
        })?;

        for line in source.lines() {
            let rendered = if let Some(heading) = line.strip_prefix("# ") {
                format!("{}", heading.to_uppercase().bold())
            } else if let Some(heading) = line.strip_prefix("## ") {
                format!("{}", heading.bold())
            } else {
                line.to_string()
            };
            writeln!(out, "{}", rendered).map_err(|source| EngineError::Output { source })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pkgfile::{Upstream, PKGFILE_NAME};

    fn render_to_string(dir: &std::path::Path) -> Result<String, EngineError> {
        colored::control::set_override(false);
        let request = ManRequest {
            path: dir.to_path_buf(),
        };
        let mut out = Vec::new();
        ManRenderer::new().render(&request, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_render_default_man_page() {
        let dir = tempfile::tempdir().unwrap();
        let man = "# nginx\n\nThe nginx package.\n\n## Usage\n\nRun it.\n";
        std::fs::write(dir.path().join(DEFAULT_MAN_PAGE), man).unwrap();

        let rendered = render_to_string(dir.path()).unwrap();
        assert!(rendered.contains("NGINX"));
        assert!(rendered.contains("The nginx package."));
        assert!(rendered.contains("Usage"));
    }

    #[test]
    fn test_render_without_pkgfile_uses_default_page() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_MAN_PAGE), "plain text\n").unwrap();

        let rendered = render_to_string(dir.path()).unwrap();
        assert_eq!(rendered, "plain text\n");
    }

    #[test]
    fn test_render_honors_man_field() {
        let dir = tempfile::tempdir().unwrap();
        Pkgfile {
            upstream: Upstream {
                repo: "https://example.com/repo.git".to_string(),
                git_ref: "main".to_string(),
            },
            man: Some("docs/PAGE.md".to_string()),
        }
        .store(dir.path())
        .unwrap();
        std::fs::create_dir(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/PAGE.md"), "from the docs dir\n").unwrap();

        let rendered = render_to_string(dir.path()).unwrap();
        assert!(rendered.contains("from the docs dir"));
    }

    #[test]
    fn test_render_missing_man_page() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_to_string(dir.path()).unwrap_err();
        assert!(matches!(err, EngineError::NoManPage { .. }));
        assert!(format!("{}", err).contains("no man page found"));
    }

    #[test]
    fn test_render_malformed_pkgfile_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PKGFILE_NAME), "not = [valid").unwrap();
        std::fs::write(dir.path().join(DEFAULT_MAN_PAGE), "content\n").unwrap();

        let err = render_to_string(dir.path()).unwrap_err();
        assert!(matches!(err, EngineError::PkgfileParse { .. }));
    }
}
