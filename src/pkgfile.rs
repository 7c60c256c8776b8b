//! Package metadata file handling
//!
//! Every fetched package carries a `Pkgfile.toml` in its root recording the
//! upstream repo and ref it was fetched from. The update engine reads it to
//! resolve the default repo and ref, and rewrites the recorded ref after a
//! successful update. The man engine reads the optional `man` field to
//! locate the package's man page source.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Metadata filename within a package directory
pub const PKGFILE_NAME: &str = "Pkgfile.toml";

/// Package metadata stored as `Pkgfile.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pkgfile {
    /// Where the package was fetched from
    pub upstream: Upstream,

    /// Relative path to the package man page source, when it is not the
    /// default `MAN.md`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub man: Option<String>,
}

/// Upstream provenance of a fetched package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upstream {
    /// Git repo url the package was fetched from
    pub repo: String,

    /// Git ref the package was last updated to
    #[serde(rename = "ref")]
    pub git_ref: String,
}

impl Pkgfile {
    /// Returns the metadata file path for a package directory
    pub fn path_in(pkg_dir: &Path) -> PathBuf {
        pkg_dir.join(PKGFILE_NAME)
    }

    /// Loads the metadata file from a package directory
    pub fn load(pkg_dir: &Path) -> Result<Self, EngineError> {
        let path = Self::path_in(pkg_dir);
        let content = fs::read_to_string(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                EngineError::pkgfile_not_found(&path)
            } else {
                EngineError::PkgfileRead {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        toml::from_str(&content).map_err(|e| EngineError::pkgfile_parse(&path, e.to_string()))
    }

    /// Writes the metadata file back into a package directory
    pub fn store(&self, pkg_dir: &Path) -> Result<(), EngineError> {
        let path = Self::path_in(pkg_dir);
        let content = toml::to_string(self)
            .map_err(|e| EngineError::pkgfile_parse(&path, e.to_string()))?;
        fs::write(&path, content).map_err(|source| EngineError::PkgfileWrite { path, source })
    }
}
