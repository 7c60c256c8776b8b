//! Package reference parsing
//!
//! A package reference names a local package directory, optionally qualified
//! with a version using an `@` separator: `LOCAL_PKG_DIR[@VERSION]`. The
//! version part is passed through to the update engine as an opaque git ref;
//! no ref syntax or existence checks happen here.

use crate::error::ArgumentError;
use std::fmt;
use std::str::FromStr;

/// A local package directory with an optional version qualifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    /// Path to the local package directory
    pub path: String,
    /// Git ref to update to, when the input carried an `@` qualifier
    pub git_ref: Option<String>,
}

impl FromStr for PackageReference {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('@');
        let path = parts.next().unwrap_or_default().to_string();
        let git_ref = parts.next().map(str::to_string);
        if parts.next().is_some() {
            return Err(ArgumentError::TooManyVersions);
        }
        Ok(Self { path, git_ref })
    }
}

impl fmt::Display for PackageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.git_ref {
            Some(git_ref) => write!(f, "{}@{}", self.path, git_ref),
            None => write!(f, "{}", self.path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_without_version() {
        let reference: PackageReference = "pkgs/nginx".parse().unwrap();
        assert_eq!(reference.path, "pkgs/nginx");
        assert_eq!(reference.git_ref, None);
    }

    #[test]
    fn test_parse_with_version() {
        let reference: PackageReference = "pkgs/nginx@v1.2".parse().unwrap();
        assert_eq!(reference.path, "pkgs/nginx");
        assert_eq!(reference.git_ref, Some("v1.2".to_string()));
    }

    #[test]
    fn test_parse_preserves_all_characters() {
        // The split loses nothing: path + "@" + ref reassembles the input.
        let inputs = ["pkgs/nginx@v1.2", "a@b", "deep/nested/dir@refs/heads/main"];
        for input in inputs {
            let reference: PackageReference = input.parse().unwrap();
            let reassembled = format!("{}@{}", reference.path, reference.git_ref.unwrap());
            assert_eq!(reassembled, input);
        }
    }

    #[test]
    fn test_parse_rejects_multiple_versions() {
        let err = "pkgs/nginx@v1@v2".parse::<PackageReference>().unwrap_err();
        assert_eq!(err, ArgumentError::TooManyVersions);
        assert_eq!(format!("{}", err), "at most 1 version permitted");
    }

    #[test]
    fn test_parse_rejects_three_separators() {
        assert!("a@b@c@d".parse::<PackageReference>().is_err());
    }

    #[test]
    fn test_parse_trailing_separator_yields_empty_ref() {
        // "pkgs/nginx@" is ambiguous input; it parses successfully with an
        // empty ref, which downstream code treats like an absent ref.
        let reference: PackageReference = "pkgs/nginx@".parse().unwrap();
        assert_eq!(reference.path, "pkgs/nginx");
        assert_eq!(reference.git_ref, Some(String::new()));
    }

    #[test]
    fn test_parse_leading_separator_yields_empty_path() {
        let reference: PackageReference = "@v1".parse().unwrap();
        assert_eq!(reference.path, "");
        assert_eq!(reference.git_ref, Some("v1".to_string()));
    }

    #[test]
    fn test_display_round_trip() {
        for input in ["pkgs/nginx", "pkgs/nginx@v1.2", "pkgs/nginx@"] {
            let reference: PackageReference = input.parse().unwrap();
            assert_eq!(reference.to_string(), input);
        }
    }
}
