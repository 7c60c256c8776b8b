//! Update strategy definitions
//!
//! Strategies name the policy the update engine uses to reconcile local
//! package edits with upstream changes. The set is closed and validated at
//! argument-parse time, so an unknown strategy never reaches the engine.

use clap::ValueEnum;
use std::fmt;

/// Policy for reconciling local package edits with upstream changes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Fail unless the local package is unchanged since it was fetched
    #[default]
    FastForward,
    /// Merge upstream changes into the locally edited package
    ResourceMerge,
    /// Discard local edits and replace the package with upstream contents
    ForceDeleteReplace,
}

impl Strategy {
    /// Returns the command-line name for this strategy
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::FastForward => "fast-forward",
            Strategy::ResourceMerge => "resource-merge",
            Strategy::ForceDeleteReplace => "force-delete-replace",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fast_forward() {
        assert_eq!(Strategy::default(), Strategy::FastForward);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Strategy::FastForward.to_string(), "fast-forward");
        assert_eq!(Strategy::ResourceMerge.to_string(), "resource-merge");
        assert_eq!(Strategy::ForceDeleteReplace.to_string(), "force-delete-replace");
    }

    #[test]
    fn test_value_enum_parses_known_names() {
        for strategy in [
            Strategy::FastForward,
            Strategy::ResourceMerge,
            Strategy::ForceDeleteReplace,
        ] {
            let parsed = Strategy::from_str(strategy.as_str(), false).unwrap();
            assert_eq!(parsed, strategy);
        }
    }

    #[test]
    fn test_value_enum_rejects_unknown_name() {
        assert!(Strategy::from_str("custom-name", false).is_err());
    }
}
