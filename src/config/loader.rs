//! Vocabulary loading configuration.
//!
//! Controls how word files are split into words and which character stands
//! for "any character" in query patterns.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Vocabulary file and pattern settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoaderConfig {
    /// Strip leading and trailing whitespace from each line
    pub trim_lines: bool,

    /// Ignore lines starting with `comment_prefix`
    pub skip_comments: bool,

    /// Marker of comment lines
    pub comment_prefix: String,

    /// Wildcard character in textual patterns
    pub wildcard: char,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            trim_lines: true,
            skip_comments: true,
            comment_prefix: "#".to_string(),
            wildcard: '?',
        }
    }
}

impl Validate for LoaderConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.skip_comments && self.comment_prefix.is_empty() {
            return Err(ConfigError::InvalidSection {
                section: "loader",
                message: "comment_prefix cannot be empty when skip_comments is enabled".to_string(),
            });
        }

        if self.wildcard.is_whitespace() {
            return Err(ConfigError::InvalidSection {
                section: "loader",
                message: "wildcard cannot be a whitespace character".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(true, "#", '?', true; "defaults")]
    #[test_case(true, "", '?', false; "empty comment prefix")]
    #[test_case(false, "", '?', true; "comments disabled")]
    #[test_case(true, "//", '*', true; "custom markers")]
    #[test_case(true, "#", ' ', false; "blank wildcard")]
    fn test_validate(skip_comments: bool, comment_prefix: &str, wildcard: char, valid: bool) {
        let config = LoaderConfig {
            skip_comments,
            comment_prefix: comment_prefix.to_string(),
            wildcard,
            ..Default::default()
        };
        assert_eq!(config.validate().is_ok(), valid);
    }
}
