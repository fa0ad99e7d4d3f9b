//! Validation of the trie section.

use super::{ConfigResult, Validate};
use crate::data_structures::niihau_trie::NiihauTrieConfig;
use crate::error::config::ConfigError;

impl Validate for NiihauTrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        // A pool of zero is allowed: every query then allocates its own buffer.
        if self.queue_capacity == 0 {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.queue_capacity",
                message: "must be greater than 0",
            });
        }
        Ok(())
    }
}
