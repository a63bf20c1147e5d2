//! Split configuration

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Default maximum fragment length in characters, suffix included
pub const DEFAULT_MAX_TOTAL_LENGTH: usize = 200;

/// Default worst-case width of the `" (i/N)"` position suffix
pub const DEFAULT_RESERVED_SPACE: usize = 6;

/// Configuration for forecast splitting
///
/// Replaces the process-wide configuration of earlier revisions with an
/// explicit value passed into the pipeline entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Maximum total character length of one outgoing fragment, including
    /// its appended position suffix
    #[serde(default = "default_max_total_length")]
    pub max_total_length: usize,

    /// Characters reserved for the worst-case position suffix while
    /// word-wrapping, before the real suffix is known
    #[serde(default = "default_reserved_space")]
    pub reserved_space: usize,
}

fn default_max_total_length() -> usize {
    DEFAULT_MAX_TOTAL_LENGTH
}

fn default_reserved_space() -> usize {
    DEFAULT_RESERVED_SPACE
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            max_total_length: DEFAULT_MAX_TOTAL_LENGTH,
            reserved_space: DEFAULT_RESERVED_SPACE,
        }
    }
}

impl SplitConfig {
    /// Create a validated configuration
    pub fn new(max_total_length: usize, reserved_space: usize) -> Result<Self> {
        let config = Self {
            max_total_length,
            reserved_space,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the budget leaves a positive content budget
    pub fn validate(&self) -> Result<()> {
        if self.max_total_length <= self.reserved_space {
            return Err(CoreError::InvalidBudget {
                max_total_length: self.max_total_length,
                reserved_space: self.reserved_space,
            });
        }
        Ok(())
    }

    /// Budget available for content during word-wrapping
    pub fn content_budget(&self) -> usize {
        self.max_total_length.saturating_sub(self.reserved_space)
    }
}
