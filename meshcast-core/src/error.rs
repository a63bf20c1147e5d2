//! Core error types

use thiserror::Error;

/// Errors produced by the segmentation pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The fragment budget leaves no room for content once the position
    /// suffix is reserved
    #[error(
        "invalid budget: max_total_length {max_total_length} must exceed \
         reserved_space {reserved_space}"
    )]
    InvalidBudget {
        /// Configured maximum fragment length
        max_total_length: usize,
        /// Configured worst-case suffix width
        reserved_space: usize,
    },

    /// The content budget handed to the segmenter was zero
    #[error("invalid content budget: must be greater than zero")]
    InvalidContentBudget,
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
