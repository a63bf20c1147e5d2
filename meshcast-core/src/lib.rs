//! Forecast segmentation and fragment numbering
//!
//! This crate turns one or more long forecast strings into an ordered
//! sequence of bounded-length message fragments, each carrying a global
//! `(i/N)` position suffix. It is purely computational: no I/O, no shared
//! state, and identical inputs always produce identical output, so callers
//! may safely re-invoke it after a transport-level retry.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod indexer;
pub mod segmenter;

pub use config::SplitConfig;
pub use error::{CoreError, Result};
pub use indexer::{Fragment, FragmentBatch};
pub use segmenter::segment;

/// Split forecasts into numbered fragments using the given configuration.
///
/// Convenience wrapper around [`indexer::build_fragments`].
pub fn build_fragments<S: AsRef<str>>(
    forecasts: &[S],
    config: &SplitConfig,
) -> Result<FragmentBatch> {
    indexer::build_fragments(forecasts, config)
}
