//! Output formatting module

use anyhow::Result;
use meshcast_core::Fragment;

/// Trait for fragment formatters
pub trait FragmentFormatter {
    /// Format and output a single fragment
    fn format_fragment(&mut self, fragment: &Fragment) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
