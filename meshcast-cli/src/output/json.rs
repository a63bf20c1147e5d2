//! JSON output formatter

use super::FragmentFormatter;
use anyhow::Result;
use meshcast_core::Fragment;
use std::io::Write;

/// JSON formatter - outputs fragments as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    fragments: Vec<Fragment>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            fragments: Vec::new(),
        }
    }
}

impl<W: Write> FragmentFormatter for JsonFormatter<W> {
    fn format_fragment(&mut self, fragment: &Fragment) -> Result<()> {
        self.fragments.push(fragment.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.fragments)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
