//! Plain text output formatter

use super::FragmentFormatter;
use anyhow::Result;
use meshcast_core::Fragment;
use std::io::{self, Write};

/// Plain text formatter - outputs one fragment per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> FragmentFormatter for TextFormatter<W> {
    fn format_fragment(&mut self, fragment: &Fragment) -> Result<()> {
        writeln!(self.writer, "{}", fragment.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(text: &str, index: usize, total: usize) -> Fragment {
        Fragment {
            text: text.to_string(),
            index,
            total,
            truncated: false,
        }
    }

    #[test]
    fn writes_one_fragment_per_line() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter
            .format_fragment(&fragment("Tonight: clear. (1/2)", 1, 2))
            .unwrap();
        formatter
            .format_fragment(&fragment("Saturday: sunny. (2/2)", 2, 2))
            .unwrap();
        formatter.finish().unwrap();

        let written = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(written, "Tonight: clear. (1/2)\nSaturday: sunny. (2/2)\n");
    }
}
