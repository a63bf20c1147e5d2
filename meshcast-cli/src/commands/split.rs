//! Split command implementation

use crate::output::{FragmentFormatter, JsonFormatter, TextFormatter};
use anyhow::{Context, Result};
use clap::Args;
use meshcast_core::SplitConfig;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Input files, one forecast per file (reads stdin when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Vec<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Maximum fragment length in characters, position suffix included
    #[arg(long, value_name = "CHARS", default_value_t = 200)]
    pub max_length: usize,

    /// Characters reserved for the worst-case position suffix
    #[arg(long, value_name = "CHARS", default_value_t = 6)]
    pub reserved: usize,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one fragment per line
    Text,
    /// JSON array of fragments with position metadata
    Json,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        let forecasts = self.read_forecasts()?;
        let config = SplitConfig::new(self.max_length, self.reserved)?;

        let batch = meshcast_core::build_fragments(&forecasts, &config)?;
        for fragment in batch.fragments().iter().filter(|f| f.truncated) {
            log::warn!(
                "Fragment {}/{} truncated to fit its position suffix",
                fragment.index,
                fragment.total
            );
        }

        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(
                fs::File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            ),
            None => Box::new(io::stdout()),
        };
        let mut formatter: Box<dyn FragmentFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        };
        for fragment in batch.fragments() {
            formatter.format_fragment(fragment)?;
        }
        formatter.finish()?;

        Ok(())
    }

    /// Read one forecast per input file, or a single forecast from stdin
    fn read_forecasts(&self) -> Result<Vec<String>> {
        if self.input.is_empty() {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            return Ok(vec![text.trim().to_string()]);
        }

        self.input
            .iter()
            .map(|path| {
                let content = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read file: {}", path.display()))?;
                Ok(content.trim().to_string())
            })
            .collect()
    }
}
