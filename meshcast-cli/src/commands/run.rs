//! Run command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::fetch::{ForecastSource, HttpForecastSource};
use crate::publish::{FragmentSink, MqttSink, StdoutSink};
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE", default_value = "meshcast.toml")]
    pub config: PathBuf,

    /// Print fragments instead of publishing them
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self) -> Result<()> {
        let config = CliConfig::load(&self.config)?;
        if config.source.url.is_empty() {
            return Err(CliError::ConfigError("source.url is not set".to_string()).into());
        }

        let source = HttpForecastSource::new(&config.source.url)?;
        let forecasts = source.fetch_top_forecasts()?;
        log::info!("Fetched {} forecast period(s)", forecasts.len());

        let batch = meshcast_core::build_fragments(&forecasts, &config.split)?;
        for fragment in batch.fragments().iter().filter(|f| f.truncated) {
            log::warn!(
                "Fragment {}/{} truncated to fit its position suffix",
                fragment.index,
                fragment.total
            );
        }

        let mut sink: Box<dyn FragmentSink> = if self.dry_run {
            Box::new(StdoutSink::stdout())
        } else {
            Box::new(MqttSink::connect(&config.mqtt)?)
        };
        for fragment in batch.fragments() {
            sink.send(&fragment.text).with_context(|| {
                format!(
                    "Failed to transmit fragment {}/{}",
                    fragment.index, fragment.total
                )
            })?;
        }
        sink.finish()?;

        log::info!("Transmitted {} fragment(s)", batch.len());
        Ok(())
    }
}
