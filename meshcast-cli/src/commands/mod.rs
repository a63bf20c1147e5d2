//! CLI command implementations

use clap::Subcommand;

pub mod generate_config;
pub mod run;
pub mod split;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch the forecast and broadcast it to the mesh channel
    Run(run::RunArgs),

    /// Split forecast text into numbered fragments without transmitting
    Split(split::SplitArgs),

    /// Generate a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}
