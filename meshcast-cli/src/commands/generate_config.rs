//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "meshcast.toml")]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        std::fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Set source.url to your zone forecast page");
        println!("2. Fill in the [mqtt] broker credentials and node id");
        println!("3. Preview the fragments without transmitting:");
        println!("   meshcast run --config {} --dry-run", self.output.display());
        Ok(())
    }
}

const TEMPLATE: &str = r#"# meshcast configuration

[source]
# Zone forecast product page to scrape
url = ""

[mqtt]
host = "localhost"
port = 1883
username = ""
password = ""
# Mesh node id placed in the payload's "from" field
from = 0
# Mesh channel index for the downlink
channel = 0
topic = "msh/US/2/json/mqtt/"

[split]
# Maximum characters per outgoing fragment, position suffix included
max_total_length = 200
# Worst-case width of the " (i/N)" position suffix
reserved_space = 6
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use tempfile::TempDir;

    #[test]
    fn test_execute_writes_template() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("meshcast.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };

        assert!(args.execute().is_ok());
        assert!(output_path.exists());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("[mqtt]"));
        assert!(content.contains("max_total_length = 200"));
    }

    #[test]
    fn test_template_round_trips_through_config_loader() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("meshcast.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };
        args.execute().unwrap();

        let config = CliConfig::load(&output_path).unwrap();
        assert_eq!(config.mqtt.topic, "msh/US/2/json/mqtt/");
        assert_eq!(config.split.reserved_space, 6);
    }
}
