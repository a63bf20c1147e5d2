//! meshcast CLI library
//!
//! Glue layer around `meshcast-core`: configuration loading, forecast
//! retrieval, fragment formatting, and MQTT transmission.

pub mod commands;
pub mod config;
pub mod error;
pub mod fetch;
pub mod output;
pub mod publish;

pub use error::{CliError, CliResult};
