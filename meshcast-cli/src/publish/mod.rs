//! Fragment transmission
//!
//! Narrow collaborator interface for the outbound step. Each fragment is a
//! standalone message: sinks transmit once, in the order given, with no
//! batching, deduplication, or retry.

use crate::config::MqttConfig;
use crate::error::CliError;
use anyhow::{Context, Result};
use rumqttc::{Client, MqttOptions, QoS};
use std::io::{self, Write};
use std::thread::JoinHandle;
use std::time::Duration;

/// Consumer of finished fragment strings
pub trait FragmentSink {
    /// Transmit one fragment
    fn send(&mut self, fragment: &str) -> Result<()>;

    /// Flush any pending transmissions and release the channel
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Build the JSON downlink payload for one fragment
fn sendtext_payload(from: u32, channel: u8, fragment: &str) -> String {
    serde_json::json!({
        "from": from,
        "channel": channel,
        "type": "sendtext",
        "payload": fragment,
    })
    .to_string()
}

/// Publishes each fragment as a JSON downlink message over MQTT
pub struct MqttSink {
    client: Client,
    handle: Option<JoinHandle<()>>,
    topic: String,
    from: u32,
    channel: u8,
}

impl MqttSink {
    /// Connect to the broker described by `config`
    pub fn connect(config: &MqttConfig) -> Result<Self> {
        let mut options = MqttOptions::new("meshcast", &config.host, config.port);
        options.set_credentials(&config.username, &config.password);
        options.set_keep_alive(Duration::from_secs(5));

        let (client, mut connection) = Client::new(options, 10);

        // The sync client makes no progress unless something drives the
        // network event loop.
        let handle = std::thread::spawn(move || {
            for event in connection.iter() {
                match event {
                    Ok(event) => log::trace!("MQTT event: {event:?}"),
                    Err(e) => {
                        log::debug!("MQTT connection closed: {e}");
                        break;
                    }
                }
            }
        });

        Ok(Self {
            client,
            handle: Some(handle),
            topic: config.topic.clone(),
            from: config.from,
            channel: config.channel,
        })
    }
}

impl FragmentSink for MqttSink {
    fn send(&mut self, fragment: &str) -> Result<()> {
        let payload = sendtext_payload(self.from, self.channel, fragment);
        self.client
            .publish(&self.topic, QoS::AtLeastOnce, false, payload.as_bytes())
            .map_err(|e| CliError::PublishError(e.to_string()))?;
        log::info!("Published to {}: {fragment}", self.topic);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.client
            .disconnect()
            .context("Failed to disconnect from MQTT broker")?;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        Ok(())
    }
}

/// Writes fragments one per line, for dry runs
pub struct StdoutSink<W: Write> {
    writer: W,
}

impl<W: Write> StdoutSink<W> {
    /// Create a sink writing to the given writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl StdoutSink<io::Stdout> {
    /// Create a sink writing to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> FragmentSink for StdoutSink<W> {
    fn send(&mut self, fragment: &str) -> Result<()> {
        writeln!(self.writer, "{fragment}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
