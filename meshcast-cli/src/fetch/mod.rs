//! Forecast retrieval
//!
//! Narrow collaborator interface for the retrieval step, plus the HTTP
//! implementation used in production. The HTML extraction itself is a pure
//! function over the document string so it can be tested without network
//! access.

use crate::error::CliError;
use anyhow::{Context, Result};
use scraper::{Html, Node, Selector};

/// Number of forecast periods taken from the top of the page
const TOP_FORECAST_COUNT: usize = 2;

/// Source of raw forecast strings
pub trait ForecastSource {
    /// Fetch the top forecast periods, newest first, at most two entries.
    ///
    /// Fewer entries (including none) is valid output; an unreachable
    /// source or missing page structure is an error.
    fn fetch_top_forecasts(&self) -> Result<Vec<String>>;
}

/// Fetches forecasts from a zone forecast product page over HTTP
pub struct HttpForecastSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpForecastSource {
    /// Create a source reading from the given URL
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

impl ForecastSource for HttpForecastSource {
    fn fetch_top_forecasts(&self) -> Result<Vec<String>> {
        log::info!("Fetching forecast page: {}", self.url);
        let body = self
            .client
            .get(&self.url)
            .send()
            .with_context(|| format!("Failed to fetch {}", self.url))?
            .error_for_status()
            .with_context(|| format!("Forecast request rejected: {}", self.url))?
            .text()
            .context("Failed to read forecast page body")?;
        extract_top_forecasts(&body)
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("invalid selector {css:?}: {e}"))
}

/// Extract the top forecast periods from a zone forecast product page.
///
/// The forecast body lives in the second 800-wide table: its first cell
/// holds bold period headers ("Tonight", "Saturday", ...) each followed by
/// text nodes with the period's forecast, separated by `<br>` and closed by
/// the next `<b>` or an `<hr>`. Each returned string is the period header
/// and its text joined by a space.
pub fn extract_top_forecasts(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let table_selector = selector(r#"table[width="800"]"#)?;
    let td_selector = selector("td")?;
    let b_selector = selector("b")?;

    let table = document
        .select(&table_selector)
        .nth(1)
        .ok_or_else(|| CliError::FetchError("forecast table not found".to_string()))?;
    let cell = table
        .select(&td_selector)
        .next()
        .ok_or_else(|| CliError::FetchError("forecast data not found".to_string()))?;

    let mut forecasts = Vec::new();
    for bold in cell.select(&b_selector) {
        let period = bold.text().collect::<String>().trim().to_string();
        let mut body = String::new();
        for sibling in bold.next_siblings() {
            match sibling.value() {
                Node::Element(el) if el.name() == "b" || el.name() == "hr" => break,
                Node::Element(el) if el.name() == "br" => continue,
                Node::Text(text) => {
                    let piece = text.trim();
                    if !piece.is_empty() {
                        if !body.is_empty() {
                            body.push(' ');
                        }
                        body.push_str(piece);
                    }
                }
                _ => {}
            }
        }

        forecasts.push(format!("{period} {body}").trim().to_string());
        if forecasts.len() == TOP_FORECAST_COUNT {
            break;
        }
    }

    log::debug!("Extracted {} forecast period(s)", forecasts.len());
    Ok(forecasts)
}
