//! Global fragment numbering across all forecasts of one run

use crate::config::SplitConfig;
use crate::error::Result;
use crate::segmenter;
use serde::Serialize;

/// One finished outgoing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    /// Final message text, position suffix included
    pub text: String,
    /// 1-based position within the run
    pub index: usize,
    /// Total fragment count for the run
    pub total: usize,
    /// Whether content was cut from the right to make room for the suffix
    pub truncated: bool,
}

/// Ordered fragments produced from one run's forecasts
///
/// Fragment order follows forecast order, and within one forecast the
/// original word order. When the run's total pushes the real suffix past
/// the reserved width, affected fragments lose trailing content and are
/// marked [`Fragment::truncated`]; with pathologically small budgets the
/// suffix alone can exceed the budget, in which case content truncates to
/// empty and the bare suffix is emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FragmentBatch {
    fragments: Vec<Fragment>,
}

impl FragmentBatch {
    /// Fragments in transmission order
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Number of fragments in the batch
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the batch holds no fragments
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of fragments that lost content to their position suffix
    pub fn truncated_count(&self) -> usize {
        self.fragments.iter().filter(|f| f.truncated).count()
    }

    /// Consume the batch, yielding the final message strings in order
    pub fn into_strings(self) -> Vec<String> {
        self.fragments.into_iter().map(|f| f.text).collect()
    }
}

impl IntoIterator for FragmentBatch {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.fragments.into_iter()
    }
}

/// Split `forecasts` into numbered fragments.
///
/// Each forecast that already fits the budget (with the reserved suffix
/// width to spare) is kept whole; longer ones are word-wrapped by
/// [`segmenter::segment`] under the content budget. All resulting chunks
/// are then numbered `1..=total` across the whole run and suffixed with
/// `" (i/N)"`, truncating content where the real suffix would overflow
/// the budget.
///
/// An empty `forecasts` slice yields an empty batch; no numbering takes
/// place. An invalid budget fails before any fragment is produced.
pub fn build_fragments<S: AsRef<str>>(
    forecasts: &[S],
    config: &SplitConfig,
) -> Result<FragmentBatch> {
    config.validate()?;
    if forecasts.is_empty() {
        return Ok(FragmentBatch::default());
    }

    let mut chunks = Vec::new();
    for forecast in forecasts {
        let forecast = forecast.as_ref();
        if forecast.chars().count() + config.reserved_space <= config.max_total_length {
            chunks.push(forecast.to_string());
        } else {
            chunks.extend(segmenter::segment(forecast, config.content_budget())?);
        }
    }

    let total = chunks.len();
    let fragments = chunks
        .into_iter()
        .enumerate()
        .map(|(i, chunk)| finalize_chunk(chunk, i + 1, total, config.max_total_length))
        .collect();

    Ok(FragmentBatch { fragments })
}

/// Append the real position suffix, truncating content if it would not fit
fn finalize_chunk(chunk: String, index: usize, total: usize, budget: usize) -> Fragment {
    let suffix = format!(" ({index}/{total})");
    let suffix_chars = suffix.chars().count();
    let chunk_chars = chunk.chars().count();

    let (mut text, truncated) = if chunk_chars + suffix_chars > budget {
        let keep = budget.saturating_sub(suffix_chars);
        let cut: String = chunk.chars().take(keep).collect();
        (cut.trim_end().to_string(), true)
    } else {
        (chunk, false)
    };
    text.push_str(&suffix);

    Fragment {
        text,
        index,
        total,
        truncated,
    }
}
