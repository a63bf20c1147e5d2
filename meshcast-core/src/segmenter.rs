//! Greedy word-wrapping under a character budget

use crate::error::{CoreError, Result};

/// Split `text` into word-aligned chunks of at most `content_budget`
/// characters.
///
/// Words are whitespace-separated; consecutive whitespace collapses to a
/// single space and leading/trailing whitespace is dropped. Words are
/// accumulated greedily: a chunk closes once the next word (plus its
/// separating space) would push it past the budget.
///
/// A single word longer than `content_budget` is not split mid-word; it is
/// placed alone in its own chunk, which may then exceed the budget. The
/// later numbering pass truncates such chunks if they still overflow once
/// the real position suffix is known.
///
/// Blank or empty `text` yields one empty chunk, so an empty forecast still
/// occupies a numbered slot in the final sequence.
pub fn segment(text: &str, content_budget: usize) -> Result<Vec<String>> {
    if content_budget == 0 {
        return Err(CoreError::InvalidContentBudget);
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();
        if !current.is_empty() && current_chars + word_chars + 1 > content_budget {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        if current.is_empty() {
            current.push_str(word);
            current_chars = word_chars;
        } else {
            current.push(' ');
            current.push_str(word);
            current_chars += word_chars + 1;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    if chunks.is_empty() {
        chunks.push(String::new());
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_stays_in_one_chunk() {
        let chunks = segment("Tonight: clear skies.", 50).unwrap();
        assert_eq!(chunks, vec!["Tonight: clear skies."]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let chunks = segment("one two three four five", 9).unwrap();
        assert_eq!(chunks, vec!["one two", "three", "four five"]);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 9);
        }
    }

    #[test]
    fn collapses_whitespace() {
        let chunks = segment("  a\t\tb \n c  ", 100).unwrap();
        assert_eq!(chunks, vec!["a b c"]);
    }

    #[test]
    fn empty_text_yields_one_empty_chunk() {
        assert_eq!(segment("", 10).unwrap(), vec![String::new()]);
        assert_eq!(segment("   \n\t ", 10).unwrap(), vec![String::new()]);
    }

    #[test]
    fn overlong_word_kept_whole_in_own_chunk() {
        let chunks = segment("hi incomprehensibilities yo", 10).unwrap();
        assert_eq!(chunks, vec!["hi", "incomprehensibilities", "yo"]);
    }

    #[test]
    fn word_exactly_at_budget_fills_a_chunk() {
        let chunks = segment("abcde fghij", 5).unwrap();
        assert_eq!(chunks, vec!["abcde", "fghij"]);
    }

    #[test]
    fn word_order_is_preserved() {
        let text = "The quick brown fox jumps over the lazy dog";
        let chunks = segment(text, 12).unwrap();
        assert_eq!(chunks.join(" "), text);
    }

    #[test]
    fn counts_characters_not_bytes() {
        // Four two-byte characters fit a four-character budget.
        let chunks = segment("éééé øø", 4).unwrap();
        assert_eq!(chunks, vec!["éééé", "øø"]);
    }

    #[test]
    fn zero_budget_is_rejected() {
        assert_eq!(
            segment("anything", 0).unwrap_err(),
            CoreError::InvalidContentBudget
        );
    }
}
