//! Reading-ease scoring and sentence resegmentation.
//!
//! The scorer computes a Flesch-style reading ease from sentence, word and
//! syllable counts. The adjuster resegments a passage whose score falls
//! outside a target band by splitting offending sentences at comma
//! boundaries, falling back to a word-count bisection when a sentence has no
//! commas. The adjuster is single-pass on purpose: produced parts are not
//! re-checked against the band and no recursion happens, so a part can still
//! land outside the band after one split. That is best-effort behavior, not
//! a bug.

use crate::syllable::count_syllables;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+").expect("valid word regex"));
static SENTENCE_TERMINAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence terminal regex"));
static COMMA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*").expect("valid comma regex"));

/// Computes the reading-ease score of `text`, rounded to 2 decimal places.
///
/// `score = 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`
///
/// Returns exactly 0.0 when the text has no sentences or no words. That is a
/// defined fallback for degenerate input, not a failure.
pub fn reading_ease(text: &str) -> f64 {
    let num_sentences = SENTENCE_TERMINAL_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count();
    let mut num_words = 0usize;
    let mut total_syllables = 0usize;
    for word in WORD_RE.find_iter(text) {
        num_words += 1;
        total_syllables += count_syllables(word.as_str());
    }

    if num_sentences == 0 || num_words == 0 {
        return 0.0;
    }

    let raw = 206.835
        - 1.015 * (num_words as f64 / num_sentences as f64)
        - 84.6 * (total_syllables as f64 / num_words as f64);
    (raw * 100.0).round() / 100.0
}

/// Splits `text` immediately after each sentence-terminal character that is
/// followed by whitespace. The whitespace stays with the following segment,
/// so concatenating the segments reproduces `text` exactly.
fn split_after_terminals(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, c)) = chars.next() {
        if matches!(c, '.' | '!' | '?') {
            if let Some(&(next_idx, next)) = chars.peek() {
                if next.is_whitespace() {
                    segments.push(&text[start..idx + c.len_utf8()]);
                    start = next_idx;
                }
            }
        }
    }
    if start < text.len() {
        segments.push(&text[start..]);
    }
    segments
}

/// Resegments `text` so that its sentences tend toward the target band
/// `[lower, upper]`.
///
/// Returns the text unchanged when it is empty or its whole-text score is
/// already inside the band. Otherwise each sentence is kept verbatim when
/// its own score is in band, split at comma boundaries when it has commas,
/// and bisected at the word-count midpoint (words `0..=n/2` versus the
/// rest) when it does not. All non-empty trimmed parts are joined with
/// single spaces, in order.
pub fn adjust_readability(text: &str, lower: f64, upper: f64) -> String {
    if text.is_empty() {
        return text.to_string();
    }
    let whole_score = reading_ease(text);
    if whole_score >= lower && whole_score <= upper {
        return text.to_string();
    }
    log::debug!("whole-text score {whole_score} outside [{lower}, {upper}], resegmenting");

    let mut parts: Vec<String> = Vec::new();
    for segment in split_after_terminals(text) {
        let sentence = segment.trim();
        if sentence.is_empty() {
            continue;
        }
        let score = reading_ease(sentence);
        if score >= lower && score <= upper {
            parts.push(sentence.to_string());
            continue;
        }

        let clauses: Vec<&str> = COMMA_RE.split(sentence).collect();
        if clauses.len() > 1 {
            for clause in clauses {
                let clause = clause.trim();
                if !clause.is_empty() {
                    parts.push(clause.to_string());
                }
            }
        } else {
            // No commas: bisect by word count at the midpoint.
            let words: Vec<&str> = sentence.split_whitespace().collect();
            let mid = words.len() / 2;
            let head = words[..=mid.min(words.len() - 1)].join(" ");
            if !head.is_empty() {
                parts.push(head);
            }
            let tail = words.get(mid + 1..).unwrap_or(&[]).join(" ");
            if !tail.is_empty() {
                parts.push(tail);
            }
        }
    }
    parts.join(" ")
}
