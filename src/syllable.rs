//! Heuristic syllable estimation from vowel-group runs.
//!
//! A "syllable" here is a maximal contiguous run of vowel characters
//! (`a e i o u y`, case-insensitive). This approximates syllable nuclei well
//! enough for readability scoring but is explicitly not a dictionary- or
//! rule-based hyphenator: "rhythm" counts as 1 (fallback), "quiet" as 1.

/// Returns true for the characters treated as vowels throughout the pipeline.
///
/// `y` is deliberately included so the counter and the tokenizer agree on
/// where vowel runs start.
pub fn is_vowel(c: char) -> bool {
    matches!(
        c.to_ascii_lowercase(),
        'a' | 'e' | 'i' | 'o' | 'u' | 'y'
    )
}

/// Byte offsets at which each maximal vowel run of `word` begins.
pub(crate) fn vowel_run_starts(word: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut in_run = false;
    for (idx, c) in word.char_indices() {
        if is_vowel(c) {
            if !in_run {
                starts.push(idx);
                in_run = true;
            }
        } else {
            in_run = false;
        }
    }
    starts
}

/// Estimates the syllable count of a single word.
///
/// Counts maximal vowel runs; a word with no vowel run at all still counts
/// as one syllable (every word has at least one).
pub fn count_syllables(word: &str) -> usize {
    let runs = vowel_run_starts(word).len();
    if runs == 0 {
        1
    } else {
        runs
    }
}
