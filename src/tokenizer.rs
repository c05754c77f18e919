//! Lossless syllable tokenization.
//!
//! The tokenizer splits text into an ordered sequence of typed tokens that,
//! concatenated back together, reproduce the input byte-for-byte. Whitespace
//! runs and single punctuation characters become `Separator` tokens; word
//! runs (Unicode-aware `\w+`) are further cut into syllable-sized pieces at
//! the start of each interior vowel run, so the piece count of a word always
//! equals its `count_syllables` estimate.

use crate::syllable::vowel_run_starts;
use once_cell::sync::Lazy;
use regex::Regex;

// Word runs, single non-word-non-space characters and whitespace runs cover
// every possible character, which is what makes the round-trip lossless.
static CHUNK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<word>\w+)|(?P<sep>[^\w\s]|\s+)").expect("valid chunk regex"));

/// Classification of a tokenized piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Whitespace runs and punctuation, reproduced verbatim.
    Separator,
    /// A syllable-sized slice of a word run (or a whole run with no interior
    /// vowel-run boundary, e.g. a digit-only run).
    Syllable,
}

/// One piece of the tokenized input. The `text` of a `Syllable` token may
/// later be wrapped in emphasis markers in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn separator(text: &str) -> Self {
        Token {
            kind: TokenKind::Separator,
            text: text.to_string(),
        }
    }

    fn syllable(text: &str) -> Self {
        Token {
            kind: TokenKind::Syllable,
            text: text.to_string(),
        }
    }
}

/// Cuts a word run into syllable-sized slices.
///
/// The cut points are the starts of every maximal vowel run except the
/// first, which keeps consonant clusters attached to the syllable on their
/// left. A run with at most one vowel run stays whole.
fn split_word_run(run: &str) -> Vec<&str> {
    let starts = vowel_run_starts(run);
    if starts.len() <= 1 {
        return vec![run];
    }
    let mut pieces = Vec::with_capacity(starts.len());
    let mut prev = 0;
    for &cut in &starts[1..] {
        pieces.push(&run[prev..cut]);
        prev = cut;
    }
    pieces.push(&run[prev..]);
    pieces
}

/// Tokenizes `text` into an ordered, lossless sequence of tokens.
///
/// Concatenating the returned tokens' `text` in order reproduces `text`
/// exactly; every character of the input belongs to exactly one token.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    for caps in CHUNK_RE.captures_iter(text) {
        if let Some(word) = caps.name("word") {
            for piece in split_word_run(word.as_str()) {
                tokens.push(Token::syllable(piece));
            }
        } else if let Some(sep) = caps.name("sep") {
            tokens.push(Token::separator(sep.as_str()));
        }
    }
    tokens
}

/// Concatenates token texts back into a single string.
pub fn reassemble(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}
