//! End-to-end properties of the styling pipeline.

use once_cell::sync::Lazy;
use proptest::prelude::*;
use regex::Regex;

use rust_syllable_styler::readability::adjust_readability;
use rust_syllable_styler::render::{markup_to_html, strip_markup, to_unicode_bold};
use rust_syllable_styler::tokenizer::{reassemble, tokenize, TokenKind};
use rust_syllable_styler::{process_text, StylerConfig};

static MARKED_SPAN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("valid marked-span regex"));

proptest! {
    /// Concatenating the tokenizer's texts reproduces any input exactly.
    #[test]
    fn tokenizer_round_trips_arbitrary_text(text in any::<String>()) {
        let tokens = tokenize(&text);
        prop_assert_eq!(reassemble(&tokens), text);
    }

    /// Stripping the emphasis markers always recovers the adjusted text,
    /// whatever the entropy-driven block sizes turned out to be. The input
    /// strategy avoids `*` so pre-existing markers cannot alias ours.
    #[test]
    fn stripping_process_output_recovers_adjusted_text(
        text in "[a-zA-Z0-9 .,!?;:()'-]{0,200}",
    ) {
        let defaults = StylerConfig::default();
        let adjusted = adjust_readability(&text, defaults.band_lower, defaults.band_upper);
        let styled = process_text(&text);
        prop_assert_eq!(strip_markup(&styled), adjusted);
    }
}

#[test]
fn every_marked_span_is_one_whole_syllable_token() {
    let input = "Readability adjustment happens before the emphasis, naturally. \
                 Short words stay whole.";
    let defaults = StylerConfig::default();
    let adjusted = adjust_readability(input, defaults.band_lower, defaults.band_upper);
    let syllables: Vec<String> = tokenize(&adjusted)
        .into_iter()
        .filter(|t| t.kind == TokenKind::Syllable)
        .map(|t| t.text)
        .collect();

    let styled = process_text(input);
    let mut marked = 0;
    for caps in MARKED_SPAN_RE.captures_iter(&styled) {
        let span = &caps[1];
        assert!(
            syllables.iter().any(|s| s == span),
            "marked span {span:?} is not a whole syllable token"
        );
        marked += 1;
    }
    assert!(marked > 0, "expected at least one marked syllable in {styled}");
}

#[test]
fn renderings_agree_on_the_underlying_text() {
    let styled = process_text("Bonjour le monde.");
    let html = markup_to_html(&styled);
    let unicode = to_unicode_bold(&styled);

    // The HTML rendering carries the same characters once tags are removed.
    let detagged = html.replace("<strong>", "").replace("</strong>", "");
    assert_eq!(detagged, strip_markup(&styled));

    // The Unicode rendering keeps non-alphanumerics (spaces, the period)
    // and has no ASCII letters left.
    assert!(!unicode.chars().any(|c| c.is_ascii_alphabetic()));
    assert_eq!(
        unicode.chars().filter(|c| *c == ' ').count(),
        strip_markup(&styled).chars().filter(|c| *c == ' ').count()
    );
    assert!(unicode.ends_with('.'));
}

#[test]
fn empty_and_degenerate_inputs_produce_defined_outputs() {
    assert_eq!(process_text(""), "");
    // No vowels, no sentence punctuation: still total.
    let styled = process_text("tsk");
    assert_eq!(strip_markup(&styled), "tsk");
    // Lone punctuation has no syllables to mark.
    assert_eq!(process_text("..."), "...");
}
