//! Output-encoding converters.
//!
//! Three pure, total functions applied to the pipeline's marked-up result:
//! markup-to-HTML substitution, marker stripping, and the ASCII to Unicode
//! mathematical-bold mapping.

use once_cell::sync::Lazy;
use regex::Regex;

static STRONG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid strong-span regex"));

// First code points of the mathematical-bold ranges.
const BOLD_UPPER_BASE: u32 = 0x1D400; // MATHEMATICAL BOLD CAPITAL A
const BOLD_LOWER_BASE: u32 = 0x1D41A; // MATHEMATICAL BOLD SMALL A
const BOLD_DIGIT_BASE: u32 = 0x1D7CE; // MATHEMATICAL BOLD DIGIT ZERO

/// Replaces each `**...**` span with a `<strong>` wrapper, non-greedy.
pub fn markup_to_html(text: &str) -> String {
    STRONG_RE.replace_all(text, "<strong>$1</strong>").into_owned()
}

/// Removes all emphasis markers, leaving the plain adjusted text.
pub fn strip_markup(text: &str) -> String {
    text.replace("**", "")
}

fn bold_char(c: char) -> char {
    let mapped = match c {
        'A'..='Z' => BOLD_UPPER_BASE + (c as u32 - 'A' as u32),
        'a'..='z' => BOLD_LOWER_BASE + (c as u32 - 'a' as u32),
        '0'..='9' => BOLD_DIGIT_BASE + (c as u32 - '0' as u32),
        _ => return c,
    };
    // The three bold ranges are fully assigned, so the fallback never fires.
    char::from_u32(mapped).unwrap_or(c)
}

/// Strips markers and maps Latin letters and digits to their mathematical
/// bold equivalents; everything else passes through unchanged.
pub fn to_unicode_bold(text: &str) -> String {
    strip_markup(text).chars().map(bold_char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_to_html_wraps_each_span() {
        assert_eq!(
            markup_to_html("Hello **world**!"),
            "Hello <strong>world</strong>!"
        );
        assert_eq!(
            markup_to_html("**a** b **c**"),
            "<strong>a</strong> b <strong>c</strong>"
        );
    }

    #[test]
    fn markup_to_html_leaves_unpaired_markers_alone() {
        assert_eq!(markup_to_html("lone ** marker"), "lone ** marker");
        assert_eq!(markup_to_html("plain text"), "plain text");
    }

    #[test]
    fn strip_markup_removes_all_markers() {
        assert_eq!(strip_markup("**Bon**jour **le** monde"), "Bonjour le monde");
        assert_eq!(strip_markup("no markers"), "no markers");
    }

    #[test]
    fn unicode_bold_maps_letters_and_digits() {
        let bold = to_unicode_bold("AB9");
        let expected: String = ['\u{1D400}', '\u{1D401}', '\u{1D7D7}'].iter().collect();
        assert_eq!(bold, expected);
        assert!(!bold.chars().any(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn unicode_bold_passes_other_characters_through() {
        assert_eq!(to_unicode_bold("a-b!"), "\u{1D41A}-\u{1D41B}!");
        assert_eq!(to_unicode_bold(" .,"), " .,");
    }

    #[test]
    fn unicode_bold_strips_markers_first() {
        assert_eq!(to_unicode_bold("**a**"), "\u{1D41A}");
    }
}
