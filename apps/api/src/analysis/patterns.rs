//! Regex building blocks shared by the analyzer's patterns.
//!
//! Keywords fold case over ASCII letters only, so `ſ` never matches `s` and
//! the Kelvin sign never matches `k`. Whitespace is the ECMAScript set: the
//! Unicode space separators plus U+FEFF, but not U+0085.

use regex::Regex;

/// Members of the whitespace class, for splicing inside `[...]`.
pub const SPACE_CHARS: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// One whitespace character.
pub fn space() -> String {
    format!("[{SPACE_CHARS}]")
}

/// One non-whitespace character.
pub fn non_space() -> String {
    format!("[^{SPACE_CHARS}]")
}

/// Wraps `fragment` so it matches case-insensitively over ASCII only.
/// Fragments that cannot be expressed without Unicode (non-ASCII text, `.`)
/// fall back to full Unicode case folding.
pub fn ascii_fold(fragment: &str) -> String {
    let ascii = format!("(?i-u:{fragment})");
    if fragment.is_ascii() && Regex::new(&ascii).is_ok() {
        ascii
    } else {
        format!("(?i:{fragment})")
    }
}

/// Compiles one of the analyzer's fixed patterns.
pub fn fixed(pattern: &str) -> Regex {
    Regex::new(pattern).expect("fixed analyzer pattern is valid")
}
