use std::sync::OnceLock;

use regex::Regex;

/// Strong emphasis owns the double-asterisk marker.
///
/// Runs before [`Emphasis`] so a well-formed `**` pair is consumed whole and
/// never split into two single-asterisk matches.
pub struct Strong;

impl Strong {
    pub const MARKER: &'static str = "**";

    fn pattern() -> &'static Regex {
        static STRONG_REGEX: OnceLock<Regex> = OnceLock::new();
        STRONG_REGEX.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("invalid strong regex"))
    }

    pub fn apply(buf: &str) -> String {
        Self::pattern()
            .replace_all(buf, "<strong>$1</strong>")
            .into_owned()
    }
}

/// Regular emphasis owns the single-asterisk marker.
///
/// Both markers must sit outside a word: the `\B` guards reject an asterisk
/// glued to word characters on the outside, so compound tokens like `a*b*c`
/// never open a span. Unpaired markers stay literal.
pub struct Emphasis;

impl Emphasis {
    pub const MARKER: char = '*';

    fn pattern() -> &'static Regex {
        static EM_REGEX: OnceLock<Regex> = OnceLock::new();
        EM_REGEX.get_or_init(|| Regex::new(r"\B\*(.+?)\*\B").expect("invalid emphasis regex"))
    }

    pub fn apply(buf: &str) -> String {
        Self::pattern().replace_all(buf, "<em>$1</em>").into_owned()
    }
}
