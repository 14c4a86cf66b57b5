use std::sync::OnceLock;

use regex::Regex;

/// Blockquote lines own the `>` prefix.
///
/// By the time this stage runs, the escaper has already turned `>` into
/// `&gt;`, so detection matches the escaped form; matching the literal
/// character here would never fire. Each qualifying line becomes its own
/// element; consecutive quote lines are not merged.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix as it appears after the escape stage.
    pub const ESCAPED_PREFIX: &'static str = "&gt;";

    fn pattern() -> &'static Regex {
        static QUOTE_REGEX: OnceLock<Regex> = OnceLock::new();
        QUOTE_REGEX.get_or_init(|| Regex::new(r"(?m)^&gt; (.*)$").expect("invalid quote regex"))
    }

    pub fn apply(buf: &str) -> String {
        Self::pattern()
            .replace_all(buf, "<blockquote>$1</blockquote>")
            .into_owned()
    }
}
