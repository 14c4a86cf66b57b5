use std::sync::OnceLock;

use regex::Regex;

/// Heading lines own the `#` prefix.
///
/// One to four markers followed by a space open a heading of that level.
/// Levels are checked deepest-first so a `####` prefix is never partially
/// consumed by the shallower rules.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 4;

    fn rules() -> &'static Vec<(Regex, String)> {
        static HEADING_RULES: OnceLock<Vec<(Regex, String)>> = OnceLock::new();
        HEADING_RULES.get_or_init(|| {
            (1..=Self::MAX_LEVEL)
                .rev()
                .map(|level| {
                    let marker = Self::MARKER.to_string().repeat(level);
                    let pattern = Regex::new(&format!(r"(?m)^{marker} (.*)$"))
                        .expect("invalid heading regex");
                    (pattern, format!("<h{level}>$1</h{level}>"))
                })
                .collect()
        })
    }

    pub fn apply(buf: &str) -> String {
        let mut out = buf.to_string();
        for (pattern, replacement) in Self::rules() {
            out = pattern.replace_all(&out, replacement.as_str()).into_owned();
        }
        out
    }
}
