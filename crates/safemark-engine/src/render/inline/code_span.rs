use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::render::raw::RawZones;

/// Inline code spans own the single-backtick delimiter.
///
/// A span is non-greedy and stays within one line. Like fences, spans are raw
/// zones: this pass runs before bold and italic so markdown-looking
/// characters inside a span are never mistaken for emphasis markers.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: char = '`';

    fn pattern() -> &'static Regex {
        static SPAN_REGEX: OnceLock<Regex> = OnceLock::new();
        SPAN_REGEX.get_or_init(|| Regex::new(r"`(.+?)`").expect("invalid code span regex"))
    }

    pub fn apply(buf: &str, zones: &mut RawZones) -> String {
        Self::pattern()
            .replace_all(buf, |caps: &Captures<'_>| {
                zones.stash(format!("<code>{}</code>", &caps[1]))
            })
            .into_owned()
    }
}
