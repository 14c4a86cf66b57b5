use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::render::raw::RawZones;

/// Fenced code blocks own the triple-backtick delimiter.
///
/// A fence spans any number of lines. Its interior was already escaped by the
/// first stage and is wrapped verbatim; the emitted element is stashed as a
/// raw zone so no later pass transforms markdown-looking characters inside
/// it.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    fn pattern() -> &'static Regex {
        static FENCE_REGEX: OnceLock<Regex> = OnceLock::new();
        FENCE_REGEX.get_or_init(|| Regex::new(r"(?s)```(.*?)```").expect("invalid fence regex"))
    }

    /// Replaces every closed fence with a code-block element. An unterminated
    /// fence never matches and stays literal text.
    pub fn apply(buf: &str, zones: &mut RawZones) -> String {
        Self::pattern()
            .replace_all(buf, |caps: &Captures<'_>| {
                zones.stash(format!("<pre><code>{}</code></pre>", &caps[1]))
            })
            .into_owned()
    }
}
