/// First stage: neutralize the five HTML-significant characters.
///
/// Runs over the entire raw input before any markdown construct is
/// recognized. `&` goes first so already-produced entities are not
/// double-escaped. Backtick, asterisk and `#` are left alone so the later
/// stages can still see them as syntax.
///
/// Because `>` becomes `&gt;` here, blockquote detection downstream matches
/// the escaped form, not the literal character. That ordering is part of the
/// observable contract: an input already containing `&gt; ` double-escapes
/// and is *not* recognized as a blockquote.
pub fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
