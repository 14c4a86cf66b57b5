/// Stash table for raw zones.
///
/// Fenced code blocks and inline code spans are raw zones: once their markup
/// is emitted, no later substitution pass may look inside it. The emitting
/// stage stashes the rendered HTML here and leaves an opaque placeholder
/// token in the working buffer; the assembler restores the stashed HTML
/// after list grouping and before line breaks are materialized, so
/// separators inside restored elements still become break markers.
///
/// Tokens are delimited by STX/ETX control characters, which no substitution
/// stage matches. A colliding token in user input could at worst duplicate
/// already-escaped stashed content, never un-escape anything.
#[derive(Debug, Default)]
pub struct RawZones {
    slots: Vec<String>,
}

const OPEN: char = '\u{2}';
const CLOSE: char = '\u{3}';

impl RawZones {
    /// Stashes rendered HTML and returns the placeholder to splice into the
    /// working buffer.
    pub fn stash(&mut self, html: String) -> String {
        let token = Self::token(self.slots.len());
        self.slots.push(html);
        token
    }

    /// Splices every stashed zone back into the buffer.
    ///
    /// Restores in descending stash order: a zone stashed later can contain
    /// the placeholder of an earlier one (a fence inside an inline code
    /// span), and lower-indexed placeholders are always the inner ones.
    pub fn restore(&self, buf: &str) -> String {
        let mut out = buf.to_string();
        for (i, html) in self.slots.iter().enumerate().rev() {
            out = out.replace(&Self::token(i), html);
        }
        out
    }

    fn token(index: usize) -> String {
        format!("{OPEN}raw:{index}{CLOSE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stash_and_restore_round_trip() {
        let mut zones = RawZones::default();
        let token = zones.stash("<code>x</code>".to_string());
        let buf = format!("before {token} after");
        assert_eq!(zones.restore(&buf), "before <code>x</code> after");
    }

    #[test]
    fn restore_resolves_zone_containing_earlier_placeholder() {
        let mut zones = RawZones::default();
        let inner = zones.stash("<pre><code>x</code></pre>".to_string());
        let outer = zones.stash(format!("<code> {inner} </code>"));
        assert_eq!(
            zones.restore(&outer),
            "<code> <pre><code>x</code></pre> </code>"
        );
    }

    #[test]
    fn restore_without_zones_is_identity() {
        let zones = RawZones::default();
        assert_eq!(zones.restore("plain text"), "plain text");
    }
}
