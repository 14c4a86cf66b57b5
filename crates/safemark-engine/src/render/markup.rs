/// HTML asserted safe for direct, unescaped insertion into a document.
///
/// Only the rendering pipeline can produce a value of this type: every HTML
/// metacharacter in the original input was entity-escaped before any tag was
/// synthesized, so every angle bracket in the wrapped string originates from
/// the renderer itself, never from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    /// Wraps pipeline output. Crate-private so callers cannot assert
    /// arbitrary strings trusted.
    pub(crate) fn new(html: String) -> Self {
        Self(html)
    }

    /// The empty markup value, returned for absent or empty input.
    pub(crate) fn empty() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Unwraps the markup for handoff to the host sink.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for TrustedMarkup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrustedMarkup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_markup_is_empty() {
        assert!(TrustedMarkup::empty().is_empty());
        assert_eq!(TrustedMarkup::empty().as_str(), "");
    }

    #[test]
    fn display_matches_inner() {
        let m = TrustedMarkup::new("<h1>hi</h1>".to_string());
        assert_eq!(m.to_string(), "<h1>hi</h1>");
        assert_eq!(m.as_ref(), "<h1>hi</h1>");
    }
}
