//! # Rendering Pipeline
//!
//! Renders a constrained markdown dialect into sanitized HTML for a host UI.
//!
//! One pipeline, five ordered stages, applied left-to-right to a single
//! string value with no shared state between calls:
//!
//! 1. **Escaper** (`escape`): the five HTML metacharacters become entities.
//! 2. **Block Transformer** (`blocks`): fenced code, headings, blockquotes.
//! 3. **Inline Transformer** (`inline`): code spans, bold, italic.
//! 4. **List Grouper** (`lists`): contiguous bullet lines become one list.
//! 5. **Break Materializer** (`breaks`): remaining separators become `<br>`,
//!    and the result is wrapped as [`TrustedMarkup`].
//!
//! Control flows strictly forward. Fenced code and inline code spans are raw
//! zones ([`raw`]): their emitted markup is stashed behind placeholder tokens
//! so later substitution passes never re-examine it, and restored after list
//! grouping so the break pass still sees separators inside them.
//!
//! The pipeline is total and pure: any input, including `None`, yields
//! exactly one [`TrustedMarkup`]; malformed or unpaired syntax degrades to
//! literal text rather than erroring.

pub mod blocks;
pub mod breaks;
pub mod escape;
pub mod inline;
pub mod lists;
pub mod markup;
pub mod raw;

pub use markup::TrustedMarkup;

use raw::RawZones;

/// Renders markdown source into trusted HTML.
///
/// Absent or empty input yields the empty markup value. This function is the
/// only producer of [`TrustedMarkup`].
pub fn render(text: Option<&str>) -> TrustedMarkup {
    let raw = match text {
        Some(t) if !t.is_empty() => t,
        _ => return TrustedMarkup::empty(),
    };

    let mut zones = RawZones::default();
    let buf = escape::escape(raw);
    let buf = blocks::apply(&buf, &mut zones);
    let buf = inline::apply(&buf, &mut zones);
    let buf = lists::group(&buf);
    let buf = zones.restore(&buf);
    TrustedMarkup::new(breaks::materialize(&buf))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(input: &str) -> String {
        render(Some(input)).into_string()
    }

    #[test]
    fn absent_and_empty_input_yield_empty_markup() {
        assert!(render(None).is_empty());
        assert!(render(Some("")).is_empty());
    }

    #[test]
    fn plain_text_is_escaped_and_break_separated() {
        assert_eq!(
            html("a < b\nc & d"),
            "a &lt; b<br>c &amp; d"
        );
    }

    #[test]
    fn bold_runs_before_italic() {
        assert_eq!(html("**x**"), "<strong>x</strong>");
    }

    #[test]
    fn heading_levels() {
        assert_eq!(html("# Title"), "<h1>Title</h1>");
        assert_eq!(html("#### Title"), "<h4>Title</h4>");
    }

    #[test]
    fn list_run_is_bracketed_with_breaks_at_every_boundary() {
        assert_eq!(
            html("- a\n- b"),
            "<ul><br><li>a</li><br><li>b</li><br></ul>"
        );
    }

    #[test]
    fn fence_interior_is_not_transformed() {
        assert_eq!(
            html("```\n**a** `b` # c\n```"),
            "<pre><code><br>**a** `b` # c<br></code></pre>"
        );
    }

    #[test]
    fn unpaired_asterisk_stays_literal() {
        assert_eq!(html("a * b"), "a * b");
    }

    #[test]
    fn blockquote_matches_escaped_prefix_only() {
        assert_eq!(html("> aside"), "<blockquote>aside</blockquote>");
        // Input that already contains the entity double-escapes instead.
        assert_eq!(html("&gt; aside"), "&amp;gt; aside");
    }

    #[test]
    fn script_input_cannot_reach_output_unescaped() {
        let out = html("<script>alert('x')</script>");
        assert_eq!(
            out,
            "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"
        );
    }

    #[test]
    fn code_span_interior_survives_list_grouping() {
        // A backtick span holding a bullet-looking line must not open a list.
        assert_eq!(html("`- a`"), "<code>- a</code>");
    }
}
