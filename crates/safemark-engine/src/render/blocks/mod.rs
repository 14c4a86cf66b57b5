//! # Block Transformer
//!
//! Second stage: block-level substitution over the whole buffer, in fixed
//! order.
//!
//! 1. **Fenced code blocks** first. A closed fence becomes a raw zone, so its
//!    interior is invisible to every later pass, headings and blockquotes
//!    included.
//! 2. **Headings**, deepest level first.
//! 3. **Blockquotes**, matched against the escaped `&gt;` prefix the first
//!    stage produced.
//!
//! Each block kind owns its delimiter and pattern in its own module.

pub mod block_quote;
pub mod code_fence;
pub mod heading;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;

use crate::render::raw::RawZones;

pub fn apply(buf: &str, zones: &mut RawZones) -> String {
    let buf = CodeFence::apply(buf, zones);
    let buf = Heading::apply(&buf);
    BlockQuote::apply(&buf)
}
