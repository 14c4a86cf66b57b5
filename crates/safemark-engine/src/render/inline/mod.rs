//! # Inline Transformer
//!
//! Third stage: inline substitution over the whole buffer, after block
//! transforms, in fixed order.
//!
//! 1. **Inline code** first; spans become raw zones so their interiors are
//!    invisible to the emphasis passes.
//! 2. **Bold** before **italic**, so a `**` pair is consumed whole.
//!
//! An unmatched marker of any kind stays literal; no repair is attempted.

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};

use crate::render::raw::RawZones;

pub fn apply(buf: &str, zones: &mut RawZones) -> String {
    let buf = CodeSpan::apply(buf, zones);
    let buf = Strong::apply(&buf);
    Emphasis::apply(&buf)
}
