/// Final stage: every remaining line separator becomes an explicit break
/// marker.
///
/// This is one global substitution with no exceptions: separators introduced
/// by the list rejoin and separators inside restored block elements are all
/// replaced alike.
pub const BREAK: &str = "<br>";

pub fn materialize(buf: &str) -> String {
    buf.replace('\n', BREAK)
}
