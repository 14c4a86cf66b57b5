use std::sync::OnceLock;

use regex::Regex;

/// Fourth stage: group contiguous bullet lines into a list structure.
///
/// A bullet line is optional leading whitespace, `-` or `*`, at least one
/// whitespace character, then content. The walk is an explicit two-state
/// machine over `split('\n')`; a run of n bullet lines yields exactly n item
/// elements bracketed by one open and one close marker. Output lines are
/// rejoined with the line separator, so the grouping boundaries are still
/// visible to the break materializer.
pub const LIST_OPEN: &str = "<ul>";
pub const LIST_CLOSE: &str = "</ul>";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListState {
    NotInList,
    InList,
}

fn bullet_pattern() -> &'static Regex {
    static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();
    BULLET_REGEX.get_or_init(|| Regex::new(r"^\s*[-*]\s+(.*)$").expect("invalid bullet regex"))
}

pub fn group(buf: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut state = ListState::NotInList;

    for line in buf.split('\n') {
        match bullet_pattern().captures(line) {
            Some(caps) => {
                if state == ListState::NotInList {
                    out.push(LIST_OPEN.to_string());
                    state = ListState::InList;
                }
                out.push(format!("<li>{}</li>", &caps[1]));
            }
            None => {
                if state == ListState::InList {
                    out.push(LIST_CLOSE.to_string());
                    state = ListState::NotInList;
                }
                out.push(line.to_string());
            }
        }
    }

    // EOF while still in a list closes it
    if state == ListState::InList {
        out.push(LIST_CLOSE.to_string());
    }

    out.join("\n")
}
