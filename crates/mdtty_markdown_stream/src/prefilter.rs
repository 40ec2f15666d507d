//! Cheap test run before the detector.

use crate::pattern;

/// Returns true when at least one line of `chunk` starts like a construct the
/// detector recognizes.
///
/// This does no parsing beyond per-line prefix checks and never allocates, so
/// the adapter can call it on every chunk of ordinary program output.
pub fn likely_contains_markdown(chunk: &str) -> bool {
    chunk.lines().any(|line| {
        line.starts_with("```")
            || pattern::heading(line).is_some()
            || pattern::list_item(line).is_some()
            || pattern::blockquote(line).is_some()
            || pattern::horizontal_rule(line)
    })
}
