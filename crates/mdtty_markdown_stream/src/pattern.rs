//! Line patterns shared by the pre-filter and the detector.
//!
//! All matchers work on a single line without its terminator and borrow from
//! it; nothing here allocates.

use crate::block::ListType;

const FENCE: &str = "```";

/// Strips the `\r` a PTY leaves in front of the `\n`.
pub(crate) fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Returns the marker's payload when `rest` starts with a space. A tab does
/// not count.
fn after_space(rest: &str) -> Option<&str> {
    rest.strip_prefix(' ')
}

/// `#{1,6}` followed by a space and non-empty content.
pub(crate) fn heading(line: &str) -> Option<(u8, &str)> {
    let level = line.bytes().take_while(|b| *b == b'#').count();
    if !(1..=6).contains(&level) {
        return None;
    }
    let content = after_space(&line[level..])?.trim();
    if content.is_empty() {
        return None;
    }
    Some((level as u8, content))
}

/// A fence opener: three backticks and an optional language token, nothing
/// else apart from trailing whitespace. Yields the token, empty when absent.
pub(crate) fn fence_open(line: &str) -> Option<&str> {
    let language = line.strip_prefix(FENCE)?.trim_end();
    if language.chars().any(|c| c.is_whitespace() || c == '`') {
        return None;
    }
    Some(language)
}

/// A line made only of three backticks and optional trailing whitespace.
pub(crate) fn fence_close(line: &str) -> bool {
    line.strip_prefix(FENCE)
        .is_some_and(|rest| rest.chars().all(char::is_whitespace))
}

/// Bullet (`-`/`*` + space) or ordered (`digits` + `.` + space) item with
/// non-empty content.
pub(crate) fn list_item(line: &str) -> Option<(ListType, &str)> {
    let (list_type, rest) = if let Some(rest) = line.strip_prefix(['-', '*']) {
        (ListType::Bullet, rest)
    } else {
        let digits = line.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        (ListType::Ordered, line[digits..].strip_prefix('.')?)
    };
    let content = after_space(rest)?.trim();
    if content.is_empty() {
        return None;
    }
    Some((list_type, content))
}

/// `>` followed by one space. Only that space is stripped; the content may be
/// empty.
pub(crate) fn blockquote(line: &str) -> Option<&str> {
    line.strip_prefix("> ").map(str::trim_end)
}

/// Three or more identical characters from `-`, `_`, `*` alone on the line.
pub(crate) fn horizontal_rule(line: &str) -> bool {
    let line = line.trim_end();
    let bytes = line.as_bytes();
    match bytes.first() {
        Some(first @ (b'-' | b'_' | b'*')) => {
            bytes.len() >= 3 && bytes.iter().all(|b| b == first)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_heading_levels() {
        assert_eq!(heading("# Title"), Some((1, "Title")));
        assert_eq!(heading("###### Six"), Some((6, "Six")));
        assert_eq!(heading("####### Seven"), None);
    }

    #[test]
    fn test_heading_requires_space_and_content() {
        assert_eq!(heading("#"), None);
        assert_eq!(heading("# "), None);
        assert_eq!(heading("#Title"), None);
        assert_eq!(heading("#  padded  "), Some((1, "padded")));
    }

    #[test]
    fn test_fence_open() {
        assert_eq!(fence_open("```"), Some(""));
        assert_eq!(fence_open("```rust"), Some("rust"));
        assert_eq!(fence_open("```c++  "), Some("c++"));
        assert_eq!(fence_open("```rust extra"), None);
        assert_eq!(fence_open("````"), None);
        assert_eq!(fence_open("  ```"), None);
    }

    #[test]
    fn test_fence_close() {
        assert!(fence_close("```"));
        assert!(fence_close("```  \t"));
        assert!(!fence_close("```rust"));
        assert!(!fence_close("}```"));
    }

    #[test]
    fn test_list_items() {
        assert_eq!(list_item("- A"), Some((ListType::Bullet, "A")));
        assert_eq!(list_item("* B"), Some((ListType::Bullet, "B")));
        assert_eq!(list_item("12. twelve"), Some((ListType::Ordered, "twelve")));
        assert_eq!(list_item("-"), None);
        assert_eq!(list_item("- "), None);
        assert_eq!(list_item("1."), None);
        assert_eq!(list_item("1.5 apples"), None);
        assert_eq!(list_item("-x"), None);
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(blockquote("> quoted"), Some("quoted"));
        assert_eq!(blockquote(">  two spaces"), Some(" two spaces"));
        assert_eq!(blockquote("> "), Some(""));
        assert_eq!(blockquote(">"), None);
    }

    #[test]
    fn test_horizontal_rule() {
        assert!(horizontal_rule("---"));
        assert!(horizontal_rule("*****"));
        assert!(horizontal_rule("___ "));
        assert!(!horizontal_rule("--"));
        assert!(!horizontal_rule("-*-"));
        assert!(!horizontal_rule("- - -"));
        assert!(!horizontal_rule("==="));
    }

    #[test]
    fn test_strip_cr() {
        assert_eq!(strip_cr("line\r"), "line");
        assert_eq!(strip_cr("line"), "line");
    }

    #[test]
    fn test_tab_after_marker_is_not_a_separator() {
        assert_eq!(heading("#\tTitle"), None);
        assert_eq!(list_item("-\titem"), None);
        assert_eq!(list_item("*\titem"), None);
        assert_eq!(list_item("1.\titem"), None);
        assert_eq!(heading("# \tTitle"), Some((1, "Title")));
    }
}
