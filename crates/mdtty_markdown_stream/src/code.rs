//! Code block rendering inside a horizontal-line box.

use unicode_width::UnicodeWidthStr;

use crate::style::BlockStyler;

const TOP_LEFT: &str = "┌";
const BOTTOM_LEFT: &str = "└";
const SIDE: &str = "│";
const LINE: &str = "─";

/// Render a code block as a box `width` columns wide.
///
/// The language tag sits in the top border when present. Body lines are kept
/// as-is and never wrapped, so long lines may run past the box.
pub(crate) fn render_code_block<S: BlockStyler>(
    content: &str,
    language: Option<&str>,
    width: usize,
    styler: &S,
) -> String {
    let mut lines = Vec::new();

    let top = match language.filter(|lang| !lang.is_empty()) {
        Some(lang) => {
            let label = format!(" {lang} ");
            let fill = width.saturating_sub(TOP_LEFT.width() + LINE.width() + label.width());
            let mut top = styler.code_border(&format!("{TOP_LEFT}{LINE}"));
            top.push_str(&styler.code_language(&label));
            if fill > 0 {
                top.push_str(&styler.code_border(&LINE.repeat(fill)));
            }
            top
        }
        None => styler.code_border(&edge(TOP_LEFT, width)),
    };
    lines.push(top);

    for line in content.split('\n') {
        lines.push(format!("{} {}", styler.code_border(SIDE), line));
    }

    lines.push(styler.code_border(&edge(BOTTOM_LEFT, width)));
    lines.join("\n")
}

fn edge(corner: &str, width: usize) -> String {
    format!("{corner}{}", LINE.repeat(width.saturating_sub(corner.width())))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::theme::{TagStyler, Theme};

    #[test]
    fn test_box_with_language() {
        let actual = render_code_block("let a = 1;\nlet b = 2;", Some("rust"), 16, &TagStyler);
        insta::assert_snapshot!(actual, @r"
        <border>┌─</border><lang> rust </lang><border>────────</border>
        <border>│</border> let a = 1;
        <border>│</border> let b = 2;
        <border>└───────────────</border>
        ");
    }

    #[test]
    fn test_box_without_language() {
        let actual = render_code_block("echo hi", None, 10, &TagStyler);
        insta::assert_snapshot!(actual, @r"
        <border>┌─────────</border>
        <border>│</border> echo hi
        <border>└─────────</border>
        ");
    }

    #[test]
    fn test_empty_language_is_hidden() {
        let with_empty = render_code_block("x", Some(""), 10, &TagStyler);
        let without = render_code_block("x", None, 10, &TagStyler);
        assert_eq!(with_empty, without);
    }

    #[test]
    fn test_long_lines_are_not_wrapped() {
        let fixture = "x".repeat(50);
        let actual = render_code_block(&fixture, None, 20, &TagStyler);
        assert_eq!(actual.lines().nth(1), Some(format!("<border>│</border> {fixture}").as_str()));
        assert_eq!(actual.lines().count(), 3);
    }

    #[test]
    fn test_border_width_follows_terminal() {
        let actual = render_code_block("x", Some("py"), 30, &Theme::default());
        let plain = strip_ansi_escapes::strip_str(&actual);
        let widths: Vec<_> = plain.lines().map(UnicodeWidthStr::width).collect();
        assert_eq!(widths, vec![30, 3, 30]);
    }

    #[test]
    fn test_narrow_width_keeps_label() {
        let actual = render_code_block("", Some("typescript"), 4, &TagStyler);
        assert_eq!(
            actual,
            "<border>┌─</border><lang> typescript </lang>\n<border>│</border> \n<border>└───</border>"
        );
    }
}
