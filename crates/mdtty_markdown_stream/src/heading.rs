//! Heading rendering.

use crate::style::HeadingStyler;

const HEADING_GLYPH: &str = "█";

/// Render a heading: block glyph, then the content in its level's style.
/// Levels beyond 6 fall back to the h6 style.
pub(crate) fn render_heading<S: HeadingStyler>(level: u8, content: &str, styler: &S) -> String {
    let styled = match level {
        1 => styler.h1(content),
        2 => styler.h2(content),
        3 => styler.h3(content),
        4 => styler.h4(content),
        5 => styler.h5(content),
        _ => styler.h6(content),
    };
    format!("{HEADING_GLYPH} {styled}")
}
