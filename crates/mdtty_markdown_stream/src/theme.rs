//! Fixed ANSI palette and the style table used for every block kind.
//!
//! Styling goes through the `colored` crate, which also honours `NO_COLOR`
//! and `CLICOLOR_FORCE`.

pub use colored::Color;
use colored::{ColoredString, Colorize};

use crate::style::{BlockStyler, HeadingStyler, ListStyler};

/// Style configuration for a single element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dimmed: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dimmed(mut self) -> Self {
        self.dimmed = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Apply this style to a string. A plain style leaves the text untouched.
    pub fn apply(&self, text: &str) -> ColoredString {
        let mut result = text.normal();

        if let Some(fg) = self.fg {
            result = result.color(fg);
        }
        if let Some(bg) = self.bg {
            result = result.on_color(bg);
        }
        if self.bold {
            result = result.bold();
        }
        if self.dimmed {
            result = result.dimmed();
        }
        if self.italic {
            result = result.italic();
        }
        if self.underline {
            result = result.underline();
        }

        result
    }
}

/// Style table for every block element. The values are fixed.
#[derive(Clone, Debug)]
pub(crate) struct Theme {
    heading1: Style,
    heading2: Style,
    heading3: Style,
    heading4: Style,
    heading5: Style,
    heading6: Style,
    bullet: Style,
    number: Style,
    blockquote: Style,
    hr: Style,
    code_border: Style,
    code_language: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            heading1: Style::new().bold().fg(Color::BrightCyan),
            heading2: Style::new().bold().fg(Color::BrightGreen),
            heading3: Style::new().bold().fg(Color::BrightYellow),
            heading4: Style::new().bold().fg(Color::BrightMagenta),
            heading5: Style::new().bold().fg(Color::BrightBlue),
            heading6: Style::new().bold().fg(Color::BrightWhite),
            bullet: Style::new().fg(Color::Green),
            number: Style::new().fg(Color::BrightBlue),
            blockquote: Style::new().italic(),
            hr: Style::new().dimmed(),
            code_border: Style::new().dimmed(),
            code_language: Style::new().bold().fg(Color::Black).bg(Color::Cyan),
        }
    }
}

impl HeadingStyler for Theme {
    fn h1(&self, text: &str) -> String {
        self.heading1.apply(text).to_string()
    }

    fn h2(&self, text: &str) -> String {
        self.heading2.apply(text).to_string()
    }

    fn h3(&self, text: &str) -> String {
        self.heading3.apply(text).to_string()
    }

    fn h4(&self, text: &str) -> String {
        self.heading4.apply(text).to_string()
    }

    fn h5(&self, text: &str) -> String {
        self.heading5.apply(text).to_string()
    }

    fn h6(&self, text: &str) -> String {
        self.heading6.apply(text).to_string()
    }
}

impl ListStyler for Theme {
    fn bullet(&self, glyph: &str) -> String {
        self.bullet.apply(glyph).to_string()
    }

    fn number(&self, glyph: &str) -> String {
        self.number.apply(glyph).to_string()
    }
}

impl BlockStyler for Theme {
    fn quote(&self, text: &str) -> String {
        self.blockquote.apply(text).to_string()
    }

    fn rule(&self, text: &str) -> String {
        self.hr.apply(text).to_string()
    }

    fn code_border(&self, text: &str) -> String {
        self.code_border.apply(text).to_string()
    }

    fn code_language(&self, text: &str) -> String {
        self.code_language.apply(text).to_string()
    }
}

/// Test styler that outputs readable HTML-like tags.
#[cfg(test)]
pub(crate) struct TagStyler;

#[cfg(test)]
impl HeadingStyler for TagStyler {
    fn h1(&self, text: &str) -> String {
        format!("<h1>{}</h1>", text)
    }

    fn h2(&self, text: &str) -> String {
        format!("<h2>{}</h2>", text)
    }

    fn h3(&self, text: &str) -> String {
        format!("<h3>{}</h3>", text)
    }

    fn h4(&self, text: &str) -> String {
        format!("<h4>{}</h4>", text)
    }

    fn h5(&self, text: &str) -> String {
        format!("<h5>{}</h5>", text)
    }

    fn h6(&self, text: &str) -> String {
        format!("<h6>{}</h6>", text)
    }
}

#[cfg(test)]
impl ListStyler for TagStyler {
    fn bullet(&self, glyph: &str) -> String {
        format!("<bullet>{}</bullet>", glyph)
    }

    fn number(&self, glyph: &str) -> String {
        format!("<num>{}</num>", glyph)
    }
}

#[cfg(test)]
impl BlockStyler for TagStyler {
    fn quote(&self, text: &str) -> String {
        format!("<i>{}</i>", text)
    }

    fn rule(&self, text: &str) -> String {
        format!("<dim>{}</dim>", text)
    }

    fn code_border(&self, text: &str) -> String {
        format!("<border>{}</border>", text)
    }

    fn code_language(&self, text: &str) -> String {
        format!("<lang>{}</lang>", text)
    }
}
