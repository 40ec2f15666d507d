/// Trait for styling heading text by level.
pub(crate) trait HeadingStyler {
    fn h1(&self, text: &str) -> String;
    fn h2(&self, text: &str) -> String;
    fn h3(&self, text: &str) -> String;
    fn h4(&self, text: &str) -> String;
    fn h5(&self, text: &str) -> String;
    fn h6(&self, text: &str) -> String;
}

/// Trait for styling list markers.
pub(crate) trait ListStyler {
    fn bullet(&self, glyph: &str) -> String;
    fn number(&self, glyph: &str) -> String;
}

/// Trait for styling quotes, rules and code boxes.
pub(crate) trait BlockStyler {
    fn quote(&self, text: &str) -> String;
    fn rule(&self, text: &str) -> String;
    fn code_border(&self, text: &str) -> String;
    fn code_language(&self, text: &str) -> String;
}

/// Everything the block renderer needs.
pub(crate) trait Styler: HeadingStyler + ListStyler + BlockStyler {}

impl<S: HeadingStyler + ListStyler + BlockStyler> Styler for S {}
