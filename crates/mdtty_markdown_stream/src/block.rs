//! Block model produced by the detector and consumed by the renderer.

use strum_macros::{Display, IntoStaticStr};

/// Kind of list item a line introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ListType {
    /// `- item` or `* item`
    Bullet,
    /// `1. item`
    Ordered,
}

/// A fully recognized markdown construct.
///
/// Every variant keeps the verbatim source text in `raw` next to the parsed
/// fields. Code blocks include their fence lines in `raw`, joined with `\n`.
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum MarkdownBlock {
    Heading {
        level: u8,
        content: String,
        raw: String,
    },
    CodeBlock {
        content: String,
        language: Option<String>,
        raw: String,
    },
    List {
        list_type: ListType,
        content: String,
        raw: String,
    },
    Blockquote {
        content: String,
        raw: String,
    },
    HorizontalRule {
        raw: String,
    },
    Paragraph {
        content: String,
        raw: String,
    },
}

impl MarkdownBlock {
    /// Source text that produced this block.
    pub fn raw(&self) -> &str {
        match self {
            Self::Heading { raw, .. }
            | Self::CodeBlock { raw, .. }
            | Self::List { raw, .. }
            | Self::Blockquote { raw, .. }
            | Self::HorizontalRule { raw }
            | Self::Paragraph { raw, .. } => raw,
        }
    }

    /// Parsed content. Horizontal rules have none.
    pub fn content(&self) -> &str {
        match self {
            Self::Heading { content, .. }
            | Self::CodeBlock { content, .. }
            | Self::List { content, .. }
            | Self::Blockquote { content, .. }
            | Self::Paragraph { content, .. } => content,
            Self::HorizontalRule { .. } => "",
        }
    }

    /// Short variant name, used in logs.
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Creates a paragraph whose content and raw text are the same line.
    pub fn paragraph(line: impl Into<String>) -> Self {
        let line = line.into();
        Self::Paragraph { content: line.clone(), raw: line }
    }
}
