//! Block renderer: turns detected blocks into escape-coded text.

use derive_setters::Setters;

use crate::block::{ListType, MarkdownBlock};
use crate::code::render_code_block;
use crate::heading::render_heading;
use crate::style::Styler;
use crate::theme::Theme;

const BULLET_GLYPH: &str = "•";
const ORDERED_GLYPH: &str = "→";
const QUOTE_GLYPH: &str = "│";
const RULE_GLYPH: &str = "─";

/// Layout options for a single render call.
#[derive(Debug, Clone, PartialEq, Eq, Setters)]
pub struct RenderOptions {
    /// Show the language tag in a code block's top border.
    pub show_language: bool,
    /// Terminal width in columns; code boxes and rules span it.
    pub term_width: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { show_language: true, term_width: 80 }
    }
}

/// Render blocks with the fixed ANSI theme, one rendering per block joined
/// with `\n`. An empty slice renders to an empty string.
pub fn render_blocks(blocks: &[MarkdownBlock], options: &RenderOptions) -> String {
    render_blocks_with(blocks, options, &Theme::default())
}

pub(crate) fn render_blocks_with<S: Styler>(
    blocks: &[MarkdownBlock],
    options: &RenderOptions,
    styler: &S,
) -> String {
    blocks
        .iter()
        .map(|block| render_block(block, options, styler))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_block<S: Styler>(block: &MarkdownBlock, options: &RenderOptions, styler: &S) -> String {
    match block {
        MarkdownBlock::Heading { level, content, .. } => render_heading(*level, content, styler),
        MarkdownBlock::CodeBlock { content, language, .. } => {
            let language = language.as_deref().filter(|_| options.show_language);
            render_code_block(content, language, options.term_width, styler)
        }
        MarkdownBlock::List { list_type: ListType::Bullet, content, .. } => {
            format!("{} {}", styler.bullet(BULLET_GLYPH), content)
        }
        MarkdownBlock::List { list_type: ListType::Ordered, content, .. } => {
            format!("{} {}", styler.number(ORDERED_GLYPH), content)
        }
        MarkdownBlock::Blockquote { content, .. } => {
            format!("{} {}", QUOTE_GLYPH, styler.quote(content))
        }
        MarkdownBlock::HorizontalRule { .. } => {
            styler.rule(&RULE_GLYPH.repeat(options.term_width))
        }
        MarkdownBlock::Paragraph { content, .. } => content.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::detector::BlockDetector;
    use crate::theme::TagStyler;

    fn render(markdown: &str, options: &RenderOptions) -> String {
        let mut detector = BlockDetector::new();
        let mut blocks = detector.process(markdown).blocks;
        blocks.extend(detector.flush());
        render_blocks_with(&blocks, options, &TagStyler)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_blocks(&[], &RenderOptions::default()), "");
    }

    #[test]
    fn test_paragraph_is_byte_for_byte() {
        let fixture = MarkdownBlock::paragraph("  plain [text] with *stars* and \t tabs");
        let actual = render_blocks(std::slice::from_ref(&fixture), &RenderOptions::default());
        assert_eq!(actual, fixture.content());
        assert!(!actual.contains('\x1b'));
    }

    #[test]
    fn test_mixed_document() {
        let fixture = "# Build\n- compile\n- link\n1. first\n> note\n---\ndone\n";
        let actual = render(fixture, &RenderOptions::default().term_width(10_usize));
        insta::assert_snapshot!(actual, @r"
        █ <h1>Build</h1>
        <bullet>•</bullet> compile
        <bullet>•</bullet> link
        <num>→</num> first
        │ <i>note</i>
        <dim>──────────</dim>
        done
        ");
    }

    #[test]
    fn test_code_block_language_toggle() {
        let fixture = "```sh\nls -la\n```\n";
        let options = RenderOptions::default().term_width(12_usize);

        let actual = render(fixture, &options);
        insta::assert_snapshot!(actual, @r"
        <border>┌─</border><lang> sh </lang><border>──────</border>
        <border>│</border> ls -la
        <border>└───────────</border>
        ");

        let actual = render(fixture, &options.show_language(false));
        insta::assert_snapshot!(actual, @r"
        <border>┌───────────</border>
        <border>│</border> ls -la
        <border>└───────────</border>
        ");
    }

    #[test]
    fn test_rule_grows_with_width() {
        colored::control::set_override(true);
        let fixture = [MarkdownBlock::HorizontalRule { raw: "---".into() }];
        let narrow = render_blocks(&fixture, &RenderOptions::default().term_width(40_usize));
        let wide = render_blocks(&fixture, &RenderOptions::default().term_width(80_usize));

        assert!(wide.len() > narrow.len());
        assert_eq!(strip_ansi_escapes::strip_str(&narrow).chars().count(), 40);
        assert_eq!(strip_ansi_escapes::strip_str(&wide).chars().count(), 80);
        assert_eq!(narrow, format!("\x1b[2m{}\x1b[0m", "─".repeat(40)));
    }

    #[test]
    fn test_ansi_list_and_quote() {
        colored::control::set_override(true);
        let fixture = [
            MarkdownBlock::List {
                list_type: ListType::Bullet,
                content: "A".into(),
                raw: "- A".into(),
            },
            MarkdownBlock::List {
                list_type: ListType::Ordered,
                content: "B".into(),
                raw: "2. B".into(),
            },
            MarkdownBlock::Blockquote { content: "C".into(), raw: "> C".into() },
        ];
        let actual = render_blocks(&fixture, &RenderOptions::default());
        let expected = "\x1b[32m•\x1b[0m A\n\x1b[94m→\x1b[0m B\n│ \x1b[3mC\x1b[0m";
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_every_variant_renders() {
        let fixture = "# h\n```\nc\n```\n- l\n1. o\n> q\n***\np\n";
        let mut detector = BlockDetector::new();
        let blocks = detector.process(fixture).blocks;
        assert_eq!(blocks.len(), 7);
        for block in &blocks {
            let actual = render_blocks(std::slice::from_ref(block), &RenderOptions::default());
            assert!(!actual.is_empty(), "{} rendered empty", block.kind());
        }
    }
}
