//! Incremental block detector.

use tracing::{debug, trace};

use crate::block::MarkdownBlock;
use crate::pattern::{self, strip_cr};

/// Result of feeding one chunk to the detector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectorOutput<'a> {
    /// Blocks completed by this chunk, in source order.
    pub blocks: Vec<MarkdownBlock>,
    /// Text after the last newline, still held by the detector.
    pub incomplete: &'a str,
}

/// A code fence that has been opened but not closed yet.
#[derive(Debug)]
struct OpenFence {
    language: String,
    /// Source lines belonging to the block, fence opener included.
    raw: Vec<String>,
    body: Vec<String>,
    body_bytes: usize,
}

impl OpenFence {
    fn new(opener: &str, language: &str) -> Self {
        Self {
            language: language.to_string(),
            raw: vec![opener.to_string()],
            body: Vec::new(),
            body_bytes: 0,
        }
    }

    fn push(&mut self, line: &str) {
        self.raw.push(line.to_string());
        self.body.push(line.to_string());
        self.body_bytes += line.len() + 1;
    }

    /// Drains the accumulated body into a block, leaving the fence open with
    /// an empty body.
    fn take_block(&mut self, closer: Option<&str>) -> MarkdownBlock {
        let mut raw = std::mem::take(&mut self.raw);
        if let Some(closer) = closer {
            raw.push(closer.to_string());
        }
        let content = std::mem::take(&mut self.body).join("\n");
        self.body_bytes = 0;
        MarkdownBlock::CodeBlock {
            content,
            language: (!self.language.is_empty()).then(|| self.language.clone()),
            raw: raw.join("\n"),
        }
    }
}

/// Stateful parser turning an arbitrarily chunked stream into blocks.
///
/// One detector belongs to one logical stream. It keeps the unterminated
/// trailing line and any open code fence between calls to
/// [`process`](Self::process).
#[derive(Debug, Default)]
pub struct BlockDetector {
    pending: String,
    fence: Option<OpenFence>,
    max_fence_bytes: Option<usize>,
}

impl BlockDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits an open fence's body early once it grows past `limit` bytes.
    /// The fence stays open and keeps its language.
    pub fn with_max_fence_bytes(mut self, limit: usize) -> Self {
        self.max_fence_bytes = Some(limit);
        self
    }

    /// True while a partial line or an open fence is buffered.
    pub fn is_buffering(&self) -> bool {
        !self.pending.is_empty() || self.fence.is_some()
    }

    /// Feeds a chunk and returns every block it completed.
    ///
    /// Only the new bytes are searched for line breaks, so a long line fed in
    /// many small chunks costs time linear in its length.
    pub fn process(&mut self, chunk: &str) -> DetectorOutput<'_> {
        // Everything already pending was searched and holds no newline.
        let mut search = self.pending.len();
        self.pending.push_str(chunk);
        let mut buffer = std::mem::take(&mut self.pending);

        let mut blocks = Vec::new();
        let mut start = 0;
        while let Some(offset) = buffer[search..].find('\n') {
            let end = search + offset;
            if let Some(block) = self.classify(strip_cr(&buffer[start..end])) {
                blocks.push(block);
            }
            start = end + 1;
            search = start;
        }

        buffer.drain(..start);
        self.pending = buffer;
        DetectorOutput { blocks, incomplete: &self.pending }
    }

    /// Emits whatever is still buffered and returns to the empty state.
    ///
    /// An open fence becomes a code block even without its closing fence;
    /// otherwise a non-empty partial line becomes a paragraph.
    pub fn flush(&mut self) -> Vec<MarkdownBlock> {
        let pending = std::mem::take(&mut self.pending);
        let line = strip_cr(&pending);

        let block = match self.fence.take() {
            Some(mut fence) => {
                let closer = pattern::fence_close(line).then_some(line);
                if closer.is_none() && !line.is_empty() {
                    fence.push(line);
                }
                Some(fence.take_block(closer))
            }
            None if !line.trim().is_empty() => Some(MarkdownBlock::paragraph(line)),
            None => None,
        };

        if let Some(block) = &block {
            debug!(kind = block.kind(), "Flushed buffered block");
        }
        block.into_iter().collect()
    }

    /// Drops the partial line and any open fence without emitting blocks.
    pub fn reset(&mut self) {
        if self.is_buffering() {
            debug!(
                pending_bytes = self.pending.len(),
                open_fence = self.fence.is_some(),
                "Discarding detector state"
            );
        }
        self.pending.clear();
        self.fence = None;
    }

    fn classify(&mut self, line: &str) -> Option<MarkdownBlock> {
        if let Some(fence) = self.fence.as_mut() {
            if pattern::fence_close(line) {
                let block = fence.take_block(Some(line));
                self.fence = None;
                debug!(bytes = block.content().len(), "Closed code fence");
                return Some(block);
            }
            fence.push(line);
            if self.max_fence_bytes.is_some_and(|limit| fence.body_bytes > limit) {
                debug!(bytes = fence.body_bytes, "Code fence exceeded limit, emitting early");
                return Some(fence.take_block(None));
            }
            return None;
        }

        if let Some(language) = pattern::fence_open(line) {
            debug!(language, "Opened code fence");
            self.fence = Some(OpenFence::new(line, language));
            return None;
        }

        let block = classify_line(line)?;
        trace!(kind = block.kind(), "Classified line");
        Some(block)
    }
}

/// Classifies a line outside any fence. Blank lines yield nothing.
fn classify_line(line: &str) -> Option<MarkdownBlock> {
    if line.trim().is_empty() {
        return None;
    }
    let raw = line.to_string();

    let block = if let Some((level, content)) = pattern::heading(line) {
        MarkdownBlock::Heading { level, content: content.to_string(), raw }
    } else if let Some((list_type, content)) = pattern::list_item(line) {
        MarkdownBlock::List { list_type, content: content.to_string(), raw }
    } else if let Some(content) = pattern::blockquote(line) {
        MarkdownBlock::Blockquote { content: content.to_string(), raw }
    } else if pattern::horizontal_rule(line) {
        MarkdownBlock::HorizontalRule { raw }
    } else {
        MarkdownBlock::paragraph(raw)
    };
    Some(block)
}
