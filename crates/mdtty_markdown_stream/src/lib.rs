//! Mdtty Markdown Stream - block-level markdown rendering for process output.
//!
//! Output from a child process arrives in arbitrary chunks. This crate finds
//! complete markdown blocks in that stream (headings, fenced code, list
//! items, quotes, rules) and turns them into ANSI-styled text, passing
//! everything else through untouched.
//!
//! # Example
//!
//! ```
//! use mdtty_markdown_stream::{StreamAdapter, StreamMode};
//!
//! let mut adapter = StreamAdapter::new(StreamMode::Ansi);
//!
//! // Ordinary output is returned as-is
//! assert_eq!(adapter.process_data("Compiling...\n"), "Compiling...\n");
//!
//! // Completed blocks come back rendered
//! let rendered = adapter.process_data("## Summary\n");
//! assert!(rendered.contains("Summary"));
//!
//! // Recover anything still buffered at end of stream
//! let _ = adapter.finish();
//! ```

mod adapter;
mod block;
mod code;
mod detector;
mod heading;
mod pattern;
mod prefilter;
mod renderer;
mod style;
mod theme;

pub use adapter::{StreamAdapter, StreamMode};
pub use block::{ListType, MarkdownBlock};
pub use detector::{BlockDetector, DetectorOutput};
pub use prefilter::likely_contains_markdown;
pub use renderer::{RenderOptions, render_blocks};
pub use theme::{Color, Style};
