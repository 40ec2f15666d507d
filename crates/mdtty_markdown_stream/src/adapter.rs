//! Stream adapter: the seam between a process's output and the display.

use std::borrow::Cow;

use strum_macros::{Display, EnumString};
use tracing::debug;

use crate::detector::BlockDetector;
use crate::prefilter::likely_contains_markdown;
use crate::renderer::{RenderOptions, render_blocks};

/// How the adapter treats incoming output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StreamMode {
    /// Pass everything through untouched.
    Off,
    /// Render completed blocks inline as ANSI text.
    #[default]
    Ansi,
    /// Reserved for rendering outside the text stream; passes through.
    Overlay,
}

/// Routes chunks through the pre-filter, detector and renderer.
///
/// Output that yields no completed block is returned unchanged, so partial
/// constructs are never shown half-rendered.
#[derive(Debug)]
pub struct StreamAdapter {
    mode: StreamMode,
    detector: BlockDetector,
    options: RenderOptions,
    /// Some of the text the detector still holds never reached the display.
    held_back: bool,
}

impl Default for StreamAdapter {
    fn default() -> Self {
        Self::new(StreamMode::default())
    }
}

impl StreamAdapter {
    pub fn new(mode: StreamMode) -> Self {
        Self {
            mode,
            detector: BlockDetector::new(),
            options: RenderOptions::default(),
            held_back: false,
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_detector(mut self, detector: BlockDetector) -> Self {
        self.detector = detector;
        self
    }

    pub fn mode(&self) -> StreamMode {
        self.mode
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Processes one chunk of output and returns the text to display.
    ///
    /// When blocks complete, the result is their rendering followed by a
    /// newline; text after the last completed line stays buffered and shows up
    /// once its line completes.
    pub fn process_data<'a>(&mut self, data: &'a str) -> Cow<'a, str> {
        if self.mode != StreamMode::Ansi {
            return Cow::Borrowed(data);
        }

        // A buffered fence body rarely contains markers of its own, so keep
        // feeding the detector until it is drained.
        if !self.detector.is_buffering() && !likely_contains_markdown(data) {
            return Cow::Borrowed(data);
        }

        let blocks = self.detector.process(data).blocks;
        if blocks.is_empty() {
            // Shown raw; anything held back earlier is still owed.
            return Cow::Borrowed(data);
        }

        // Whatever the detector kept came from this chunk and was replaced by
        // the rendering, so none of it has been displayed.
        self.held_back = self.detector.is_buffering();
        let mut rendered = render_blocks(&blocks, &self.options);
        rendered.push('\n');
        Cow::Owned(rendered)
    }

    /// Switches mode. Entering `off` drains the detector first so nothing is
    /// left half-buffered when rendering resumes.
    ///
    /// Returns the rendering of drained text that was held back and never
    /// displayed; the caller should write it before any later output.
    pub fn set_mode(&mut self, mode: StreamMode) -> String {
        if mode == self.mode {
            return String::new();
        }
        let owed = if mode == StreamMode::Off { self.drain() } else { String::new() };
        debug!(from = %self.mode, to = %mode, "Switching stream mode");
        self.mode = mode;
        owed
    }

    /// Discards buffered state, e.g. when the session reconnects.
    pub fn reset(&mut self) {
        self.detector.reset();
        self.held_back = false;
    }

    /// Updates the width used by later renders. Already emitted output is
    /// left alone.
    pub fn update_width(&mut self, cols: usize) {
        if cols != self.options.term_width {
            debug!(cols, "Terminal width changed");
            self.options.term_width = cols;
        }
    }

    /// Ends the stream, returning the rendering of whatever was still
    /// buffered. Nothing is returned when all of that text already went out
    /// raw or when rendering is not active.
    pub fn finish(&mut self) -> String {
        self.drain()
    }

    /// Flushes the detector and renders the result if any part of it was
    /// held back. A block that was only partly shown is rendered whole.
    fn drain(&mut self) -> String {
        let blocks = self.detector.flush();
        let held_back = std::mem::take(&mut self.held_back);
        debug!(blocks = blocks.len(), held_back, "Drained detector");
        if self.mode != StreamMode::Ansi || blocks.is_empty() || !held_back {
            return String::new();
        }
        let mut rendered = render_blocks(&blocks, &self.options);
        rendered.push('\n');
        rendered
    }
}
