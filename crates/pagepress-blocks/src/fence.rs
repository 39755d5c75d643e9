//! Fenced code block state.
//!
//! Tracks the single piece of scan state: whether the current line sits
//! inside a fenced code region, and what has accumulated there.

use crate::block::{Block, DEFAULT_LANGUAGE};

/// An open code fence accumulating raw lines.
///
/// The scanner holds `Option<FenceBuffer>`; `Some` means inside a fence.
/// Delimiters are lines starting with three backticks. Tilde fences and
/// indented fences are not recognized, matching the upload tool this
/// replaces.
#[derive(Debug)]
pub(crate) struct FenceBuffer {
    /// Language tag captured from the opening delimiter.
    language: String,
    /// Raw (untrimmed) lines collected so far.
    lines: Vec<String>,
}

/// Fence delimiter prefix.
pub(crate) const FENCE_MARKER: &str = "```";

impl FenceBuffer {
    /// Open a fence from the remainder of the delimiter line.
    ///
    /// The remainder, trimmed, becomes the language tag; if empty, the
    /// default tag is used.
    pub(crate) fn open(annotation: &str) -> Self {
        let trimmed = annotation.trim();
        let language = if trimmed.is_empty() {
            DEFAULT_LANGUAGE.to_owned()
        } else {
            trimmed.to_owned()
        };
        Self {
            language,
            lines: Vec::new(),
        }
    }

    /// Append one raw line of fence content.
    pub(crate) fn push(&mut self, line: &str) {
        self.lines.push(line.to_owned());
    }

    /// Close the fence, producing a code block if any content accumulated.
    ///
    /// An empty fence (open immediately followed by close) emits nothing.
    pub(crate) fn close(self) -> Option<Block> {
        if self.lines.is_empty() {
            None
        } else {
            Some(Block::code_block(&self.lines.join("\n"), &self.language))
        }
    }
}
