//! Markdown block scanner.
//!
//! Converts markdown source text into an ordered sequence of [`Block`]
//! records suitable for upload to Notion. The scanner is a deliberate
//! best-effort line scanner, not a `CommonMark` parser: it recognizes the
//! handful of constructs Notion pages need (headings, bullets, fenced code)
//! and degrades everything else to plain paragraphs.

mod block;
mod fence;
mod scanner;

pub use block::{Block, DEFAULT_LANGUAGE, HeadingLevel, MAX_TEXT_LEN};
pub use scanner::scan;
