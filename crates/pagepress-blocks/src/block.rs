//! Block data model.

/// Maximum length of a rich-text content string, in characters.
///
/// Imposed by the Notion API; longer text is silently cut off.
pub const MAX_TEXT_LEN: usize = 2000;

/// Language tag used when a code fence carries no annotation.
pub const DEFAULT_LANGUAGE: &str = "bash";

/// Heading depth supported by the target page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    /// `# ` heading.
    H1,
    /// `## ` heading.
    H2,
    /// `### ` heading.
    H3,
}

/// One structured content unit destined for the target page.
///
/// Blocks preserve source order and are never merged. All text fields are
/// truncated to [`MAX_TEXT_LEN`] characters on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Section heading.
    Heading {
        /// Heading depth.
        level: HeadingLevel,
        /// Heading text.
        text: String,
    },
    /// Plain text paragraph.
    Paragraph {
        /// Paragraph text.
        text: String,
    },
    /// Bulleted list item.
    BulletItem {
        /// Item text.
        text: String,
    },
    /// Fenced code block.
    CodeBlock {
        /// Code content, lines joined with `\n`.
        text: String,
        /// Language tag from the opening fence.
        language: String,
    },
}

impl Block {
    /// Create a heading block.
    #[must_use]
    pub fn heading(level: HeadingLevel, text: &str) -> Self {
        Self::Heading {
            level,
            text: truncate(text),
        }
    }

    /// Create a paragraph block.
    #[must_use]
    pub fn paragraph(text: &str) -> Self {
        Self::Paragraph {
            text: truncate(text),
        }
    }

    /// Create a bulleted list item block.
    #[must_use]
    pub fn bullet_item(text: &str) -> Self {
        Self::BulletItem {
            text: truncate(text),
        }
    }

    /// Create a code block.
    #[must_use]
    pub fn code_block(text: &str, language: &str) -> Self {
        Self::CodeBlock {
            text: truncate(text),
            language: language.to_owned(),
        }
    }
}

/// Cut text off at [`MAX_TEXT_LEN`] characters.
///
/// Counts characters rather than bytes so multi-byte content is never
/// split mid-codepoint. Lossy and silent.
fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_TEXT_LEN {
        text.to_owned()
    } else {
        text.chars().take(MAX_TEXT_LEN).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        let block = Block::paragraph("hello");
        assert_eq!(
            block,
            Block::Paragraph {
                text: "hello".to_owned()
            }
        );
    }

    #[test]
    fn test_long_text_truncated_to_limit() {
        let long = "x".repeat(3000);
        let Block::Paragraph { text } = Block::paragraph(&long) else {
            panic!("expected paragraph");
        };
        assert_eq!(text.len(), MAX_TEXT_LEN);
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        let long = "ü".repeat(2500);
        let Block::CodeBlock { text, .. } = Block::code_block(&long, "txt") else {
            panic!("expected code block");
        };
        assert_eq!(text.chars().count(), MAX_TEXT_LEN);
    }

    #[test]
    fn test_exact_limit_untouched() {
        let exact = "y".repeat(MAX_TEXT_LEN);
        let Block::BulletItem { text } = Block::bullet_item(&exact) else {
            panic!("expected bullet item");
        };
        assert_eq!(text, exact);
    }
}
