//! Line-oriented markdown scanner.
//!
//! Single forward pass over the input. Outside a fence, each line is
//! classified by an ordered rule list; inside a fence, lines accumulate
//! raw until the closing delimiter.

use std::sync::LazyLock;

use regex::Regex;

use crate::block::{Block, HeadingLevel};
use crate::fence::{FENCE_MARKER, FenceBuffer};

/// Numbered list item marker: an integer followed by `.` and whitespace.
static NUMBERED_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s(.*)$").expect("invalid numbered item regex"));

/// A line classification rule. Returns `None` when the rule does not apply.
type Rule = fn(&str) -> Option<Block>;

/// Classification rules outside a fence, in priority order.
///
/// Headings before bullets before numbered items; the paragraph rule is
/// last and also absorbs the skip cases (blank lines, horizontal rules).
const RULES: &[Rule] = &[heading, bullet, numbered_item, paragraph];

/// Scan markdown source into an ordered sequence of blocks.
///
/// Total and pure: never fails, performs no I/O, and malformed input
/// degrades to paragraphs or is skipped. An unterminated fence at
/// end-of-input drops its accumulated lines, matching the behavior of the
/// tool this replaces.
#[must_use]
pub fn scan(markdown: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut fence: Option<FenceBuffer> = None;

    for line in markdown.lines() {
        if let Some(annotation) = line.strip_prefix(FENCE_MARKER) {
            match fence.take() {
                // Closing delimiter: flush the fence. Any text after the
                // closing backticks is ignored.
                Some(open) => blocks.extend(open.close()),
                None => fence = Some(FenceBuffer::open(annotation)),
            }
            continue;
        }

        if let Some(open) = fence.as_mut() {
            open.push(line);
            continue;
        }

        if let Some(block) = classify(line) {
            blocks.push(block);
        }
    }

    blocks
}

/// Apply the rule list to a line outside any fence.
fn classify(line: &str) -> Option<Block> {
    RULES.iter().find_map(|rule| rule(line))
}

/// `### ` / `## ` / `# ` headings, most specific first.
fn heading(line: &str) -> Option<Block> {
    const MARKERS: [(&str, HeadingLevel); 3] = [
        ("### ", HeadingLevel::H3),
        ("## ", HeadingLevel::H2),
        ("# ", HeadingLevel::H1),
    ];
    MARKERS.iter().find_map(|(marker, level)| {
        line.strip_prefix(marker)
            .map(|rest| Block::heading(*level, rest.trim()))
    })
}

/// `- ` or `* ` bullet items.
fn bullet(line: &str) -> Option<Block> {
    ["- ", "* "].iter().find_map(|marker| {
        line.strip_prefix(marker)
            .map(|rest| Block::bullet_item(rest.trim()))
    })
}

/// Numbered list items, downgraded to plain bullets.
///
/// The ordinal is discarded; Notion renumbers list items itself.
fn numbered_item(line: &str) -> Option<Block> {
    NUMBERED_ITEM
        .captures(line)
        .map(|caps| Block::bullet_item(caps[1].trim()))
}

/// Fallback: non-blank, non-horizontal-rule lines become paragraphs.
fn paragraph(line: &str) -> Option<Block> {
    let trimmed = line.trim();
    if trimmed.is_empty() || line.starts_with("---") {
        None
    } else {
        Some(Block::paragraph(trimmed))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::block::MAX_TEXT_LEN;

    #[test]
    fn test_single_heading() {
        assert_eq!(
            scan("# Title"),
            vec![Block::heading(HeadingLevel::H1, "Title")]
        );
    }

    #[test]
    fn test_heading_levels_in_order() {
        assert_eq!(
            scan("## Sub\n### SubSub"),
            vec![
                Block::heading(HeadingLevel::H2, "Sub"),
                Block::heading(HeadingLevel::H3, "SubSub"),
            ]
        );
    }

    #[test]
    fn test_heading_text_trimmed() {
        assert_eq!(
            scan("#   spaced   "),
            vec![Block::heading(HeadingLevel::H1, "spaced")]
        );
    }

    #[test]
    fn test_heading_without_space_is_paragraph() {
        assert_eq!(scan("#hashtag"), vec![Block::paragraph("#hashtag")]);
    }

    #[test]
    fn test_bullet_markers() {
        assert_eq!(
            scan("- a\n* b\n1. c"),
            vec![
                Block::bullet_item("a"),
                Block::bullet_item("b"),
                Block::bullet_item("c"),
            ]
        );
    }

    #[test]
    fn test_numbered_item_ordinal_discarded() {
        assert_eq!(
            scan("12. twelfth item"),
            vec![Block::bullet_item("twelfth item")]
        );
    }

    #[test]
    fn test_numbered_marker_requires_space() {
        assert_eq!(scan("1.no space"), vec![Block::paragraph("1.no space")]);
    }

    #[test]
    fn test_fence_round_trip() {
        assert_eq!(
            scan("```py\nprint(1)\n```"),
            vec![Block::code_block("print(1)", "py")]
        );
    }

    #[test]
    fn test_fence_without_language_defaults() {
        assert_eq!(
            scan("```\necho hi\n```"),
            vec![Block::code_block("echo hi", "bash")]
        );
    }

    #[test]
    fn test_fence_preserves_raw_lines() {
        assert_eq!(
            scan("```rust\n    indented();\n\nlast();\n```"),
            vec![Block::code_block("    indented();\n\nlast();", "rust")]
        );
    }

    #[test]
    fn test_markers_inside_fence_are_literal() {
        assert_eq!(
            scan("```md\n# not a heading\n- not a bullet\n```"),
            vec![Block::code_block("# not a heading\n- not a bullet", "md")]
        );
    }

    #[test]
    fn test_unterminated_fence_drops_content() {
        assert_eq!(scan("```py\nprint(1)"), vec![]);
    }

    #[test]
    fn test_empty_fence_emits_nothing() {
        assert_eq!(scan("```\n```"), vec![]);
    }

    #[test]
    fn test_blank_and_rule_lines_skipped() {
        assert_eq!(
            scan("a\n\n---\n\nb"),
            vec![Block::paragraph("a"), Block::paragraph("b")]
        );
    }

    #[test]
    fn test_paragraph_trimmed() {
        assert_eq!(scan("   padded   "), vec![Block::paragraph("padded")]);
    }

    #[test]
    fn test_long_line_truncated() {
        let long = "x".repeat(3000);
        let blocks = scan(&long);
        let [Block::Paragraph { text }] = blocks.as_slice() else {
            panic!("expected one paragraph");
        };
        assert_eq!(text.len(), MAX_TEXT_LEN);
    }

    #[test]
    fn test_output_length_matches_content_lines() {
        let input = "# h\n\nline one\n- item\n---\nline two\n\n";
        // Non-blank, non-rule lines: "# h", "line one", "- item", "line two".
        assert_eq!(scan(input).len(), 4);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let input = "# T\n\ntext\n```rs\nlet x = 1;\n```\n- b\n1. c\n";
        assert_eq!(scan(input), scan(input));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(scan(""), vec![]);
    }

    #[test]
    fn test_source_order_preserved() {
        let input = "# A\npara\n- bullet\n```sh\nls\n```\n## B";
        assert_eq!(
            scan(input),
            vec![
                Block::heading(HeadingLevel::H1, "A"),
                Block::paragraph("para"),
                Block::bullet_item("bullet"),
                Block::code_block("ls", "sh"),
                Block::heading(HeadingLevel::H2, "B"),
            ]
        );
    }

    #[test]
    fn test_consecutive_fences() {
        assert_eq!(
            scan("```a\none\n```\n```b\ntwo\n```"),
            vec![Block::code_block("one", "a"), Block::code_block("two", "b")]
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            scan("# Title\r\n- item\r\n"),
            vec![
                Block::heading(HeadingLevel::H1, "Title"),
                Block::bullet_item("item"),
            ]
        );
    }
}
