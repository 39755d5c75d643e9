//! Notion block-object wire types.
//!
//! Serialize-only: this tool appends content and never reads pages back.
//! The schema is the Notion block object: a `type` discriminator plus a
//! payload keyed by that same type name, each payload carrying a
//! `rich_text` array of one text run.

use pagepress_blocks::{Block, HeadingLevel};
use serde::Serialize;

/// A Notion block object, as sent on the wire.
#[derive(Debug, Clone, Serialize)]
pub struct BlockObject {
    /// Object kind discriminator, always `"block"`.
    object: &'static str,
    #[serde(flatten)]
    payload: BlockPayload,
}

/// Body of a `PATCH .../blocks/{page_id}/children` request.
#[derive(Debug, Serialize)]
pub struct AppendChildrenRequest<'a> {
    /// Blocks to append, in order.
    pub children: &'a [BlockObject],
}

/// Typed block payload, tagged by the Notion block type.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum BlockPayload {
    Paragraph {
        paragraph: RichTextBody,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: RichTextBody,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: RichTextBody,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: RichTextBody,
    },
    BulletedListItem {
        bulleted_list_item: RichTextBody,
    },
    Code {
        code: CodeBody,
    },
}

/// Payload of text-bearing block types.
#[derive(Debug, Clone, Serialize)]
struct RichTextBody {
    rich_text: Vec<RichText>,
}

/// Payload of the `code` block type.
#[derive(Debug, Clone, Serialize)]
struct CodeBody {
    rich_text: Vec<RichText>,
    language: String,
}

/// One rich-text run.
#[derive(Debug, Clone, Serialize)]
struct RichText {
    #[serde(rename = "type")]
    run_type: &'static str,
    text: TextContent,
}

/// Literal text content of a run.
#[derive(Debug, Clone, Serialize)]
struct TextContent {
    content: String,
}

impl RichTextBody {
    /// Single text run wrapping the given content.
    fn new(content: &str) -> Self {
        Self {
            rich_text: vec![RichText {
                run_type: "text",
                text: TextContent {
                    content: content.to_owned(),
                },
            }],
        }
    }
}

impl From<&Block> for BlockObject {
    fn from(block: &Block) -> Self {
        let payload = match block {
            Block::Heading { level, text } => {
                let body = RichTextBody::new(text);
                match level {
                    HeadingLevel::H1 => BlockPayload::Heading1 { heading_1: body },
                    HeadingLevel::H2 => BlockPayload::Heading2 { heading_2: body },
                    HeadingLevel::H3 => BlockPayload::Heading3 { heading_3: body },
                }
            }
            Block::Paragraph { text } => BlockPayload::Paragraph {
                paragraph: RichTextBody::new(text),
            },
            Block::BulletItem { text } => BlockPayload::BulletedListItem {
                bulleted_list_item: RichTextBody::new(text),
            },
            Block::CodeBlock { text, language } => BlockPayload::Code {
                code: CodeBody {
                    rich_text: RichTextBody::new(text).rich_text,
                    language: language.clone(),
                },
            },
        };
        Self {
            object: "block",
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn to_json(block: &Block) -> serde_json::Value {
        serde_json::to_value(BlockObject::from(block)).expect("serialize block")
    }

    #[test]
    fn test_paragraph_wire_shape() {
        assert_eq!(
            to_json(&Block::paragraph("hello")),
            json!({
                "object": "block",
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [{"type": "text", "text": {"content": "hello"}}]
                }
            })
        );
    }

    #[test]
    fn test_heading_wire_shapes() {
        for (level, tag) in [
            (HeadingLevel::H1, "heading_1"),
            (HeadingLevel::H2, "heading_2"),
            (HeadingLevel::H3, "heading_3"),
        ] {
            assert_eq!(
                to_json(&Block::heading(level, "Title")),
                json!({
                    "object": "block",
                    "type": tag,
                    tag: {
                        "rich_text": [{"type": "text", "text": {"content": "Title"}}]
                    }
                })
            );
        }
    }

    #[test]
    fn test_bullet_wire_shape() {
        assert_eq!(
            to_json(&Block::bullet_item("item")),
            json!({
                "object": "block",
                "type": "bulleted_list_item",
                "bulleted_list_item": {
                    "rich_text": [{"type": "text", "text": {"content": "item"}}]
                }
            })
        );
    }

    #[test]
    fn test_code_wire_shape_carries_language() {
        assert_eq!(
            to_json(&Block::code_block("print(1)", "py")),
            json!({
                "object": "block",
                "type": "code",
                "code": {
                    "rich_text": [{"type": "text", "text": {"content": "print(1)"}}],
                    "language": "py"
                }
            })
        );
    }

    #[test]
    fn test_append_children_request_shape() {
        let children: Vec<BlockObject> = [Block::paragraph("a"), Block::paragraph("b")]
            .iter()
            .map(BlockObject::from)
            .collect();
        let value =
            serde_json::to_value(AppendChildrenRequest {
                children: &children,
            })
            .expect("serialize request");
        assert_eq!(value["children"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["children"][0]["type"], "paragraph");
    }
}
