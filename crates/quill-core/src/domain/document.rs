//! The document tree: the structured rich-text representation produced by
//! the editing surface, serialized as JSON into the content field.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node in the document tree.
///
/// A `doc`-typed root carries an ordered sequence of block nodes in
/// `content`. Text nodes carry `text` and optional `marks`, never children.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub node_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attrs: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

/// An inline formatting annotation attached to a text node.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub mark_type: String,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attrs: Map<String, Value>,
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        NodeKind::from_tag(&self.node_type)
    }

    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }

    pub fn attr_i64(&self, key: &str) -> Option<i64> {
        self.attrs.get(key).and_then(Value::as_i64)
    }

    pub fn attr_bool(&self, key: &str) -> Option<bool> {
        self.attrs.get(key).and_then(Value::as_bool)
    }
}

impl Mark {
    pub fn kind(&self) -> MarkKind {
        MarkKind::from_tag(&self.mark_type)
    }

    pub fn attr_str(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).and_then(Value::as_str)
    }
}

/// The closed set of node kinds the renderer understands.
///
/// Unknown tags map to `Other`, which renders its children and drops the
/// node itself so newer editor extensions degrade gracefully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Doc,
    Text,
    Paragraph,
    Heading,
    Blockquote,
    BulletList,
    OrderedList,
    ListItem,
    CodeBlock,
    HorizontalRule,
    HardBreak,
    Image,
    TaskList,
    TaskItem,
    Other,
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "doc" => Self::Doc,
            "text" => Self::Text,
            "paragraph" => Self::Paragraph,
            "heading" => Self::Heading,
            "blockquote" => Self::Blockquote,
            "bulletList" => Self::BulletList,
            "orderedList" => Self::OrderedList,
            "listItem" => Self::ListItem,
            "codeBlock" => Self::CodeBlock,
            "horizontalRule" => Self::HorizontalRule,
            "hardBreak" => Self::HardBreak,
            "image" => Self::Image,
            "taskList" => Self::TaskList,
            "taskItem" => Self::TaskItem,
            _ => Self::Other,
        }
    }
}

/// The closed set of mark kinds. Unrecognized marks leave the text
/// unwrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkKind {
    Bold,
    Italic,
    Underline,
    Strike,
    Code,
    Link,
    TextStyle,
    Highlight,
    Other,
}

impl MarkKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "bold" => Self::Bold,
            "italic" => Self::Italic,
            "underline" => Self::Underline,
            "strike" => Self::Strike,
            "code" => Self::Code,
            "link" => Self::Link,
            "textStyle" => Self::TextStyle,
            "highlight" => Self::Highlight,
            _ => Self::Other,
        }
    }
}
