//! Document renderer: converts a serialized document tree into HTML.
//!
//! The content field holds either editor JSON (a `doc` root node) or legacy
//! HTML/plain text. This module is the sole consumer responsible for telling
//! the two apart. Legacy content passes through unchanged; the caller owns
//! sanitizing it before display. Structured content is rendered node by node
//! with every piece of user text and every attribute value HTML-escaped.
//!
//! Malformed structured content never errors: the renderer degrades to
//! returning the trimmed original string so legacy or corrupted rows still
//! display something.

mod html;

pub use html::escape_html;

use crate::domain::{Node, NodeKind};

/// Render a content field to HTML.
///
/// Returns the empty string for empty/missing content, pass-through for
/// anything not classified as structured, and rendered HTML otherwise.
pub fn render_content(content: Option<&str>) -> String {
    let Some(content) = content else {
        return String::new();
    };
    if content.is_empty() {
        return String::new();
    }

    let trimmed = content.trim();
    if !is_likely_structured(trimmed) {
        return trimmed.to_string();
    }

    let doc: Node = match serde_json::from_str(trimmed) {
        Ok(doc) => doc,
        Err(err) => {
            tracing::debug!(error = %err, "content looked structured but failed to parse; passing through");
            return trimmed.to_string();
        }
    };

    if doc.kind() != NodeKind::Doc {
        return trimmed.to_string();
    }

    let mut out = String::new();
    for node in &doc.content {
        html::render_node(node, &mut out);
    }

    // A doc with no renderable blocks degrades to the raw string.
    if out.is_empty() {
        return trimmed.to_string();
    }
    out
}

/// Classify a content string as likely editor JSON: after trimming it starts
/// with `{` and mentions a `type` key.
pub fn is_likely_structured(content: &str) -> bool {
    let trimmed = content.trim();
    trimmed.starts_with('{') && (trimmed.contains("\"type\"") || trimmed.contains("'type'"))
}
