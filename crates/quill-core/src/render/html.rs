//! HTML emission for document tree nodes.

use std::fmt::Write;

use crate::domain::{Mark, MarkKind, Node, NodeKind};

/// Escape text for embedding in HTML content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render one node into `out`. Total over `NodeKind`; unknown kinds emit
/// their children without a wrapping tag.
pub fn render_node(node: &Node, out: &mut String) {
    match node.kind() {
        NodeKind::Text => {
            let text = node.text.as_deref().unwrap_or_default();
            render_marks(text, &node.marks, out);
        }

        NodeKind::Paragraph => wrap_children(node, "p", out),

        NodeKind::Heading => {
            let level = node.attr_i64("level").unwrap_or(1).clamp(1, 6);
            write!(out, "<h{level}>").unwrap();
            render_children(node, out);
            write!(out, "</h{level}>").unwrap();
        }

        NodeKind::Blockquote => wrap_children(node, "blockquote", out),
        NodeKind::BulletList => wrap_children(node, "ul", out),

        NodeKind::OrderedList => {
            let start = node.attr_i64("start").unwrap_or(1);
            if start == 1 {
                out.push_str("<ol>");
            } else {
                write!(out, r#"<ol start="{start}">"#).unwrap();
            }
            render_children(node, out);
            out.push_str("</ol>");
        }

        NodeKind::ListItem => wrap_children(node, "li", out),

        NodeKind::CodeBlock => {
            out.push_str("<pre><code>");
            render_children(node, out);
            out.push_str("</code></pre>");
        }

        NodeKind::HorizontalRule => out.push_str("<hr />"),
        NodeKind::HardBreak => out.push_str("<br />"),

        NodeKind::Image => {
            let src = node.attr_str("src").unwrap_or_default();
            if src.is_empty() {
                return;
            }
            let alt = node.attr_str("alt").unwrap_or_default();
            write!(
                out,
                r#"<img src="{}" alt="{}""#,
                escape_html(src),
                escape_html(alt)
            )
            .unwrap();
            if let Some(title) = node.attr_str("title").filter(|t| !t.is_empty()) {
                write!(out, r#" title="{}""#, escape_html(title))
                    .unwrap();
            }
            out.push_str(r#" loading="lazy" />"#);
        }

        NodeKind::TaskList => {
            out.push_str(r#"<ul data-type="taskList">"#);
            render_children(node, out);
            out.push_str("</ul>");
        }

        NodeKind::TaskItem => {
            out.push_str(r#"<li data-type="taskItem""#);
            if node.attr_bool("checked") == Some(true) {
                out.push_str(r#" data-checked="true""#);
            }
            out.push('>');
            render_children(node, out);
            out.push_str("</li>");
        }

        // A doc node below the root, or an unknown extension node: keep the
        // children, drop the tag.
        NodeKind::Doc | NodeKind::Other => render_children(node, out),
    }
}

fn render_children(node: &Node, out: &mut String) {
    for child in &node.content {
        render_node(child, out);
    }
}

fn wrap_children(node: &Node, tag: &str, out: &mut String) {
    write!(out, "<{tag}>").unwrap();
    render_children(node, out);
    write!(out, "</{tag}>").unwrap();
}

/// Wrap escaped text in mark tags, innermost-first in the order the marks
/// appear on the node.
fn render_marks(text: &str, marks: &[Mark], out: &mut String) {
    if marks.is_empty() {
        out.push_str(&escape_html(text));
        return;
    }

    let mut rendered = escape_html(text);
    for mark in marks {
        rendered = match mark.kind() {
            MarkKind::Bold => format!("<strong>{rendered}</strong>"),
            MarkKind::Italic => format!("<em>{rendered}</em>"),
            MarkKind::Underline => format!("<u>{rendered}</u>"),
            MarkKind::Strike => format!("<s>{rendered}</s>"),
            MarkKind::Code => format!("<code>{rendered}</code>"),
            MarkKind::Link => {
                let href = mark.attr_str("href").unwrap_or("#");
                match mark.attr_str("target") {
                    Some(target) => format!(
                        r#"<a href="{}" target="{}">{rendered}</a>"#,
                        escape_html(href),
                        escape_html(target)
                    ),
                    None => format!(r#"<a href="{}">{rendered}</a>"#, escape_html(href)),
                }
            }
            MarkKind::TextStyle => match mark.attr_str("color").filter(|c| !c.is_empty()) {
                Some(color) => format!(
                    r#"<span style="color: {}">{rendered}</span>"#,
                    escape_html(color)
                ),
                None => rendered,
            },
            MarkKind::Highlight => format!("<mark>{rendered}</mark>"),
            MarkKind::Other => rendered,
        };
    }
    out.push_str(&rendered);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_four_characters() {
        assert_eq!(escape_html(r#"a&b<c>d"e"#), "a&amp;b&lt;c&gt;d&quot;e");
        assert_eq!(escape_html("untouched"), "untouched");
    }

    #[test]
    fn text_style_without_color_is_a_no_op() {
        let node: Node = serde_json::from_str(
            r#"{"type":"text","text":"x","marks":[{"type":"textStyle","attrs":{}}]}"#,
        )
        .unwrap();
        let mut out = String::new();
        render_node(&node, &mut out);
        assert_eq!(out, "x");
    }

    #[test]
    fn href_attribute_is_escaped() {
        let node: Node = serde_json::from_str(
            r#"{"type":"text","text":"x","marks":[{"type":"link","attrs":{"href":"/a?b=1&c=\"2\""}}]}"#,
        )
        .unwrap();
        let mut out = String::new();
        render_node(&node, &mut out);
        assert_eq!(out, r#"<a href="/a?b=1&amp;c=&quot;2&quot;">x</a>"#);
    }
}
