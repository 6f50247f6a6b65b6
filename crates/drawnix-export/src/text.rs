//! Rich text flattening.
//!
//! Turns a [`RichText`] value of any shape into one line of plain text. The
//! extraction runs an ordered list of strategies and keeps the first
//! non-blank result:
//!
//! 1. a bare string;
//! 2. a composite (fragment array, or a node with `children`): the children
//!    concatenated recursively with no separator;
//! 3. a node's `text` leaf;
//! 4. the alternate fields `content`, `label`, `textContent`, `data.text`,
//!    `data.label`, in that order.
//!
//! When every strategy comes up empty, the caller's fallback applies: a locale
//! placeholder for mind topics, the element id for shapes, nothing for
//! connector labels.
//!
//! Results are trimmed and line breaks are folded into single spaces, so the
//! text always fits on one outline bullet or flowchart node.

use drawnix_export_core::rich_text::{RichText, TextNode};

use crate::config::Locale;

type NodeStrategy = fn(&TextNode) -> Option<String>;

const NODE_STRATEGIES: [NodeStrategy; 3] = [children_text, leaf_text, alternate_text];

/// Flattens `value`, returning `None` when it holds no visible text.
pub fn flatten(value: &RichText) -> Option<String> {
    match value {
        RichText::Plain(text) => non_blank(text),
        RichText::Fragments(items) => non_blank(&concat(items)),
        RichText::Node(node) => flatten_node(node),
        RichText::Opaque(_) => None,
    }
}

/// Flattens the text-bearing fields of an object node.
pub fn flatten_node(node: &TextNode) -> Option<String> {
    NODE_STRATEGIES.iter().find_map(|strategy| strategy(node))
}

/// Returns the display text of a mind topic, or the locale placeholder.
pub fn topic_text(topic: Option<&RichText>, locale: Locale) -> String {
    topic
        .and_then(flatten)
        .unwrap_or_else(|| locale.placeholder().to_string())
}

/// Returns the display text of a shape or text box.
///
/// Falls back to the element id, and to the locale placeholder when the id is
/// blank as well.
pub fn node_text(node: &TextNode, id: &str, locale: Locale) -> String {
    flatten_node(node)
        .or_else(|| non_blank(id))
        .unwrap_or_else(|| locale.placeholder().to_string())
}

/// Returns a connector label, or `None` when the label is absent or blank.
pub fn label_text(label: Option<&RichText>) -> Option<String> {
    label.and_then(flatten)
}

fn children_text(node: &TextNode) -> Option<String> {
    if node.children().is_empty() {
        return None;
    }
    non_blank(&concat(node.children()))
}

fn leaf_text(node: &TextNode) -> Option<String> {
    node.text().and_then(|text| non_blank(&text.literal()))
}

fn alternate_text(node: &TextNode) -> Option<String> {
    node.alternates().into_iter().flatten().find_map(non_blank)
}

fn concat(items: &[RichText]) -> String {
    items.iter().map(RichText::literal).collect()
}

fn non_blank(text: &str) -> Option<String> {
    let line = single_line(text);
    (!line.is_empty()).then_some(line)
}

fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
