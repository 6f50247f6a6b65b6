//! Flowchart conversion of mind-map trees.
//!
//! Every tree goes into a single `flowchart TD` document. Nodes are numbered
//! from one shared identifier sequence in depth-first pre-order, and each
//! non-root node is followed immediately by the edge from its parent.

use log::debug;

use drawnix_export_core::{element::MindNode, identifier::SyntheticIds};

use crate::{
    config::Locale,
    mermaid::syntax::{self, FLOWCHART_HEADER, NodeShape},
    text,
};

/// Converts mind trees into one flowchart document.
pub fn render<'a>(roots: impl IntoIterator<Item = &'a MindNode>, locale: Locale) -> String {
    let mut ids = SyntheticIds::new();
    let mut out = format!("{FLOWCHART_HEADER}\n");

    for root in roots {
        write_subtree(root, None, &mut ids, locale, &mut out);
    }

    debug!(nodes = ids.issued(); "Mind flowchart assembled");
    out
}

fn write_subtree(
    node: &MindNode,
    parent: Option<&str>,
    ids: &mut SyntheticIds,
    locale: Locale,
    out: &mut String,
) {
    let code = ids.next_id();
    let label = text::topic_text(node.topic(), locale);
    out.push_str(&syntax::node_line(&code, &label, NodeShape::Box));
    if let Some(parent) = parent {
        out.push_str(&syntax::edge_line(parent, &code, None));
    }

    for child in node.children() {
        write_subtree(child, Some(&code), ids, locale, out);
    }
}
