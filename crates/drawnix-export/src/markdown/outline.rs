//! Markdown outlines of mind-map trees.
//!
//! The root becomes a level-one heading, every descendant a bullet indented
//! two spaces per level below the root's children:
//!
//! ```text
//! # Plan
//!
//! - Research
//!   - Read papers
//! - Build
//! ```

use drawnix_export_core::element::MindNode;

use crate::{config::Locale, text};

const INDENT: &str = "  ";

/// Renders one mind tree as an outline.
pub fn render(root: &MindNode, locale: Locale) -> String {
    let mut out = String::new();
    root.visit(&mut |node, depth| {
        let label = text::topic_text(node.topic(), locale);
        if depth == 0 {
            out.push_str(&format!("# {label}\n\n"));
        } else {
            out.push_str(&INDENT.repeat(depth - 1));
            out.push_str(&format!("- {label}\n"));
        }
    });
    out
}

/// Renders several mind trees, separated by a blank line.
pub fn render_all<'a>(roots: impl IntoIterator<Item = &'a MindNode>, locale: Locale) -> String {
    roots
        .into_iter()
        .map(|root| render(root, locale))
        .collect::<Vec<_>>()
        .join("\n")
}
