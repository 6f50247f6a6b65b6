//! Mermaid flowchart syntax.
//!
//! Maps shape tags to node decorations and formats node and edge lines.
//!
//! | Shape | Decoration |
//! |-------|------------|
//! | `diamond` | `{text}` |
//! | `ellipse`, `roundRectangle` | `(text)` |
//! | anything else | `[text]` |

use drawnix_export_core::shape::ShapeKind;

/// First line of every flowchart document.
pub const FLOWCHART_HEADER: &str = "flowchart TD";

const INDENT: &str = "    ";

/// Node decoration used in flowchart output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    /// `[text]`
    Box,
    /// `(text)`
    Rounded,
    /// `{text}`
    Decision,
}

impl NodeShape {
    /// Returns the decoration for a shape tag.
    pub fn for_shape(kind: &ShapeKind) -> Self {
        match kind {
            ShapeKind::Diamond => Self::Decision,
            ShapeKind::Ellipse | ShapeKind::RoundRectangle => Self::Rounded,
            ShapeKind::Rectangle | ShapeKind::Triangle | ShapeKind::Other(_) => Self::Box,
        }
    }

    /// Returns the opening and closing delimiters.
    pub fn delimiters(self) -> (&'static str, &'static str) {
        match self {
            Self::Box => ("[", "]"),
            Self::Rounded => ("(", ")"),
            Self::Decision => ("{", "}"),
        }
    }
}

/// Makes text safe to embed in a node decoration.
///
/// Double quotes would open a quoted label in the flowchart grammar, so they
/// become single quotes.
pub fn escape_text(text: &str) -> String {
    text.replace('"', "'")
}

/// Formats an indented node declaration, newline included.
pub fn node_line(id: &str, text: &str, shape: NodeShape) -> String {
    let (open, close) = shape.delimiters();
    format!("{INDENT}{id}{open}{}{close}\n", escape_text(text))
}

/// Formats an indented edge, newline included.
pub fn edge_line(from: &str, to: &str, label: Option<&str>) -> String {
    match label {
        Some(label) => format!("{INDENT}{from} -->|{label}| {to}\n"),
        None => format!("{INDENT}{from} --> {to}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mapping() {
        assert_eq!(NodeShape::for_shape(&ShapeKind::Diamond), NodeShape::Decision);
        assert_eq!(NodeShape::for_shape(&ShapeKind::Ellipse), NodeShape::Rounded);
        assert_eq!(
            NodeShape::for_shape(&ShapeKind::RoundRectangle),
            NodeShape::Rounded
        );
        assert_eq!(NodeShape::for_shape(&ShapeKind::Rectangle), NodeShape::Box);
        assert_eq!(NodeShape::for_shape(&ShapeKind::Triangle), NodeShape::Box);
        assert_eq!(
            NodeShape::for_shape(&ShapeKind::Other("cloud".into())),
            NodeShape::Box
        );
    }

    #[test]
    fn test_node_lines() {
        assert_eq!(node_line("A", "Start", NodeShape::Box), "    A[Start]\n");
        assert_eq!(node_line("B", "Go", NodeShape::Rounded), "    B(Go)\n");
        assert_eq!(node_line("C", "Ok?", NodeShape::Decision), "    C{Ok?}\n");
    }

    #[test]
    fn test_node_text_quotes_are_replaced() {
        assert_eq!(
            node_line("A", r#"say "hi""#, NodeShape::Box),
            "    A[say 'hi']\n"
        );
    }

    #[test]
    fn test_edge_lines() {
        assert_eq!(edge_line("A", "B", None), "    A --> B\n");
        assert_eq!(edge_line("A", "B", Some("next")), "    A -->|next| B\n");
    }
}
