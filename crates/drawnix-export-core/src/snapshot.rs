//! Ordered, read-only views of a board.
//!
//! A [`Snapshot`] is the input of every export. Element order is insertion
//! order on the board and is meaningful: it is the traversal and tie-break
//! order of all exporters.
//!
//! Snapshots are usually built by the diagram engine directly, but they can
//! also be loaded from JSON with [`Snapshot::from_json`]. Both a bare array of
//! elements and a board document with an `elements` array are accepted:
//!
//! ```
//! # use drawnix_export_core::snapshot::Snapshot;
//! let board = r#"{
//!     "type": "drawnix",
//!     "elements": [
//!         {"id": "a", "type": "geometry", "shape": "rectangle", "text": "Start"},
//!         {"id": "b", "type": "freehand"}
//!     ]
//! }"#;
//!
//! let snapshot = Snapshot::from_json(board).unwrap();
//! assert_eq!(snapshot.len(), 1);
//! assert_eq!(snapshot.skipped(), 1);
//! ```

use log::{debug, warn};
use serde_json::Value;
use thiserror::Error;

use crate::element::DiagramElement;

/// Errors raised while loading a snapshot from JSON.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot must be an array of elements or an object with an `elements` array")]
    Shape,
}

impl SnapshotError {
    /// Returns the one-based `(line, column)` of a JSON syntax error.
    pub fn location(&self) -> Option<(usize, usize)> {
        match self {
            Self::Json(err) if err.line() > 0 => Some((err.line(), err.column())),
            _ => None,
        }
    }
}

/// An ordered sequence of top-level board elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    elements: Vec<DiagramElement>,
    skipped: usize,
}

impl Snapshot {
    /// Creates a snapshot from elements in board order.
    pub fn new(elements: Vec<DiagramElement>) -> Self {
        Self {
            elements,
            skipped: 0,
        }
    }

    /// Loads a snapshot from a JSON array or board document.
    ///
    /// Elements of unsupported types (freehand strokes, images, …) and
    /// elements that fail to decode are skipped and counted in
    /// [`Snapshot::skipped`].
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] for malformed JSON and
    /// [`SnapshotError::Shape`] when the top-level value holds no element
    /// array.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let document: Value = serde_json::from_str(json)?;

        let raw_elements = match document {
            Value::Array(elements) => elements,
            Value::Object(mut board) => match board.remove("elements") {
                Some(Value::Array(elements)) => elements,
                _ => return Err(SnapshotError::Shape),
            },
            _ => return Err(SnapshotError::Shape),
        };

        let total = raw_elements.len();
        let mut elements = Vec::with_capacity(total);
        for (index, raw) in raw_elements.into_iter().enumerate() {
            let element_type = raw
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("<missing>")
                .to_string();

            match serde_json::from_value::<DiagramElement>(raw) {
                Ok(element) => elements.push(element),
                Err(err) => {
                    warn!(
                        index = index,
                        element_type = element_type,
                        reason = err.to_string();
                        "Skipping unsupported board element"
                    );
                }
            }
        }

        let skipped = total - elements.len();
        debug!(elements = elements.len(), skipped = skipped; "Snapshot loaded");

        Ok(Self { elements, skipped })
    }

    /// Returns the elements in board order.
    pub fn elements(&self) -> &[DiagramElement] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiagramElement> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns how many elements were dropped while loading.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl FromIterator<DiagramElement> for Snapshot {
    fn from_iter<I: IntoIterator<Item = DiagramElement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a DiagramElement;
    type IntoIter = std::slice::Iter<'a, DiagramElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    #[test]
    fn test_from_json_bare_array() {
        let snapshot = Snapshot::from_json(
            r#"[
                {"id": "m", "type": "mindmap", "data": {"topic": "Root"}},
                {"id": "s", "type": "geometry", "shape": "ellipse"},
                {"id": "l", "type": "arrow-line"}
            ]"#,
        )
        .unwrap();

        let kinds: Vec<ElementKind> = snapshot.iter().map(DiagramElement::kind).collect();
        assert_eq!(
            kinds,
            vec![ElementKind::Mind, ElementKind::Shape, ElementKind::Connector]
        );
        assert_eq!(snapshot.skipped(), 0);
    }

    #[test]
    fn test_from_json_board_document() {
        let snapshot = Snapshot::from_json(
            r#"{"type": "drawnix", "version": 1, "elements": [{"id": "t", "type": "text"}], "viewport": {"zoom": 1}}"#,
        )
        .unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.elements()[0].id(), "t");
    }

    #[test]
    fn test_from_json_skips_unsupported_elements() {
        let snapshot = Snapshot::from_json(
            r#"[
                {"id": "a", "type": "freehand"},
                {"id": "b", "type": "geometry"},
                {"type": "geometry"},
                {"id": "c", "type": "image"}
            ]"#,
        )
        .unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.skipped(), 3);
    }

    #[test]
    fn test_from_json_keeps_mind_tree_with_null_data() {
        let snapshot = Snapshot::from_json(
            r#"[{
                "id": "r",
                "type": "mindmap",
                "data": {"topic": "Plan"},
                "children": [
                    {"id": "a", "data": {"topic": "Research"}},
                    {"id": "b", "data": null, "children": null}
                ]
            }]"#,
        )
        .unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.skipped(), 0);
        let root = snapshot.elements()[0].as_mind_node().unwrap();
        let ids: Vec<&str> = root.children().iter().map(|child| child.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(root.children()[1].topic().is_none());
    }

    #[test]
    fn test_from_json_keeps_elements_with_odd_optional_fields() {
        let snapshot = Snapshot::from_json(
            r#"[
                {"id": "s1", "type": "geometry", "shape": null, "text": "Start", "label": {"children": [{"text": "x"}]}},
                {"id": "s2", "type": "geometry", "text": "End", "content": 42},
                {"id": "t1", "type": "text", "textContent": false, "data": null},
                {"id": "l1", "type": "arrow-line", "source": {"boundId": "s1"}, "target": {"boundId": "s2"}, "texts": null}
            ]"#,
        )
        .unwrap();

        assert_eq!(snapshot.skipped(), 0);
        let kinds: Vec<ElementKind> = snapshot.iter().map(DiagramElement::kind).collect();
        assert_eq!(
            kinds,
            vec![
                ElementKind::Shape,
                ElementKind::Shape,
                ElementKind::TextBox,
                ElementKind::Connector
            ]
        );
        let DiagramElement::Connector(connector) = &snapshot.elements()[3] else {
            panic!("expected a connector");
        };
        assert_eq!(connector.source_ref(), Some("s1"));
        assert_eq!(connector.target_ref(), Some("s2"));
    }

    #[test]
    fn test_from_json_preserves_order() {
        let snapshot =
            Snapshot::from_json(r#"[{"id": "z", "type": "text"}, {"id": "a", "type": "text"}]"#)
                .unwrap();

        let ids: Vec<&str> = snapshot.iter().map(DiagramElement::id).collect();
        assert_eq!(ids, vec!["z", "a"]);
    }

    #[test]
    fn test_from_json_empty_array() {
        let snapshot = Snapshot::from_json("[]").unwrap();

        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_from_json_syntax_error_has_location() {
        let err = Snapshot::from_json("[\n  {\"id\": }\n]").unwrap_err();

        assert!(matches!(err, SnapshotError::Json(_)));
        assert_eq!(err.location().map(|(line, _)| line), Some(2));
    }

    #[test]
    fn test_from_json_wrong_shape() {
        assert!(matches!(
            Snapshot::from_json(r#"{"children": []}"#),
            Err(SnapshotError::Shape)
        ));
        assert!(matches!(
            Snapshot::from_json(r#""board""#),
            Err(SnapshotError::Shape)
        ));
        assert!(Snapshot::from_json(r#""board""#).unwrap_err().location().is_none());
    }
}
