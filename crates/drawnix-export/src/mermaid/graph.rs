//! Flowchart conversion of free-form drawings.
//!
//! Conversion runs in two passes over the elements, both in board order:
//!
//! 1. **Nodes** - every shape and text box gets the next synthetic id and is
//!    recorded in an insertion-ordered map keyed by its element id.
//! 2. **Edges** - every connector whose source and target are both bound to
//!    recorded nodes becomes an edge. Connectors with a free, dangling, or
//!    connector-bound endpoint are dropped.
//!
//! When no connector resolves, the [`EdgeInference`] policy decides whether
//! the nodes are chained in discovery order. The outcome is reported as a
//! [`Connectivity`] value alongside the text.

use indexmap::{IndexMap, map::Entry};
use log::{debug, trace};

use drawnix_export_core::{
    element::{Connector, DiagramElement},
    identifier::SyntheticIds,
    rich_text::TextNode,
    shape::ShapeKind,
};

use crate::{
    config::{EdgeInference, Locale},
    error::ConversionError,
    mermaid::syntax::{self, FLOWCHART_HEADER, NodeShape},
    text,
};

/// How the edges of a flowchart were obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// At least one connector resolved to an edge.
    Explicit,
    /// No connector resolved; the nodes were chained in discovery order.
    Inferred,
    /// No connector resolved and inference was disabled, so the nodes are
    /// emitted without edges.
    Skipped,
    /// No connector resolved and there were fewer than two nodes.
    Empty,
}

/// A rendered flowchart with its counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphOutput {
    text: String,
    node_count: usize,
    edge_count: usize,
    connectivity: Connectivity,
}

impl GraphOutput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }
}

#[derive(Debug)]
struct GraphNode {
    code: String,
    text: String,
    shape: NodeShape,
}

#[derive(Debug)]
struct Edge {
    from: String,
    to: String,
    label: Option<String>,
}

/// Converts free-form elements into a flowchart document.
///
/// Mind nodes in `elements` are ignored.
///
/// # Errors
///
/// Returns [`ConversionError::DuplicateId`] when two shapes or text boxes
/// share an element id.
pub fn render<'a>(
    elements: impl IntoIterator<Item = &'a DiagramElement>,
    inference: EdgeInference,
    locale: Locale,
) -> Result<GraphOutput, ConversionError> {
    let elements: Vec<&DiagramElement> = elements.into_iter().collect();

    let nodes = collect_nodes(&elements, locale)?;
    let mut edges = resolve_edges(&elements, &nodes);

    let connectivity = if !edges.is_empty() {
        Connectivity::Explicit
    } else if nodes.len() < 2 {
        Connectivity::Empty
    } else {
        match inference {
            EdgeInference::LinearChain => {
                edges = chain(&nodes);
                Connectivity::Inferred
            }
            EdgeInference::None => Connectivity::Skipped,
        }
    };

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        connectivity:? = connectivity;
        "Flowchart assembled"
    );

    let mut out = format!("{FLOWCHART_HEADER}\n");
    for node in nodes.values() {
        out.push_str(&syntax::node_line(&node.code, &node.text, node.shape));
    }
    for edge in &edges {
        out.push_str(&syntax::edge_line(&edge.from, &edge.to, edge.label.as_deref()));
    }

    Ok(GraphOutput {
        text: out,
        node_count: nodes.len(),
        edge_count: edges.len(),
        connectivity,
    })
}

fn collect_nodes<'a>(
    elements: &[&'a DiagramElement],
    locale: Locale,
) -> Result<IndexMap<&'a str, GraphNode>, ConversionError> {
    let mut ids = SyntheticIds::new();
    let mut nodes = IndexMap::new();

    for &element in elements {
        let Some((id, shape, body)) = node_parts(element) else {
            continue;
        };

        match nodes.entry(id) {
            Entry::Occupied(_) => {
                return Err(ConversionError::DuplicateId { id: id.to_string() });
            }
            Entry::Vacant(slot) => {
                let node = GraphNode {
                    code: ids.next_id(),
                    text: text::node_text(body, id, locale),
                    shape: NodeShape::for_shape(shape),
                };
                trace!(element_id = id, code = node.code.as_str(); "Assigned node id");
                slot.insert(node);
            }
        }
    }

    Ok(nodes)
}

fn node_parts(element: &DiagramElement) -> Option<(&str, &ShapeKind, &TextNode)> {
    match element {
        DiagramElement::Shape(shape) => Some((shape.id(), shape.shape(), shape.text())),
        DiagramElement::TextBox(text_box) => {
            Some((text_box.id(), text_box.shape(), text_box.text()))
        }
        DiagramElement::MindNode(_) | DiagramElement::Connector(_) => None,
    }
}

fn resolve_edges(elements: &[&DiagramElement], nodes: &IndexMap<&str, GraphNode>) -> Vec<Edge> {
    let connectors = elements.iter().filter_map(|element| match element {
        DiagramElement::Connector(connector) => Some(connector),
        _ => None,
    });

    let mut edges = Vec::new();
    for connector in connectors {
        match resolve(connector, nodes) {
            Some((from, to)) => edges.push(Edge {
                from: from.code.clone(),
                to: to.code.clone(),
                label: text::label_text(connector.label()),
            }),
            None => debug!(
                connector = connector.id(),
                source:? = connector.source_ref(),
                target:? = connector.target_ref();
                "Dropping connector with an unresolved endpoint"
            ),
        }
    }
    edges
}

fn resolve<'n>(
    connector: &Connector,
    nodes: &'n IndexMap<&str, GraphNode>,
) -> Option<(&'n GraphNode, &'n GraphNode)> {
    let from = nodes.get(connector.source_ref()?)?;
    let to = nodes.get(connector.target_ref()?)?;
    Some((from, to))
}

fn chain(nodes: &IndexMap<&str, GraphNode>) -> Vec<Edge> {
    nodes
        .values()
        .zip(nodes.values().skip(1))
        .map(|(from, to)| Edge {
            from: from.code.clone(),
            to: to.code.clone(),
            label: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use drawnix_export_core::{element::Shape, element::TextBox, rich_text::RichText};

    use super::*;

    fn shape(id: &str, kind: ShapeKind, label: &str) -> DiagramElement {
        DiagramElement::Shape(Shape::new(
            id,
            kind,
            TextNode::new().with_text(RichText::paragraph(vec![RichText::leaf(label)])),
        ))
    }

    fn rect(id: &str, label: &str) -> DiagramElement {
        shape(id, ShapeKind::Rectangle, label)
    }

    fn connector(id: &str, source: Option<&str>, target: Option<&str>) -> Connector {
        let mut connector = Connector::new(id);
        if let Some(source) = source {
            connector = connector.with_source(source);
        }
        if let Some(target) = target {
            connector = connector.with_target(target);
        }
        connector
    }

    fn line(id: &str, source: Option<&str>, target: Option<&str>) -> DiagramElement {
        DiagramElement::Connector(connector(id, source, target))
    }

    fn render_en(elements: &[DiagramElement], inference: EdgeInference) -> GraphOutput {
        render(elements, inference, Locale::En).expect("conversion should succeed")
    }

    #[test]
    fn test_labeled_connector() {
        let elements = vec![
            rect("s1", "Start"),
            rect("s2", "End"),
            DiagramElement::Connector(
                connector("l1", Some("s1"), Some("s2")).with_label(RichText::leaf("next")),
            ),
        ];

        let output = render_en(&elements, EdgeInference::None);

        assert_eq!(
            output.text(),
            "flowchart TD\n    A[Start]\n    B[End]\n    A -->|next| B\n"
        );
        assert_eq!(output.connectivity(), Connectivity::Explicit);
    }

    #[test]
    fn test_linear_chain_when_enabled() {
        let elements = vec![rect("s1", "Start"), rect("s2", "End")];

        let output = render_en(&elements, EdgeInference::LinearChain);

        assert_eq!(
            output.text(),
            "flowchart TD\n    A[Start]\n    B[End]\n    A --> B\n"
        );
        assert_eq!(output.connectivity(), Connectivity::Inferred);
    }

    #[test]
    fn test_no_chain_by_default() {
        let elements = vec![rect("s1", "Start"), rect("s2", "End")];

        let output = render_en(&elements, EdgeInference::None);

        assert_eq!(output.text(), "flowchart TD\n    A[Start]\n    B[End]\n");
        assert_eq!(output.edge_count(), 0);
        assert_eq!(output.connectivity(), Connectivity::Skipped);
    }

    #[test]
    fn test_chain_length_is_node_count_minus_one() {
        let elements: Vec<DiagramElement> = (0..5)
            .map(|i| rect(&format!("s{i}"), &format!("n{i}")))
            .collect();

        let output = render_en(&elements, EdgeInference::LinearChain);

        assert_eq!(output.node_count(), 5);
        assert_eq!(output.edge_count(), 4);
        assert!(output.text().ends_with("    C --> D\n    D --> E\n"));
    }

    #[test]
    fn test_single_node_never_chains() {
        let output = render_en(&[rect("s1", "Alone")], EdgeInference::LinearChain);

        assert_eq!(output.text(), "flowchart TD\n    A[Alone]\n");
        assert_eq!(output.connectivity(), Connectivity::Empty);
    }

    #[test]
    fn test_dangling_connectors_are_dropped() {
        let elements = vec![
            rect("s1", "One"),
            rect("s2", "Two"),
            line("free", None, None),
            line("half", Some("s1"), None),
            line("gone", Some("s1"), Some("missing")),
            line("ok", Some("s2"), Some("s1")),
        ];

        let output = render_en(&elements, EdgeInference::LinearChain);

        assert_eq!(
            output.text(),
            "flowchart TD\n    A[One]\n    B[Two]\n    B --> A\n"
        );
        assert_eq!(output.connectivity(), Connectivity::Explicit);
    }

    #[test]
    fn test_connector_bound_to_connector_is_dropped() {
        let elements = vec![
            rect("s1", "One"),
            line("l1", Some("s1"), Some("l2")),
            line("l2", Some("l1"), Some("s1")),
        ];

        let output = render_en(&elements, EdgeInference::None);

        assert_eq!(output.edge_count(), 0);
        assert_eq!(output.node_count(), 1);
    }

    #[test]
    fn test_self_loop_is_kept() {
        let elements = vec![rect("s1", "Retry"), line("l1", Some("s1"), Some("s1"))];

        let output = render_en(&elements, EdgeInference::None);

        assert!(output.text().ends_with("    A --> A\n"));
    }

    #[test]
    fn test_connector_before_shapes_still_resolves() {
        let elements = vec![
            line("l1", Some("s1"), Some("s2")),
            rect("s1", "One"),
            rect("s2", "Two"),
        ];

        let output = render_en(&elements, EdgeInference::None);

        assert!(output.text().ends_with("    A --> B\n"));
    }

    #[test]
    fn test_blank_label_is_omitted() {
        let elements = vec![
            rect("s1", "One"),
            rect("s2", "Two"),
            DiagramElement::Connector(
                connector("l1", Some("s1"), Some("s2")).with_label(RichText::plain("  ")),
            ),
        ];

        let output = render_en(&elements, EdgeInference::None);

        assert!(output.text().ends_with("    A --> B\n"));
    }

    #[test]
    fn test_shape_decorations_and_text_boxes() {
        let elements = vec![
            shape("d", ShapeKind::Diamond, "Ok?"),
            shape("e", ShapeKind::Ellipse, "Go"),
            shape("r", ShapeKind::RoundRectangle, "Soft"),
            shape("t", ShapeKind::Triangle, "Tri"),
            DiagramElement::TextBox(TextBox::new(
                "x",
                TextNode::new().with_text(RichText::plain("note")),
            )),
        ];

        let output = render_en(&elements, EdgeInference::None);

        assert_eq!(
            output.text(),
            "flowchart TD\n    A{Ok?}\n    B(Go)\n    C(Soft)\n    D[Tri]\n    E[note]\n"
        );
    }

    #[test]
    fn test_textless_shape_uses_element_id() {
        let elements = vec![DiagramElement::Shape(Shape::new(
            "shape-1",
            ShapeKind::Rectangle,
            TextNode::new(),
        ))];

        let output = render_en(&elements, EdgeInference::None);

        assert_eq!(output.text(), "flowchart TD\n    A[shape-1]\n");
    }

    #[test]
    fn test_quotes_in_node_text() {
        let output = render_en(&[rect("s", r#"the "best" plan"#)], EdgeInference::None);

        assert_eq!(output.text(), "flowchart TD\n    A[the 'best' plan]\n");
    }

    #[test]
    fn test_ids_continue_past_z() {
        let elements: Vec<DiagramElement> = (0..28)
            .map(|i| rect(&format!("s{i}"), &format!("n{i}")))
            .collect();

        let output = render_en(&elements, EdgeInference::None);

        assert!(output.text().contains("    Z[n25]\n    AA[n26]\n    AB[n27]\n"));
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let elements = vec![rect("s1", "One"), rect("s1", "Again")];

        let result = render(&elements, EdgeInference::None, Locale::En);

        assert_eq!(
            result,
            Err(ConversionError::DuplicateId { id: "s1".into() })
        );
    }

    #[test]
    fn test_only_connectors() {
        let output = render_en(&[line("l1", None, None)], EdgeInference::LinearChain);

        assert_eq!(output.text(), "flowchart TD\n");
        assert_eq!(output.connectivity(), Connectivity::Empty);
    }
}

#[cfg(test)]
mod proptest_tests {
    use drawnix_export_core::{
        element::{Shape, TextBox},
        identifier::synthetic_id,
        rich_text::RichText,
    };
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone)]
    enum Item {
        Shape,
        TextBox,
        Connector(usize, usize),
    }

    // ===================
    // Strategies
    // ===================

    fn item_strategy() -> impl Strategy<Value = Item> {
        prop_oneof![
            Just(Item::Shape),
            Just(Item::TextBox),
            (0..12usize, 0..12usize).prop_map(|(from, to)| Item::Connector(from, to)),
        ]
    }

    fn board_strategy() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec(item_strategy(), 0..40)
    }

    /// Node `k` in board order gets id `n{k}` and label `L{k}`; connectors
    /// bind to node ids that may not exist.
    fn build(items: &[Item]) -> Vec<DiagramElement> {
        let mut nodes = 0;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let body = TextNode::new().with_text(RichText::leaf(format!("L{nodes}")));
                let id = format!("n{nodes}");
                match *item {
                    Item::Shape => {
                        nodes += 1;
                        DiagramElement::Shape(Shape::new(id, ShapeKind::Rectangle, body))
                    }
                    Item::TextBox => {
                        nodes += 1;
                        DiagramElement::TextBox(TextBox::new(id, body))
                    }
                    Item::Connector(from, to) => DiagramElement::Connector(
                        Connector::new(format!("c{index}"))
                            .with_source(format!("n{from}"))
                            .with_target(format!("n{to}")),
                    ),
                }
            })
            .collect()
    }

    // ===================
    // Property Test Functions
    // ===================

    /// One node line per shape or text box, coded `A, B, ..` in board order,
    /// and one edge per connector whose endpoints both exist.
    fn check_nodes_follow_board_order(items: &[Item]) -> Result<(), TestCaseError> {
        let elements = build(items);
        let node_total = items
            .iter()
            .filter(|item| !matches!(item, Item::Connector(..)))
            .count();
        let bound_edges = items
            .iter()
            .filter(|item| {
                matches!(item, Item::Connector(from, to) if *from < node_total && *to < node_total)
            })
            .count();

        let output = render(&elements, EdgeInference::None, Locale::En)
            .map_err(|err| TestCaseError::fail(err.to_string()))?;

        prop_assert_eq!(output.node_count(), node_total);
        prop_assert_eq!(output.edge_count(), bound_edges);

        let lines: Vec<&str> = output.text().lines().collect();
        prop_assert_eq!(lines.len(), 1 + node_total + bound_edges);
        for (index, line) in lines[1..=node_total].iter().enumerate() {
            prop_assert_eq!(
                line.to_string(),
                format!("    {}[L{index}]", synthetic_id(index))
            );
        }
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn nodes_follow_board_order(items in board_strategy()) {
            check_nodes_follow_board_order(&items)?;
        }
    }
}
