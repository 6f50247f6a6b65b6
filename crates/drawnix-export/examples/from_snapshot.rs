//! Example: Exporting a board built in code
//!
//! This example builds a snapshot from the element types directly, without
//! loading JSON, and prints both exports.

use drawnix_export::{
    Converter, ExportFormat,
    config::{AppConfig, EdgeInference, Locale},
    element::{Connector, DiagramElement, MindNode, Shape},
    rich_text::{RichText, TextNode},
    shape::ShapeKind,
    snapshot::Snapshot,
};

fn topic(text: &str) -> Option<RichText> {
    Some(RichText::paragraph(vec![RichText::leaf(text)]))
}

fn shape(id: &str, kind: ShapeKind, text: &str) -> DiagramElement {
    DiagramElement::Shape(Shape::new(
        id,
        kind,
        TextNode::new().with_text(RichText::paragraph(vec![RichText::leaf(text)])),
    ))
}

fn main() {
    let tree = MindNode::new("root", topic("Release"))
        .with_child(MindNode::new("tests", topic("Run tests")))
        .with_child(
            MindNode::new("docs", topic("Write docs"))
                .with_child(MindNode::new("changelog", topic("Changelog"))),
        );

    let snapshot = Snapshot::new(vec![
        DiagramElement::MindNode(tree),
        shape("build", ShapeKind::Rectangle, "Build"),
        shape("green", ShapeKind::Diamond, "Green?"),
        shape("ship", ShapeKind::Ellipse, "Ship"),
        DiagramElement::Connector(Connector::new("l1").with_source("build").with_target("green")),
        DiagramElement::Connector(
            Connector::new("l2")
                .with_source("green")
                .with_target("ship")
                .with_label(RichText::leaf("yes")),
        ),
    ]);

    let config = AppConfig::default()
        .with_locale(Locale::En)
        .with_edge_inference(EdgeInference::LinearChain);
    let converter = Converter::new(config);

    for format in ExportFormat::ALL {
        let export = converter.convert(&snapshot, format);
        println!("--- {} ({:?}) ---", format, export.status());
        println!("{}", export.text());
    }
}
