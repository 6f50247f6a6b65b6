//! Markdown section for free-form drawings.
//!
//! Two styles are available, see [`DrawingStyle`](crate::config::DrawingStyle):
//!
//! - `outline` lists the drawing under its own heading, one bullet per element
//!   in board order. Shapes and text boxes are numbered separately.
//! - `flowchart` embeds the flowchart of the drawing in a fenced `mermaid`
//!   block.

use drawnix_export_core::element::DiagramElement;

use crate::{config::Locale, mermaid::GraphOutput, text};

struct Terms {
    heading: &'static str,
    shape: &'static str,
    text: &'static str,
    connector: &'static str,
    empty: &'static str,
}

impl Terms {
    fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::Zh => Self {
                heading: "绘图内容",
                shape: "形状",
                text: "文本",
                connector: "连接线",
                empty: "暂无可转换的内容",
            },
            Locale::En => Self {
                heading: "Drawing",
                shape: "Shape",
                text: "Text",
                connector: "Connector",
                empty: "No convertible content",
            },
        }
    }
}

/// Lists shapes, text boxes and connectors as bullets.
///
/// The section always ends with a blank line. When it names no shape or text
/// box, a notice line follows the bullets.
pub fn outline(elements: &[&DiagramElement], locale: Locale) -> String {
    let terms = Terms::for_locale(locale);
    let mut out = format!("# {}\n\n", terms.heading);
    let mut shapes = 0;
    let mut texts = 0;

    for element in elements {
        match element {
            DiagramElement::Shape(shape) => {
                shapes += 1;
                let label = text::node_text(shape.text(), shape.id(), locale);
                out.push_str(&format!(
                    "- {} {shapes} ({}): {label}\n",
                    terms.shape,
                    shape.shape()
                ));
            }
            DiagramElement::TextBox(text_box) => {
                texts += 1;
                let label = text::node_text(text_box.text(), text_box.id(), locale);
                out.push_str(&format!("- {} {texts}: {label}\n", terms.text));
            }
            DiagramElement::Connector(connector) => match text::label_text(connector.label()) {
                Some(label) => out.push_str(&format!("- {}: {label}\n", terms.connector)),
                None => out.push_str(&format!("- {}\n", terms.connector)),
            },
            DiagramElement::MindNode(_) => {}
        }
    }

    if shapes == 0 && texts == 0 {
        out.push_str(terms.empty);
        out.push('\n');
    }
    out.push('\n');
    out
}

/// Wraps a flowchart of the drawing in a fenced code block.
pub fn fenced(chart: &GraphOutput) -> String {
    format!("```mermaid\n{}```\n", chart.text())
}

#[cfg(test)]
mod tests {
    use drawnix_export_core::{
        element::{Connector, Shape, TextBox},
        rich_text::{RichText, TextNode},
        shape::ShapeKind,
    };

    use super::*;
    use crate::{config::EdgeInference, mermaid::graph};

    fn drawing() -> Vec<DiagramElement> {
        vec![
            DiagramElement::Shape(Shape::new(
                "s1",
                ShapeKind::Diamond,
                TextNode::new().with_text(RichText::leaf("Ok?")),
            )),
            DiagramElement::TextBox(TextBox::new(
                "t1",
                TextNode::new().with_text(RichText::leaf("note")),
            )),
            DiagramElement::Connector(
                Connector::new("l1")
                    .with_source("s1")
                    .with_target("t1")
                    .with_label(RichText::leaf("yes")),
            ),
            DiagramElement::Connector(Connector::new("l2")),
            DiagramElement::Shape(Shape::new("s2", ShapeKind::from("cloud"), TextNode::new())),
        ]
    }

    #[test]
    fn test_outline_zh() {
        let elements = drawing();
        let refs: Vec<&DiagramElement> = elements.iter().collect();

        assert_eq!(
            outline(&refs, Locale::Zh),
            "# 绘图内容\n\n- 形状 1 (diamond): Ok?\n- 文本 1: note\n- 连接线: yes\n- 连接线\n- 形状 2 (cloud): s2\n\n"
        );
    }

    #[test]
    fn test_outline_en() {
        let elements = drawing();
        let refs: Vec<&DiagramElement> = elements.iter().collect();

        assert_eq!(
            outline(&refs, Locale::En),
            "# Drawing\n\n- Shape 1 (diamond): Ok?\n- Text 1: note\n- Connector: yes\n- Connector\n- Shape 2 (cloud): s2\n\n"
        );
    }

    #[test]
    fn test_connectors_only_adds_notice() {
        let element = DiagramElement::Connector(Connector::new("l1"));

        assert_eq!(
            outline(&[&element], Locale::Zh),
            "# 绘图内容\n\n- 连接线\n暂无可转换的内容\n\n"
        );
    }

    #[test]
    fn test_fenced_flowchart() {
        let elements = drawing();
        let refs: Vec<&DiagramElement> = elements.iter().collect();

        let chart = graph::render(refs, EdgeInference::None, Locale::En).expect("unique ids");

        assert_eq!(
            fenced(&chart),
            "```mermaid\nflowchart TD\n    A{Ok?}\n    B[note]\n    C[s2]\n    A -->|yes| B\n```\n"
        );
    }
}
