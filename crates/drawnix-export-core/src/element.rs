//! Board element variants.
//!
//! A board snapshot is a sequence of [`DiagramElement`] values. The element set
//! is closed: mind-map trees, geometry shapes, free text boxes and connectors.
//! The JSON discriminator is the `type` field used by board documents.
//!
//! | Variant | `type` tag |
//! |---------|------------|
//! | [`DiagramElement::MindNode`] | `mindmap` (alias `mind`) |
//! | [`DiagramElement::Shape`] | `geometry` |
//! | [`DiagramElement::TextBox`] | `text` |
//! | [`DiagramElement::Connector`] | `arrow-line` (aliases `line`, `arrow`, `connection`) |

use std::fmt;

use serde::Deserialize;

use crate::{
    lenient,
    rich_text::{RichText, TextNode},
    shape::ShapeKind,
};

/// A top-level board element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum DiagramElement {
    #[serde(rename = "mindmap", alias = "mind")]
    MindNode(MindNode),

    #[serde(rename = "geometry")]
    Shape(Shape),

    #[serde(rename = "text")]
    TextBox(TextBox),

    #[serde(
        rename = "arrow-line",
        alias = "line",
        alias = "arrow",
        alias = "connection"
    )]
    Connector(Connector),
}

impl DiagramElement {
    /// Returns the persistent element id.
    pub fn id(&self) -> &str {
        match self {
            Self::MindNode(node) => node.id(),
            Self::Shape(shape) => shape.id(),
            Self::TextBox(text_box) => text_box.id(),
            Self::Connector(connector) => connector.id(),
        }
    }

    /// Returns the variant discriminator.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::MindNode(_) => ElementKind::Mind,
            Self::Shape(_) => ElementKind::Shape,
            Self::TextBox(_) => ElementKind::TextBox,
            Self::Connector(_) => ElementKind::Connector,
        }
    }

    /// Returns the mind tree root if this element is one.
    pub fn as_mind_node(&self) -> Option<&MindNode> {
        match self {
            Self::MindNode(node) => Some(node),
            _ => None,
        }
    }
}

/// Field-less discriminator of [`DiagramElement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Mind,
    Shape,
    TextBox,
    Connector,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mind => "mind node",
            Self::Shape => "shape",
            Self::TextBox => "text box",
            Self::Connector => "connector",
        };
        f.write_str(name)
    }
}

/// A node of a mind-map tree.
///
/// Children are owned, so a tree can neither share nodes nor contain cycles.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MindNode {
    id: String,

    #[serde(default, deserialize_with = "lenient::or_default")]
    data: MindData,

    #[serde(default, deserialize_with = "lenient::null_as_default")]
    children: Vec<MindNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
struct MindData {
    #[serde(default)]
    topic: Option<RichText>,
}

impl MindNode {
    /// Creates a leaf node with the given topic.
    pub fn new(id: impl Into<String>, topic: Option<RichText>) -> Self {
        Self {
            id: id.into(),
            data: MindData { topic },
            children: Vec::new(),
        }
    }

    /// Appends `child` after the existing children.
    pub fn with_child(mut self, child: MindNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn topic(&self) -> Option<&RichText> {
        self.data.topic.as_ref()
    }

    pub fn children(&self) -> &[MindNode] {
        &self.children
    }

    /// Visits this node and all descendants depth-first in stored order.
    ///
    /// The callback receives each node with its depth, the node itself being
    /// at depth 0.
    pub fn visit<'a>(&'a self, visitor: &mut impl FnMut(&'a MindNode, usize)) {
        self.visit_at(0, visitor);
    }

    fn visit_at<'a>(&'a self, depth: usize, visitor: &mut impl FnMut(&'a MindNode, usize)) {
        visitor(self, depth);
        for child in &self.children {
            child.visit_at(depth + 1, visitor);
        }
    }
}

/// A geometry element.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Shape {
    id: String,

    #[serde(default, deserialize_with = "lenient::or_default")]
    shape: ShapeKind,

    #[serde(flatten)]
    text: TextNode,
}

impl Shape {
    pub fn new(id: impl Into<String>, shape: ShapeKind, text: TextNode) -> Self {
        Self {
            id: id.into(),
            shape,
            text,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn shape(&self) -> &ShapeKind {
        &self.shape
    }

    /// Returns the text-bearing fields of the element.
    pub fn text(&self) -> &TextNode {
        &self.text
    }
}

/// A free text element.
///
/// Text boxes rarely carry a `shape` tag; when absent they render as
/// rectangles.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextBox {
    id: String,

    #[serde(default, deserialize_with = "lenient::or_default")]
    shape: ShapeKind,

    #[serde(flatten)]
    text: TextNode,
}

impl TextBox {
    pub fn new(id: impl Into<String>, text: TextNode) -> Self {
        Self {
            id: id.into(),
            shape: ShapeKind::default(),
            text,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn shape(&self) -> &ShapeKind {
        &self.shape
    }

    pub fn text(&self) -> &TextNode {
        &self.text
    }
}

/// A line or arrow between two elements.
///
/// Each endpoint may be bound to another element by id, or float freely.
/// Bound ids are not guaranteed to exist in the snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Connector {
    id: String,

    #[serde(default, deserialize_with = "lenient::or_default")]
    source: Option<Endpoint>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    target: Option<Endpoint>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    texts: Vec<ConnectorText>,

    #[serde(default)]
    label: Option<RichText>,
}

impl Connector {
    /// Creates a connector with two free-floating endpoints and no label.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: None,
            target: None,
            texts: Vec::new(),
            label: None,
        }
    }

    pub fn with_source(mut self, bound_id: impl Into<String>) -> Self {
        self.source = Some(Endpoint::bound(bound_id));
        self
    }

    pub fn with_target(mut self, bound_id: impl Into<String>) -> Self {
        self.target = Some(Endpoint::bound(bound_id));
        self
    }

    pub fn with_label(mut self, label: RichText) -> Self {
        self.label = Some(label);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the id the source endpoint is bound to.
    pub fn source_ref(&self) -> Option<&str> {
        self.source.as_ref().and_then(Endpoint::bound_id)
    }

    /// Returns the id the target endpoint is bound to.
    pub fn target_ref(&self) -> Option<&str> {
        self.target.as_ref().and_then(Endpoint::bound_id)
    }

    /// Returns the label text: the first entry of `texts`, else `label`.
    pub fn label(&self) -> Option<&RichText> {
        self.texts
            .first()
            .and_then(|entry| entry.text.as_ref())
            .or(self.label.as_ref())
    }
}

/// One end of a [`Connector`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    #[serde(default, deserialize_with = "lenient::string")]
    bound_id: Option<String>,
}

impl Endpoint {
    fn bound(id: impl Into<String>) -> Self {
        Self {
            bound_id: Some(id.into()),
        }
    }

    pub fn bound_id(&self) -> Option<&str> {
        self.bound_id.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
struct ConnectorText {
    #[serde(default)]
    text: Option<RichText>,
}
