//! Rich text values carried by mind topics, shapes and connector labels.
//!
//! Board elements store their text as a nested inline-text tree (a Slate-style
//! paragraph with leaf children), but older boards and hand-written snapshots
//! also use bare strings, bare arrays of leaves, or objects that only expose an
//! alternate field such as `label` or `data.text`. [`RichText`] models all of
//! these as one recursive sum type so callers can flatten them without probing
//! JSON shapes at runtime.
//!
//! # Example
//!
//! ```
//! # use drawnix_export_core::rich_text::RichText;
//! let topic = RichText::paragraph(vec![RichText::leaf("Hello, "), RichText::leaf("board")]);
//! assert_eq!(topic.literal(), "Hello, board");
//! ```

use serde::Deserialize;

use crate::lenient;

/// A text-bearing value of arbitrary nesting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RichText {
    /// A bare string.
    Plain(String),

    /// A bare array of inline nodes, concatenated in order.
    Fragments(Vec<RichText>),

    /// An object node: either a composite with `children`, a leaf with
    /// `text`, or an object exposing one of the alternate text fields.
    Node(Box<TextNode>),

    /// Any other value (numbers, booleans). Carries no text.
    Opaque(serde_json::Value),
}

impl RichText {
    /// Creates a bare string value.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Creates a leaf node exposing `text`.
    pub fn leaf(text: impl Into<String>) -> Self {
        Self::Node(Box::new(TextNode::new().with_text(Self::plain(text))))
    }

    /// Creates a composite node with the given ordered children.
    pub fn paragraph(children: Vec<RichText>) -> Self {
        Self::Node(Box::new(TextNode::new().with_children(children)))
    }

    /// Creates an object node from a fully built [`TextNode`].
    pub fn node(node: TextNode) -> Self {
        Self::Node(Box::new(node))
    }

    /// Returns the Slate-style string of this value.
    ///
    /// Plain strings pass through, fragments and children are concatenated
    /// recursively with no separator, and a node without children yields the
    /// literal of its `text`. Alternate fields are not consulted.
    pub fn literal(&self) -> String {
        let mut out = String::new();
        self.write_literal(&mut out);
        out
    }

    fn write_literal(&self, out: &mut String) {
        match self {
            Self::Plain(text) => out.push_str(text),
            Self::Fragments(items) => items.iter().for_each(|item| item.write_literal(out)),
            Self::Node(node) => node.write_literal(out),
            Self::Opaque(_) => {}
        }
    }
}

impl From<&str> for RichText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for RichText {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

/// An object node of the rich text tree.
///
/// Shapes and text boxes flatten this structure into their own JSON object,
/// so the same fields describe both a nested paragraph and the text-bearing
/// surface of a board element.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextNode {
    #[serde(default, deserialize_with = "lenient::or_default")]
    children: Vec<RichText>,

    #[serde(default)]
    text: Option<RichText>,

    #[serde(default, deserialize_with = "lenient::string")]
    content: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    label: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    text_content: Option<String>,

    #[serde(default, deserialize_with = "lenient::or_default")]
    data: Option<TextData>,
}

impl TextNode {
    /// Creates an empty node.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_children(mut self, children: Vec<RichText>) -> Self {
        self.children = children;
        self
    }

    pub fn with_text(mut self, text: RichText) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_text_content(mut self, text_content: impl Into<String>) -> Self {
        self.text_content = Some(text_content.into());
        self
    }

    pub fn with_data(mut self, data: TextData) -> Self {
        self.data = Some(data);
        self
    }

    /// Returns the ordered inline children.
    pub fn children(&self) -> &[RichText] {
        &self.children
    }

    /// Returns the `text` leaf, if any.
    pub fn text(&self) -> Option<&RichText> {
        self.text.as_ref()
    }

    /// Returns the alternate text fields in probing order:
    /// `content`, `label`, `textContent`, `data.text`, `data.label`.
    pub fn alternates(&self) -> [Option<&str>; 5] {
        let data = self.data.as_ref();
        [
            self.content.as_deref(),
            self.label.as_deref(),
            self.text_content.as_deref(),
            data.and_then(|data| data.text.as_deref()),
            data.and_then(|data| data.label.as_deref()),
        ]
    }

    fn write_literal(&self, out: &mut String) {
        if !self.children.is_empty() {
            self.children
                .iter()
                .for_each(|child| child.write_literal(out));
        } else if let Some(text) = &self.text {
            text.write_literal(out);
        }
    }
}

/// The nested `data` object some elements use for their text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TextData {
    #[serde(default, deserialize_with = "lenient::string")]
    text: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    label: Option<String>,
}

impl TextData {
    /// Creates a `data` object with the given `text` and `label` fields.
    pub fn new(text: Option<String>, label: Option<String>) -> Self {
        Self { text, label }
    }
}
