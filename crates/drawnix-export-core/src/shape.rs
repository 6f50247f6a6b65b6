//! Geometry shape tags.
//!
//! Board geometry elements carry a free-form `shape` string. The exporters only
//! distinguish a handful of them, everything else is preserved verbatim in
//! [`ShapeKind::Other`] so it can still be named in outlines.

use std::fmt;

use serde::Deserialize;

/// The shape tag of a geometry or text element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Ellipse,
    Diamond,
    RoundRectangle,
    Triangle,
    /// Any other shape tag, kept as written.
    Other(String),
}

impl ShapeKind {
    /// Returns the tag as it appears in board documents.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Diamond => "diamond",
            Self::RoundRectangle => "roundRectangle",
            Self::Triangle => "triangle",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for ShapeKind {
    fn from(tag: &str) -> Self {
        match tag {
            "rectangle" => Self::Rectangle,
            "ellipse" => Self::Ellipse,
            "diamond" => Self::Diamond,
            "roundRectangle" => Self::RoundRectangle,
            "triangle" => Self::Triangle,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for ShapeKind {
    fn from(tag: String) -> Self {
        match Self::from(tag.as_str()) {
            Self::Other(_) => Self::Other(tag),
            known => known,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
