//! Configuration types for the drawnix exporters.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file by the CLI or any other front end.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`TextConfig`] - Language of placeholders and literal documents.
//! - [`MarkdownConfig`] - How free-form drawings appear in Markdown output.
//! - [`MermaidConfig`] - Edge inference policy for flowchart output.
//!
//! # Example
//!
//! ```
//! # use drawnix_export::config::{AppConfig, EdgeInference, Locale};
//! let config = AppConfig::default();
//! assert_eq!(config.text().locale(), Locale::Zh);
//! assert_eq!(config.mermaid().edge_inference(), EdgeInference::None);
//! ```

use serde::Deserialize;

/// Top-level exporter configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Text and language section.
    #[serde(default)]
    text: TextConfig,

    /// Markdown output section.
    #[serde(default)]
    markdown: MarkdownConfig,

    /// Mermaid output section.
    #[serde(default)]
    mermaid: MermaidConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(text: TextConfig, markdown: MarkdownConfig, mermaid: MermaidConfig) -> Self {
        Self {
            text,
            markdown,
            mermaid,
        }
    }

    /// Returns the text configuration.
    pub fn text(&self) -> &TextConfig {
        &self.text
    }

    /// Returns the Markdown configuration.
    pub fn markdown(&self) -> &MarkdownConfig {
        &self.markdown
    }

    /// Returns the Mermaid configuration.
    pub fn mermaid(&self) -> &MermaidConfig {
        &self.mermaid
    }

    /// Returns a copy with the given locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.text = TextConfig::new(locale);
        self
    }

    /// Returns a copy with the given drawing style.
    pub fn with_drawing_style(mut self, drawing: DrawingStyle) -> Self {
        self.markdown = MarkdownConfig::new(drawing);
        self
    }

    /// Returns a copy with the given edge inference policy.
    pub fn with_edge_inference(mut self, edge_inference: EdgeInference) -> Self {
        self.mermaid = MermaidConfig::new(edge_inference);
        self
    }
}

/// Language used for placeholders, headings and literal documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Zh,
    En,
}

impl Locale {
    /// Text used for a node whose content cannot be recovered.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Zh => "未命名节点",
            Self::En => "unnamed node",
        }
    }
}

/// Text configuration section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextConfig {
    #[serde(default)]
    locale: Locale,
}

impl TextConfig {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Returns the configured [`Locale`].
    pub fn locale(&self) -> Locale {
        self.locale
    }
}

/// How free-form shapes and connectors appear in Markdown output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawingStyle {
    /// A bullet list naming each shape, text box and connector.
    #[default]
    Outline,
    /// A fenced `mermaid` block holding the flowchart of the drawing.
    Flowchart,
}

/// Markdown configuration section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarkdownConfig {
    #[serde(default)]
    drawing: DrawingStyle,
}

impl MarkdownConfig {
    pub fn new(drawing: DrawingStyle) -> Self {
        Self { drawing }
    }

    /// Returns the configured [`DrawingStyle`].
    pub fn drawing(&self) -> DrawingStyle {
        self.drawing
    }
}

/// What the flowchart exporter does when no connector resolves to an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeInference {
    /// Emit the nodes without edges and report the drawing as unconnected.
    #[default]
    None,
    /// Chain the nodes in discovery order (`A --> B --> C …`).
    LinearChain,
}

/// Mermaid configuration section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MermaidConfig {
    #[serde(default)]
    edge_inference: EdgeInference,
}

impl MermaidConfig {
    pub fn new(edge_inference: EdgeInference) -> Self {
        Self { edge_inference }
    }

    /// Returns the configured [`EdgeInference`] policy.
    pub fn edge_inference(&self) -> EdgeInference {
        self.edge_inference
    }
}
