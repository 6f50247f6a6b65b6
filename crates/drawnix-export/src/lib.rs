//! Drawnix Export - Markdown and Mermaid exporters for whiteboard snapshots.
//!
//! A board snapshot mixes mind-map trees with free-form shapes and
//! connectors. This crate converts it into two independent text encodings:
//!
//! - **Markdown**: each mind tree as a heading-and-bullet outline, followed by
//!   a section describing the free-form drawing.
//! - **Mermaid**: a `flowchart TD` document, built from the mind trees if the
//!   board has any and from the drawing otherwise.
//!
//! Conversion is pure and synchronous. Every call builds its own identifier
//! maps, so concurrent conversions of different snapshots are independent.

pub mod classify;
pub mod config;
pub mod markdown;
pub mod mermaid;
pub mod samples;
pub mod text;

mod error;
mod export;

pub use drawnix_export_core::{element, identifier, rich_text, shape, snapshot};

pub use error::{ConversionError, ExportError};
pub use export::{Export, ExportFormat, ExportStatus, FILE_STEM_PREFIX};

use std::collections::HashSet;

use log::{debug, info, warn};

use classify::{ElementClassifier, VariantClassifier};
use config::{AppConfig, DrawingStyle};
use element::{DiagramElement, MindNode};
use mermaid::Connectivity;
use snapshot::Snapshot;

/// Converts board snapshots into export documents.
///
/// # Examples
///
/// ```
/// use drawnix_export::{
///     Converter, ExportFormat, ExportStatus,
///     config::{AppConfig, Locale},
///     snapshot::Snapshot,
/// };
///
/// let snapshot = Snapshot::from_json(
///     r#"[{"id": "r", "type": "mindmap", "data": {"topic": "Plan"},
///          "children": [{"id": "a", "data": {"topic": "Research"}},
///                       {"id": "b", "data": {"topic": "Build"}}]}]"#,
/// )
/// .unwrap();
///
/// let converter = Converter::new(AppConfig::default().with_locale(Locale::En));
/// let export = converter.convert(&snapshot, ExportFormat::Markdown);
///
/// assert_eq!(export.status(), &ExportStatus::Converted);
/// assert_eq!(export.text(), "# Plan\n\n- Research\n- Build\n");
/// ```
#[derive(Debug, Default)]
pub struct Converter {
    config: AppConfig,
}

impl Converter {
    /// Create a new converter with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Convert a snapshot, classifying elements by variant.
    ///
    /// Never fails: a snapshot that cannot be converted yields the failure
    /// document of the configured locale, with the reason kept in
    /// [`ExportStatus::Failed`].
    pub fn convert(&self, snapshot: &Snapshot, format: ExportFormat) -> Export {
        self.convert_with(snapshot, format, &VariantClassifier)
    }

    /// Convert a snapshot using an external mind-family classifier.
    ///
    /// See [`Converter::convert`].
    pub fn convert_with(
        &self,
        snapshot: &Snapshot,
        format: ExportFormat,
        classifier: &impl ElementClassifier,
    ) -> Export {
        match self.try_convert_with(snapshot, format, classifier) {
            Ok(export) => export,
            Err(err) => {
                warn!(format:% = format, err:% = err; "Conversion failed, using failure document");
                let locale = self.config.text().locale();
                Export::new(
                    format,
                    samples::failure(format, locale).to_string(),
                    ExportStatus::Failed(err),
                    None,
                )
            }
        }
    }

    /// Convert a snapshot, classifying elements by variant.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::DuplicateId`] when two elements share an id.
    pub fn try_convert(
        &self,
        snapshot: &Snapshot,
        format: ExportFormat,
    ) -> Result<Export, ConversionError> {
        self.try_convert_with(snapshot, format, &VariantClassifier)
    }

    /// Convert a snapshot using an external mind-family classifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::DuplicateId`] when two elements share an id,
    /// and [`ConversionError::NotMindNode`] when `classifier` reports an
    /// element as mind-family that is not a mind tree.
    pub fn try_convert_with(
        &self,
        snapshot: &Snapshot,
        format: ExportFormat,
        classifier: &impl ElementClassifier,
    ) -> Result<Export, ConversionError> {
        info!(format:% = format, elements = snapshot.len(); "Converting snapshot");

        check_unique_ids(snapshot)?;
        let groups = Groups::classify(snapshot, classifier)?;
        debug!(
            mind_roots = groups.minds.len(),
            free_form = groups.free.len();
            "Elements classified"
        );

        let (text, connectivity) = match format {
            ExportFormat::Markdown => self.markdown(&groups)?,
            ExportFormat::Mermaid => self.mermaid(&groups)?,
        };

        let export = match text {
            Some(text) => Export::new(format, text, ExportStatus::Converted, connectivity),
            None => {
                info!(format:% = format; "Nothing to convert, using sample document");
                let locale = self.config.text().locale();
                Export::new(
                    format,
                    samples::sample(format, locale).to_string(),
                    ExportStatus::Sample,
                    None,
                )
            }
        };
        Ok(export)
    }

    fn markdown(
        &self,
        groups: &Groups<'_>,
    ) -> Result<(Option<String>, Option<Connectivity>), ConversionError> {
        let locale = self.config.text().locale();
        let mut sections = Vec::new();
        let mut connectivity = None;

        if !groups.minds.is_empty() {
            sections.push(markdown::outline::render_all(
                groups.minds.iter().copied(),
                locale,
            ));
        }

        if !groups.free.is_empty() {
            let section = match self.config.markdown().drawing() {
                DrawingStyle::Outline => markdown::drawing::outline(&groups.free, locale),
                DrawingStyle::Flowchart => {
                    let chart = mermaid::graph::render(
                        groups.free.iter().copied(),
                        self.config.mermaid().edge_inference(),
                        locale,
                    )?;
                    connectivity = Some(chart.connectivity());
                    markdown::drawing::fenced(&chart)
                }
            };
            sections.push(section);
        }

        let text = sections.join(markdown::SECTION_SEPARATOR);
        if text.trim().is_empty() {
            return Ok((None, None));
        }
        Ok((Some(text), connectivity))
    }

    fn mermaid(
        &self,
        groups: &Groups<'_>,
    ) -> Result<(Option<String>, Option<Connectivity>), ConversionError> {
        let locale = self.config.text().locale();

        if !groups.minds.is_empty() {
            let text = mermaid::mind::render(groups.minds.iter().copied(), locale);
            return Ok((Some(text), None));
        }

        if groups.free.is_empty() {
            return Ok((None, None));
        }
        let chart = mermaid::graph::render(
            groups.free.iter().copied(),
            self.config.mermaid().edge_inference(),
            locale,
        )?;
        info!(
            nodes = chart.node_count(),
            edges = chart.edge_count(),
            connectivity:? = chart.connectivity();
            "Drawing converted to flowchart"
        );
        let connectivity = chart.connectivity();
        Ok((Some(chart.into_text()), Some(connectivity)))
    }
}

/// Top-level elements split by mind-family classification.
struct Groups<'a> {
    minds: Vec<&'a MindNode>,
    free: Vec<&'a DiagramElement>,
}

impl<'a> Groups<'a> {
    fn classify(
        snapshot: &'a Snapshot,
        classifier: &impl ElementClassifier,
    ) -> Result<Self, ConversionError> {
        let mut minds = Vec::new();
        let mut free = Vec::new();

        for element in snapshot {
            if !classifier.is_mind_element(element) {
                free.push(element);
                continue;
            }
            match element.as_mind_node() {
                Some(root) => minds.push(root),
                None => {
                    return Err(ConversionError::NotMindNode {
                        id: element.id().to_string(),
                        kind: element.kind(),
                    });
                }
            }
        }

        Ok(Self { minds, free })
    }
}

/// Rejects snapshots in which an id appears twice, mind descendants included.
fn check_unique_ids(snapshot: &Snapshot) -> Result<(), ConversionError> {
    let mut seen = HashSet::new();
    let mut duplicate = None;

    for element in snapshot {
        match element {
            DiagramElement::MindNode(root) => root.visit(&mut |node, _| {
                if !seen.insert(node.id()) && duplicate.is_none() {
                    duplicate = Some(node.id());
                }
            }),
            other => {
                if !seen.insert(other.id()) && duplicate.is_none() {
                    duplicate = Some(other.id());
                }
            }
        }
        if let Some(id) = duplicate {
            return Err(ConversionError::DuplicateId { id: id.to_string() });
        }
    }
    Ok(())
}
