//! Drawnix Export Core Types
//!
//! This crate provides the board snapshot model consumed by the drawnix text
//! exporters. It includes:
//!
//! - **Rich text**: The nested inline-text value carried by topics and shapes ([`rich_text::RichText`])
//! - **Elements**: The closed set of board element variants ([`element::DiagramElement`])
//! - **Shapes**: Geometry shape tags ([`shape::ShapeKind`])
//! - **Snapshot**: An ordered, read-only view of a board ([`snapshot::Snapshot`])
//! - **Identifiers**: Synthetic node identifiers for flowchart output ([`identifier::SyntheticIds`])

pub mod element;
pub mod identifier;
mod lenient;
pub mod rich_text;
pub mod shape;
pub mod snapshot;
