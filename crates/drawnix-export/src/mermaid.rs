//! Mermaid flowchart output.
//!
//! - [`graph`] converts free-form shapes and connectors.
//! - [`mind`] converts mind-map trees.
//! - [`syntax`] holds the node decorations and line formats both share.

pub mod graph;
pub mod mind;
pub mod syntax;

pub use graph::{Connectivity, GraphOutput};
