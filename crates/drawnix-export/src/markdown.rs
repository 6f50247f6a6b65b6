//! Markdown output.
//!
//! Mind trees become heading-and-bullet outlines ([`outline`]); free-form
//! drawings get their own section ([`drawing`]). When a board holds both, the
//! outlines come first and a horizontal rule separates them from the drawing.

pub mod drawing;
pub mod outline;

/// Separator between the mind-map outlines and the drawing section.
pub const SECTION_SEPARATOR: &str = "\n---\n\n";
