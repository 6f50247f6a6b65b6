//! Mind-family classification of board elements.
//!
//! Whether an element belongs to the mind-map family is decided by the board
//! engine that owns the elements, so the converter asks an
//! [`ElementClassifier`] instead of deciding on its own. [`VariantClassifier`]
//! answers from the element variant and is what [`Converter`](crate::Converter)
//! uses unless told otherwise.

use drawnix_export_core::element::DiagramElement;

/// Decides which top-level elements are mind-map trees.
pub trait ElementClassifier {
    fn is_mind_element(&self, element: &DiagramElement) -> bool;
}

/// Classifies by variant: exactly the [`DiagramElement::MindNode`] elements
/// are mind-family.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantClassifier;

impl ElementClassifier for VariantClassifier {
    fn is_mind_element(&self, element: &DiagramElement) -> bool {
        matches!(element, DiagramElement::MindNode(_))
    }
}

impl<F> ElementClassifier for F
where
    F: Fn(&DiagramElement) -> bool,
{
    fn is_mind_element(&self, element: &DiagramElement) -> bool {
        self(element)
    }
}
