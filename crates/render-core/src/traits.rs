use crate::error::RenderError;
use folio_layout::LaidOutDocument;

/// An interpreter over a laid-out document.
///
/// Implementations must be pure functions of the document: rendering the
/// same command list twice yields the same output, so every sink derived
/// from one layout pass stays visually identical.
pub trait CommandRenderer {
    type Output;

    fn render(&self, document: &LaidOutDocument) -> Result<Self::Output, RenderError>;
}
