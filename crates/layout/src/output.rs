//! Output type of a layout pass.

use crate::command::DrawCommand;
use folio_style::FontFamily;
use serde::{Deserialize, Serialize};

/// The result of laying out one portfolio.
///
/// Carries the command list plus the one resource a renderer needs to
/// interpret it: the document's opaque font family. Renderers resolve the
/// family to concrete faces; the commands themselves never name one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutDocument {
    pub font: FontFamily,
    pub commands: Vec<DrawCommand>,
}
