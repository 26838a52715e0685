//! The unified error type for all composition and export operations.

use folio_render_core::RenderError;
use folio_style::StyleError;
use thiserror::Error;

/// The main error enum for high-level operations.
///
/// `Style` (an unknown template id) is the only error the engine itself
/// raises; everything else the engine absorbs as empty or omitted content.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Template error: {0}")]
    Style(#[from] StyleError),
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}
