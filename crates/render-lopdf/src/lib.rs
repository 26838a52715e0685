//! PDF output sink.
//!
//! Interprets a laid-out document into one A4 page of PDF, using the
//! WinAnsi-encoded Type1 base fonts, and wraps the resulting bytes into the
//! self-contained data-URI share payload.

pub mod renderer;

pub use renderer::PdfRenderer;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use folio_layout::LaidOutDocument;
use folio_render_core::{CommandRenderer, RenderError};

/// Renders a laid-out document into PDF bytes.
pub fn render_pdf(document: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
    PdfRenderer::new().render(document)
}

/// Self-encodes PDF bytes as a `data:` URI openable without any server-side
/// storage. Session-scoped convenience, not a durable artifact.
pub fn pdf_data_uri(bytes: &[u8]) -> String {
    format!("data:application/pdf;base64,{}", STANDARD.encode(bytes))
}
