//! Flowed preview sink.
//!
//! Interprets the same draw-command list the exporters consume, but as
//! document-ordered flow content instead of absolute-positioned
//! primitives: text runs become paragraphs, rules become dividers, filled
//! shapes (pure page decoration) are dropped. Because the engine's command
//! order is reading order, a plain in-order walk reproduces the exported
//! document's content and sequence exactly.

pub mod html;

pub use html::to_html;

use folio_layout::{DrawCommand, LaidOutDocument};
use folio_render_core::{CommandRenderer, RenderError};
use folio_style::FontSpec;
use folio_types::Color;
use serde::{Deserialize, Serialize};

/// One flowed block of the preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FlowNode {
    Paragraph {
        text: String,
        /// Font size in points, as styled by the layout pass.
        size: f32,
        font: FontSpec,
        color: Color,
    },
    Divider {
        color: Color,
    },
}

/// The flow interpreter.
#[derive(Debug, Default)]
pub struct FlowRenderer;

impl FlowRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRenderer for FlowRenderer {
    type Output = Vec<FlowNode>;

    fn render(&self, document: &LaidOutDocument) -> Result<Vec<FlowNode>, RenderError> {
        Ok(flow(&document.commands))
    }
}

/// Walks the command list in paint order and keeps the flowable content.
pub fn flow(commands: &[DrawCommand]) -> Vec<FlowNode> {
    commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Text(text) => Some(FlowNode::Paragraph {
                text: text.content.clone(),
                size: text.size,
                font: text.font,
                color: text.color,
            }),
            DrawCommand::Rule(rule) => Some(FlowNode::Divider { color: rule.color }),
            DrawCommand::Rect(_) | DrawCommand::Ellipse(_) => None,
        })
        .collect()
}
