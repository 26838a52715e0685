//! The draw-command list: the engine's only output.
//!
//! Commands are ordered; later commands paint over earlier ones. Positions
//! are absolute page coordinates in layout units, with text positioned at
//! its baseline. The list is renderer-agnostic: the PDF exporter and the
//! flowed preview are both interpreters over the same sequence.

use folio_style::FontSpec;
use folio_types::{Color, Point, Size};
use serde::{Deserialize, Serialize};

/// A run of text at a fixed baseline position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextCommand {
    pub origin: Point,
    pub content: String,
    /// Font size in points.
    pub size: f32,
    pub font: FontSpec,
    pub color: Color,
}

/// A stroked straight line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleCommand {
    pub from: Point,
    pub to: Point,
    pub color: Color,
    pub thickness: f32,
}

/// A filled rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectCommand {
    pub origin: Point,
    pub size: Size,
    pub color: Color,
}

/// A filled ellipse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseCommand {
    pub center: Point,
    pub radii: Size,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Text(TextCommand),
    Rule(RuleCommand),
    Rect(RectCommand),
    Ellipse(EllipseCommand),
}

impl DrawCommand {
    /// The text content, for commands that carry one.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            DrawCommand::Text(t) => Some(&t.content),
            _ => None,
        }
    }
}
