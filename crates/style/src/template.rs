use crate::font::FontFamily;
use crate::section::SectionKind;
use folio_types::Color;
use serde::{Deserialize, Serialize};

/// Decorative treatment of the header band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    #[default]
    None,
    Modern,
    Classic,
    Structured,
    Artistic,
}

/// A complete visual template: colours, frame, font and section order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateStyle {
    pub id: String,
    pub name: String,
    pub description: String,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub frame: FrameKind,
    pub font: FontFamily,
    pub section_order: Vec<SectionKind>,
}
