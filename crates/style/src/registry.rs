//! The fixed catalogue of built-in templates.

use crate::font::FontFamily;
use crate::section::SectionKind;
use crate::template::{FrameKind, TemplateStyle};
use folio_types::Color;
use once_cell::sync::Lazy;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StyleError {
    #[error("Unknown template: '{0}'")]
    UnknownTemplate(String),
}

static BUILT_IN: Lazy<Vec<TemplateStyle>> = Lazy::new(|| {
    use SectionKind::*;
    vec![
        TemplateStyle {
            id: "tech".into(),
            name: "Technology Professional".into(),
            description: "Clean, modern design perfect for tech professionals and developers".into(),
            primary: Color::rgb(0x25, 0x63, 0xeb),
            secondary: Color::rgb(0x3b, 0x82, 0xf6),
            accent: Color::rgb(0x1e, 0x40, 0xaf),
            frame: FrameKind::Modern,
            font: FontFamily::Helvetica,
            section_order: vec![Education, Skills, Projects, Certifications],
        },
        TemplateStyle {
            id: "research".into(),
            name: "Academic Excellence".into(),
            description: "Traditional academic layout for research professionals and scholars".into(),
            primary: Color::rgb(0x1f, 0x29, 0x37),
            secondary: Color::rgb(0x37, 0x41, 0x51),
            accent: Color::rgb(0x11, 0x18, 0x27),
            frame: FrameKind::Classic,
            font: FontFamily::Times,
            section_order: vec![Education, Research, Certifications, Skills],
        },
        TemplateStyle {
            id: "engineering".into(),
            name: "Engineering Excellence".into(),
            description: "Structured design emphasizing technical expertise and achievements".into(),
            primary: Color::rgb(0x0f, 0x76, 0x6e),
            secondary: Color::rgb(0x14, 0xb8, 0xa6),
            accent: Color::rgb(0x0d, 0x94, 0x88),
            frame: FrameKind::Structured,
            font: FontFamily::Courier,
            section_order: vec![Skills, Education, Projects, Certifications],
        },
        TemplateStyle {
            id: "creative".into(),
            name: "Creative Showcase".into(),
            description: "Dynamic design highlighting projects and creative achievements".into(),
            primary: Color::rgb(0xdc, 0x26, 0x26),
            secondary: Color::rgb(0xef, 0x44, 0x44),
            accent: Color::rgb(0xb9, 0x1c, 0x1c),
            frame: FrameKind::Artistic,
            font: FontFamily::Helvetica,
            section_order: vec![Education, Projects, Skills, Certifications],
        },
    ]
});

/// All built-in templates, in catalogue order.
pub fn templates() -> &'static [TemplateStyle] {
    &BUILT_IN
}

/// Resolves a template id against the catalogue.
pub fn lookup(id: &str) -> Result<&'static TemplateStyle, StyleError> {
    templates()
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| StyleError::UnknownTemplate(id.to_string()))
}
