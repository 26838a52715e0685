//! Draw commands → lopdf content stream → document bytes.

use folio_layout::config::{PAGE_HEIGHT, PAGE_WIDTH};
use folio_layout::{DrawCommand, EllipseCommand, LaidOutDocument, RectCommand, RuleCommand, TextCommand};
use folio_render_core::{CommandRenderer, RenderError};
use folio_style::{FontFamily, FontSpec, FontStyle, FontWeight};
use folio_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};
use std::io::Cursor;

/// Typographic points per layout unit (millimetre).
const PT_PER_MM: f32 = 72.0 / 25.4;

/// Circle/ellipse approximation constant for cubic Bézier quadrants.
const BEZIER_KAPPA: f32 = 0.552_284_75;

/// A PDF renderer over the draw-command list.
///
/// Stateless between calls; one `render` produces one single-page document.
#[derive(Debug, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRenderer for PdfRenderer {
    type Output = Vec<u8>;

    fn render(&self, document: &LaidOutDocument) -> Result<Vec<u8>, RenderError> {
        log::trace!("rendering {} draw commands to PDF", document.commands.len());

        let mut page = PageContext::new(document.font, PAGE_HEIGHT * PT_PER_MM);
        for command in &document.commands {
            page.draw(command);
        }
        let (content, used_faces) = page.finish();

        build_document(content, &used_faces)
    }
}

/// Resolves the opaque family plus a run's weight/slant to a Type1 base
/// font name. This mapping is renderer business; the layout engine never
/// sees face names.
fn face_name(family: FontFamily, font: FontSpec) -> &'static str {
    use FontStyle::*;
    use FontWeight::*;
    match (family, font.weight, font.style) {
        (FontFamily::Helvetica, Regular, Normal) => "Helvetica",
        (FontFamily::Helvetica, Bold, Normal) => "Helvetica-Bold",
        (FontFamily::Helvetica, Regular, Italic) => "Helvetica-Oblique",
        (FontFamily::Helvetica, Bold, Italic) => "Helvetica-BoldOblique",
        (FontFamily::Times, Regular, Normal) => "Times-Roman",
        (FontFamily::Times, Bold, Normal) => "Times-Bold",
        (FontFamily::Times, Regular, Italic) => "Times-Italic",
        (FontFamily::Times, Bold, Italic) => "Times-BoldItalic",
        (FontFamily::Courier, Regular, Normal) => "Courier",
        (FontFamily::Courier, Bold, Normal) => "Courier-Bold",
        (FontFamily::Courier, Regular, Italic) => "Courier-Oblique",
        (FontFamily::Courier, Bold, Italic) => "Courier-BoldOblique",
    }
}

/// WinAnsi is a superset of Latin-1 for our purposes: anything above U+00FF
/// is replaced.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars().map(|c| if c as u32 <= 255 { c as u8 } else { b'?' }).collect()
}

#[derive(Default, Clone, PartialEq)]
struct GraphicsState {
    font_name: String,
    font_size: f32,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: f32,
}

/// Accumulates content-stream operations for the single page, tracking
/// graphics state so fonts and colours are only re-set when they change.
struct PageContext {
    family: FontFamily,
    page_height: f32,
    operations: Vec<Operation>,
    state: GraphicsState,
    /// Base-font names in first-use order; index+1 is the `F<n>` resource name.
    used_faces: Vec<&'static str>,
}

impl PageContext {
    fn new(family: FontFamily, page_height: f32) -> Self {
        Self {
            family,
            page_height,
            operations: Vec::new(),
            state: GraphicsState::default(),
            used_faces: Vec::new(),
        }
    }

    fn finish(self) -> (Content, Vec<&'static str>) {
        (Content { operations: self.operations }, self.used_faces)
    }

    fn x(&self, mm: f32) -> f32 {
        mm * PT_PER_MM
    }

    /// Page coordinates are top-down; PDF user space is bottom-up.
    fn y(&self, mm: f32) -> f32 {
        self.page_height - mm * PT_PER_MM
    }

    fn internal_font_name(&mut self, face: &'static str) -> String {
        let index = match self.used_faces.iter().position(|f| *f == face) {
            Some(i) => i,
            None => {
                self.used_faces.push(face);
                self.used_faces.len() - 1
            }
        };
        format!("F{}", index + 1)
    }

    fn set_font(&mut self, font: FontSpec, size: f32) {
        let face = face_name(self.family, font);
        let internal = self.internal_font_name(face);
        if self.state.font_name != internal || self.state.font_size != size {
            self.operations.push(Operation::new(
                "Tf",
                vec![Object::Name(internal.as_bytes().to_vec()), size.into()],
            ));
            self.state.font_name = internal;
            self.state.font_size = size;
        }
    }

    fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.operations.push(Operation::new(
                "rg",
                vec![
                    (color.r as f32 / 255.0).into(),
                    (color.g as f32 / 255.0).into(),
                    (color.b as f32 / 255.0).into(),
                ],
            ));
            self.state.fill_color = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Color, width: f32) {
        if self.state.stroke_color != Some(color) {
            self.operations.push(Operation::new(
                "RG",
                vec![
                    (color.r as f32 / 255.0).into(),
                    (color.g as f32 / 255.0).into(),
                    (color.b as f32 / 255.0).into(),
                ],
            ));
            self.state.stroke_color = Some(color);
        }
        if self.state.line_width != width {
            self.operations
                .push(Operation::new("w", vec![width.into()]));
            self.state.line_width = width;
        }
    }

    fn draw(&mut self, command: &DrawCommand) {
        match command {
            DrawCommand::Text(text) => self.draw_text(text),
            DrawCommand::Rule(rule) => self.draw_rule(rule),
            DrawCommand::Rect(rect) => self.draw_rect(rect),
            DrawCommand::Ellipse(ellipse) => self.draw_ellipse(ellipse),
        }
    }

    fn draw_text(&mut self, text: &TextCommand) {
        if text.content.trim().is_empty() {
            return;
        }
        self.operations.push(Operation::new("BT", vec![]));
        self.set_font(text.font, text.size);
        self.set_fill_color(text.color);
        let x = self.x(text.origin.x);
        // The command origin is the text baseline already.
        let y = self.y(text.origin.y);
        self.operations
            .push(Operation::new("Td", vec![x.into(), y.into()]));
        self.operations.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        ));
        self.operations.push(Operation::new("ET", vec![]));
    }

    fn draw_rule(&mut self, rule: &RuleCommand) {
        self.set_stroke(rule.color, rule.thickness * PT_PER_MM);
        let (x1, y1) = (self.x(rule.from.x), self.y(rule.from.y));
        let (x2, y2) = (self.x(rule.to.x), self.y(rule.to.y));
        self.operations
            .push(Operation::new("m", vec![x1.into(), y1.into()]));
        self.operations
            .push(Operation::new("l", vec![x2.into(), y2.into()]));
        self.operations.push(Operation::new("S", vec![]));
    }

    fn draw_rect(&mut self, rect: &RectCommand) {
        self.set_fill_color(rect.color);
        let x = self.x(rect.origin.x);
        let y = self.y(rect.origin.y + rect.size.height);
        let width = rect.size.width * PT_PER_MM;
        let height = rect.size.height * PT_PER_MM;
        self.operations.push(Operation::new(
            "re",
            vec![x.into(), y.into(), width.into(), height.into()],
        ));
        self.operations.push(Operation::new("f", vec![]));
    }

    fn draw_ellipse(&mut self, ellipse: &EllipseCommand) {
        self.set_fill_color(ellipse.color);
        let cx = self.x(ellipse.center.x);
        let cy = self.y(ellipse.center.y);
        let rx = ellipse.radii.width * PT_PER_MM;
        let ry = ellipse.radii.height * PT_PER_MM;
        let kx = rx * BEZIER_KAPPA;
        let ky = ry * BEZIER_KAPPA;

        self.operations
            .push(Operation::new("m", vec![(cx + rx).into(), cy.into()]));
        // Four Bézier quadrants, counter-clockwise in user space.
        self.operations.push(Operation::new(
            "c",
            vec![
                (cx + rx).into(), (cy + ky).into(),
                (cx + kx).into(), (cy + ry).into(),
                cx.into(), (cy + ry).into(),
            ],
        ));
        self.operations.push(Operation::new(
            "c",
            vec![
                (cx - kx).into(), (cy + ry).into(),
                (cx - rx).into(), (cy + ky).into(),
                (cx - rx).into(), cy.into(),
            ],
        ));
        self.operations.push(Operation::new(
            "c",
            vec![
                (cx - rx).into(), (cy - ky).into(),
                (cx - kx).into(), (cy - ry).into(),
                cx.into(), (cy - ry).into(),
            ],
        ));
        self.operations.push(Operation::new(
            "c",
            vec![
                (cx + kx).into(), (cy - ry).into(),
                (cx + rx).into(), (cy - ky).into(),
                (cx + rx).into(), cy.into(),
            ],
        ));
        self.operations.push(Operation::new("f", vec![]));
    }
}

/// Assembles the one-page document around the finished content stream.
fn build_document(content: Content, used_faces: &[&'static str]) -> Result<Vec<u8>, RenderError> {
    let page_width = PAGE_WIDTH * PT_PER_MM;
    let page_height = PAGE_HEIGHT * PT_PER_MM;

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let encoded = content
        .encode()
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));

    let mut font_dict = Dictionary::new();
    for (index, face) in used_faces.iter().enumerate() {
        let single_font_dict = dictionary! {
            "Type" => "Font", "Subtype" => "Type1", "BaseFont" => *face, "Encoding" => "WinAnsiEncoding",
        };
        font_dict.set(
            format!("F{}", index + 1).into_bytes(),
            Object::Dictionary(single_font_dict),
        );
    }
    let resources_id = doc.add_object(dictionary! { "Font" => Object::Dictionary(font_dict) });

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), page_width.into(), page_height.into()],
        "Contents" => content_id,
        "Resources" => resources_id,
    });

    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => vec![Object::Reference(page_id)],
        "Count" => 1,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Cursor::new(Vec::new());
    doc.save_to(&mut buffer)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    Ok(buffer.into_inner())
}
