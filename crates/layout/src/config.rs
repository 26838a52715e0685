//! Fixed page model, in layout units (millimetres on an A4 sheet).

/// Page width.
pub const PAGE_WIDTH: f32 = 210.0;
/// Page height.
pub const PAGE_HEIGHT: f32 = 297.0;

/// Height of the filled header band.
pub const HEADER_HEIGHT: f32 = 45.0;
/// First body baseline below the header band.
pub const BODY_TOP: f32 = 60.0;

/// Left margin for titles and primary lines.
pub const MARGIN_LEFT: f32 = 20.0;
/// Indent for secondary lines (wrapped bodies, metadata).
pub const INDENT_LEFT: f32 = 25.0;
/// Right edge of the printable content area.
pub const CONTENT_RIGHT: f32 = 190.0;
/// Horizontal centre, for the footer caption.
pub const PAGE_CENTER: f32 = PAGE_WIDTH / 2.0;

/// A section starting past this offset is dropped whole.
pub const SECTION_CUTOFF: f32 = 250.0;
/// An individual achievement starting past this offset is dropped.
pub const RECORD_CUTOFF: f32 = 240.0;

/// Baseline of the footer caption.
pub const FOOTER_Y: f32 = 290.0;
/// Inset of the decorative page border from every edge.
pub const BORDER_INSET: f32 = 10.0;

/// Thickness of section separator rules.
pub const RULE_THICKNESS: f32 = 0.3;
/// Thickness of the page border rules.
pub const BORDER_THICKNESS: f32 = 0.7;

/// Wrap width for the joined skills line.
pub const SKILLS_WRAP_WIDTH: f32 = 170.0;
/// Wrap width for achievement descriptions.
pub const DESCRIPTION_WRAP_WIDTH: f32 = 165.0;
/// Vertical step between wrapped body lines.
pub const WRAPPED_LINE_STEP: f32 = 4.0;
