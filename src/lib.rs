//! # folio
//!
//! Portfolio document composition engine.
//!
//! Folio merges a selected subset of a student's records (education,
//! achievements, skills, certifications) with a visual template, lays the
//! result onto one fixed A4 page, and emits an abstract draw-command list.
//! Every output sink — the downloadable PDF, the self-contained data-URI
//! share payload and the DOM-flowable live preview — interprets that one
//! list, so the three can never disagree about content or order.
//!
//! ## Crates
//!
//! - **types**: colours and page geometry
//! - **records**: the immutable input snapshot
//! - **style**: the template registry (colours, frames, fonts, section order)
//! - **layout**: content selection, section planning, the layout engine
//! - **render-core**: the renderer abstraction
//! - **render-lopdf**: draw commands → PDF bytes / data URI
//! - **render-flow**: draw commands → flowed preview nodes / HTML
//! - **core**: the compose-once pipeline tying it together
//!
//! ## Design principle
//!
//! The engine is a pure function of caller-supplied data: no filesystem
//! access, no network, no cross-call state. Concurrent renderings for
//! different students need no coordination.

// Re-export foundation crates
pub use folio_records as records;
pub use folio_style as style;
pub use folio_types as types;

// Re-export algorithm crates
pub use folio_layout as layout;

// Re-export render crates
pub use folio_render_core as render_core;
pub use folio_render_flow as render_flow;
pub use folio_render_lopdf as render_lopdf;

// Re-export commonly used types
pub use folio_types::{Color, Point, Size};

pub use folio_records::{
    AchievementCategory, AchievementRecord, CertificationRecord, EducationRecord, Proficiency,
    Selection, SkillRecord, StudentProfile,
};

pub use folio_style::{
    lookup, templates, FontFamily, FontSpec, FontStyle, FontWeight, FrameKind, SectionKind,
    StyleError, TemplateStyle,
};

pub use folio_layout::{
    bucket_accepts, plan, render, select_achievements, select_skills, text_width, wrap_text,
    DrawCommand, LaidOutDocument,
};

pub use folio_render_core::{CommandRenderer, RenderError};
pub use folio_render_flow::{flow, to_html, FlowNode, FlowRenderer};
pub use folio_render_lopdf::{pdf_data_uri, render_pdf, PdfRenderer};

// Re-export the integration layer
pub use folio_core::{
    compose, export_data_uri, export_pdf, preview, preview_html, suggested_filename,
    ComposeRequest, PipelineError,
};
