//! Visual template model and the built-in template registry.
//!
//! A [`TemplateStyle`] bundles everything the layout engine needs to know
//! about a look: the colour triplet, the decorative frame, the (opaque)
//! font family and the section order. The registry is a fixed catalogue;
//! looking up an id outside it is the engine's only hard error.

pub mod font;
pub mod registry;
pub mod section;
pub mod template;

pub use font::{FontFamily, FontSpec, FontStyle, FontWeight};
pub use registry::{lookup, templates, StyleError};
pub use section::SectionKind;
pub use template::{FrameKind, TemplateStyle};
