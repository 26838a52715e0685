//! Single-page layout engine.
//!
//! Turns a selected slice of a student's records plus a template style into
//! an ordered [`DrawCommand`] list in fixed page coordinates. The list is
//! the one shared source for every sink: the PDF exporter, the share
//! payload and the flowed preview all interpret the same commands, so the
//! three can never drift apart.
//!
//! The engine is a pure function of its inputs: no I/O, no ambient state,
//! safe to call concurrently for different students.

pub mod command;
pub mod config;
pub mod engine;
pub mod metrics;
pub mod output;
pub mod planner;
pub mod selector;
pub mod wrap;

pub use command::{DrawCommand, EllipseCommand, RectCommand, RuleCommand, TextCommand};
pub use engine::render;
pub use metrics::text_width;
pub use output::LaidOutDocument;
pub use planner::{bucket_accepts, plan};
pub use selector::{select_achievements, select_skills};
pub use wrap::wrap_text;

#[cfg(test)]
mod test_utils;
