//! Renderer abstraction.
//!
//! Every output sink is an interpreter over one [`LaidOutDocument`]: the
//! PDF exporter turns it into bytes, the flow renderer into DOM-flowable
//! nodes. Keeping both behind the same trait is what guarantees preview,
//! download and share can never show different content.

pub mod error;
pub mod traits;

pub use error::RenderError;
pub use traits::CommandRenderer;
