//! Presentation-ready values produced by the enrichment engine.
//!
//! These are plain data handed to a rendering layer; none of them carry
//! markup. Each type has a `Display` impl giving its plain-text rendering.

mod color;
mod permission;
mod size;
mod text;

pub use color::ColorToken;
pub use permission::{PermissionDisplay, PermissionKind};
pub use size::{SizeMagnitude, SizeUnit};
pub use text::{FormattedText, TextSegment};
