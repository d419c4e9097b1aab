//! Coordinate and geometry types shared by the sprite core and hosts.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Values are `f64` so per-tick sprite displacement keeps sub-pixel precision
//! across long runs.

mod bounding_box;
mod rect;
mod vec2;
mod viewport;

pub use bounding_box::BoundingBox;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
