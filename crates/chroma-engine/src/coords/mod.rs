//! Coordinate and geometry types shared across the rasterizer and UI.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down

mod color;
mod rect;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub(crate) use color::unit_to_u8;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
