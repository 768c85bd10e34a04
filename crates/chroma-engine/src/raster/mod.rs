//! CPU rasterization of draw lists.
//!
//! Replaces a platform drawing context: the same draw list can be replayed into
//! a full-size [`Pixmap`] for display/export or into a 1×1 target to read back
//! the composited color under a single point.

mod error;
mod pixmap;
mod rasterizer;

pub use error::RasterError;
pub use pixmap::Pixmap;
pub use rasterizer::Rasterizer;
