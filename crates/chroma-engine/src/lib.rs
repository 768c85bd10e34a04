//! Chroma engine crate.
//!
//! Geometry, color and gradient model, draw lists, and the CPU rasterizer that
//! turns draw lists into pixels. Also hosts the platform-agnostic gesture input
//! types consumed by `chroma-ui`.

pub mod coords;
pub mod input;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod scene;
