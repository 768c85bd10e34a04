//! Paint model shared between UI and the rasterizer.
//!
//! Scope:
//! - compositing color representation (premultiplied alpha)
//! - paint sources (solid, linear gradients)
//!
//! Geometry and the straight-alpha `ColorRgba` remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, GradientError, LinearGradient};

use crate::coords::Vec2;

/// Paint source for filling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl Paint {
    /// Premultiplied color this paint produces at `p`.
    #[inline]
    pub fn shade(&self, p: Vec2) -> Color {
        match self {
            Paint::Solid(c) => *c,
            Paint::LinearGradient(g) => Color::from(g.color_at(p)),
        }
    }
}
