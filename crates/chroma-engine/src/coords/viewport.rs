use super::{Rect, Vec2};

/// Viewport size in logical pixels.
///
/// Render targets are allocated at this size rounded up to whole pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    #[inline]
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Pixel dimensions of a render target covering this viewport.
    #[inline]
    pub fn pixel_size(self) -> (u32, u32) {
        (self.width.max(0.0).ceil() as u32, self.height.max(0.0).ceil() as u32)
    }
}
