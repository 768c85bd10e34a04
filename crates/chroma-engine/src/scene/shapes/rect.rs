use crate::coords::Rect;
use crate::paint::{Color, LinearGradient, Paint};
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Axis-aligned rectangle fill.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, paint: Paint) -> Self {
        Self { rect, paint }
    }
}

impl DrawList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, paint: Paint) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, paint)));
    }

    /// Records a solid rectangle draw command.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push_rect(z, rect, Paint::Solid(color));
    }

    /// Records a rectangle filled with a linear gradient.
    ///
    /// The gradient's start/end points are in the same space as `rect`; the
    /// edge colors extend over the parts of `rect` outside the gradient axis.
    #[inline]
    pub fn push_gradient_rect(&mut self, z: ZIndex, rect: Rect, gradient: LinearGradient) {
        self.push_rect(z, rect, Paint::LinearGradient(gradient));
    }
}
