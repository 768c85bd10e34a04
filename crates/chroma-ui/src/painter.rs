use chroma_engine::coords::Rect;
use chroma_engine::paint::{Color, LinearGradient};
use chroma_engine::scene::{DrawList, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList`; each fill gets the next z-index, so later
/// fills composite over earlier ones.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_solid_rect(z, rect, color);
    }

    /// Rectangle filled with a linear gradient, composited over what is already drawn.
    pub fn fill_gradient(&mut self, rect: Rect, gradient: LinearGradient) {
        let z = self.next_z();
        self.draw_list.push_gradient_rect(z, rect, gradient);
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}
