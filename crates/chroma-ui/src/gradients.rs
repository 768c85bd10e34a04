//! The two fixed gradient ramps drawn by the color picker.

use chroma_engine::coords::{ColorRgba, Rect, Vec2};
use chroma_engine::paint::{ColorStop, LinearGradient};

/// Which of the picker's two stacked ramps.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum GradientKind {
    /// Vertical spectrum, top to bottom.
    Hue,
    /// Horizontal white-to-black overlay with varying alpha, left to right.
    Transparency,
}

const HUE_STOPS: [(f32, [f32; 4]); 7] = [
    (0.0, [1.0, 0.0, 0.0, 1.0]),
    (0.1, [0.89, 0.0, 0.47, 1.0]),
    (0.32, [0.0, 0.0, 1.0, 1.0]),
    (0.5, [0.08, 0.65, 0.88, 1.0]),
    (0.64, [0.07, 0.6, 0.24, 1.0]),
    (0.80, [1.0, 1.0, 0.0, 1.0]),
    (1.0, [0.89, 0.06, 0.1, 1.0]),
];

const TRANSPARENCY_STOPS: [(f32, [f32; 4]); 5] = [
    (0.0, [1.0, 1.0, 1.0, 1.0]),
    (0.35, [1.0, 1.0, 1.0, 0.3]),
    (0.5, [0.0, 0.0, 0.0, 0.0]),
    (0.85, [0.0, 0.0, 0.0, 0.3]),
    (1.0, [0.0, 0.0, 0.0, 0.8]),
];

impl GradientKind {
    /// Paint order: hue first, transparency composited over it.
    pub const ALL: [GradientKind; 2] = [GradientKind::Hue, GradientKind::Transparency];

    /// The ramp's stop table, positions strictly increasing in [0, 1].
    pub fn stops(self) -> Vec<ColorStop> {
        let table: &[(f32, [f32; 4])] = match self {
            GradientKind::Hue => &HUE_STOPS,
            GradientKind::Transparency => &TRANSPARENCY_STOPS,
        };
        table
            .iter()
            .map(|&(t, [r, g, b, a])| ColorStop::new(t, ColorRgba::new(r, g, b, a)))
            .collect()
    }

    /// Start and end points spanning `bounds`.
    ///
    /// Hue runs down the vertical center line; transparency runs across the
    /// horizontal center line.
    pub fn axis(self, bounds: Rect) -> (Vec2, Vec2) {
        let c = bounds.center();
        let max = bounds.max();
        match self {
            GradientKind::Hue => (Vec2::new(c.x, bounds.origin.y), Vec2::new(c.x, max.y)),
            GradientKind::Transparency => (Vec2::new(bounds.origin.x, c.y), Vec2::new(max.x, c.y)),
        }
    }

    /// The ramp laid out over `bounds`, padded before the start point.
    pub fn gradient(self, bounds: Rect) -> LinearGradient {
        let (start, end) = self.axis(bounds);
        LinearGradient::new(start, end, self.stops())
    }
}
