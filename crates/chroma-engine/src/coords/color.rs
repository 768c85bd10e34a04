/// Straight-alpha RGBA color.
///
/// This is the color type exchanged with callers: gradient stops, picked colors
/// and swatch backgrounds. Channels are expected in `[0, 1]`; use [`clamped`]
/// on values coming from arithmetic.
///
/// The rasterizer converts to premultiplied [`crate::paint::Color`] before compositing.
///
/// [`clamped`]: ColorRgba::clamped
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Gray at `level` (0 = black, 1 = white) with the given alpha.
    #[inline]
    pub fn gray(level: f32, alpha: f32) -> Self {
        let v = level.clamp(0.0, 1.0);
        Self::new(v, v, v, alpha.clamp(0.0, 1.0))
    }

    /// Straight RGBA bytes, as stored in image files.
    #[inline]
    pub fn from_rgba8(rgba: [u8; 4]) -> Self {
        Self::new(
            rgba[0] as f32 / 255.0,
            rgba[1] as f32 / 255.0,
            rgba[2] as f32 / 255.0,
            rgba[3] as f32 / 255.0,
        )
    }

    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        let c = self.clamped();
        [unit_to_u8(c.r), unit_to_u8(c.g), unit_to_u8(c.b), unit_to_u8(c.a)]
    }

    /// Component-wise linear interpolation; `t = 0` yields `self`, `t = 1` yields `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
            self.a.clamp(0.0, 1.0),
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[inline]
pub(crate) fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_clamps_level() {
        assert_eq!(ColorRgba::gray(1.5, 1.0), ColorRgba::white());
        assert_eq!(ColorRgba::gray(-0.2, 1.0), ColorRgba::black());
    }

    #[test]
    fn lerp_endpoints() {
        let a = ColorRgba::new(1.0, 0.0, 0.0, 1.0);
        let b = ColorRgba::new(0.0, 0.0, 1.0, 0.5);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        let mid = a.lerp(b, 0.5);
        assert!((mid.r - 0.5).abs() < 1e-6);
        assert!((mid.a - 0.75).abs() < 1e-6);
    }

    #[test]
    fn rgba8_rounds_and_clamps() {
        assert_eq!(ColorRgba::new(1.2, 0.5, -1.0, 1.0).to_rgba8(), [255, 128, 0, 255]);
        assert_eq!(ColorRgba::from_rgba8([255, 0, 0, 255]), ColorRgba::new(1.0, 0.0, 0.0, 1.0));
    }
}
