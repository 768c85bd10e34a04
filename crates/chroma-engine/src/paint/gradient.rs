use std::fmt;

use crate::coords::{ColorRgba, Vec2};

/// A single gradient stop: straight-alpha color at axis position `t`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: ColorRgba,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: ColorRgba) -> Self {
        Self { t, color }
    }
}

/// Why a gradient definition cannot be rendered.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientError {
    /// Fewer than two stops.
    TooFewStops { count: usize },
    /// A point, position or channel is NaN or infinite.
    NonFinite,
    /// A stop position lies outside [0, 1].
    PositionOutOfRange { index: usize, t: f32 },
    /// Stop `index` does not come strictly after the previous one.
    UnorderedStops { index: usize },
    /// Start and end points coincide.
    DegenerateAxis,
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientError::TooFewStops { count } => {
                write!(f, "gradient needs at least 2 stops, got {count}")
            }
            GradientError::NonFinite => write!(f, "gradient contains non-finite values"),
            GradientError::PositionOutOfRange { index, t } => {
                write!(f, "gradient stop {index} has position {t} outside [0, 1]")
            }
            GradientError::UnorderedStops { index } => {
                write!(f, "gradient stop {index} is not strictly after the previous stop")
            }
            GradientError::DegenerateAxis => write!(f, "gradient start and end points coincide"),
        }
    }
}

impl std::error::Error for GradientError {}

/// Linear gradient definition in logical pixel space.
///
/// Semantics:
/// - `start` and `end` are positions in the same coordinate space as geometry.
/// - Stops hold straight-alpha colors; interpolation happens per channel in that form.
/// - Points before `start` or past `end` take the edge stop colors (pad).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>) -> Self {
        Self { start, end, stops }
    }

    /// Checks the definition: finite values, >= 2 stops, positions in [0, 1] and
    /// strictly increasing, non-zero axis.
    pub fn validate(&self) -> Result<(), GradientError> {
        if self.stops.len() < 2 {
            return Err(GradientError::TooFewStops { count: self.stops.len() });
        }
        if !self.start.is_finite()
            || !self.end.is_finite()
            || !self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
        {
            return Err(GradientError::NonFinite);
        }
        for (index, stop) in self.stops.iter().enumerate() {
            if !(0.0..=1.0).contains(&stop.t) {
                return Err(GradientError::PositionOutOfRange { index, t: stop.t });
            }
            if index > 0 && stop.t <= self.stops[index - 1].t {
                return Err(GradientError::UnorderedStops { index });
            }
        }
        if self.start == self.end {
            return Err(GradientError::DegenerateAxis);
        }
        Ok(())
    }

    /// Projects `p` onto the gradient axis. `start` maps to 0, `end` to 1.
    #[inline]
    pub fn axis_param(&self, p: Vec2) -> f32 {
        let axis = self.end - self.start;
        let len2 = axis.dot(axis);
        if len2 == 0.0 {
            return 0.0;
        }
        (p - self.start).dot(axis) / len2
    }

    /// Color at axis parameter `t`; values outside [0, 1] pad to the edge stops.
    ///
    /// Assumes sorted stops (see [`validate`](Self::validate)). Returns transparent
    /// for an empty stop list.
    pub fn color_at_t(&self, t: f32) -> ColorRgba {
        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return ColorRgba::transparent();
        };

        if t <= first.t {
            return first.color;
        }
        if t >= last.t {
            return last.color;
        }

        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.t {
                let span = b.t - a.t;
                if span <= 0.0 {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.t) / span);
            }
        }
        last.color
    }

    /// Color at point `p` in geometry space.
    #[inline]
    pub fn color_at(&self, p: Vec2) -> ColorRgba {
        self.color_at_t(self.axis_param(p))
    }
}
