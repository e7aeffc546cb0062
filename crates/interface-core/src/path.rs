//! Parametric flight paths for hearts travelling over a message bubble.
//!
//! Sampling uses the curve parameter directly rather than arc length, which
//! matches how host toolkits trim a path to a fraction of its length for
//! lines and gentle quadratic bows.

use crate::constants::{PATH_DEFAULT_CURVATURE, PATH_EDGE_INSET, PATH_MAX_CURVE_OFFSET};
use crate::state::clamp_unit;
use glam::Vec2;

/// Which side of the conversation a bubble sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BubbleSide {
    /// Message from someone else, aligned to the leading edge
    Left,
    /// Message sent by the current user, aligned to the trailing edge
    #[default]
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlightPath {
    Line { start: Vec2, end: Vec2 },
    Quad { start: Vec2, control: Vec2, end: Vec2 },
}

impl FlightPath {
    pub fn start(&self) -> Vec2 {
        match *self {
            FlightPath::Line { start, .. } | FlightPath::Quad { start, .. } => start,
        }
    }

    pub fn end(&self) -> Vec2 {
        match *self {
            FlightPath::Line { end, .. } | FlightPath::Quad { end, .. } => end,
        }
    }

    /// Point at parametric fraction `progress`. Anything at or below zero
    /// (NaN included) yields the start point exactly.
    pub fn sample(&self, progress: f32) -> Vec2 {
        let t = clamp_unit(progress);
        if t <= 0.0 {
            return self.start();
        }
        match *self {
            FlightPath::Line { start, end } => start.lerp(end, t),
            FlightPath::Quad {
                start,
                control,
                end,
            } => {
                let u = 1.0 - t;
                start * (u * u) + control * (2.0 * u * t) + end * (t * t)
            }
        }
    }

    /// Straight run up the trailing edge of a bubble of `size`, bottom to top.
    pub fn trailing_edge(size: Vec2, inset: f32) -> Self {
        let x = size.x - inset;
        FlightPath::Line {
            start: Vec2::new(x, size.y),
            end: Vec2::new(x, 0.0),
        }
    }

    /// Quadratic bow from the bottom to the top of a bubble. Bubbles from
    /// others carry the curve on their right edge, own bubbles on the left,
    /// and the control point bows inward by `curvature` of the allowed offset.
    /// A non-finite curvature falls back to the default bow.
    pub fn side_curve(size: Vec2, curvature: f32, side: BubbleSide) -> Self {
        let inset = PATH_EDGE_INSET;
        let (w, h) = (size.x, size.y);
        let max_offset = PATH_MAX_CURVE_OFFSET
            .min((w - inset * 2.0) * 0.5)
            .max(0.0);
        let curvature = if curvature.is_finite() {
            clamp_unit(curvature)
        } else {
            PATH_DEFAULT_CURVATURE
        };
        let bow = curvature * max_offset;

        let edge_x = match side {
            BubbleSide::Left => w - inset,
            BubbleSide::Right => inset,
        };
        let control_x = match side {
            BubbleSide::Left => edge_x - bow,
            BubbleSide::Right => edge_x + bow,
        };
        FlightPath::Quad {
            start: Vec2::new(edge_x, h),
            control: Vec2::new(control_x, h / 2.0),
            end: Vec2::new(edge_x, 0.0),
        }
    }
}

