//! Easing curves mapping a time fraction to a progress fraction.

use crate::state::clamp_unit;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Quadratic ease-in-out: slow start, fast middle, slow end
    #[default]
    EaseInOutQuad,
}

impl Easing {
    /// Evaluate at `t`, which must already be in [0, 1].
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseInOutQuad => ease_in_out_quad(t),
        }
    }

    /// Clamp `t` into [0, 1] and evaluate.
    #[inline]
    pub fn sample(self, t: f32) -> f32 {
        self.apply(clamp_unit(t))
    }
}

#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}
