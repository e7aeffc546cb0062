//! Small value types shared by the animation models and their hosts.
//!
//! Nothing here touches a platform API; hosts translate [`FeedbackTier`] into
//! whatever haptic or audio cue they have available.

/// Strength of a one-shot feedback cue requested by a model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeedbackTier {
    Light,
    Medium,
    Heavy,
}

impl FeedbackTier {
    /// Stable numeric code used when events cross an FFI boundary.
    pub fn code(self) -> u8 {
        match self {
            FeedbackTier::Light => 1,
            FeedbackTier::Medium => 2,
            FeedbackTier::Heavy => 3,
        }
    }
}

/// Clamp into [0, 1]. NaN maps to 0 so a bad upstream value can never leak
/// into a progress or scale field.
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
