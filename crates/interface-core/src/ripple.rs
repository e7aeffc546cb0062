//! Ripple shader parameters and the trigger clock that drives them.
//!
//! The shader itself belongs to the host. This module keeps the numbers it
//! needs, restarts the elapsed-time window whenever the trigger fires, and
//! decides when the effect should be a pass-through.

use crate::constants::*;
use crate::error::{check_range, ConfigError};
use bytemuck::{Pod, Zeroable};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleParameters {
    /// Peak displacement in points; also the shader's max sample offset
    pub amplitude: f32,
    pub frequency: f32,
    pub decay: f32,
    /// Wavefront speed in points per second
    pub speed: f32,
    pub duration_sec: f32,
    pub tint_intensity: f32,
}

impl Default for RippleParameters {
    fn default() -> Self {
        Self {
            amplitude: RIPPLE_AMPLITUDE,
            frequency: RIPPLE_FREQUENCY,
            decay: RIPPLE_DECAY,
            speed: RIPPLE_SPEED,
            duration_sec: RIPPLE_DURATION_SEC,
            tint_intensity: RIPPLE_TINT_INTENSITY,
        }
    }
}

impl RippleParameters {
    pub fn message_bubble() -> Self {
        Self {
            tint_intensity: RIPPLE_MESSAGE_TINT,
            ..Self::default()
        }
    }

    pub fn demo() -> Self {
        Self {
            tint_intensity: RIPPLE_DEMO_TINT,
            ..Self::default()
        }
    }

    pub fn max_sample_offset(&self) -> Vec2 {
        Vec2::splat(self.amplitude)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("amplitude", self.amplitude, 0.0, f32::MAX)?;
        check_range("frequency", self.frequency, 0.0, f32::MAX)?;
        check_range("decay", self.decay, 0.0, f32::MAX)?;
        check_range("speed", self.speed, 0.0, f32::MAX)?;
        check_range("duration_sec", self.duration_sec, f32::EPSILON, f32::MAX)?;
        check_range("tint_intensity", self.tint_intensity, 0.0, f32::MAX)?;
        Ok(())
    }
}

/// The effect renders only strictly inside its time window.
#[inline]
pub fn ripple_enabled(elapsed_sec: f32, duration_sec: f32) -> bool {
    0.0 < elapsed_sec && elapsed_sec < duration_sec
}

/// One firing of the ripple. A later firing replaces it outright.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleTrigger {
    pub origin: Vec2,
    pub counter: u64,
    pub params: RippleParameters,
}

/// Uniform block layout handed to the ripple shader.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RippleUniforms {
    pub origin: [f32; 2],
    pub elapsed: f32,
    pub amplitude: f32,
    pub frequency: f32,
    pub decay: f32,
    pub speed: f32,
    pub tint_intensity: f32,
}

pub struct RippleController {
    params: RippleParameters,
    trigger: Option<RippleTrigger>,
    fired_at_sec: f64,
    counter: u64,
}

impl RippleController {
    pub fn new(params: RippleParameters) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            params,
            trigger: None,
            fired_at_sec: 0.0,
            counter: 0,
        })
    }

    pub fn params(&self) -> &RippleParameters {
        &self.params
    }

    /// Replace the parameters used by the next firing. A ripple already
    /// running keeps the snapshot it was fired with.
    pub fn set_params(&mut self, params: RippleParameters) -> Result<(), ConfigError> {
        params.validate()?;
        self.params = params;
        Ok(())
    }

    pub fn trigger(&self) -> Option<&RippleTrigger> {
        self.trigger.as_ref()
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn fire(&mut self, origin: Vec2, now_sec: f64) -> RippleTrigger {
        self.counter = self.counter.wrapping_add(1);
        let trigger = RippleTrigger {
            origin,
            counter: self.counter,
            params: self.params,
        };
        self.trigger = Some(trigger);
        self.fired_at_sec = now_sec;
        log::trace!("[ripple] fired #{} at ({:.1}, {:.1})", self.counter, origin.x, origin.y);
        trigger
    }

    /// Linear keyframe clock: 0 at the firing, holding at the duration once
    /// reached. `None` before the first firing.
    pub fn elapsed(&self, now_sec: f64) -> Option<f32> {
        let trigger = self.trigger.as_ref()?;
        let raw = (now_sec - self.fired_at_sec) as f32;
        Some(raw.clamp(0.0, trigger.params.duration_sec))
    }

    pub fn is_active(&self, now_sec: f64) -> bool {
        match (self.trigger.as_ref(), self.elapsed(now_sec)) {
            (Some(t), Some(e)) => ripple_enabled(e, t.params.duration_sec),
            _ => false,
        }
    }

    /// Shader inputs for this frame, or `None` when the effect should pass
    /// the layer through untouched.
    pub fn uniforms(&self, now_sec: f64) -> Option<RippleUniforms> {
        let trigger = self.trigger.as_ref()?;
        let elapsed = self.elapsed(now_sec)?;
        if !ripple_enabled(elapsed, trigger.params.duration_sec) {
            return None;
        }
        let p = &trigger.params;
        Some(RippleUniforms {
            origin: trigger.origin.to_array(),
            elapsed,
            amplitude: p.amplitude,
            frequency: p.frequency,
            decay: p.decay,
            speed: p.speed,
            tint_intensity: p.tint_intensity,
        })
    }
}

impl Default for RippleController {
    fn default() -> Self {
        Self {
            params: RippleParameters::default(),
            trigger: None,
            fired_at_sec: 0.0,
            counter: 0,
        }
    }
}
