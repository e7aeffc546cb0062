//! Pixelation: a static block effect and a tap-toggled left-to-right sweep.

use crate::constants::*;
use crate::easing::Easing;
use crate::error::{check_duration, check_range, ConfigError};
use crate::state::{clamp_unit, lerp};
use bytemuck::{Pod, Zeroable};

/// Uniform block pixelation. Block sizes below one point are raised to one,
/// which renders as a pass-through.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelateEffect {
    block_size: f32,
}

impl PixelateEffect {
    pub fn new(block_size: f32) -> Self {
        Self {
            block_size: block_size.max(1.0),
        }
    }

    pub fn block_size(&self) -> f32 {
        self.block_size
    }

    pub fn is_enabled(&self) -> bool {
        self.block_size > 1.0
    }
}

impl Default for PixelateEffect {
    fn default() -> Self {
        Self::new(PIXELATE_DEFAULT_BLOCK_SIZE)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PixelateWaveConfig {
    pub duration_sec: f64,
    pub band_softness: f32,
    pub max_block_size: f32,
    pub easing: Easing,
}

impl Default for PixelateWaveConfig {
    fn default() -> Self {
        Self {
            duration_sec: PIXELATE_WAVE_DURATION_SEC,
            band_softness: PIXELATE_BAND_SOFTNESS,
            max_block_size: PIXELATE_MAX_BLOCK_SIZE,
            easing: Easing::EaseInOutQuad,
        }
    }
}

impl PixelateWaveConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_duration("duration_sec", self.duration_sec, f64::MIN_POSITIVE)?;
        check_range("band_softness", self.band_softness, 0.0, 1.0)?;
        check_range("max_block_size", self.max_block_size, 1.0, f32::MAX)?;
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WavePhase {
    Idle,
    Pixelating,
    Depixelating,
}

/// Shader inputs for the sweep; layout matches the wave shader's uniforms.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PixelateWaveUniforms {
    pub progress: f32,
    pub layer_width: f32,
    pub band_softness: f32,
    pub max_block_size: f32,
}

pub struct PixelateWave {
    config: PixelateWaveConfig,
    phase: WavePhase,
    is_pixelated: bool,
    progress: f32,
    from: f32,
    to: f32,
    started_sec: f64,
    layer_width: f32,
}

impl PixelateWave {
    pub fn new(config: PixelateWaveConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            phase: WavePhase::Idle,
            is_pixelated: false,
            progress: 0.0,
            from: 0.0,
            to: 0.0,
            started_sec: 0.0,
            layer_width: PIXELATE_DEFAULT_LAYER_WIDTH,
        })
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    pub fn is_pixelated(&self) -> bool {
        self.is_pixelated
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn set_layer_width(&mut self, width: f32) {
        self.layer_width = if width.is_finite() { width.max(1.0) } else { 1.0 };
    }

    /// Start a sweep toward the opposite state. Returns `false` (and does
    /// nothing) while a sweep is already running.
    pub fn toggle(&mut self, now_sec: f64) -> bool {
        if self.phase != WavePhase::Idle {
            return false;
        }
        let (phase, from, to) = if self.is_pixelated {
            (WavePhase::Depixelating, 1.0, 0.0)
        } else {
            (WavePhase::Pixelating, 0.0, 1.0)
        };
        self.phase = phase;
        self.from = from;
        self.to = to;
        self.progress = from;
        self.started_sec = now_sec;
        log::debug!("[pixelate] {:?} started", phase);
        true
    }

    /// Advance the sweep. Returns the new pixelated state on the tick that
    /// completes it.
    pub fn tick(&mut self, now_sec: f64) -> Option<bool> {
        if self.phase == WavePhase::Idle {
            return None;
        }
        let t = ((now_sec - self.started_sec) / self.config.duration_sec) as f32;
        self.progress = clamp_unit(lerp(self.from, self.to, self.config.easing.sample(t)));

        let done = match self.phase {
            WavePhase::Pixelating => self.progress >= 1.0 - PIXELATE_COMPLETE_EPSILON,
            WavePhase::Depixelating => self.progress <= PIXELATE_COMPLETE_EPSILON,
            WavePhase::Idle => false,
        };
        if !done {
            return None;
        }
        self.is_pixelated = self.phase == WavePhase::Pixelating;
        self.progress = self.to;
        self.phase = WavePhase::Idle;
        Some(self.is_pixelated)
    }

    pub fn uniforms(&self) -> PixelateWaveUniforms {
        PixelateWaveUniforms {
            progress: self.progress,
            layer_width: self.layer_width,
            band_softness: self.config.band_softness,
            max_block_size: self.config.max_block_size,
        }
    }
}

impl Default for PixelateWave {
    fn default() -> Self {
        Self {
            config: PixelateWaveConfig::default(),
            phase: WavePhase::Idle,
            is_pixelated: false,
            progress: 0.0,
            from: 0.0,
            to: 0.0,
            started_sec: 0.0,
            layer_width: PIXELATE_DEFAULT_LAYER_WIDTH,
        }
    }
}
