//! Flying-heart scheduling.
//!
//! Every heart lives in one list owned by a [`HeartFlightScheduler`] and is
//! advanced by a single host-driven [`HeartFlightScheduler::tick`]. A heart
//! moves through `Pending -> ScalingIn -> Flying -> Done` and is dropped in the
//! same pass that finishes it, so removal never races an iteration.
//!
//! Hosts that would rather keep one timer per heart can drive
//! [`HeartFlightScheduler::tick_heart`] instead; it answers `false` once the
//! heart is gone, which is the cue for that timer to cancel itself.

use crate::constants::*;
use crate::easing::Easing;
use crate::error::{check_duration, check_range, ConfigError};
use crate::path::FlightPath;
use crate::state::{clamp_unit, FeedbackTier};
use glam::Vec2;
use smallvec::SmallVec;

pub type HeartId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeartPhase {
    /// Scheduled by a staggered burst; start time not reached yet
    Pending,
    ScalingIn,
    Flying,
    Done,
}

/// When a like-carrying heart bumps the like counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LikeIncrementPolicy {
    /// As soon as flight progress passes the increment point, which coincides
    /// with the start of the fade-out.
    #[default]
    MidFade,
    /// Only when the heart completes its flight.
    OnCompletion,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HeartFlightConfig {
    pub scale_in_sec: f64,
    pub flight_sec: f64,
    pub stagger_sec: f64,
    /// One heart per tier; the first tier carries the like increment.
    pub opacity_tiers: SmallVec<[f32; 4]>,
    pub fade_start: f32,
    pub like_increment_progress: f32,
    pub increment_policy: LikeIncrementPolicy,
    /// Whether the leading heart of a burst increments the like count at all.
    pub increments_like: bool,
    pub easing: Easing,
}

impl HeartFlightConfig {
    /// Three staggered hearts of falling opacity, used on chat bubbles.
    pub fn burst() -> Self {
        Self {
            scale_in_sec: BURST_SCALE_IN_SEC,
            flight_sec: BURST_FLIGHT_SEC,
            stagger_sec: BURST_STAGGER_SEC,
            opacity_tiers: SmallVec::from_slice(&BURST_OPACITY_TIERS),
            fade_start: HEART_FADE_START,
            like_increment_progress: HEART_LIKE_INCREMENT_PROGRESS,
            increment_policy: LikeIncrementPolicy::MidFade,
            increments_like: true,
            easing: Easing::EaseInOutQuad,
        }
    }

    /// One opaque heart with a short flight and no like side effect.
    pub fn single() -> Self {
        Self {
            scale_in_sec: SINGLE_SCALE_IN_SEC,
            flight_sec: SINGLE_FLIGHT_SEC,
            stagger_sec: 0.0,
            opacity_tiers: SmallVec::from_slice(&[1.0]),
            increments_like: false,
            ..Self::burst()
        }
    }

    pub fn with_policy(mut self, policy: LikeIncrementPolicy) -> Self {
        self.increment_policy = policy;
        self
    }

    #[inline]
    pub fn total_sec(&self) -> f64 {
        self.scale_in_sec + self.flight_sec
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_duration("scale_in_sec", self.scale_in_sec, 0.0)?;
        check_duration("flight_sec", self.flight_sec, f64::MIN_POSITIVE)?;
        check_duration("stagger_sec", self.stagger_sec, 0.0)?;
        if self.opacity_tiers.is_empty() {
            return Err(ConfigError::EmptyBurst);
        }
        for &tier in &self.opacity_tiers {
            check_range("opacity_tiers", tier, 0.0, 1.0)?;
        }
        check_range("fade_start", self.fade_start, 0.0, 1.0)?;
        check_range(
            "like_increment_progress",
            self.like_increment_progress,
            0.0,
            1.0,
        )?;
        Ok(())
    }
}

impl Default for HeartFlightConfig {
    fn default() -> Self {
        Self::burst()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedHeart {
    pub id: HeartId,
    pub phase: HeartPhase,
    pub scale: f32,
    pub progress: f32,
    /// Fixed opacity tier; the fade-out is applied on top at render time.
    pub opacity: f32,
    /// Hidden until the first tick has positioned it.
    pub is_active: bool,
    pub should_increment_like: bool,
    pub did_increment_like: bool,
    start_sec: f64,
}

impl AnimatedHeart {
    pub fn start_sec(&self) -> f64 {
        self.start_sec
    }

    pub fn render_opacity(&self, fade_start: f32) -> f32 {
        if !self.is_active {
            return 0.0;
        }
        self.opacity * fade_out_multiplier(self.progress, fade_start)
    }

    pub fn render_scale(&self, fade_start: f32) -> f32 {
        self.scale * fade_out_multiplier(self.progress, fade_start)
    }
}

/// 1 up to `fade_start`, then linear down to 0 at the end of the path.
pub fn fade_out_multiplier(progress: f32, fade_start: f32) -> f32 {
    let p = clamp_unit(progress);
    if p <= fade_start || fade_start >= 1.0 {
        1.0
    } else {
        clamp_unit(1.0 - (p - fade_start) / (1.0 - fade_start))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeartEvent {
    IncrementLike { id: HeartId },
    Feedback(FeedbackTier),
    Finished { id: HeartId },
}

/// What the renderer needs to draw one heart this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartFrame {
    pub id: HeartId,
    pub position: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

pub struct HeartFlightScheduler {
    config: HeartFlightConfig,
    hearts: Vec<AnimatedHeart>,
    next_id: HeartId,
}

impl HeartFlightScheduler {
    pub fn new(config: HeartFlightConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            hearts: Vec::new(),
            next_id: 1,
        })
    }

    pub fn config(&self) -> &HeartFlightConfig {
        &self.config
    }

    pub fn hearts(&self) -> &[AnimatedHeart] {
        &self.hearts
    }

    pub fn get(&self, id: HeartId) -> Option<&AnimatedHeart> {
        self.hearts.iter().find(|h| h.id == id)
    }

    pub fn is_idle(&self) -> bool {
        self.hearts.is_empty()
    }

    /// Spawn one heart that starts scaling in at `now_sec`.
    pub fn spawn(&mut self, now_sec: f64, opacity: f32, increment_like: bool) -> HeartId {
        self.schedule(now_sec, now_sec, opacity, increment_like)
    }

    /// Spawn one heart per opacity tier, `stagger_sec` apart. All of them
    /// exist immediately; later ones wait in `Pending`.
    pub fn spawn_burst(&mut self, now_sec: f64) -> SmallVec<[HeartId; 4]> {
        let tiers = self.config.opacity_tiers.clone();
        let increments = self.config.increments_like;
        let stagger = self.config.stagger_sec;
        let ids = tiers
            .iter()
            .enumerate()
            .map(|(i, &opacity)| {
                let start = now_sec + i as f64 * stagger;
                self.schedule(now_sec, start, opacity, increments && i == 0)
            })
            .collect::<SmallVec<[HeartId; 4]>>();
        log::debug!("[hearts] burst of {} at {:.3}s", ids.len(), now_sec);
        ids
    }

    fn schedule(&mut self, now_sec: f64, start_sec: f64, opacity: f32, increment: bool) -> HeartId {
        let id = self.next_id;
        self.next_id += 1;
        let phase = if start_sec > now_sec {
            HeartPhase::Pending
        } else {
            HeartPhase::ScalingIn
        };
        self.hearts.push(AnimatedHeart {
            id,
            phase,
            scale: 0.0,
            progress: 0.0,
            opacity: clamp_unit(opacity),
            is_active: false,
            should_increment_like: increment,
            did_increment_like: false,
            start_sec,
        });
        id
    }

    /// Advance every heart to `now_sec`, dropping the ones that finished.
    pub fn tick(&mut self, now_sec: f64, out_events: &mut Vec<HeartEvent>) {
        let config = &self.config;
        self.hearts
            .retain_mut(|heart| advance(config, heart, now_sec, out_events));
    }

    /// Advance a single heart. Returns `false` when the heart is unknown or
    /// has just finished; a per-heart timer should stop on `false`.
    pub fn tick_heart(
        &mut self,
        id: HeartId,
        now_sec: f64,
        out_events: &mut Vec<HeartEvent>,
    ) -> bool {
        let Some(idx) = self.hearts.iter().position(|h| h.id == id) else {
            return false;
        };
        let alive = advance(&self.config, &mut self.hearts[idx], now_sec, out_events);
        if !alive {
            self.hearts.remove(idx);
        }
        alive
    }

    /// Remove one heart, leaving the others untouched.
    pub fn cancel(&mut self, id: HeartId) -> bool {
        let before = self.hearts.len();
        self.hearts.retain(|h| h.id != id);
        self.hearts.len() != before
    }

    /// Drop every heart, pending ones included. Returns how many were cleared.
    pub fn teardown(&mut self) -> usize {
        let cleared = self.hearts.len();
        self.hearts.clear();
        if cleared > 0 {
            log::debug!("[hearts] teardown cleared {} heart(s)", cleared);
        }
        cleared
    }

    /// Positions and fade-adjusted appearance of every visible heart.
    pub fn frames(&self, path: &FlightPath) -> Vec<HeartFrame> {
        let fade_start = self.config.fade_start;
        self.hearts
            .iter()
            .filter(|h| h.is_active)
            .map(|h| HeartFrame {
                id: h.id,
                position: path.sample(h.progress),
                scale: h.render_scale(fade_start),
                opacity: h.render_opacity(fade_start),
            })
            .collect()
    }
}

fn emit_increment(heart: &mut AnimatedHeart, out_events: &mut Vec<HeartEvent>) {
    if heart.should_increment_like && !heart.did_increment_like {
        heart.did_increment_like = true;
        out_events.push(HeartEvent::IncrementLike { id: heart.id });
        out_events.push(HeartEvent::Feedback(FeedbackTier::Light));
    }
}

/// Returns whether the heart is still alive after this step.
fn advance(
    config: &HeartFlightConfig,
    heart: &mut AnimatedHeart,
    now_sec: f64,
    out_events: &mut Vec<HeartEvent>,
) -> bool {
    let elapsed = now_sec - heart.start_sec;
    if elapsed < 0.0 {
        heart.phase = HeartPhase::Pending;
        return true;
    }

    if elapsed >= config.total_sec() {
        heart.phase = HeartPhase::Done;
        heart.progress = 1.0;
        // a like-carrying heart always pays out before it disappears
        emit_increment(heart, out_events);
        out_events.push(HeartEvent::Finished { id: heart.id });
        log::trace!("[hearts] heart {} finished", heart.id);
        return false;
    }

    heart.is_active = true;
    if elapsed < config.scale_in_sec {
        heart.phase = HeartPhase::ScalingIn;
        heart.scale = clamp_unit((elapsed / config.scale_in_sec) as f32);
        heart.progress = 0.0;
    } else {
        heart.phase = HeartPhase::Flying;
        heart.scale = 1.0;
        let linear = ((elapsed - config.scale_in_sec) / config.flight_sec) as f32;
        heart.progress = clamp_unit(config.easing.sample(linear));

        if config.increment_policy == LikeIncrementPolicy::MidFade
            && heart.progress > config.like_increment_progress
        {
            emit_increment(heart, out_events);
        }
    }
    true
}
