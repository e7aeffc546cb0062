//! Pinch-to-collapse gesture model.
//!
//! Raw magnification samples go through a non-linear resistance curve so the
//! first part of a pinch feels heavy, while a smoothed velocity lets a fast
//! flick collapse the surface immediately. The model only produces scale and
//! discrete events; turning them into size, corner radius or haptics is left
//! to [`crate::morph`] and the host.

use crate::constants::*;
use crate::error::{check_duration, check_range, ConfigError};
use crate::state::{clamp_unit, FeedbackTier};

#[derive(Clone, Debug, PartialEq)]
pub struct PinchConfig {
    pub min_scale: f32,
    pub collapse_threshold: f32,
    pub resistance_exponent: f32,
    pub overshoot_cap: f32,
    pub fast_collapse_velocity: f32,
    pub release_velocity_cutoff: f32,
    pub release_velocity_span: f32,
    pub release_relax: f32,
    pub velocity_retain: f32,
    pub min_sample_dt: f64,
    pub mid_feedback_arm: f32,
    pub mid_feedback_rearm: f32,
}

impl Default for PinchConfig {
    fn default() -> Self {
        Self {
            min_scale: PINCH_MIN_SCALE,
            collapse_threshold: PINCH_COLLAPSE_THRESHOLD,
            resistance_exponent: PINCH_RESISTANCE_EXPONENT,
            overshoot_cap: PINCH_OVERSHOOT_CAP,
            fast_collapse_velocity: PINCH_FAST_COLLAPSE_VELOCITY,
            release_velocity_cutoff: PINCH_RELEASE_VELOCITY_CUTOFF,
            release_velocity_span: PINCH_RELEASE_VELOCITY_SPAN,
            release_relax: PINCH_RELEASE_RELAX,
            velocity_retain: PINCH_VELOCITY_RETAIN,
            min_sample_dt: PINCH_MIN_SAMPLE_DT,
            mid_feedback_arm: PINCH_MID_FEEDBACK_ARM,
            mid_feedback_rearm: PINCH_MID_FEEDBACK_REARM,
        }
    }
}

impl PinchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("min_scale", self.min_scale, 0.01, 0.99)?;
        check_range("collapse_threshold", self.collapse_threshold, self.min_scale, 1.0)?;
        check_range("resistance_exponent", self.resistance_exponent, 0.1, 16.0)?;
        check_range("overshoot_cap", self.overshoot_cap, 1.0, 2.0)?;
        check_range("fast_collapse_velocity", self.fast_collapse_velocity, f32::MIN, -f32::EPSILON)?;
        check_range("release_velocity_cutoff", self.release_velocity_cutoff, f32::MIN, 0.0)?;
        check_range("release_velocity_span", self.release_velocity_span, f32::EPSILON, f32::MAX)?;
        check_range("release_relax", self.release_relax, 0.0, 1.0)?;
        check_range("velocity_retain", self.velocity_retain, 0.0, 0.99)?;
        check_duration("min_sample_dt", self.min_sample_dt, f64::MIN_POSITIVE)?;
        check_range("mid_feedback_arm", self.mid_feedback_arm, 0.0, 1.0)?;
        check_range("mid_feedback_rearm", self.mid_feedback_rearm, 0.0, self.mid_feedback_arm)?;
        Ok(())
    }

    /// Map a raw (unresisted) target scale to the scale actually shown.
    /// Inward targets follow `1 - lp^exponent * (1 - min)`, outward targets
    /// are linear up to the overshoot cap.
    pub fn resisted_scale(&self, raw: f32) -> f32 {
        if raw.is_nan() {
            return 1.0;
        }
        if raw >= 1.0 {
            return raw.min(self.overshoot_cap);
        }
        let span = 1.0 - self.min_scale;
        let linear = clamp_unit((1.0 - raw) / span);
        let resisted = linear.powf(self.resistance_exponent);
        (1.0 - resisted * span).max(self.min_scale)
    }

    /// Collapse threshold applied at release. A release faster than the
    /// cutoff raises it toward 1 in proportion to the excess speed.
    pub fn effective_threshold(&self, end_velocity: f32) -> f32 {
        let ct = self.collapse_threshold;
        if end_velocity < self.release_velocity_cutoff {
            let excess = end_velocity.abs() - self.release_velocity_cutoff.abs();
            let factor = (excess / self.release_velocity_span).min(1.0);
            ct + (1.0 - ct) * factor * self.release_relax
        } else {
            ct
        }
    }

    #[inline]
    pub fn collapse_progress(&self, scale: f32) -> f32 {
        clamp_unit((1.0 - scale) / (1.0 - self.min_scale))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinchPhase {
    Idle,
    Tracking,
    Collapsed,
    Expanded,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PinchGestureState {
    pub current_scale: f32,
    pub last_scale: f32,
    pub last_sample_sec: Option<f64>,
    pub last_sample_value: f32,
    /// Magnification units per second; negative while pinching in.
    pub smoothed_velocity: f32,
    pub has_crossed_mid_threshold: bool,
    pub collapsed: bool,
}

impl Default for PinchGestureState {
    fn default() -> Self {
        Self {
            current_scale: 1.0,
            last_scale: 1.0,
            last_sample_sec: None,
            last_sample_value: 1.0,
            smoothed_velocity: 0.0,
            has_crossed_mid_threshold: false,
            collapsed: false,
        }
    }
}

impl PinchGestureState {
    fn reset_trackers(&mut self) {
        self.last_scale = 1.0;
        self.last_sample_sec = None;
        self.last_sample_value = 1.0;
        self.smoothed_velocity = 0.0;
        self.has_crossed_mid_threshold = false;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinchEvent {
    /// Collapse progress passed the midpoint during a gesture
    MidThresholdCrossed,
    /// A fast inward pinch collapsed the surface before release
    FastCollapse,
    /// Gesture released and the surface settled
    Settled { collapsed: bool },
    /// Collapsed or expanded directly, outside a gesture
    Toggled { collapsed: bool },
}

impl PinchEvent {
    pub fn feedback_tier(self) -> Option<FeedbackTier> {
        match self {
            PinchEvent::MidThresholdCrossed => Some(FeedbackTier::Light),
            PinchEvent::FastCollapse => Some(FeedbackTier::Heavy),
            PinchEvent::Settled { collapsed: true } => Some(FeedbackTier::Heavy),
            PinchEvent::Settled { collapsed: false } => None,
            PinchEvent::Toggled { .. } => Some(FeedbackTier::Medium),
        }
    }
}

pub struct PinchModel {
    config: PinchConfig,
    state: PinchGestureState,
    phase: PinchPhase,
}

impl PinchModel {
    pub fn new(config: PinchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: PinchGestureState::default(),
            phase: PinchPhase::Idle,
        })
    }

    pub fn config(&self) -> &PinchConfig {
        &self.config
    }

    pub fn state(&self) -> &PinchGestureState {
        &self.state
    }

    pub fn phase(&self) -> PinchPhase {
        self.phase
    }

    pub fn scale(&self) -> f32 {
        self.state.current_scale
    }

    pub fn is_collapsed(&self) -> bool {
        self.state.collapsed
    }

    pub fn collapse_progress(&self) -> f32 {
        self.config.collapse_progress(self.state.current_scale)
    }

    /// Progress the morphing surface should render: full once collapsed.
    pub fn morph_progress(&self) -> f32 {
        if self.state.collapsed {
            1.0
        } else {
            self.collapse_progress()
        }
    }

    /// Feed one magnification sample (1.0 = no pinch) taken at `now_sec`.
    pub fn update(&mut self, magnification: f32, now_sec: f64, out_events: &mut Vec<PinchEvent>) {
        if !magnification.is_finite() || magnification <= 0.0 {
            log::warn!("[pinch] ignoring magnification {}", magnification);
            return;
        }
        match self.phase {
            PinchPhase::Tracking => {}
            PinchPhase::Collapsed => {
                log::trace!("[pinch] surface collapsed; sample ignored");
                return;
            }
            PinchPhase::Idle | PinchPhase::Expanded => {
                self.state.reset_trackers();
                self.phase = PinchPhase::Tracking;
                log::debug!("[pinch] gesture began at {:.3}s", now_sec);
            }
        }

        let cfg = &self.config;
        let st = &mut self.state;

        let delta = magnification / st.last_scale;
        st.last_scale = magnification;

        if let Some(prev) = st.last_sample_sec {
            let dt = now_sec - prev;
            // near-zero dt would blow the velocity up; keep the old estimate
            if dt > cfg.min_sample_dt {
                let instant = (magnification - st.last_sample_value) / dt as f32;
                st.smoothed_velocity =
                    st.smoothed_velocity * cfg.velocity_retain + instant * (1.0 - cfg.velocity_retain);
            }
        }
        st.last_sample_sec = Some(now_sec);
        st.last_sample_value = magnification;

        let raw_target = st.current_scale * delta;
        st.current_scale = cfg
            .resisted_scale(raw_target)
            .clamp(cfg.min_scale, cfg.overshoot_cap);

        let progress = cfg.collapse_progress(st.current_scale);
        if progress > cfg.mid_feedback_arm && !st.has_crossed_mid_threshold {
            st.has_crossed_mid_threshold = true;
            out_events.push(PinchEvent::MidThresholdCrossed);
        } else if progress < cfg.mid_feedback_rearm {
            st.has_crossed_mid_threshold = false;
        }

        if st.smoothed_velocity < cfg.fast_collapse_velocity && !st.collapsed {
            st.collapsed = true;
            st.current_scale = cfg.min_scale;
            out_events.push(PinchEvent::FastCollapse);
            log::debug!("[pinch] fast collapse at velocity {:.2}", st.smoothed_velocity);
        }
    }

    /// Release the gesture and settle to collapsed or expanded.
    pub fn end(&mut self, out_events: &mut Vec<PinchEvent>) {
        if self.phase != PinchPhase::Tracking {
            return;
        }
        let end_velocity = self.state.smoothed_velocity;
        self.state.reset_trackers();

        let threshold = self.config.effective_threshold(end_velocity);
        let collapsed = self.state.current_scale < threshold;
        self.settle(collapsed);
        out_events.push(PinchEvent::Settled { collapsed });
        log::debug!(
            "[pinch] released at velocity {:.2}, threshold {:.3} -> {}",
            end_velocity,
            threshold,
            if collapsed { "collapsed" } else { "expanded" }
        );
    }

    /// Tap on the collapsed surface.
    pub fn expand(&mut self, out_events: &mut Vec<PinchEvent>) {
        if self.state.collapsed && self.phase != PinchPhase::Tracking {
            self.settle(false);
            out_events.push(PinchEvent::Toggled { collapsed: false });
        }
    }

    pub fn collapse(&mut self, out_events: &mut Vec<PinchEvent>) {
        if !self.state.collapsed && self.phase != PinchPhase::Tracking {
            self.settle(true);
            out_events.push(PinchEvent::Toggled { collapsed: true });
        }
    }

    pub fn toggle(&mut self, out_events: &mut Vec<PinchEvent>) {
        if self.state.collapsed {
            self.expand(out_events);
        } else {
            self.collapse(out_events);
        }
    }

    /// Back to the untouched, expanded state.
    pub fn reset(&mut self) {
        self.state = PinchGestureState::default();
        self.phase = PinchPhase::Idle;
    }

    fn settle(&mut self, collapsed: bool) {
        self.state.collapsed = collapsed;
        if collapsed {
            self.state.current_scale = self.config.min_scale;
            self.phase = PinchPhase::Collapsed;
        } else {
            self.state.current_scale = 1.0;
            self.phase = PinchPhase::Expanded;
        }
    }
}

impl Default for PinchModel {
    fn default() -> Self {
        Self {
            config: PinchConfig::default(),
            state: PinchGestureState::default(),
            phase: PinchPhase::Idle,
        }
    }
}

/// Pinch on the summary card: progress follows the magnification linearly
/// and release collapses when the raw magnification is under the threshold.
/// There is no resistance and no velocity-triggered collapse.
pub struct SummaryPinchModel {
    collapse_threshold: f32,
    progress: f32,
    /// Last raw sample; `Some` while a gesture is being tracked
    last_magnification: Option<f32>,
    collapsed: bool,
}

impl SummaryPinchModel {
    pub fn new(collapse_threshold: f32) -> Result<Self, ConfigError> {
        check_range("collapse_threshold", collapse_threshold, 0.0, 1.0)?;
        Ok(Self {
            collapse_threshold,
            progress: 0.0,
            last_magnification: None,
            collapsed: false,
        })
    }

    pub fn collapse_threshold(&self) -> f32 {
        self.collapse_threshold
    }

    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_tracking(&self) -> bool {
        self.last_magnification.is_some()
    }

    /// 0 with the chat card open, 1 once collapsed into the summary.
    pub fn progress(&self) -> f32 {
        if self.collapsed {
            1.0
        } else {
            self.progress
        }
    }

    /// Opacity of the summary revealed underneath the card.
    pub fn summary_opacity(&self) -> f32 {
        self.progress()
    }

    /// Pinching is disabled while the summary is showing.
    pub fn update(&mut self, magnification: f32) {
        if !magnification.is_finite() || magnification <= 0.0 {
            log::warn!("[summary-pinch] ignoring magnification {}", magnification);
            return;
        }
        if self.collapsed {
            log::trace!("[summary-pinch] summary showing; sample ignored");
            return;
        }
        self.last_magnification = Some(magnification);
        self.progress = clamp_unit(1.0 - magnification);
    }

    pub fn end(&mut self, out_events: &mut Vec<PinchEvent>) {
        let Some(magnification) = self.last_magnification.take() else {
            return;
        };
        let collapsed = magnification < self.collapse_threshold;
        self.settle(collapsed);
        out_events.push(PinchEvent::Settled { collapsed });
        log::debug!(
            "[summary-pinch] released at {:.3} -> {}",
            magnification,
            if collapsed { "summary" } else { "chat" }
        );
    }

    /// Tap on the summary.
    pub fn expand(&mut self, out_events: &mut Vec<PinchEvent>) {
        if self.collapsed && !self.is_tracking() {
            self.settle(false);
            out_events.push(PinchEvent::Toggled { collapsed: false });
        }
    }

    pub fn collapse(&mut self, out_events: &mut Vec<PinchEvent>) {
        if !self.collapsed && !self.is_tracking() {
            self.settle(true);
            out_events.push(PinchEvent::Toggled { collapsed: true });
        }
    }

    pub fn toggle(&mut self, out_events: &mut Vec<PinchEvent>) {
        if self.collapsed {
            self.expand(out_events);
        } else {
            self.collapse(out_events);
        }
    }

    fn settle(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
        self.progress = if collapsed { 1.0 } else { 0.0 };
    }
}

impl Default for SummaryPinchModel {
    fn default() -> Self {
        Self {
            collapse_threshold: SUMMARY_PINCH_COLLAPSE_THRESHOLD,
            progress: 0.0,
            last_magnification: None,
            collapsed: false,
        }
    }
}

/// Scale and fold amount for an image folding under a pinch. Both spring
/// back to [`FoldFrame::REST`] when the gesture ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FoldFrame {
    pub scale: f32,
    /// 0 flat, 1 fully folded
    pub fold: f32,
}

impl FoldFrame {
    pub const REST: FoldFrame = FoldFrame {
        scale: 1.0,
        fold: 0.0,
    };

    pub fn from_magnification(magnification: f32) -> Self {
        if magnification.is_nan() {
            return Self::REST;
        }
        Self {
            scale: magnification.clamp(FOLD_MIN_SCALE, 1.0),
            fold: clamp_unit(1.0 - magnification),
        }
    }
}
