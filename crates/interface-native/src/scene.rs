//! One message bubble with every effect attached, driven by a frame clock.

use glam::Vec2;
use interface_core::{
    collapse_circle, ConfigError, FeedbackTier, FlightPath, HeartEvent, HeartFlightConfig,
    HeartFlightScheduler, HeartId, MorphFrame, PinchConfig, PinchEvent, PinchModel,
    PixelateWave, PixelateWaveConfig, RippleController, RippleParameters, MORPH_CIRCLE_SIZE,
    PATH_EDGE_INSET,
};

/// Counters the driver reports when the run ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneStats {
    pub ticks: u64,
    pub likes: u64,
    pub ripples: u64,
    pub feedback_light: u32,
    pub feedback_medium: u32,
    pub feedback_heavy: u32,
    pub collapses: u32,
    pub pixelate_sweeps: u32,
}

impl SceneStats {
    fn record(&mut self, tier: FeedbackTier) {
        match tier {
            FeedbackTier::Light => self.feedback_light += 1,
            FeedbackTier::Medium => self.feedback_medium += 1,
            FeedbackTier::Heavy => self.feedback_heavy += 1,
        }
    }
}

pub struct Scene {
    pub bubble: Vec2,
    pub screen: Vec2,
    pub path: FlightPath,
    pub hearts: HeartFlightScheduler,
    pub ripple: RippleController,
    pub pinch: PinchModel,
    pub pixelate: PixelateWave,
    pub stats: SceneStats,
    heart_events: Vec<HeartEvent>,
    pinch_events: Vec<PinchEvent>,
}

impl Scene {
    pub fn new(bubble: Vec2, screen: Vec2) -> Result<Self, ConfigError> {
        let mut pixelate = PixelateWave::new(PixelateWaveConfig::default())?;
        pixelate.set_layer_width(bubble.x);
        Ok(Self {
            bubble,
            screen,
            path: FlightPath::trailing_edge(bubble, PATH_EDGE_INSET),
            hearts: HeartFlightScheduler::new(HeartFlightConfig::burst())?,
            ripple: RippleController::new(RippleParameters::message_bubble())?,
            pinch: PinchModel::new(PinchConfig::default())?,
            pixelate,
            stats: SceneStats::default(),
            heart_events: Vec::new(),
            pinch_events: Vec::new(),
        })
    }

    /// Double tap on the bubble: a ripple from the tap point and a heart burst.
    pub fn double_tap(&mut self, origin: Vec2, now_sec: f64) -> usize {
        let local = origin.clamp(Vec2::ZERO, self.bubble);
        let trigger = self.ripple.fire(local, now_sec);
        self.stats.ripples += 1;
        let ids = self.hearts.spawn_burst(now_sec);
        log::info!(
            "[scene] double tap at ({:.0}, {:.0}): ripple #{}, {} heart(s)",
            local.x,
            local.y,
            trigger.counter,
            ids.len()
        );
        ids.len()
    }

    /// A single tap toggles the pixelation sweep.
    pub fn tap(&mut self, now_sec: f64) -> bool {
        let started = self.pixelate.toggle(now_sec);
        if !started {
            log::debug!("[scene] tap ignored; pixelate sweep running");
        }
        started
    }

    pub fn pinch_changed(&mut self, magnification: f32, now_sec: f64) {
        self.pinch
            .update(magnification, now_sec, &mut self.pinch_events);
        self.drain_pinch_events();
    }

    pub fn pinch_ended(&mut self) {
        self.pinch.end(&mut self.pinch_events);
        self.drain_pinch_events();
    }

    /// Tap on the collapsed circle.
    pub fn tap_collapsed(&mut self) {
        self.pinch.expand(&mut self.pinch_events);
        self.drain_pinch_events();
    }

    pub fn tick(&mut self, now_sec: f64) {
        self.stats.ticks += 1;
        self.hearts.tick(now_sec, &mut self.heart_events);
        for event in self.heart_events.drain(..) {
            match event {
                HeartEvent::IncrementLike { id } => {
                    self.stats.likes += 1;
                    log::info!("[scene] heart {} liked; count {}", id, self.stats.likes);
                }
                HeartEvent::Feedback(tier) => self.stats.record(tier),
                HeartEvent::Finished { id } => log::debug!("[scene] heart {} landed", id),
            }
        }
        if let Some(pixelated) = self.pixelate.tick(now_sec) {
            self.stats.pixelate_sweeps += 1;
            log::info!("[scene] pixelate sweep done; pixelated={}", pixelated);
        }
    }

    pub fn morph(&self) -> MorphFrame {
        collapse_circle(self.pinch.morph_progress(), self.screen, MORPH_CIRCLE_SIZE)
    }

    pub fn is_settled(&self, now_sec: f64) -> bool {
        self.hearts.is_idle()
            && !self.ripple.is_active(now_sec)
            && self.pixelate.phase() == interface_core::WavePhase::Idle
    }

    pub fn visible_hearts(&self) -> Vec<HeartId> {
        self.hearts.frames(&self.path).iter().map(|f| f.id).collect()
    }

    /// Drop every in-flight animation. Returns the number of hearts cleared.
    pub fn teardown(&mut self) -> usize {
        self.heart_events.clear();
        self.pinch_events.clear();
        self.hearts.teardown()
    }

    fn drain_pinch_events(&mut self) {
        for event in self.pinch_events.drain(..) {
            if let Some(tier) = event.feedback_tier() {
                self.stats.record(tier);
            }
            match event {
                PinchEvent::FastCollapse => {
                    log::info!("[scene] fast pinch collapsed the surface");
                }
                PinchEvent::Settled { collapsed } | PinchEvent::Toggled { collapsed } => {
                    if collapsed {
                        self.stats.collapses += 1;
                    }
                    log::info!("[scene] surface settled; collapsed={}", collapsed);
                }
                PinchEvent::MidThresholdCrossed => {
                    log::debug!("[scene] pinch passed halfway");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::new(Vec2::new(240.0, 64.0), Vec2::new(390.0, 844.0)).unwrap()
    }

    fn run_until(scene: &mut Scene, from: f64, to: f64) -> f64 {
        let mut t = from;
        while t < to {
            t += interface_core::FRAME_INTERVAL_SEC;
            scene.tick(t);
        }
        t
    }

    #[test]
    fn double_tap_plays_out_to_one_like() {
        let mut s = scene();
        assert_eq!(s.double_tap(Vec2::new(100.0, 30.0), 0.0), 3);
        assert!(s.ripple.is_active(0.5));
        let t = run_until(&mut s, 0.0, 1.2);
        assert!(s.hearts.is_idle());
        assert_eq!(s.stats.likes, 1);
        assert_eq!(s.stats.feedback_light, 1);
        run_until(&mut s, t, 3.5);
        assert!(s.is_settled(3.5));
    }

    #[test]
    fn tap_origin_is_kept_inside_the_bubble() {
        let mut s = scene();
        s.double_tap(Vec2::new(-20.0, 500.0), 0.0);
        assert_eq!(s.ripple.trigger().map(|t| t.origin), Some(Vec2::new(0.0, 64.0)));
    }

    #[test]
    fn fast_pinch_collapses_and_tap_restores() {
        let mut s = scene();
        s.pinch_changed(1.0, 0.0);
        s.pinch_changed(0.9, 0.016);
        s.pinch_ended();
        assert!(s.pinch.is_collapsed());
        assert_eq!(s.morph().size, Vec2::splat(MORPH_CIRCLE_SIZE));
        assert_eq!(s.stats.collapses, 1);
        assert!(s.stats.feedback_heavy >= 2);

        s.tap_collapsed();
        assert!(!s.pinch.is_collapsed());
        assert_eq!(s.stats.feedback_medium, 1);
    }

    #[test]
    fn teardown_leaves_nothing_ticking() {
        let mut s = scene();
        s.double_tap(Vec2::ZERO, 0.0);
        s.tick(0.05);
        assert_eq!(s.teardown(), 3);
        s.tick(1.0);
        assert_eq!(s.stats.likes, 0);
        assert!(s.visible_hearts().is_empty());
    }
}
