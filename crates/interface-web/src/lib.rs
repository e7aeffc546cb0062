#![cfg(target_arch = "wasm32")]
//! Browser bindings. The page owns drawing and the animation frame loop; each
//! class here wraps one core state machine and hands back flat numeric frames.

use glam::Vec2;
use interface_core::{
    collapse_circle, summary_card, BubbleSide, FlightPath, FoldFrame, HeartEvent,
    HeartFlightConfig, HeartFlightScheduler, LikeIncrementPolicy, MorphFrame, PinchConfig,
    PinchEvent, PinchModel, PixelateEffect, PixelateWave, PixelateWaveConfig, RippleController,
    RippleParameters, SummaryPinchModel, MORPH_CIRCLE_SIZE, PATH_EDGE_INSET,
    SUMMARY_PINCH_COLLAPSE_THRESHOLD,
};
use js_sys::{Float32Array, Uint8Array};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("interface-web starting");
    Ok(())
}

/// Page clock in seconds. Falls back to zero outside a window context.
fn now_sec() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

fn morph_array(frame: &MorphFrame) -> Float32Array {
    Float32Array::from(
        &[
            frame.size.x,
            frame.size.y,
            frame.center.x,
            frame.center.y,
            frame.corner_radius,
            frame.content_opacity,
            frame.shadow_radius,
            frame.backdrop_opacity,
        ][..],
    )
}

/// Hearts flying over one message bubble.
#[wasm_bindgen]
pub struct HeartLayer {
    scheduler: HeartFlightScheduler,
    path: FlightPath,
    size: Vec2,
    events: Vec<HeartEvent>,
    feedback: Vec<u8>,
    like_count: u32,
}

#[wasm_bindgen]
impl HeartLayer {
    /// `single` selects the one-heart preset; `like_on_completion` defers the
    /// like increment until a heart lands.
    #[wasm_bindgen(constructor)]
    pub fn new(
        width: f32,
        height: f32,
        single: bool,
        like_on_completion: bool,
    ) -> Result<HeartLayer, JsError> {
        let preset = if single {
            HeartFlightConfig::single()
        } else {
            HeartFlightConfig::burst()
        };
        let policy = if like_on_completion {
            LikeIncrementPolicy::OnCompletion
        } else {
            LikeIncrementPolicy::MidFade
        };
        let size = Vec2::new(width, height);
        Ok(HeartLayer {
            scheduler: HeartFlightScheduler::new(preset.with_policy(policy))?,
            path: FlightPath::trailing_edge(size, PATH_EDGE_INSET),
            size,
            events: Vec::new(),
            feedback: Vec::new(),
            like_count: 0,
        })
    }

    /// Switch to a bowed path curving toward the bubble's outer side. A `NaN`
    /// curvature selects the default bow.
    pub fn set_curve(&mut self, curvature: f32, left_side: bool) {
        let side = if left_side {
            BubbleSide::Left
        } else {
            BubbleSide::Right
        };
        self.path = FlightPath::side_curve(self.size, curvature, side);
    }

    /// Launch a burst; returns how many hearts were spawned.
    pub fn burst(&mut self) -> u32 {
        self.scheduler.spawn_burst(now_sec()).len() as u32
    }

    /// Launch one like-carrying heart; returns its id.
    pub fn spawn(&mut self) -> f64 {
        let opacity = self
            .scheduler
            .config()
            .opacity_tiers
            .first()
            .copied()
            .unwrap_or(1.0);
        self.scheduler.spawn(now_sec(), opacity, true) as f64
    }

    /// Advance every heart. Returns the likes gained on this frame.
    pub fn tick(&mut self) -> u32 {
        self.scheduler.tick(now_sec(), &mut self.events);
        let mut gained = 0;
        for event in self.events.drain(..) {
            match event {
                HeartEvent::IncrementLike { .. } => gained += 1,
                HeartEvent::Feedback(tier) => self.feedback.push(tier.code()),
                HeartEvent::Finished { .. } => {}
            }
        }
        self.like_count += gained;
        gained
    }

    /// Five floats per visible heart: id, x, y, scale, opacity.
    pub fn frames(&self) -> Float32Array {
        let flat: Vec<f32> = self
            .scheduler
            .frames(&self.path)
            .iter()
            .flat_map(|f| [f.id as f32, f.position.x, f.position.y, f.scale, f.opacity])
            .collect();
        Float32Array::from(&flat[..])
    }

    /// Feedback codes (1 light, 2 medium, 3 heavy) queued since the last call.
    pub fn take_feedback(&mut self) -> Uint8Array {
        let codes = Uint8Array::from(&self.feedback[..]);
        self.feedback.clear();
        codes
    }

    #[wasm_bindgen(getter)]
    pub fn like_count(&self) -> u32 {
        self.like_count
    }

    #[wasm_bindgen(getter)]
    pub fn idle(&self) -> bool {
        self.scheduler.is_idle()
    }

    pub fn teardown(&mut self) -> u32 {
        self.feedback.clear();
        self.scheduler.teardown() as u32
    }
}

enum SurfaceModel {
    Circle(PinchModel),
    Summary(SummaryPinchModel),
}

/// A surface that collapses under a pinch.
#[wasm_bindgen]
pub struct PinchSurface {
    model: SurfaceModel,
    screen: Vec2,
    events: Vec<PinchEvent>,
    feedback: Vec<u8>,
}

#[wasm_bindgen]
impl PinchSurface {
    /// `summary` selects the receding card over a summary, driven by a linear
    /// pinch, instead of the resisted collapse into a circle.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, summary: bool) -> Result<PinchSurface, JsError> {
        let model = if summary {
            SurfaceModel::Summary(SummaryPinchModel::new(SUMMARY_PINCH_COLLAPSE_THRESHOLD)?)
        } else {
            SurfaceModel::Circle(PinchModel::new(PinchConfig::default())?)
        };
        Ok(PinchSurface {
            model,
            screen: Vec2::new(width, height),
            events: Vec::new(),
            feedback: Vec::new(),
        })
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.screen = Vec2::new(width, height);
    }

    pub fn update(&mut self, magnification: f32) {
        match &mut self.model {
            SurfaceModel::Circle(m) => m.update(magnification, now_sec(), &mut self.events),
            SurfaceModel::Summary(m) => m.update(magnification),
        }
        self.drain();
    }

    /// Gesture released. Returns whether the surface ended up collapsed.
    pub fn end(&mut self) -> bool {
        match &mut self.model {
            SurfaceModel::Circle(m) => m.end(&mut self.events),
            SurfaceModel::Summary(m) => m.end(&mut self.events),
        }
        self.drain();
        self.collapsed()
    }

    /// Tap on the surface. Only reopens a collapsed one.
    pub fn tap(&mut self) {
        match &mut self.model {
            SurfaceModel::Circle(m) => m.expand(&mut self.events),
            SurfaceModel::Summary(m) => m.expand(&mut self.events),
        }
        self.drain();
    }

    /// Toolbar toggle between collapsed and expanded.
    pub fn toggle(&mut self) {
        match &mut self.model {
            SurfaceModel::Circle(m) => m.toggle(&mut self.events),
            SurfaceModel::Summary(m) => m.toggle(&mut self.events),
        }
        self.drain();
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f32 {
        match &self.model {
            SurfaceModel::Circle(m) => m.scale(),
            SurfaceModel::Summary(_) => 1.0,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn collapsed(&self) -> bool {
        match &self.model {
            SurfaceModel::Circle(m) => m.is_collapsed(),
            SurfaceModel::Summary(m) => m.is_collapsed(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn progress(&self) -> f32 {
        match &self.model {
            SurfaceModel::Circle(m) => m.morph_progress(),
            SurfaceModel::Summary(m) => m.progress(),
        }
    }

    /// width, height, center x, center y, corner radius, content opacity,
    /// shadow radius, backdrop opacity.
    pub fn morph(&self) -> Float32Array {
        let frame = match &self.model {
            SurfaceModel::Circle(m) => {
                collapse_circle(m.morph_progress(), self.screen, MORPH_CIRCLE_SIZE)
            }
            SurfaceModel::Summary(m) => summary_card(m.progress(), self.screen),
        };
        morph_array(&frame)
    }

    pub fn take_feedback(&mut self) -> Uint8Array {
        let codes = Uint8Array::from(&self.feedback[..]);
        self.feedback.clear();
        codes
    }
}

impl PinchSurface {
    fn drain(&mut self) {
        let feedback = &mut self.feedback;
        feedback.extend(
            self.events
                .drain(..)
                .filter_map(|e| e.feedback_tier())
                .map(|t| t.code()),
        );
    }
}

/// An image that scales down and folds while pinched, then springs back.
#[wasm_bindgen]
pub struct FoldSurface {
    frame: FoldFrame,
}

#[wasm_bindgen]
impl FoldSurface {
    #[wasm_bindgen(constructor)]
    pub fn new() -> FoldSurface {
        FoldSurface {
            frame: FoldFrame::REST,
        }
    }

    pub fn update(&mut self, magnification: f32) {
        self.frame = FoldFrame::from_magnification(magnification);
    }

    pub fn end(&mut self) {
        self.frame = FoldFrame::REST;
    }

    #[wasm_bindgen(getter)]
    pub fn scale(&self) -> f32 {
        self.frame.scale
    }

    #[wasm_bindgen(getter)]
    pub fn fold(&self) -> f32 {
        self.frame.fold
    }
}

impl Default for FoldSurface {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
pub struct RippleSurface {
    ripple: RippleController,
}

#[wasm_bindgen]
impl RippleSurface {
    /// `demo` selects the strongly tinted preset.
    #[wasm_bindgen(constructor)]
    pub fn new(demo: bool) -> Result<RippleSurface, JsError> {
        let params = if demo {
            RippleParameters::demo()
        } else {
            RippleParameters::message_bubble()
        };
        Ok(RippleSurface {
            ripple: RippleController::new(params)?,
        })
    }

    pub fn set_params(
        &mut self,
        amplitude: f32,
        frequency: f32,
        decay: f32,
        speed: f32,
    ) -> Result<(), JsError> {
        let params = RippleParameters {
            amplitude,
            frequency,
            decay,
            speed,
            ..*self.ripple.params()
        };
        self.ripple.set_params(params)?;
        Ok(())
    }

    /// Fire from a point in layer space; returns the new trigger counter.
    pub fn fire(&mut self, x: f32, y: f32) -> f64 {
        self.ripple.fire(Vec2::new(x, y), now_sec()).counter as f64
    }

    /// origin x, origin y, elapsed, amplitude, frequency, decay, speed, tint;
    /// `undefined` while the layer should be drawn untouched.
    pub fn uniforms(&self) -> Option<Float32Array> {
        self.ripple
            .uniforms(now_sec())
            .map(|u| Float32Array::from(&bytemuck::cast::<_, [f32; 8]>(u)[..]))
    }

    #[wasm_bindgen(getter)]
    pub fn max_sample_offset(&self) -> f32 {
        self.ripple.params().max_sample_offset().x
    }
}

#[wasm_bindgen]
pub struct PixelateSurface {
    wave: PixelateWave,
    still: PixelateEffect,
}

#[wasm_bindgen]
impl PixelateSurface {
    #[wasm_bindgen(constructor)]
    pub fn new(layer_width: f32) -> Result<PixelateSurface, JsError> {
        let mut wave = PixelateWave::new(PixelateWaveConfig::default())?;
        wave.set_layer_width(layer_width);
        Ok(PixelateSurface {
            wave,
            still: PixelateEffect::default(),
        })
    }

    /// Block size for the static, non-animated pixelation.
    pub fn set_block_size(&mut self, block_size: f32) {
        self.still = PixelateEffect::new(block_size);
    }

    /// Static block size, or `undefined` when it would be a pass-through.
    #[wasm_bindgen(getter)]
    pub fn block_size(&self) -> Option<f32> {
        self.still.is_enabled().then(|| self.still.block_size())
    }

    /// Start a sweep; `false` while one is already running.
    pub fn toggle(&mut self) -> bool {
        self.wave.toggle(now_sec())
    }

    /// Returns the new pixelated state on the frame a sweep completes.
    pub fn tick(&mut self) -> Option<bool> {
        self.wave.tick(now_sec())
    }

    #[wasm_bindgen(getter)]
    pub fn pixelated(&self) -> bool {
        self.wave.is_pixelated()
    }

    /// progress, layer width, band softness, max block size.
    pub fn uniforms(&self) -> Float32Array {
        let u = self.wave.uniforms();
        Float32Array::from(&[u.progress, u.layer_width, u.band_softness, u.max_block_size][..])
    }
}
