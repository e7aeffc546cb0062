// Shared animation tuning constants used by the native driver and the web bindings.

// Frame clock
pub const FRAME_INTERVAL_SEC: f64 = 1.0 / 60.0; // nominal host tick period

// Flight path layout (points)
pub const PATH_EDGE_INSET: f32 = 16.0; // horizontal inset of the path from the bubble edge
pub const PATH_MAX_CURVE_OFFSET: f32 = 120.0; // cap on control-point displacement
pub const PATH_DEFAULT_CURVATURE: f32 = 0.35;

// Heart burst (message composer)
pub const BURST_SCALE_IN_SEC: f64 = 0.15;
pub const BURST_FLIGHT_SEC: f64 = 0.6;
pub const BURST_STAGGER_SEC: f64 = 0.12; // delay between consecutive burst spawns
pub const BURST_OPACITY_TIERS: [f32; 3] = [1.0, 0.7, 0.5];

// Single heart (path demo)
pub const SINGLE_SCALE_IN_SEC: f64 = 0.2;
pub const SINGLE_FLIGHT_SEC: f64 = 0.3;

// Heart fade and like increment, as flight progress fractions
pub const HEART_FADE_START: f32 = 0.75;
pub const HEART_LIKE_INCREMENT_PROGRESS: f32 = 0.75;

// Pinch resistance and collapse
pub const PINCH_MIN_SCALE: f32 = 0.35;
pub const PINCH_COLLAPSE_THRESHOLD: f32 = 0.75;
pub const PINCH_RESISTANCE_EXPONENT: f32 = 2.8; // > 1 stiffens the start of a pinch
pub const PINCH_OVERSHOOT_CAP: f32 = 1.05; // slight allowance for pinching out
pub const PINCH_FAST_COLLAPSE_VELOCITY: f32 = -3.5; // magnification units per second
pub const PINCH_RELEASE_VELOCITY_CUTOFF: f32 = -1.5;
pub const PINCH_RELEASE_VELOCITY_SPAN: f32 = 3.0; // velocity range over which the threshold relaxes
pub const PINCH_RELEASE_RELAX: f32 = 0.4; // max fraction of (1 - threshold) added on release
pub const PINCH_VELOCITY_RETAIN: f32 = 0.3; // new = retain*old + (1-retain)*instant
pub const PINCH_MIN_SAMPLE_DT: f64 = 0.001;
pub const PINCH_MID_FEEDBACK_ARM: f32 = 0.5;
pub const PINCH_MID_FEEDBACK_REARM: f32 = 0.3;

// Linear pinch on the summary card, and the fold trigger
pub const SUMMARY_PINCH_COLLAPSE_THRESHOLD: f32 = 0.75; // raw magnification at release
pub const FOLD_MIN_SCALE: f32 = 0.2;

// Morph geometry (points)
pub const MORPH_CIRCLE_SIZE: f32 = 72.0;
pub const SUMMARY_COLLAPSED_DIAMETER: f32 = 600.0;
pub const SUMMARY_MAX_SHADOW_RADIUS: f32 = 20.0;

// Ripple shader defaults
pub const RIPPLE_AMPLITUDE: f32 = 12.0;
pub const RIPPLE_FREQUENCY: f32 = 15.0;
pub const RIPPLE_DECAY: f32 = 8.0;
pub const RIPPLE_SPEED: f32 = 1200.0;
pub const RIPPLE_DURATION_SEC: f32 = 3.0;
pub const RIPPLE_TINT_INTENSITY: f32 = 1.0;
pub const RIPPLE_MESSAGE_TINT: f32 = 0.01; // barely-there tint on chat bubbles
pub const RIPPLE_DEMO_TINT: f32 = 0.3;

// Pixelation wave
pub const PIXELATE_WAVE_DURATION_SEC: f64 = 0.5;
pub const PIXELATE_MAX_BLOCK_SIZE: f32 = 12.0;
pub const PIXELATE_BAND_SOFTNESS: f32 = 0.08; // soft edge width in normalized layer space
pub const PIXELATE_DEFAULT_LAYER_WIDTH: f32 = 400.0;
pub const PIXELATE_COMPLETE_EPSILON: f32 = 0.01;
pub const PIXELATE_DEFAULT_BLOCK_SIZE: f32 = 8.0;
