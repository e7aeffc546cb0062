// Host-side tests for tuning constants and their relationships.

use interface_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive() {
    assert!(FRAME_INTERVAL_SEC > 0.0);
    assert!(BURST_SCALE_IN_SEC > 0.0 && BURST_FLIGHT_SEC > 0.0);
    assert!(SINGLE_SCALE_IN_SEC > 0.0 && SINGLE_FLIGHT_SEC > 0.0);
    assert!(BURST_STAGGER_SEC >= 0.0);
    assert!(RIPPLE_DURATION_SEC > 0.0);
    assert!(PIXELATE_WAVE_DURATION_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fractions_lie_in_unit_range() {
    assert!((0.0..=1.0).contains(&HEART_FADE_START));
    assert!((0.0..=1.0).contains(&HEART_LIKE_INCREMENT_PROGRESS));
    assert!((0.0..=1.0).contains(&PATH_DEFAULT_CURVATURE));
    assert!((0.0..=1.0).contains(&PINCH_VELOCITY_RETAIN));
    assert!((0.0..=1.0).contains(&PINCH_RELEASE_RELAX));
    assert!((0.0..=1.0).contains(&PIXELATE_BAND_SOFTNESS));
    for tier in BURST_OPACITY_TIERS {
        assert!(tier > 0.0 && tier <= 1.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pinch_thresholds_are_ordered() {
    assert!(PINCH_MIN_SCALE < PINCH_COLLAPSE_THRESHOLD);
    assert!(PINCH_COLLAPSE_THRESHOLD < 1.0);
    assert!(PINCH_OVERSHOOT_CAP >= 1.0);
    assert!(PINCH_RESISTANCE_EXPONENT > 1.0);
    assert!(PINCH_FAST_COLLAPSE_VELOCITY < PINCH_RELEASE_VELOCITY_CUTOFF);
    assert!(PINCH_RELEASE_VELOCITY_CUTOFF < 0.0);
    assert!(PINCH_MID_FEEDBACK_REARM < PINCH_MID_FEEDBACK_ARM);
    // release relaxation can never push the threshold past the rest scale
    assert!(PINCH_COLLAPSE_THRESHOLD + (1.0 - PINCH_COLLAPSE_THRESHOLD) * PINCH_RELEASE_RELAX < 1.0);
}

#[test]
fn default_configs_validate() {
    assert!(HeartFlightConfig::burst().validate().is_ok());
    assert!(HeartFlightConfig::single().validate().is_ok());
    assert!(PinchConfig::default().validate().is_ok());
    assert!(RippleParameters::default().validate().is_ok());
    assert!(PixelateWaveConfig::default().validate().is_ok());
}
