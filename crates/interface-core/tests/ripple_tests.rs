// Host-side tests for the ripple trigger clock and its shader inputs.

use glam::Vec2;
use interface_core::*;

#[test]
fn enabled_only_strictly_inside_the_window() {
    assert!(!ripple_enabled(0.0, 3.0));
    assert!(ripple_enabled(0.001, 3.0));
    assert!(ripple_enabled(2.999, 3.0));
    assert!(!ripple_enabled(3.0, 3.0));
    assert!(!ripple_enabled(4.0, 3.0));
    assert!(!ripple_enabled(-1.0, 3.0));
}

#[test]
fn controller_is_a_pass_through_before_the_first_fire() {
    let ripple = RippleController::default();
    assert_eq!(ripple.counter(), 0);
    assert!(ripple.trigger().is_none());
    assert_eq!(ripple.elapsed(10.0), None);
    assert!(!ripple.is_active(10.0));
    assert!(ripple.uniforms(10.0).is_none());
}

#[test]
fn fired_ripple_runs_for_its_duration_then_holds() {
    let mut ripple = RippleController::new(RippleParameters::message_bubble()).unwrap();
    let origin = Vec2::new(40.0, 25.0);
    let trigger = ripple.fire(origin, 2.0);
    assert_eq!(trigger.counter, 1);
    assert_eq!(trigger.origin, origin);

    // frame of the fire itself: elapsed is zero, nothing is drawn
    assert_eq!(ripple.elapsed(2.0), Some(0.0));
    assert!(ripple.uniforms(2.0).is_none());

    let u = ripple.uniforms(3.5).expect("ripple is mid-flight");
    assert_eq!(u.origin, [40.0, 25.0]);
    assert!((u.elapsed - 1.5).abs() < 1e-6);
    assert_eq!(u.amplitude, RIPPLE_AMPLITUDE);
    assert_eq!(u.tint_intensity, RIPPLE_MESSAGE_TINT);
    assert!(ripple.is_active(3.5));

    // the clock holds at the duration and the effect switches off
    assert_eq!(ripple.elapsed(5.0), Some(RIPPLE_DURATION_SEC));
    assert_eq!(ripple.elapsed(60.0), Some(RIPPLE_DURATION_SEC));
    assert!(!ripple.is_active(5.0));
    assert!(ripple.uniforms(60.0).is_none());
}

#[test]
fn refiring_supersedes_the_running_ripple() {
    let mut ripple = RippleController::default();
    ripple.fire(Vec2::ZERO, 0.0);
    ripple.fire(Vec2::new(10.0, 10.0), 1.0);
    assert_eq!(ripple.counter(), 2);

    // the clock restarted at the second fire
    assert_eq!(ripple.elapsed(1.0), Some(0.0));
    let u = ripple.uniforms(2.0).unwrap();
    assert!((u.elapsed - 1.0).abs() < 1e-6);
    assert_eq!(u.origin, [10.0, 10.0]);
    // still running past the first ripple's end
    assert!(ripple.is_active(3.5));
}

#[test]
fn running_ripple_keeps_its_parameter_snapshot() {
    let mut ripple = RippleController::new(RippleParameters::demo()).unwrap();
    ripple.fire(Vec2::ZERO, 0.0);
    ripple
        .set_params(RippleParameters {
            amplitude: 4.0,
            duration_sec: 1.0,
            ..RippleParameters::demo()
        })
        .unwrap();

    let u = ripple.uniforms(2.0).expect("first ripple still inside its 3 s window");
    assert_eq!(u.amplitude, RIPPLE_AMPLITUDE);
    assert_eq!(u.tint_intensity, RIPPLE_DEMO_TINT);

    ripple.fire(Vec2::ZERO, 10.0);
    assert_eq!(ripple.uniforms(10.5).unwrap().amplitude, 4.0);
    assert!(ripple.uniforms(11.0).is_none());
}

#[test]
fn parameters_expose_sample_offset_and_reject_bad_values() {
    let params = RippleParameters::default();
    assert_eq!(params.max_sample_offset(), Vec2::splat(RIPPLE_AMPLITUDE));
    assert!(params.validate().is_ok());

    let zero_duration = RippleParameters {
        duration_sec: 0.0,
        ..params
    };
    assert!(RippleController::new(zero_duration).is_err());

    let mut ripple = RippleController::default();
    let negative = RippleParameters {
        amplitude: -1.0,
        ..params
    };
    assert!(matches!(
        ripple.set_params(negative),
        Err(ConfigError::OutOfRange { name: "amplitude", .. })
    ));
    assert_eq!(ripple.params(), &params);
}

#[test]
fn uniforms_are_plain_old_data() {
    let mut ripple = RippleController::default();
    ripple.fire(Vec2::new(1.0, 2.0), 0.0);
    let u = ripple.uniforms(0.5).unwrap();
    let bytes: &[u8] = bytemuck::bytes_of(&u);
    assert_eq!(bytes.len(), 8 * 4);
}
