// Host-side tests for easing curves.

use interface_core::{ease_in_out_quad, Easing};

#[test]
fn ease_in_out_hits_endpoints_and_midpoint() {
    assert_eq!(ease_in_out_quad(0.0), 0.0);
    assert_eq!(ease_in_out_quad(1.0), 1.0);
    assert!((ease_in_out_quad(0.5) - 0.5).abs() < 1e-6);
}

#[test]
fn ease_in_out_is_monotonic_over_unit_interval() {
    let mut prev = ease_in_out_quad(0.0);
    for i in 1..=1000 {
        let t = i as f32 / 1000.0;
        let v = ease_in_out_quad(t);
        assert!(v >= prev, "ease decreased at t={t}: {prev} -> {v}");
        assert!((0.0..=1.0).contains(&v));
        prev = v;
    }
}

#[test]
fn ease_in_out_is_slow_at_the_ends() {
    // quadratic start: first tenth of the time covers 2% of the distance
    assert!((ease_in_out_quad(0.1) - 0.02).abs() < 1e-6);
    assert!((ease_in_out_quad(0.9) - 0.98).abs() < 1e-6);
}

#[test]
fn sample_clamps_out_of_range_input() {
    let e = Easing::EaseInOutQuad;
    assert_eq!(e.sample(-3.0), 0.0);
    assert_eq!(e.sample(7.5), 1.0);
    assert_eq!(e.sample(f32::NAN), 0.0);
    assert_eq!(Easing::Linear.sample(0.25), 0.25);
    assert_eq!(Easing::default(), Easing::EaseInOutQuad);
}
