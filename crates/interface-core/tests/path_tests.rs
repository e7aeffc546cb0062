// Host-side tests for flight path sampling.

use glam::Vec2;
use interface_core::{BubbleSide, FlightPath, PATH_DEFAULT_CURVATURE, PATH_EDGE_INSET};

fn approx(a: Vec2, b: Vec2) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn trailing_edge_line_endpoints_and_midpoint() {
    let (w, h) = (240.0, 96.0);
    let path = FlightPath::trailing_edge(Vec2::new(w, h), 16.0);

    assert_eq!(path.sample(0.0), Vec2::new(w - 16.0, h));
    assert!(approx(path.sample(1.0), Vec2::new(w - 16.0, 0.0)));

    let mid = path.sample(0.5);
    assert!((mid.x - (w - 16.0)).abs() < 1e-5);
    assert!((mid.y - h / 2.0).abs() < 1e-5);
}

#[test]
fn non_positive_progress_returns_start_exactly() {
    let path = FlightPath::side_curve(Vec2::new(300.0, 120.0), 0.6, BubbleSide::Left);
    let start = path.start();
    assert_eq!(path.sample(0.0), start);
    assert_eq!(path.sample(-0.25), start);
    assert_eq!(path.sample(f32::NAN), start);
}

#[test]
fn progress_above_one_clamps_to_end() {
    let path = FlightPath::side_curve(Vec2::new(300.0, 120.0), 0.6, BubbleSide::Right);
    assert!(approx(path.sample(4.0), path.end()));
}

#[test]
fn side_curve_bows_inward_on_the_correct_edge() {
    let size = Vec2::new(300.0, 120.0);
    let inset = PATH_EDGE_INSET;

    let left = FlightPath::side_curve(size, 1.0, BubbleSide::Left);
    assert_eq!(left.start(), Vec2::new(300.0 - inset, 120.0));
    assert_eq!(left.end(), Vec2::new(300.0 - inset, 0.0));
    // halfway up, the bow has moved left of the edge
    assert!(left.sample(0.5).x < 300.0 - inset);

    let right = FlightPath::side_curve(size, 1.0, BubbleSide::Right);
    assert_eq!(right.start(), Vec2::new(inset, 120.0));
    assert!(right.sample(0.5).x > inset);
}

#[test]
fn side_curve_offset_is_capped() {
    // wide bubble: offset capped at 120, so the quad midpoint is inset + 60
    let path = FlightPath::side_curve(Vec2::new(1000.0, 100.0), 1.0, BubbleSide::Right);
    match path {
        FlightPath::Quad { control, .. } => {
            assert!((control.x - (PATH_EDGE_INSET + 120.0)).abs() < 1e-4);
            assert!((control.y - 50.0).abs() < 1e-4);
        }
        FlightPath::Line { .. } => panic!("side_curve must build a quadratic"),
    }
    assert!((path.sample(0.5).x - (PATH_EDGE_INSET + 60.0)).abs() < 1e-3);
}

#[test]
fn zero_curvature_and_narrow_bubbles_stay_on_the_edge() {
    let straight = FlightPath::side_curve(Vec2::new(300.0, 80.0), 0.0, BubbleSide::Left);
    for i in 0..=10 {
        let p = straight.sample(i as f32 / 10.0);
        assert!((p.x - (300.0 - PATH_EDGE_INSET)).abs() < 1e-4);
    }

    // narrower than both insets: no room to bow at all
    let narrow = FlightPath::side_curve(Vec2::new(20.0, 80.0), 1.0, BubbleSide::Right);
    assert!((narrow.sample(0.5).x - PATH_EDGE_INSET).abs() < 1e-4);
}

#[test]
fn non_finite_curvature_uses_the_default_bow() {
    let size = Vec2::new(1000.0, 100.0);
    let expected = FlightPath::side_curve(size, PATH_DEFAULT_CURVATURE, BubbleSide::Right);
    assert_eq!(FlightPath::side_curve(size, f32::NAN, BubbleSide::Right), expected);
    assert_eq!(
        FlightPath::side_curve(size, f32::INFINITY, BubbleSide::Right),
        expected
    );
    match expected {
        FlightPath::Quad { control, .. } => {
            assert!((control.x - (PATH_EDGE_INSET + 120.0 * PATH_DEFAULT_CURVATURE)).abs() < 1e-3);
        }
        FlightPath::Line { .. } => panic!("side_curve must build a quadratic"),
    }
}
