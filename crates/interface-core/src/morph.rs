//! Stateless geometry for surfaces that morph with pinch collapse progress.

use crate::constants::{SUMMARY_COLLAPSED_DIAMETER, SUMMARY_MAX_SHADOW_RADIUS};
use crate::state::{clamp_unit, lerp};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphFrame {
    pub size: Vec2,
    pub center: Vec2,
    pub corner_radius: f32,
    pub content_opacity: f32,
    pub shadow_radius: f32,
    /// Opacity of whatever sits underneath the morphing surface
    pub backdrop_opacity: f32,
}

/// Full-screen card shrinking into a circle of `circle_size` points.
pub fn collapse_circle(progress: f32, screen: Vec2, circle_size: f32) -> MorphFrame {
    let p = clamp_unit(progress);
    let max_radius = screen.x.min(screen.y) / 2.0;
    MorphFrame {
        size: screen.lerp(Vec2::splat(circle_size), p),
        center: screen / 2.0,
        corner_radius: p * max_radius,
        content_opacity: 1.0 - p,
        shadow_radius: 0.0,
        backdrop_opacity: 0.0,
    }
}

/// Chat surface receding into a large disc over the summary underneath,
/// which fades in as the card recedes.
pub fn summary_card(progress: f32, screen: Vec2) -> MorphFrame {
    let p = clamp_unit(progress);
    let diameter = SUMMARY_COLLAPSED_DIAMETER;
    MorphFrame {
        size: screen.lerp(Vec2::splat(diameter), p),
        center: screen / 2.0,
        corner_radius: lerp(0.0, diameter / 2.0, p),
        content_opacity: 1.0,
        shadow_radius: lerp(0.0, SUMMARY_MAX_SHADOW_RADIUS, p),
        backdrop_opacity: p,
    }
}
