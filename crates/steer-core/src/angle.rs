//! Degree-based angle utilities.
//!
//! # Convention
//!
//! Orientation 0 faces +Y ("up") and increases counterclockwise, matching the
//! 2-D euler-angle convention of the engines this framework steers for.
//! Bearings derived from direction vectors therefore come out of
//! `360 − atan2(dx, dy)`, wrapped to `[0, 360)`.

use glam::Vec2;

/// Wrap an angle in degrees to `[0, 360)`.
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

/// Unit vector pointing along `orientation` degrees (the agent's "forward").
///
/// Orientation 0 → `(0, 1)`; 90 → `(-1, 0)`.
#[inline]
pub fn forward(orientation: f32) -> Vec2 {
    let (sin, cos) = orientation.to_radians().sin_cos();
    Vec2::new(-sin, cos)
}

/// Rotate `v` counterclockwise by `deg` degrees.
#[inline]
pub fn rotate_degrees(v: Vec2, deg: f32) -> Vec2 {
    let (sin, cos) = deg.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Orientation an agent at `from` must hold to face `to`, in `[0, 360)`.
#[inline]
pub fn bearing_degrees(from: Vec2, to: Vec2) -> f32 {
    vector_bearing(to - from)
}

/// Orientation matching the heading of `v`, in `[0, 360)`.
///
/// `v = (0, 1)` → 0; `v = (-1, 0)` → 90.  A zero vector maps to 0 — callers
/// that must not react at rest check for that case themselves.
#[inline]
pub fn vector_bearing(v: Vec2) -> f32 {
    wrap_degrees(360.0 - v.x.atan2(v.y).to_degrees())
}

/// Signed rotation (degrees) to turn from `current` to `target`, both in
/// `[0, 360)`, choosing the direction with the smaller magnitude.
///
/// Candidates are the counterclockwise delta `target − current` and the
/// clockwise delta `current + (360 − target)`; the clockwise option is taken
/// only when it is strictly smaller, so an exact 180° split resolves
/// counterclockwise.
#[inline]
pub fn shortest_rotation(current: f32, target: f32) -> f32 {
    let ccw = target - current;
    let cw = current + (360.0 - target);

    if ccw.abs() > cw.abs() { -cw } else { ccw }
}
