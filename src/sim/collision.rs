//! Collision detection and response
//!
//! Everything here is axis-aligned: the ball is treated as its bounding
//! square (centre ± radius) and tested against rectangles and the surface
//! edges. Responses only change direction, never speed.

use glam::Vec2;

use crate::consts::MAX_BOUNCE_ANGLE;

/// Axis-aligned rectangle, `(x, y)` is the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Strict overlap between the ball's bounding square and a rectangle.
///
/// Touching edges do not count.
#[inline]
pub fn ball_rect_overlap(pos: Vec2, radius: f32, rect: Rect) -> bool {
    pos.x + radius > rect.x
        && pos.x - radius < rect.x + rect.w
        && pos.y + radius > rect.y
        && pos.y - radius < rect.y + rect.h
}

/// Reflect off the left, right and top walls of a surface `width` wide.
///
/// Each touched wall forces the matching velocity component to point back
/// into the surface, so a ball still past a wall on the next tick keeps
/// heading inward. Returns `None` if the velocity is unchanged. The bottom
/// edge never reflects.
pub fn reflect_off_walls(pos: Vec2, radius: f32, vel: Vec2, width: f32) -> Option<Vec2> {
    let mut out = vel;
    if pos.x + radius > width {
        out.x = -vel.x.abs();
    }
    if pos.x - radius < 0.0 {
        out.x = vel.x.abs();
    }
    if pos.y - radius < 0.0 {
        out.y = vel.y.abs();
    }
    (out != vel).then_some(out)
}

/// True once the ball's bottom edge is past the bottom of the surface
#[inline]
pub fn past_bottom(pos: Vec2, radius: f32, height: f32) -> bool {
    pos.y + radius > height
}

/// Where along the paddle the ball struck, in `[-1, 1]` (0 = centre)
pub fn strike_offset(ball_x: f32, paddle: Rect) -> f32 {
    let half = paddle.w / 2.0;
    if half <= f32::EPSILON {
        return 0.0;
    }
    ((ball_x - (paddle.x + half)) / half).clamp(-1.0, 1.0)
}

/// Outgoing velocity after striking the paddle.
///
/// The strike offset maps linearly onto an angle in `[-60°, 60°]` from
/// vertical and the ball always leaves upward. The incoming speed is kept;
/// `fallback_speed` is used only if the incoming velocity is degenerate.
pub fn paddle_bounce(ball_x: f32, vel: Vec2, fallback_speed: f32, paddle: Rect) -> Vec2 {
    let angle = strike_offset(ball_x, paddle) * MAX_BOUNCE_ANGLE;
    let speed = match vel.length() {
        s if s.is_finite() && s > f32::EPSILON => s,
        _ => fallback_speed,
    };
    Vec2::new(speed * angle.sin(), -speed * angle.cos())
}

/// Brick hits reverse the vertical component only
#[inline]
pub fn brick_bounce(vel: Vec2) -> Vec2 {
    Vec2::new(vel.x, -vel.y)
}
