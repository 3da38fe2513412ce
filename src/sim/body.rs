//! Kinematic body shared by players and the ball
//!
//! Velocities are in units per frame, so one `integrate` call is one frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A circular body with per-frame friction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Velocity multiplier applied once per frame
    pub friction: f32,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32, friction: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            friction,
        }
    }

    /// Decay velocity by the friction coefficient
    #[inline]
    pub fn apply_friction(&mut self) {
        self.vel *= self.friction;
    }

    /// Move by the current velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// One frame of motion: friction, then position update
    pub fn integrate(&mut self) {
        self.apply_friction();
        self.advance();
    }

    /// Keep the whole circle inside the rectangle `[min, max]`
    ///
    /// A rectangle narrower than the body pins it to the far edge.
    pub fn clamp_within(&mut self, min: Vec2, max: Vec2) {
        let lo = min + Vec2::splat(self.radius);
        let hi = max - Vec2::splat(self.radius);
        self.pos = self.pos.max(lo).min(hi);
    }

    /// Place at `pos` and stop
    pub fn place(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integrate_applies_friction_before_moving() {
        let mut body = Body::new(Vec2::new(10.0, 10.0), 5.0, 0.5);
        body.vel = Vec2::new(4.0, -2.0);
        body.integrate();
        assert_eq!(body.vel, Vec2::new(2.0, -1.0));
        assert_eq!(body.pos, Vec2::new(12.0, 9.0));
    }

    #[test]
    fn test_clamp_within_insets_by_radius() {
        let mut body = Body::new(Vec2::new(-50.0, 900.0), 10.0, 1.0);
        body.clamp_within(Vec2::ZERO, Vec2::new(800.0, 500.0));
        assert_eq!(body.pos, Vec2::new(10.0, 490.0));
    }

    #[test]
    fn test_place_stops_body() {
        let mut body = Body::new(Vec2::ZERO, 1.0, 0.9);
        body.vel = Vec2::new(3.0, 3.0);
        body.place(Vec2::new(5.0, 6.0));
        assert_eq!(body.pos, Vec2::new(5.0, 6.0));
        assert_eq!(body.vel, Vec2::ZERO);
    }

    proptest! {
        #[test]
        fn clamp_keeps_circle_inside(
            x in -5000.0f32..5000.0,
            y in -5000.0f32..5000.0,
            r in 1.0f32..40.0,
        ) {
            let mut body = Body::new(Vec2::new(x, y), r, 1.0);
            body.clamp_within(Vec2::ZERO, Vec2::new(800.0, 500.0));
            prop_assert!(body.pos.x >= r && body.pos.x <= 800.0 - r);
            prop_assert!(body.pos.y >= r && body.pos.y <= 500.0 - r);
        }
    }
}
