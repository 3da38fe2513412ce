//! The ball: rolling friction, crawl cut-off, cosmetic spin and goal detection

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::player::Team;
use crate::consts::*;
use crate::settings::FieldConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub body: Body,
    /// Accumulated spin angle (radians), visual only
    pub rotation: f32,
}

impl Ball {
    /// A stationary ball on the centre spot
    pub fn new(field: &FieldConfig) -> Self {
        Self {
            body: Body::new(Self::centre_spot(field), BALL_RADIUS, BALL_FRICTION),
            rotation: 0.0,
        }
    }

    pub fn centre_spot(field: &FieldConfig) -> Vec2 {
        Vec2::new(field.width / 2.0, field.height / 2.0)
    }

    /// Advance one frame. Returns the scoring team if the ball crossed a goal
    /// line inside the mouth this frame; the ball is left where it crossed.
    pub fn update(&mut self, field: &FieldConfig) -> Option<Team> {
        self.body.apply_friction();
        if self.body.vel.x.abs() < BALL_STOP_EPSILON {
            self.body.vel.x = 0.0;
        }
        if self.body.vel.y.abs() < BALL_STOP_EPSILON {
            self.body.vel.y = 0.0;
        }
        self.body.advance();

        if self.body.vel != Vec2::ZERO {
            self.rotation += self.body.speed() * BALL_SPIN_FACTOR;
        }

        if let Some(team) = self.check_goal(field) {
            return Some(team);
        }

        self.body
            .clamp_within(Vec2::ZERO, Vec2::new(field.width, field.height));
        None
    }

    /// Team A scores past the left line, team B past the right one
    pub fn check_goal(&self, field: &FieldConfig) -> Option<Team> {
        let Vec2 { x, y } = self.body.pos;
        let r = self.body.radius;
        if !field.in_goal_mouth(y) {
            return None;
        }
        if x < r {
            Some(Team::A)
        } else if x > field.width - r {
            Some(Team::B)
        } else {
            None
        }
    }

    /// Back to the centre spot, dead still
    pub fn reset(&mut self, field: &FieldConfig) {
        self.body.place(Self::centre_spot(field));
    }
}
