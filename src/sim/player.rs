//! Players: teams, roster slots, intent-driven movement and confinement

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::input::Intent;
use crate::consts::*;
use crate::settings::FieldConfig;

/// Side of the match. Team A defends the left goal line, team B the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::A, Team::B];

    pub fn opponent(&self) -> Team {
        match self {
            Team::A => Team::B,
            Team::B => Team::A,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Team::A => "A",
            Team::B => "B",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Team::A => TEAM_A_COLOR,
            Team::B => TEAM_B_COLOR,
        }
    }

    /// x coordinate of the goal line this team defends
    pub fn own_goal_x(&self, field: &FieldConfig) -> f32 {
        match self {
            Team::A => 0.0,
            Team::B => field.width,
        }
    }

    /// Unit x direction from this team's goal toward the opponent's
    pub fn attack_dir(&self) -> f32 {
        match self {
            Team::A => 1.0,
            Team::B => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Field,
    Goalkeeper,
}

/// Fixed formation slot within a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Keeper,
    UpperBack,
    LowerBack,
    UpperForward,
    LowerForward,
}

impl Slot {
    pub const ALL: [Slot; 5] = [
        Slot::Keeper,
        Slot::UpperBack,
        Slot::LowerBack,
        Slot::UpperForward,
        Slot::LowerForward,
    ];

    pub fn role(&self) -> Role {
        match self {
            Slot::Keeper => Role::Goalkeeper,
            _ => Role::Field,
        }
    }

    /// Kick-off spot as (distance from own goal line, offset from mid-height)
    fn formation_offset(&self) -> (f32, f32) {
        match self {
            Slot::Keeper => (KEEPER_AREA_DEPTH / 2.0, 0.0),
            Slot::UpperBack => (300.0, -80.0),
            Slot::LowerBack => (300.0, 80.0),
            // Short of the centre line, or the two front pairs overlap at kick-off
            Slot::UpperForward => (350.0, -40.0),
            Slot::LowerForward => (350.0, 40.0),
        }
    }

    /// Kick-off position for this slot on the given team's half
    pub fn formation_position(&self, team: Team, field: &FieldConfig) -> Vec2 {
        let (depth, dy) = self.formation_offset();
        let x = team.own_goal_x(field) + team.attack_dir() * depth;
        Vec2::new(x, field.mid_y() + dy)
    }
}

/// A player on the pitch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub team: Team,
    pub slot: Slot,
    pub body: Body,
    /// Base running speed (units/frame)
    pub speed: f32,
    /// Touching the ball this frame. Owned by the collision pass.
    pub has_ball: bool,
}

impl Player {
    /// Spawn at the slot's formation spot
    pub fn new(team: Team, slot: Slot, field: &FieldConfig) -> Self {
        let (radius, speed) = match slot.role() {
            Role::Goalkeeper => (GOALKEEPER_RADIUS, GOALKEEPER_SPEED),
            Role::Field => (PLAYER_RADIUS, PLAYER_SPEED),
        };
        Self {
            team,
            slot,
            body: Body::new(slot.formation_position(team, field), radius, PLAYER_FRICTION),
            speed,
            has_ball: false,
        }
    }

    pub fn role(&self) -> Role {
        self.slot.role()
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.role() == Role::Goalkeeper
    }

    /// Shirt label
    pub fn label(&self) -> &'static str {
        if self.is_goalkeeper() {
            "G"
        } else {
            match self.team {
                Team::A => "1",
                Team::B => "2",
            }
        }
    }

    /// Turn held directions into velocity. Held axes snap to full speed,
    /// idle axes bleed off by `IDLE_DAMPING` on top of friction.
    pub fn apply_intent(&mut self, intent: &Intent, sprint_factor: f32) {
        let speed = if intent.sprint {
            self.speed * sprint_factor
        } else {
            self.speed
        };

        match intent.axis_x() {
            Some(dir) => self.body.vel.x = dir * speed,
            None => self.body.vel.x *= IDLE_DAMPING,
        }
        match intent.axis_y() {
            Some(dir) => self.body.vel.y = dir * speed,
            None => self.body.vel.y *= IDLE_DAMPING,
        }
    }

    /// Head straight for `target` at `speed`. Standing on the target means standing still.
    pub fn steer_toward(&mut self, target: Vec2, speed: f32) {
        self.body.vel = (target - self.body.pos).normalize_or_zero() * speed;
    }

    /// Legal area for this player's centre-inclusive circle
    pub fn bounds(&self, field: &FieldConfig) -> (Vec2, Vec2) {
        match self.role() {
            Role::Field => (Vec2::ZERO, Vec2::new(field.width, field.height)),
            Role::Goalkeeper => {
                let goal_x = self.team.own_goal_x(field);
                let (left, right) = match self.team {
                    Team::A => (goal_x, goal_x + KEEPER_AREA_DEPTH),
                    Team::B => (goal_x - KEEPER_AREA_DEPTH, goal_x),
                };
                (
                    Vec2::new(left, field.mid_y() - KEEPER_AREA_HALF_HEIGHT),
                    Vec2::new(right, field.mid_y() + KEEPER_AREA_HALF_HEIGHT),
                )
            }
        }
    }

    /// One frame of motion, then confinement
    pub fn update(&mut self, field: &FieldConfig) {
        self.body.integrate();
        let (min, max) = self.bounds(field);
        self.body.clamp_within(min, max);
    }

    /// Back to the kick-off spot, standing still
    pub fn return_to_formation(&mut self, field: &FieldConfig) {
        self.body.place(self.slot.formation_position(self.team, field));
    }
}
