//! Read-only render snapshots
//!
//! A renderer gets one of these per completed step and never sees the live
//! state, so it can't mutate anything.

use glam::Vec2;
use serde::Serialize;

use crate::consts::BALL_COLOR;
use crate::settings::GameMode;
use crate::sim::{MatchPhase, MatchState, Slot, Team};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub team: Team,
    pub slot: Slot,
    pub pos: Vec2,
    pub radius: f32,
    pub color: &'static str,
    pub label: &'static str,
    pub has_ball: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    pub radius: f32,
    pub rotation: f32,
    pub color: &'static str,
}

/// Kick power bar drawn over the ball holder
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChargeBar {
    /// Index into `Snapshot::players`
    pub holder: usize,
    /// Fill in [0, 1]
    pub fraction: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub players: Vec<PlayerView>,
    pub ball: BallView,
    pub score_a: u32,
    pub score_b: u32,
    /// `MM:SS`
    pub clock: String,
    pub phase: MatchPhase,
    pub mode: GameMode,
    /// Present only while a kick is charging and someone has the ball
    pub charge: Option<ChargeBar>,
}

impl Snapshot {
    pub fn capture(state: &MatchState) -> Self {
        let players = state
            .roster
            .players()
            .iter()
            .map(|p| PlayerView {
                team: p.team,
                slot: p.slot,
                pos: p.body.pos,
                radius: p.body.radius,
                color: p.team.color(),
                label: p.label(),
                has_ball: p.has_ball,
            })
            .collect();

        let charge = if state.kick_charge.charging {
            state.ball_holder().map(|(holder, _)| ChargeBar {
                holder,
                fraction: state.kick_charge.fraction(state.config.kick.max_power),
            })
        } else {
            None
        };

        Self {
            players,
            ball: BallView {
                pos: state.ball.body.pos,
                radius: state.ball.body.radius,
                rotation: state.ball.rotation,
                color: BALL_COLOR,
            },
            score_a: state.score_a,
            score_b: state.score_b,
            clock: state.clock(),
            phase: state.phase,
            mode: state.mode(),
            charge,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
