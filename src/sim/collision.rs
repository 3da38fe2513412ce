//! Circle-circle collision: ball possession, kicks and player separation
//!
//! Two passes per frame, both in roster order:
//! 1. player vs ball (possession, push-out, kicks)
//! 2. player vs player (symmetric positional push, no velocity change)
//!
//! In pass 1 every touching player writes the ball's position and velocity,
//! so the last toucher in roster order decides where the ball goes.

use glam::Vec2;

use super::ball::Ball;
use super::input::KickCharge;
use super::player::{Player, Team};
use super::state::{GameEvent, MatchState};

/// Overlap between two circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    /// Unit vector from the first centre toward the second
    pub normal: Vec2,
    /// Sum of radii minus centre distance (> 0)
    pub penetration: f32,
}

/// Check whether two circles overlap
///
/// Coincident centres resolve along +x.
pub fn circle_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> Option<Overlap> {
    let delta = b - a;
    let distance = delta.length();
    let reach = a_radius + b_radius;
    if distance >= reach {
        return None;
    }
    let angle = delta.y.atan2(delta.x);
    Some(Overlap {
        normal: Vec2::new(angle.cos(), angle.sin()),
        penetration: reach - distance,
    })
}

/// Player-ball pass
///
/// `kick_held` says whether a team is holding kick this frame. A kick fires
/// only for a player who already had the ball coming into the pass, and only
/// once per frame; the charge is consumed when it does.
pub fn resolve_player_ball(
    players: &mut [Player],
    ball: &mut Ball,
    kick_held: impl Fn(Team) -> bool,
    charge: &mut KickCharge,
) -> Option<GameEvent> {
    let mut kick = None;

    for player in players.iter_mut() {
        let Some(overlap) = circle_overlap(
            player.body.pos,
            player.body.radius,
            ball.body.pos,
            ball.body.radius,
        ) else {
            player.has_ball = false;
            continue;
        };

        if kick.is_none() && player.has_ball && kick_held(player.team) {
            let power = charge.power;
            ball.body.vel = overlap.normal * power;
            player.has_ball = false;
            charge.reset();
            log::debug!(
                "Team {} {:?} kicked with power {:.1}",
                player.team.as_str(),
                player.slot,
                power
            );
            kick = Some(GameEvent::Kick {
                team: player.team,
                slot: player.slot,
                power,
            });
        } else {
            player.has_ball = true;
            ball.body.pos += overlap.normal * overlap.penetration * 0.5;
            ball.body.vel = player.body.vel * 0.5;
        }
    }

    kick
}

/// Player-player pass: push every overlapping pair apart, half each
pub fn separate_players(players: &mut [Player]) {
    for i in 0..players.len() {
        let (head, tail) = players.split_at_mut(i + 1);
        let first = &mut head[i];
        for second in tail.iter_mut() {
            if let Some(overlap) = circle_overlap(
                first.body.pos,
                first.body.radius,
                second.body.pos,
                second.body.radius,
            ) {
                let push = overlap.normal * overlap.penetration * 0.5;
                first.body.pos -= push;
                second.body.pos += push;
            }
        }
    }
}

/// Run both passes over the match
pub fn resolve_collisions(state: &mut MatchState) -> Option<GameEvent> {
    let mode = state.config.mode;
    let inputs = state.inputs;
    let kick = resolve_player_ball(
        state.roster.players_mut(),
        &mut state.ball,
        |team| MatchState::is_human_in(mode, team) && inputs.get(team).kick,
        &mut state.kick_charge,
    );
    separate_players(state.roster.players_mut());
    kick
}
