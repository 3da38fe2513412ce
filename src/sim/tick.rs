//! Per-frame simulation step
//!
//! Order within a frame (the clock runs after all of these):
//! 1. controllers (human intents or AI) set velocities, kick charge advances
//! 2. players integrate and clamp
//! 3. ball integrates; a goal resets the pitch immediately
//! 4. collisions (possession and kicks, then player separation)

use super::ai;
use super::collision::resolve_collisions;
use super::player::Team;
use super::state::{GameEvent, MatchPhase, MatchState};

/// Advance a running match by one frame that took `elapsed_ms` of wall time
///
/// Frames that are negative or at least `max_frame_ms` long leave the clock
/// alone but still simulate. Stopped and paused matches don't change. The
/// frame that runs the clock out is simulated first, so a goal on it counts
/// toward the final score.
pub fn tick(state: &mut MatchState, elapsed_ms: f64) -> Vec<GameEvent> {
    if state.phase != MatchPhase::Running {
        return Vec::new();
    }

    let mut events = simulate_frame(state);

    if (0.0..state.config.max_frame_ms).contains(&elapsed_ms) {
        state.time_left -= elapsed_ms / 1000.0;
        if state.time_left <= 0.0 {
            state.time_left = 0.0;
            state.phase = MatchPhase::Stopped;
            log::info!("{}", state.final_summary());
            events.push(GameEvent::FullTime {
                team_a: state.score_a,
                team_b: state.score_b,
            });
        }
    } else {
        log::debug!("Clock skipped a {elapsed_ms:.1} ms frame");
    }

    events
}

/// One simulation step, no clock
pub fn simulate_frame(state: &mut MatchState) -> Vec<GameEvent> {
    let config = state.config;
    let mut events = Vec::new();
    state.frame += 1;

    // Controllers
    for team in Team::ALL {
        if state.is_human(team) {
            let intent = *state.inputs.get(team);
            for player in state
                .roster
                .players_mut()
                .iter_mut()
                .filter(|p| p.team == team)
            {
                player.apply_intent(&intent, config.sprint_factor);
            }
        } else {
            events.extend(ai::drive_team(
                state.roster.players_mut(),
                team,
                &mut state.ball,
                &mut state.rng,
                &config,
            ));
        }
    }

    let kick_held = Team::ALL
        .iter()
        .any(|&team| state.is_human(team) && state.inputs.get(team).kick);
    state.kick_charge.update(kick_held, &config.kick);

    // Kinematics
    for player in state.roster.players_mut() {
        player.update(&config.field);
    }
    if let Some(team) = state.ball.update(&config.field) {
        events.push(state.score_goal(team));
    }

    // Contacts
    if let Some(kick) = resolve_collisions(state) {
        events.push(kick);
    }

    events
}
