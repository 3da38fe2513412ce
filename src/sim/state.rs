//! Match state and roster
//!
//! One owned context holds everything a tick touches. Front ends inject input
//! through it and read snapshots from it; nothing lives in globals.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::input::{IntentFlag, KickCharge, TeamInputs};
use super::player::{Player, Slot, Team};
use crate::format_clock;
use crate::settings::{FieldConfig, GameMode, MatchConfig};

/// Lifecycle of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatchPhase {
    /// Not started, reset, or full time
    #[default]
    Stopped,
    Running,
    Paused,
}

/// Something presentation may want to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Goal { team: Team },
    Kick { team: Team, slot: Slot, power: f32 },
    AiShot { team: Team, slot: Slot },
    FullTime { team_a: u32, team_b: u32 },
}

/// Both teams, addressed by (team, slot)
///
/// Stored in a fixed order (team A slots, then team B slots) so every pass
/// iterates the same way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    pub fn new(field: &FieldConfig) -> Self {
        let players = Team::ALL
            .iter()
            .flat_map(|&team| Slot::ALL.iter().map(move |&slot| Player::new(team, slot, field)))
            .collect();
        Self { players }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn players_mut(&mut self) -> &mut [Player] {
        &mut self.players
    }

    pub fn get(&self, team: Team, slot: Slot) -> Option<&Player> {
        self.players
            .iter()
            .find(|p| p.team == team && p.slot == slot)
    }

    pub fn get_mut(&mut self, team: Team, slot: Slot) -> Option<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.team == team && p.slot == slot)
    }

    pub fn team(&self, team: Team) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.team == team)
    }

    /// Everyone back to their kick-off spot, standing, nobody on the ball
    pub fn reset_formation(&mut self, field: &FieldConfig) {
        for player in &mut self.players {
            player.return_to_formation(field);
            player.has_ball = false;
        }
    }
}

fn fresh_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete match state (deterministic for a given seed and input stream)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub config: MatchConfig,
    pub phase: MatchPhase,
    pub score_a: u32,
    pub score_b: u32,
    /// Seconds left on the clock, never negative
    pub time_left: f64,
    pub roster: Roster,
    pub ball: Ball,
    pub inputs: TeamInputs,
    pub kick_charge: KickCharge,
    /// Simulation steps run so far
    pub frame: u64,
    /// AI dice
    #[serde(skip, default = "fresh_rng")]
    pub rng: Pcg32,
}

impl MatchState {
    /// Fresh match: kick-off formation, zero score, full clock, stopped
    pub fn new(config: MatchConfig) -> Self {
        Self {
            phase: MatchPhase::Stopped,
            score_a: 0,
            score_b: 0,
            time_left: config.match_duration,
            roster: Roster::new(&config.field),
            ball: Ball::new(&config.field),
            inputs: TeamInputs::default(),
            kick_charge: KickCharge::default(),
            frame: 0,
            rng: Pcg32::seed_from_u64(config.seed),
            config,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    /// Whether a team's intents come from a person in `mode`
    pub fn is_human_in(mode: GameMode, team: Team) -> bool {
        match (mode, team) {
            (_, Team::A) => true,
            (GameMode::Pvp, Team::B) => true,
            (GameMode::Pve, Team::B) => false,
        }
    }

    pub fn is_human(&self, team: Team) -> bool {
        Self::is_human_in(self.config.mode, team)
    }

    /// Hold or release one action. Repeats (key autorepeat) are ignored.
    pub fn set_intent(&mut self, team: Team, flag: IntentFlag, pressed: bool) {
        let intent = self.inputs.get_mut(team);
        if intent.is_set(flag) == pressed {
            return;
        }
        intent.set(flag, pressed);
        log::debug!(
            "Team {} {} {}",
            team.as_str(),
            flag.as_str(),
            if pressed { "down" } else { "up" }
        );
    }

    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::A => self.score_a,
            Team::B => self.score_b,
        }
    }

    /// Credit a goal, then line everyone up again
    pub fn score_goal(&mut self, team: Team) -> GameEvent {
        match team {
            Team::A => self.score_a += 1,
            Team::B => self.score_b += 1,
        }
        log::info!(
            "Goal for team {}! {} x {}",
            team.as_str(),
            self.score_a,
            self.score_b
        );
        self.reset_after_goal();
        GameEvent::Goal { team }
    }

    /// Ball to the centre spot and players to formation, all stopped.
    /// Score and clock carry on.
    pub fn reset_after_goal(&mut self) {
        self.ball.reset(&self.config.field);
        self.roster.reset_formation(&self.config.field);
    }

    /// Remaining time as `MM:SS`
    pub fn clock(&self) -> String {
        format_clock(self.time_left)
    }

    /// End-of-match line for the scoreboard
    pub fn final_summary(&self) -> String {
        format!(
            "Full time! Team A {} x {} Team B",
            self.score_a, self.score_b
        )
    }

    /// The first player in roster order touching the ball
    pub fn ball_holder(&self) -> Option<(usize, &Player)> {
        self.roster
            .players()
            .iter()
            .enumerate()
            .find(|(_, p)| p.has_ball)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_new_match_lineup() {
        let state = MatchState::new(MatchConfig::default());
        assert_eq!(state.roster.players().len(), 10);
        assert_eq!(state.roster.team(Team::A).count(), 5);
        assert_eq!(state.roster.team(Team::B).filter(|p| p.is_goalkeeper()).count(), 1);
        assert_eq!(state.phase, MatchPhase::Stopped);
        assert_eq!(state.clock(), "05:00");
        assert_eq!(state.ball.body.pos, Vec2::new(400.0, 250.0));
    }

    #[test]
    fn test_roster_lookup_by_slot() {
        let state = MatchState::new(MatchConfig::default());
        let keeper = state.roster.get(Team::B, Slot::Keeper).unwrap();
        assert!(keeper.is_goalkeeper());
        assert_eq!(keeper.team, Team::B);
        assert_eq!(state.roster.players()[5].slot, Slot::Keeper);
    }

    #[test]
    fn test_goal_resets_positions_but_not_score_or_clock() {
        let mut state = MatchState::new(MatchConfig::default());
        state.time_left = 123.0;
        state.ball.body.pos = Vec2::new(3.0, 250.0);
        state.ball.body.vel = Vec2::new(-4.0, 0.0);
        let striker = state.roster.get_mut(Team::B, Slot::UpperForward).unwrap();
        striker.body.pos = Vec2::new(50.0, 50.0);
        striker.body.vel = Vec2::new(1.0, 1.0);
        striker.has_ball = true;

        let event = state.score_goal(Team::A);

        assert_eq!(event, GameEvent::Goal { team: Team::A });
        assert_eq!((state.score_a, state.score_b), (1, 0));
        assert_eq!(state.time_left, 123.0);
        assert_eq!(state.ball.body.pos, Vec2::new(400.0, 250.0));
        assert_eq!(state.ball.body.vel, Vec2::ZERO);
        let field = state.config.field;
        for player in state.roster.players() {
            assert_eq!(player.body.pos, player.slot.formation_position(player.team, &field));
            assert_eq!(player.body.vel, Vec2::ZERO);
            assert!(!player.has_ball);
        }
    }

    #[test]
    fn test_human_control_by_mode() {
        assert!(MatchState::is_human_in(GameMode::Pve, Team::A));
        assert!(!MatchState::is_human_in(GameMode::Pve, Team::B));
        assert!(MatchState::is_human_in(GameMode::Pvp, Team::B));
    }

    #[test]
    fn test_set_intent_per_team() {
        let mut state = MatchState::new(MatchConfig::default());
        state.set_intent(Team::B, IntentFlag::Sprint, true);
        state.set_intent(Team::B, IntentFlag::Sprint, true);
        assert!(state.inputs.b.sprint);
        assert!(!state.inputs.a.sprint);

        state.set_intent(Team::B, IntentFlag::Sprint, false);
        assert_eq!(state.inputs, TeamInputs::default());
    }

    #[test]
    fn test_final_summary() {
        let mut state = MatchState::new(MatchConfig::default());
        state.score_a = 2;
        state.score_b = 3;
        assert_eq!(state.final_summary(), "Full time! Team A 2 x 3 Team B");
    }
}
