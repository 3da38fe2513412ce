//! Match lifecycle
//!
//! `Game` is what a front end holds. It owns the match state, turns frame
//! timestamps into elapsed time, and exposes the start/pause/reset controls.
//! The scheduler lives outside: call `frame` (or `step`) once per display tick.

use crate::settings::{ConfigError, GameMode, MatchConfig};
use crate::sim::{
    GameEvent, IntentFlag, MatchPhase, MatchState, Team, default_binding, tick,
};
use crate::view::Snapshot;

/// A match and its controls
#[derive(Debug, Clone)]
pub struct Game {
    state: MatchState,
    /// Timestamp (ms) of the last frame while running
    last_time: Option<f64>,
    /// Set at full time
    summary: Option<String>,
}

impl Default for Game {
    fn default() -> Self {
        Self::from_state(MatchState::new(MatchConfig::default()))
    }
}

impl Game {
    /// Validate the config and set up a stopped match
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_state(MatchState::new(config)))
    }

    fn from_state(state: MatchState) -> Self {
        Self {
            state,
            last_time: None,
            summary: None,
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    /// Stopped or paused to running. `now_ms` becomes the frame baseline.
    /// Returns whether anything changed.
    pub fn start(&mut self, now_ms: f64) -> bool {
        match self.state.phase {
            MatchPhase::Running => false,
            MatchPhase::Stopped if self.state.time_left <= 0.0 => {
                log::info!("Match is over - reset to play again");
                false
            }
            MatchPhase::Stopped | MatchPhase::Paused => {
                log::info!(
                    "Match {} at {}",
                    if self.state.phase == MatchPhase::Paused {
                        "resumed"
                    } else {
                        "started"
                    },
                    self.state.clock()
                );
                self.state.phase = MatchPhase::Running;
                self.last_time = Some(now_ms);
                true
            }
        }
    }

    /// Running to paused. Returns whether anything changed.
    pub fn pause(&mut self) -> bool {
        if self.state.phase != MatchPhase::Running {
            return false;
        }
        self.state.phase = MatchPhase::Paused;
        log::info!("Match paused at {}", self.state.clock());
        true
    }

    /// Stop and start over: fresh lineup, zero score, full clock.
    /// Mode and tuning are kept.
    pub fn reset(&mut self) {
        self.state = MatchState::new(self.state.config);
        self.last_time = None;
        self.summary = None;
        log::info!("Match reset ({})", self.state.mode().as_str());
    }

    pub fn mode(&self) -> GameMode {
        self.state.mode()
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        if self.state.config.mode != mode {
            log::info!("Game mode: {}", mode.as_str());
            self.state.config.mode = mode;
        }
    }

    /// Set the mode from a UI string. Unknown values are refused.
    pub fn set_mode_str(&mut self, mode: &str) -> bool {
        match GameMode::from_str(mode) {
            Some(mode) => {
                self.set_mode(mode);
                true
            }
            None => {
                log::warn!("Ignoring unknown game mode {mode:?}");
                false
            }
        }
    }

    pub fn set_intent(&mut self, team: Team, flag: IntentFlag, pressed: bool) {
        self.state.set_intent(team, flag, pressed);
    }

    /// Route a key through the default bindings. Returns whether it was bound.
    pub fn press_key(&mut self, key: &str, pressed: bool) -> bool {
        match default_binding(key) {
            Some((team, flag)) => {
                self.set_intent(team, flag, pressed);
                true
            }
            None => false,
        }
    }

    /// Route an on-screen button (`"up"`, `"kick"`, ...) to team A.
    /// Returns whether the name was known.
    pub fn press_button(&mut self, name: &str, pressed: bool) -> bool {
        match IntentFlag::from_name(name) {
            Some(flag) => {
                self.set_intent(Team::A, flag, pressed);
                true
            }
            None => false,
        }
    }

    /// Drive one display frame stamped `now_ms`
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        if self.state.phase != MatchPhase::Running {
            return Vec::new();
        }
        let elapsed = now_ms - self.last_time.unwrap_or(now_ms);
        self.last_time = Some(now_ms);
        self.step(elapsed)
    }

    /// Drive one frame with an explicit elapsed time
    pub fn step(&mut self, elapsed_ms: f64) -> Vec<GameEvent> {
        let events = tick(&mut self.state, elapsed_ms);
        if events
            .iter()
            .any(|e| matches!(e, GameEvent::FullTime { .. }))
        {
            self.summary = Some(self.state.final_summary());
        }
        events
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    pub fn score(&self, team: Team) -> u32 {
        self.state.score(team)
    }

    /// Remaining time as `MM:SS`
    pub fn clock(&self) -> String {
        self.state.clock()
    }

    /// Final score line once the clock has run out
    pub fn final_summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }
}
