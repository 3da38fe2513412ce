//! Five-a-side - A top-down arcade football match
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, possession, match clock)
//! - `game`: Match lifecycle (start/pause/reset) driven by an external frame scheduler
//! - `view`: Read-only snapshots for whatever draws the pitch
//! - `settings`: Data-driven match configuration

pub mod game;
pub mod settings;
pub mod sim;
pub mod view;

pub use game::Game;
pub use settings::{ConfigError, GameMode, MatchConfig};
pub use view::Snapshot;

/// Game configuration constants
pub mod consts {
    /// Pitch dimensions (origin top-left, y grows downward)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    /// Goal mouth height and drawn net depth
    pub const GOAL_WIDTH: f32 = 100.0;
    pub const GOAL_DEPTH: f32 = 20.0;

    /// Goalkeeper box: depth from the goal line, half-height around mid-field
    pub const KEEPER_AREA_DEPTH: f32 = 50.0;
    pub const KEEPER_AREA_HALF_HEIGHT: f32 = 100.0;

    /// Body sizes
    pub const PLAYER_RADIUS: f32 = 15.0;
    pub const GOALKEEPER_RADIUS: f32 = 18.0;
    pub const BALL_RADIUS: f32 = 10.0;

    /// Base speeds (units/frame)
    pub const PLAYER_SPEED: f32 = 2.0;
    pub const GOALKEEPER_SPEED: f32 = 1.8;
    pub const SPRINT_SPEED_FACTOR: f32 = 1.5;

    /// Per-frame velocity multipliers
    pub const PLAYER_FRICTION: f32 = 0.9;
    pub const BALL_FRICTION: f32 = 0.98;
    /// Extra decay on an axis with no direction held
    pub const IDLE_DAMPING: f32 = 0.8;

    /// Ball velocity components below this snap to zero
    pub const BALL_STOP_EPSILON: f32 = 0.1;
    /// Cosmetic spin per unit of speed
    pub const BALL_SPIN_FACTOR: f32 = 0.1;

    /// Kick charge (power in units/frame)
    pub const KICK_POWER: f32 = 5.0;
    pub const MAX_KICK_POWER: f32 = 15.0;
    pub const KICK_CHARGE_RATE: f32 = 0.2;

    /// Match length in seconds
    pub const MATCH_DURATION: f64 = 300.0;
    /// Frames longer than this don't tick the clock (tab suspend, debugger)
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// AI tuning
    pub const AI_CHASE_RADIUS: f32 = 100.0;
    pub const AI_SHOT_RADIUS: f32 = 50.0;
    pub const AI_SHOT_CHANCE: f64 = 0.02;
    pub const AI_SHOT_POWER_FRACTION: f32 = 0.7;
    pub const KEEPER_WATCH_DEPTH: f32 = 200.0;
    pub const KEEPER_DRIFT: f32 = 0.5;
    pub const KEEPER_INTERCEPT_SPEED: f32 = 0.8;
    /// Ball x-speed below which the keeper doesn't try to project an intercept
    pub const INTERCEPT_MIN_VX: f32 = 1e-3;

    /// Shirt colours
    pub const TEAM_A_COLOR: &str = "#3498db";
    pub const TEAM_B_COLOR: &str = "#e74c3c";
    pub const BALL_COLOR: &str = "#ffffff";
}

/// Format a remaining-time value as zero-padded `MM:SS`
///
/// Negative and NaN inputs render as `00:00`.
pub fn format_clock(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u32
    } else {
        0
    };
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(300.0), "05:00");
        assert_eq!(format_clock(299.99), "04:59");
        assert_eq!(format_clock(61.5), "01:01");
        assert_eq!(format_clock(9.0), "00:09");
        assert_eq!(format_clock(0.0), "00:00");
        assert_eq!(format_clock(-3.0), "00:00");
        assert_eq!(format_clock(f64::NAN), "00:00");
    }
}
