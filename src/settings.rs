//! Match configuration
//!
//! Defaults mirror `consts`. A front end may hand in JSON; anything missing
//! falls back to the default.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Who controls team B
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Both teams on the keyboard
    #[default]
    Pvp,
    /// Team B driven by the AI
    Pve,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Pvp => "pvp",
            GameMode::Pve => "pve",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pvp" => Some(GameMode::Pvp),
            "pve" => Some(GameMode::Pve),
            _ => None,
        }
    }
}

/// Rejected configuration
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(String),
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must lie in [0, 1] (got {value})")]
    OutOfUnitRange { field: &'static str, value: f64 },
    #[error("goal width {goal_width} does not fit a field {height} high")]
    GoalTooWide { goal_width: f32, height: f32 },
    #[error("base kick power {base} exceeds max kick power {max}")]
    KickPowerInverted { base: f32, max: f32 },
}

/// Pitch geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
    pub goal_width: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            goal_width: GOAL_WIDTH,
        }
    }
}

impl FieldConfig {
    pub fn mid_y(&self) -> f32 {
        self.height / 2.0
    }

    /// Whether `y` is strictly inside the goal mouth band
    pub fn in_goal_mouth(&self, y: f32) -> bool {
        let half = self.goal_width / 2.0;
        y > self.mid_y() - half && y < self.mid_y() + half
    }
}

/// Kick charge tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KickTuning {
    pub base_power: f32,
    pub max_power: f32,
    /// Power gained per held frame
    pub charge_rate: f32,
}

impl Default for KickTuning {
    fn default() -> Self {
        Self {
            base_power: KICK_POWER,
            max_power: MAX_KICK_POWER,
            charge_rate: KICK_CHARGE_RATE,
        }
    }
}

/// Computer opponent tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiTuning {
    /// Within this distance a field player turns for goal
    pub chase_radius: f32,
    /// Within this distance a field player may shoot
    pub shot_radius: f32,
    /// Shot probability per frame
    pub shot_chance: f64,
    /// Shot power as a fraction of max kick power
    pub shot_power_fraction: f32,
    /// Keeper reacts when the ball is this close to its goal line
    pub keeper_watch_depth: f32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            chase_radius: AI_CHASE_RADIUS,
            shot_radius: AI_SHOT_RADIUS,
            shot_chance: AI_SHOT_CHANCE,
            shot_power_fraction: AI_SHOT_POWER_FRACTION,
            keeper_watch_depth: KEEPER_WATCH_DEPTH,
        }
    }
}

/// Everything a match needs to start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub field: FieldConfig,
    pub kick: KickTuning,
    pub ai: AiTuning,
    /// Match length in seconds
    pub match_duration: f64,
    /// Frames at or above this many milliseconds leave the clock alone
    pub max_frame_ms: f64,
    pub sprint_factor: f32,
    pub mode: GameMode,
    /// Seed for the AI's dice
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::default(),
            kick: KickTuning::default(),
            ai: AiTuning::default(),
            match_duration: MATCH_DURATION,
            max_frame_ms: MAX_FRAME_MS,
            sprint_factor: SPRINT_SPEED_FACTOR,
            mode: GameMode::Pvp,
            seed: 0x5eed,
        }
    }
}

impl MatchConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string-keyed structs, serialization can't fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field.width", self.field.width as f64)?;
        positive("field.height", self.field.height as f64)?;
        positive("field.goal_width", self.field.goal_width as f64)?;
        positive("match_duration", self.match_duration)?;
        positive("max_frame_ms", self.max_frame_ms)?;
        positive("sprint_factor", self.sprint_factor as f64)?;
        positive("kick.base_power", self.kick.base_power as f64)?;
        positive("kick.charge_rate", self.kick.charge_rate as f64)?;
        positive("ai.chase_radius", self.ai.chase_radius as f64)?;
        positive("ai.shot_radius", self.ai.shot_radius as f64)?;
        positive("ai.keeper_watch_depth", self.ai.keeper_watch_depth as f64)?;
        unit("ai.shot_chance", self.ai.shot_chance)?;
        unit("ai.shot_power_fraction", self.ai.shot_power_fraction as f64)?;

        if self.field.goal_width >= self.field.height {
            return Err(ConfigError::GoalTooWide {
                goal_width: self.field.goal_width,
                height: self.field.height,
            });
        }
        if self.kick.base_power > self.kick.max_power {
            return Err(ConfigError::KickPowerInverted {
                base: self.kick.base_power,
                max: self.kick.max_power,
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    // NaN fails this too
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { field, value })
    }
}
