//! Per-team intent flags and kick charging
//!
//! Devices never touch entities directly. An input source flips flags here and
//! the next tick reads them.

use serde::{Deserialize, Serialize};

use super::player::Team;
use crate::settings::KickTuning;

/// A logical action a team can hold down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentFlag {
    Up,
    Down,
    Left,
    Right,
    Sprint,
    Kick,
}

impl IntentFlag {
    pub const ALL: [IntentFlag; 6] = [
        IntentFlag::Up,
        IntentFlag::Down,
        IntentFlag::Left,
        IntentFlag::Right,
        IntentFlag::Sprint,
        IntentFlag::Kick,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IntentFlag::Up => "up",
            IntentFlag::Down => "down",
            IntentFlag::Left => "left",
            IntentFlag::Right => "right",
            IntentFlag::Sprint => "sprint",
            IntentFlag::Kick => "kick",
        }
    }

    /// Parse an on-screen button name
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(IntentFlag::Up),
            "down" => Some(IntentFlag::Down),
            "left" => Some(IntentFlag::Left),
            "right" => Some(IntentFlag::Right),
            "sprint" => Some(IntentFlag::Sprint),
            "kick" => Some(IntentFlag::Kick),
            _ => None,
        }
    }
}

/// Held actions for one team
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    pub kick: bool,
}

impl Intent {
    pub fn set(&mut self, flag: IntentFlag, pressed: bool) {
        match flag {
            IntentFlag::Up => self.up = pressed,
            IntentFlag::Down => self.down = pressed,
            IntentFlag::Left => self.left = pressed,
            IntentFlag::Right => self.right = pressed,
            IntentFlag::Sprint => self.sprint = pressed,
            IntentFlag::Kick => self.kick = pressed,
        }
    }

    pub fn is_set(&self, flag: IntentFlag) -> bool {
        match flag {
            IntentFlag::Up => self.up,
            IntentFlag::Down => self.down,
            IntentFlag::Left => self.left,
            IntentFlag::Right => self.right,
            IntentFlag::Sprint => self.sprint,
            IntentFlag::Kick => self.kick,
        }
    }

    /// Horizontal direction held, `None` if neither key is down.
    /// Right wins when both are held.
    pub fn axis_x(&self) -> Option<f32> {
        if self.right {
            Some(1.0)
        } else if self.left {
            Some(-1.0)
        } else {
            None
        }
    }

    /// Vertical direction held (screen space, down is +y).
    /// Down wins when both are held.
    pub fn axis_y(&self) -> Option<f32> {
        if self.down {
            Some(1.0)
        } else if self.up {
            Some(-1.0)
        } else {
            None
        }
    }
}

/// Intents for both teams
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInputs {
    pub a: Intent,
    pub b: Intent,
}

impl TeamInputs {
    pub fn get(&self, team: Team) -> &Intent {
        match team {
            Team::A => &self.a,
            Team::B => &self.b,
        }
    }

    pub fn get_mut(&mut self, team: Team) -> &mut Intent {
        match team {
            Team::A => &mut self.a,
            Team::B => &mut self.b,
        }
    }
}

/// Shared kick charge, built up while a human team holds kick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KickCharge {
    pub charging: bool,
    pub power: f32,
}

impl KickCharge {
    /// Advance one frame. Starts at base power on the first held frame, then
    /// climbs by the charge rate up to max. Releasing drops back to zero.
    pub fn update(&mut self, held: bool, tuning: &KickTuning) {
        if held {
            if !self.charging {
                self.charging = true;
                self.power = tuning.base_power;
            } else if self.power < tuning.max_power {
                self.power = (self.power + tuning.charge_rate).min(tuning.max_power);
            }
        } else if self.charging {
            self.reset();
        }
    }

    /// Consumed by a kick, or released
    pub fn reset(&mut self) {
        self.charging = false;
        self.power = 0.0;
    }

    /// Charge bar fill in [0, 1]
    pub fn fraction(&self, max_power: f32) -> f32 {
        if max_power <= 0.0 {
            return 0.0;
        }
        (self.power / max_power).clamp(0.0, 1.0)
    }
}

/// Default keyboard layout: WASD + Shift + Space for team A,
/// arrows + Control + Enter for team B
pub fn default_binding(key: &str) -> Option<(Team, IntentFlag)> {
    let binding = match key {
        "w" | "W" => (Team::A, IntentFlag::Up),
        "s" | "S" => (Team::A, IntentFlag::Down),
        "a" | "A" => (Team::A, IntentFlag::Left),
        "d" | "D" => (Team::A, IntentFlag::Right),
        "Shift" => (Team::A, IntentFlag::Sprint),
        " " => (Team::A, IntentFlag::Kick),
        "ArrowUp" => (Team::B, IntentFlag::Up),
        "ArrowDown" => (Team::B, IntentFlag::Down),
        "ArrowLeft" => (Team::B, IntentFlag::Left),
        "ArrowRight" => (Team::B, IntentFlag::Right),
        "Control" => (Team::B, IntentFlag::Sprint),
        "Enter" => (Team::B, IntentFlag::Kick),
        _ => return None,
    };
    Some(binding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn tuning() -> KickTuning {
        KickTuning::default()
    }

    #[test]
    fn test_set_and_read_flags() {
        let mut intent = Intent::default();
        for flag in IntentFlag::ALL {
            assert!(!intent.is_set(flag));
            intent.set(flag, true);
            assert!(intent.is_set(flag));
        }
        intent.set(IntentFlag::Kick, false);
        assert!(!intent.kick);
    }

    #[test]
    fn test_axes_prefer_later_key() {
        let intent = Intent {
            up: true,
            down: true,
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(intent.axis_y(), Some(1.0));
        assert_eq!(intent.axis_x(), Some(1.0));
        assert_eq!(Intent::default().axis_x(), None);
    }

    #[test]
    fn test_kick_charge_lifecycle() {
        let mut charge = KickCharge::default();
        charge.update(true, &tuning());
        assert!(charge.charging);
        assert_eq!(charge.power, KICK_POWER);

        charge.update(true, &tuning());
        assert!((charge.power - (KICK_POWER + KICK_CHARGE_RATE)).abs() < 1e-5);

        for _ in 0..200 {
            charge.update(true, &tuning());
        }
        assert_eq!(charge.power, MAX_KICK_POWER);

        charge.update(false, &tuning());
        assert!(!charge.charging);
        assert_eq!(charge.power, 0.0);
    }

    #[test]
    fn test_charge_fraction() {
        let charge = KickCharge {
            charging: true,
            power: 7.5,
        };
        assert!((charge.fraction(MAX_KICK_POWER) - 0.5).abs() < 1e-6);
        assert_eq!(charge.fraction(0.0), 0.0);
    }

    #[test]
    fn test_default_bindings() {
        assert_eq!(default_binding("W"), Some((Team::A, IntentFlag::Up)));
        assert_eq!(default_binding(" "), Some((Team::A, IntentFlag::Kick)));
        assert_eq!(default_binding("Enter"), Some((Team::B, IntentFlag::Kick)));
        assert_eq!(default_binding("q"), None);
        assert_eq!(IntentFlag::from_name("Sprint"), Some(IntentFlag::Sprint));
        assert_eq!(IntentFlag::from_name("jump"), None);
    }
}
