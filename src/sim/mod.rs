//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per call, elapsed time supplied by the caller
//! - Seeded RNG only
//! - Stable iteration order (roster order: team A slots, then team B slots)
//! - No rendering or platform dependencies

pub mod ai;
pub mod ball;
pub mod body;
pub mod collision;
pub mod input;
pub mod player;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use body::Body;
pub use collision::{Overlap, circle_overlap, resolve_collisions, resolve_player_ball, separate_players};
pub use input::{Intent, IntentFlag, KickCharge, TeamInputs, default_binding};
pub use player::{Player, Role, Slot, Team};
pub use state::{GameEvent, MatchPhase, MatchState, Roster};
pub use tick::{simulate_frame, tick};
