//! Five-a-side headless runner
//!
//! Plays one match against the AI with a scripted team A, one 16 ms frame at
//! a time, and prints the final score. Pass a JSON config path as the first
//! argument to override tuning.

use five_a_side::sim::{GameEvent, IntentFlag, MatchPhase, Slot, Team};
use five_a_side::{Game, GameMode, MatchConfig};

/// Display frame length (~60 Hz)
const FRAME_MS: f64 = 16.0;

fn main() {
    env_logger::init();
    log::info!("Five-a-side (headless) starting...");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut game = match Game::new(config) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid config: {e}");
            std::process::exit(1);
        }
    };
    game.set_mode(GameMode::Pve);

    let mut now = 0.0;
    game.start(now);
    while game.phase() == MatchPhase::Running {
        drive_team_a(&mut game);
        now += FRAME_MS;
        for event in game.frame(now) {
            match event {
                GameEvent::Goal { team } => {
                    println!("[{}] Goal for team {}", game.clock(), team.as_str())
                }
                GameEvent::Kick { slot, power, .. } => {
                    log::debug!("[{}] {:?} kicked ({power:.1})", game.clock(), slot)
                }
                _ => {}
            }
        }
    }

    log::debug!("Final frame: {}", game.snapshot().to_json());
    println!(
        "{}",
        game.final_summary().unwrap_or("Match stopped early")
    );
}

fn load_config() -> Result<MatchConfig, String> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(MatchConfig::default());
    };
    let json = std::fs::read_to_string(&path).map_err(|e| format!("Can't read {path}: {e}"))?;
    let config = MatchConfig::from_json(&json).map_err(|e| format!("{path}: {e}"))?;
    log::info!("Loaded config from {path}");
    Ok(config)
}

/// Steer team A after the ball using its upper forward as the reference,
/// and kick whenever it's on the ball
fn drive_team_a(game: &mut Game) {
    let snapshot = game.snapshot();
    let Some(striker) = snapshot
        .players
        .iter()
        .find(|p| p.team == Team::A && p.slot == Slot::UpperForward)
    else {
        return;
    };

    let to_ball = snapshot.ball.pos - striker.pos;
    let intents = [
        (IntentFlag::Right, to_ball.x > 4.0),
        (IntentFlag::Left, to_ball.x < -4.0),
        (IntentFlag::Down, to_ball.y > 4.0),
        (IntentFlag::Up, to_ball.y < -4.0),
        (IntentFlag::Sprint, to_ball.length() > 150.0),
        (IntentFlag::Kick, striker.has_ball),
    ];
    for (flag, pressed) in intents {
        game.set_intent(Team::A, flag, pressed);
    }
}
