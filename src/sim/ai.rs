//! Computer-controlled team
//!
//! Field players chase the ball, turn for goal once close, and take the odd
//! snap shot. The keeper hangs back and tracks shots coming its way.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::player::{Player, Team};
use super::state::GameEvent;
use crate::consts::*;
use crate::settings::MatchConfig;

/// Set velocities for every player on `team`. Shots bypass the kick charge
/// and write the ball's velocity directly.
pub fn drive_team(
    players: &mut [Player],
    team: Team,
    ball: &mut Ball,
    rng: &mut Pcg32,
    config: &MatchConfig,
) -> Vec<GameEvent> {
    let field = &config.field;
    let tuning = &config.ai;
    let target_goal = Vec2::new(team.opponent().own_goal_x(field), field.mid_y());
    let mut events = Vec::new();

    for player in players.iter_mut().filter(|p| p.team == team) {
        let distance = player.body.pos.distance(ball.body.pos);

        if distance < tuning.chase_radius {
            let to_goal = (target_goal - player.body.pos).normalize_or_zero();
            player.body.vel = to_goal * player.speed;

            if distance < tuning.shot_radius && rng.random::<f64>() < tuning.shot_chance {
                ball.body.vel = to_goal * config.kick.max_power * tuning.shot_power_fraction;
                log::debug!("AI {:?} shoots from {:?}", player.slot, player.body.pos);
                events.push(GameEvent::AiShot {
                    team,
                    slot: player.slot,
                });
            }
        } else {
            player.steer_toward(ball.body.pos, player.speed);
        }

        if player.is_goalkeeper() {
            player.body.vel.x *= KEEPER_DRIFT;
            if let Some(dir) = keeper_intercept(player, ball, config) {
                player.body.vel.y = dir * player.speed * KEEPER_INTERCEPT_SPEED;
            }
        }
    }

    events
}

/// Vertical direction (-1, 0, 1) the keeper should move to meet a ball
/// heading for its goal, or `None` if there's nothing to react to.
fn keeper_intercept(keeper: &Player, ball: &Ball, config: &MatchConfig) -> Option<f32> {
    let goal_x = keeper.team.own_goal_x(&config.field);
    let ball_pos = ball.body.pos;
    let ball_vel = ball.body.vel;

    if (ball_pos.x - goal_x).abs() >= config.ai.keeper_watch_depth {
        return None;
    }
    // Moving toward our goal line means against our attack direction
    let inbound = ball_vel.x * -keeper.team.attack_dir();
    if inbound < INTERCEPT_MIN_VX {
        return None;
    }

    let intercept_y = ball_pos.y + (ball_vel.y / ball_vel.x) * (keeper.body.pos.x - ball_pos.x);
    let dy = intercept_y - keeper.body.pos.y;
    if dy.abs() <= f32::EPSILON {
        Some(0.0)
    } else {
        Some(dy.signum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::AiTuning;
    use crate::sim::player::Slot;
    use rand::SeedableRng;

    fn config() -> MatchConfig {
        MatchConfig::default()
    }

    fn team_b(config: &MatchConfig) -> Vec<Player> {
        Slot::ALL
            .iter()
            .map(|&slot| Player::new(Team::B, slot, &config.field))
            .collect()
    }

    #[test]
    fn test_far_players_chase_ball() {
        let config = config();
        let mut players = team_b(&config);
        let mut ball = Ball::new(&config.field);
        let mut rng = Pcg32::seed_from_u64(1);

        drive_team(&mut players, Team::B, &mut ball, &mut rng, &config);

        let back = &players[1];
        let expected = (ball.body.pos - back.body.pos).normalize() * PLAYER_SPEED;
        assert!((back.body.vel - expected).length() < 1e-4);
    }

    #[test]
    fn test_close_player_heads_for_left_goal() {
        let config = config();
        let mut players = team_b(&config);
        let mut ball = Ball::new(&config.field);
        players[1].body.pos = ball.body.pos + Vec2::new(70.0, 0.0);
        let mut rng = Pcg32::seed_from_u64(1);

        drive_team(&mut players, Team::B, &mut ball, &mut rng, &config);

        let target = Vec2::new(0.0, config.field.mid_y());
        let expected = (target - players[1].body.pos).normalize() * PLAYER_SPEED;
        assert!((players[1].body.vel - expected).length() < 1e-4);
    }

    #[test]
    fn test_certain_shot_overrides_ball_velocity() {
        let config = MatchConfig {
            ai: AiTuning {
                shot_chance: 1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut players = team_b(&config);
        let mut ball = Ball::new(&config.field);
        ball.body.pos = Vec2::new(200.0, 100.0);
        players[3].body.pos = Vec2::new(230.0, 100.0);
        let mut rng = Pcg32::seed_from_u64(7);

        let events = drive_team(&mut players, Team::B, &mut ball, &mut rng, &config);

        assert_eq!(
            events,
            vec![GameEvent::AiShot {
                team: Team::B,
                slot: Slot::UpperForward
            }]
        );
        let expected_speed = MAX_KICK_POWER * AI_SHOT_POWER_FRACTION;
        assert!((ball.body.speed() - expected_speed).abs() < 1e-3);
        assert!(ball.body.vel.x < 0.0);
    }

    #[test]
    fn test_zero_chance_never_shoots() {
        let config = MatchConfig {
            ai: AiTuning {
                shot_chance: 0.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut players = team_b(&config);
        let mut ball = Ball::new(&config.field);
        ball.body.pos = Vec2::new(200.0, 100.0);
        players[3].body.pos = Vec2::new(230.0, 100.0);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            assert!(drive_team(&mut players, Team::B, &mut ball, &mut rng, &config).is_empty());
        }
    }

    #[test]
    fn test_keeper_tracks_incoming_shot() {
        let config = config();
        let mut players = team_b(&config);
        let keeper_pos = players[0].body.pos;
        let mut ball = Ball::new(&config.field);
        // Ball in front of B's goal, rolling right and down
        ball.body.pos = Vec2::new(config.field.width - 150.0, keeper_pos.y);
        ball.body.vel = Vec2::new(5.0, 3.0);
        let mut rng = Pcg32::seed_from_u64(3);

        drive_team(&mut players, Team::B, &mut ball, &mut rng, &config);

        let keeper = &players[0];
        assert!((keeper.body.vel.y - GOALKEEPER_SPEED * KEEPER_INTERCEPT_SPEED).abs() < 1e-5);
    }

    #[test]
    fn test_keeper_ignores_ball_without_x_motion() {
        let config = config();
        let mut players = team_b(&config);
        let mut ball = Ball::new(&config.field);
        ball.body.pos = Vec2::new(config.field.width - 150.0, 100.0);
        ball.body.vel = Vec2::new(0.0, 4.0);
        let mut rng = Pcg32::seed_from_u64(3);

        drive_team(&mut players, Team::B, &mut ball, &mut rng, &config);

        // Chase velocity only, halved on x
        let keeper = &players[0];
        assert!(keeper.body.vel.is_finite());
        let chase = (ball.body.pos - keeper.body.pos).normalize() * GOALKEEPER_SPEED;
        assert!((keeper.body.vel.y - chase.y).abs() < 1e-5);
        assert!((keeper.body.vel.x - chase.x * KEEPER_DRIFT).abs() < 1e-5);
    }
}
