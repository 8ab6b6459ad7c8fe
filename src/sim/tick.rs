//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{ball_hits_bullet, ball_hits_player};
use super::state::{Ball, Bullet, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
///
/// The shell latches pointer/click events between frames and hands them to
/// the sim here; `fire` is a one-shot cleared by the shell after each step.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Target player y (from pointer position, in field coordinates)
    pub pointer_y: Option<f32>,
    /// Click/tap/space - starts, fires, or restarts depending on phase
    pub fire: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::Attract => {
            if input.fire {
                state.start();
            }
            return;
        }
        GamePhase::GameOver => {
            if input.fire {
                state.reset();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    if let Some(y) = input.pointer_y {
        state.player.set_y(y);
    }

    if input.fire {
        let id = state.next_entity_id();
        state.bullets.push(Bullet {
            id,
            pos: state.player.nose(),
        });
        state.events.push(GameEvent::Fired);
    }

    // Spawn check: one ball per elapsed interval, interval shrinks to a floor
    state.spawn_timer += dt;
    if state.spawn_timer > state.spawn_interval {
        spawn_ball(state);
        state.spawn_timer = 0.0;
        state.spawn_interval =
            (state.spawn_interval - SPAWN_INTERVAL_STEP).max(SPAWN_INTERVAL_FLOOR);
    }

    // Balls: prune left-edge exits (no score effect), then advance and
    // check for contact with the player
    state.balls.retain(|b| b.pos.x + b.radius > 0.0);
    let mut fatal_contact = false;
    for ball in &mut state.balls {
        ball.pos.x -= ball.speed * dt;
        if ball_hits_player(ball, &state.player) {
            fatal_contact = true;
        }
    }
    if fatal_contact {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        // No further updates once over
        return;
    }

    // Bullets: prune right-edge exits, then advance
    state.bullets.retain(|b| b.pos.x < FIELD_WIDTH);
    for bullet in &mut state.bullets {
        bullet.pos.x += BULLET_SPEED * dt;
    }

    // Ball vs bullet: balls outer, bullets inner, in stable spawn/fire order.
    // The first bullet within range resolves the hit - one bullet per ball
    // per tick.
    let mut ratcheted = false;
    let balls = std::mem::take(&mut state.balls);
    let mut survivors = Vec::with_capacity(balls.len());
    for ball in balls {
        match state
            .bullets
            .iter()
            .position(|b| ball_hits_bullet(&ball, b))
        {
            Some(idx) => {
                state.bullets.remove(idx);
                state.score += 1;
                state.balls_destroyed += 1;
                state.events.push(GameEvent::BallDestroyed);
                if state.balls_destroyed % KILL_STREAK == 0 {
                    state.score += KILL_STREAK_BONUS;
                    state.ball_speed += BALL_SPEED_STEP;
                    state.events.push(GameEvent::SpeedRatchet {
                        speed: state.ball_speed,
                    });
                    ratcheted = true;
                }
            }
            None => survivors.push(ball),
        }
    }
    state.balls = survivors;

    // The ratchet applies retroactively to every live ball
    if ratcheted {
        for ball in &mut state.balls {
            ball.speed = state.ball_speed;
        }
    }
}

/// Spawn one ball at the right edge at a seeded-random padded y
fn spawn_ball(state: &mut GameState) {
    // Per-spawn RNG derived from the run seed and spawn index: deterministic
    // within a run, varied across runs
    let spawn_seed = state
        .spawn_count
        .wrapping_mul(2654435761)
        .wrapping_add(state.seed);
    let mut rng = Pcg32::seed_from_u64(spawn_seed);
    let y = rng.random_range(SPAWN_PADDING..=FIELD_HEIGHT - SPAWN_PADDING);
    state.spawn_count += 1;

    let id = state.next_entity_id();
    state.balls.push(Ball {
        id,
        pos: Vec2::new(FIELD_WIDTH, y),
        radius: BALL_RADIUS,
        speed: state.ball_speed,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// A state that has been clicked through the attract screen
    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        let start = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &start, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        state.events.clear();
        state
    }

    fn ball_at(id: u32, x: f32, y: f32, speed: f32) -> Ball {
        Ball {
            id,
            pos: Vec2::new(x, y),
            radius: BALL_RADIUS,
            speed,
        }
    }

    #[test]
    fn test_attract_to_playing() {
        let mut state = GameState::new(12345);
        assert_eq!(state.phase, GamePhase::Attract);

        // Tick without fire - stays on the attract screen
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Attract);
        assert_eq!(state.time_ticks, 0);

        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.events, vec![GameEvent::Started]);
    }

    #[test]
    fn test_fire_spawns_bullet_at_nose() {
        let mut state = playing_state(1);
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);

        assert_eq!(state.bullets.len(), 1);
        let bullet = &state.bullets[0];
        // Fired from the nose, then advanced one step
        assert_eq!(bullet.pos.y, state.player.y);
        let expected_x = PLAYER_X + PLAYER_SIZE / 2.0 + BULLET_SPEED * SIM_DT;
        assert!((bullet.pos.x - expected_x).abs() < 1e-4);
        assert!(state.events.contains(&GameEvent::Fired));
    }

    #[test]
    fn test_spawn_after_interval() {
        let mut state = playing_state(7);
        assert!(state.balls.is_empty());

        // One long tick past the initial interval spawns exactly one ball
        tick(&mut state, &TickInput::default(), SPAWN_INTERVAL_START + 0.1);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.spawn_timer, 0.0);
        assert!(
            (state.spawn_interval - (SPAWN_INTERVAL_START - SPAWN_INTERVAL_STEP)).abs() < 1e-6
        );

        // Spawned at the right edge within padded bounds, at the shared speed
        let ball = &state.balls[0];
        let y_at_spawn = ball.pos.y;
        assert!(y_at_spawn >= SPAWN_PADDING);
        assert!(y_at_spawn <= FIELD_HEIGHT - SPAWN_PADDING);
        assert_eq!(ball.speed, BALL_START_SPEED);
    }

    #[test]
    fn test_spawn_interval_floor() {
        let mut state = playing_state(7);
        state.spawn_interval = SPAWN_INTERVAL_FLOOR + 0.01;

        tick(&mut state, &TickInput::default(), SPAWN_INTERVAL_FLOOR + 0.1);
        assert_eq!(state.spawn_interval, SPAWN_INTERVAL_FLOOR);

        tick(&mut state, &TickInput::default(), SPAWN_INTERVAL_FLOOR + 0.1);
        assert_eq!(state.spawn_interval, SPAWN_INTERVAL_FLOOR);
    }

    #[test]
    fn test_offscreen_ball_pruned_without_score() {
        let mut state = playing_state(3);
        state.balls.push(ball_at(100, -BALL_RADIUS - 1.0, 300.0, BALL_START_SPEED));

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.balls.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.balls_destroyed, 0);
    }

    #[test]
    fn test_bullet_destroys_ball() {
        let mut state = playing_state(3);
        state.balls.push(ball_at(100, 400.0, 300.0, BALL_START_SPEED));
        state.bullets.push(Bullet {
            id: 101,
            pos: Vec2::new(400.0, 300.0),
        });

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.balls.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 1);
        assert_eq!(state.balls_destroyed, 1);
        assert!(state.events.contains(&GameEvent::BallDestroyed));
    }

    #[test]
    fn test_first_bullet_in_scan_order_resolves_hit() {
        let mut state = playing_state(3);
        state.balls.push(ball_at(100, 400.0, 300.0, BALL_START_SPEED));
        // Both bullets overlap the ball; only the earlier-fired one hits
        state.bullets.push(Bullet {
            id: 101,
            pos: Vec2::new(398.0, 300.0),
        });
        state.bullets.push(Bullet {
            id: 102,
            pos: Vec2::new(402.0, 300.0),
        });

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.score, 1);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].id, 102);
    }

    #[test]
    fn test_kill_streak_bonus_and_ratchet() {
        let mut state = playing_state(3);
        state.balls_destroyed = KILL_STREAK - 1;
        state.score = 9;

        // The 10th kill, plus a distant survivor that must pick up the
        // new shared speed
        state.balls.push(ball_at(100, 400.0, 300.0, BALL_START_SPEED));
        state.balls.push(ball_at(101, 700.0, 100.0, BALL_START_SPEED));
        state.bullets.push(Bullet {
            id: 102,
            pos: Vec2::new(400.0, 300.0),
        });

        tick(&mut state, &TickInput::default(), SIM_DT);
        // 1 for the hit + 10 bonus relative to the 9th kill
        assert_eq!(state.score, 9 + 1 + KILL_STREAK_BONUS);
        assert_eq!(state.balls_destroyed, KILL_STREAK);
        assert_eq!(state.ball_speed, BALL_START_SPEED + BALL_SPEED_STEP);
        assert_eq!(state.balls.len(), 1);
        assert_eq!(state.balls[0].speed, state.ball_speed);
        assert!(
            state
                .events
                .contains(&GameEvent::SpeedRatchet { speed: state.ball_speed })
        );
    }

    #[test]
    fn test_ball_reaching_player_ends_game() {
        let mut state = playing_state(3);
        state
            .balls
            .push(ball_at(100, state.player.x + 5.0, state.player.y, BALL_START_SPEED));
        // A bullet in flight stays frozen on the field after the transition
        state.bullets.push(Bullet {
            id: 101,
            pos: Vec2::new(600.0, 100.0),
        });

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.events.contains(&GameEvent::GameOver { score: 0 }));
        assert_eq!(state.bullets.len(), 1);
        let frozen_x = state.bullets[0].pos.x;

        // Further ticks without fire are no-ops
        let ticks_before = state.time_ticks;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.time_ticks, ticks_before);
        assert_eq!(state.bullets[0].pos.x, frozen_x);
    }

    #[test]
    fn test_restart_resets_session() {
        let mut state = playing_state(3);
        state.score = 42;
        state.balls_destroyed = 17;
        state.ball_speed = BALL_START_SPEED + 2.0 * BALL_SPEED_STEP;
        state.spawn_interval = SPAWN_INTERVAL_FLOOR;
        state.player_name = "AAA".to_string();
        state
            .balls
            .push(ball_at(100, state.player.x, state.player.y, state.ball_speed));

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Fire while over returns to the attract screen with a clean session
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, SIM_DT);
        assert_eq!(state.phase, GamePhase::Attract);
        assert_eq!(state.score, 0);
        assert_eq!(state.balls_destroyed, 0);
        assert_eq!(state.ball_speed, BALL_START_SPEED);
        assert_eq!(state.spawn_interval, SPAWN_INTERVAL_START);
        assert!(state.balls.is_empty());
        assert!(state.bullets.is_empty());
        assert!(state.player_name.is_empty());
        assert_eq!(state.seed, 3);
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and input sequence stay identical
        let mut state1 = playing_state(99999);
        let mut state2 = playing_state(99999);

        let inputs = [
            TickInput {
                pointer_y: Some(150.0),
                ..Default::default()
            },
            TickInput {
                fire: true,
                ..Default::default()
            },
            TickInput {
                pointer_y: Some(480.0),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..1000 {
            for input in &inputs {
                tick(&mut state1, input, SIM_DT);
                tick(&mut state2, input, SIM_DT);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.balls, state2.balls);
        assert_eq!(state1.bullets, state2.bullets);
    }

    proptest! {
        #[test]
        fn prop_player_y_stays_on_field(y in -2000.0f32..2000.0) {
            let mut state = playing_state(11);
            let input = TickInput {
                pointer_y: Some(y),
                ..Default::default()
            };
            tick(&mut state, &input, SIM_DT);
            prop_assert!(state.player.y >= PLAYER_SIZE);
            prop_assert!(state.player.y <= FIELD_HEIGHT - PLAYER_SIZE);
        }

        #[test]
        fn prop_spawn_interval_and_speed_monotonic(seed in any::<u64>()) {
            let mut state = playing_state(seed);
            let mut prev_interval = state.spawn_interval;
            let mut prev_speed = state.ball_speed;
            // Dodge incoming balls so the session stays alive
            let input = TickInput {
                pointer_y: Some(FIELD_HEIGHT),
                ..Default::default()
            };
            for _ in 0..2000 {
                tick(&mut state, &input, SIM_DT);
                prop_assert!(state.spawn_interval <= prev_interval);
                prop_assert!(state.spawn_interval >= SPAWN_INTERVAL_FLOOR);
                prop_assert!(state.ball_speed >= prev_speed);
                prev_interval = state.spawn_interval;
                prev_speed = state.ball_speed;
                if state.phase != GamePhase::Playing {
                    break;
                }
            }
        }
    }
}
