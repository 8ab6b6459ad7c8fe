//! Game state and core simulation types

use glam::Vec2;

use crate::clamp_field_y;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for the first click
    Attract,
    /// Active gameplay
    Playing,
    /// Run ended - a ball reached the player
    GameOver,
}

/// The player's ship: a right-pointing triangle on the left edge.
/// Only `y` moves; `x` and `size` are fixed for the session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_X,
            y: FIELD_HEIGHT / 2.0,
            size: PLAYER_SIZE,
        }
    }
}

impl Player {
    /// Center of the ship for collision purposes
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Tip of the triangle - where bullets leave from
    #[inline]
    pub fn nose(&self) -> Vec2 {
        Vec2::new(self.x + self.size / 2.0, self.y)
    }

    /// Move to a target y, clamped so the ship stays on-field
    pub fn set_y(&mut self, y: f32) {
        self.y = clamp_field_y(y, self.size);
    }
}

/// A ball entity, drifting left from the right edge
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Copy of the shared session speed; re-synced on every ratchet
    pub speed: f32,
}

/// A bullet entity, flying right from the player's nose
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
}

/// Effect events produced by the tick, drained and executed by the shell.
/// The sim itself never touches audio or storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A new session started from the attract screen
    Started,
    /// A bullet was fired
    Fired,
    /// A bullet destroyed a ball
    BallDestroyed,
    /// Kill streak reached - shared ball speed ratcheted up
    SpeedRatchet { speed: f32 },
    /// A ball reached the player
    GameOver { score: u64 },
}

/// Complete session state, exclusively owned by the game loop
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducible spawn positions
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Score
    pub score: u64,
    /// Balls destroyed this session (drives the kill-streak ratchet)
    pub balls_destroyed: u32,
    /// Shared ball speed, monotonically non-decreasing within a session
    pub ball_speed: f32,
    /// Seconds between automatic spawns, shrinks to a floor
    pub spawn_interval: f32,
    /// Seconds accumulated since the last spawn
    pub spawn_timer: f32,
    /// Balls spawned so far (derives per-spawn RNG)
    pub spawn_count: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player ship
    pub player: Player,
    /// Live balls, in spawn order
    pub balls: Vec<Ball>,
    /// Live bullets, in fire order
    pub bullets: Vec<Bullet>,
    /// Name entered at session start, recorded with the final score
    pub player_name: String,
    /// Events emitted since the last drain
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh state on the attract screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Attract,
            score: 0,
            balls_destroyed: 0,
            ball_speed: BALL_START_SPEED,
            spawn_interval: SPAWN_INTERVAL_START,
            spawn_timer: 0.0,
            spawn_count: 0,
            time_ticks: 0,
            player: Player::default(),
            balls: Vec::new(),
            bullets: Vec::new(),
            player_name: String::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Begin a session from the attract screen
    pub fn start(&mut self) {
        self.phase = GamePhase::Playing;
        self.spawn_timer = 0.0;
        self.events.push(GameEvent::Started);
    }

    /// Restore all session fields to initial values. The persisted
    /// high-score list lives outside the sim and is untouched.
    pub fn reset(&mut self) {
        let seed = self.seed;
        *self = Self::new(seed);
    }
}
