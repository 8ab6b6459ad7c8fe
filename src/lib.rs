//! Orb Blaster - a single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, scoring)
//! - `renderer`: WebGPU rendering pipeline
//! - `audio`: Procedural sound effects (web only)
//! - `highscores`: Local top-5 leaderboard

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth motion)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions (logical pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player ship - fixed x, pointer-driven y
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_SIZE: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Shared ball speed at session start (pixels/s)
    pub const BALL_START_SPEED: f32 = 120.0;
    /// Speed added to the shared scalar on every kill streak
    pub const BALL_SPEED_STEP: f32 = 30.0;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 3.0;
    pub const BULLET_SPEED: f32 = 300.0;

    /// Spawn policy: interval starts wide and shrinks down to a floor
    pub const SPAWN_INTERVAL_START: f32 = 2.0;
    pub const SPAWN_INTERVAL_STEP: f32 = 0.05;
    pub const SPAWN_INTERVAL_FLOOR: f32 = 1.0;
    /// Vertical padding for spawn positions (keeps balls fully on-field)
    pub const SPAWN_PADDING: f32 = 20.0;

    /// Kills per speed ratchet
    pub const KILL_STREAK: u32 = 10;
    /// Bonus score granted on each ratchet
    pub const KILL_STREAK_BONUS: u64 = 10;
}

/// Clamp a vertical position to stay `margin` away from the field edges
#[inline]
pub fn clamp_field_y(y: f32, margin: f32) -> f32 {
    y.clamp(margin, consts::FIELD_HEIGHT - margin)
}
