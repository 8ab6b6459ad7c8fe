//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn/fire order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_bullet, ball_hits_player, circles_overlap};
pub use state::{Ball, Bullet, GameEvent, GamePhase, GameState, Player};
pub use tick::{TickInput, tick};
