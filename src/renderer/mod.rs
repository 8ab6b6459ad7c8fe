//! WebGPU rendering module
//!
//! Rendering is a pure side effect: `scene_vertices` tessellates the current
//! game state, `RenderState::render` clears and redraws the surface.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::Vertex;

use crate::sim::{GamePhase, GameState};
use vertex::colors;

/// Tessellate the current state into a triangle list.
/// The attract screen draws nothing - the HUD carries the prompt.
pub fn scene_vertices(state: &GameState) -> Vec<Vertex> {
    if state.phase == GamePhase::Attract {
        return Vec::new();
    }

    let mut vertices = Vec::new();

    vertices.extend(shapes::player_triangle(
        state.player.center(),
        state.player.size,
        colors::PLAYER,
    ));
    for ball in &state.balls {
        vertices.extend(shapes::circle(
            ball.pos,
            ball.radius,
            colors::BALL,
            shapes::BALL_SEGMENTS,
        ));
    }
    for bullet in &state.bullets {
        vertices.extend(shapes::circle(
            bullet.pos,
            crate::consts::BULLET_RADIUS,
            colors::BULLET,
            shapes::BULLET_SEGMENTS,
        ));
    }

    vertices
}
