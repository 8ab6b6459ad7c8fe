//! Shape generation for 2D primitives
//!
//! Tessellates game entities into triangle lists in field coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Segments used for ball circles; bullets are smaller and use fewer
pub const BALL_SEGMENTS: u32 = 24;
pub const BULLET_SEGMENTS: u32 = 10;

/// Generate vertices for a filled circle (triangle fan from center)
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for the player ship: a right-pointing triangle with its
/// nose at `center.x + size/2` and a vertical base at `center.x - size/2`
pub fn player_triangle(center: Vec2, size: f32, color: [f32; 4]) -> Vec<Vertex> {
    let half = size / 2.0;
    vec![
        Vertex::new(center.x - half, center.y - half, color),
        Vertex::new(center.x + half, center.y, color),
        Vertex::new(center.x - half, center.y + half, color),
    ]
}
