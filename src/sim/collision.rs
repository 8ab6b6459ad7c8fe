//! Collision predicates
//!
//! Everything on the field is a circle for collision purposes - balls,
//! bullets, and the player ship (approximated by its incircle). A hit is a
//! strict Euclidean distance check between centers.

use glam::Vec2;

use super::state::{Ball, Bullet, Player};
use crate::consts::BULLET_RADIUS;

/// True if two circles overlap (strict - touching exactly is a miss)
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    a.distance(b) < radius_a + radius_b
}

/// Ball vs player ship - ends the game on contact
#[inline]
pub fn ball_hits_player(ball: &Ball, player: &Player) -> bool {
    circles_overlap(ball.pos, ball.radius, player.center(), player.size / 2.0)
}

/// Ball vs bullet - destroys both on contact
#[inline]
pub fn ball_hits_bullet(ball: &Ball, bullet: &Bullet) -> bool {
    circles_overlap(ball.pos, ball.radius, bullet.pos, BULLET_RADIUS)
}
