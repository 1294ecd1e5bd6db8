//! Player/bullet collision and bullet lifetime
//!
//! Hits are tested against the player's small hitbox, not the visual disc.
//! Any hit leads to the same full reset, so the scan stops at the first one.

use glam::Vec2;

use super::state::Bullet;
use crate::consts::{BULLET_MARGIN_BOTTOM, BULLET_MARGIN_TOP};

/// True when a bullet overlaps the player's hitbox
pub fn bullet_hits_player(bullet: &Bullet, player_pos: Vec2, hitbox_radius: f32) -> bool {
    let combined = hitbox_radius + bullet.radius;
    bullet.pos.distance_squared(player_pos) < combined * combined
}

/// Index of the first bullet overlapping the hitbox, if any
pub fn first_hit(bullets: &[Bullet], player_pos: Vec2, hitbox_radius: f32) -> Option<usize> {
    bullets
        .iter()
        .position(|bullet| bullet_hits_player(bullet, player_pos, hitbox_radius))
}

/// True while the bullet is inside the vertical bounds, with margin above
/// and below
pub fn in_flight(bullet: &Bullet, world_h: f32) -> bool {
    bullet.pos.y > -BULLET_MARGIN_TOP && bullet.pos.y < world_h + BULLET_MARGIN_BOTTOM
}
