//! Data-driven game balance
//!
//! Knobs that shape the pace of a run without changing the identity of the
//! bullet patterns themselves. Defaults reproduce the reference balance;
//! hosts can override any subset via JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance knobs, stored inside the game state so a run carries its own
/// configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Playfield width in world units
    pub world_w: f32,
    /// Playfield height in world units
    pub world_h: f32,
    /// Per-tick fraction of the remaining distance to the drag target
    pub player_follow_factor: f32,
    /// Horizontal patrol speed of the enemy
    pub enemy_speed: f32,
    /// Ticks between attack pattern rotations
    pub pattern_rotation_ticks: u32,
    /// Ticks a punish lasts once entered
    pub punish_duration_ticks: u32,
    /// Warning flash fade-out per tick
    pub flash_decay_per_tick: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_w: WORLD_W,
            world_h: WORLD_H,
            player_follow_factor: PLAYER_FOLLOW_FACTOR,
            enemy_speed: ENEMY_SPEED,
            pattern_rotation_ticks: PATTERN_ROTATION_TICKS,
            punish_duration_ticks: PUNISH_DURATION_TICKS,
            flash_decay_per_tick: FLASH_DECAY_PER_TICK,
        }
    }
}

impl Tuning {
    /// Parse a tuning override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
