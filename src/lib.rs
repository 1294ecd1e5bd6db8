//! Barrage - a touch-controlled bullet-hell dodging game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (enemy AI, bullet field, collisions)
//! - `input`: Drag input and screen/world coordinate mapping
//! - `tuning`: Data-driven game balance

pub mod input;
pub mod sim;
pub mod tuning;

pub use input::{DragInput, Viewport};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// World dimensions (portrait playfield)
    pub const WORLD_W: f32 = 400.0;
    pub const WORLD_H: f32 = 700.0;

    /// Player visual radius
    pub const PLAYER_RADIUS: f32 = 20.0;
    /// Player collision radius, much smaller than the visual disc
    pub const PLAYER_HITBOX_RADIUS: f32 = 3.0;
    /// Per-tick fraction of the remaining distance to the drag target
    pub const PLAYER_FOLLOW_FACTOR: f32 = 0.2;
    /// Player spawns this far above the bottom edge
    pub const PLAYER_SPAWN_BOTTOM_OFFSET: f32 = 100.0;

    /// Enemy defaults
    pub const ENEMY_RADIUS: f32 = 20.0;
    pub const ENEMY_SPEED: f32 = 2.0;
    pub const ENEMY_SPAWN_Y: f32 = 80.0;

    /// Ticks between attack pattern rotations
    pub const PATTERN_ROTATION_TICKS: u32 = 250;

    /// Punish sequence
    pub const PUNISH_DURATION_TICKS: u32 = 720;
    pub const PUNISH_FIRE_INTERVAL: i32 = 6;
    pub const FLASH_START_ALPHA: f32 = 0.5;
    pub const FLASH_DECAY_PER_TICK: f32 = 0.008;

    /// Bullets are pruned once they pass this far beyond the vertical bounds
    pub const BULLET_MARGIN_TOP: f32 = 50.0;
    pub const BULLET_MARGIN_BOTTOM: f32 = 100.0;

    /// A drag must start within this distance of the player center to grab it
    pub const GRAB_RADIUS: f32 = 100.0;
}
