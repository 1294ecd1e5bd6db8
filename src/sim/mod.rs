//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Tick-counted timers only, no wall clock
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod patterns;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use snapshot::{DiscView, RenderSnapshot};
pub use state::{
    AttackPattern, Bullet, BulletKind, EmitterPhases, Enemy, EnemyMode, GameEvent, GameState,
    Player, PunishState,
};
pub use tick::{TickInput, tick};
