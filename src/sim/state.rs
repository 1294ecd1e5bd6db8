//! Game state and core simulation types
//!
//! All state that must be carried between ticks lives here. Same seed and
//! same inputs reproduce the same run.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::tuning::Tuning;

/// The five normal attack patterns, in rotation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackPattern {
    /// Single aimed shot straight down
    Single,
    /// Fan of shots across a narrow arc
    Spread,
    /// Swaying shot with per-tick steering
    Curvy,
    /// Wide arc that wraps most of the circle
    Circle,
    /// Ring of huge slow orbs
    Big,
}

impl AttackPattern {
    /// Next pattern in the fixed rotation cycle
    pub fn next(self) -> Self {
        match self {
            AttackPattern::Single => AttackPattern::Spread,
            AttackPattern::Spread => AttackPattern::Curvy,
            AttackPattern::Curvy => AttackPattern::Circle,
            AttackPattern::Circle => AttackPattern::Big,
            AttackPattern::Big => AttackPattern::Single,
        }
    }

    /// Ticks until the next shot after firing this pattern
    pub fn fire_interval(self) -> i32 {
        match self {
            AttackPattern::Single => 14,
            AttackPattern::Spread => 20,
            AttackPattern::Curvy => 8,
            AttackPattern::Circle => 40,
            AttackPattern::Big => 30,
        }
    }
}

/// Enemy behavior mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyMode {
    /// Normal rotation through the five attack patterns
    Attack(AttackPattern),
    /// Forced barrage after the player slips level with the enemy
    Punish,
}

impl EnemyMode {
    pub fn fire_interval(self) -> i32 {
        match self {
            EnemyMode::Attack(pattern) => pattern.fire_interval(),
            EnemyMode::Punish => PUNISH_FIRE_INTERVAL,
        }
    }
}

/// Bullet motion rule, dispatched by kind every tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BulletKind {
    /// Velocity fixed at spawn
    Standard,
    /// Velocity recomputed from age and phase each tick before integration
    Curvy { phase: f32, bias: f32, age: u32 },
}

/// A bullet in flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    /// Direction of travel (unit-ish); scaled by `speed` on integration
    pub vel: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub kind: BulletKind,
}

impl Bullet {
    /// Recompute velocity for kinds with a per-tick motion rule.
    /// Standard bullets keep their spawn velocity.
    pub fn steer(&mut self) {
        if let BulletKind::Curvy { phase, bias, age } = &mut self.kind {
            *age += 1;
            let sway = (*age as f32 * 0.06 + *phase).sin() * 0.55;
            self.vel = Vec2::new(sway + *bias, 1.1);
        }
    }
}

/// Player avatar: a big visual disc with a much smaller hitbox
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub radius: f32,
    pub hitbox_radius: f32,
    /// Drag target; persists across ticks so the avatar keeps easing toward
    /// the last known point. Cleared only on reset.
    pub target: Option<Vec2>,
}

impl Player {
    fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(
                tuning.world_w / 2.0,
                tuning.world_h - PLAYER_SPAWN_BOTTOM_OFFSET,
            ),
            radius: PLAYER_RADIUS,
            hitbox_radius: PLAYER_HITBOX_RADIUS,
            target: None,
        }
    }
}

/// The enemy: patrols the top edge and fires the active pattern
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    pub radius: f32,
    /// Horizontal patrol direction, +1 or -1
    pub dir: f32,
    pub speed: f32,
    /// Ticks until the next shot; decremented before the check, so it may
    /// dip below zero on the firing tick
    pub cooldown: i32,
    pub mode: EnemyMode,
    /// Ticks since the last mode change
    pub mode_ticks: u32,
}

impl Enemy {
    fn spawn(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.world_w / 2.0, ENEMY_SPAWN_Y),
            radius: ENEMY_RADIUS,
            dir: 1.0,
            speed: tuning.enemy_speed,
            cooldown: 0,
            mode: EnemyMode::Attack(AttackPattern::Single),
            mode_ticks: 0,
        }
    }

    /// Switch mode. The rotation timer restarts on every mode change.
    pub fn set_mode(&mut self, mode: EnemyMode) {
        self.mode = mode;
        self.mode_ticks = 0;
    }
}

/// Flash-then-barrage escalation state
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PunishState {
    /// Set on arming; blocks re-arming until the punish ends
    pub armed: bool,
    /// The warning flash is decaying toward punish entry
    pub flashing: bool,
    /// Overlay alpha for the renderer, 0..=0.5
    pub flash_alpha: f32,
    /// Ticks spent in punish mode
    pub duration_ticks: u32,
}

/// Emitter state carried across firings and across resets
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmitterPhases {
    /// Global phase fed to newly spawned curvy bullets
    pub curvy_phase: f32,
    /// Half-step offset toggle for the big-orb ring
    pub big_zig: bool,
}

/// Observable things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PatternChanged {
        from: AttackPattern,
        to: AttackPattern,
    },
    PunishArmed,
    PunishEntered,
    PunishEnded,
    PlayerHit,
}

/// Complete simulation state, exclusively owned by the driving loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only source of randomness in the simulation
    pub rng: Pcg32,
    /// Simulation tick counter; keeps running across resets
    pub tick_count: u64,
    pub player: Player,
    pub enemy: Enemy,
    /// Active bullets in spawn order
    pub bullets: Vec<Bullet>,
    pub punish: PunishState,
    /// Emitter phases; deliberately outside the reset contract
    pub phases: EmitterPhases,
    /// What happened last tick; cleared when the next tick starts
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    pub tuning: Tuning,
}

impl GameState {
    /// Create a new game state with the given seed and default balance
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tick_count: 0,
            player: Player::spawn(&tuning),
            enemy: Enemy::spawn(&tuning),
            bullets: Vec::new(),
            punish: PunishState::default(),
            phases: EmitterPhases::default(),
            events: Vec::new(),
            tuning,
        }
    }

    /// Put every gameplay entity back to its spawn state in one step: player
    /// and enemy respawn, the bullet field empties, the punish sequence
    /// clears. Emitter phases and the RNG stream carry on.
    pub fn reset(&mut self) {
        self.player = Player::spawn(&self.tuning);
        self.enemy = Enemy::spawn(&self.tuning);
        self.bullets.clear();
        self.punish = PunishState::default();
    }
}
