//! Per-tick simulation driver
//!
//! Advances the whole simulation one discrete step, in a fixed order:
//! player easing, enemy patrol, pattern rotation, punish sequencing,
//! firing, bullet integration and pruning, collision. Timers count ticks,
//! never wall-clock time, so a dropped frame skips steps instead of
//! scaling deltas.

use glam::Vec2;

use super::collision;
use super::patterns;
use super::state::{AttackPattern, EnemyMode, GameEvent, GameState};
use crate::consts::{FLASH_START_ALPHA, PUNISH_FIRE_INTERVAL};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// New drag target for the player, already in world space. `None`
    /// leaves the previously stored target in place.
    pub target: Option<Vec2>,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.tick_count += 1;

    move_player(state, input);
    move_enemy(state);
    rotate_pattern(state);
    run_punish_sequence(state);
    fire(state);
    integrate_bullets(state);

    if collision::first_hit(&state.bullets, state.player.pos, state.player.hitbox_radius).is_some()
    {
        state.events.push(GameEvent::PlayerHit);
        log::info!("player hit at tick {}, resetting", state.tick_count);
        state.reset();
    }
}

/// Ease the player toward its drag target, then clamp to the playfield
fn move_player(state: &mut GameState, input: &TickInput) {
    if let Some(target) = input.target {
        state.player.target = Some(target);
    }

    let player = &mut state.player;
    if let Some(target) = player.target {
        player.pos += (target - player.pos) * state.tuning.player_follow_factor;
    }
    player.pos.x = player
        .pos
        .x
        .clamp(player.radius, state.tuning.world_w - player.radius);
    player.pos.y = player
        .pos
        .y
        .clamp(player.radius, state.tuning.world_h - player.radius);
}

/// Patrol horizontally, turning around exactly at the field edges
fn move_enemy(state: &mut GameState) {
    let enemy = &mut state.enemy;
    enemy.pos.x += enemy.dir * enemy.speed;

    let min_x = enemy.radius;
    let max_x = state.tuning.world_w - enemy.radius;
    if enemy.pos.x <= min_x {
        enemy.pos.x = min_x;
        enemy.dir = 1.0;
    } else if enemy.pos.x >= max_x {
        enemy.pos.x = max_x;
        enemy.dir = -1.0;
    }
}

/// Advance the periodic pattern rotation. Only attack modes rotate; the
/// punish mode must ride out its full duration untouched.
fn rotate_pattern(state: &mut GameState) {
    state.enemy.mode_ticks += 1;
    if state.enemy.mode_ticks > state.tuning.pattern_rotation_ticks {
        if let EnemyMode::Attack(pattern) = state.enemy.mode {
            let next = pattern.next();
            state.enemy.set_mode(EnemyMode::Attack(next));
            state
                .events
                .push(GameEvent::PatternChanged { from: pattern, to: next });
            log::debug!("pattern rotated: {:?} -> {:?}", pattern, next);
        }
    }
}

/// Arm, decay and resolve the punish escalation
fn run_punish_sequence(state: &mut GameState) {
    // Slipping level with the enemy during one of the first three patterns
    // arms the flash. Arming once is final until the punish runs out.
    let vulnerable = matches!(
        state.enemy.mode,
        EnemyMode::Attack(
            AttackPattern::Single | AttackPattern::Spread | AttackPattern::Curvy
        )
    );
    if !state.punish.armed && vulnerable && state.player.pos.y < state.enemy.pos.y + 1.0 {
        state.punish.armed = true;
        state.punish.flashing = true;
        state.punish.flash_alpha = FLASH_START_ALPHA;
        state.punish.duration_ticks = 0;
        state.events.push(GameEvent::PunishArmed);
        log::info!("punish armed at tick {}", state.tick_count);
    }

    if state.punish.flashing {
        state.punish.flash_alpha -= state.tuning.flash_decay_per_tick;
        if state.punish.flash_alpha <= 0.0 {
            state.punish.flash_alpha = 0.0;
            state.punish.flashing = false;
            state.punish.duration_ticks = 0;
            state.enemy.set_mode(EnemyMode::Punish);
            state.enemy.cooldown = PUNISH_FIRE_INTERVAL;
            state.events.push(GameEvent::PunishEntered);
            log::info!("punish entered at tick {}", state.tick_count);
        }
    }

    if state.enemy.mode == EnemyMode::Punish {
        state.punish.duration_ticks += 1;
        if state.punish.duration_ticks > state.tuning.punish_duration_ticks {
            state.enemy.set_mode(EnemyMode::Attack(AttackPattern::Single));
            state.enemy.cooldown = 0;
            state.punish.armed = false;
            state.events.push(GameEvent::PunishEnded);
            log::info!("punish ended at tick {}", state.tick_count);
        }
    }
}

/// Count down the fire cooldown and emit the active pattern when it runs out
fn fire(state: &mut GameState) {
    state.enemy.cooldown -= 1;
    if state.enemy.cooldown > 0 {
        return;
    }

    let origin = state.enemy.pos;
    match state.enemy.mode {
        EnemyMode::Attack(AttackPattern::Single) => patterns::single(origin, &mut state.bullets),
        EnemyMode::Attack(AttackPattern::Spread) => patterns::spread(origin, &mut state.bullets),
        EnemyMode::Attack(AttackPattern::Curvy) => {
            patterns::curvy(origin, &mut state.phases, &mut state.rng, &mut state.bullets)
        }
        EnemyMode::Attack(AttackPattern::Circle) => patterns::circle(origin, &mut state.bullets),
        EnemyMode::Attack(AttackPattern::Big) => {
            patterns::big(origin, &mut state.phases, &mut state.bullets)
        }
        EnemyMode::Punish => {
            patterns::punish_barrage(origin, &mut state.rng, &mut state.bullets)
        }
    }
    state.enemy.cooldown = state.enemy.mode.fire_interval();
}

/// Steer, integrate and prune the bullet field
fn integrate_bullets(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.steer();
        bullet.pos += bullet.vel * bullet.speed;
    }
    let world_h = state.tuning.world_h;
    state.bullets.retain(|bullet| collision::in_flight(bullet, world_h));
}
