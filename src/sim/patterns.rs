//! Bullet pattern emitters
//!
//! Each emitter appends bullets to the field from the enemy's current
//! position. Angles measure from straight down: direction is
//! `(sin t, cos t)`, so t = 0 aims at the player's half of the field.
//! The counts, arcs, radii and speeds here are the identity of each
//! pattern and are fixed rather than tunable.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Bullet, BulletKind, EmitterPhases};

/// Single aimed shot straight down
pub fn single(origin: Vec2, bullets: &mut Vec<Bullet>) {
    bullets.push(Bullet {
        pos: origin,
        vel: Vec2::new(0.0, 1.0),
        speed: 6.0,
        radius: 7.0,
        kind: BulletKind::Standard,
    });
}

/// Twelve shots fanned across a 2-radian arc centered straight down
pub fn spread(origin: Vec2, bullets: &mut Vec<Bullet>) {
    arc_fan(origin, bullets, 12, 2.0, 7.0, 5.0);
}

/// Sixty shots across a 7-radian arc, wrapping most of the circle
pub fn circle(origin: Vec2, bullets: &mut Vec<Bullet>) {
    arc_fan(origin, bullets, 60, 7.0, 8.0, 4.0);
}

/// One swaying shot. Advances the shared phase so consecutive firings
/// weave instead of stacking.
pub fn curvy(origin: Vec2, phases: &mut EmitterPhases, rng: &mut Pcg32, bullets: &mut Vec<Bullet>) {
    let bias = rng.random_range(-0.25..0.25);
    bullets.push(Bullet {
        pos: origin,
        // Steered before its first integration; the spawn velocity is never used
        vel: Vec2::ZERO,
        speed: 4.7,
        radius: 7.0,
        kind: BulletKind::Curvy {
            phase: phases.curvy_phase,
            bias,
            age: 0,
        },
    });
    phases.curvy_phase += 0.18;
}

/// Ring of eight huge slow orbs. The angular offset alternates by a half
/// step between firings, closing the gaps the previous ring left open.
pub fn big(origin: Vec2, phases: &mut EmitterPhases, bullets: &mut Vec<Bullet>) {
    let step = std::f32::consts::TAU / 8.0;
    phases.big_zig = !phases.big_zig;
    for i in 0..8 {
        let mut angle = i as f32 * step;
        if phases.big_zig {
            angle += step / 2.0;
        }
        bullets.push(Bullet {
            pos: origin,
            vel: Vec2::new(angle.sin(), angle.cos()),
            speed: 3.0,
            radius: 60.0,
            kind: BulletKind::Standard,
        });
    }
}

/// Dense full-circle ring with per-bullet angular jitter; refired rapidly
/// for the whole punish duration
pub fn punish_barrage(origin: Vec2, rng: &mut Pcg32, bullets: &mut Vec<Bullet>) {
    let count = 80;
    let step = std::f32::consts::TAU / count as f32;
    for i in 0..count {
        let angle = i as f32 * step + rng.random_range(-0.05..0.05);
        bullets.push(Bullet {
            pos: origin,
            vel: Vec2::new(angle.sin(), angle.cos()),
            speed: 4.0,
            radius: 10.0,
            kind: BulletKind::Standard,
        });
    }
}

/// Evenly spaced fan across `arc` radians centered straight down,
/// endpoints inclusive. A count of 1 collapses to the center angle
/// instead of dividing by zero.
fn arc_fan(origin: Vec2, bullets: &mut Vec<Bullet>, count: u32, arc: f32, radius: f32, speed: f32) {
    for i in 0..count {
        let t = if count > 1 {
            -arc / 2.0 + arc * (i as f32 / (count - 1) as f32)
        } else {
            0.0
        };
        bullets.push(Bullet {
            pos: origin,
            vel: Vec2::new(t.sin(), t.cos()),
            speed,
            radius,
            kind: BulletKind::Standard,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn origin() -> Vec2 {
        Vec2::new(200.0, 80.0)
    }

    #[test]
    fn test_single_aims_straight_down() {
        let mut bullets = Vec::new();
        single(origin(), &mut bullets);
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].vel, Vec2::new(0.0, 1.0));
        assert_eq!(bullets[0].speed, 6.0);
        assert_eq!(bullets[0].radius, 7.0);
    }

    #[test]
    fn test_spread_count_and_symmetry() {
        let mut bullets = Vec::new();
        spread(origin(), &mut bullets);
        assert_eq!(bullets.len(), 12);

        // Angles are symmetric about straight down: horizontal components
        // mirror pairwise and cancel in total
        for i in 0..6 {
            let left = bullets[i].vel.x;
            let right = bullets[11 - i].vel.x;
            assert!((left + right).abs() < 1e-5, "pair {i} not mirrored");
        }
        let sum_x: f32 = bullets.iter().map(|b| b.vel.x).sum();
        assert!(sum_x.abs() < 1e-4);

        // Endpoints inclusive: the widest shots sit at ±1 radian
        assert!((bullets[0].vel.x - (-1.0f32).sin()).abs() < 1e-5);
        assert!((bullets[11].vel.x - (1.0f32).sin()).abs() < 1e-5);
    }

    #[test]
    fn test_circle_count_and_extent() {
        let mut bullets = Vec::new();
        circle(origin(), &mut bullets);
        assert_eq!(bullets.len(), 60);
        assert!(bullets.iter().all(|b| b.radius == 8.0 && b.speed == 4.0));
        assert!((bullets[0].vel.x - (-3.5f32).sin()).abs() < 1e-5);
        assert!((bullets[59].vel.x - (3.5f32).sin()).abs() < 1e-5);
    }

    #[test]
    fn test_curvy_bias_and_phase_advance() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut phases = EmitterPhases::default();
        let mut bullets = Vec::new();

        for firing in 0..10 {
            curvy(origin(), &mut phases, &mut rng, &mut bullets);
            let bullet = bullets[firing];
            match bullet.kind {
                BulletKind::Curvy { phase, bias, age } => {
                    assert!((-0.25..0.25).contains(&bias));
                    assert!((phase - firing as f32 * 0.18).abs() < 1e-4);
                    assert_eq!(age, 0);
                }
                BulletKind::Standard => panic!("curvy emitter produced a standard bullet"),
            }
        }
        assert!((phases.curvy_phase - 1.8).abs() < 1e-4);
    }

    #[test]
    fn test_big_offset_alternates() {
        let mut phases = EmitterPhases::default();
        let step = std::f32::consts::TAU / 8.0;

        let mut first_angles = Vec::new();
        for _ in 0..4 {
            let mut bullets = Vec::new();
            big(origin(), &mut phases, &mut bullets);
            assert_eq!(bullets.len(), 8);
            // Recover the base angle of bullet 0 from its direction
            first_angles.push(bullets[0].vel.x.atan2(bullets[0].vel.y));
        }

        // Offset firings interleave with aligned ones: half step, zero, half
        // step, zero
        assert!((first_angles[0] - step / 2.0).abs() < 1e-5);
        assert!(first_angles[1].abs() < 1e-5);
        assert!((first_angles[2] - step / 2.0).abs() < 1e-5);
        assert!(first_angles[3].abs() < 1e-5);
    }

    #[test]
    fn test_punish_barrage_jitter_bounded() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut bullets = Vec::new();
        punish_barrage(origin(), &mut rng, &mut bullets);
        assert_eq!(bullets.len(), 80);

        let step = std::f32::consts::TAU / 80.0;
        for (i, bullet) in bullets.iter().enumerate() {
            let angle = bullet.vel.x.atan2(bullet.vel.y);
            let base = i as f32 * step;
            // atan2 wraps to (-π, π]; compare against the wrapped base angle
            let mut diff = angle - base;
            while diff > std::f32::consts::PI {
                diff -= std::f32::consts::TAU;
            }
            while diff < -std::f32::consts::PI {
                diff += std::f32::consts::TAU;
            }
            assert!(diff.abs() <= 0.05 + 1e-5, "bullet {i} jitter {diff}");
        }
    }

    #[test]
    fn test_arc_fan_single_count_collapses_to_center() {
        let mut bullets = Vec::new();
        arc_fan(origin(), &mut bullets, 1, 2.0, 7.0, 5.0);
        assert_eq!(bullets.len(), 1);
        assert_eq!(bullets[0].vel, Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_emitters_never_produce_nan() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut phases = EmitterPhases::default();
        let mut bullets = Vec::new();
        single(origin(), &mut bullets);
        spread(origin(), &mut bullets);
        circle(origin(), &mut bullets);
        curvy(origin(), &mut phases, &mut rng, &mut bullets);
        big(origin(), &mut phases, &mut bullets);
        punish_barrage(origin(), &mut rng, &mut bullets);
        for bullet in &bullets {
            assert!(bullet.vel.x.is_finite() && bullet.vel.y.is_finite());
        }
    }
}
