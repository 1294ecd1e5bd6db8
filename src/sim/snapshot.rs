//! Read-only render snapshot
//!
//! Captured after a tick completes; the renderer consumes positions, radii
//! and the flash overlay without touching live simulation state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::GameState;

/// A circle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscView {
    pub pos: Vec2,
    pub radius: f32,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    /// Player visual disc
    pub player: DiscView,
    /// Player collision core, drawn inside the visual disc
    pub player_hitbox: DiscView,
    pub enemy: DiscView,
    pub bullets: Vec<DiscView>,
    /// Full-field warning overlay alpha
    pub flash_alpha: f32,
    pub flash_active: bool,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            player: DiscView {
                pos: state.player.pos,
                radius: state.player.radius,
            },
            player_hitbox: DiscView {
                pos: state.player.pos,
                radius: state.player.hitbox_radius,
            },
            enemy: DiscView {
                pos: state.enemy.pos,
                radius: state.enemy.radius,
            },
            bullets: state
                .bullets
                .iter()
                .map(|bullet| DiscView {
                    pos: bullet.pos,
                    radius: bullet.radius,
                })
                .collect(),
            flash_alpha: state.punish.flash_alpha,
            flash_active: state.punish.flashing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, BulletKind};

    #[test]
    fn test_capture_mirrors_state() {
        let mut state = GameState::new(3);
        state.bullets.push(Bullet {
            pos: Vec2::new(10.0, 20.0),
            vel: Vec2::new(0.0, 1.0),
            speed: 6.0,
            radius: 7.0,
            kind: BulletKind::Standard,
        });
        state.punish.flashing = true;
        state.punish.flash_alpha = 0.25;

        let snapshot = RenderSnapshot::capture(&state);
        assert_eq!(snapshot.player.pos, state.player.pos);
        assert_eq!(snapshot.player.radius, 20.0);
        assert_eq!(snapshot.player_hitbox.radius, 3.0);
        assert_eq!(snapshot.enemy.pos, state.enemy.pos);
        assert_eq!(snapshot.bullets.len(), 1);
        assert_eq!(snapshot.bullets[0].pos, Vec2::new(10.0, 20.0));
        assert_eq!(snapshot.flash_alpha, 0.25);
        assert!(snapshot.flash_active);
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(3);
        let snapshot = RenderSnapshot::capture(&state);
        let json = serde_json::to_string(&snapshot).expect("snapshot serializes");
        let back: RenderSnapshot = serde_json::from_str(&json).expect("snapshot round-trips");
        assert_eq!(back, snapshot);
    }
}
