//! Drag input and coordinate mapping
//!
//! The event plumbing (mouse/touch listeners) lives in the host; this
//! module holds the logic those handlers call into: grab detection with a
//! recorded offset so the avatar never snaps under the finger, and the
//! screen-to-world transform for a uniformly scaled viewport.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::GRAB_RADIUS;

/// Maps screen-space points into world space for a scaled viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Screen pixels per world unit
    pub scale: f32,
    /// Screen position of the world origin (canvas top-left)
    pub origin: Vec2,
}

impl Viewport {
    /// Aspect-fit a portrait world into the available screen height,
    /// leaving a small margin at the top and bottom
    pub fn fit(world_w: f32, world_h: f32, avail_h: f32, origin: Vec2) -> Self {
        let height = avail_h * 0.98;
        let width = height * (world_w / world_h);
        Self {
            scale: width / world_w,
            origin,
        }
    }

    pub fn screen_to_world(&self, point: Vec2) -> Vec2 {
        (point - self.origin) / self.scale
    }
}

/// Grab-and-drag state for relative player control.
///
/// The player is steered by dragging anywhere near it, not by tapping a
/// destination: engaging records the offset between the grab point and the
/// player center, and every subsequent move keeps that offset so the
/// avatar tracks the finger without jumping underneath it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragInput {
    engaged: bool,
    offset: Vec2,
}

impl DragInput {
    /// Try to grab the player at a world-space point. Succeeds within
    /// `GRAB_RADIUS` of the player center; a miss leaves the state alone.
    pub fn engage(&mut self, player_pos: Vec2, point: Vec2) -> bool {
        if player_pos.distance(point) < GRAB_RADIUS {
            self.engaged = true;
            self.offset = player_pos - point;
            return true;
        }
        false
    }

    /// New player target for a drag point, while engaged
    pub fn update(&self, point: Vec2) -> Option<Vec2> {
        self.engaged.then(|| point + self.offset)
    }

    /// Release the grab. The simulation keeps the last target, so the
    /// avatar glides to a stop instead of freezing mid-motion.
    pub fn disengage(&mut self) {
        self.engaged = false;
    }

    pub fn engaged(&self) -> bool {
        self.engaged
    }
}
