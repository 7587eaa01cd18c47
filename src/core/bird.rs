//! The player-controlled bird.

use super::constants::{MAX_TILT, TILT_DIVISOR};
use super::geometry::Rect;
use crate::assets::Dimensions;

/// Bird kinematics. Horizontal position and size are fixed for a session.
///
/// Neither velocity nor position is clamped: leaving the surface is detected
/// by the collision pass, not prevented here.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Fixed column (surface units).
    pub x: i32,
    /// Top edge; grows downward.
    pub y: f64,
    /// Vertical velocity per tick (positive = downward).
    pub velocity: f64,
    pub width: u32,
    pub height: u32,
}

impl Bird {
    pub fn new(x: i32, y: f64, size: Dimensions) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    /// One tick of free fall: velocity first, then position.
    pub fn apply_gravity(&mut self, gravity: f64) {
        self.velocity += gravity;
        self.y += self.velocity;
    }

    /// Flap. Replaces the velocity rather than adding to it.
    pub fn apply_impulse(&mut self, impulse: f64) {
        self.velocity = impulse;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x as f64,
            self.y,
            self.width as f64,
            self.height as f64,
        )
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height as f64
    }

    /// Nose angle in radians for drawing, capped so a long fall doesn't spin the sprite.
    pub fn tilt(&self) -> f64 {
        (self.velocity / TILT_DIVISOR).min(MAX_TILT)
    }
}
