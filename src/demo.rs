//! Shape movement demo model
//!
//! A circle steered in four directions, advanced on the same fixed timestep
//! as the match.

use glam::Vec2;

/// Held direction keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Movement {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Movement {
    /// Unnormalized direction; opposite keys cancel
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.up {
            dir.y -= 1.0;
        }
        if self.down {
            dir.y += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovingShape {
    /// Top-left of the circle's bounding box
    pub pos: Vec2,
    pub radius: f32,
    /// Pixels per second along each held axis
    pub speed: f32,
}

impl MovingShape {
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self { pos, radius, speed }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }

    pub fn update(&mut self, movement: Movement, dt: f32) {
        self.pos += movement.direction() * self.speed * dt;
    }
}
