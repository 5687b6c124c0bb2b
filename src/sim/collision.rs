//! Axis-aligned collision helpers
//!
//! Screen coordinates: origin top-left, +y down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Overlap with positive area; touching edges do not count
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Which horizontal wall the ball is pressing into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallContact {
    Top,
    Bottom,
}

/// Wall the ball overlaps, if any
pub fn wall_contact(pos: Vec2, radius: f32, arena_height: f32) -> Option<WallContact> {
    if pos.y - radius < 0.0 {
        Some(WallContact::Top)
    } else if pos.y + radius > arena_height {
        Some(WallContact::Bottom)
    } else {
        None
    }
}

/// Push the ball back inside and point its vertical velocity away from the wall.
/// Returns true if the velocity was flipped.
pub fn resolve_wall(
    pos: &mut Vec2,
    vel: &mut Vec2,
    radius: f32,
    arena_height: f32,
    contact: WallContact,
) -> bool {
    match contact {
        WallContact::Top => {
            pos.y = radius;
            if vel.y < 0.0 {
                vel.y = -vel.y;
                return true;
            }
        }
        WallContact::Bottom => {
            pos.y = arena_height - radius;
            if vel.y > 0.0 {
                vel.y = -vel.y;
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::from_center(Vec2::new(15.0, 0.0), Vec2::splat(10.0));
        let c = Aabb::from_center(Vec2::new(30.0, 0.0), Vec2::splat(10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_aabb_touching_edges_do_not_overlap() {
        let a = Aabb::from_center(Vec2::new(0.0, 0.0), Vec2::splat(10.0));
        let b = Aabb::from_center(Vec2::new(20.0, 0.0), Vec2::splat(10.0));
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_wall_contact() {
        assert_eq!(wall_contact(Vec2::new(0.0, 5.0), 10.0, 600.0), Some(WallContact::Top));
        assert_eq!(
            wall_contact(Vec2::new(0.0, 595.0), 10.0, 600.0),
            Some(WallContact::Bottom)
        );
        assert_eq!(wall_contact(Vec2::new(0.0, 300.0), 10.0, 600.0), None);
        // Resting exactly against the wall is not a contact
        assert_eq!(wall_contact(Vec2::new(0.0, 10.0), 10.0, 600.0), None);
    }

    #[test]
    fn test_resolve_wall_flips_only_when_approaching() {
        let mut pos = Vec2::new(100.0, 4.0);
        let mut vel = Vec2::new(50.0, -80.0);
        assert!(resolve_wall(&mut pos, &mut vel, 10.0, 600.0, WallContact::Top));
        assert_eq!(pos.y, 10.0);
        assert_eq!(vel.y, 80.0);

        // Already moving away: clamp but keep direction
        let mut pos = Vec2::new(100.0, 4.0);
        let mut vel = Vec2::new(50.0, 80.0);
        assert!(!resolve_wall(&mut pos, &mut vel, 10.0, 600.0, WallContact::Top));
        assert_eq!(pos.y, 10.0);
        assert_eq!(vel.y, 80.0);
    }
}
