//! Serve direction rolling
//!
//! The angle is drawn in whole degrees and re-rolled until the serve is
//! mostly horizontal.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

/// Source of serve angles, in whole degrees `0..360`
pub trait ServeRng {
    fn roll_degrees(&mut self) -> u32;
}

impl ServeRng for Pcg32 {
    fn roll_degrees(&mut self) -> u32 {
        self.random_range(0..360)
    }
}

/// Rolls before giving up and serving straight toward the right
const MAX_ROLLS: u32 = 1024;

/// Velocity of a fresh serve with `|cos(angle)| > min_cos`
pub fn serve_velocity<R: ServeRng + ?Sized>(rng: &mut R, speed: f32, min_cos: f32) -> Vec2 {
    for _ in 0..MAX_ROLLS {
        let angle = (rng.roll_degrees() % 360) as f32 * std::f32::consts::TAU / 360.0;
        let (sin, cos) = angle.sin_cos();
        if cos.abs() > min_cos {
            return Vec2::new(cos, sin) * speed;
        }
    }
    log::warn!("No acceptable serve angle after {MAX_ROLLS} rolls, serving horizontally");
    Vec2::new(speed, 0.0)
}
