//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected serve RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod serve;
pub mod state;
pub mod tick;

pub use collision::{Aabb, WallContact, resolve_wall, wall_contact};
pub use serve::{ServeRng, serve_velocity};
pub use state::{Ball, GameEvent, MatchPhase, MatchState, Paddle, Score, Side};
pub use tick::{Steer, TickInput, restart, start, tick};
