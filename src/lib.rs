//! Pong Duel - two-player Pong on a fixed timestep
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, scoring, match phases)
//! - `driver`: Fixed timestep loop and the input/render seams
//! - `renderer`: macroquad drawing of a match
//! - `platform`: Keyboard input source
//! - `audio`: Procedurally synthesized sound effects
//! - `config`: JSON configuration with validated defaults
//! - `demo`: Shape movement demo model

pub mod audio;
pub mod config;
pub mod demo;
pub mod driver;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig, MatchConfig};
pub use driver::{FixedTimestep, Game, InputEvent, InputSource, Renderer};

/// Game configuration defaults
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Window/arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Horizontal distance from the side wall to the paddle center
    pub const PADDLE_INSET: f32 = 50.0;
    /// Pixels per second
    pub const PADDLE_SPEED: f32 = 400.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 400.0;

    /// First side to this many points wins
    pub const WINNING_SCORE: u32 = 5;
    /// Ball freeze after a point (seconds)
    pub const SERVE_DELAY: f32 = 1.0;
    /// Serves closer to vertical than this are re-rolled
    pub const MIN_SERVE_COS: f32 = 0.7;

    pub const FONT_PATH: &str = "resources/font.ttf";
    pub const SPRITE_PATH: &str = "resources/images.png";
}
