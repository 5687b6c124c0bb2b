//! Game configuration
//!
//! Loaded from an optional JSON file given at startup. Every field has a
//! default, so a partial file only overrides what it names.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Rules and geometry of a single match
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from a side wall to that side's paddle center
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub winning_score: u32,
    /// Seconds the ball stays frozen after a point
    pub serve_delay: f32,
    /// Lower bound on |cos| of the serve angle
    pub min_serve_cos: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            paddle_speed: PADDLE_SPEED,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            winning_score: WINNING_SCORE,
            serve_delay: SERVE_DELAY,
            min_serve_cos: MIN_SERVE_COS,
        }
    }
}

impl MatchConfig {
    /// Check that the geometry describes a playable arena
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.paddle_height > self.arena_height {
            return Err(ConfigError::Invalid(format!(
                "paddle_height {} does not fit arena_height {}",
                self.paddle_height, self.arena_height
            )));
        }
        if self.paddle_inset < 0.0 || self.paddle_inset * 2.0 >= self.arena_width {
            return Err(ConfigError::Invalid(format!(
                "paddle_inset {} must be within half the arena width",
                self.paddle_inset
            )));
        }
        if self.winning_score == 0 {
            return Err(ConfigError::Invalid("winning_score must be at least 1".into()));
        }
        if !(self.serve_delay >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "serve_delay must not be negative, got {}",
                self.serve_delay
            )));
        }
        if !(0.0..1.0).contains(&self.min_serve_cos) {
            return Err(ConfigError::Invalid(format!(
                "min_serve_cos must be in [0, 1), got {}",
                self.min_serve_cos
            )));
        }
        Ok(())
    }
}

/// Files loaded best-effort at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub font: PathBuf,
    /// Image shown by the sprite demo
    pub sprite: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            font: PathBuf::from(FONT_PATH),
            sprite: PathBuf::from(SPRITE_PATH),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

impl AudioSettings {
    /// Effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0) * self.sfx_volume.clamp(0.0, 1.0)
        }
    }
}

/// Shape demo tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub shape_radius: f32,
    /// Pixels per second
    pub shape_speed: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            shape_radius: 40.0,
            shape_speed: 200.0,
        }
    }
}

/// Top-level configuration shared by all binaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    /// Simulation ticks per second
    pub tick_rate: u32,
    pub max_substeps: u32,
    /// Fixed serve seed; a clock-derived seed is used when absent
    pub seed: Option<u64>,
    #[serde(rename = "match")]
    pub rules: MatchConfig,
    pub assets: AssetPaths,
    pub audio: AudioSettings,
    pub demo: DemoConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Pong Duel".to_string(),
            tick_rate: TICK_RATE,
            max_substeps: MAX_SUBSTEPS,
            seed: None,
            rules: MatchConfig::default(),
            assets: AssetPaths::default(),
            audio: AudioSettings::default(),
            demo: DemoConfig::default(),
        }
    }
}

impl GameConfig {
    /// Read and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Config from the first command line argument, or defaults
    pub fn from_args() -> Result<Self, ConfigError> {
        match std::env::args_os().nth(1) {
            Some(path) => Self::load(Path::new(&path)),
            None => {
                log::info!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be at least 1".into()));
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::Invalid("max_substeps must be at least 1".into()));
        }
        if !(self.demo.shape_radius > 0.0 && self.demo.shape_speed >= 0.0) {
            return Err(ConfigError::Invalid(
                "demo shape_radius must be positive and shape_speed non-negative".into(),
            ));
        }
        self.rules.validate()
    }

    /// Length of one simulation step
    pub fn step(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }
}

/// Why a configuration could not be used
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            ConfigError::Parse(err) => write!(f, "malformed config: {err}"),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}
