//! Match state and core simulation types
//!
//! Plain data; every mutation goes through `tick`, `start` or `restart`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::serve::{ServeRng, serve_velocity};
use crate::config::MatchConfig;

/// Which player a paddle, point or win belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Instructions overlay, nothing moves until start
    Instructions,
    /// Ball frozen at center after a point
    Waiting,
    /// Active rally
    Playing,
    /// Match decided
    GameOver { winner: Side },
}

/// Something that happened during a tick (for logging and audio)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    PaddleHit { side: Side },
    Scored { side: Side, score: Score },
    MatchWon { winner: Side },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Center of the paddle
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    /// Paddle centered vertically at its side's inset
    pub fn new(side: Side, config: &MatchConfig) -> Self {
        let x = match side {
            Side::Left => config.paddle_inset,
            Side::Right => config.arena_width - config.paddle_inset,
        };
        Self {
            side,
            pos: Vec2::new(x, config.arena_height / 2.0),
            size: Vec2::new(config.paddle_width, config.paddle_height),
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, self.size / 2.0)
    }

    /// Move vertically, keeping the whole paddle inside `[0, arena_height]`
    pub fn move_by(&mut self, dy: f32, arena_height: f32) {
        let half = self.size.y / 2.0;
        self.pos.y = (self.pos.y + dy).clamp(half, arena_height - half);
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos, Vec2::splat(self.radius))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    /// Side that has reached `winning_score`, if any
    pub fn leader_at(&self, winning_score: u32) -> Option<Side> {
        if self.left >= winning_score {
            Some(Side::Left)
        } else if self.right >= winning_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Complete match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub config: MatchConfig,
    pub phase: MatchPhase,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Seconds spent in the current `Waiting` phase
    pub wait_elapsed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl MatchState {
    /// Fresh match showing instructions, with the first serve already rolled
    pub fn new<R: ServeRng + ?Sized>(config: MatchConfig, rng: &mut R) -> Self {
        let mut state = Self {
            config,
            phase: MatchPhase::Instructions,
            left: Paddle::new(Side::Left, &config),
            right: Paddle::new(Side::Right, &config),
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::ZERO,
                radius: config.ball_radius,
            },
            score: Score::default(),
            wait_elapsed: 0.0,
            time_ticks: 0,
            events: Vec::new(),
        };
        state.reset_ball(rng);
        state.phase = MatchPhase::Instructions;
        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.config.arena_width, self.config.arena_height) / 2.0
    }

    /// Center the ball, roll a new serve and freeze it
    pub fn reset_ball<R: ServeRng + ?Sized>(&mut self, rng: &mut R) {
        self.ball.pos = self.arena_center();
        self.ball.vel = serve_velocity(rng, self.config.ball_speed, self.config.min_serve_cos);
        self.wait_elapsed = 0.0;
        if !self.is_game_over() {
            self.phase = MatchPhase::Waiting;
        }
    }

    pub fn shows_instructions(&self) -> bool {
        self.phase == MatchPhase::Instructions
    }

    pub fn is_waiting(&self) -> bool {
        self.phase == MatchPhase::Waiting
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, MatchPhase::GameOver { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            MatchPhase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Take the events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
