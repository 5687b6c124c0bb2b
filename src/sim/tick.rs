//! Fixed timestep simulation tick
//!
//! Advances a match deterministically given held input and a serve RNG.

use super::collision::{resolve_wall, wall_contact};
use super::serve::ServeRng;
use super::state::{GameEvent, MatchPhase, MatchState, Side};

/// Held movement keys for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Steer {
    pub up: bool,
    pub down: bool,
}

impl Steer {
    pub const UP: Steer = Steer { up: true, down: false };
    pub const DOWN: Steer = Steer { up: false, down: true };

    /// -1 for up, 1 for down, 0 when idle or both held
    pub fn axis(&self) -> f32 {
        match (self.up, self.down) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: Steer,
    pub right: Steer,
}

/// Leave the instructions screen and release the ball immediately
pub fn start(state: &mut MatchState) -> bool {
    if state.phase != MatchPhase::Instructions {
        return false;
    }
    state.phase = MatchPhase::Playing;
    state.wait_elapsed = 0.0;
    log::info!("Match started");
    true
}

/// New match: scores cleared, paddles centered, fresh serve, instructions shown
pub fn restart<R: ServeRng + ?Sized>(state: &mut MatchState, rng: &mut R) {
    let config = state.config;
    *state = MatchState::new(config, rng);
    log::info!("Match restarted");
}

/// Advance the match by one fixed timestep
pub fn tick<R: ServeRng + ?Sized>(state: &mut MatchState, input: &TickInput, dt: f32, rng: &mut R) {
    match state.phase {
        MatchPhase::Instructions | MatchPhase::GameOver { .. } => return,
        MatchPhase::Waiting | MatchPhase::Playing => {}
    }

    state.time_ticks += 1;

    // Paddles move in every live phase, including the serve wait
    let step = state.config.paddle_speed * dt;
    let height = state.config.arena_height;
    state.left.move_by(input.left.axis() * step, height);
    state.right.move_by(input.right.axis() * step, height);

    if state.phase == MatchPhase::Waiting {
        state.wait_elapsed += dt;
        if state.wait_elapsed > state.config.serve_delay {
            state.phase = MatchPhase::Playing;
        }
        return;
    }

    let ball = &mut state.ball;
    ball.pos += ball.vel * dt;

    if let Some(contact) = wall_contact(ball.pos, ball.radius, height) {
        if resolve_wall(&mut ball.pos, &mut ball.vel, ball.radius, height, contact) {
            log::debug!("Wall bounce ({contact:?}) at x={:.1}", ball.pos.x);
            state.events.push(GameEvent::WallBounce);
        }
    }

    // Left paddle only deflects a ball heading left, and vice versa
    if ball.vel.x < 0.0 && ball.bounds().intersects(&state.left.bounds()) {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = state.left.pos.x + state.left.size.x / 2.0 + ball.radius;
        log::debug!("Left paddle hit at y={:.1}", ball.pos.y);
        state.events.push(GameEvent::PaddleHit { side: Side::Left });
    }
    if ball.vel.x > 0.0 && ball.bounds().intersects(&state.right.bounds()) {
        ball.vel.x = -ball.vel.x;
        ball.pos.x = state.right.pos.x - state.right.size.x / 2.0 - ball.radius;
        log::debug!("Right paddle hit at y={:.1}", ball.pos.y);
        state.events.push(GameEvent::PaddleHit { side: Side::Right });
    }

    let scorer = if ball.pos.x + ball.radius < 0.0 {
        Some(Side::Right)
    } else if ball.pos.x - ball.radius > state.config.arena_width {
        Some(Side::Left)
    } else {
        None
    };

    if let Some(side) = scorer {
        award_point(state, side);
        state.reset_ball(rng);
    }
}

fn award_point(state: &mut MatchState, side: Side) {
    state.score.increment(side);
    log::info!(
        "{} player scores ({} - {})",
        side.as_str(),
        state.score.left,
        state.score.right
    );
    state.events.push(GameEvent::Scored {
        side,
        score: state.score,
    });

    if let Some(winner) = state.score.leader_at(state.config.winning_score) {
        state.phase = MatchPhase::GameOver { winner };
        log::info!("{} player wins the match", winner.as_str());
        state.events.push(GameEvent::MatchWon { winner });
    }
}
