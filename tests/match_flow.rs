//! Whole-match scenarios driven through the loop driver

use std::collections::VecDeque;
use std::time::Duration;

use glam::Vec2;
use pong_duel::driver::NullRenderer;
use pong_duel::renderer::layout;
use pong_duel::sim::{GameEvent, MatchPhase, MatchState, Side, TickInput};
use pong_duel::{Game, GameConfig, InputEvent, InputSource};

const FRAME: Duration = Duration::from_millis(20);

#[derive(Default)]
struct QueuedInput {
    events: VecDeque<InputEvent>,
}

impl InputSource for QueuedInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    fn held(&self) -> TickInput {
        TickInput::default()
    }
}

fn new_game() -> Game<QueuedInput, NullRenderer> {
    let config = GameConfig {
        seed: Some(2024),
        ..GameConfig::default()
    };
    Game::new(&config, QueuedInput::default(), NullRenderer)
}

/// Send the ball past the right paddle so the left side scores
fn right_side_misses(state: &mut MatchState) {
    state.phase = MatchPhase::Playing;
    state.right.pos.y = 100.0;
    state.ball.pos = Vec2::new(805.0, 500.0);
    state.ball.vel = Vec2::new(400.0, 0.0);
}

#[test]
fn test_five_right_misses_then_restart() {
    let mut game = new_game();
    assert_eq!(game.state.phase, MatchPhase::Instructions);

    game.input_mut().events.push_back(InputEvent::Start);
    game.frame(FRAME);
    assert!(matches!(
        game.state.phase,
        MatchPhase::Playing | MatchPhase::Waiting
    ));

    let mut won = false;
    for point in 1..=5 {
        right_side_misses(&mut game.state);
        let events = game.frame(FRAME);
        assert_eq!(game.state.score.left, point);
        assert_eq!(game.state.score.right, 0);
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::Scored {
                side: Side::Left,
                ..
            }
        )));
        won |= events.contains(&GameEvent::MatchWon { winner: Side::Left });
        if point < 5 {
            assert!(game.state.is_waiting());
            let vel = game.state.ball.vel;
            assert!((vel.x / vel.length()).abs() > 0.7);
        }
    }

    assert!(won);
    assert_eq!(game.state.phase, MatchPhase::GameOver { winner: Side::Left });
    let winner = game.state.winner().unwrap();
    assert_eq!(layout::win_text(winner), "Left Player Wins!");

    // Terminal: frames keep rendering but nothing advances
    let frozen = game.state.clone();
    game.frame(FRAME);
    assert_eq!(game.state.score, frozen.score);
    assert_eq!(game.state.time_ticks, frozen.time_ticks);

    game.input_mut().events.push_back(InputEvent::Restart);
    game.frame(FRAME);
    assert_eq!(game.state.score.left, 0);
    assert_eq!(game.state.score.right, 0);
    assert_eq!(game.state.phase, MatchPhase::Instructions);
    assert_eq!(game.state.left.pos, Vec2::new(50.0, 300.0));
    assert_eq!(game.state.right.pos, Vec2::new(750.0, 300.0));
}

#[test]
fn test_serve_wait_lasts_about_a_second() {
    let mut game = new_game();
    game.input_mut().events.push_back(InputEvent::Start);
    game.frame(FRAME);

    right_side_misses(&mut game.state);
    game.frame(FRAME);
    assert!(game.state.is_waiting());
    let center = game.state.ball.pos;

    // 0.9 s of frames: still frozen
    for _ in 0..45 {
        game.frame(FRAME);
    }
    assert!(game.state.is_waiting());
    assert_eq!(game.state.ball.pos, center);

    // Another 0.2 s: released
    for _ in 0..10 {
        game.frame(FRAME);
    }
    assert_eq!(game.state.phase, MatchPhase::Playing);
}

#[test]
fn test_quit_ends_loop_after_iteration() {
    let mut game = new_game();
    game.input_mut().events.push_back(InputEvent::Quit);
    game.frame(FRAME);
    assert!(!game.is_running());
}
