//! Platform input
//!
//! Translates macroquad keyboard state into driver input. Key presses are
//! captured once per frame and queued until a simulation step drains them.

use std::collections::VecDeque;

use macroquad::input::{KeyCode, is_key_down, is_key_pressed, is_quit_requested};

use crate::driver::{InputEvent, InputSource};
use crate::sim::{Steer, TickInput};

/// Keys for one side
#[derive(Debug, Clone, Copy)]
pub struct PaddleKeys {
    pub up: KeyCode,
    pub down: KeyCode,
}

pub const LEFT_KEYS: PaddleKeys = PaddleKeys {
    up: KeyCode::W,
    down: KeyCode::S,
};
pub const RIGHT_KEYS: PaddleKeys = PaddleKeys {
    up: KeyCode::Up,
    down: KeyCode::Down,
};

/// Keyboard-backed input source
#[derive(Debug, Default)]
pub struct KeyboardInput {
    pending: VecDeque<InputEvent>,
}

impl KeyboardInput {
    pub fn new() -> Self {
        Self::default()
    }
}

fn steer(keys: PaddleKeys) -> Steer {
    Steer {
        up: is_key_down(keys.up),
        down: is_key_down(keys.down),
    }
}

impl InputSource for KeyboardInput {
    fn capture(&mut self) {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            self.pending.push_back(InputEvent::Quit);
        }
        if is_key_pressed(KeyCode::R) {
            self.pending.push_back(InputEvent::Restart);
        }
        if is_key_pressed(KeyCode::Space) {
            self.pending.push_back(InputEvent::Start);
        }
    }

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.pending.pop_front()
    }

    fn held(&self) -> TickInput {
        TickInput {
            left: steer(LEFT_KEYS),
            right: steer(RIGHT_KEYS),
        }
    }
}
