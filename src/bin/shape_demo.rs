//! Shape movement demo
//!
//! A circle steered with W/A/S/D on a fixed timestep.

use std::process::ExitCode;
use std::time::Instant;

use glam::Vec2;
use macroquad::color::{BLACK, Color};
use macroquad::input::{KeyCode, is_key_down, is_key_pressed, is_quit_requested, prevent_quit};
use macroquad::shapes::draw_circle;
use macroquad::window::{Conf, clear_background, next_frame};

use pong_duel::GameConfig;
use pong_duel::demo::{Movement, MovingShape};
use pong_duel::driver::FixedTimestep;

const SHAPE_COLOR: Color = Color::new(0.0, 1.0, 1.0, 1.0);

fn held_movement() -> Movement {
    Movement {
        up: is_key_down(KeyCode::W),
        down: is_key_down(KeyCode::S),
        left: is_key_down(KeyCode::A),
        right: is_key_down(KeyCode::D),
    }
}

async fn run(config: GameConfig) {
    prevent_quit();

    let mut shape = MovingShape::new(
        Vec2::new(100.0, 100.0),
        config.demo.shape_radius,
        config.demo.shape_speed,
    );
    let mut timestep = FixedTimestep::new(config.step(), config.max_substeps);

    let mut last = Instant::now();
    loop {
        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            break;
        }
        let now = Instant::now();
        let steps = timestep.advance(now - last);
        last = now;

        let movement = held_movement();
        for _ in 0..steps {
            shape.update(movement, timestep.dt());
        }

        clear_background(BLACK);
        let center = shape.center();
        draw_circle(center.x, center.y, shape.radius, SHAPE_COLOR);
        next_frame().await;
    }
    log::info!("Shape demo closed");
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match GameConfig::from_args() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let conf = Conf {
        window_title: "Shape Demo".to_owned(),
        window_width: 640,
        window_height: 480,
        ..Default::default()
    };
    macroquad::Window::from_config(conf, run(config));
    ExitCode::SUCCESS
}
