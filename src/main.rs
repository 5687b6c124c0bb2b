//! Pong Duel entry point
//!
//! Loads configuration, opens the window and runs the fixed timestep loop.

use std::process::ExitCode;
use std::time::Instant;

use macroquad::input::prevent_quit;
use macroquad::window::{Conf, next_frame};

use pong_duel::audio::AudioManager;
use pong_duel::platform::KeyboardInput;
use pong_duel::renderer::{Assets, ScreenRenderer};
use pong_duel::{Game, GameConfig};

fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: config.title.clone(),
        window_width: config.rules.arena_width as i32,
        window_height: config.rules.arena_height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(config: GameConfig) {
    prevent_quit();

    let assets = Assets::load(&config.assets).await;
    let audio = AudioManager::load(config.audio).await;
    let mut game = Game::new(&config, KeyboardInput::new(), ScreenRenderer::new(assets));

    let mut last = Instant::now();
    while game.is_running() {
        let now = Instant::now();
        let elapsed = now - last;
        last = now;

        for event in game.frame(elapsed) {
            audio.play_event(&event);
        }
        next_frame().await;
    }
    log::info!("Pong Duel shutting down");
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Pong Duel starting...");

    let config = match GameConfig::from_args() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    macroquad::Window::from_config(window_conf(&config), run(config));
    ExitCode::SUCCESS
}
