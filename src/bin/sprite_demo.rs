//! Sprite demo
//!
//! Draws the configured image at a fixed spot until the window is closed.

use std::process::ExitCode;

use macroquad::color::{BLACK, WHITE};
use macroquad::input::{KeyCode, is_key_pressed, is_quit_requested, prevent_quit};
use macroquad::texture::draw_texture;
use macroquad::window::{Conf, clear_background, next_frame};

use pong_duel::GameConfig;
use pong_duel::renderer::load_sprite;

const SPRITE_X: f32 = 400.0;
const SPRITE_Y: f32 = 300.0;

async fn run(config: GameConfig) {
    prevent_quit();

    // A missing image leaves the window blank
    let sprite = load_sprite(&config.assets.sprite).await;

    while !(is_quit_requested() || is_key_pressed(KeyCode::Escape)) {
        clear_background(BLACK);
        if let Some(texture) = &sprite {
            draw_texture(texture, SPRITE_X, SPRITE_Y, WHITE);
        }
        next_frame().await;
    }
    log::info!("Sprite demo closed");
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
        window_title: "Sprite Demo".to_owned(),
        window_width: 800,
        window_height: 600,
        ..Default::default()
    };
    macroquad::Window::from_config(conf, run(config));
    ExitCode::SUCCESS
}
