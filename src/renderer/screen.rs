//! macroquad drawing of a match

use std::path::Path;

use macroquad::color::Color;
use macroquad::shapes::{draw_circle, draw_rectangle};
use macroquad::text::{Font, TextParams, draw_text_ex, load_ttf_font, measure_text};
use macroquad::texture::{Texture2D, load_texture};
use macroquad::window::clear_background;

use super::layout::{self, palette};
use crate::config::AssetPaths;
use crate::driver::Renderer;
use crate::sim::{MatchState, Paddle};

fn rgba(c: [u8; 4]) -> Color {
    Color::from_rgba(c[0], c[1], c[2], c[3])
}

/// Load a font, logging and returning `None` on failure
pub async fn load_font(path: &Path) -> Option<Font> {
    match load_ttf_font(&path.to_string_lossy()).await {
        Ok(font) => {
            log::info!("Loaded font {}", path.display());
            Some(font)
        }
        Err(err) => {
            log::warn!("Could not load font from {}: {err:?}", path.display());
            None
        }
    }
}

/// Load a texture, logging and returning `None` on failure
pub async fn load_sprite(path: &Path) -> Option<Texture2D> {
    match load_texture(&path.to_string_lossy()).await {
        Ok(texture) => {
            log::info!("Loaded texture {}", path.display());
            Some(texture)
        }
        Err(err) => {
            log::warn!("Could not load texture from {}: {err:?}", path.display());
            None
        }
    }
}

/// Visual assets for the match screen; anything missing falls back to defaults
#[derive(Default)]
pub struct Assets {
    pub font: Option<Font>,
}

impl Assets {
    pub async fn load(paths: &AssetPaths) -> Self {
        Self {
            font: load_font(&paths.font).await,
        }
    }
}

/// Draws the match into the macroquad window
pub struct ScreenRenderer {
    assets: Assets,
}

impl ScreenRenderer {
    pub fn new(assets: Assets) -> Self {
        Self { assets }
    }

    fn params(&self, font_size: u16, color: [u8; 4]) -> TextParams<'_> {
        TextParams {
            font: self.assets.font.as_ref(),
            font_size,
            color: rgba(color),
            ..Default::default()
        }
    }

    fn draw_paddle(paddle: &Paddle, color: [u8; 4]) {
        let bounds = paddle.bounds();
        draw_rectangle(
            bounds.min.x,
            bounds.min.y,
            paddle.size.x,
            paddle.size.y,
            rgba(color),
        );
    }

    /// Draw a multi-line block centered on `center`
    fn draw_block(&self, text: &str, center: glam::Vec2, font_size: u16, color: [u8; 4]) {
        let font = self.assets.font.as_ref();
        let lines: Vec<&str> = text.lines().collect();
        let widths: Vec<f32> = lines
            .iter()
            .map(|line| measure_text(line, font, font_size, 1.0).width)
            .collect();
        let line_height = font_size as f32 * 1.2;
        let origins = layout::centered_lines(center, &widths, line_height);
        for (line, origin) in lines.iter().zip(origins) {
            draw_text_ex(line, origin.x, origin.y, self.params(font_size, color));
        }
    }
}

impl Renderer for ScreenRenderer {
    fn render(&mut self, state: &MatchState) {
        let config = &state.config;
        clear_background(rgba(palette::BACKGROUND));

        let (pos, size) = layout::center_line(config);
        draw_rectangle(pos.x, pos.y, size.x, size.y, rgba(palette::CENTER_LINE));

        Self::draw_paddle(&state.left, palette::LEFT);
        Self::draw_paddle(&state.right, palette::RIGHT);
        draw_circle(
            state.ball.pos.x,
            state.ball.pos.y,
            state.ball.radius,
            rgba(palette::BALL),
        );

        for paddle in [&state.left, &state.right] {
            let anchor = layout::score_anchor(paddle.side, config);
            let text = state.score.get(paddle.side).to_string();
            // Anchor is the label's top-left; draw_text_ex wants the baseline
            let baseline = anchor.y + layout::SCORE_FONT_SIZE as f32;
            draw_text_ex(
                &text,
                anchor.x,
                baseline,
                self.params(layout::SCORE_FONT_SIZE, palette::SCORE),
            );
        }

        if state.shows_instructions() {
            self.draw_block(
                &layout::instructions_text(config.winning_score),
                layout::overlay_anchor(config),
                layout::INSTRUCTIONS_FONT_SIZE,
                palette::INSTRUCTIONS,
            );
        }

        if let Some(winner) = state.winner() {
            self.draw_block(
                &layout::win_text(winner),
                layout::win_anchor(config),
                layout::WIN_FONT_SIZE,
                layout::side_color(winner),
            );
            self.draw_block(
                layout::GAME_OVER_TEXT,
                layout::overlay_anchor(config),
                layout::GAME_OVER_FONT_SIZE,
                palette::GAME_OVER,
            );
        }
    }
}
