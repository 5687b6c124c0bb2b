//! Screen layout and overlay text
//!
//! Pure geometry so it can be checked without a window.

use glam::Vec2;

use crate::config::MatchConfig;
use crate::sim::Side;

pub const SCORE_FONT_SIZE: u16 = 50;
pub const WIN_FONT_SIZE: u16 = 50;
pub const GAME_OVER_FONT_SIZE: u16 = 40;
pub const INSTRUCTIONS_FONT_SIZE: u16 = 22;

pub const CENTER_LINE_WIDTH: f32 = 2.0;
/// Vertical offset of the score labels from the top edge
pub const SCORE_TOP: f32 = 50.0;

pub const GAME_OVER_TEXT: &str = "Game Over!\nPress R to restart or ESC to quit";

/// RGBA colors, 0-255
pub mod palette {
    pub const BACKGROUND: [u8; 4] = [0, 0, 0, 255];
    pub const CENTER_LINE: [u8; 4] = [100, 100, 100, 255];
    pub const LEFT: [u8; 4] = [0, 255, 255, 255];
    pub const RIGHT: [u8; 4] = [255, 0, 255, 255];
    pub const BALL: [u8; 4] = [255, 255, 255, 255];
    pub const SCORE: [u8; 4] = [200, 200, 200, 128];
    pub const GAME_OVER: [u8; 4] = [255, 0, 0, 255];
    pub const INSTRUCTIONS: [u8; 4] = [255, 255, 255, 255];
}

pub fn side_color(side: Side) -> [u8; 4] {
    match side {
        Side::Left => palette::LEFT,
        Side::Right => palette::RIGHT,
    }
}

pub fn instructions_text(winning_score: u32) -> String {
    format!(
        "Welcome to Pong!\nLeft Player: W/S keys | Right Player: Up/Down arrows\nFirst to {winning_score} wins!\nPress SPACE to start"
    )
}

pub fn win_text(winner: Side) -> String {
    format!("{} Player Wins!", winner.as_str())
}

/// Top-left corner and size of the center divider
pub fn center_line(config: &MatchConfig) -> (Vec2, Vec2) {
    (
        Vec2::new(config.arena_width / 2.0 - CENTER_LINE_WIDTH / 2.0, 0.0),
        Vec2::new(CENTER_LINE_WIDTH, config.arena_height),
    )
}

/// Top-left anchor of a side's score label (one and three quarters across)
pub fn score_anchor(side: Side, config: &MatchConfig) -> Vec2 {
    let x = match side {
        Side::Left => config.arena_width / 4.0,
        Side::Right => 3.0 * config.arena_width / 4.0,
    };
    Vec2::new(x, SCORE_TOP)
}

/// Center point of the winner banner
pub fn win_anchor(config: &MatchConfig) -> Vec2 {
    Vec2::new(config.arena_width / 2.0, config.arena_height / 3.0)
}

/// Center point of the instructions and game-over blocks
pub fn overlay_anchor(config: &MatchConfig) -> Vec2 {
    Vec2::new(config.arena_width / 2.0, config.arena_height / 2.0)
}

/// Baseline origins for each line of a text block centered on `center`.
/// `widths` are the measured line widths, `line_height` the advance per line.
pub fn centered_lines(center: Vec2, widths: &[f32], line_height: f32) -> Vec<Vec2> {
    let block_height = line_height * widths.len() as f32;
    let top = center.y - block_height / 2.0;
    widths
        .iter()
        .enumerate()
        .map(|(i, width)| Vec2::new(center.x - width / 2.0, top + line_height * (i as f32 + 1.0)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_texts() {
        assert_eq!(win_text(Side::Left), "Left Player Wins!");
        assert_eq!(win_text(Side::Right), "Right Player Wins!");
        assert!(instructions_text(5).contains("First to 5 wins!"));
        assert!(instructions_text(11).contains("First to 11 wins!"));
    }

    #[test]
    fn test_score_anchors() {
        let config = MatchConfig::default();
        assert_eq!(score_anchor(Side::Left, &config), Vec2::new(200.0, 50.0));
        assert_eq!(score_anchor(Side::Right, &config), Vec2::new(600.0, 50.0));
    }

    #[test]
    fn test_center_line_spans_height() {
        let config = MatchConfig::default();
        let (pos, size) = center_line(&config);
        assert_eq!(pos, Vec2::new(399.0, 0.0));
        assert_eq!(size, Vec2::new(2.0, 600.0));
    }

    #[test]
    fn test_centered_lines() {
        let lines = centered_lines(Vec2::new(400.0, 300.0), &[100.0, 200.0], 20.0);
        assert_eq!(lines, vec![Vec2::new(350.0, 300.0), Vec2::new(300.0, 320.0)]);
    }
}
