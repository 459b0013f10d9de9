//! HUD text
//!
//! Score line and crash banner, computed from session state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::platform::Color;

pub const GAME_OVER_TEXT: &str = "CRASH! GAME OVER";

/// Top-left corner, in the host's normalized screen units
pub const SCORE_POSITION: Vec2 = Vec2::new(-0.8, 0.45);

/// A line of text for the host to draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudText {
    pub text: String,
    pub position: Vec2,
    /// True to center the text on `position`
    pub centered: bool,
    pub scale: f32,
    pub color: Color,
}

/// Whole seconds survived, truncated
pub fn score_text(score: f32) -> String {
    format!("Score: {}", score.max(0.0) as u32)
}

pub fn score_line(score: f32) -> HudText {
    HudText {
        text: score_text(score),
        position: SCORE_POSITION,
        centered: false,
        scale: 1.0,
        color: Color::White,
    }
}

pub fn game_over_banner() -> HudText {
    HudText {
        text: GAME_OVER_TEXT.to_string(),
        position: Vec2::ZERO,
        centered: true,
        scale: 2.0,
        color: Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_truncates() {
        assert_eq!(score_text(0.0), "Score: 0");
        assert_eq!(score_text(0.99), "Score: 0");
        assert_eq!(score_text(12.7), "Score: 12");
    }

    #[test]
    fn test_banner() {
        let banner = game_over_banner();
        assert_eq!(banner.text, "CRASH! GAME OVER");
        assert!(banner.centered);
        assert_eq!(banner.color, Color::Red);
    }
}
