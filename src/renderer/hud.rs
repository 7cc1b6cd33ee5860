//! Score overlay text and placement

use glam::Vec2;

use super::vertex::colors;
use crate::consts::SCREEN_WIDTH;
use crate::sim::SceneSnapshot;

/// Top-left corner of the score readout
pub const SCORE_POS: Vec2 = Vec2::new(50.0, 10.0);
/// Top-left corner of the high score readout
pub const HIGH_SCORE_POS: Vec2 = Vec2::new(SCREEN_WIDTH - 150.0, 10.0);

/// Scores are shown as six zero-padded digits
pub fn format_score(score: u32) -> String {
    format!("{:06}", score)
}

/// One line of overlay text
#[derive(Debug, Clone, PartialEq)]
pub struct HudLabel {
    pub pos: Vec2,
    pub text: String,
    pub color: [f32; 4],
}

pub fn hud_labels(snapshot: &SceneSnapshot) -> [HudLabel; 2] {
    [
        HudLabel {
            pos: SCORE_POS,
            text: format_score(snapshot.score),
            color: colors::TEXT,
        },
        HudLabel {
            pos: HIGH_SCORE_POS,
            text: format_score(snapshot.high_score),
            color: colors::TEXT,
        },
    ]
}
