//! HUD text, formatted once per frame from the game state.

use crate::entities::GameState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HudText {
    pub score: String,
    pub lives: String,
    pub round: String,
    pub high_score: String,
}

impl HudText {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: format!("SCORE: {}", state.score),
            lives: format!("LIVES: {}", state.lives),
            round: format!("ROUND {}", state.round),
            high_score: format!("HI: {}", state.high_score),
        }
    }
}
