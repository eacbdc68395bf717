use crate::core::{GameChangeType, GameState};

pub struct GameRenderState {
    pub game: GameState,
    pub won: bool,
    pub status: &'static str,
    pub boxes_on_goals: usize,
    pub total_goals: usize,
    pub last_change: Option<GameChangeType>,
}
