use tracing::{debug, info};

use crate::core::level::{parse_level, parse_rows, ParseOptions};
use crate::core::{
    step, Direction, GameChangeType, GameState, GameUpdate, LevelResult, SharedGameState, Tile,
    UserAction, Vec2, WIN_MESSAGE,
};

/// Owns one loaded level and every piece of state that changes while playing it.
///
/// The engine is either playing or won. Once won, moves are ignored until
/// [`PuzzleEngine::reset`] puts the level back the way it was loaded.
#[derive(Clone, Debug)]
pub struct PuzzleEngine {
    shared: SharedGameState,
    initial: GameState,
    current: GameState,
    won: bool,
}

impl PuzzleEngine {
    pub fn new(level: &str) -> LevelResult<PuzzleEngine> {
        let (game, shared) = parse_level(level)?;
        Ok(PuzzleEngine::from_parts(game, shared))
    }

    pub fn from_rows<S: AsRef<str>>(rows: &[S], options: ParseOptions) -> LevelResult<PuzzleEngine> {
        let (game, shared) = parse_rows(rows, options)?;
        Ok(PuzzleEngine::from_parts(game, shared))
    }

    pub fn from_parts(game: GameState, shared: SharedGameState) -> PuzzleEngine {
        info!(
            width = shared.width(),
            height = shared.height(),
            area = shared.bounds.area(),
            boxes = game.boxes.len(),
            goals = shared.total_goals(),
            "level loaded"
        );
        PuzzleEngine {
            shared,
            initial: game.clone(),
            current: game,
            won: false,
        }
    }

    /// (width, height)
    pub fn dimensions(&self) -> (i32, i32) {
        (self.shared.width(), self.shared.height())
    }

    pub fn shared(&self) -> &SharedGameState {
        &self.shared
    }

    pub fn state(&self) -> &GameState {
        &self.current
    }

    pub fn initial_state(&self) -> &GameState {
        &self.initial
    }

    pub fn player(&self) -> Vec2 {
        self.current.player
    }

    pub fn is_wall(&self, pos: &Vec2) -> bool {
        self.shared.is_wall(pos)
    }

    pub fn is_goal(&self, pos: &Vec2) -> bool {
        self.shared.is_goal(pos)
    }

    pub fn has_box(&self, pos: &Vec2) -> bool {
        self.current.has_box(pos)
    }

    pub fn has_player(&self, pos: &Vec2) -> bool {
        self.current.player == *pos
    }

    pub fn tile_at(&self, pos: &Vec2) -> Tile {
        self.shared.tile_at(&self.current, pos)
    }

    pub fn is_won(&self) -> bool {
        self.won
    }

    pub fn status_message(&self) -> &'static str {
        if self.won { WIN_MESSAGE } else { "" }
    }

    pub fn boxes_on_goals(&self) -> usize {
        self.shared.count_boxes_on_goals(&self.current)
    }

    pub fn apply(&mut self, action: UserAction) -> Option<GameChangeType> {
        match action {
            UserAction::Move(direction) => self.move_player(direction),
            UserAction::Reset => {
                self.reset();
                None
            }
        }
    }

    /// Try to walk one cell, pushing a box if one is in the way.
    ///
    /// Returns `None` when nothing moved: the way was blocked or the puzzle is already won.
    pub fn move_player(&mut self, direction: Direction) -> Option<GameChangeType> {
        if self.won {
            debug!(?direction, "move ignored, puzzle already won");
            return None;
        }

        match step(&self.shared, &self.current, UserAction::Move(direction)) {
            GameUpdate::NoChange => {
                debug!(?direction, player = ?self.current.player, "move blocked");
                None
            }
            GameUpdate::NextState(next, change) => {
                debug!(?direction, ?change, player = ?next.player, "move accepted");
                self.current = next;
                if self.current.is_won(&self.shared) {
                    info!("all boxes on goals");
                    self.won = true;
                }
                Some(change)
            }
        }
    }

    pub fn reset(&mut self) {
        info!(was_won = self.won, "level reset");
        self.current = self.initial.clone();
        self.won = false;
    }
}
