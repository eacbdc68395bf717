use crate::core::{Direction, GameState, SharedGameState, Tile, UserAction, Vec2};

impl GameState {
    /// Won when there is at least one box and every box rests on a goal.
    pub fn is_won(&self, shared: &SharedGameState) -> bool {
        !self.boxes.is_empty() && self.boxes.is_subset(&shared.goals)
    }

    pub fn has_box(&self, pos: &Vec2) -> bool {
        self.boxes.contains(pos)
    }
}

impl SharedGameState {
    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn is_wall(&self, pos: &Vec2) -> bool {
        self.walls.contains(pos)
    }

    pub fn is_goal(&self, pos: &Vec2) -> bool {
        self.goals.contains(pos)
    }

    /// Walls and everything off the board stop both the player and boxes.
    pub fn is_blocked(&self, pos: &Vec2) -> bool {
        !self.bounds.contains(pos) || self.is_wall(pos)
    }

    pub fn count_boxes_on_goals(&self, game: &GameState) -> usize {
        game.boxes.intersection(&self.goals).count()
    }

    pub fn total_goals(&self) -> usize {
        self.goals.len()
    }

    pub fn tile_at(&self, game: &GameState, pos: &Vec2) -> Tile {
        Tile {
            wall: self.is_wall(pos),
            goal: self.is_goal(pos),
            boxed: game.has_box(pos),
            player: game.player == *pos,
        }
    }
}

impl Direction {
    pub fn offset(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

impl UserAction {
    pub fn all_moves() -> Vec<UserAction> {
        vec![
            UserAction::Move(Direction::Up),
            UserAction::Move(Direction::Down),
            UserAction::Move(Direction::Left),
            UserAction::Move(Direction::Right),
        ]
    }
}
