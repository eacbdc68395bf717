use std::collections::BTreeSet;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::core::bounds::BoundsOriginRoot;

/// A grid position, `i` is the row and `j` is the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

impl Vec2 {
    pub const fn new(i: i32, j: i32) -> Vec2 {
        Vec2 { i, j }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
    Reset,
}

/// Everything about a level that never changes after it is loaded.
#[derive(Clone, Debug)]
pub struct SharedGameState {
    pub bounds: BoundsOriginRoot,
    pub walls: BTreeSet<Vec2>,
    pub goals: BTreeSet<Vec2>,
}

/// The part of a level that moves.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    pub boxes: BTreeSet<Vec2>,
    pub player: Vec2,
}

#[derive(Debug)]
pub enum GameUpdate {
    NextState(GameState, GameChangeType),
    NoChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

/// How a single cell should be drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub wall: bool,
    pub goal: bool,
    #[serde(rename = "box")]
    pub boxed: bool,
    pub player: bool,
}
