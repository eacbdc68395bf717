mod model_helpers;
mod models;
mod update;
mod consts;
mod bounds;
mod error;
mod level;
mod engine;

pub use models::{Vec2, Direction, UserAction, SharedGameState, GameState, GameUpdate, GameChangeType, Tile};
pub use consts::*;
pub use bounds::BoundsOriginRoot;
pub use error::{LevelError, LevelResult};
pub use level::{parse_level, parse_level_with, parse_rows, ParseOptions};
pub use engine::PuzzleEngine;
pub use update::step;
