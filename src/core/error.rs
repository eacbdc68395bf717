use crate::core::models::Vec2;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("Level has no rows.")]
    Empty,
    #[error("Row {row} is {found} tiles wide but the level is {expected} tiles wide.")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unknown symbol {symbol:?} at row {row}, column {column}.")]
    UnknownSymbol {
        symbol: char,
        row: usize,
        column: usize,
    },
    #[error("Level has no player, expected exactly one '@' or '+'.")]
    MissingPlayer,
    #[error("Level has more than one player: found at {first:?} and {second:?}.")]
    MultiplePlayers { first: Vec2, second: Vec2 },
}

pub type LevelResult<T> = std::result::Result<T, LevelError>;
