use serde::{Deserialize, Serialize};

use crate::core::{PuzzleEngine, Tile, Vec2};

/// Read-only view of a board for renderers that live outside this crate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoardSnapshot {
    pub width: i32,
    pub height: i32,
    pub tiles: Vec<Vec<Tile>>,
    pub player: Vec2,
    pub won: bool,
    pub status: String,
}

impl BoardSnapshot {
    pub fn from_engine(engine: &PuzzleEngine) -> BoardSnapshot {
        let (width, height) = engine.dimensions();
        let tiles = (0..height)
            .map(|i| (0..width).map(|j| engine.tile_at(&Vec2 { i, j })).collect())
            .collect();

        BoardSnapshot {
            width,
            height,
            tiles,
            player: engine.player(),
            won: engine.is_won(),
            status: engine.status_message().to_string(),
        }
    }
}

pub fn get_json_data(engine: &PuzzleEngine) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&BoardSnapshot::from_engine(engine))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn snapshot_classifies_every_tile() {
        let engine = PuzzleEngine::new(r#"
#####
#@$.#
#####
"#).unwrap();
        let snapshot = BoardSnapshot::from_engine(&engine);

        assert_eq!((snapshot.width, snapshot.height), (5, 3));
        assert_eq!(snapshot.tiles.len(), 3);
        assert!(snapshot.tiles.iter().all(|row| row.len() == 5));
        assert!(snapshot.tiles[0][0].wall);
        assert!(snapshot.tiles[1][1].player);
        assert!(snapshot.tiles[1][2].boxed);
        assert!(snapshot.tiles[1][3].goal);
        assert!(!snapshot.tiles[1][3].boxed);
        assert_eq!(snapshot.player, Vec2::new(1, 1));
        assert!(!snapshot.won);
        assert_eq!(snapshot.status, "");
    }

    #[test]
    fn json_carries_win_status() {
        let mut engine = PuzzleEngine::new(r#"
#####
#@$.#
#####
"#).unwrap();
        engine.move_player(Direction::Right);

        let json = get_json_data(&engine).unwrap();
        let parsed: BoardSnapshot = serde_json::from_str(&json).unwrap();

        assert!(parsed.won);
        assert_eq!(parsed.status, "You win! Great job!");
        assert!(parsed.tiles[1][3].boxed && parsed.tiles[1][3].goal);
        assert!(json.contains("\"box\": true"));
    }
}
