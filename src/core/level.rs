use std::collections::BTreeSet;

use crate::core::bounds::BoundsOriginRoot;
use crate::core::error::{LevelError, LevelResult};
use crate::core::models::{GameState, SharedGameState, Vec2};

#[derive(Clone, Copy, Debug, Default)]
pub struct ParseOptions {
    /// Pad short rows with floor up to the widest row instead of rejecting them
    pub pad_ragged_rows: bool,
}

/// Parse a level written as a block of text, one row per line.
///
/// Empty lines before the first row and after the last row are skipped, so a raw
/// string literal starting and ending on its own line can be used directly. A row
/// of spaces is floor and is kept.
pub fn parse_level(s: &str) -> LevelResult<(GameState, SharedGameState)> {
    parse_level_with(s, ParseOptions::default())
}

pub fn parse_level_with(s: &str, options: ParseOptions) -> LevelResult<(GameState, SharedGameState)> {
    let lines: Vec<&str> = s.lines().map(|line| line.trim_end_matches('\r')).collect();
    let first = lines.iter().position(|line| !line.is_empty());
    let last = lines.iter().rposition(|line| !line.is_empty());
    let rows = match (first, last) {
        (Some(first), Some(last)) => &lines[first..=last],
        _ => return Err(LevelError::Empty),
    };
    parse_rows(rows, options)
}

/// Convert rows of tile symbols into the static and dynamic halves of a level.
///
/// `#` wall, `.` goal, `$` box, `*` box on goal, `@` player, `+` player on goal, ` ` floor.
pub fn parse_rows<S: AsRef<str>>(
    rows: &[S],
    options: ParseOptions,
) -> LevelResult<(GameState, SharedGameState)> {
    if rows.is_empty() {
        return Err(LevelError::Empty);
    }

    let widths: Vec<usize> = rows.iter().map(|row| row.as_ref().chars().count()).collect();
    let width = widths.iter().copied().max().unwrap_or(0);
    if width == 0 {
        return Err(LevelError::Empty);
    }
    if !options.pad_ragged_rows {
        let expected = widths[0];
        if let Some((row, &found)) = widths.iter().enumerate().find(|&(_, &w)| w != expected) {
            return Err(LevelError::RaggedRow { row, expected, found });
        }
    }

    let mut walls = BTreeSet::new();
    let mut goals = BTreeSet::new();
    let mut boxes = BTreeSet::new();
    let mut player: Option<Vec2> = None;

    for (i, row) in rows.iter().enumerate() {
        for (j, ch) in row.as_ref().chars().enumerate() {
            let pos = Vec2 { i: i as i32, j: j as i32 };
            let places_player = match ch {
                '#' => {
                    walls.insert(pos);
                    false
                }
                '.' => {
                    goals.insert(pos);
                    false
                }
                '$' => {
                    boxes.insert(pos);
                    false
                }
                '*' => {
                    boxes.insert(pos);
                    goals.insert(pos);
                    false
                }
                '@' => true,
                '+' => {
                    goals.insert(pos);
                    true
                }
                ' ' => false,
                symbol => {
                    return Err(LevelError::UnknownSymbol { symbol, row: i, column: j });
                }
            };

            if places_player {
                if let Some(first) = player {
                    return Err(LevelError::MultiplePlayers { first, second: pos });
                }
                player = Some(pos);
            }
        }
    }

    let player = player.ok_or(LevelError::MissingPlayer)?;

    Ok((
        GameState { boxes, player },
        SharedGameState {
            bounds: BoundsOriginRoot::new(rows.len() as i32, width as i32),
            walls,
            goals,
        },
    ))
}
