#[cfg(test)]
mod test {
    use crate::core::*;
    use crate::test::test_util::{assert_symbols_match, GameTestState};

    #[test]
    fn parse_reads_every_symbol() {
        let (game, shared) = parse_level(r#"
#######
#@$.* #
#######
"#).unwrap();

        assert_eq!(shared.bounds, BoundsOriginRoot::new(3, 7));
        assert_eq!(game.player, Vec2::new(1, 1));
        assert!(game.has_box(&Vec2::new(1, 2)));
        assert!(game.has_box(&Vec2::new(1, 4)));
        assert_eq!(game.boxes.len(), 2);
        assert!(shared.is_goal(&Vec2::new(1, 3)));
        assert!(shared.is_goal(&Vec2::new(1, 4)));
        assert_eq!(shared.total_goals(), 2);
        assert_eq!(shared.walls.len(), 7 + 7 + 2);
        assert!(!shared.is_wall(&Vec2::new(1, 5)));
    }

    #[test]
    fn player_on_goal_adds_goal() {
        let (game, shared) = parse_level("#+$#").unwrap();

        assert_eq!(game.player, Vec2::new(0, 1));
        assert!(shared.is_goal(&Vec2::new(0, 1)));
        assert!(!game.has_box(&Vec2::new(0, 1)));
    }

    #[test]
    fn rows_are_zero_indexed_row_then_column() {
        let rows = ["#####", "#   #", "# @ #", "#####"];
        let (game, shared) = parse_rows(&rows, ParseOptions::default()).unwrap();

        assert_eq!(game.player, Vec2 { i: 2, j: 2 });
        assert_eq!(shared.height(), 4);
        assert_eq!(shared.width(), 5);
    }

    #[test]
    fn walls_render_where_parsed() {
        let game = GameTestState::new(" ### \n#   #\n# @ #\n ### ");
        let walls = game.render_symbols(|pos| if game.engine.is_wall(pos) { '#' } else { '_' });
        assert_symbols_match(r#"
_###_
#___#
#___#
_###_
"#, &walls);
    }

    #[test]
    fn missing_player_is_rejected() {
        assert_eq!(parse_level("#$.#").unwrap_err(), LevelError::MissingPlayer);
    }

    #[test]
    fn second_player_is_rejected() {
        let err = parse_level(r#"
#@ #
# +#
"#).unwrap_err();

        assert_eq!(err, LevelError::MultiplePlayers {
            first: Vec2::new(0, 1),
            second: Vec2::new(1, 2),
        });
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = parse_level("#@x#").unwrap_err();

        assert_eq!(err, LevelError::UnknownSymbol { symbol: 'x', row: 0, column: 2 });
    }

    #[test]
    fn empty_level_is_rejected() {
        assert_eq!(parse_level("").unwrap_err(), LevelError::Empty);
        assert_eq!(parse_level("\n\n\n").unwrap_err(), LevelError::Empty);
        assert_eq!(parse_level("\n   \n\n").unwrap_err(), LevelError::MissingPlayer);
        let no_rows: [&str; 0] = [];
        assert_eq!(parse_rows(&no_rows, ParseOptions::default()).unwrap_err(), LevelError::Empty);
    }

    #[test]
    fn ragged_rows_are_rejected_by_default() {
        let err = parse_level(r#"
#####
#@$.#
####
"#).unwrap_err();

        assert_eq!(err, LevelError::RaggedRow { row: 2, expected: 5, found: 4 });
    }

    #[test]
    fn ragged_rows_are_padded_with_floor_when_asked() {
        let options = ParseOptions { pad_ragged_rows: true };
        let (game, shared) = parse_level_with(r#"
####
#@$ .#
####
"#, options).unwrap();

        assert_eq!(shared.width(), 6);
        assert!(shared.bounds.contains(&Vec2::new(0, 5)));
        assert!(!shared.is_wall(&Vec2::new(0, 5)));
        assert_eq!(game.player, Vec2::new(1, 1));
    }

    #[test]
    fn floor_rows_at_the_edges_are_kept() {
        let (text_game, text_shared) = parse_level("   \n @$\n   ").unwrap();
        let (rows_game, rows_shared) = parse_rows(&["   ", " @$", "   "], ParseOptions::default()).unwrap();

        assert_eq!(text_shared.height(), 3);
        assert_eq!(text_shared.bounds, rows_shared.bounds);
        assert_eq!(text_game, rows_game);
        assert_eq!(text_game.player, Vec2::new(1, 1));

        let mut game = GameTestState::new("   \n @$\n   ");
        game.assert_move(Direction::Up);
        game.assert_matches(" @ \n  $\n   ");
    }

    #[test]
    fn windows_line_endings_are_accepted() {
        let (game, shared) = parse_level("###\r\n#@#\r\n###\r\n").unwrap();

        assert_eq!(shared.width(), 3);
        assert_eq!(game.player, Vec2::new(1, 1));
    }

    #[test]
    fn errors_describe_the_problem() {
        let err = LevelError::RaggedRow { row: 3, expected: 10, found: 8 };
        assert_eq!(err.to_string(), "Row 3 is 8 tiles wide but the level is 10 tiles wide.");
    }
}
