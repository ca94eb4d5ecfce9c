#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::{
        board::{Board, Color, Game, GameState, Snapshot},
        heuristic::{center_control, evaluate, line_potential, window_score, Direction},
        ordering::order_moves,
        player::{MinimaxPlayer, Player, SearchConfig},
        search::{Search, Side},
        EngineError,
    };

    const POSITIONS: [&str; 7] = ["", "45", "4455", "445566", "3456435", "1122334", "54637281"];

    fn board_with(size: usize, tiles: &[(usize, Color)]) -> Result<Board> {
        let mut board = Board::new(size)?;
        for &(column, color) in tiles {
            board = board.play(column, color);
        }
        Ok(board)
    }

    fn to_move(board: &Board) -> Color {
        if board.num_moves() % 2 == 0 {
            Color::PlayerOne
        } else {
            Color::PlayerTwo
        }
    }

    // root choice of an unpruned, unordered search
    fn minimax_choice(board: &Board, color: Color, depth: u32) -> Option<usize> {
        let mut search = Search::new(color, false);
        let mut best: Option<(usize, i32)> = None;
        for column in (0..board.size()).filter(|&c| board.playable(c)) {
            let score = search.minimax(&board.play(column, color), depth - 1, Side::Minimizing);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((column, score));
            }
        }
        best.map(|(column, _)| column)
    }

    #[test]
    pub fn open_three_scores_one_hundred() -> Result<()> {
        let board = board_with(
            8,
            &[(0, Color::PlayerOne), (1, Color::PlayerOne), (2, Color::PlayerOne)],
        )?;

        assert_eq!(window_score(&board, 0, 0, Direction::Horizontal, Color::PlayerOne), 100);
        // the window starting at the second tile still has room for a four
        assert_eq!(window_score(&board, 0, 1, Direction::Horizontal, Color::PlayerOne), 10);
        assert_eq!(window_score(&board, 0, 0, Direction::Vertical, Color::PlayerOne), 1);
        Ok(())
    }

    #[test]
    pub fn blocked_windows_score_nothing() -> Result<()> {
        let board = board_with(
            8,
            &[
                (0, Color::PlayerOne),
                (1, Color::PlayerOne),
                (2, Color::PlayerOne),
                (3, Color::PlayerTwo),
                (6, Color::PlayerOne),
            ],
        )?;

        // opposing tile inside the window
        assert_eq!(window_score(&board, 0, 0, Direction::Horizontal, Color::PlayerOne), 0);
        // edge of the board inside the window
        assert_eq!(window_score(&board, 0, 6, Direction::Horizontal, Color::PlayerOne), 0);
        assert_eq!(window_score(&board, 0, 6, Direction::Diagonal, Color::PlayerOne), 0);
        assert_eq!(window_score(&board, 0, 6, Direction::AntiDiagonal, Color::PlayerOne), 1);
        Ok(())
    }

    #[test]
    pub fn complete_line_scores_one_thousand() -> Result<()> {
        let board = Board::from_moves(8, "1212121")?;

        assert_eq!(window_score(&board, 0, 0, Direction::Vertical, Color::PlayerOne), 1000);
        assert_eq!(window_score(&board, 0, 1, Direction::Vertical, Color::PlayerTwo), 100);
        Ok(())
    }

    #[test]
    pub fn empty_board_is_level() -> Result<()> {
        let board = Board::new(8)?;
        assert_eq!(evaluate(&board, Color::PlayerOne), 0);
        assert_eq!(evaluate(&board, Color::PlayerTwo), 0);
        Ok(())
    }

    #[test]
    pub fn line_potential_is_antisymmetric() -> Result<()> {
        for moves in POSITIONS.iter() {
            let board = Board::from_moves(8, moves)?;
            let one = evaluate(&board, Color::PlayerOne) - center_control(&board, Color::PlayerOne);
            let two = evaluate(&board, Color::PlayerTwo) - center_control(&board, Color::PlayerTwo);
            assert_eq!(one, -two, "position {}", moves);
            assert_eq!(
                one,
                line_potential(&board, Color::PlayerOne) - line_potential(&board, Color::PlayerTwo)
            );
        }
        Ok(())
    }

    #[test]
    pub fn center_bonus_rewards_only_the_perspective() -> Result<()> {
        // a single tile in the centre column of an 8x8 board
        let board = Board::from_moves(8, "5")?;

        assert_eq!(evaluate(&board, Color::PlayerOne), 14);
        assert_eq!(evaluate(&board, Color::PlayerTwo), -4);
        assert_ne!(
            evaluate(&board, Color::PlayerOne) + evaluate(&board, Color::PlayerTwo),
            0
        );
        Ok(())
    }

    #[test]
    pub fn empty_board_plays_the_centre() -> Result<()> {
        for &(size, centre) in [(8, 4), (7, 3), (4, 2)].iter() {
            let mut player = MinimaxPlayer::new(1)?;
            assert_eq!(player.select_move(&Board::new(size)?, Color::PlayerOne)?, centre);
            assert_eq!(player.select_move(&Board::new(size)?, Color::PlayerTwo)?, centre);
        }
        Ok(())
    }

    #[test]
    pub fn takes_a_win_in_one() -> Result<()> {
        let board = board_with(
            8,
            &[
                (0, Color::PlayerOne),
                (7, Color::PlayerTwo),
                (1, Color::PlayerOne),
                (7, Color::PlayerTwo),
                (2, Color::PlayerOne),
                (6, Color::PlayerTwo),
            ],
        )?;

        for depth in 1..=3 {
            let mut player = MinimaxPlayer::new(depth)?;
            assert_eq!(player.select_move(&board, Color::PlayerOne)?, 3, "depth {}", depth);
        }
        Ok(())
    }

    #[test]
    pub fn ties_go_to_the_lowest_column() -> Result<()> {
        // too small for any line, and the centre belongs to the opponent
        let board = board_with(
            3,
            &[(1, Color::PlayerTwo), (1, Color::PlayerTwo), (1, Color::PlayerTwo)],
        )?;

        for depth in 1..=3 {
            for &ordering in [true, false].iter() {
                let config = SearchConfig::new(depth)?.with_move_ordering(ordering);
                let mut player = MinimaxPlayer::with_config(config);
                assert_eq!(player.select_move(&board, Color::PlayerOne)?, 0);
            }
        }
        Ok(())
    }

    #[test]
    pub fn full_board_is_a_leaf_at_any_depth() -> Result<()> {
        let board = Board::from_moves(4, "1111222233334444")?;
        assert!(!board.has_moves());

        for &color in [Color::PlayerOne, Color::PlayerTwo].iter() {
            for depth in 0..6 {
                for &side in [Side::Maximizing, Side::Minimizing].iter() {
                    let mut search = Search::new(color, true);
                    let score = search.alpha_beta(&board, depth, side, i32::MIN, i32::MAX);
                    assert_eq!(score, evaluate(&board, color));
                    assert_eq!(search.stats().leaf_evaluations, 1);
                }
            }
        }
        Ok(())
    }

    #[test]
    pub fn full_board_has_no_move() -> Result<()> {
        let board = Board::from_moves(4, "1111222233334444")?;
        let mut player = MinimaxPlayer::new(3)?;

        assert_eq!(
            player.select_move(&board, Color::PlayerOne),
            Err(EngineError::NoLegalMoves)
        );
        Ok(())
    }

    #[test]
    pub fn rejects_non_positive_depth() {
        assert_eq!(
            MinimaxPlayer::new(0).err(),
            Some(EngineError::InvalidConfiguration { depth: 0 })
        );
        assert_eq!(
            SearchConfig::new(-3).err(),
            Some(EngineError::InvalidConfiguration { depth: -3 })
        );
        assert_eq!(SearchConfig::new(1).map(|config| config.depth()), Ok(1));
    }

    #[test]
    pub fn ordering_never_changes_the_choice() -> Result<()> {
        for moves in POSITIONS.iter() {
            let board = Board::from_moves(8, moves)?;
            let color = to_move(&board);

            for depth in 1..=4 {
                let mut ordered = MinimaxPlayer::with_config(SearchConfig::new(depth)?);
                let mut unordered =
                    MinimaxPlayer::with_config(SearchConfig::new(depth)?.with_move_ordering(false));

                let choice = ordered.select_move(&board, color)?;
                assert_eq!(choice, unordered.select_move(&board, color)?, "{} @ {}", moves, depth);
                assert_eq!(Some(choice), minimax_choice(&board, color, depth as u32));

                // root moves are searched with a full window, so their scores are exact
                assert_eq!(
                    ordered.evaluate_root_moves(&board, color),
                    unordered.evaluate_root_moves(&board, color)
                );
            }
        }
        Ok(())
    }

    #[test]
    pub fn ordering_sorts_for_the_side_to_move() -> Result<()> {
        for moves in POSITIONS.iter() {
            let board = Board::from_moves(8, moves)?;
            let color = to_move(&board);

            for &side in [Side::Maximizing, Side::Minimizing].iter() {
                let mover = side.mover(color);
                let scored: Vec<(usize, i32)> = order_moves(&board, color, side)
                    .map(|column| (column, evaluate(&board.play(column, mover), color)))
                    .collect();
                assert_eq!(scored.len(), 8);

                for pair in scored.windows(2) {
                    let ((c1, s1), (c2, s2)) = (pair[0], pair[1]);
                    match side {
                        Side::Maximizing => assert!(s1 >= s2),
                        Side::Minimizing => assert!(s1 <= s2),
                    }
                    if s1 == s2 {
                        assert!(c1 < c2);
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    pub fn pruning_visits_fewer_leaves() -> Result<()> {
        let board = Board::new(8)?;
        let mut player = MinimaxPlayer::new(4)?;
        player.select_move(&board, Color::PlayerOne)?;

        let mut search = Search::new(Color::PlayerOne, false);
        for column in 0..8 {
            search.minimax(&board.play(column, Color::PlayerOne), 3, Side::Minimizing);
        }
        assert_eq!(search.stats().leaf_evaluations, 8 * 8 * 8 * 8);
        assert!(player.last_stats().leaf_evaluations < search.stats().leaf_evaluations);
        Ok(())
    }

    #[test]
    pub fn counters_reset_per_decision() -> Result<()> {
        let board = Board::new(8)?;
        let mut player = MinimaxPlayer::new(1)?;

        player.select_move(&board, Color::PlayerOne)?;
        let first = player.last_stats();
        assert_eq!(first.leaf_evaluations, 8);
        assert_eq!(first.ordering_evaluations, 0);
        assert_eq!(first.nodes, 8);

        player.select_move(&board, Color::PlayerOne)?;
        assert_eq!(player.last_stats(), first);

        let mut deeper = MinimaxPlayer::new(2)?;
        deeper.select_move(&board, Color::PlayerOne)?;
        assert_eq!(deeper.last_stats().ordering_evaluations, 8 * 8);
        Ok(())
    }

    #[test]
    pub fn search_leaves_the_board_untouched() -> Result<()> {
        let board = Board::from_moves(8, "3456435")?;
        let before = board.clone();

        MinimaxPlayer::new(3)?.select_move(&board, Color::PlayerTwo)?;
        assert_eq!(board, before);

        let child = board.play(0, Color::PlayerOne);
        assert_eq!(board, before);
        assert_eq!(child.num_moves(), board.num_moves() + 1);
        Ok(())
    }

    #[test]
    #[should_panic]
    pub fn playing_a_full_column_panics() {
        let board = Board::from_moves(4, "1111").unwrap();
        board.play(0, Color::PlayerOne);
    }

    #[test]
    pub fn move_strings_are_validated() {
        assert_eq!(Board::from_moves(4, "11111").err(), Some(EngineError::ColumnFull(1)));
        assert_eq!(
            Board::from_moves(8, "129").err(),
            Some(EngineError::ColumnOutOfRange { column: 9, size: 8 })
        );
        assert_eq!(Board::from_moves(8, "1x").err(), Some(EngineError::InvalidMove('x')));
        assert_eq!(Board::from_moves(8, "0").err(), Some(EngineError::InvalidMove('0')));
        assert_eq!(Board::new(0).err(), Some(EngineError::InvalidSize(0)));
        assert_eq!(Board::new(17).err(), Some(EngineError::InvalidSize(17)));
        assert!(Board::from_moves(12, "ab").is_ok());
    }

    #[test]
    pub fn game_detects_wins_and_draws() -> Result<()> {
        let mut game = Game::new(8)?;
        for &column in [1, 2, 1, 2, 1, 2].iter() {
            assert_eq!(game.play_checked(column)?, GameState::Playing);
        }
        assert_eq!(game.play_checked(1)?, GameState::PlayerOneWin);
        assert_eq!(game.play_checked(3), Err(EngineError::GameOver));
        assert_eq!(game.moves, "1212121");

        let mut game = Game::new(8)?;
        for &column in [1, 1, 2, 2, 3, 3].iter() {
            game.play_checked(column)?;
        }
        assert_eq!(game.play_checked(5)?, GameState::Playing);
        assert_eq!(game.play_checked(4)?, GameState::Playing);
        assert_eq!(game.play_checked(9), Err(EngineError::ColumnOutOfRange { column: 9, size: 8 }));

        let mut game = Game::new(1)?;
        assert_eq!(game.play_checked(1)?, GameState::Draw);
        Ok(())
    }

    #[test]
    pub fn diagonal_lines_connect() -> Result<()> {
        // . . . O
        // . . O X
        // . O X X
        // O X X X
        let (one, two) = (Color::PlayerOne, Color::PlayerTwo);
        let board = board_with(
            8,
            &[
                (0, one),
                (1, two),
                (1, one),
                (2, two),
                (2, two),
                (2, one),
                (3, two),
                (3, two),
                (3, two),
                (3, one),
            ],
        )?;
        assert!(board.connects(3, 3));
        assert!(board.connects(0, 0));
        assert!(!board.connects(0, 1));
        Ok(())
    }
}
