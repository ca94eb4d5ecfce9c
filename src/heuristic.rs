//! Static evaluation of a position
//!
//! A position is scored from a fixed perspective colour: every tile of that
//! colour adds the potential of the lines starting at it, every tile of the
//! opponent subtracts the potential of its own lines, and tiles in the
//! centre column earn a flat bonus for the perspective colour only.

use crate::{
    board::{Color, Snapshot},
    CONNECT,
};

/// Score of a complete line of four
pub const FOUR_SCORE: i32 = 1000;
/// Score of an open line of three
pub const THREE_SCORE: i32 = 100;
/// Score of an open line of two
pub const TWO_SCORE: i32 = 10;
/// Score of a single tile with room to grow
pub const ONE_SCORE: i32 = 1;
/// Bonus per perspective tile in the centre column
pub const CENTER_BONUS: i32 = 10;

/// The four scanning directions as (row, column) steps
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Vertical,
    Horizontal,
    Diagonal,
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    fn step(self) -> (i32, i32) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Scores `board` for `perspective`, higher is better
pub fn evaluate<S: Snapshot>(board: &S, perspective: Color) -> i32 {
    line_potential(board, perspective) - line_potential(board, perspective.opponent())
        + center_control(board, perspective)
}

/// The summed window scores of every tile of `color`
pub fn line_potential<S: Snapshot>(board: &S, color: Color) -> i32 {
    let size = board.size();
    let mut score = 0;
    for row in 0..size {
        for column in 0..size {
            if board.cell(row, column).holds(color) {
                score += Direction::ALL
                    .iter()
                    .map(|&direction| window_score(board, row, column, direction, color))
                    .sum::<i32>();
            }
        }
    }
    score
}

/// Scores the window of four cells starting at (`row`, `column`)
///
/// The scan stops at the first opposing tile or at the edge of the board,
/// so a window that is blocked before reaching four cells scores nothing.
pub fn window_score<S: Snapshot>(
    board: &S,
    row: usize,
    column: usize,
    direction: Direction,
    color: Color,
) -> i32 {
    let size = board.size() as i32;
    let (d_row, d_column) = direction.step();
    let (mut count, mut empties) = (0, 0);

    for i in 0..CONNECT as i32 {
        let r = row as i32 + i * d_row;
        let c = column as i32 + i * d_column;
        if r < 0 || c < 0 || r >= size || c >= size {
            break;
        }
        let cell = board.cell(r as usize, c as usize);
        if cell.holds(color) {
            count += 1;
        } else if cell.is_empty() {
            empties += 1;
        } else {
            break;
        }
    }

    if count + empties < CONNECT {
        return 0;
    }
    match (count, empties > 0) {
        (4, _) => FOUR_SCORE,
        (3, true) => THREE_SCORE,
        (2, true) => TWO_SCORE,
        (1, true) => ONE_SCORE,
        _ => 0,
    }
}

/// Bonus for the tiles of `color` in the centre column
///
/// Only the perspective colour is rewarded; the opponent's centre tiles
/// already count against it through their line potential.
pub fn center_control<S: Snapshot>(board: &S, color: Color) -> i32 {
    let center = board.size() / 2;
    (0..board.size())
        .filter(|&row| board.cell(row, center).holds(color))
        .count() as i32
        * CENTER_BONUS
}
