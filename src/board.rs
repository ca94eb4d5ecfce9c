use crate::{EngineError, CONNECT, MAX_SIZE, MIN_SIZE};

/// The colour of a player's tiles
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Color {
    PlayerOne,
    PlayerTwo,
}

impl Color {
    /// The colour of the other player
    pub fn opponent(self) -> Self {
        match self {
            Color::PlayerOne => Color::PlayerTwo,
            Color::PlayerTwo => Color::PlayerOne,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn holds(&self, color: Color) -> bool {
        *self == Cell::from(color)
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::PlayerOne => Cell::PlayerOne,
            Color::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

/// An immutable view of a square board, as consumed by the search
///
/// Implementations are trusted: the search never validates cell contents,
/// and only calls [`Snapshot::play`] on columns reported as playable.
pub trait Snapshot: Sized {
    /// The number of rows and columns
    fn size(&self) -> usize;

    /// The occupant of a cell, row 0 being the bottom of the board
    fn cell(&self, row: usize, column: usize) -> Cell;

    /// Whether a tile can still be dropped into `column`
    fn playable(&self, column: usize) -> bool;

    /// Whether any column can still be played
    fn has_moves(&self) -> bool {
        (0..self.size()).any(|column| self.playable(column))
    }

    /// Returns a new snapshot with a tile of `color` dropped into `column`,
    /// leaving `self` untouched
    fn play(&self, column: usize, color: Color) -> Self;
}

/// A square Connect 4 grid
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>, // cells are stored left-to-right, bottom-to-top
    heights: Vec<usize>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self, EngineError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(EngineError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
            heights: vec![0; size],
        })
    }

    /// Builds a board from a string of 1-indexed columns, alternating
    /// colours starting with [`Color::PlayerOne`]
    ///
    /// Columns above 9 are written as letters (`a` is column 10).
    pub fn from_moves<S: AsRef<str>>(size: usize, moves: S) -> Result<Self, EngineError> {
        let mut board = Self::new(size)?;
        let mut color = Color::PlayerOne;

        for column_char in moves.as_ref().chars() {
            let column = parse_column(column_char, size)?;
            board.drop_tile(column, color)?;
            color = color.opponent();
        }
        Ok(board)
    }

    /// The number of tiles in `column`
    pub fn height(&self, column: usize) -> usize {
        self.heights[column]
    }

    /// The number of tiles on the board
    pub fn num_moves(&self) -> usize {
        self.heights.iter().sum()
    }

    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&height| height == self.size)
    }

    /// Drops a tile in place, checking that the column exists and is not full
    pub fn drop_tile(&mut self, column: usize, color: Color) -> Result<usize, EngineError> {
        if column >= self.size {
            return Err(EngineError::ColumnOutOfRange {
                column: column + 1,
                size: self.size,
            });
        }
        if !self.playable(column) {
            return Err(EngineError::ColumnFull(column + 1));
        }
        let row = self.heights[column];
        self.cells[column + self.size * row] = Cell::from(color);
        self.heights[column] += 1;
        Ok(row)
    }

    /// Whether the tile at (`row`, `column`) is part of a line of four of its colour
    pub fn connects(&self, row: usize, column: usize) -> bool {
        let player = self.cell(row, column);
        if player.is_empty() {
            return false;
        }

        // vertical, horizontal and both diagonals, walking both ways from the tile
        for &(d_row, d_column) in [(1i32, 0i32), (0, 1), (1, 1), (1, -1)].iter() {
            let mut run = 1;
            for &sign in [-1i32, 1].iter() {
                let mut r = row as i32 + sign * d_row;
                let mut c = column as i32 + sign * d_column;
                while self.in_bounds(r, c) && self.cell(r as usize, c as usize) == player {
                    run += 1;
                    r += sign * d_row;
                    c += sign * d_column;
                }
            }
            if run >= CONNECT {
                return true;
            }
        }
        false
    }

    pub(crate) fn in_bounds(&self, row: i32, column: i32) -> bool {
        row >= 0 && column >= 0 && (row as usize) < self.size && (column as usize) < self.size
    }
}

impl Snapshot for Board {
    fn size(&self) -> usize {
        self.size
    }

    fn cell(&self, row: usize, column: usize) -> Cell {
        assert!(row < self.size && column < self.size, "cell ({}, {}) out of range", row, column);
        self.cells[column + self.size * row]
    }

    fn playable(&self, column: usize) -> bool {
        self.heights[column] < self.size
    }

    fn play(&self, column: usize, color: Color) -> Self {
        let mut next = self.clone();
        if let Err(err) = next.drop_tile(column, color) {
            panic!("board contract violated: {}", err);
        }
        next
    }
}

fn parse_column(column_char: char, size: usize) -> Result<usize, EngineError> {
    match column_char.to_digit(MAX_SIZE as u32 + 1).map(|c| c as usize) {
        Some(column) if column >= 1 && column <= size => Ok(column - 1),
        Some(column) if column > size => Err(EngineError::ColumnOutOfRange { column, size }),
        _ => Err(EngineError::InvalidMove(column_char)),
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    Playing,
    PlayerOneWin,
    PlayerTwoWin,
    Draw,
}

/// A game in progress, tracking the side to move and the result
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    pub to_move: Color,
    pub moves: String,
    pub state: GameState,
}

impl Game {
    pub fn new(size: usize) -> Result<Self, EngineError> {
        Ok(Self {
            board: Board::new(size)?,
            to_move: Color::PlayerOne,
            moves: String::new(),
            state: GameState::Playing,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Plays a 1-indexed column for the side to move and updates the game state
    pub fn play_checked(&mut self, column_one_indexed: usize) -> Result<GameState, EngineError> {
        if self.state != GameState::Playing {
            return Err(EngineError::GameOver);
        }
        if column_one_indexed < 1 || column_one_indexed > self.board.size() {
            return Err(EngineError::ColumnOutOfRange {
                column: column_one_indexed,
                size: self.board.size(),
            });
        }
        let column = column_one_indexed - 1;
        let row = self.board.drop_tile(column, self.to_move)?;

        self.state = if self.board.connects(row, column) {
            match self.to_move {
                Color::PlayerOne => GameState::PlayerOneWin,
                Color::PlayerTwo => GameState::PlayerTwoWin,
            }
        } else if self.board.is_full() {
            GameState::Draw
        } else {
            GameState::Playing
        };
        self.moves
            .push(std::char::from_digit(column_one_indexed as u32, MAX_SIZE as u32 + 1).unwrap_or('?'));
        self.to_move = self.to_move.opponent();

        Ok(self.state)
    }
}
