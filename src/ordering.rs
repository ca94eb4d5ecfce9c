//! Move ordering by one-ply look-ahead

use crate::{
    board::{Color, Snapshot},
    heuristic::evaluate,
    search::Side,
};

/// Collects columns with their look-ahead scores, yielding them best first
/// for the side to move
///
/// Insertion keeps equal scores in push order, so pushing columns left to
/// right breaks ties towards the lowest column.
pub struct MoveSorter {
    side: Side,
    next: usize,
    // column and score
    moves: Vec<(usize, i32)>,
}

impl MoveSorter {
    pub fn new(side: Side, capacity: usize) -> Self {
        Self {
            side,
            next: 0,
            moves: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, column: usize, score: i32) {
        let mut pos = self.moves.len();
        while pos != 0 && self.precedes(score, self.moves[pos - 1].1) {
            pos -= 1;
        }
        self.moves.insert(pos, (column, score));
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    // strictly better for the side to move
    fn precedes(&self, score: i32, other: i32) -> bool {
        match self.side {
            Side::Maximizing => score > other,
            Side::Minimizing => score < other,
        }
    }
}

impl Iterator for MoveSorter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let column = self.moves.get(self.next).map(|&(column, _)| column);
        self.next += 1;
        column
    }
}

/// Orders the legal columns of `board` for the side to move
///
/// Each candidate is played with the mover's colour and the resulting board
/// is evaluated from `perspective`, the colour of the root agent.
pub fn order_moves<S: Snapshot>(board: &S, perspective: Color, side: Side) -> MoveSorter {
    let mover = side.mover(perspective);
    let mut moves = MoveSorter::new(side, board.size());
    for column in (0..board.size()).filter(|&column| board.playable(column)) {
        let child = board.play(column, mover);
        moves.push(column, evaluate(&child, perspective));
    }
    moves
}

/// The legal columns of `board` left to right, without look-ahead
pub fn natural_order<S: Snapshot>(board: &S) -> Vec<usize> {
    (0..board.size())
        .filter(|&column| board.playable(column))
        .collect()
}
