//! Depth-limited minimax search with alpha-beta pruning

use log::trace;

use crate::{
    board::{Color, Snapshot},
    heuristic::evaluate,
    ordering::{natural_order, order_moves},
};

/// Which side is simulated at a node of the tree
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Side {
    /// The root agent is to move
    Maximizing,
    /// The opponent of the root agent is to move
    Minimizing,
}

impl Side {
    /// The colour played at this node, given the root agent's colour
    pub fn mover(self, perspective: Color) -> Color {
        match self {
            Side::Maximizing => perspective,
            Side::Minimizing => perspective.opponent(),
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Side::Maximizing => Side::Minimizing,
            Side::Minimizing => Side::Maximizing,
        }
    }

    // the starting value of a node's running best
    fn worst(self) -> i32 {
        match self {
            Side::Maximizing => i32::MIN,
            Side::Minimizing => i32::MAX,
        }
    }
}

/// Counters gathered over one top-level decision (for diagnostics only)
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct SearchStats {
    /// Heuristic evaluations at the leaves of the tree
    pub leaf_evaluations: usize,
    /// Heuristic evaluations spent ordering moves, not included in `leaf_evaluations`
    pub ordering_evaluations: usize,
    /// Nodes visited, leaves included
    pub nodes: usize,
}

/// One search session
///
/// Every score is given from `perspective`, the colour of the root agent,
/// whichever side is to move at the node being searched. The counters are
/// owned by the session, so independent sessions can run side by side.
#[derive(Clone, Debug)]
pub struct Search {
    perspective: Color,
    move_ordering: bool,
    stats: SearchStats,
}

impl Search {
    pub fn new(perspective: Color, move_ordering: bool) -> Self {
        Self {
            perspective,
            move_ordering,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches `board` to `depth` plies with the window (`alpha`, `beta`)
    ///
    /// Returns the exact minimax value when no child was pruned, otherwise a
    /// bound on it that is only meaningful against the window passed in.
    pub fn alpha_beta<S: Snapshot>(
        &mut self,
        board: &S,
        depth: u32,
        side: Side,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || !board.has_moves() {
            return self.leaf(board);
        }

        let mover = side.mover(self.perspective);
        let mut best = side.worst();
        for column in self.children(board, side) {
            let child = board.play(column, mover);
            let value = self.alpha_beta(&child, depth - 1, side.flip(), alpha, beta);

            match side {
                Side::Maximizing => {
                    best = best.max(value);
                    alpha = alpha.max(value);
                }
                Side::Minimizing => {
                    best = best.min(value);
                    beta = beta.min(value);
                }
            }
            // the parent already has a better alternative than this node can offer
            if beta <= alpha {
                trace!("cut-off after column {} at depth {} ({}, {})", column, depth, alpha, beta);
                break;
            }
        }
        best
    }

    /// Plain minimax over every legal move, without pruning or ordering
    pub fn minimax<S: Snapshot>(&mut self, board: &S, depth: u32, side: Side) -> i32 {
        self.stats.nodes += 1;

        if depth == 0 || !board.has_moves() {
            return self.leaf(board);
        }

        let mover = side.mover(self.perspective);
        let values = natural_order(board).into_iter().map(|column| {
            let child = board.play(column, mover);
            self.minimax(&child, depth - 1, side.flip())
        });
        let best = match side {
            Side::Maximizing => values.max(),
            Side::Minimizing => values.min(),
        };
        best.unwrap_or_else(|| side.worst())
    }

    fn leaf<S: Snapshot>(&mut self, board: &S) -> i32 {
        self.stats.leaf_evaluations += 1;
        evaluate(board, self.perspective)
    }

    fn children<S: Snapshot>(&mut self, board: &S, side: Side) -> Vec<usize> {
        if self.move_ordering {
            let moves = order_moves(board, self.perspective, side);
            self.stats.ordering_evaluations += moves.len();
            moves.collect()
        } else {
            natural_order(board)
        }
    }
}
