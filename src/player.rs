//! The agent exposed to a host game

use log::{debug, info};

use crate::{
    board::{Color, Snapshot},
    search::{Search, SearchStats, Side},
    EngineError,
};

/// A participant in a game, as seen by the host
pub trait Player {
    /// Chooses a column for `color` to play on `board`
    fn select_move<S: Snapshot>(&mut self, board: &S, color: Color) -> Result<usize, EngineError>;

    /// A stable name for logs and menus
    fn name(&self) -> &str;
}

/// Construction-time settings of a [`MinimaxPlayer`]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchConfig {
    depth: u32,
    /// Order moves by one-ply look-ahead before searching them
    pub move_ordering: bool,
}

impl SearchConfig {
    /// Checks that `depth` is a usable number of plies
    pub fn new(depth: i32) -> Result<Self, EngineError> {
        if depth < 1 {
            return Err(EngineError::InvalidConfiguration { depth });
        }
        Ok(Self {
            depth: depth as u32,
            move_ordering: true,
        })
    }

    pub fn with_move_ordering(mut self, move_ordering: bool) -> Self {
        self.move_ordering = move_ordering;
        self
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

/// An agent choosing moves by alpha-beta search to a fixed depth
#[derive(Clone, Debug)]
pub struct MinimaxPlayer {
    config: SearchConfig,
    last_stats: SearchStats,
}

impl MinimaxPlayer {
    pub fn new(depth: i32) -> Result<Self, EngineError> {
        Ok(Self::with_config(SearchConfig::new(depth)?))
    }

    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            config,
            last_stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// The counters of the most recent decision
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Scores every legal column for `color`, left to right
    ///
    /// Each root move is searched with a full window, so the scores are exact
    /// minimax values to the configured depth.
    pub fn evaluate_root_moves<S: Snapshot>(&mut self, board: &S, color: Color) -> Vec<(usize, i32)> {
        let depth = self.config.depth;
        let mut search = Search::new(color, self.config.move_ordering);
        let scores = (0..board.size())
            .filter(|&column| board.playable(column))
            .map(|column| {
                let child = board.play(column, color);
                let score = search.alpha_beta(&child, depth - 1, Side::Minimizing, i32::MIN, i32::MAX);
                debug!("column {}: {}", column + 1, score);
                (column, score)
            })
            .collect();
        self.last_stats = search.stats();
        scores
    }
}

impl Player for MinimaxPlayer {
    fn select_move<S: Snapshot>(&mut self, board: &S, color: Color) -> Result<usize, EngineError> {
        let mut best: Option<(usize, i32)> = None;
        for (column, score) in self.evaluate_root_moves(board, color) {
            // strictly better only, the lowest column wins ties
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((column, score));
            }
        }

        let stats = self.last_stats;
        info!(
            "heuristic evaluations: {} (ordering: {}, nodes: {})",
            stats.leaf_evaluations, stats.ordering_evaluations, stats.nodes
        );

        best.map(|(column, _)| column).ok_or(EngineError::NoLegalMoves)
    }

    fn name(&self) -> &str {
        "MinimaxPlayer"
    }
}
