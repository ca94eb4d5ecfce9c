//! A depth-limited minimax agent for the board game 'Connect 4'
//!
//! The agent looks a fixed number of plies ahead with alpha-beta pruning,
//! ordering the moves at each node by a one-ply heuristic look-ahead, and
//! scores the leaves of the tree with a static line-potential evaluator.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{board::{Board, Color}, player::{MinimaxPlayer, Player}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut player = MinimaxPlayer::new(1)?;
//! let column = player.select_move(&Board::new(8)?, Color::PlayerOne)?;
//!
//! // the centre column is worth the most on an empty board
//! assert_eq!(column, 4);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod board;

pub mod heuristic;

pub mod ordering;

pub mod search;

pub mod player;

mod test;

pub use error::EngineError;

/// The smallest supported board dimension
pub const MIN_SIZE: usize = 1;

/// The largest supported board dimension
pub const MAX_SIZE: usize = 16;

/// The default board dimension in tiles (the board is square)
pub const DEFAULT_SIZE: usize = 8;

/// The number of aligned tiles needed to win
pub const CONNECT: usize = 4;

// the default board must be playable and able to hold a complete line
const_assert!(DEFAULT_SIZE >= CONNECT);
const_assert!(DEFAULT_SIZE >= MIN_SIZE && DEFAULT_SIZE <= MAX_SIZE);
