//! A scrabble score library for Rust.
//! <br>
//! This crate finds all words on a scrabble board, and calculates the score of each player.
//! Each tile on the board records the players that may have played it. The score of a word
//! goes to the player of the first tile in the word that was played by a single player.
//! Words for which no such tile exists are counted as "unallocated".
//!
//! # How to use `scrabble_scores`
//! Start by loading the letter values, then create a board with the tiles that are played.
//! Both can be read from json files:
//! - letter values: `[{"value": 1, "letters": ["a", "e", ...]}, ...]`
//! - board: `[[x, y, "letter", ["player", ...]], ...]`, with `x` and `y` starting at 1.
//!
//! # Basic usage
//!  ```
//! use scrabble_scores::{Board, LetterValues, Placement};
//!
//! let values = LetterValues::default();
//! let board = Board::new(&[
//!     Placement::new(1, 1, "r", &["alice"]),
//!     Placement::new(1, 2, "u", &["alice"]),
//!     Placement::new(1, 3, "s", &["alice", "bob"]),
//!     Placement::new(1, 4, "t", &["alice"]),
//!     Placement::new(2, 3, "o", &["bob"]),
//!     Placement::new(3, 3, "n", &["bob"]),
//! ])?;
//! let scores = board.calc_scores(&values)?;
//! assert_eq!(scores.player("alice"), Some(4));
//! assert_eq!(scores.player("bob"), Some(3));
//! println!("{}", board);
//! println!("{}", scores);
//! # Ok::<(), scrabble_scores::Error>(())
//! ```
mod board;
pub mod config;
mod error;
mod letters;
mod scores;
mod tile;
mod word;

pub use crate::board::{calc_all_scores, Board, Direction, Placement, MAX_DIMENSION, N};
pub use crate::error::Error;
pub use crate::letters::{LetterGroup, LetterValues};
pub use crate::scores::{Owner, ScoreReport, Scores};
pub use crate::tile::{Player, Tile};
pub use crate::word::Word;
