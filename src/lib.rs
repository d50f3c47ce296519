//! Tetris board and piece core with transactional undo for move-search
//! drivers.
//!
//! Two components carry the whole crate:
//!
//! - [`Piece`]: immutable tetromino geometry (body, skirt, rotation) plus a
//!   shared table of the seven canonical pieces.
//! - [`Board`]: the playfield grid with O(1) height and row summaries and a
//!   one-level place/clear/undo/commit protocol, cheap enough for a search
//!   policy to probe every candidate move each turn.
//!
//! The crate stops at game logic: rendering, input, timing, and concrete
//! search policies live with the driver. [`Brain`] defines the contract a
//! policy implements.
//!
//! ```
//! use tetris_core::{Board, Piece, PlaceResult};
//!
//! let mut board = Board::new(10, 20);
//! let square = &Piece::standard()[5];
//!
//! let y = board.drop_height(square, 4);
//! assert_eq!(board.place(square, 4, y), PlaceResult::Ok);
//! board.clear_rows();
//! board.commit();
//! ```

pub mod brain;
pub mod core;
pub mod types;

pub use crate::brain::{Brain, Move};
pub use crate::core::{Board, Piece, PieceError, PlaceResult};
pub use crate::types::Point;
