//! Core module - pure game logic with no external I/O
//!
//! Piece geometry and the board transaction protocol live here; everything
//! a driver or search policy needs to evaluate moves, nothing it needs to
//! render them.

pub mod board;
pub mod piece;

// Re-export commonly used types
pub use board::{Board, PlaceResult};
pub use piece::{Piece, PieceError};
