//! Brain module - the contract between the board and a move-search policy
//!
//! Only the contract lives here; concrete policies belong to the driver.
//! A brain evaluates candidates by probing the board: place, score, undo,
//! for every rotation and column worth considering, using `drop_height` for
//! each candidate's resting row. Probing must leave the board committed and
//! exactly as it was handed over; the driver applies the chosen move itself.

use crate::core::board::Board;
use crate::core::piece::Piece;

/// One candidate placement with its evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Move {
    /// The rotation to play.
    pub piece: Piece,
    /// Target column of the piece origin.
    pub x: i32,
    /// Resting row, normally `board.drop_height(&piece, x)`.
    pub y: i32,
    /// Policy-defined rating; by convention lower is better.
    pub score: f64,
}

/// A move-search policy.
pub trait Brain {
    /// Pick the best placement of `piece` on `board`, or `None` when no
    /// legal placement exists.
    ///
    /// `height_limit` advises the search to discard placements that would
    /// stack above it, e.g. into a driver's hidden spawn rows.
    fn best_move(&mut self, board: &mut Board, piece: &Piece, height_limit: usize)
        -> Option<Move>;
}
