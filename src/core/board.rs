//! Board module - the playfield grid and its placement transaction protocol
//!
//! The grid is width x height cells stored flat for cache locality, with two
//! summaries maintained incrementally for O(1) reads: filled-cell counts per
//! row and stack heights per column. Coordinates: x runs left to right, y
//! runs bottom to top; gravity pulls toward y = 0.
//!
//! Mutation follows a one-level transaction protocol. A committed board
//! accepts one `place` (plus any `clear_rows`), after which the caller keeps
//! the result with `commit` or rolls it back with `undo`. Search drivers
//! probe candidates by looping place/score/undo and commit only the move
//! they finally pick.

use std::fmt;

use crate::core::piece::Piece;
use crate::types::{STANDARD_HEIGHT, STANDARD_WIDTH};

/// Outcome of [`Board::place`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceResult {
    /// Piece landed entirely on empty cells.
    Ok,
    /// Piece landed and at least one affected row is now full.
    RowFilled,
    /// Part of the piece would fall outside the grid; nothing was written.
    OutOfBounds,
    /// Piece overlaps a filled cell; cells written before the collision
    /// remain until `undo`.
    Bad,
}

impl PlaceResult {
    /// True for the landed outcomes, `Ok` and `RowFilled`.
    pub fn is_success(self) -> bool {
        matches!(self, PlaceResult::Ok | PlaceResult::RowFilled)
    }
}

/// Grid cells plus the derived summaries, kept as one value so snapshot and
/// restore are plain assignments.
#[derive(Debug, PartialEq)]
struct GridState {
    /// Flat cells, row-major (y * width + x).
    cells: Vec<bool>,
    /// Filled-cell count per row.
    row_widths: Vec<usize>,
    /// One past the highest filled cell per column; 0 when empty.
    col_heights: Vec<usize>,
}

impl GridState {
    fn empty(width: usize, height: usize) -> Self {
        Self {
            cells: vec![false; width * height],
            row_widths: vec![0; height],
            col_heights: vec![0; width],
        }
    }
}

impl Clone for GridState {
    fn clone(&self) -> Self {
        Self {
            cells: self.cells.clone(),
            row_widths: self.row_widths.clone(),
            col_heights: self.col_heights.clone(),
        }
    }

    /// `clone_from` must not reallocate; undo and commit run once per probe.
    fn clone_from(&mut self, source: &Self) {
        self.cells.clone_from(&source.cells);
        self.row_widths.clone_from(&source.row_widths);
        self.col_heights.clone_from(&source.col_heights);
    }
}

/// The playfield: a mutable grid with O(1) summaries and one level of undo.
///
/// Cloning a board yields a fully independent copy, cells and snapshot
/// alike, which is how parallel searches fan out workers.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    state: GridState,
    backup: GridState,
    committed: bool,
}

impl Board {
    /// Create an empty committed board of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        let state = GridState::empty(width, height);
        let backup = state.clone();
        Self {
            width,
            height,
            state,
            backup,
            committed: true,
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when no transaction is pending.
    pub fn committed(&self) -> bool {
        self.committed
    }

    /// Flat index for in-range coordinates.
    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// True if the cell at (x, y) is filled. Coordinates outside the grid
    /// report filled, so probes past an edge see an obstruction.
    pub fn cell_filled(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return true;
        }
        self.state.cells[self.index(x as usize, y as usize)]
    }

    /// Number of filled cells in row `y`.
    pub fn row_width(&self, y: usize) -> usize {
        self.state.row_widths[y]
    }

    /// One past the highest filled cell in column `x`; 0 when the column is
    /// empty.
    pub fn column_height(&self, x: usize) -> usize {
        self.state.col_heights[x]
    }

    /// Height of the tallest column.
    pub fn max_height(&self) -> usize {
        self.state.col_heights.iter().copied().max().unwrap_or(0)
    }

    /// The y where `piece` comes to rest when dropped in columns
    /// `x .. x + width`: each populated skirt column must clear the stack
    /// under it. O(piece width). `x` must keep the piece inside the grid
    /// horizontally.
    pub fn drop_height(&self, piece: &Piece, x: i32) -> i32 {
        debug_assert!(
            x >= 0 && x as usize + piece.width() <= self.width,
            "drop_height x must keep the piece inside the grid"
        );
        let x = x as usize;
        let mut rest = 0i32;
        for (i, low) in piece.skirt().iter().enumerate() {
            let Some(low) = low else { continue };
            let delta = self.state.col_heights[x + i] as i32 - *low as i32;
            rest = rest.max(delta);
        }
        rest
    }

    /// Write `piece` with its origin at (x, y).
    ///
    /// The board must be committed; a second `place` without an intervening
    /// `commit` or `undo` is a protocol violation and panics. The board
    /// turns uncommitted as soon as the call is accepted, whatever the
    /// outcome, since a `Bad` placement leaves a partial write behind.
    ///
    /// Returns [`PlaceResult::OutOfBounds`] (nothing written) when the piece
    /// overhangs any edge, [`PlaceResult::Bad`] (partial write, recover with
    /// [`Board::undo`]) when it overlaps a filled cell, and otherwise `Ok`
    /// or `RowFilled` with both summaries updated. Full rows are reported,
    /// not removed; see [`Board::clear_rows`].
    pub fn place(&mut self, piece: &Piece, x: i32, y: i32) -> PlaceResult {
        assert!(
            self.committed,
            "place on an uncommitted board; call commit() or undo() first"
        );
        self.committed = false;

        if x < 0
            || y < 0
            || x as usize + piece.width() > self.width
            || y as usize + piece.height() > self.height
        {
            return PlaceResult::OutOfBounds;
        }
        let (x, y) = (x as usize, y as usize);

        let mut row_filled = false;
        for p in piece.body() {
            let (gx, gy) = (x + p.x, y + p.y);
            let idx = self.index(gx, gy);
            if self.state.cells[idx] {
                return PlaceResult::Bad;
            }
            self.state.cells[idx] = true;
            self.state.row_widths[gy] += 1;
            if self.state.row_widths[gy] == self.width {
                row_filled = true;
            }
            let h = &mut self.state.col_heights[gx];
            *h = (*h).max(gy + 1);
        }

        if row_filled {
            PlaceResult::RowFilled
        } else {
            PlaceResult::Ok
        }
    }

    /// Delete every full row: the rows above each one shift down by one and
    /// the vacated top row becomes empty. Returns the number of rows
    /// cleared. Runs in either transaction state and leaves the committed
    /// flag alone; the usual flow is place, clear_rows, commit.
    pub fn clear_rows(&mut self) -> usize {
        let mut cleared = 0;
        // Top-down so each shift moves only rows already scanned.
        for y in (0..self.height).rev() {
            if self.state.row_widths[y] == self.width {
                self.remove_row(y);
                cleared += 1;
            }
        }
        if cleared > 0 {
            self.settle_heights();
        }
        cleared
    }

    /// Shift the rows above `y` down one and empty the top row.
    fn remove_row(&mut self, y: usize) {
        let w = self.width;
        for row in y..self.height - 1 {
            let src = (row + 1) * w;
            self.state.cells.copy_within(src..src + w, row * w);
            self.state.row_widths[row] = self.state.row_widths[row + 1];
        }
        let top = (self.height - 1) * w;
        self.state.cells[top..top + w].fill(false);
        self.state.row_widths[self.height - 1] = 0;
    }

    /// Re-anchor every column height to its true topmost filled cell.
    /// Heights only ever over-estimate after rows shift down, so scanning
    /// downward from the stale value is exact.
    fn settle_heights(&mut self) {
        for col in 0..self.width {
            let mut h = self.state.col_heights[col];
            while h > 0 && !self.state.cells[self.index(col, h - 1)] {
                h -= 1;
            }
            self.state.col_heights[col] = h;
        }
    }

    /// Roll the pending transaction back to the last committed snapshot,
    /// grid and summaries alike. A committed board has nothing pending, so
    /// the call is an idempotent no-op.
    pub fn undo(&mut self) {
        if self.committed {
            return;
        }
        self.state.clone_from(&self.backup);
        self.committed = true;
    }

    /// Keep the pending changes: the current state becomes the snapshot that
    /// `undo` restores. Committing an already committed board is harmless.
    pub fn commit(&mut self) {
        self.backup.clone_from(&self.state);
        self.committed = true;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(STANDARD_WIDTH, STANDARD_HEIGHT)
    }
}

/// ASCII render: top row first, `|` side borders, `+` for filled cells, and
/// a dashed line closing the bottom.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            write!(f, "|")?;
            for x in 0..self.width {
                let ch = if self.state.cells[self.index(x, y)] {
                    '+'
                } else {
                    ' '
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f, "|")?;
        }
        for _ in 0..self.width + 2 {
            write!(f, "-")?;
        }
        writeln!(f)
    }
}
