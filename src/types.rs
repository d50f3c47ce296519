//! Core types shared across the crate
//! This module contains pure data types with no external dependencies

use std::fmt;

/// Standard playfield dimensions. Drivers usually build boards a few rows
/// taller than `STANDARD_HEIGHT` so pieces can enter above the visible area.
pub const STANDARD_WIDTH: usize = 10;
pub const STANDARD_HEIGHT: usize = 20;

/// A cell coordinate, on a board or within a piece body.
///
/// `x` counts columns from the left edge and `y` counts rows upward from the
/// bottom; gravity pulls toward `y = 0`. Both components are non-negative.
/// Points order by `(x, y)`, so a sorted body is a normalized set key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
