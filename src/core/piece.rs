//! Piece module - immutable tetromino geometry
//!
//! A piece is a set of cells anchored at the lower-left corner of its own
//! bounding box. Rotation returns a fresh piece; nothing here mutates after
//! construction. The seven canonical tetrominoes are parsed once into a
//! shared table and handed out as `&'static` references.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use smallvec::{smallvec, SmallVec};

use crate::types::Point;

/// Canonical piece strings, alternating x y pairs.
pub const STICK_STR: &str = "0 0 0 1 0 2 0 3";
pub const L1_STR: &str = "0 0 0 1 0 2 1 0";
pub const L2_STR: &str = "0 0 1 0 1 1 1 2";
pub const S1_STR: &str = "0 0 1 0 1 1 2 1";
pub const S2_STR: &str = "0 1 1 1 1 0 2 0";
pub const SQUARE_STR: &str = "0 0 0 1 1 0 1 1";
pub const PYRAMID_STR: &str = "0 0 1 0 1 1 2 0";

/// Number of canonical pieces in [`Piece::standard`].
pub const STANDARD_COUNT: usize = 7;

/// Canonical tetrominoes are 4 cells; custom bodies may spill to the heap.
type Body = SmallVec<[Point; 4]>;
type Skirt = SmallVec<[Option<usize>; 4]>;

static STANDARD: OnceLock<[Piece; STANDARD_COUNT]> = OnceLock::new();

/// Rejected piece construction or parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceError {
    /// A body must contain at least one point.
    Empty,
    /// Piece strings hold x y pairs; an odd token count leaves a dangling
    /// coordinate.
    OddTokenCount(usize),
    /// A token that is not a non-negative decimal integer.
    InvalidToken(String),
}

impl fmt::Display for PieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceError::Empty => write!(f, "piece body is empty"),
            PieceError::OddTokenCount(n) => {
                write!(f, "piece string has {} tokens; x y pairs need an even count", n)
            }
            PieceError::InvalidToken(token) => {
                write!(f, "piece token {:?} is not a non-negative integer", token)
            }
        }
    }
}

impl std::error::Error for PieceError {}

/// An immutable piece in one fixed rotation.
///
/// Width, height, and skirt are derived from the body at construction and
/// never change. Equality is set equality over bodies, so point order does
/// not matter.
///
/// ```
/// use tetris_core::Piece;
///
/// let s: Piece = "0 0 1 0 1 1 2 1".parse().unwrap();
/// assert_eq!((s.width(), s.height()), (3, 2));
/// assert_eq!(s.skirt(), &[Some(0), Some(0), Some(1)]);
/// ```
#[derive(Debug, Clone)]
pub struct Piece {
    body: Body,
    skirt: Skirt,
    width: usize,
    height: usize,
}

impl Piece {
    /// Build a piece from its body points.
    ///
    /// Point order is preserved; the body is a set, so exact duplicates
    /// collapse. An empty body is rejected.
    pub fn new<I>(points: I) -> Result<Self, PieceError>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut body = Body::new();
        for point in points {
            if !body.contains(&point) {
                body.push(point);
            }
        }
        if body.is_empty() {
            return Err(PieceError::Empty);
        }
        Ok(Self::from_body(body))
    }

    /// `body` is non-empty and deduplicated.
    fn from_body(body: Body) -> Self {
        debug_assert!(!body.is_empty());
        let width = 1 + body.iter().map(|p| p.x).max().unwrap_or(0);
        let height = 1 + body.iter().map(|p| p.y).max().unwrap_or(0);
        let mut skirt: Skirt = smallvec![None; width];
        for p in &body {
            let low = &mut skirt[p.x];
            *low = Some(low.map_or(p.y, |y| y.min(p.y)));
        }
        Self {
            body,
            skirt,
            width,
            height,
        }
    }

    /// Piece width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Piece height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Body points in construction order.
    pub fn body(&self) -> &[Point] {
        &self.body
    }

    /// Lowest occupied `y` per piece column, indexed `0..width()`.
    ///
    /// `None` marks a column with no body cells; the canonical seven are
    /// fully populated.
    pub fn skirt(&self) -> &[Option<usize>] {
        &self.skirt
    }

    /// The piece rotated 90 degrees counterclockwise, re-anchored at the
    /// origin of its new bounding box. `self` is untouched. Four rotations
    /// return to the original.
    pub fn rotated(&self) -> Piece {
        let h = self.height;
        let body: Body = self
            .body
            .iter()
            .map(|p| Point::new(h - 1 - p.y, p.x))
            .collect();
        Self::from_body(body)
    }

    /// Shared table of the seven canonical pieces, in stable order: stick,
    /// L1, L2, S1, S2, square, pyramid.
    ///
    /// Parsed lazily on first use; every caller sees the same table.
    pub fn standard() -> &'static [Piece; STANDARD_COUNT] {
        STANDARD.get_or_init(|| {
            let parse = |s: &str| s.parse::<Piece>().expect("canonical piece strings parse");
            [
                parse(STICK_STR),
                parse(L1_STR),
                parse(L2_STR),
                parse(S1_STR),
                parse(S2_STR),
                parse(SQUARE_STR),
                parse(PYRAMID_STR),
            ]
        })
    }
}

/// Set equality: each body must contain the other's points.
impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        if self.body.len() != other.body.len() {
            return false;
        }
        let mut a = self.body.clone();
        let mut b = other.body.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

impl Eq for Piece {}

impl FromStr for Piece {
    type Err = PieceError;

    /// Parse a whitespace-separated list of x y pairs, e.g. `"0 0 1 0 1 1"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut coords = Vec::new();
        for token in s.split_whitespace() {
            let value = token
                .parse::<usize>()
                .map_err(|_| PieceError::InvalidToken(token.to_string()))?;
            coords.push(value);
        }
        if coords.len() % 2 != 0 {
            return Err(PieceError::OddTokenCount(coords.len()));
        }
        Piece::new(coords.chunks_exact(2).map(|pair| Point::new(pair[0], pair[1])))
    }
}

/// ASCII figure, top row first: `X` for body cells.
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let ch = if self.body.contains(&Point::new(x, y)) {
                    'X'
                } else {
                    ' '
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
