//! Geometry primitives: [`Cell`], [`GridSize`] and [`Dir`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// An integer grid coordinate. X grows right, Y grows down (screen
/// coordinates), so [`Dir::N`] decreases `y`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Create a new cell.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return the cell shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The adjacent cell in direction `dir`.
    #[inline]
    pub const fn step(self, dir: Dir) -> Self {
        let (dx, dy) = dir.delta();
        self.shift(dx, dy)
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    /// Row-major: by `y`, then by `x`.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// GridSize
// ---------------------------------------------------------------------------

/// Side length of a square `n × n` grid. Always positive.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i32", into = "i32"))]
pub struct GridSize(i32);

impl GridSize {
    /// Create a grid size, rejecting zero and negative sides.
    pub fn new(n: i32) -> Result<Self, CoreError> {
        if n <= 0 {
            return Err(CoreError::InvalidSize(n));
        }
        Ok(Self(n))
    }

    /// Constructor for constants; a non-positive side fails const
    /// evaluation.
    pub const fn from_const(n: i32) -> Self {
        assert!(n > 0, "grid size must be positive");
        Self(n)
    }

    /// Side length.
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Total number of cells.
    #[inline]
    pub const fn area(self) -> usize {
        (self.0 as usize) * (self.0 as usize)
    }

    /// Whether `c` lies on the grid.
    #[inline]
    pub const fn contains(self, c: Cell) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.0 && c.y < self.0
    }

    /// Fail with [`CoreError::OutOfBounds`] unless `c` lies on the grid.
    pub fn check(self, c: Cell) -> Result<Cell, CoreError> {
        if self.contains(c) {
            Ok(c)
        } else {
            Err(CoreError::OutOfBounds { cell: c, size: self })
        }
    }

    /// Flat row-major index of `c`, or `None` when off-grid.
    #[inline]
    pub fn index(self, c: Cell) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.y as usize * self.0 as usize + c.x as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn cell(self, idx: usize) -> Cell {
        let n = self.0 as usize;
        Cell::new((idx % n) as i32, (idx / n) as i32)
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Cell> {
        let n = self.0;
        (0..n).flat_map(move |y| (0..n).map(move |x| Cell::new(x, y)))
    }
}

impl TryFrom<i32> for GridSize {
    type Error = CoreError;

    fn try_from(n: i32) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<GridSize> for i32 {
    fn from(s: GridSize) -> Self {
        s.0
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the eight compass directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    N,
    E,
    S,
    W,
    NE,
    SE,
    SW,
    NW,
}

impl Dir {
    /// Orthogonal directions, in enumeration order.
    pub const CARDINAL: [Dir; 4] = [Dir::N, Dir::E, Dir::S, Dir::W];

    /// All directions: the orthogonal ones first, then the diagonals.
    /// Searches enumerate neighbours in exactly this order.
    pub const ALL: [Dir; 8] = [
        Dir::N,
        Dir::E,
        Dir::S,
        Dir::W,
        Dir::NE,
        Dir::SE,
        Dir::SW,
        Dir::NW,
    ];

    /// `(dx, dy)` offset of one step.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Dir::N => (0, -1),
            Dir::E => (1, 0),
            Dir::S => (0, 1),
            Dir::W => (-1, 0),
            Dir::NE => (1, -1),
            Dir::SE => (1, 1),
            Dir::SW => (-1, 1),
            Dir::NW => (-1, -1),
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Dir::NE | Dir::SE | Dir::SW | Dir::NW)
    }

    /// The direction of a single step from `from` to `to`, if they are
    /// adjacent.
    pub fn between(from: Cell, to: Cell) -> Option<Dir> {
        let d = to - from;
        Dir::ALL.into_iter().find(|dir| dir.delta() == (d.x, d.y))
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors raised when grid invariants are violated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A grid side that is zero or negative.
    InvalidSize(i32),
    /// A cell outside the grid.
    OutOfBounds { cell: Cell, size: GridSize },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(n) => write!(f, "invalid grid size {n}: must be positive"),
            Self::OutOfBounds { cell, size } => {
                write!(f, "cell {cell} is outside the {size} grid")
            }
        }
    }
}

impl std::error::Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_arithmetic() {
        let a = Cell::new(3, 4);
        let b = Cell::new(1, 2);
        assert_eq!(a + b, Cell::new(4, 6));
        assert_eq!(a - b, Cell::new(2, 2));
        assert_eq!(a.shift(-1, 1), Cell::new(2, 5));
        assert_eq!(a.step(Dir::NW), Cell::new(2, 3));
    }

    #[test]
    fn cell_order_is_row_major() {
        let mut cells = vec![Cell::new(2, 1), Cell::new(0, 2), Cell::new(1, 1)];
        cells.sort();
        assert_eq!(cells, vec![Cell::new(1, 1), Cell::new(2, 1), Cell::new(0, 2)]);
    }

    #[test]
    fn grid_size_rejects_non_positive() {
        assert_eq!(GridSize::new(0), Err(CoreError::InvalidSize(0)));
        assert_eq!(GridSize::new(-3), Err(CoreError::InvalidSize(-3)));
        assert_eq!(GridSize::new(4).unwrap().area(), 16);
    }

    #[test]
    fn grid_size_contains_and_check() {
        let s = GridSize::new(5).unwrap();
        assert!(s.contains(Cell::new(0, 0)));
        assert!(s.contains(Cell::new(4, 4)));
        assert!(!s.contains(Cell::new(5, 0)));
        assert!(!s.contains(Cell::new(0, -1)));
        assert!(s.check(Cell::new(2, 2)).is_ok());
        assert_eq!(
            s.check(Cell::new(-1, 2)),
            Err(CoreError::OutOfBounds {
                cell: Cell::new(-1, 2),
                size: s
            })
        );
    }

    #[test]
    fn index_round_trip_covers_grid() {
        let s = GridSize::new(4).unwrap();
        for (i, c) in s.iter().enumerate() {
            assert_eq!(s.index(c), Some(i));
            assert_eq!(s.cell(i), c);
        }
        assert_eq!(s.iter().count(), 16);
        assert_eq!(s.index(Cell::new(4, 0)), None);
    }

    #[test]
    fn dir_between() {
        let c = Cell::new(2, 2);
        for dir in Dir::ALL {
            assert_eq!(Dir::between(c, c.step(dir)), Some(dir));
        }
        assert_eq!(Dir::between(c, Cell::new(4, 2)), None);
        assert_eq!(Dir::between(c, c), None);
    }

    #[test]
    fn diagonal_flags() {
        assert!(Dir::CARDINAL.iter().all(|d| !d.is_diagonal()));
        assert_eq!(Dir::ALL.iter().filter(|d| d.is_diagonal()).count(), 4);
    }
}
