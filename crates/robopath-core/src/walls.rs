//! The obstacle set: impassable cells bound to a [`GridSize`].

use crate::geom::{Cell, CoreError, GridSize};

/// A set of wall cells on a square grid.
///
/// Storage is a flat row-major occupancy buffer, so membership tests are a
/// single index and iteration order is deterministic (row-major).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "WallsRepr", into = "WallsRepr"))]
pub struct Walls {
    size: GridSize,
    occupied: Vec<bool>,
    count: usize,
}

impl Walls {
    /// An empty wall set for a grid of the given size.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            occupied: vec![false; size.area()],
            count: 0,
        }
    }

    /// Build a wall set from cells, failing on the first off-grid cell.
    /// Duplicates are ignored.
    pub fn from_cells<I>(size: GridSize, cells: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut walls = Self::new(size);
        for c in cells {
            walls.insert(c)?;
        }
        Ok(walls)
    }

    /// Grid bounds these walls live on.
    #[inline]
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Number of wall cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Whether `c` is a wall. Off-grid cells are not walls.
    #[inline]
    pub fn contains(&self, c: Cell) -> bool {
        self.size.index(c).is_some_and(|i| self.occupied[i])
    }

    /// Whether a robot may stand on `c`: on the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, c: Cell) -> bool {
        self.size.index(c).is_some_and(|i| !self.occupied[i])
    }

    /// Number of cells that are not walls.
    #[inline]
    pub fn free_count(&self) -> usize {
        self.size.area() - self.count
    }

    /// Mark `c` as a wall. Returns `true` if it was not one already.
    pub fn insert(&mut self, c: Cell) -> Result<bool, CoreError> {
        let i = self.checked_index(c)?;
        if self.occupied[i] {
            return Ok(false);
        }
        self.occupied[i] = true;
        self.count += 1;
        Ok(true)
    }

    /// Clear the wall at `c`. Returns `true` if it was a wall.
    pub fn remove(&mut self, c: Cell) -> Result<bool, CoreError> {
        let i = self.checked_index(c)?;
        if !self.occupied[i] {
            return Ok(false);
        }
        self.occupied[i] = false;
        self.count -= 1;
        Ok(true)
    }

    /// Add the wall if absent, remove it if present. Returns whether `c` is
    /// a wall afterwards.
    pub fn toggle(&mut self, c: Cell) -> Result<bool, CoreError> {
        if self.contains(c) {
            self.remove(c)?;
            Ok(false)
        } else {
            self.insert(c)?;
            Ok(true)
        }
    }

    /// Iterate over wall cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.occupied
            .iter()
            .enumerate()
            .filter(|(_, w)| **w)
            .map(|(i, _)| self.size.cell(i))
    }

    fn checked_index(&self, c: Cell) -> Result<usize, CoreError> {
        self.size
            .index(c)
            .ok_or(CoreError::OutOfBounds { cell: c, size: self.size })
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct WallsRepr {
    size: GridSize,
    cells: Vec<Cell>,
}

#[cfg(feature = "serde")]
impl TryFrom<WallsRepr> for Walls {
    type Error = CoreError;

    fn try_from(r: WallsRepr) -> Result<Self, Self::Error> {
        Walls::from_cells(r.size, r.cells)
    }
}

#[cfg(feature = "serde")]
impl From<Walls> for WallsRepr {
    fn from(w: Walls) -> Self {
        Self {
            size: w.size,
            cells: w.iter().collect(),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn walls_round_trip() {
        let size = GridSize::new(6).unwrap();
        let w = Walls::from_cells(size, [Cell::new(1, 2), Cell::new(5, 5)]).unwrap();
        let json = serde_json::to_string(&w).unwrap();
        let back: Walls = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }

    #[test]
    fn walls_reject_off_grid_cells() {
        let json = r#"{"size":3,"cells":[{"x":3,"y":0}]}"#;
        assert!(serde_json::from_str::<Walls>(json).is_err());
    }
}
