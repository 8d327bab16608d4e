use robopath_core::Cell;

use crate::neighbors::step_cost;

/// An ordered route from the start cell (inclusive) to the furthest cell
/// reached (inclusive). Empty when no route exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    /// The "no path" result.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    /// The furthest cell reached.
    #[inline]
    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Whether the route ends on `goal`.
    #[inline]
    pub fn reaches(&self, goal: Cell) -> bool {
        self.last() == Some(goal)
    }

    /// The cell after the start, if the route has at least one step.
    #[inline]
    pub fn next_step(&self) -> Option<Cell> {
        self.cells.get(1).copied()
    }

    /// Number of moves (one less than the number of cells).
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Total cost of the route under the step cost model.
    pub fn cost(&self) -> f64 {
        self.cells.windows(2).map(|w| step_cost(w[0], w[1])).sum()
    }
}

impl From<Vec<Cell>> for Path {
    fn from(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}
