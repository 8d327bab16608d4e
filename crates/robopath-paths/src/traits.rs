use robopath_core::Cell;

/// Minimal pathfinding interface: neighbour enumeration.
pub trait Pather {
    /// Append neighbors of `c` into `buf`. The caller clears `buf` before
    /// calling. The order of appended cells is part of the search's
    /// tie-breaking and must be stable.
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Cell, to: Cell) -> f64;
}

/// Full A* pather with an estimate of the remaining cost.
pub trait AstarPather: WeightedPather {
    /// Estimated cost from `from` to `to`. A* returns optimal paths only
    /// when this never overestimates (admissible).
    fn estimate(&self, from: Cell, to: Cell) -> f64;
}
