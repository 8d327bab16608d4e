use std::f64::consts::SQRT_2;

use robopath_core::{Cell, Dir, Walls};

use crate::heuristic::Heuristic;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Cost of an orthogonal step.
pub const ORTHOGONAL_COST: f64 = 1.0;

/// Cost of a diagonal step.
pub const DIAGONAL_COST: f64 = SQRT_2;

/// Cost of a single step between adjacent cells `from` and `to`.
#[inline]
pub fn step_cost(from: Cell, to: Cell) -> f64 {
    if from.x != to.x && from.y != to.y {
        DIAGONAL_COST
    } else {
        ORTHOGONAL_COST
    }
}

/// Allowed step directions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Movement {
    /// Orthogonal steps only.
    Four,
    /// Orthogonal and diagonal steps.
    #[default]
    Eight,
}

impl Movement {
    /// Directions in enumeration order.
    #[inline]
    pub fn dirs(self) -> &'static [Dir] {
        match self {
            Movement::Four => &Dir::CARDINAL,
            Movement::Eight => &Dir::ALL,
        }
    }

    #[inline]
    pub fn allows(self, dir: Dir) -> bool {
        self == Movement::Eight || !dir.is_diagonal()
    }
}

/// [`AstarPather`] over a [`Walls`] set: a neighbour is any allowed step
/// that stays on the grid and does not land on a wall.
///
/// With `corner_cutting` disabled, a diagonal step is also refused when
/// either orthogonal cell it slides past is a wall.
#[derive(Debug, Clone, Copy)]
pub struct GridPather<'a> {
    pub walls: &'a Walls,
    pub movement: Movement,
    pub corner_cutting: bool,
    pub heuristic: Heuristic,
}

impl<'a> GridPather<'a> {
    pub fn new(walls: &'a Walls) -> Self {
        Self {
            walls,
            movement: Movement::default(),
            corner_cutting: true,
            heuristic: Heuristic::default(),
        }
    }

    /// Whether the single step `from -> from.step(dir)` is allowed.
    pub fn can_step(&self, from: Cell, dir: Dir) -> bool {
        if !self.movement.allows(dir) {
            return false;
        }
        let to = from.step(dir);
        if !self.walls.is_passable(to) {
            return false;
        }
        if dir.is_diagonal() && !self.corner_cutting {
            let (dx, dy) = dir.delta();
            if self.walls.contains(from.shift(dx, 0)) || self.walls.contains(from.shift(0, dy)) {
                return false;
            }
        }
        true
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        for &dir in self.movement.dirs() {
            if self.can_step(c, dir) {
                buf.push(c.step(dir));
            }
        }
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, from: Cell, to: Cell) -> f64 {
        step_cost(from, to)
    }
}

impl AstarPather for GridPather<'_> {
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        self.heuristic.estimate(from, to)
    }
}
