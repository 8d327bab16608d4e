use std::cmp::Ordering;

use robopath_core::{Cell, Walls};

use crate::heuristic::Heuristic;
use crate::neighbors::{GridPather, Movement};

// ---------------------------------------------------------------------------
// Internal node for A*/Dijkstra priority-queue searches
// ---------------------------------------------------------------------------

/// Sentinel parent index for the start node and undiscovered cells.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Best known record for one cell. Replaced wholesale when a strictly
/// cheaper route is found.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub(crate) g: f64,
    pub(crate) parent: usize,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            parent: NO_PARENT,
            closed: false,
        }
    }
}

impl Node {
    #[inline]
    pub(crate) fn discovered(&self) -> bool {
        self.g.is_finite()
    }
}

/// Heap entry referencing a node by index.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the smallest `f` first;
/// equal `f` prefers the smaller `h`, then the earlier `seq`. Entries whose
/// `g` no longer matches the node's record are stale and skipped on pop.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) g: f64,
    pub(crate) f: f64,
    pub(crate) h: f64,
    pub(crate) seq: u64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.h.total_cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// SearchConfig
// ---------------------------------------------------------------------------

/// Options for a [`Pathfinder`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    pub movement: Movement,
    /// Allow diagonal steps that slide past a wall corner.
    pub corner_cutting: bool,
    /// Give up with [`PathError::BudgetExhausted`](crate::PathError) after
    /// expanding this many nodes. `None` searches until the open set is
    /// exhausted.
    pub max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            heuristic: Heuristic::Manhattan,
            movement: Movement::Eight,
            corner_cutting: true,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_movement(mut self, movement: Movement) -> Self {
        self.movement = movement;
        self
    }

    pub fn with_corner_cutting(mut self, allowed: bool) -> Self {
        self.corner_cutting = allowed;
        self
    }

    pub fn with_max_expansions(mut self, limit: usize) -> Self {
        self.max_expansions = Some(limit);
        self
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Stateless search front-end: holds only its [`SearchConfig`].
///
/// Every query allocates its own open set and node table and releases them
/// on return, so a `Pathfinder` can be shared freely and two calls with
/// the same input always return the same [`Path`](crate::Path).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pathfinder {
    config: SearchConfig,
}

impl Pathfinder {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The [`GridPather`] this configuration searches with over `walls`.
    pub fn pather<'a>(&self, walls: &'a Walls) -> GridPather<'a> {
        GridPather {
            walls,
            movement: self.config.movement,
            corner_cutting: self.config.corner_cutting,
            heuristic: self.config.heuristic,
        }
    }

    /// Whether `to` is a single allowed step from `from` on `walls`.
    pub fn is_step(&self, walls: &Walls, from: Cell, to: Cell) -> bool {
        robopath_core::Dir::between(from, to).is_some_and(|d| self.pather(walls).can_step(from, d))
    }
}
