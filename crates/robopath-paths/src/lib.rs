//! Pathfinding for a robot on a walled square grid.
//!
//! - **A\*** shortest-path search ([`Pathfinder::search`], [`search`])
//! - **Dijkstra** multi-source cost maps ([`Pathfinder::cost_map`],
//!   [`dijkstra_map`])
//! - **Goal sampling** on free cells ([`sample`], [`GoalSampler`])
//!
//! Searches are stateless: every call allocates its own open set and node
//! table, so identical input always yields the identical [`Path`].
//!
//! # Cost model
//!
//! Orthogonal steps cost [`ORTHOGONAL_COST`] (1), diagonal steps cost
//! [`DIAGONAL_COST`] (`√2`). [`Movement::Four`] disables diagonals.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbour enumeration |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`GridPather`] implements all three over a [`Walls`](robopath_core::Walls)
//! set.

mod astar;
mod dijkstra;
mod error;
mod heuristic;
mod neighbors;
mod path;
mod pathfinder;
mod sampler;
mod traits;

pub use astar::{astar, search};
pub use dijkstra::{CostMap, dijkstra_map};
pub use error::{Endpoint, PathError, SampleError};
pub use heuristic::{Heuristic, ParseHeuristicError, chebyshev, euclidean, manhattan, octile};
pub use neighbors::{DIAGONAL_COST, GridPather, Movement, ORTHOGONAL_COST, step_cost};
pub use path::Path;
pub use pathfinder::{Pathfinder, SearchConfig};
pub use sampler::{GoalSampler, MAX_SAMPLE_ATTEMPTS, sample};
pub use traits::{AstarPather, Pather, WeightedPather};
