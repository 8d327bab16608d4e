use std::fmt;

use robopath_core::{Cell, GridSize};

/// Which end of a search an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
        }
    }
}

/// Errors that can occur when searching for a path.
///
/// A goal that simply cannot be reached is not an error: the search
/// returns an empty [`Path`](crate::Path) instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The start or goal cell lies outside the grid.
    OutOfBounds {
        endpoint: Endpoint,
        cell: Cell,
        size: GridSize,
    },
    /// The search expanded `expanded` nodes without settling the goal.
    BudgetExhausted { expanded: usize },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                endpoint,
                cell,
                size,
            } => write!(f, "{endpoint} {cell} is outside the {size} grid"),
            Self::BudgetExhausted { expanded } => {
                write!(f, "search gave up after expanding {expanded} nodes")
            }
        }
    }
}

impl std::error::Error for PathError {}

/// Errors that can occur when sampling a free cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// Every cell is a wall or the excluded cell.
    NoFreeCell { size: GridSize },
    /// The excluded cell lies outside the grid.
    OutOfBounds { cell: Cell, size: GridSize },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoFreeCell { size } => write!(f, "no free cell left on the {size} grid"),
            Self::OutOfBounds { cell, size } => {
                write!(f, "excluded cell {cell} is outside the {size} grid")
            }
        }
    }
}

impl std::error::Error for SampleError {}
