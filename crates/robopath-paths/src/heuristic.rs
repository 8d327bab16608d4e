//! Distance estimates between cells.

use std::f64::consts::SQRT_2;
use std::fmt;
use std::str::FromStr;

use robopath_core::Cell;

#[inline]
fn deltas(a: Cell, b: Cell) -> (f64, f64) {
    (f64::from((a.x - b.x).abs()), f64::from((a.y - b.y).abs()))
}

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> f64 {
    let (dx, dy) = deltas(a, b);
    dx + dy
}

/// Euclidean (L2) distance between two cells.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f64 {
    let (dx, dy) = deltas(a, b);
    (dx * dx + dy * dy).sqrt()
}

/// Octile distance: the obstacle-free cost of an 8-connected route with
/// unit orthogonal and `√2` diagonal steps.
#[inline]
pub fn octile(a: Cell, b: Cell) -> f64 {
    let (dx, dy) = deltas(a, b);
    let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
    (hi - lo) + SQRT_2 * lo
}

/// Chebyshev (L∞) distance between two cells.
#[inline]
pub fn chebyshev(a: Cell, b: Cell) -> f64 {
    let (dx, dy) = deltas(a, b);
    dx.max(dy)
}

/// Which distance estimate guides the search.
///
/// `Manhattan` is exact on 4-connected grids but overestimates diagonal
/// moves on 8-connected ones; the other three never overestimate under
/// either movement mode.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
    Octile,
    Chebyshev,
}

impl Heuristic {
    pub const ALL: [Heuristic; 4] = [
        Heuristic::Manhattan,
        Heuristic::Euclidean,
        Heuristic::Octile,
        Heuristic::Chebyshev,
    ];

    /// Estimated cost from `from` to `to`. Never negative.
    #[inline]
    pub fn estimate(self, from: Cell, to: Cell) -> f64 {
        match self {
            Heuristic::Manhattan => manhattan(from, to),
            Heuristic::Euclidean => euclidean(from, to),
            Heuristic::Octile => octile(from, to),
            Heuristic::Chebyshev => chebyshev(from, to),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
            Heuristic::Octile => "octile",
            Heuristic::Chebyshev => "chebyshev",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heuristic::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseHeuristicError(s.to_string()))
    }
}

/// An unrecognised heuristic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHeuristicError(pub String);

impl fmt::Display for ParseHeuristicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown heuristic \u{201c}{}\u{201d} (expected manhattan, euclidean, octile or chebyshev)",
            self.0
        )
    }
}

impl std::error::Error for ParseHeuristicError {}
