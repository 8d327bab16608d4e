use std::collections::BinaryHeap;

use robopath_core::{Cell, GridSize, Walls};

use crate::pathfinder::{Node, NodeRef, Pathfinder};
use crate::traits::WeightedPather;

/// Best known cost from the nearest source to every cell of a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMap {
    size: GridSize,
    costs: Vec<f64>,
}

impl CostMap {
    /// Cost to reach `c`, or `None` when off-grid or unreached.
    pub fn at(&self, c: Cell) -> Option<f64> {
        self.size
            .index(c)
            .map(|i| self.costs[i])
            .filter(|g| g.is_finite())
    }

    /// Number of reached cells, sources included.
    pub fn reachable_count(&self) -> usize {
        self.costs.iter().filter(|g| g.is_finite()).count()
    }

    /// Reached cells with their cost, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, f64)> + '_ {
        self.costs
            .iter()
            .enumerate()
            .filter(|(_, g)| g.is_finite())
            .map(|(i, &g)| (self.size.cell(i), g))
    }
}

/// Compute a multi-source Dijkstra cost map.
///
/// Every in-grid source starts at cost 0; off-grid sources are ignored.
/// Expansion stops at cells whose cumulative cost would exceed `max_cost`
/// (pass `f64::INFINITY` for no limit).
pub fn dijkstra_map<P: WeightedPather>(
    pather: &P,
    size: GridSize,
    sources: &[Cell],
    max_cost: f64,
) -> CostMap {
    let mut nodes = vec![Node::default(); size.area()];
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut seq: u64 = 0;

    // Seed sources.
    for &src in sources {
        if let Some(si) = size.index(src) {
            if nodes[si].g == 0.0 {
                continue;
            }
            nodes[si].g = 0.0;
            open.push(NodeRef {
                idx: si,
                g: 0.0,
                f: 0.0,
                h: 0.0,
                seq,
            });
            seq += 1;
        }
    }

    let mut nbuf: Vec<Cell> = Vec::with_capacity(8);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        let cn = nodes[ci];
        if cn.closed || current.g > cn.g {
            continue;
        }
        nodes[ci].closed = true;

        let cp = size.cell(ci);
        nbuf.clear();
        pather.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = size.index(np) else {
                continue;
            };
            let tentative = cn.g + pather.cost(cp, np);
            if tentative > max_cost {
                continue;
            }

            let n = &mut nodes[ni];
            if n.closed || tentative >= n.g {
                continue;
            }
            n.g = tentative;
            n.parent = ci;
            open.push(NodeRef {
                idx: ni,
                g: tentative,
                f: tentative,
                h: 0.0,
                seq,
            });
            seq += 1;
        }
    }

    log::debug!(
        "dijkstra: {} sources reached {} cells",
        sources.len(),
        nodes.iter().filter(|n| n.discovered()).count()
    );

    CostMap {
        size,
        costs: nodes.into_iter().map(|n| n.g).collect(),
    }
}

impl Pathfinder {
    /// Cost from the nearest of `sources` to every reachable cell, using
    /// this pathfinder's movement and corner-cutting rules.
    pub fn cost_map(&self, sources: &[Cell], walls: &Walls) -> CostMap {
        dijkstra_map(&self.pather(walls), walls.size(), sources, f64::INFINITY)
    }
}
