use std::collections::BinaryHeap;

use robopath_core::{Cell, GridSize, Walls};

use crate::error::{Endpoint, PathError};
use crate::heuristic::Heuristic;
use crate::path::Path;
use crate::pathfinder::{NO_PARENT, Node, NodeRef, Pathfinder, SearchConfig};
use crate::traits::AstarPather;

impl Pathfinder {
    /// Compute the cheapest path from `start` to `goal` around `walls`.
    ///
    /// Returns the full path (including both endpoints), `[start]` when the
    /// two coincide, or an empty [`Path`] when the goal cannot be reached.
    /// Out-of-grid endpoints are rejected with [`PathError::OutOfBounds`].
    pub fn search(&self, start: Cell, goal: Cell, walls: &Walls) -> Result<Path, PathError> {
        let size = walls.size();
        check_endpoint(size, Endpoint::Start, start)?;
        check_endpoint(size, Endpoint::Goal, goal)?;

        if start != goal && walls.contains(goal) {
            log::debug!("astar: goal {goal} is a wall, no path");
            return Ok(Path::empty());
        }

        astar(
            &self.pather(walls),
            size,
            start,
            goal,
            self.config().max_expansions,
        )
    }
}

/// Search with default options and the given heuristic.
///
/// Equivalent to `Pathfinder::new(SearchConfig::default().with_heuristic(h))
/// .search(start, goal, walls)`.
pub fn search(
    start: Cell,
    goal: Cell,
    walls: &Walls,
    heuristic: Heuristic,
) -> Result<Path, PathError> {
    Pathfinder::new(SearchConfig::default().with_heuristic(heuristic)).search(start, goal, walls)
}

fn check_endpoint(size: GridSize, endpoint: Endpoint, cell: Cell) -> Result<(), PathError> {
    if size.contains(cell) {
        Ok(())
    } else {
        Err(PathError::OutOfBounds {
            endpoint,
            cell,
            size,
        })
    }
}

/// A* over any [`AstarPather`] on a grid of `size`.
///
/// Each cell is expanded at most once. A discovered cell's record is
/// replaced only by a strictly cheaper route; the superseded heap entry is
/// skipped when it surfaces.
pub fn astar<P: AstarPather>(
    pather: &P,
    size: GridSize,
    from: Cell,
    to: Cell,
    max_expansions: Option<usize>,
) -> Result<Path, PathError> {
    let Some(start_idx) = size.index(from) else {
        return Err(PathError::OutOfBounds {
            endpoint: Endpoint::Start,
            cell: from,
            size,
        });
    };
    let Some(goal_idx) = size.index(to) else {
        return Err(PathError::OutOfBounds {
            endpoint: Endpoint::Goal,
            cell: to,
            size,
        });
    };

    if start_idx == goal_idx {
        return Ok(Path::from(vec![from]));
    }

    let mut nodes = vec![Node::default(); size.area()];
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
    let mut seq: u64 = 0;

    let h0 = pather.estimate(from, to);
    nodes[start_idx].g = 0.0;
    open.push(NodeRef {
        idx: start_idx,
        g: 0.0,
        f: h0,
        h: h0,
        seq,
    });

    let mut nbuf: Vec<Cell> = Vec::with_capacity(8);
    let mut expanded = 0usize;

    let found = 'search: loop {
        let Some(current) = open.pop() else {
            break 'search false;
        };

        let ci = current.idx;
        let node = nodes[ci];

        // Skip stale entries.
        if node.closed || current.g > node.g {
            continue;
        }

        if ci == goal_idx {
            break 'search true;
        }

        if max_expansions.is_some_and(|max| expanded >= max) {
            log::debug!("astar: {from} -> {to} exhausted budget after {expanded} expansions");
            return Err(PathError::BudgetExhausted { expanded });
        }

        expanded += 1;
        nodes[ci].closed = true;
        let current_cell = size.cell(ci);
        log::trace!(
            "astar: expand {current_cell} g={:.3} f={:.3}",
            node.g,
            current.f
        );

        nbuf.clear();
        pather.neighbors(current_cell, &mut nbuf);

        for &nc in nbuf.iter() {
            let Some(ni) = size.index(nc) else {
                continue;
            };
            let n = &mut nodes[ni];
            if n.closed {
                continue;
            }
            let tentative_g = node.g + pather.cost(current_cell, nc);
            if n.discovered() && tentative_g >= n.g {
                continue;
            }

            n.g = tentative_g;
            n.parent = ci;

            let h = pather.estimate(nc, to);
            seq += 1;
            open.push(NodeRef {
                idx: ni,
                g: tentative_g,
                f: tentative_g + h,
                h,
                seq,
            });
        }
    };

    if !found {
        log::debug!("astar: {from} -> {to} unreachable after {expanded} expansions");
        return Ok(Path::empty());
    }

    // Reconstruct path.
    let mut cells = Vec::new();
    let mut ci = goal_idx;
    while ci != NO_PARENT {
        cells.push(size.cell(ci));
        ci = nodes[ci].parent;
    }
    cells.reverse();

    log::debug!(
        "astar: {from} -> {to} found {} cells, cost {:.3}, {expanded} expansions",
        cells.len(),
        nodes[goal_idx].g
    );
    Ok(Path::from(cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dijkstra::dijkstra_map;
    use crate::neighbors::{GridPather, Movement};
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};
    use std::f64::consts::SQRT_2;

    const EPS: f64 = 1e-9;

    fn size(n: i32) -> GridSize {
        GridSize::new(n).unwrap()
    }

    fn walls(n: i32, cells: &[(i32, i32)]) -> Walls {
        Walls::from_cells(size(n), cells.iter().map(|&c| Cell::from(c))).unwrap()
    }

    fn random_walls(rng: &mut StdRng, n: i32, density: f64) -> Walls {
        let mut w = Walls::new(size(n));
        for c in size(n).iter() {
            if rng.random_bool(density) {
                w.insert(c).unwrap();
            }
        }
        w
    }

    fn random_free(rng: &mut StdRng, w: &Walls) -> Cell {
        let n = w.size().get();
        loop {
            let c = Cell::new(rng.random_range(0..n), rng.random_range(0..n));
            if !w.contains(c) {
                return c;
            }
        }
    }

    fn assert_valid(pf: &Pathfinder, w: &Walls, path: &Path, start: Cell) {
        assert_eq!(path.first(), Some(start));
        for pair in path.cells().windows(2) {
            assert!(
                pf.is_step(w, pair[0], pair[1]),
                "invalid step {} -> {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn vertical_wall_with_gap() {
        let w = walls(5, &[(2, 0), (2, 1), (2, 2), (2, 3)]);
        let start = Cell::new(0, 2);
        let goal = Cell::new(4, 2);
        for h in Heuristic::ALL {
            let path = search(start, goal, &w, h).unwrap();
            assert!(path.reaches(goal));
            assert!(path.cells().contains(&Cell::new(2, 4)));
        }
        let path = search(start, goal, &w, Heuristic::Octile).unwrap();
        assert_eq!(path.len(), 5);
        assert!((path.cost() - 4.0 * SQRT_2).abs() < EPS);
    }

    #[test]
    fn vertical_wall_without_corner_cutting() {
        let w = walls(5, &[(2, 0), (2, 1), (2, 2), (2, 3)]);
        let start = Cell::new(0, 2);
        let goal = Cell::new(4, 2);
        let pf = Pathfinder::new(
            SearchConfig::default()
                .with_heuristic(Heuristic::Octile)
                .with_corner_cutting(false),
        );
        let path = pf.search(start, goal, &w).unwrap();
        assert_eq!(path.len(), 7);
        assert!(path.cells().contains(&Cell::new(2, 4)));
        assert!((path.cost() - (4.0 + 2.0 * SQRT_2)).abs() < EPS);
        assert_valid(&pf, &w, &path, start);

        let reference = dijkstra_map(&pf.pather(&w), w.size(), &[start], f64::INFINITY);
        assert!((reference.at(goal).unwrap() - path.cost()).abs() < EPS);
    }

    #[test]
    fn start_equals_goal() {
        let w = walls(4, &[]);
        let c = Cell::new(1, 2);
        let path = search(c, c, &w, Heuristic::Manhattan).unwrap();
        assert_eq!(path.cells(), &[c]);
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn enclosed_goal_is_unreachable() {
        let goal = (3, 3);
        let ring: Vec<(i32, i32)> = robopath_core::Dir::ALL
            .iter()
            .map(|d| {
                let (dx, dy) = d.delta();
                (goal.0 + dx, goal.1 + dy)
            })
            .collect();
        let w = walls(7, &ring);
        let path = search(Cell::new(0, 0), Cell::from(goal), &w, Heuristic::Euclidean).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn goal_on_wall_is_unreachable() {
        let w = walls(4, &[(3, 3)]);
        let path = search(Cell::new(0, 0), Cell::new(3, 3), &w, Heuristic::Octile).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn diagonal_gap_blocks_only_without_corner_cutting() {
        // Two walls touching at a corner leave a diagonal gap.
        let w = walls(2, &[(1, 0), (0, 1)]);
        let from = Cell::new(0, 0);
        let to = Cell::new(1, 1);
        let cutting = Pathfinder::default();
        assert_eq!(cutting.search(from, to, &w).unwrap().len(), 2);
        let strict = Pathfinder::new(SearchConfig::default().with_corner_cutting(false));
        assert!(strict.search(from, to, &w).unwrap().is_empty());
    }

    #[test]
    fn out_of_bounds_endpoints() {
        let w = walls(4, &[]);
        let err = search(Cell::new(-1, 0), Cell::new(1, 1), &w, Heuristic::Manhattan).unwrap_err();
        assert_eq!(
            err,
            PathError::OutOfBounds {
                endpoint: Endpoint::Start,
                cell: Cell::new(-1, 0),
                size: size(4)
            }
        );
        let err = search(Cell::new(0, 0), Cell::new(4, 1), &w, Heuristic::Manhattan).unwrap_err();
        assert!(matches!(
            err,
            PathError::OutOfBounds {
                endpoint: Endpoint::Goal,
                ..
            }
        ));
    }

    #[test]
    fn budget_exhausted() {
        let w = walls(10, &[]);
        let pf = Pathfinder::new(SearchConfig::default().with_max_expansions(3));
        let err = pf.search(Cell::new(0, 0), Cell::new(9, 9), &w).unwrap_err();
        assert_eq!(err, PathError::BudgetExhausted { expanded: 3 });

        // A generous budget behaves like an unbounded search.
        let pf = Pathfinder::new(SearchConfig::default().with_max_expansions(1000));
        assert!(pf.search(Cell::new(0, 0), Cell::new(9, 9), &w).unwrap().reaches(Cell::new(9, 9)));
    }

    #[test]
    fn open_grid_diagonal_is_straight() {
        let w = walls(6, &[]);
        let path = search(Cell::new(0, 0), Cell::new(5, 5), &w, Heuristic::Euclidean).unwrap();
        let want: Vec<Cell> = (0..6).map(|i| Cell::new(i, i)).collect();
        assert_eq!(path.cells(), want.as_slice());
    }

    #[test]
    fn deterministic_for_identical_input() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let w = random_walls(&mut rng, 12, 0.25);
            let start = random_free(&mut rng, &w);
            let goal = random_free(&mut rng, &w);
            for h in Heuristic::ALL {
                let a = search(start, goal, &w, h).unwrap();
                let b = search(start, goal, &w, h).unwrap();
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn optimal_against_dijkstra_reference() {
        let mut rng = StdRng::seed_from_u64(42);
        let admissible = [Heuristic::Euclidean, Heuristic::Octile, Heuristic::Chebyshev];
        for round in 0..60 {
            let density = [0.1, 0.25, 0.4][round % 3];
            let w = random_walls(&mut rng, 14, density);
            let start = random_free(&mut rng, &w);
            let goal = random_free(&mut rng, &w);
            let corner_cutting = round % 2 == 0;

            for h in admissible {
                let pf = Pathfinder::new(
                    SearchConfig::default()
                        .with_heuristic(h)
                        .with_corner_cutting(corner_cutting),
                );
                let reference = dijkstra_map(&pf.pather(&w), w.size(), &[start], f64::INFINITY);
                let path = pf.search(start, goal, &w).unwrap();
                match reference.at(goal) {
                    Some(best) => {
                        assert!(path.reaches(goal));
                        assert_valid(&pf, &w, &path, start);
                        assert!(
                            (path.cost() - best).abs() < EPS,
                            "{h}: cost {} vs reference {best}",
                            path.cost()
                        );
                    }
                    None => assert!(path.is_empty()),
                }
            }
        }
    }

    #[test]
    fn manhattan_is_optimal_on_four_connected_grids() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..30 {
            let w = random_walls(&mut rng, 12, 0.3);
            let start = random_free(&mut rng, &w);
            let goal = random_free(&mut rng, &w);
            let pf = Pathfinder::new(
                SearchConfig::default()
                    .with_heuristic(Heuristic::Manhattan)
                    .with_movement(Movement::Four),
            );
            let reference = dijkstra_map(&pf.pather(&w), w.size(), &[start], f64::INFINITY);
            let path = pf.search(start, goal, &w).unwrap();
            match reference.at(goal) {
                Some(best) => {
                    assert_valid(&pf, &w, &path, start);
                    assert!((path.cost() - best).abs() < EPS);
                }
                None => assert!(path.is_empty()),
            }
        }
    }

    #[test]
    fn manhattan_paths_are_valid_on_eight_connected_grids() {
        let mut rng = StdRng::seed_from_u64(11);
        let pf = Pathfinder::default();
        for _ in 0..30 {
            let w = random_walls(&mut rng, 12, 0.3);
            let start = random_free(&mut rng, &w);
            let goal = random_free(&mut rng, &w);
            let reachable = dijkstra_map(&pf.pather(&w), w.size(), &[start], f64::INFINITY)
                .at(goal)
                .is_some();
            let path = pf.search(start, goal, &w).unwrap();
            assert_eq!(path.reaches(goal), reachable);
            if reachable {
                assert_valid(&pf, &w, &path, start);
            }
        }
    }

    #[test]
    fn generic_astar_accepts_custom_pather() {
        let w = walls(5, &[(1, 1)]);
        let pather = GridPather {
            heuristic: Heuristic::Chebyshev,
            ..GridPather::new(&w)
        };
        let path = astar(&pather, w.size(), Cell::new(0, 0), Cell::new(2, 2), None).unwrap();
        assert!(path.reaches(Cell::new(2, 2)));
        assert!(!path.cells().contains(&Cell::new(1, 1)));
    }
}
