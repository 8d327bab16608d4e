//! Uniform random placement of goals on free cells.

use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};
use robopath_core::{Cell, Walls};

use crate::error::SampleError;

/// Rejection-sampling attempts before falling back to enumerating the free
/// cells.
pub const MAX_SAMPLE_ATTEMPTS: usize = 10_000;

/// Draw a uniformly random cell that is neither a wall nor `excluded`.
///
/// Fails with [`SampleError::NoFreeCell`] when no such cell exists instead
/// of looping forever.
pub fn sample<R: Rng + ?Sized>(
    walls: &Walls,
    excluded: Cell,
    rng: &mut R,
) -> Result<Cell, SampleError> {
    sample_with_attempts(walls, excluded, rng, MAX_SAMPLE_ATTEMPTS)
}

/// [`sample`] with `attempts` rejection draws before enumerating.
pub(crate) fn sample_with_attempts<R: Rng + ?Sized>(
    walls: &Walls,
    excluded: Cell,
    rng: &mut R,
    attempts: usize,
) -> Result<Cell, SampleError> {
    let size = walls.size();
    if !size.contains(excluded) {
        return Err(SampleError::OutOfBounds {
            cell: excluded,
            size,
        });
    }

    let free = walls.free_count() - usize::from(!walls.contains(excluded));
    if free == 0 {
        return Err(SampleError::NoFreeCell { size });
    }

    let n = size.get();
    let is_candidate = |c: Cell| c != excluded && !walls.contains(c);

    for _ in 0..attempts {
        let c = Cell::new(rng.random_range(0..n), rng.random_range(0..n));
        if is_candidate(c) {
            return Ok(c);
        }
    }

    log::warn!(
        "sampler: {attempts} rejections on a {size} grid with {free} free cells, enumerating"
    );
    let k = rng.random_range(0..free);
    size.iter()
        .filter(|&c| is_candidate(c))
        .nth(k)
        .ok_or(SampleError::NoFreeCell { size })
}

/// A seeded source of goal positions.
#[derive(Debug)]
pub struct GoalSampler {
    rng: StdRng,
}

impl GoalSampler {
    /// A sampler whose draws are fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// See [`sample`].
    pub fn sample(&mut self, walls: &Walls, excluded: Cell) -> Result<Cell, SampleError> {
        sample(walls, excluded, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robopath_core::GridSize;

    fn size(n: i32) -> GridSize {
        GridSize::new(n).unwrap()
    }

    #[test]
    fn never_returns_wall_or_excluded() {
        let mut rng = StdRng::seed_from_u64(1);
        for density in [0.0, 0.3, 0.6, 0.9] {
            let mut w = Walls::new(size(8));
            for c in size(8).iter() {
                if rng.random_bool(density) {
                    w.insert(c).unwrap();
                }
            }
            let excluded = Cell::new(0, 0);
            w.remove(excluded).unwrap();
            if w.free_count() <= 1 {
                continue;
            }
            for _ in 0..200 {
                let c = sample(&w, excluded, &mut rng).unwrap();
                assert!(size(8).contains(c));
                assert!(!w.contains(c));
                assert_ne!(c, excluded);
            }
        }
    }

    #[test]
    fn single_free_cell_is_found() {
        let s = size(6);
        let target = Cell::new(5, 4);
        let excluded = Cell::new(0, 0);
        let w = Walls::from_cells(s, s.iter().filter(|&c| c != target && c != excluded)).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            assert_eq!(sample(&w, excluded, &mut rng), Ok(target));
        }
    }

    #[test]
    fn fully_walled_grid_errors() {
        let s = size(3);
        let w = Walls::from_cells(s, s.iter()).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            sample(&w, Cell::new(1, 1), &mut rng),
            Err(SampleError::NoFreeCell { size: s })
        );
    }

    #[test]
    fn only_excluded_cell_free_errors() {
        let s = size(3);
        let excluded = Cell::new(2, 2);
        let w = Walls::from_cells(s, s.iter().filter(|&c| c != excluded)).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            sample(&w, excluded, &mut rng),
            Err(SampleError::NoFreeCell { size: s })
        );
    }

    #[test]
    fn one_by_one_grid_has_no_goal() {
        let w = Walls::new(size(1));
        let mut rng = StdRng::seed_from_u64(0);
        assert!(sample(&w, Cell::new(0, 0), &mut rng).is_err());
    }

    #[test]
    fn excluded_out_of_bounds_errors() {
        let w = Walls::new(size(3));
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            sample(&w, Cell::new(3, 0), &mut rng),
            Err(SampleError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn enumeration_covers_every_free_cell() {
        let s = size(4);
        let excluded = Cell::new(3, 3);
        let w = Walls::from_cells(s, [Cell::new(0, 0), Cell::new(1, 2), Cell::new(2, 1)]).unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let c = sample_with_attempts(&w, excluded, &mut rng, 0).unwrap();
            assert!(!w.contains(c));
            assert_ne!(c, excluded);
            seen.insert(c);
        }
        // 16 cells minus 3 walls minus the excluded cell.
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn enumeration_finds_single_free_cell() {
        let s = size(5);
        let target = Cell::new(2, 3);
        let excluded = Cell::new(4, 0);
        let w = Walls::from_cells(s, s.iter().filter(|&c| c != target && c != excluded)).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..10 {
            assert_eq!(sample_with_attempts(&w, excluded, &mut rng, 0), Ok(target));
        }
        let full = Walls::from_cells(s, s.iter().filter(|&c| c != excluded)).unwrap();
        assert_eq!(
            sample_with_attempts(&full, excluded, &mut rng, 0),
            Err(SampleError::NoFreeCell { size: s })
        );
    }

    #[test]
    fn seeded_sampler_is_reproducible() {
        let w = Walls::from_cells(size(10), [Cell::new(4, 4)]).unwrap();
        let mut a = GoalSampler::new(77);
        let mut b = GoalSampler::new(77);
        for _ in 0..50 {
            assert_eq!(
                a.sample(&w, Cell::new(0, 0)),
                b.sample(&w, Cell::new(0, 0))
            );
        }
    }

    #[test]
    fn draws_cover_free_cells() {
        let w = Walls::from_cells(size(3), [Cell::new(1, 1)]).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(sample(&w, Cell::new(0, 0), &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 7);
    }
}
