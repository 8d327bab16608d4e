use robopath_core::Cell;
use robopath_paths::Path;

/// Step-by-step replay of a solved path.
///
/// The first frame shows only the start cell; each [`advance`](Self::advance)
/// reveals one more cell until the whole path is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveAnimation {
    path: Path,
    step: usize,
}

impl SolveAnimation {
    pub fn new(path: Path) -> Self {
        Self { path, step: 0 }
    }

    /// The full path being replayed.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cells revealed so far.
    pub fn shown(&self) -> &[Cell] {
        let end = (self.step + 1).min(self.path.len());
        &self.path.cells()[..end]
    }

    /// Reveal the next cell, or return `None` once the path is fully shown.
    pub fn advance(&mut self) -> Option<Cell> {
        if self.is_finished() {
            return None;
        }
        self.step += 1;
        self.path.cells().get(self.step).copied()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.step + 1 >= self.path.len()
    }

    pub fn into_path(self) -> Path {
        self.path
    }
}
