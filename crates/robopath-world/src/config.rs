use robopath_core::{Cell, GridSize};
use robopath_paths::{Heuristic, Movement, SearchConfig};

/// Size of the default board.
pub const DEFAULT_GRID_SIZE: GridSize = GridSize::from_const(18);

/// Initial state of a [`World`](crate::World).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    pub size: GridSize,
    /// Where the robot starts, and returns to on reset.
    pub start: Cell,
    pub goal: Cell,
    pub walls: Vec<Cell>,
    /// Options for solve and hint searches.
    pub search: SearchConfig,
    /// Steps the robot may take when moved by hand.
    pub robot_movement: Movement,
    /// Seed for goal placement.
    pub seed: u64,
}

impl Default for WorldConfig {
    /// An 18×18 board with a cross-shaped wall between the robot at (2, 2)
    /// and the goal at (12, 12).
    fn default() -> Self {
        let mut walls: Vec<Cell> = (5..10).map(|x| Cell::new(x, 7)).collect();
        walls.extend([5, 6, 8, 9].map(|y| Cell::new(7, y)));
        Self {
            size: DEFAULT_GRID_SIZE,
            start: Cell::new(2, 2),
            goal: Cell::new(12, 12),
            walls,
            search: SearchConfig::default(),
            robot_movement: Movement::Four,
            seed: 0,
        }
    }
}

impl WorldConfig {
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.search.heuristic = heuristic;
        self
    }

    pub fn with_robot_movement(mut self, movement: Movement) -> Self {
        self.robot_movement = movement;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
