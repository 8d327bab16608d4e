//! The mutable robot world and its transitions.

use std::fmt;

use robopath_core::{Cell, CoreError, Dir, GridSize, Walls};
use robopath_paths::{
    GoalSampler, Heuristic, Movement, Path, PathError, Pathfinder, SampleError, euclidean,
};

use crate::animation::SolveAnimation;
use crate::config::WorldConfig;

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Why a manual move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// A solve animation is running.
    Animating,
    /// Diagonal step while the robot moves orthogonally only.
    Direction,
    OffGrid,
    Wall,
}

/// Result of [`World::move_robot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The robot did not move.
    Blocked(BlockReason),
    Moved(Cell),
    /// The robot stepped onto the goal and a new goal was placed.
    ReachedGoal { robot: Cell, new_goal: Cell },
}

/// Result of [`World::solve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A path was found; the animation will take `steps` ticks.
    Started { steps: usize },
    NoPath,
}

/// Result of one [`World::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    /// One more cell of the path is shown.
    Step(Cell),
    /// The robot arrived and a new goal was placed.
    Arrived { robot: Cell, new_goal: Cell },
    /// The path ended short of the goal; it stays on display.
    Stopped,
}

/// Figures shown next to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldStats {
    /// Straight-line distance from robot to goal, rounded.
    pub distance: u32,
    pub wall_count: usize,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors returned by world transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldError {
    Core(CoreError),
    Path(PathError),
    Sample(SampleError),
    /// Walls can only be toggled in edit mode.
    EditModeDisabled,
    /// The cell holds the robot, the goal or the start.
    Occupied(Cell),
    /// A solve animation is running.
    Busy,
    /// The robot or goal was placed on a wall.
    BlockedEndpoint(Cell),
    /// The robot starts on the goal.
    GoalAtStart(Cell),
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core(e) => e.fmt(f),
            Self::Path(e) => e.fmt(f),
            Self::Sample(e) => e.fmt(f),
            Self::EditModeDisabled => f.write_str("walls can only be edited in edit mode"),
            Self::Occupied(c) => write!(f, "cell {c} is occupied"),
            Self::Busy => f.write_str("a solve animation is in progress"),
            Self::BlockedEndpoint(c) => write!(f, "cell {c} is a wall"),
            Self::GoalAtStart(c) => write!(f, "start and goal are both {c}"),
        }
    }
}

impl std::error::Error for WorldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Core(e) => Some(e),
            Self::Path(e) => Some(e),
            Self::Sample(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoreError> for WorldError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}

impl From<PathError> for WorldError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

impl From<SampleError> for WorldError {
    fn from(e: SampleError) -> Self {
        Self::Sample(e)
    }
}

// ---------------------------------------------------------------------------
// World
// ---------------------------------------------------------------------------

/// All mutable state of one robot session.
///
/// Every transition runs to completion before the next one; searches only
/// ever see a consistent snapshot of robot, goal and walls.
#[derive(Debug)]
pub struct World {
    walls: Walls,
    start: Cell,
    robot: Cell,
    goal: Cell,
    pathfinder: Pathfinder,
    robot_movement: Movement,
    edit_mode: bool,
    path: Path,
    hint: Option<Cell>,
    animation: Option<SolveAnimation>,
    sampler: GoalSampler,
}

impl World {
    /// Build a world, validating every cell of the configuration.
    pub fn new(config: WorldConfig) -> Result<Self, WorldError> {
        let walls = Walls::from_cells(config.size, config.walls)?;
        let start = config.size.check(config.start)?;
        let goal = config.size.check(config.goal)?;
        for c in [start, goal] {
            if walls.contains(c) {
                return Err(WorldError::BlockedEndpoint(c));
            }
        }
        if start == goal {
            return Err(WorldError::GoalAtStart(start));
        }
        log::info!(
            "world: {} board, {} walls, robot {start}, goal {goal}",
            config.size,
            walls.len()
        );
        Ok(Self {
            walls,
            start,
            robot: start,
            goal,
            pathfinder: Pathfinder::new(config.search),
            robot_movement: config.robot_movement,
            edit_mode: false,
            path: Path::empty(),
            hint: None,
            animation: None,
            sampler: GoalSampler::new(config.seed),
        })
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn size(&self) -> GridSize {
        self.walls.size()
    }

    pub fn walls(&self) -> &Walls {
        &self.walls
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn robot(&self) -> Cell {
        self.robot
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn heuristic(&self) -> Heuristic {
        self.pathfinder.config().heuristic
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// The path left on display after a solve that stopped short.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The cell shown by the last [`hint`](Self::hint) request.
    pub fn hinted(&self) -> Option<Cell> {
        self.hint
    }

    pub fn animation(&self) -> Option<&SolveAnimation> {
        self.animation.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub fn stats(&self) -> WorldStats {
        WorldStats {
            distance: euclidean(self.robot, self.goal).round() as u32,
            wall_count: self.walls.len(),
        }
    }

    /// Number of cells the robot could reach under the search rules.
    pub fn reachable_count(&self) -> usize {
        self.pathfinder
            .cost_map(&[self.robot], &self.walls)
            .reachable_count()
    }

    // -----------------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------------

    pub fn set_heuristic(&mut self, heuristic: Heuristic) {
        let config = self.pathfinder.config().with_heuristic(heuristic);
        self.pathfinder = Pathfinder::new(config);
    }

    pub fn set_edit_mode(&mut self, on: bool) {
        self.edit_mode = on;
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Move the robot one step. Refused moves leave the world unchanged.
    pub fn move_robot(&mut self, dir: Dir) -> Result<MoveOutcome, WorldError> {
        if self.is_animating() {
            return Ok(MoveOutcome::Blocked(BlockReason::Animating));
        }
        if !self.robot_movement.allows(dir) {
            return Ok(MoveOutcome::Blocked(BlockReason::Direction));
        }
        let to = self.robot.step(dir);
        if !self.size().contains(to) {
            return Ok(MoveOutcome::Blocked(BlockReason::OffGrid));
        }
        if self.walls.contains(to) {
            return Ok(MoveOutcome::Blocked(BlockReason::Wall));
        }

        if to == self.goal {
            let new_goal = self.sampler.sample(&self.walls, to)?;
            self.robot = to;
            self.goal = new_goal;
            self.clear_overlays();
            log::info!("world: robot reached goal at {to}, next goal {new_goal}");
            return Ok(MoveOutcome::ReachedGoal {
                robot: to,
                new_goal,
            });
        }

        log::debug!("world: robot {} -> {to}", self.robot);
        self.robot = to;
        self.clear_overlays();
        Ok(MoveOutcome::Moved(to))
    }

    /// Add or remove the wall at `cell` (edit mode only). Returns whether
    /// the cell is a wall afterwards.
    pub fn toggle_wall(&mut self, cell: Cell) -> Result<bool, WorldError> {
        if !self.edit_mode {
            return Err(WorldError::EditModeDisabled);
        }
        if self.is_animating() {
            return Err(WorldError::Busy);
        }
        self.size().check(cell)?;
        if cell == self.robot || cell == self.goal || cell == self.start {
            return Err(WorldError::Occupied(cell));
        }
        let is_wall = self.walls.toggle(cell)?;
        self.clear_overlays();
        log::debug!(
            "world: {} wall at {cell}",
            if is_wall { "added" } else { "removed" }
        );
        Ok(is_wall)
    }

    /// Search from the robot to the goal and start replaying the result.
    pub fn solve(&mut self) -> Result<SolveOutcome, WorldError> {
        if self.is_animating() {
            return Err(WorldError::Busy);
        }
        let path = self.pathfinder.search(self.robot, self.goal, &self.walls)?;
        if path.is_empty() {
            log::info!("world: no path from {} to {}", self.robot, self.goal);
            return Ok(SolveOutcome::NoPath);
        }
        let steps = path.steps();
        log::info!(
            "world: solving {} -> {} in {steps} steps ({})",
            self.robot,
            self.goal,
            self.heuristic()
        );
        self.clear_overlays();
        self.animation = Some(SolveAnimation::new(path));
        Ok(SolveOutcome::Started { steps })
    }

    /// Advance the solve animation by one frame. `Ok(None)` when no
    /// animation is running.
    pub fn tick(&mut self) -> Result<Option<AnimationEvent>, WorldError> {
        let Some(anim) = self.animation.as_mut() else {
            return Ok(None);
        };
        if let Some(cell) = anim.advance() {
            return Ok(Some(AnimationEvent::Step(cell)));
        }

        let path = match self.animation.take() {
            Some(anim) => anim.into_path(),
            None => return Ok(None),
        };
        match path.last() {
            Some(end) if end == self.goal => {
                let new_goal = self.sampler.sample(&self.walls, end)?;
                self.robot = end;
                self.goal = new_goal;
                self.clear_overlays();
                log::info!("world: robot arrived at {end}, next goal {new_goal}");
                Ok(Some(AnimationEvent::Arrived {
                    robot: end,
                    new_goal,
                }))
            }
            // Searches only return routes that end on the goal; anything
            // else replayed here is left on display for the caller.
            _ => {
                self.path = path;
                Ok(Some(AnimationEvent::Stopped))
            }
        }
    }

    /// Run the animation to completion, returning the final event.
    pub fn finish(&mut self) -> Result<Option<AnimationEvent>, WorldError> {
        let mut last = None;
        while let Some(event) = self.tick()? {
            last = Some(event);
        }
        Ok(last)
    }

    /// Show the next step towards the goal, if there is one.
    pub fn hint(&mut self) -> Result<Option<Cell>, WorldError> {
        if self.is_animating() {
            return Err(WorldError::Busy);
        }
        let path = self.pathfinder.search(self.robot, self.goal, &self.walls)?;
        self.clear_overlays();
        self.hint = path.next_step();
        Ok(self.hint)
    }

    /// Put the robot back on the start cell and place a fresh goal.
    pub fn reset(&mut self) -> Result<Cell, WorldError> {
        let new_goal = self.sampler.sample(&self.walls, self.start)?;
        self.animation = None;
        self.robot = self.start;
        self.goal = new_goal;
        self.clear_overlays();
        log::info!("world: reset, robot {}, goal {new_goal}", self.start);
        Ok(new_goal)
    }

    fn clear_overlays(&mut self) {
        self.path = Path::empty();
        self.hint = None;
    }
}
