//! Boards described as ASCII art.
//!
//! ```text
//! R.#..
//! ..#..
//! ..#.G
//! .....
//! .....
//! ```
//!
//! `#` is a wall, `.` open floor, `R` the robot's start and `G` the goal.
//! Lines must all have the same width and the board must be square.

use std::fmt;

use robopath_core::{Cell, GridSize};

use crate::config::WorldConfig;
use crate::world::World;

pub const WALL: char = '#';
pub const FLOOR: char = '.';
pub const ROBOT: char = 'R';
pub const GOAL: char = 'G';
pub const PATH: char = '*';
pub const HINT: char = '+';

/// A parsed board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub size: GridSize,
    pub start: Cell,
    pub goal: Cell,
    pub walls: Vec<Cell>,
}

impl Layout {
    /// Parse a board. Surrounding whitespace of the whole text is ignored,
    /// but not of individual lines.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let mut width: Option<usize> = None;
        let mut height = 0;
        let mut start = None;
        let mut goal = None;
        let mut walls = Vec::new();

        for (y, line) in s.lines().enumerate() {
            let w = line.chars().count();
            match width {
                None => width = Some(w),
                Some(expected) if expected != w => {
                    return Err(LayoutError::InconsistentWidth {
                        line: y,
                        expected,
                        found: w,
                    });
                }
                _ => {}
            }
            for (x, ch) in line.chars().enumerate() {
                let c = Cell::new(x as i32, y as i32);
                match ch {
                    WALL => walls.push(c),
                    FLOOR => {}
                    ROBOT => place(&mut start, ROBOT, c)?,
                    GOAL => place(&mut goal, GOAL, c)?,
                    _ => return Err(LayoutError::InvalidChar { ch, cell: c }),
                }
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width != height {
            return Err(LayoutError::NotSquare { width, height });
        }
        let size = i32::try_from(width)
            .ok()
            .and_then(|n| GridSize::new(n).ok())
            .ok_or(LayoutError::NotSquare { width, height })?;
        Ok(Self {
            size,
            start: start.ok_or(LayoutError::MissingMarker(ROBOT))?,
            goal: goal.ok_or(LayoutError::MissingMarker(GOAL))?,
            walls,
        })
    }

    /// A world configuration for this board, with default search options.
    pub fn into_config(self) -> WorldConfig {
        WorldConfig {
            size: self.size,
            start: self.start,
            goal: self.goal,
            walls: self.walls,
            ..WorldConfig::default()
        }
    }
}

fn place(slot: &mut Option<Cell>, marker: char, c: Cell) -> Result<(), LayoutError> {
    if let Some(first) = *slot {
        return Err(LayoutError::DuplicateMarker {
            marker,
            first,
            second: c,
        });
    }
    *slot = Some(c);
    Ok(())
}

/// Draw the world in layout notation, one line per row.
///
/// The animated path (or the path left after a stopped solve) is drawn
/// with `*` and the hint cell with `+`; robot and goal are drawn on top.
pub fn render(world: &World) -> String {
    let size = world.size();
    let n = size.get() as usize;
    let mut board = vec![FLOOR; size.area()];

    for c in world.walls().iter() {
        if let Some(i) = size.index(c) {
            board[i] = WALL;
        }
    }
    let shown = match world.animation() {
        Some(anim) => anim.shown(),
        None => world.path().cells(),
    };
    for &c in shown {
        if let Some(i) = size.index(c) {
            board[i] = PATH;
        }
    }
    if let Some(i) = world.hinted().and_then(|c| size.index(c)) {
        board[i] = HINT;
    }
    if let Some(i) = size.index(world.goal()) {
        board[i] = GOAL;
    }
    if let Some(i) = size.index(world.robot()) {
        board[i] = ROBOT;
    }

    let mut out = String::with_capacity(n * (n + 1));
    for row in board.chunks(n) {
        out.extend(row);
        out.push('\n');
    }
    out
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A line differs in width from the first one.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// The board is empty or not square.
    NotSquare { width: usize, height: usize },
    InvalidChar { ch: char, cell: Cell },
    /// No robot or goal marker.
    MissingMarker(char),
    DuplicateMarker {
        marker: char,
        first: Cell,
        second: Cell,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "layout: line {line} has width {found}, expected {expected}"
            ),
            Self::NotSquare { width, height } => {
                write!(f, "layout: board is {width}x{height}, must be square")
            }
            Self::InvalidChar { ch, cell } => {
                write!(f, "layout: invalid character \u{201c}{ch}\u{201d} at {cell}")
            }
            Self::MissingMarker(m) => write!(f, "layout: no \u{201c}{m}\u{201d} marker"),
            Self::DuplicateMarker {
                marker,
                first,
                second,
            } => write!(
                f,
                "layout: \u{201c}{marker}\u{201d} appears at {first} and {second}"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
