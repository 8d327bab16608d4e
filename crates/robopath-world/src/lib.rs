//! Interactive state for the robopath demo.
//!
//! A [`World`] holds the robot, its goal and the walls of one board, and
//! exposes the transitions a front end drives: manual moves, wall editing,
//! solve animations, hints and resets. Boards can be loaded from and drawn
//! as text with the [`layout`] module.

mod animation;
mod config;
pub mod layout;
mod world;

pub use animation::SolveAnimation;
pub use config::{DEFAULT_GRID_SIZE, WorldConfig};
pub use layout::{Layout, LayoutError, render};
pub use world::{
    AnimationEvent, BlockReason, MoveOutcome, SolveOutcome, World, WorldError, WorldStats,
};
