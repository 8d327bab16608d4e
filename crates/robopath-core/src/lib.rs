//! **robopath-core**: grid primitives shared across the *robopath*
//! workspace.
//!
//! This crate provides the coordinate type ([`Cell`]), square grid bounds
//! ([`GridSize`]), the obstacle set ([`Walls`]) and the eight compass
//! directions ([`Dir`]). Everything here is a plain value type; the search
//! engine lives in `robopath-paths` and the mutable game state in
//! `robopath-world`.

pub mod geom;
pub mod walls;

pub use geom::{Cell, CoreError, Dir, GridSize};
pub use walls::Walls;
