//! Greedy best-first search and A* over a static grid maze.
//!
//! A [`grid::Board`] holds the maze and the agent; [`moves`] produces the
//! boards one step away; the engines in [`algorithms`] search those boards
//! for one where the agent stands on the goal.

pub mod algorithms;
pub mod comparison;
pub mod config;
pub mod environment;
pub mod error;
pub mod grid;
pub mod heuristic;
pub mod moves;
pub mod statistics;

pub use error::MazeError;
