//! **gridstar-core**: occupancy grid model for eight-connected pathfinding.
//!
//! This crate provides the value types shared by the *gridstar* workspace:
//! the [`Cell`] coordinate, the binary [`Occupancy`] of a grid square, the
//! rectangular [`Grid`] that answers traversability and adjacency queries,
//! and [`MapGen`] for random obstacle layouts.

pub mod cell;
pub mod error;
pub mod grid;
pub mod mapgen;

pub use cell::Cell;
pub use error::GridError;
pub use grid::{Grid, Occupancy};
pub use mapgen::MapGen;
