//! Grid path planning for the warehouse simulation.
//!
//! This crate provides the two searches the scheduler and executor
//! rely on, both built on the `pathfinding` crate:
//!
//! - [`PathPlanner`]: A* shortest paths over a caller-managed obstacle
//!   set (4-connected, unit step cost, Manhattan heuristic)
//! - [`nearest_free_cell`]: breadth-first search for the closest cell a
//!   predicate accepts, used for rest positions and concessions
//!
//! # Quick Start
//!
//! ```
//! use warehouse_pathfind::PathPlanner;
//! use wh_spatial::{CellCoord, GridDims};
//!
//! let dims = GridDims::new(5, 5).unwrap();
//! let mut planner = PathPlanner::new(dims);
//! planner.set_obstacle(CellCoord::new(1, 1)).unwrap();
//!
//! let path = planner
//!     .find_path(CellCoord::new(0, 0), CellCoord::new(4, 4))
//!     .unwrap();
//! assert_eq!(path.first(), Some(&CellCoord::new(0, 0)));
//! assert_eq!(path.last(), Some(&CellCoord::new(4, 4)));
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod error;
pub mod planner;
pub mod rest;

pub use error::PlanError;
pub use planner::PathPlanner;
pub use rest::nearest_free_cell;
