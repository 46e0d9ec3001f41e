//! Grid geometry foundation for the warehouse simulation.
//!
//! This crate provides the discrete 2D building blocks shared by the
//! pathfinding and warehouse crates:
//!
//! - [`CellCoord`]: an integer grid cell with Manhattan distance and
//!   4-connected neighbor enumeration
//! - [`GridDims`]: validated warehouse dimensions with bounds checks
//!
//! # Example
//!
//! ```
//! use wh_spatial::{CellCoord, GridDims};
//!
//! let dims = GridDims::new(20, 20).unwrap();
//! let cell = CellCoord::new(3, 4);
//!
//! assert!(dims.contains(cell));
//! assert_eq!(CellCoord::origin().manhattan_distance(cell), 7);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for all types

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod cell;
pub mod dims;
pub mod error;

pub use cell::CellCoord;
pub use dims::GridDims;
pub use error::SpatialError;
