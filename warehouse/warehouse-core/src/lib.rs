//! Warehouse state, greedy task scheduler, and robot task executor.
//!
//! This crate drives the simulation: a [`Warehouse`] holds the grid,
//! the item stacks, the robot fleet, and a FIFO queue of pending
//! destinations. [`Warehouse::run_scheduler`] consumes one destination
//! per call, greedily assigns an item and a robot under capacity and
//! reachability constraints, and executes the transfer through the
//! multi-phase task state machine in [`executor`].
//!
//! Scheduling is cooperative with a single active task at a time:
//! every cell's occupancy is read and mutated while exactly one task is
//! in flight, so correctness rests on that invariant rather than on
//! per-cell locking. Each single-cell move is an observable event
//! boundary reported through the [`Renderer`](warehouse_types::Renderer)
//! collaborator.
//!
//! # Example
//!
//! ```
//! use warehouse_core::Warehouse;
//! use warehouse_types::RobotClass;
//! use wh_spatial::CellCoord;
//!
//! let mut warehouse = Warehouse::new(5, 5).unwrap();
//! warehouse
//!     .place_item("box", 1, CellCoord::new(1, 1), 1, 5)
//!     .unwrap();
//! warehouse
//!     .place_robot(RobotClass::Standard, CellCoord::new(0, 0))
//!     .unwrap();
//! warehouse.enqueue_destination(CellCoord::new(3, 3)).unwrap();
//!
//! let report = warehouse
//!     .run_scheduler("box", 5, &mut (), &mut ())
//!     .unwrap();
//! assert!(report.is_complete());
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod error;
pub mod executor;
mod scheduler;
pub mod warehouse;

pub use error::WarehouseError;
pub use executor::TaskPhase;
pub use warehouse::Warehouse;
