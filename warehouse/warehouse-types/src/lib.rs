//! Domain types for the warehouse simulation.
//!
//! This crate defines the entity model and the vocabulary shared by the
//! scheduler and the task executor:
//!
//! - **Items** ([`Item`], [`ItemKey`]): named stacks of goods with a
//!   derived total weight and a busy/free claim flag
//! - **Robots** ([`Robot`], [`RobotId`], [`RobotClass`]): mobile agents
//!   whose capability profile (capacity, speed, maximum travel distance)
//!   is fixed per class
//! - **Collaborators** ([`Renderer`], [`StatusReporter`]): the explicit
//!   interfaces through which the core reports moves and status text to
//!   the presentation adapter
//! - **Failures** ([`TaskFailure`], [`SchedulingError`]) and the
//!   per-request outcome ([`DeliveryReport`])
//!
//! # Example
//!
//! ```
//! use warehouse_types::{Item, ItemKey, Robot, RobotClass};
//! use wh_spatial::CellCoord;
//!
//! let item = Item::new("box", 1, CellCoord::new(1, 1), 2, 5);
//! assert_eq!(item.weight(), 10);
//!
//! let mut robot = Robot::new(RobotClass::Standard, 1, CellCoord::origin());
//! assert!(robot.can_carry(&item, 5));
//! assert!(robot.pick_up(ItemKey::new(0), &item, 5));
//! assert_eq!(robot.current_load(), 10);
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: Enables serialization/deserialization for the plain-data
//!   types

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod error;
pub mod event;
pub mod item;
pub mod report;
pub mod robot;

pub use error::{SchedulingError, TaskFailure, TravelPhase};
pub use event::{Renderer, StatusReporter};
pub use item::{Item, ItemKey};
pub use report::DeliveryReport;
pub use robot::{CapabilityProfile, Robot, RobotClass, RobotId};
