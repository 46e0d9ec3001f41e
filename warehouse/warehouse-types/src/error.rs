//! Failure taxonomy for task execution and scheduling.
//!
//! None of these are fatal to the simulation: each aborts only the
//! current delivery request, which has already been consumed from the
//! queue and is never retried automatically.

/// Which leg of a task a robot was travelling when a path failure
/// occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TravelPhase {
    /// En route from the robot's cell to the item's cell.
    TowardItem,
    /// En route from the item's cell to the destination cell.
    TowardDestination,
}

impl std::fmt::Display for TravelPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TowardItem => write!(f, "toward the item"),
            Self::TowardDestination => write!(f, "toward the destination"),
        }
    }
}

/// Reasons a task executor aborts the transfer it was driving.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TaskFailure {
    /// The pickup would push the robot's load past its capacity.
    #[error("load of {load} kg would exceed capacity {capacity} kg")]
    CapacityExceeded {
        /// Load the pickup would have produced, in kilograms.
        load: u64,
        /// The robot's capacity in kilograms.
        capacity: u32,
    },

    /// No obstacle-avoiding path exists on the current grid.
    #[error("no path exists {phase}")]
    PathUnreachable {
        /// The leg of the task that became unreachable.
        phase: TravelPhase,
    },

    /// The destination cell is occupied by goods of a different name.
    #[error("destination is occupied by {occupant}")]
    DestinationConflict {
        /// Name of the goods already at the destination.
        occupant: String,
    },

    /// A blocked robot found no reachable free cell to rest in.
    #[error("no free resting cell is reachable")]
    NoRestingCellAvailable,
}

impl TaskFailure {
    /// Returns `true` if this failure is a path-reachability failure.
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::PathUnreachable { .. })
    }
}

/// Reasons the scheduler aborts a delivery request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SchedulingError {
    /// No free item of the requested name exists away from the
    /// destination.
    #[error("no valid items named {name:?} can be moved")]
    NoMatchingItem {
        /// The requested item name.
        name: String,
    },

    /// The requested quantity was zero.
    #[error("requested quantity must be positive")]
    InvalidQuantity,

    /// No free robot can carry the requested quantity of the item.
    #[error("no robot can carry item {name:?}")]
    NoCapableRobot {
        /// The selected item's name.
        name: String,
    },

    /// Every capable robot is walled off from the item.
    #[error("no robot can reach item {name:?} due to obstacles")]
    NoReachableRobot {
        /// The selected item's name.
        name: String,
    },

    /// The assigned robot aborted mid-task.
    #[error(transparent)]
    Task(#[from] TaskFailure),
}
