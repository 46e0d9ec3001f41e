//! Error types for path planning.

use wh_spatial::CellCoord;

/// Errors that can occur during path planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum PlanError {
    /// An obstacle was placed outside the grid. Rejected at the point
    /// of the call; the obstacle set is unchanged.
    #[error("obstacle position {cell} is out of bounds")]
    OutOfBounds {
        /// The offending cell.
        cell: CellCoord,
    },

    /// The start cell is blocked or outside the grid.
    ///
    /// The caller manages the obstacle set and must never mark its own
    /// start cell; this error means it did, or the start is invalid.
    #[error("start position {cell} is blocked")]
    StartBlocked {
        /// The start cell.
        cell: CellCoord,
    },

    /// The goal cell is blocked or outside the grid.
    #[error("goal position {cell} is blocked")]
    GoalBlocked {
        /// The goal cell.
        cell: CellCoord,
    },

    /// No path exists through the free cells.
    #[error("no path found from {start} to {goal}")]
    NoPathFound {
        /// The start cell.
        start: CellCoord,
        /// The goal cell.
        goal: CellCoord,
    },
}

impl PlanError {
    /// Returns `true` if this is a "no path found" error.
    #[must_use]
    pub const fn is_no_path_found(&self) -> bool {
        matches!(self, Self::NoPathFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_display() {
        let error = PlanError::OutOfBounds {
            cell: CellCoord::new(9, 9),
        };
        assert!(error.to_string().contains("(9, 9)"));
        assert!(error.to_string().contains("out of bounds"));
    }

    #[test]
    fn test_no_path_found_display() {
        let error = PlanError::NoPathFound {
            start: CellCoord::new(0, 0),
            goal: CellCoord::new(3, 3),
        };
        assert!(error.is_no_path_found());
        assert!(error.to_string().contains("no path found"));
    }

    #[test]
    fn test_blocked_displays() {
        let start = PlanError::StartBlocked {
            cell: CellCoord::origin(),
        };
        assert!(start.to_string().contains("start position"));
        assert!(!start.is_no_path_found());

        let goal = PlanError::GoalBlocked {
            cell: CellCoord::origin(),
        };
        assert!(goal.to_string().contains("goal position"));
    }
}
