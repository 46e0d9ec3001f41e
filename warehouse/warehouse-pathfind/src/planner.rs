//! A* shortest paths over an explicit obstacle set.

use std::collections::HashSet;

use pathfinding::prelude::astar;
use wh_spatial::{CellCoord, GridDims};

use crate::error::PlanError;

/// Plans collision-free paths on a rectangular grid.
///
/// The planner is stateless between calls except for the obstacle set,
/// which the caller owns: the executor rebuilds it from live entity
/// positions before every planning call. The planner never special-cases
/// "my own cell" — callers must not mark their start or goal.
///
/// Paths are shortest 4-connected walks with unit step cost, found by
/// A* with the Manhattan-distance heuristic (admissible and consistent
/// on this grid).
///
/// # Example
///
/// ```
/// use warehouse_pathfind::PathPlanner;
/// use wh_spatial::{CellCoord, GridDims};
///
/// let dims = GridDims::new(5, 5).unwrap();
/// let planner = PathPlanner::new(dims);
///
/// // An obstacle-free walk from (0,0) to (4,4) takes 8 steps: 9 cells.
/// let path = planner
///     .find_path(CellCoord::new(0, 0), CellCoord::new(4, 4))
///     .unwrap();
/// assert_eq!(path.len(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct PathPlanner {
    dims: GridDims,
    blocked: HashSet<CellCoord>,
}

impl PathPlanner {
    /// Creates a planner with every cell free.
    #[must_use]
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            blocked: HashSet::new(),
        }
    }

    /// Creates a planner with the given cells blocked.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::OutOfBounds`] if any obstacle lies outside
    /// the grid.
    pub fn with_obstacles(
        dims: GridDims,
        obstacles: impl IntoIterator<Item = CellCoord>,
    ) -> Result<Self, PlanError> {
        let mut planner = Self::new(dims);
        for cell in obstacles {
            planner.set_obstacle(cell)?;
        }
        Ok(planner)
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub const fn dims(&self) -> GridDims {
        self.dims
    }

    /// Marks a cell as blocked.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::OutOfBounds`] if the cell lies outside the
    /// grid; the obstacle set is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use warehouse_pathfind::PathPlanner;
    /// use wh_spatial::{CellCoord, GridDims};
    ///
    /// let mut planner = PathPlanner::new(GridDims::new(3, 3).unwrap());
    /// assert!(planner.set_obstacle(CellCoord::new(1, 1)).is_ok());
    /// assert!(planner.set_obstacle(CellCoord::new(3, 3)).is_err());
    /// ```
    pub fn set_obstacle(&mut self, cell: CellCoord) -> Result<(), PlanError> {
        if !self.dims.contains(cell) {
            return Err(PlanError::OutOfBounds { cell });
        }
        self.blocked.insert(cell);
        Ok(())
    }

    /// Resets every cell to free.
    pub fn clear_obstacles(&mut self) {
        self.blocked.clear();
    }

    /// Returns `true` if the cell is marked blocked.
    #[must_use]
    pub fn is_blocked(&self, cell: CellCoord) -> bool {
        self.blocked.contains(&cell)
    }

    /// Returns `true` if the cell is inside the grid and not blocked.
    #[must_use]
    pub fn is_free(&self, cell: CellCoord) -> bool {
        self.dims.contains(cell) && !self.blocked.contains(&cell)
    }

    /// Finds a shortest path from `start` to `goal`, inclusive of both.
    ///
    /// A path of length 1 when `start == goal`.
    ///
    /// # Errors
    ///
    /// - [`PlanError::StartBlocked`] / [`PlanError::GoalBlocked`] when
    ///   an endpoint is blocked or outside the grid
    /// - [`PlanError::NoPathFound`] when the free cells do not connect
    ///   the endpoints
    ///
    /// # Example
    ///
    /// ```
    /// use warehouse_pathfind::PathPlanner;
    /// use wh_spatial::{CellCoord, GridDims};
    ///
    /// let mut planner = PathPlanner::new(GridDims::new(3, 3).unwrap());
    /// // Wall off the middle column, leaving a gap at the bottom.
    /// planner.set_obstacle(CellCoord::new(0, 1)).unwrap();
    /// planner.set_obstacle(CellCoord::new(1, 1)).unwrap();
    ///
    /// let path = planner
    ///     .find_path(CellCoord::new(0, 0), CellCoord::new(0, 2))
    ///     .unwrap();
    /// assert!(path.contains(&CellCoord::new(2, 1)));
    /// ```
    pub fn find_path(
        &self,
        start: CellCoord,
        goal: CellCoord,
    ) -> Result<Vec<CellCoord>, PlanError> {
        if !self.is_free(start) {
            return Err(PlanError::StartBlocked { cell: start });
        }
        if !self.is_free(goal) {
            return Err(PlanError::GoalBlocked { cell: goal });
        }
        if start == goal {
            return Ok(vec![start]);
        }

        let result = astar(
            &start,
            |cell| {
                cell.orthogonal_neighbors()
                    .into_iter()
                    .filter(|n| self.is_free(*n))
                    .map(|n| (n, 1u32))
                    .collect::<Vec<_>>()
            },
            |cell| cell.manhattan_distance(goal),
            |cell| *cell == goal,
        );

        match result {
            Some((path, _cost)) => Ok(path),
            None => Err(PlanError::NoPathFound { start, goal }),
        }
    }
}
