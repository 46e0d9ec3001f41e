//! Grid cell coordinate type.

/// A discrete 2D coordinate in warehouse grid space.
///
/// Uses `i32` coordinates so neighbor enumeration at the grid edge never
/// underflows; validity against a particular warehouse is decided by
/// [`GridDims::contains`](crate::GridDims::contains).
///
/// # Example
///
/// ```
/// use wh_spatial::CellCoord;
///
/// let cell = CellCoord::new(1, 2);
/// assert_eq!(cell.x, 1);
/// assert_eq!(cell.y, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoord {
    /// X coordinate (length axis, row).
    pub x: i32,
    /// Y coordinate (width axis, column).
    pub y: i32,
}

impl CellCoord {
    /// Creates a new cell coordinate.
    ///
    /// # Example
    ///
    /// ```
    /// use wh_spatial::CellCoord;
    ///
    /// let cell = CellCoord::new(10, 20);
    /// assert_eq!(cell.x, 10);
    /// ```
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a coordinate at the origin (0, 0).
    ///
    /// # Example
    ///
    /// ```
    /// use wh_spatial::CellCoord;
    ///
    /// assert_eq!(CellCoord::origin(), CellCoord::new(0, 0));
    /// ```
    #[must_use]
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Returns the coordinate as a tuple.
    ///
    /// # Example
    ///
    /// ```
    /// use wh_spatial::CellCoord;
    ///
    /// assert_eq!(CellCoord::new(1, 2).as_tuple(), (1, 2));
    /// ```
    #[must_use]
    pub const fn as_tuple(self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Computes the Manhattan distance to another cell.
    ///
    /// The Manhattan distance is the sum of the absolute coordinate
    /// differences: the exact step count of a shortest 4-connected walk
    /// on an obstacle-free grid.
    ///
    /// # Example
    ///
    /// ```
    /// use wh_spatial::CellCoord;
    ///
    /// let a = CellCoord::new(0, 0);
    /// let b = CellCoord::new(3, 4);
    /// assert_eq!(a.manhattan_distance(b), 7);
    /// ```
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.saturating_add(dy)
    }

    /// Returns the 4 edge-adjacent neighbors (von Neumann neighborhood).
    ///
    /// Order is up, down, left, right. Neighbors may lie outside any
    /// particular grid; callers filter with
    /// [`GridDims::contains`](crate::GridDims::contains).
    ///
    /// # Example
    ///
    /// ```
    /// use wh_spatial::CellCoord;
    ///
    /// let neighbors = CellCoord::new(0, 0).orthogonal_neighbors();
    /// assert_eq!(neighbors.len(), 4);
    /// assert!(neighbors.contains(&CellCoord::new(-1, 0)));
    /// assert!(neighbors.contains(&CellCoord::new(0, 1)));
    /// ```
    #[must_use]
    pub const fn orthogonal_neighbors(self) -> [Self; 4] {
        [
            Self::new(self.x.wrapping_sub(1), self.y),
            Self::new(self.x.wrapping_add(1), self.y),
            Self::new(self.x, self.y.wrapping_sub(1)),
            Self::new(self.x, self.y.wrapping_add(1)),
        ]
    }
}

impl From<(i32, i32)> for CellCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<[i32; 2]> for CellCoord {
    fn from([x, y]: [i32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<CellCoord> for (i32, i32) {
    fn from(cell: CellCoord) -> Self {
        cell.as_tuple()
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
