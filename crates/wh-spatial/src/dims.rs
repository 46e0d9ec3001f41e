//! Validated warehouse grid dimensions.

use crate::cell::CellCoord;
use crate::error::SpatialError;

/// Dimensions of a rectangular warehouse grid.
///
/// Valid cells satisfy `0 <= x < length` and `0 <= y < width`. Both
/// dimensions are strictly positive; the constructor rejects anything
/// else so a `GridDims` value is always a usable grid.
///
/// # Example
///
/// ```
/// use wh_spatial::{CellCoord, GridDims};
///
/// let dims = GridDims::new(20, 10).unwrap();
/// assert!(dims.contains(CellCoord::new(19, 9)));
/// assert!(!dims.contains(CellCoord::new(20, 0)));
/// assert!(!dims.contains(CellCoord::new(-1, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    length: u32,
    width: u32,
}

impl GridDims {
    /// Creates grid dimensions, rejecting zero on either axis.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::InvalidDimensions`] if `length` or
    /// `width` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use wh_spatial::GridDims;
    ///
    /// assert!(GridDims::new(5, 5).is_ok());
    /// assert!(GridDims::new(0, 5).is_err());
    /// ```
    pub const fn new(length: u32, width: u32) -> Result<Self, SpatialError> {
        if length == 0 || width == 0 {
            return Err(SpatialError::InvalidDimensions { length, width });
        }
        Ok(Self { length, width })
    }

    /// Returns the length (extent of the x axis).
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }

    /// Returns the width (extent of the y axis).
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the total number of cells in the grid.
    ///
    /// # Example
    ///
    /// ```
    /// use wh_spatial::GridDims;
    ///
    /// let dims = GridDims::new(20, 10).unwrap();
    /// assert_eq!(dims.cell_count(), 200);
    /// ```
    #[must_use]
    pub const fn cell_count(&self) -> u64 {
        self.length as u64 * self.width as u64
    }

    /// Returns `true` if the cell lies inside the grid.
    ///
    /// # Example
    ///
    /// ```
    /// use wh_spatial::{CellCoord, GridDims};
    ///
    /// let dims = GridDims::new(3, 3).unwrap();
    /// assert!(dims.contains(CellCoord::origin()));
    /// assert!(!dims.contains(CellCoord::new(3, 3)));
    /// ```
    #[must_use]
    pub const fn contains(&self, cell: CellCoord) -> bool {
        cell.x >= 0 && (cell.x as u32) < self.length && cell.y >= 0 && (cell.y as u32) < self.width
    }

    /// Checks bounds, returning the cell on success.
    ///
    /// # Errors
    ///
    /// Returns [`SpatialError::OutOfBounds`] if the cell lies outside
    /// the grid.
    ///
    /// # Example
    ///
    /// ```
    /// use wh_spatial::{CellCoord, GridDims};
    ///
    /// let dims = GridDims::new(3, 3).unwrap();
    /// assert!(dims.check(CellCoord::new(2, 2)).is_ok());
    /// assert!(dims.check(CellCoord::new(5, 0)).is_err());
    /// ```
    pub const fn check(&self, cell: CellCoord) -> Result<CellCoord, SpatialError> {
        if self.contains(cell) {
            Ok(cell)
        } else {
            Err(SpatialError::OutOfBounds { cell })
        }
    }
}

impl std::fmt::Display for GridDims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.length, self.width)
    }
}
