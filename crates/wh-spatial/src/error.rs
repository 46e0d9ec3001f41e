//! Error types for spatial operations.

use crate::CellCoord;

/// Errors that can occur during spatial operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpatialError {
    /// The grid dimensions are invalid; both axes must be positive.
    #[error("invalid grid dimensions: {length}x{width}")]
    InvalidDimensions {
        /// Length dimension.
        length: u32,
        /// Width dimension.
        width: u32,
    },

    /// A cell is outside the grid.
    #[error("cell {cell} is out of bounds")]
    OutOfBounds {
        /// The cell that was out of bounds.
        cell: CellCoord,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_display() {
        let error = SpatialError::InvalidDimensions { length: 0, width: 5 };
        assert!(error.to_string().contains("0x5"));
    }

    #[test]
    fn test_out_of_bounds_display() {
        let error = SpatialError::OutOfBounds {
            cell: CellCoord::new(7, -1),
        };
        let msg = error.to_string();
        assert!(msg.contains("(7, -1)"));
        assert!(msg.contains("out of bounds"));
    }
}
