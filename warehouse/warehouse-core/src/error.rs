//! Error types for warehouse operations.
//!
//! These cover the validation class of failures: malformed input is
//! rejected immediately and the warehouse state is left unchanged.
//! Failures that abort a delivery request mid-flight are reported
//! through [`warehouse_types::SchedulingError`] inside the
//! [`DeliveryReport`](warehouse_types::DeliveryReport) instead.

use wh_spatial::{CellCoord, SpatialError};

/// Errors returned by the warehouse's external operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WarehouseError {
    /// Invalid grid dimensions or an out-of-bounds position.
    #[error(transparent)]
    Spatial(#[from] SpatialError),

    /// The cell already holds goods that do not merge with the new
    /// placement (different name).
    #[error("position {position} is already occupied by {name:?}")]
    CellOccupiedByItem {
        /// The contested cell.
        position: CellCoord,
        /// Name of the goods already there.
        name: String,
    },

    /// Goods of this name already exist with a different unit weight;
    /// stacks of one name must share a unit weight everywhere.
    #[error("unit weight differs from existing {name:?} stock")]
    UnitWeightMismatch {
        /// The item name.
        name: String,
    },

    /// A robot already occupies the cell.
    #[error("position {position} is already occupied by a robot")]
    CellOccupiedByRobot {
        /// The contested cell.
        position: CellCoord,
    },

    /// A placement quantity of zero was given.
    #[error("quantity must be positive")]
    InvalidQuantity,

    /// The destination queue is empty.
    #[error("no destination available")]
    NoPendingDestination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spatial_error_converts() {
        let error: WarehouseError = SpatialError::OutOfBounds {
            cell: CellCoord::new(9, 9),
        }
        .into();
        assert!(error.to_string().contains("out of bounds"));
    }

    #[test]
    fn test_occupied_display() {
        let error = WarehouseError::CellOccupiedByItem {
            position: CellCoord::new(1, 2),
            name: "box".to_owned(),
        };
        let msg = error.to_string();
        assert!(msg.contains("(1, 2)"));
        assert!(msg.contains("\"box\""));
    }

    #[test]
    fn test_no_pending_destination_display() {
        assert!(WarehouseError::NoPendingDestination
            .to_string()
            .contains("no destination"));
    }
}
