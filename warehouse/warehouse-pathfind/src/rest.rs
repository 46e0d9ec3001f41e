//! Nearest-free-cell search for rest positions.

use pathfinding::prelude::bfs;
use wh_spatial::{CellCoord, GridDims};

/// Finds the cell nearest to `start` (by 4-connected breadth-first
/// order) that `is_free` accepts, or `None` if no cell in the grid
/// qualifies.
///
/// The search traverses the whole grid regardless of occupancy — the
/// predicate only decides the goal. Whether the returned cell can
/// actually be walked to is the caller's concern; robots path-plan to
/// it afterwards and handle failure there.
///
/// Returns `start` itself when it already qualifies.
///
/// # Example
///
/// ```
/// use warehouse_pathfind::nearest_free_cell;
/// use wh_spatial::{CellCoord, GridDims};
///
/// let dims = GridDims::new(3, 3).unwrap();
/// let occupied = [CellCoord::new(0, 0), CellCoord::new(0, 1)];
///
/// let rest = nearest_free_cell(dims, CellCoord::new(0, 0), |cell| {
///     !occupied.contains(&cell)
/// });
/// assert_eq!(rest, Some(CellCoord::new(1, 0)));
/// ```
pub fn nearest_free_cell(
    dims: GridDims,
    start: CellCoord,
    is_free: impl Fn(CellCoord) -> bool,
) -> Option<CellCoord> {
    if !dims.contains(start) {
        return None;
    }
    let found = bfs(
        &start,
        |cell| {
            cell.orthogonal_neighbors()
                .into_iter()
                .filter(|n| dims.contains(*n))
                .collect::<Vec<_>>()
        },
        |cell| is_free(*cell),
    )?;
    found.last().copied()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dims(length: u32, width: u32) -> GridDims {
        GridDims::new(length, width).unwrap()
    }

    #[test]
    fn test_start_already_free() {
        let rest = nearest_free_cell(dims(3, 3), CellCoord::new(1, 1), |_| true);
        assert_eq!(rest, Some(CellCoord::new(1, 1)));
    }

    #[test]
    fn test_finds_nearest_by_bfs_order() {
        let occupied = [
            CellCoord::new(1, 1),
            CellCoord::new(0, 1),
            CellCoord::new(2, 1),
            CellCoord::new(1, 0),
        ];
        let rest = nearest_free_cell(dims(3, 3), CellCoord::new(1, 1), |cell| {
            !occupied.contains(&cell)
        });
        // (1,2) is the first free cell in neighbor order.
        assert_eq!(rest, Some(CellCoord::new(1, 2)));
    }

    #[test]
    fn test_searches_past_occupied_cells() {
        // Every cell in column 0 and 1 is occupied; the search must
        // traverse them to reach column 2.
        let rest = nearest_free_cell(dims(3, 3), CellCoord::new(0, 0), |cell| cell.y == 2);
        assert_eq!(rest, Some(CellCoord::new(0, 2)));
    }

    #[test]
    fn test_fully_occupied_grid() {
        let rest = nearest_free_cell(dims(2, 2), CellCoord::new(0, 0), |_| false);
        assert_eq!(rest, None);
    }

    #[test]
    fn test_start_out_of_bounds() {
        let rest = nearest_free_cell(dims(2, 2), CellCoord::new(5, 5), |_| true);
        assert_eq!(rest, None);
    }
}
