//! Warehouse state: grid, items, robots, and the destination queue.

use std::collections::{BTreeMap, VecDeque};

use tracing::{debug, info};
use warehouse_types::{Item, ItemKey, Robot, RobotClass, RobotId};
use wh_spatial::{CellCoord, GridDims};

use crate::error::WarehouseError;

/// The complete in-memory state of one simulation run.
///
/// Items live in an identity-keyed map (merging and removal address a
/// record unambiguously); robots live in placement order and are never
/// removed; pending destinations form a FIFO queue consumed by
/// [`Warehouse::run_scheduler`](crate::Warehouse::run_scheduler).
///
/// # Example
///
/// ```
/// use warehouse_core::Warehouse;
/// use warehouse_types::RobotClass;
/// use wh_spatial::CellCoord;
///
/// let mut warehouse = Warehouse::new(20, 20).unwrap();
/// let key = warehouse
///     .place_item("box", 1, CellCoord::new(2, 2), 2, 3)
///     .unwrap();
/// assert_eq!(warehouse.item(key).unwrap().weight(), 6);
///
/// let id = warehouse
///     .place_robot(RobotClass::Mini, CellCoord::new(0, 0))
///     .unwrap();
/// assert_eq!(id.number, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Warehouse {
    dims: GridDims,
    items: BTreeMap<ItemKey, Item>,
    next_item_key: u64,
    robots: Vec<Robot>,
    pending: VecDeque<CellCoord>,
}

impl Warehouse {
    /// Creates a warehouse with the given grid dimensions.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either dimension is zero; nothing
    /// is constructed, so a prior configuration is untouched.
    pub fn new(length: u32, width: u32) -> Result<Self, WarehouseError> {
        let dims = GridDims::new(length, width)?;
        info!(%dims, "warehouse configured");
        Ok(Self {
            dims,
            items: BTreeMap::new(),
            next_item_key: 0,
            robots: Vec::new(),
            pending: VecDeque::new(),
        })
    }

    /// Returns the grid dimensions.
    #[must_use]
    pub const fn dims(&self) -> GridDims {
        self.dims
    }

    /// Places goods, merging into an existing stack where the rules
    /// allow.
    ///
    /// Merge-or-create semantics: the same position with the same name
    /// and unit weight merges quantities; the same position with a
    /// different name or weight is rejected; the same name elsewhere is
    /// accepted as a new stack only with the same unit weight.
    ///
    /// # Errors
    ///
    /// - out-of-bounds position or zero quantity (validation)
    /// - [`WarehouseError::CellOccupiedByItem`] /
    ///   [`WarehouseError::UnitWeightMismatch`] per the merge rules
    pub fn place_item(
        &mut self,
        name: &str,
        id: u32,
        position: CellCoord,
        unit_weight: u32,
        quantity: u32,
    ) -> Result<ItemKey, WarehouseError> {
        self.dims.check(position)?;
        if quantity == 0 {
            return Err(WarehouseError::InvalidQuantity);
        }

        if let Some((key, existing)) = self
            .items
            .iter_mut()
            .find(|(_, item)| item.position() == position)
        {
            if existing.name() != name {
                return Err(WarehouseError::CellOccupiedByItem {
                    position,
                    name: existing.name().to_owned(),
                });
            }
            if !existing.merges_with(name, unit_weight) {
                return Err(WarehouseError::UnitWeightMismatch {
                    name: name.to_owned(),
                });
            }
            existing.add_stock(quantity);
            info!(name, %position, quantity, total = existing.quantity(), "merged item stack");
            return Ok(*key);
        }

        // A name binds its unit weight warehouse-wide.
        if self
            .items
            .values()
            .any(|item| item.name() == name && item.unit_weight() != unit_weight)
        {
            return Err(WarehouseError::UnitWeightMismatch {
                name: name.to_owned(),
            });
        }

        let key = self.insert_item(Item::new(name, id, position, unit_weight, quantity));
        info!(name, %position, quantity, "placed item stack");
        Ok(key)
    }

    /// Places a robot of the given class.
    ///
    /// The assigned number is the count of that class already placed,
    /// plus one; numbers are never reused because robots are never
    /// removed.
    ///
    /// # Errors
    ///
    /// Out-of-bounds position (validation) or
    /// [`WarehouseError::CellOccupiedByRobot`] when any robot already
    /// occupies the cell.
    pub fn place_robot(
        &mut self,
        class: RobotClass,
        position: CellCoord,
    ) -> Result<RobotId, WarehouseError> {
        self.dims.check(position)?;
        if self.robots.iter().any(|robot| robot.position() == position) {
            return Err(WarehouseError::CellOccupiedByRobot { position });
        }
        let number = self.robots_of_class(class).count() as u32 + 1;
        let robot = Robot::new(class, number, position);
        let id = robot.id();
        self.robots.push(robot);
        info!(%id, %position, "placed robot");
        Ok(id)
    }

    /// Queues a destination for a later scheduler run.
    ///
    /// # Errors
    ///
    /// Rejected when the position is outside the grid.
    pub fn enqueue_destination(&mut self, position: CellCoord) -> Result<(), WarehouseError> {
        self.dims.check(position)?;
        self.pending.push_back(position);
        debug!(%position, queued = self.pending.len(), "destination enqueued");
        Ok(())
    }

    /// Returns all item records with their keys.
    pub fn items(&self) -> impl Iterator<Item = (ItemKey, &Item)> {
        self.items.iter().map(|(key, item)| (*key, item))
    }

    /// Returns one item record.
    #[must_use]
    pub fn item(&self, key: ItemKey) -> Option<&Item> {
        self.items.get(&key)
    }

    /// Returns the fleet in placement order.
    #[must_use]
    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    /// Returns the robots of one class.
    pub fn robots_of_class(&self, class: RobotClass) -> impl Iterator<Item = &Robot> {
        self.robots.iter().filter(move |robot| robot.class() == class)
    }

    /// Returns the pending destinations, front of the queue first.
    pub fn pending_destinations(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.pending.iter().copied()
    }

    /// Returns `true` if no item and no robot occupies the cell.
    #[must_use]
    pub fn cell_is_free(&self, cell: CellCoord) -> bool {
        self.items.values().all(|item| item.position() != cell)
            && self.robots.iter().all(|robot| robot.position() != cell)
    }

    pub(crate) fn pop_destination(&mut self) -> Option<CellCoord> {
        self.pending.pop_front()
    }

    pub(crate) fn item_mut(&mut self, key: ItemKey) -> Option<&mut Item> {
        self.items.get_mut(&key)
    }

    pub(crate) fn remove_item(&mut self, key: ItemKey) {
        self.items.remove(&key);
    }

    pub(crate) fn robot_ref(&self, index: usize) -> &Robot {
        &self.robots[index]
    }

    pub(crate) fn robot_mut(&mut self, index: usize) -> &mut Robot {
        &mut self.robots[index]
    }

    pub(crate) fn robot_count(&self) -> usize {
        self.robots.len()
    }

    fn insert_item(&mut self, item: Item) -> ItemKey {
        let key = ItemKey::new(self.next_item_key);
        self.next_item_key += 1;
        self.items.insert(key, item);
        key
    }

    /// Merges delivered goods into the stack at `position`, or creates
    /// a new record. The executor verifies no mismatched occupant is at
    /// the destination before it gets here.
    pub(crate) fn deposit(
        &mut self,
        name: &str,
        id: u32,
        position: CellCoord,
        unit_weight: u32,
        quantity: u32,
    ) {
        if let Some(existing) = self
            .items
            .values_mut()
            .find(|item| item.position() == position && item.merges_with(name, unit_weight))
        {
            existing.add_stock(quantity);
            debug!(name, %position, quantity, total = existing.quantity(), "merged delivery");
            return;
        }
        self.insert_item(Item::new(name, id, position, unit_weight, quantity));
        debug!(name, %position, quantity, "created delivered stack");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn warehouse() -> Warehouse {
        Warehouse::new(10, 10).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(Warehouse::new(0, 10).is_err());
        assert!(Warehouse::new(10, 0).is_err());
    }

    #[test]
    fn test_place_item_out_of_bounds() {
        let mut wh = warehouse();
        let result = wh.place_item("box", 1, CellCoord::new(10, 0), 1, 1);
        assert!(matches!(result, Err(WarehouseError::Spatial(_))));
        assert_eq!(wh.items().count(), 0);
    }

    #[test]
    fn test_place_item_zero_quantity() {
        let mut wh = warehouse();
        assert!(matches!(
            wh.place_item("box", 1, CellCoord::new(1, 1), 1, 0),
            Err(WarehouseError::InvalidQuantity)
        ));
    }

    #[test]
    fn test_place_item_merges_same_cell_same_goods() {
        let mut wh = warehouse();
        let first = wh.place_item("box", 1, CellCoord::new(1, 1), 2, 3).unwrap();
        let second = wh.place_item("box", 2, CellCoord::new(1, 1), 2, 4).unwrap();
        assert_eq!(first, second);
        let item = wh.item(first).unwrap();
        assert_eq!(item.quantity(), 7);
        assert_eq!(item.weight(), 14);
        assert_eq!(wh.items().count(), 1);
    }

    #[test]
    fn test_place_item_rejects_different_name_same_cell() {
        let mut wh = warehouse();
        wh.place_item("box", 1, CellCoord::new(1, 1), 2, 3).unwrap();
        assert!(matches!(
            wh.place_item("crate", 2, CellCoord::new(1, 1), 2, 3),
            Err(WarehouseError::CellOccupiedByItem { .. })
        ));
    }

    #[test]
    fn test_place_item_rejects_different_weight_same_cell() {
        let mut wh = warehouse();
        wh.place_item("box", 1, CellCoord::new(1, 1), 2, 3).unwrap();
        assert!(matches!(
            wh.place_item("box", 2, CellCoord::new(1, 1), 3, 3),
            Err(WarehouseError::UnitWeightMismatch { .. })
        ));
    }

    #[test]
    fn test_place_item_same_name_elsewhere_new_stack() {
        let mut wh = warehouse();
        let a = wh.place_item("box", 1, CellCoord::new(1, 1), 2, 3).unwrap();
        let b = wh.place_item("box", 2, CellCoord::new(2, 2), 2, 5).unwrap();
        assert_ne!(a, b);
        assert_eq!(wh.items().count(), 2);
    }

    #[test]
    fn test_place_item_same_name_elsewhere_weight_mismatch() {
        let mut wh = warehouse();
        wh.place_item("box", 1, CellCoord::new(1, 1), 2, 3).unwrap();
        assert!(matches!(
            wh.place_item("box", 2, CellCoord::new(5, 5), 9, 3),
            Err(WarehouseError::UnitWeightMismatch { .. })
        ));
    }

    #[test]
    fn test_place_robot_ids_count_per_class() {
        let mut wh = warehouse();
        let a = wh.place_robot(RobotClass::Standard, CellCoord::new(0, 0)).unwrap();
        let b = wh.place_robot(RobotClass::Standard, CellCoord::new(0, 1)).unwrap();
        let c = wh.place_robot(RobotClass::Large, CellCoord::new(0, 2)).unwrap();
        assert_eq!(a.number, 1);
        assert_eq!(b.number, 2);
        assert_eq!(c.number, 1);
        assert_eq!(wh.robots_of_class(RobotClass::Standard).count(), 2);
    }

    #[test]
    fn test_place_robot_occupied_cell() {
        let mut wh = warehouse();
        wh.place_robot(RobotClass::Standard, CellCoord::new(0, 0)).unwrap();
        assert!(matches!(
            wh.place_robot(RobotClass::Mini, CellCoord::new(0, 0)),
            Err(WarehouseError::CellOccupiedByRobot { .. })
        ));
    }

    #[test]
    fn test_enqueue_destination_bounds() {
        let mut wh = warehouse();
        assert!(wh.enqueue_destination(CellCoord::new(9, 9)).is_ok());
        assert!(wh.enqueue_destination(CellCoord::new(10, 0)).is_err());
        assert_eq!(wh.pending_destinations().count(), 1);
    }

    #[test]
    fn test_cell_is_free() {
        let mut wh = warehouse();
        wh.place_item("box", 1, CellCoord::new(1, 1), 1, 1).unwrap();
        wh.place_robot(RobotClass::Standard, CellCoord::new(2, 2)).unwrap();
        assert!(!wh.cell_is_free(CellCoord::new(1, 1)));
        assert!(!wh.cell_is_free(CellCoord::new(2, 2)));
        assert!(wh.cell_is_free(CellCoord::new(3, 3)));
    }

    #[test]
    fn test_deposit_merges_or_creates() {
        let mut wh = warehouse();
        wh.place_item("box", 1, CellCoord::new(1, 1), 2, 3).unwrap();
        wh.deposit("box", 1, CellCoord::new(1, 1), 2, 2);
        assert_eq!(wh.items().count(), 1);
        assert_eq!(wh.items().next().unwrap().1.quantity(), 5);

        wh.deposit("box", 1, CellCoord::new(4, 4), 2, 2);
        assert_eq!(wh.items().count(), 2);
    }
}
