//! Item stacks stored in the warehouse.

use wh_spatial::CellCoord;

/// Warehouse-assigned identity of an item record.
///
/// Item names and user-facing ids are not unique (stacks of the same
/// good may exist in several cells), so the warehouse keys its item map
/// by this opaque handle and removes records explicitly when a stack is
/// exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemKey(u64);

impl ItemKey {
    /// Creates a key from its raw value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw key value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A stack of identical goods occupying one grid cell.
///
/// The total [`weight`](Item::weight) is derived state: every mutation
/// recomputes it as `quantity × unit_weight`. Two stacks may share a
/// cell only by merging, which requires equal name and unit weight.
///
/// # Example
///
/// ```
/// use warehouse_types::Item;
/// use wh_spatial::CellCoord;
///
/// let mut item = Item::new("box", 7, CellCoord::new(2, 3), 2, 5);
/// assert_eq!(item.weight(), 10);
///
/// item.add_stock(3);
/// assert_eq!(item.quantity(), 8);
/// assert_eq!(item.weight(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    id: u32,
    position: CellCoord,
    unit_weight: u32,
    quantity: u32,
    weight: u64,
    busy: bool,
}

impl Item {
    /// Creates a new item stack. The total weight is derived from the
    /// quantity and unit weight; the claim flag starts free.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id: u32,
        position: CellCoord,
        unit_weight: u32,
        quantity: u32,
    ) -> Self {
        let mut item = Self {
            name: name.into(),
            id,
            position,
            unit_weight,
            quantity,
            weight: 0,
            busy: false,
        };
        item.recompute_weight();
        item
    }

    /// Returns the item name (the merge key, not unique).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the user-facing id.
    #[must_use]
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Returns the cell this stack occupies.
    #[must_use]
    pub const fn position(&self) -> CellCoord {
        self.position
    }

    /// Returns the weight of a single unit in kilograms.
    #[must_use]
    pub const fn unit_weight(&self) -> u32 {
        self.unit_weight
    }

    /// Returns the number of units in the stack.
    #[must_use]
    pub const fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the total weight of the stack in kilograms.
    ///
    /// Always equals `quantity × unit_weight`.
    #[must_use]
    pub const fn weight(&self) -> u64 {
        self.weight
    }

    /// Returns `true` if the stack is claimed by an active task.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Claims the stack for a task.
    pub fn claim(&mut self) {
        self.busy = true;
    }

    /// Releases the stack for future assignment.
    pub fn release(&mut self) {
        self.busy = false;
    }

    /// Returns `true` if this stack merges with goods of the given name
    /// and unit weight.
    #[must_use]
    pub fn merges_with(&self, name: &str, unit_weight: u32) -> bool {
        self.name == name && self.unit_weight == unit_weight
    }

    /// Adds units to the stack, recomputing the total weight.
    pub fn add_stock(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_add(quantity);
        self.recompute_weight();
    }

    /// Removes units from the stack, recomputing the total weight.
    ///
    /// Removing more than the stack holds leaves it empty.
    pub fn remove_stock(&mut self, quantity: u32) {
        self.quantity = self.quantity.saturating_sub(quantity);
        self.recompute_weight();
    }

    /// Returns `true` once the stack holds no units; the warehouse
    /// removes such records.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.quantity == 0
    }

    fn recompute_weight(&mut self) {
        self.weight = u64::from(self.quantity) * u64::from(self.unit_weight);
    }
}
