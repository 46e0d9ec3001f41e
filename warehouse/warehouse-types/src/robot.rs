//! Robots and their capability profiles.

use wh_spatial::CellCoord;

use crate::item::{Item, ItemKey};

/// Capability constants of a robot class.
///
/// Classes differ only in data, never in behavior, so the profile is a
/// plain record selected by [`RobotClass::profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapabilityProfile {
    /// Maximum total load in kilograms.
    pub capacity: u32,
    /// Movement speed in cells per second (pacing only).
    pub speed: u32,
    /// Maximum travel distance in cells per charge.
    pub max_travel_distance: u32,
}

/// The fixed set of robot variants.
///
/// # Example
///
/// ```
/// use warehouse_types::RobotClass;
///
/// assert_eq!(RobotClass::Large.profile().capacity, 30);
/// assert!(RobotClass::Mini.profile().speed > RobotClass::Large.profile().speed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RobotClass {
    /// General-purpose robot: 20 kg, 5 cells/s.
    Standard,
    /// High-capacity robot: 30 kg, slower at 2 cells/s.
    Large,
    /// Light robot: 10 kg, 5 cells/s.
    Mini,
}

impl RobotClass {
    /// All classes, in placement-menu order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Large, Self::Mini];

    /// Returns the capability profile of this class.
    #[must_use]
    pub const fn profile(self) -> CapabilityProfile {
        match self {
            Self::Standard => CapabilityProfile {
                capacity: 20,
                speed: 5,
                max_travel_distance: 5500,
            },
            Self::Large => CapabilityProfile {
                capacity: 30,
                speed: 2,
                max_travel_distance: 5000,
            },
            Self::Mini => CapabilityProfile {
                capacity: 10,
                speed: 5,
                max_travel_distance: 6000,
            },
        }
    }
}

impl std::fmt::Display for RobotClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Large => write!(f, "large"),
            Self::Mini => write!(f, "mini"),
        }
    }
}

/// Identity of a robot: its class plus a per-class number.
///
/// Numbers count up from 1 within each class and are never reused;
/// robots persist for the whole session.
///
/// # Example
///
/// ```
/// use warehouse_types::{RobotClass, RobotId};
///
/// let id = RobotId::new(RobotClass::Large, 2);
/// assert_eq!(id.to_string(), "large robot 2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotId {
    /// The robot's class.
    pub class: RobotClass,
    /// 1-based number within the class.
    pub number: u32,
}

impl RobotId {
    /// Creates a robot id.
    #[must_use]
    pub const fn new(class: RobotClass, number: u32) -> Self {
        Self { class, number }
    }
}

impl std::fmt::Display for RobotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} robot {}", self.class, self.number)
    }
}

/// A mobile agent that fetches and delivers item stacks.
///
/// Invariants: `current_load <= capacity` at all times (enforced by
/// [`Robot::pick_up`] refusing over-capacity loads), and at most one
/// active task per robot (enforced by the claim flag).
///
/// # Example
///
/// ```
/// use warehouse_types::{Item, ItemKey, Robot, RobotClass};
/// use wh_spatial::CellCoord;
///
/// let heavy = Item::new("anvil", 1, CellCoord::new(1, 1), 25, 1);
/// let mut robot = Robot::new(RobotClass::Standard, 1, CellCoord::origin());
///
/// assert!(!robot.can_carry(&heavy, 1));
/// assert!(!robot.pick_up(ItemKey::new(0), &heavy, 1));
/// assert_eq!(robot.current_load(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot {
    id: RobotId,
    position: CellCoord,
    current_load: u32,
    carried: Vec<ItemKey>,
    busy: bool,
}

impl Robot {
    /// Creates an idle, empty robot of the given class.
    #[must_use]
    pub const fn new(class: RobotClass, number: u32, position: CellCoord) -> Self {
        Self {
            id: RobotId::new(class, number),
            position,
            current_load: 0,
            carried: Vec::new(),
            busy: false,
        }
    }

    /// Returns the robot's identity.
    #[must_use]
    pub const fn id(&self) -> RobotId {
        self.id
    }

    /// Returns the robot's class.
    #[must_use]
    pub const fn class(&self) -> RobotClass {
        self.id.class
    }

    /// Returns the capability profile of the robot's class.
    #[must_use]
    pub const fn profile(&self) -> CapabilityProfile {
        self.id.class.profile()
    }

    /// Returns the maximum total load in kilograms.
    #[must_use]
    pub const fn capacity(&self) -> u32 {
        self.profile().capacity
    }

    /// Returns the movement speed in cells per second.
    #[must_use]
    pub const fn speed(&self) -> u32 {
        self.profile().speed
    }

    /// Returns the current cell.
    #[must_use]
    pub const fn position(&self) -> CellCoord {
        self.position
    }

    /// Moves the robot to a cell. One call per single-cell step.
    pub fn set_position(&mut self, position: CellCoord) {
        self.position = position;
    }

    /// Returns the current load in kilograms.
    #[must_use]
    pub const fn current_load(&self) -> u32 {
        self.current_load
    }

    /// Returns the keys of the item stacks the robot picked from.
    #[must_use]
    pub fn carried_items(&self) -> &[ItemKey] {
        &self.carried
    }

    /// Returns `true` if the robot is claimed by an active task.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.busy
    }

    /// Claims the robot for a task.
    pub fn claim(&mut self) {
        self.busy = true;
    }

    /// Releases the robot for future assignment.
    pub fn release(&mut self) {
        self.busy = false;
    }

    /// Returns `true` if `quantity` units of `item` fit on top of the
    /// current load.
    #[must_use]
    pub fn can_carry(&self, item: &Item, quantity: u32) -> bool {
        let added = u64::from(item.unit_weight()) * u64::from(quantity);
        added + u64::from(self.current_load) <= u64::from(self.capacity())
    }

    /// Picks up `quantity` units of `item`.
    ///
    /// Succeeds and updates the load only when [`Robot::can_carry`]
    /// holds; otherwise returns `false` with no side effects.
    #[must_use]
    pub fn pick_up(&mut self, key: ItemKey, item: &Item, quantity: u32) -> bool {
        if !self.can_carry(item, quantity) {
            return false;
        }
        // can_carry bounds the sum by capacity, which is u32
        self.current_load += item.unit_weight() * quantity;
        self.carried.push(key);
        true
    }

    /// Empties the load and carried set after a delivery.
    pub fn release_load(&mut self) {
        self.current_load = 0;
        self.carried.clear();
    }
}
