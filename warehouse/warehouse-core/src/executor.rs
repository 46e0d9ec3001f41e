//! Multi-phase task execution for a single robot.
//!
//! A task moves one robot through fetch, pickup, delivery, and return.
//! The grid is replanned before every single-cell step, so obstacles
//! that appeared since assignment are honored. Every abort path leaves
//! the robot's and the item's claim flags cleared.

use tracing::{debug, warn};
use warehouse_pathfind::PathPlanner;
use warehouse_types::{ItemKey, Renderer, StatusReporter, TaskFailure, TravelPhase};
use wh_spatial::CellCoord;

use crate::warehouse::Warehouse;

/// Phase of a robot's task, in order of normal progression.
///
/// `Blocked` and `Aborted` are terminal failure phases: `Blocked` means
/// travel was cut off and the robot was redirected toward a rest cell,
/// `Aborted` means the task was cut short by a refused pickup or a
/// destination conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskPhase {
    /// No task assigned yet.
    Idle,
    /// Walking toward the item stack.
    MovingToItem,
    /// Transferring units onto the robot.
    PickingUp,
    /// Walking toward the destination, loaded.
    MovingToDestination,
    /// Goods deposited at the destination.
    Delivered,
    /// Walking off the destination to a rest cell.
    Returning,
    /// Travel cut off; redirected to rest.
    Blocked,
    /// Task ended by a refused pickup or a destination conflict.
    Aborted,
}

impl std::fmt::Display for TaskPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::MovingToItem => "moving to item",
            Self::PickingUp => "picking up",
            Self::MovingToDestination => "moving to destination",
            Self::Delivered => "delivered",
            Self::Returning => "returning",
            Self::Blocked => "blocked",
            Self::Aborted => "aborted",
        };
        f.write_str(label)
    }
}

/// Immutable facts about the stack being fetched, captured at
/// assignment time. The stack itself may shrink or vanish mid-task.
struct TargetItem {
    key: ItemKey,
    name: String,
    id: u32,
    position: CellCoord,
    unit_weight: u32,
}

/// Runs one assigned task to completion or failure.
///
/// The scheduler has already claimed both the robot and the item. On
/// every exit, success or not, both claims are released (the item's
/// only if its record still exists).
pub(crate) fn run_task(
    warehouse: &mut Warehouse,
    robot_index: usize,
    item_key: ItemKey,
    destination: CellCoord,
    quantity: u32,
    renderer: &mut dyn Renderer,
    reporter: &mut dyn StatusReporter,
) -> Result<(), TaskFailure> {
    let result = drive(
        warehouse,
        robot_index,
        item_key,
        destination,
        quantity,
        renderer,
        reporter,
    );
    release_claims(warehouse, robot_index, item_key);
    if let Err(failure) = &result {
        warn!(robot = %warehouse.robot_ref(robot_index).id(), %failure, "task failed");
    }
    result
}

fn drive(
    warehouse: &mut Warehouse,
    robot_index: usize,
    item_key: ItemKey,
    destination: CellCoord,
    quantity: u32,
    renderer: &mut dyn Renderer,
    reporter: &mut dyn StatusReporter,
) -> Result<(), TaskFailure> {
    let Some(record) = warehouse.item(item_key) else {
        return Ok(());
    };
    let target = TargetItem {
        key: item_key,
        name: record.name().to_owned(),
        id: record.id(),
        position: record.position(),
        unit_weight: record.unit_weight(),
    };
    let robot_id = warehouse.robot_ref(robot_index).id();

    {
        let robot = warehouse.robot_ref(robot_index);
        if !robot.can_carry(record, quantity) {
            transition(robot_id, TaskPhase::Idle, TaskPhase::Aborted);
            let load = u64::from(robot.current_load())
                + u64::from(target.unit_weight) * u64::from(quantity);
            return Err(TaskFailure::CapacityExceeded {
                load,
                capacity: robot.capacity(),
            });
        }
    }

    transition(robot_id, TaskPhase::Idle, TaskPhase::MovingToItem);
    // Fetch: walk onto the item's cell.
    loop {
        let position = warehouse.robot_ref(robot_index).position();
        if position == target.position {
            break;
        }
        if let Err(failure) = check_destination(warehouse, destination, &target) {
            transition(robot_id, TaskPhase::MovingToItem, TaskPhase::Aborted);
            return Err(failure);
        }
        let Some(path) = plan_leg(warehouse, robot_index, target.key, destination, target.position)
        else {
            reporter.report(&format!(
                "{robot_id} cannot reach {} at {}.",
                target.name, target.position
            ));
            return Err(TaskFailure::PathUnreachable {
                phase: TravelPhase::TowardItem,
            });
        };
        step(warehouse, robot_index, path[1], renderer);
    }

    // Before picking up, confirm the loaded leg is open. A robot
    // stranded here with goods aboard would deadlock the stack.
    if plan_leg(warehouse, robot_index, target.key, destination, destination).is_none() {
        transition(robot_id, TaskPhase::MovingToItem, TaskPhase::Blocked);
        reporter.report(&format!(
            "{robot_id} cannot reach destination {destination}. Redirecting to rest."
        ));
        go_to_rest(warehouse, robot_index, renderer, reporter)?;
        return Err(TaskFailure::PathUnreachable {
            phase: TravelPhase::TowardDestination,
        });
    }

    transition(robot_id, TaskPhase::MovingToItem, TaskPhase::PickingUp);
    pick_up(warehouse, robot_index, &target, quantity)?;
    reporter.report(&format!("{robot_id} picked up {}.", target.name));

    transition(robot_id, TaskPhase::PickingUp, TaskPhase::MovingToDestination);
    loop {
        let position = warehouse.robot_ref(robot_index).position();
        if position == destination {
            break;
        }
        if let Err(failure) = check_destination(warehouse, destination, &target) {
            transition(robot_id, TaskPhase::MovingToDestination, TaskPhase::Aborted);
            return Err(failure);
        }
        let Some(path) = plan_leg(warehouse, robot_index, target.key, destination, destination) else {
            transition(robot_id, TaskPhase::MovingToDestination, TaskPhase::Blocked);
            reporter.report(&format!(
                "{robot_id} cannot reach destination {destination}. Redirecting to rest."
            ));
            go_to_rest(warehouse, robot_index, renderer, reporter)?;
            return Err(TaskFailure::PathUnreachable {
                phase: TravelPhase::TowardDestination,
            });
        };
        step(warehouse, robot_index, path[1], renderer);
    }

    transition(robot_id, TaskPhase::MovingToDestination, TaskPhase::Delivered);
    warehouse.deposit(
        &target.name,
        target.id,
        destination,
        target.unit_weight,
        quantity,
    );
    warehouse.robot_mut(robot_index).release_load();
    reporter.report(&format!(
        "{robot_id} delivered {} to destination {destination}.",
        target.name
    ));

    transition(robot_id, TaskPhase::Delivered, TaskPhase::Returning);
    if vacate(warehouse, robot_index, renderer).is_none() {
        // Non-fatal: the delivery already happened, the robot just
        // stays parked on the destination.
        reporter.report(&format!("{robot_id} cannot find a valid rest position."));
    }
    Ok(())
}

/// Walks a conceding robot off a freshly selected destination cell.
///
/// Proceeds without error even when no rest cell exists or the walk is
/// cut off; the scheduler tolerates a still-occupied destination and
/// lets path planning around the occupant decide the rest.
pub(crate) fn concede(
    warehouse: &mut Warehouse,
    robot_index: usize,
    renderer: &mut dyn Renderer,
    reporter: &mut dyn StatusReporter,
) {
    let robot_id = warehouse.robot_ref(robot_index).id();
    debug!(robot = %robot_id, "conceding destination cell");
    if vacate(warehouse, robot_index, renderer).is_none() {
        reporter.report(&format!("{robot_id} cannot find a valid rest position."));
    }
}

/// Redirects a blocked robot toward the nearest rest cell.
fn go_to_rest(
    warehouse: &mut Warehouse,
    robot_index: usize,
    renderer: &mut dyn Renderer,
    reporter: &mut dyn StatusReporter,
) -> Result<(), TaskFailure> {
    let robot_id = warehouse.robot_ref(robot_index).id();
    match vacate(warehouse, robot_index, renderer) {
        Some(rest) => {
            reporter.report(&format!("{robot_id} moving to rest position {rest}."));
            Ok(())
        }
        None => {
            reporter.report(&format!("{robot_id} cannot find a valid rest position."));
            Err(TaskFailure::NoRestingCellAvailable)
        }
    }
}

/// Finds the nearest free cell and walks the robot there, one step at a
/// time. Returns the rest cell reached, or `None` when no free cell
/// exists or none is reachable.
fn vacate(
    warehouse: &mut Warehouse,
    robot_index: usize,
    renderer: &mut dyn Renderer,
) -> Option<CellCoord> {
    let start = warehouse.robot_ref(robot_index).position();
    let rest = warehouse_pathfind::nearest_free_cell(warehouse.dims(), start, |cell| {
        warehouse.cell_is_free(cell)
    })?;
    if rest == start {
        return Some(rest);
    }
    // The robot may share its cell with freshly delivered goods, so
    // its own cell is never treated as an obstacle.
    let planner = PathPlanner::with_obstacles(
        warehouse.dims(),
        warehouse
            .items()
            .map(|(_, item)| item.position())
            .chain(other_robot_cells(warehouse, robot_index))
            .filter(|cell| *cell != start),
    )
    .ok()?;
    let path = planner.find_path(start, rest).ok()?;
    for cell in path.into_iter().skip(1) {
        step(warehouse, robot_index, cell, renderer);
    }
    Some(rest)
}

/// Fails the task when goods that cannot merge with the cargo occupy
/// the destination cell.
fn check_destination(
    warehouse: &Warehouse,
    destination: CellCoord,
    target: &TargetItem,
) -> Result<(), TaskFailure> {
    match warehouse
        .items()
        .find(|(_, item)| item.position() == destination && item.name() != target.name)
    {
        Some((_, occupant)) => Err(TaskFailure::DestinationConflict {
            occupant: occupant.name().to_owned(),
        }),
        None => Ok(()),
    }
}

/// Plans one travel leg from the robot's current cell to `goal`.
///
/// Obstacles are every item stack except the target and except any
/// stack on the destination cell (goods there either merge with the
/// cargo or abort through the conflict check before planning), and
/// every other robot except those parked on the destination (the
/// scheduler asks those to concede, and deliveries must not route
/// around a cell they are about to leave).
fn plan_leg(
    warehouse: &Warehouse,
    robot_index: usize,
    target_key: ItemKey,
    destination: CellCoord,
    goal: CellCoord,
) -> Option<Vec<CellCoord>> {
    let items = warehouse
        .items()
        .filter(|(key, item)| *key != target_key && item.position() != destination)
        .map(|(_, item)| item.position());
    let robots = other_robot_cells(warehouse, robot_index).filter(|cell| *cell != destination);
    let planner = PathPlanner::with_obstacles(warehouse.dims(), items.chain(robots)).ok()?;
    let start = warehouse.robot_ref(robot_index).position();
    planner.find_path(start, goal).ok()
}

/// Returns `true` if the robot could walk to the item's cell right now,
/// under the same obstacle rules a real task would plan with.
pub(crate) fn trial_reachable(
    warehouse: &Warehouse,
    robot_index: usize,
    item_key: ItemKey,
    destination: CellCoord,
) -> bool {
    let Some(item) = warehouse.item(item_key) else {
        return false;
    };
    plan_leg(warehouse, robot_index, item_key, destination, item.position()).is_some()
}

fn other_robot_cells(
    warehouse: &Warehouse,
    robot_index: usize,
) -> impl Iterator<Item = CellCoord> + '_ {
    warehouse
        .robots()
        .iter()
        .enumerate()
        .filter(move |(index, _)| *index != robot_index)
        .map(|(_, robot)| robot.position())
}

fn pick_up(
    warehouse: &mut Warehouse,
    robot_index: usize,
    target: &TargetItem,
    quantity: u32,
) -> Result<(), TaskFailure> {
    let Some(record) = warehouse.item(target.key).cloned() else {
        return Ok(());
    };
    let robot = warehouse.robot_mut(robot_index);
    if !robot.pick_up(target.key, &record, quantity) {
        let load =
            u64::from(robot.current_load()) + u64::from(target.unit_weight) * u64::from(quantity);
        let capacity = robot.capacity();
        return Err(TaskFailure::CapacityExceeded { load, capacity });
    }
    let exhausted = warehouse
        .item_mut(target.key)
        .map(|item| {
            item.remove_stock(quantity);
            item.is_exhausted()
        })
        .unwrap_or(false);
    if exhausted {
        warehouse.remove_item(target.key);
    }
    Ok(())
}

fn step(warehouse: &mut Warehouse, robot_index: usize, next: CellCoord, renderer: &mut dyn Renderer) {
    let robot = warehouse.robot_mut(robot_index);
    robot.set_position(next);
    let id = robot.id();
    let speed = robot.speed();
    renderer.robot_moved(id, next);
    renderer.pace(speed);
}

fn release_claims(warehouse: &mut Warehouse, robot_index: usize, item_key: ItemKey) {
    warehouse.robot_mut(robot_index).release();
    if let Some(item) = warehouse.item_mut(item_key) {
        item.release();
    }
}

fn transition(robot: warehouse_types::RobotId, from: TaskPhase, to: TaskPhase) {
    debug!(%robot, %from, %to, "task phase");
}
