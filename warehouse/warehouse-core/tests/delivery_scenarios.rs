//! End-to-end delivery scenarios through the public warehouse API.

use warehouse_core::{Warehouse, WarehouseError};
use warehouse_types::{RobotClass, RobotId, SchedulingError, TaskFailure, TravelPhase};
use wh_spatial::CellCoord;

fn cell(x: i32, y: i32) -> CellCoord {
    CellCoord::new(x, y)
}

#[test]
fn full_delivery_reports_every_step() {
    let mut warehouse = Warehouse::new(5, 5).unwrap();
    warehouse.place_item("box", 1, cell(1, 1), 1, 5).unwrap();
    warehouse
        .place_robot(RobotClass::Standard, cell(0, 0))
        .unwrap();
    warehouse.enqueue_destination(cell(3, 3)).unwrap();

    let mut moves: Vec<(RobotId, CellCoord)> = Vec::new();
    let mut status: Vec<String> = Vec::new();
    let report = warehouse
        .run_scheduler("box", 5, &mut moves, &mut status)
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.moved(), 5);

    // The stack moved wholesale to the destination.
    let delivered = warehouse
        .items()
        .find(|(_, item)| item.position() == cell(3, 3))
        .expect("delivered stack")
        .1;
    assert_eq!(delivered.quantity(), 5);
    assert_eq!(delivered.weight(), 5);
    assert!(warehouse
        .items()
        .all(|(_, item)| item.position() != cell(1, 1)));

    // The robot parked off the destination, idle and empty.
    let robot = &warehouse.robots()[0];
    assert_ne!(robot.position(), cell(3, 3));
    assert!(!robot.is_busy());
    assert_eq!(robot.current_load(), 0);

    // Every move is a single orthogonal step.
    assert!(moves
        .windows(2)
        .all(|pair| pair[0].1.manhattan_distance(pair[1].1) == 1));
    assert!(status.iter().any(|line| line.contains("Task assigned")));
    assert!(status.iter().any(|line| line.contains("picked up box")));
    assert!(status
        .iter()
        .any(|line| line.contains("Successfully moved quantity 5")));
    assert_eq!(warehouse.pending_destinations().count(), 0);
}

#[test]
fn walled_off_item_leaves_the_grid_untouched() {
    // The destination corner is sealed by a wall that the target item
    // itself is part of, so no robot can even reach the item.
    let mut warehouse = Warehouse::new(5, 5).unwrap();
    warehouse.place_item("brick", 1, cell(3, 3), 1, 1).unwrap();
    warehouse.place_item("brick", 2, cell(4, 2), 1, 1).unwrap();
    warehouse.place_item("brick", 3, cell(3, 4), 1, 1).unwrap();
    warehouse.place_item("box", 4, cell(4, 3), 1, 1).unwrap();
    warehouse
        .place_robot(RobotClass::Standard, cell(0, 0))
        .unwrap();
    warehouse.enqueue_destination(cell(4, 4)).unwrap();

    let mut moves: Vec<(RobotId, CellCoord)> = Vec::new();
    let mut status: Vec<String> = Vec::new();
    let report = warehouse
        .run_scheduler("box", 1, &mut moves, &mut status)
        .unwrap();

    assert_eq!(report.moved(), 0);
    assert!(matches!(
        report.failure(),
        Some(SchedulingError::NoReachableRobot { .. })
    ));
    assert!(status
        .iter()
        .any(|line| line.contains("due to obstacles")));

    // Nothing moved and nothing stayed claimed.
    assert!(moves.is_empty());
    assert_eq!(warehouse.robots()[0].position(), cell(0, 0));
    assert!(warehouse.items().all(|(_, item)| !item.is_busy()));
    assert!(warehouse.robots().iter().all(|robot| !robot.is_busy()));
}

#[test]
fn delivery_merges_into_existing_stack_at_destination() {
    // A same-name, same-unit-weight stack already on the destination is
    // not an obstacle: the robot walks onto it and the quantities merge.
    let mut warehouse = Warehouse::new(5, 5).unwrap();
    warehouse.place_item("box", 1, cell(4, 4), 1, 2).unwrap();
    warehouse.place_item("box", 2, cell(1, 1), 1, 3).unwrap();
    warehouse
        .place_robot(RobotClass::Standard, cell(0, 0))
        .unwrap();
    warehouse.enqueue_destination(cell(4, 4)).unwrap();

    let report = warehouse.run_scheduler("box", 3, &mut (), &mut ()).unwrap();

    assert!(report.is_complete());
    assert_eq!(report.moved(), 3);
    // One record at the destination holds the combined stock.
    let at_destination: Vec<_> = warehouse
        .items()
        .filter(|(_, item)| item.position() == cell(4, 4))
        .collect();
    assert_eq!(at_destination.len(), 1);
    assert_eq!(at_destination[0].1.quantity(), 5);
    assert_eq!(at_destination[0].1.weight(), 5);
    // The drained source record is gone.
    assert!(warehouse
        .items()
        .all(|(_, item)| item.position() != cell(1, 1)));
}

#[test]
fn conflicting_goods_at_destination_abort_before_movement() {
    let mut warehouse = Warehouse::new(6, 6).unwrap();
    warehouse.place_item("box", 1, cell(2, 2), 1, 3).unwrap();
    warehouse.place_item("crate", 2, cell(4, 4), 1, 1).unwrap();
    warehouse
        .place_robot(RobotClass::Standard, cell(0, 0))
        .unwrap();
    warehouse.enqueue_destination(cell(4, 4)).unwrap();

    let report = warehouse.run_scheduler("box", 3, &mut (), &mut ()).unwrap();

    assert_eq!(report.moved(), 0);
    assert!(matches!(
        report.failure(),
        Some(SchedulingError::Task(TaskFailure::DestinationConflict { occupant }))
            if occupant == "crate"
    ));
    assert_eq!(warehouse.robots()[0].position(), cell(0, 0));
    assert_eq!(
        warehouse
            .items()
            .find(|(_, item)| item.name() == "box")
            .unwrap()
            .1
            .quantity(),
        3
    );
}

#[test]
fn blocked_delivery_leg_redirects_to_rest() {
    // The item is reachable but the destination corner is sealed, so
    // the failure surfaces after the fetch leg and the robot vacates
    // the item's cell instead of standing on the stock.
    let mut warehouse = Warehouse::new(6, 6).unwrap();
    warehouse.place_item("box", 1, cell(1, 1), 1, 2).unwrap();
    warehouse.place_item("brick", 2, cell(4, 5), 1, 1).unwrap();
    warehouse.place_item("brick", 3, cell(5, 4), 1, 1).unwrap();
    warehouse
        .place_robot(RobotClass::Standard, cell(0, 0))
        .unwrap();
    warehouse.enqueue_destination(cell(5, 5)).unwrap();

    let mut status: Vec<String> = Vec::new();
    let report = warehouse
        .run_scheduler("box", 2, &mut (), &mut status)
        .unwrap();

    assert_eq!(report.moved(), 0);
    assert!(matches!(
        report.failure(),
        Some(SchedulingError::Task(TaskFailure::PathUnreachable {
            phase: TravelPhase::TowardDestination,
        }))
    ));
    // Nothing was picked up and the stock is intact.
    let stack = warehouse
        .items()
        .find(|(_, item)| item.name() == "box")
        .unwrap()
        .1;
    assert_eq!(stack.quantity(), 2);
    assert!(!stack.is_busy());
    assert!(status.iter().any(|line| line.contains("Redirecting to rest")));
    assert!(status
        .iter()
        .any(|line| line.contains("moving to rest position")));
    // The robot rests somewhere free rather than on the stack.
    let robot = &warehouse.robots()[0];
    assert_ne!(robot.position(), cell(1, 1));
    assert!(!robot.is_busy());
}

#[test]
fn resting_robot_concedes_the_destination() {
    let mut warehouse = Warehouse::new(8, 8).unwrap();
    warehouse.place_item("box", 1, cell(1, 1), 1, 2).unwrap();
    warehouse
        .place_robot(RobotClass::Standard, cell(0, 0))
        .unwrap();
    warehouse.place_robot(RobotClass::Mini, cell(5, 5)).unwrap();
    warehouse.enqueue_destination(cell(5, 5)).unwrap();

    let report = warehouse.run_scheduler("box", 2, &mut (), &mut ()).unwrap();

    assert!(report.is_complete());
    assert_ne!(warehouse.robots()[1].position(), cell(5, 5));
    let delivered = warehouse
        .items()
        .find(|(_, item)| item.position() == cell(5, 5))
        .unwrap()
        .1;
    assert_eq!(delivered.quantity(), 2);
}

#[test]
fn destinations_are_consumed_in_fifo_order() {
    let mut warehouse = Warehouse::new(8, 8).unwrap();
    warehouse.place_item("box", 1, cell(1, 1), 1, 10).unwrap();
    warehouse
        .place_robot(RobotClass::Large, cell(0, 0))
        .unwrap();
    warehouse.enqueue_destination(cell(6, 1)).unwrap();
    warehouse.enqueue_destination(cell(1, 6)).unwrap();

    let first = warehouse.run_scheduler("box", 4, &mut (), &mut ()).unwrap();
    assert!(first.is_complete());
    assert!(warehouse
        .items()
        .any(|(_, item)| item.position() == cell(6, 1) && item.quantity() == 4));

    let second = warehouse.run_scheduler("box", 3, &mut (), &mut ()).unwrap();
    assert!(second.is_complete());
    assert!(warehouse
        .items()
        .any(|(_, item)| item.position() == cell(1, 6) && item.quantity() == 3));

    // Queue exhausted: a third request fails fast.
    assert!(matches!(
        warehouse.run_scheduler("box", 1, &mut (), &mut ()),
        Err(WarehouseError::NoPendingDestination)
    ));
}

#[test]
fn heavy_goods_go_to_the_large_robot() {
    let mut warehouse = Warehouse::new(8, 8).unwrap();
    // 25 kg in one trip: only the large class can take it, even though
    // the mini robot sits right next to the stack.
    warehouse.place_item("anvil", 1, cell(4, 4), 5, 5).unwrap();
    warehouse.place_robot(RobotClass::Mini, cell(4, 3)).unwrap();
    warehouse
        .place_robot(RobotClass::Large, cell(0, 0))
        .unwrap();
    warehouse.enqueue_destination(cell(7, 7)).unwrap();

    let report = warehouse
        .run_scheduler("anvil", 5, &mut (), &mut ())
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(warehouse.robots()[0].position(), cell(4, 3));
    assert!(warehouse
        .items()
        .any(|(_, item)| item.position() == cell(7, 7) && item.weight() == 25));
}
