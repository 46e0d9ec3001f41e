//! Greedy assignment of items and robots to one delivery request.

use tracing::{debug, info};
use warehouse_types::{DeliveryReport, ItemKey, Renderer, SchedulingError, StatusReporter};
use wh_spatial::CellCoord;

use crate::error::WarehouseError;
use crate::executor;
use crate::warehouse::Warehouse;

impl Warehouse {
    /// Fulfills one delivery request: move `quantity` units of the
    /// named goods to the front destination of the queue.
    ///
    /// The request is served greedily, one task at a time. Each round
    /// picks the unclaimed matching stack nearest to the fleet, then
    /// the nearest free robot that can carry the full requested
    /// quantity and can reach the stack, and runs the task through the
    /// executor. Rounds repeat until the request is filled, the stacks
    /// run out (a partial result), or a task fails.
    ///
    /// Scheduling failures do not bubble up as errors; they are
    /// recorded in the returned [`DeliveryReport`] so a caller can show
    /// partial progress. The destination is consumed even when the
    /// request fails.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::NoPendingDestination`] when the
    /// destination queue is empty; nothing else is an `Err`.
    pub fn run_scheduler(
        &mut self,
        item_name: &str,
        quantity: u32,
        renderer: &mut dyn Renderer,
        reporter: &mut dyn StatusReporter,
    ) -> Result<DeliveryReport, WarehouseError> {
        let Some(destination) = self.pop_destination() else {
            reporter.report("No destination available. Please add a destination.");
            return Err(WarehouseError::NoPendingDestination);
        };
        info!(item_name, quantity, %destination, "scheduling delivery request");

        if self.robot_count() == 0 {
            reporter.report(&format!(
                "No robot can carry the selected item: {item_name}."
            ));
            return Ok(DeliveryReport::new(
                quantity,
                0,
                Some(SchedulingError::NoCapableRobot {
                    name: item_name.to_owned(),
                }),
            ));
        }

        // A robot resting on the chosen destination vacates first.
        if let Some(index) =
            (0..self.robot_count()).find(|i| self.robot_ref(*i).position() == destination)
        {
            executor::concede(self, index, renderer, reporter);
        }

        if self.candidate_stacks(item_name, destination).is_empty() {
            reporter.report(&format!(
                "There are no valid items that can be moved to {destination}."
            ));
            return Ok(DeliveryReport::new(
                quantity,
                0,
                Some(SchedulingError::NoMatchingItem {
                    name: item_name.to_owned(),
                }),
            ));
        }

        if quantity == 0 {
            reporter.report("Please enter a valid quantity to move.");
            return Ok(DeliveryReport::new(
                quantity,
                0,
                Some(SchedulingError::InvalidQuantity),
            ));
        }

        let mut moved = 0u32;
        while moved < quantity {
            let mut candidates = self.candidate_stacks(item_name, destination);
            if candidates.is_empty() {
                reporter.report(&format!(
                    "Only quantity {moved} of item {quantity} can be moved."
                ));
                return Ok(DeliveryReport::new(quantity, moved, None));
            }

            // Ordered farthest-first, then the nearest stack is taken;
            // on ties the ordering above decides which stack wins.
            candidates
                .sort_by(|a, b| self.fleet_distance(*b).cmp(&self.fleet_distance(*a)));
            let Some(key) = candidates
                .iter()
                .copied()
                .min_by_key(|key| self.fleet_distance(*key))
            else {
                break;
            };
            let Some(stack) = self.item(key).cloned() else {
                break;
            };
            let pickup = (quantity - moved).min(stack.quantity());

            // Capacity is judged against the full requested quantity,
            // not this round's pickup.
            let mut capable: Vec<usize> = (0..self.robot_count())
                .filter(|i| {
                    let robot = self.robot_ref(*i);
                    !robot.is_busy() && robot.can_carry(&stack, quantity)
                })
                .collect();
            if capable.is_empty() {
                reporter.report(&format!(
                    "No robot can carry the selected item: {item_name}."
                ));
                return Ok(DeliveryReport::new(
                    quantity,
                    moved,
                    Some(SchedulingError::NoCapableRobot {
                        name: item_name.to_owned(),
                    }),
                ));
            }
            capable.sort_by_key(|i| {
                self.robot_ref(*i)
                    .position()
                    .manhattan_distance(stack.position())
            });

            let Some(robot_index) = capable
                .into_iter()
                .find(|i| executor::trial_reachable(self, *i, key, destination))
            else {
                reporter.report("No robot can reach the selected item due to obstacles.");
                return Ok(DeliveryReport::new(
                    quantity,
                    moved,
                    Some(SchedulingError::NoReachableRobot {
                        name: item_name.to_owned(),
                    }),
                ));
            };

            let robot_id = self.robot_ref(robot_index).id();
            reporter.report(&format!(
                "Task assigned to {robot_id} for item {item_name}."
            ));
            debug!(%robot_id, stack = key.raw(), pickup, "task assigned");
            self.robot_mut(robot_index).claim();
            if let Some(record) = self.item_mut(key) {
                record.claim();
            }

            if let Err(failure) =
                executor::run_task(self, robot_index, key, destination, pickup, renderer, reporter)
            {
                return Ok(DeliveryReport::new(quantity, moved, Some(failure.into())));
            }
            moved += pickup;
        }

        reporter.report(&format!(
            "Successfully moved quantity {moved} of item {item_name}."
        ));
        Ok(DeliveryReport::new(quantity, moved, None))
    }

    /// Unclaimed stacks of the requested goods, excluding any stack
    /// already sitting on the destination.
    fn candidate_stacks(&self, name: &str, destination: CellCoord) -> Vec<ItemKey> {
        self.items()
            .filter(|(_, item)| {
                item.name() == name && item.position() != destination && !item.is_busy()
            })
            .map(|(key, _)| key)
            .collect()
    }

    /// Distance from the stack to the nearest robot of the fleet.
    fn fleet_distance(&self, key: ItemKey) -> u32 {
        let Some(item) = self.item(key) else {
            return u32::MAX;
        };
        self.robots()
            .iter()
            .map(|robot| robot.position().manhattan_distance(item.position()))
            .min()
            .unwrap_or(u32::MAX)
    }
}
