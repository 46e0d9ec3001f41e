//! Collaborator interfaces toward the presentation adapter.
//!
//! The core never holds ambient references to a display; the scheduler
//! and executor receive these traits as explicit arguments and call
//! them at every observable event boundary.

use wh_spatial::CellCoord;

use crate::robot::RobotId;

/// Consumes move events and controls pacing.
///
/// [`Renderer::robot_moved`] is called after every single-cell step, so
/// a settled view of the grid exists between any two calls. The
/// [`Renderer::pace`] hook lets the adapter slow playback in inverse
/// proportion to the robot's speed; the core itself is time-agnostic
/// and the default is a no-op.
pub trait Renderer {
    /// A robot advanced one cell to `position`.
    fn robot_moved(&mut self, robot: RobotId, position: CellCoord);

    /// Called after each step with the moving robot's speed in cells
    /// per second. Pacing only, never a correctness mechanism.
    fn pace(&mut self, speed: u32) {
        let _ = speed;
    }
}

/// Consumes status-text events from the scheduler and executor.
pub trait StatusReporter {
    /// A human-readable progress or failure message.
    fn report(&mut self, message: &str);
}

/// Headless runs and tests can pass `()` to discard moves.
impl Renderer for () {
    fn robot_moved(&mut self, _robot: RobotId, _position: CellCoord) {}
}

/// Headless runs and tests can pass `()` to discard status text.
impl StatusReporter for () {
    fn report(&mut self, _message: &str) {}
}

/// Collects every move, useful for asserting on trajectories in tests.
impl Renderer for Vec<(RobotId, CellCoord)> {
    fn robot_moved(&mut self, robot: RobotId, position: CellCoord) {
        self.push((robot, position));
    }
}

/// Collects status lines, useful for asserting on reports in tests.
impl StatusReporter for Vec<String> {
    fn report(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::RobotClass;

    #[test]
    fn test_vec_renderer_collects_moves() {
        let mut moves: Vec<(RobotId, CellCoord)> = Vec::new();
        let id = RobotId::new(RobotClass::Standard, 1);
        moves.robot_moved(id, CellCoord::new(0, 1));
        moves.robot_moved(id, CellCoord::new(0, 2));
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[1].1, CellCoord::new(0, 2));
    }

    #[test]
    fn test_vec_reporter_collects_lines() {
        let mut lines: Vec<String> = Vec::new();
        lines.report("picked up box");
        assert_eq!(lines, vec!["picked up box".to_owned()]);
    }

    #[test]
    fn test_unit_impls_discard() {
        let mut renderer = ();
        renderer.robot_moved(RobotId::new(RobotClass::Mini, 1), CellCoord::origin());
        renderer.pace(5);
        let mut reporter = ();
        reporter.report("ignored");
    }
}
