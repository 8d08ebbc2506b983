use twolink_core::{ArmConfig, ForwardKinematics, InverseKinematics, Point2D, Pose, Solution};

use crate::canvas::{Canvas, Paint};
use crate::status::Status;

/// Single iteration of the view: target, solution and resulting pose.
#[derive(Debug)]
pub struct Frame {
    pub target: Point2D,
    pub solution: Solution,
    pub pose: Pose,
}

impl Frame {
    /// Whether the target was out of reach.
    pub fn is_unreachable(&self) -> bool {
        self.solution.is_err()
    }

    /// Draw both links, the joint markers and the target.
    pub fn draw(&self, canvas: &mut Canvas) {
        canvas.clear();

        canvas.line(&self.pose.base, &self.pose.joint, Paint::Link1);
        canvas.line(&self.pose.joint, &self.pose.end_effector, Paint::Link2);

        canvas.marker(&self.target, '+', Paint::Target);
        canvas.marker(&self.pose.base, 'O', Paint::Marker);
        canvas.marker(&self.pose.joint, 'O', Paint::Marker);
        canvas.marker(&self.pose.end_effector, 'O', Paint::Marker);
    }

    pub fn status(&self) -> Status {
        Status::new(&self.target, &self.solution, &self.pose)
    }
}

/// Solver and projector for a fixed arm.
pub struct Kinematics {
    ik: InverseKinematics,
    fk: ForwardKinematics,
}

impl Kinematics {
    pub fn new(config: &ArmConfig) -> Self {
        Self {
            ik: InverseKinematics::new(config),
            fk: ForwardKinematics::new(config),
        }
    }

    /// Compute the frame for a target.
    pub fn frame(&self, target: Point2D) -> Frame {
        let solution = self.ik.solve(&target);
        let pose = self.fk.project(&solution);

        Frame {
            target,
            solution,
            pose,
        }
    }
}

/// Frame counters.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Total number of frames.
    pub frames: usize,
    /// Number of frames with the target out of reach.
    pub unreachable: usize,
}

impl Stats {
    pub fn record(&mut self, frame: &Frame) {
        self.frames += 1;
        if frame.is_unreachable() {
            self.unreachable += 1;
        }
    }

    /// Calculate the unreachable rate in percentage.
    pub fn unreachable_rate(&self) -> f64 {
        if self.frames > 0 {
            (self.unreachable as f64 / self.frames as f64) * 100.0
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Frames: {}, Out of reach: {} ({:.1}%)",
            self.frames,
            self.unreachable,
            self.unreachable_rate()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ScreenConfig, ViewConfig};

    #[test]
    fn draw_reachable_frame() {
        let kinematics = Kinematics::new(&ArmConfig::default());
        let mut canvas = Canvas::new(&ScreenConfig::default(), &ViewConfig::default());

        let frame = kinematics.frame(Point2D::new(600.0, 300.0));
        frame.draw(&mut canvas);

        assert!(!frame.is_unreachable());
        assert_eq!(canvas.get(40, 15).map(|g| g.ch), Some('O'));
        let (column, row) = canvas.cell_of(&frame.pose.joint);
        assert_eq!(canvas.get(column, row).map(|g| g.paint), Some(Paint::Marker));
    }

    #[test]
    fn draw_unreachable_frame() {
        let kinematics = Kinematics::new(&ArmConfig::default());
        let mut canvas = Canvas::new(&ScreenConfig::default(), &ViewConfig::default());

        let frame = kinematics.frame(Point2D::new(1000.0, 300.0));
        frame.draw(&mut canvas);

        assert!(frame.is_unreachable());
        assert!(frame.pose.is_retracted());
        assert_eq!(canvas.get(40, 15).map(|g| g.ch), Some('O'));
        assert_eq!(canvas.render(false).matches('O').count(), 1);
    }

    #[test]
    fn draw_oversized_arm() {
        for length in [1e12, 1e19] {
            let config = ArmConfig::new(length, length, Point2D::new(400.0, 300.0)).unwrap();
            let kinematics = Kinematics::new(&config);
            let mut canvas = Canvas::new(&ScreenConfig::default(), &ViewConfig::default());

            let frame = kinematics.frame(Point2D::new(400.0, 300.0 + length));
            frame.draw(&mut canvas);

            assert!(!frame.is_unreachable());
            assert_eq!(canvas.get(40, 15).map(|g| g.ch), Some('O'));
            assert_eq!(canvas.render(false).lines().count(), 30);
        }
    }

    #[test]
    fn record_stats() {
        let kinematics = Kinematics::new(&ArmConfig::default());
        let mut stats = Stats::default();

        stats.record(&kinematics.frame(Point2D::new(600.0, 300.0)));
        stats.record(&kinematics.frame(Point2D::new(1000.0, 300.0)));

        assert_eq!(
            stats,
            Stats {
                frames: 2,
                unreachable: 1
            }
        );
        assert_eq!(stats.unreachable_rate(), 50.0);
    }
}
